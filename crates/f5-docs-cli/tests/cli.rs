//! End-to-end tests for the `f5` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `f5` running inside `dir`, isolated from the user's global config.
fn f5(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("f5").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ── meta ──────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_docs_commands() {
    let temp = TempDir::new().unwrap();
    f5(temp.path())
        .args(["docs", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    f5(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── docs init ─────────────────────────────────────────────────────────────────

#[test]
fn init_creates_structure() {
    let temp = TempDir::new().unwrap();

    f5(temp.path())
        .args(["docs", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation structure created"));

    let docs = temp.path().join(".f5/docs");
    for section in ["entities", "modules", "api", "screens", "versions"] {
        assert!(docs.join(section).is_dir(), "{section} missing");
    }
    let readme = fs::read_to_string(docs.join("README.md")).unwrap();
    assert!(!readme.contains("{{"));
}

#[test]
fn init_twice_warns_and_keeps_readme() {
    let temp = TempDir::new().unwrap();
    f5(temp.path()).args(["docs", "init"]).assert().success();

    let readme = temp.path().join(".f5/docs/README.md");
    fs::write(&readme, "hand edited").unwrap();

    f5(temp.path())
        .args(["docs", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&readme).unwrap(), "hand edited");
}

#[test]
fn init_force_rewrites_readme() {
    let temp = TempDir::new().unwrap();
    f5(temp.path()).args(["docs", "init"]).assert().success();

    let readme = temp.path().join(".f5/docs/README.md");
    fs::write(&readme, "hand edited").unwrap();

    f5(temp.path())
        .args(["docs", "init", "--force"])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&readme).unwrap(), "hand edited");
}

#[test]
fn init_in_vietnamese() {
    let temp = TempDir::new().unwrap();
    f5(temp.path())
        .args(["docs", "init", "--lang", "vi"])
        .assert()
        .success();

    let readme = fs::read_to_string(temp.path().join(".f5/docs/README.md")).unwrap();
    assert!(readme.contains("Tài liệu"));
}

#[test]
fn init_uses_project_template_override() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".f5/templates/readme");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("default.md"), "# Custom {{PROJECT_NAME}}\n").unwrap();
    fs::write(temp.path().join(".f5/config.toml"), "[project]\nname = \"shop\"\n").unwrap();

    f5(temp.path()).args(["docs", "init"]).assert().success();

    let readme = fs::read_to_string(temp.path().join(".f5/docs/README.md")).unwrap();
    assert_eq!(readme, "# Custom shop\n");
}

// ── docs analyze ──────────────────────────────────────────────────────────────

#[test]
fn analyze_dry_run_prints_plan_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("artisan"), "").unwrap();

    f5(temp.path())
        .args(["docs", "analyze", "--dry-run", "--module", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker file 'artisan'"))
        .stdout(predicate::str::contains("modules: billing"))
        .stdout(predicate::str::contains("prompts/laravel"));

    assert!(!temp.path().join(".f5").exists());
}

#[test]
fn analyze_dry_run_as_json() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("manage.py"), "").unwrap();

    let assert = f5(temp.path())
        .args(["--output-format", "json", "docs", "analyze", "--dry-run"])
        .assert()
        .success();

    let plan: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(plan["framework"], "django");
    assert_eq!(plan["detected_by"]["marker"], "manage.py");
}

#[test]
fn analyze_prints_prompt_even_when_quiet() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example.com/app\n").unwrap();

    f5(temp.path())
        .args(["--quiet", "docs", "analyze", "--entity", "Order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entities: Order"))
        .stdout(predicate::str::contains("{{").not());
}

#[test]
fn analyze_with_custom_prompt_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("prompt.md"),
        "Document {{FRAMEWORK}} code in {{OUTPUT_DIR}}\n",
    )
    .unwrap();

    f5(temp.path())
        .args([
            "docs",
            "analyze",
            "--framework",
            "nestjs",
            "--prompt",
            "prompt.md",
            "--output",
            "docs/out",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document NestJS code in docs/out"));
}

// ── docs version ──────────────────────────────────────────────────────────────

#[test]
fn version_writes_changelog() {
    let temp = TempDir::new().unwrap();

    f5(temp.path())
        .args(["docs", "version", "v2.0", "--from", "v1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".f5/docs/versions/v2.0.md"));

    let changelog =
        fs::read_to_string(temp.path().join(".f5/docs/versions/v2.0.md")).unwrap();
    assert!(changelog.contains("v2.0"));
    assert!(changelog.contains("v1.0"));
    assert!(!changelog.contains("{{"));
}

#[test]
fn version_without_git_repo_still_succeeds() {
    let temp = TempDir::new().unwrap();

    f5(temp.path())
        .args(["docs", "version", "phase-2", "--git-analysis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Git analysis unavailable"));

    let changelog =
        fs::read_to_string(temp.path().join(".f5/docs/versions/phase-2.md")).unwrap();
    assert!(changelog.contains("Git analysis unavailable"));
}

#[test]
fn version_json_reports_commits_as_null_without_git() {
    let temp = TempDir::new().unwrap();

    let assert = f5(temp.path())
        .args(["--output-format", "json", "docs", "version", "v1", "--git-analysis"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["label"], "v1");
    assert!(report["commits"].is_null());
}

#[test]
fn version_custom_output_and_template() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("release.md"), "Release {{VERSION}} of {{PROJECT_NAME}}\n").unwrap();
    fs::create_dir_all(temp.path().join(".f5")).unwrap();
    fs::write(temp.path().join(".f5/config.toml"), "[project]\nname = \"shop\"\n").unwrap();

    f5(temp.path())
        .args([
            "docs",
            "version",
            "v3",
            "--template",
            "release.md",
            "--output",
            "CHANGELOG.md",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("CHANGELOG.md")).unwrap(),
        "Release v3 of shop\n"
    );
}

// ── templates / config / completions ──────────────────────────────────────────

#[test]
fn templates_lists_builtins() {
    let temp = TempDir::new().unwrap();
    f5(temp.path())
        .args(["docs", "templates", "--kind", "prompts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prompts/laravel"))
        .stdout(predicate::str::contains("prompts/generic"))
        .stdout(predicate::str::contains("readme/").not());
}

#[test]
fn config_get_reads_project_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".f5")).unwrap();
    fs::write(temp.path().join(".f5/config.toml"), "[docs]\nlanguage = \"ja\"\n").unwrap();

    f5(temp.path())
        .args(["config", "get", "docs.language"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ja\n"));
}

#[test]
fn config_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    f5(temp.path())
        .env("F5_DOCS__TEMPLATE", "minimal")
        .args(["config", "get", "docs.template"])
        .assert()
        .success()
        .stdout(predicate::str::diff("minimal\n"));
}

#[test]
fn config_init_writes_project_file() {
    let temp = TempDir::new().unwrap();

    f5(temp.path()).args(["config", "init"]).assert().success();

    let text = fs::read_to_string(temp.path().join(".f5/config.toml")).unwrap();
    assert!(text.contains("[docs]"));

    f5(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    f5(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("f5"));
}
