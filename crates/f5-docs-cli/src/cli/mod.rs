//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use f5_docs_core::domain::TemplateKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "f5",
    bin_name = "f5",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "F5 project documentation workflow",
    long_about = "f5 docs scaffolds a .f5/docs/ workspace, prints framework-aware \
                  prompts for an AI assistant, and writes git-aware changelogs.",
    after_help = "EXAMPLES:\n\
        \x20 f5 docs init --lang vi\n\
        \x20 f5 docs analyze --module billing | pbcopy\n\
        \x20 f5 docs version v2.0 --from v1.0 --git-analysis\n\
        \x20 f5 completions bash > /usr/share/bash-completion/completions/f5",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project documentation commands.
    #[command(subcommand, about = "Documentation workspace, prompts and changelogs")]
    Docs(DocsCommands),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 f5 completions bash > ~/.local/share/bash-completion/completions/f5\n\
            \x20 f5 completions zsh  > ~/.zfunc/_f5\n\
            \x20 f5 completions fish > ~/.config/fish/completions/f5.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 f5 config get docs.language\n\
            \x20 f5 config list\n\
            \x20 f5 config init --global"
    )]
    Config(ConfigCommands),
}

/// Subcommands of `f5 docs`.
#[derive(Debug, Subcommand)]
pub enum DocsCommands {
    #[command(
        about = "Create the .f5/docs/ structure and README",
        after_help = "EXAMPLES:\n\
            \x20 f5 docs init\n\
            \x20 f5 docs init --template minimal\n\
            \x20 f5 docs init --lang ja --force"
    )]
    Init(DocsInitArgs),

    #[command(
        about = "Detect the framework and print an analysis prompt",
        after_help = "EXAMPLES:\n\
            \x20 f5 docs analyze\n\
            \x20 f5 docs analyze --module orders --entity Order --entity Invoice\n\
            \x20 f5 docs analyze --framework django --dry-run"
    )]
    Analyze(AnalyzeArgs),

    #[command(
        about = "Write a changelog for a version or phase",
        after_help = "EXAMPLES:\n\
            \x20 f5 docs version phase-2\n\
            \x20 f5 docs version v2.0 --from v1.0 --git-analysis\n\
            \x20 f5 docs version v2.0 --template release.md --output CHANGELOG-v2.md"
    )]
    Version(VersionArgs),

    #[command(visible_alias = "ls", about = "List available templates")]
    Templates(TemplatesArgs),
}

// ── docs init ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DocsInitArgs {
    /// Rewrite the README even if `.f5/docs/` already exists.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing structure")]
    pub force: bool,

    /// README template name. Defaults to `docs.template` from config.
    #[arg(
        short = 't',
        long = "template",
        value_name = "NAME",
        help = "README template name (see `f5 docs templates`)"
    )]
    pub template: Option<String>,

    /// Documentation language code. Defaults to `docs.language` from config.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "CODE",
        help = "Documentation language (en, vi, ja)"
    )]
    pub lang: Option<String>,
}

// ── docs analyze ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(
        short = 'm',
        long = "module",
        value_name = "NAME",
        help = "Limit analysis to a module (repeatable)"
    )]
    pub modules: Vec<String>,

    #[arg(
        short = 'e',
        long = "entity",
        value_name = "NAME",
        help = "Limit analysis to an entity (repeatable)"
    )]
    pub entities: Vec<String>,

    /// Skip detection and use this framework.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "Framework override (laravel, nestjs, django, spring, go, generic)"
    )]
    pub framework: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Where the assistant should write docs (default: .f5/docs)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'p',
        long = "prompt",
        value_name = "FILE",
        help = "Use this prompt file instead of the framework prompt"
    )]
    pub prompt: Option<PathBuf>,

    #[arg(long = "dry-run", help = "Show the plan without rendering the prompt")]
    pub dry_run: bool,
}

// ── docs version ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VersionArgs {
    /// Version or phase label, e.g. `v2.0` or `phase-3`.
    #[arg(value_name = "PHASE")]
    pub phase: String,

    #[arg(
        long = "from",
        value_name = "VERSION",
        help = "Base version or revision (default: nearest earlier tag)"
    )]
    pub from: Option<String>,

    #[arg(
        short = 'g',
        long = "git-analysis",
        help = "Append commit count and diff stat from git"
    )]
    pub git_analysis: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Changelog path (default: .f5/docs/versions/<PHASE>.md)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Changelog template file"
    )]
    pub template: Option<PathBuf>,
}

// ── docs templates ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[arg(short = 'k', long = "kind", value_enum, help = "Only list one kind")]
    pub kind: Option<KindArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Readme,
    #[value(alias = "prompt")]
    Prompts,
    Changelog,
}

impl From<KindArg> for TemplateKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Readme => TemplateKind::Readme,
            KindArg::Prompts => TemplateKind::Prompt,
            KindArg::Changelog => TemplateKind::Changelog,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective value of a configuration key.
    Get {
        /// Dotted key path, e.g. `docs.language`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path `f5 config init` writes to.
    Path {
        #[arg(long = "global", help = "Show the global config path")]
        global: bool,
    },
    /// Write a default configuration file.
    Init {
        #[arg(long = "global", help = "Write the global config instead of .f5/config.toml")]
        global: bool,
        #[arg(short = 'f', long = "force", help = "Overwrite an existing file")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
