//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "deploygo",
    bin_name = "deploygo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Deployment-ready project scaffolding",
    long_about = "DeployGo generates a containerized service skeleton \
                  (Dockerfile, docker-compose.yml, deployment config and a \
                  minimal HTTP app) for Go, Node.js or Python.",
    after_help = "EXAMPLES:\n\
        \x20 deploygo init my-api\n\
        \x20 deploygo init my-api --template nodejs --port 3000\n\
        \x20 deploygo list\n\
        \x20 deploygo completions bash > /usr/share/bash-completion/completions/deploygo",
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

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new project with deployment configuration.
    #[command(
        about = "Initialize a new project with deployment configuration",
        after_help = "EXAMPLES:\n\
            \x20 deploygo init demo\n\
            \x20 deploygo init demo --template python --port 5000\n\
            \x20 deploygo init demo --overwrite --yes\n\
            \x20 deploygo init demo --dry-run"
    )]
    Init(InitArgs),

    /// List available template families.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 deploygo list\n\
            \x20 deploygo list --format json"
    )]
    List(ListArgs),

    /// Manage deployment environments.
    #[command(about = "Manage environments")]
    Environment,

    /// Manage application logs.
    #[command(about = "Manage logs for your application")]
    Logs,

    /// Roll back to a previous release.
    #[command(about = "Rollback the application to a previous version")]
    Rollback,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 deploygo completions bash > ~/.local/share/bash-completion/completions/deploygo\n\
            \x20 deploygo completions zsh  > ~/.zfunc/_deploygo\n\
            \x20 deploygo completions fish > ~/.config/fish/completions/deploygo.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the DeployGo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 deploygo config get defaults.port\n\
            \x20 deploygo config list\n\
            \x20 deploygo config init"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `deploygo init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; also the name of the directory that is created.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Template family selector.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Project template (go, nodejs, python) [default: go]"
    )]
    pub template: Option<String>,

    /// Primary language; defaults to the template family's language.
    #[arg(
        short = 'l',
        long = "language",
        value_name = "LANGUAGE",
        help = "Primary language (go, nodejs, python)"
    )]
    pub language: Option<String>,

    /// Port the application listens on.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Application port [default: 8080]"
    )]
    pub port: Option<u16>,

    /// Initial application version.
    #[arg(
        long = "version",
        value_name = "VERSION",
        help = "Application version [default: 1.0.0]"
    )]
    pub app_version: Option<String>,

    /// Replace an existing directory (destructive).
    #[arg(long = "overwrite", help = "Overwrite existing files")]
    pub overwrite: bool,

    /// Parent directory for the project.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory to create the project in (default: current directory)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Fail instead of writing raw content when a template cannot render.
    #[arg(
        long = "strict-templates",
        help = "Treat template render failures as errors"
    )]
    pub strict_templates: bool,

    /// Skip the overwrite confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub yes: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `deploygo list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `deploygo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `deploygo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.port`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write the built-in defaults to the configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_with_short_flags() {
        let cli = Cli::parse_from(["deploygo", "init", "demo", "-t", "nodejs", "-p", "3000"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.name, "demo");
                assert_eq!(args.template.as_deref(), Some("nodejs"));
                assert_eq!(args.port, Some(3000));
                assert!(args.language.is_none());
                assert!(!args.overwrite);
            }
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn init_version_flag_is_the_app_version() {
        let cli = Cli::parse_from(["deploygo", "init", "demo", "--version", "2.0.0"]);
        match cli.command {
            Commands::Init(args) => assert_eq!(args.app_version.as_deref(), Some("2.0.0")),
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn init_requires_a_name() {
        assert!(Cli::try_parse_from(["deploygo", "init"]).is_err());
    }

    #[test]
    fn port_must_fit_u16() {
        assert!(Cli::try_parse_from(["deploygo", "init", "demo", "-p", "70000"]).is_err());
    }

    #[test]
    fn placeholder_commands_parse() {
        for name in ["environment", "logs", "rollback"] {
            assert!(Cli::try_parse_from(["deploygo", name]).is_ok(), "{name}");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["deploygo", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
