//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use luafile_core::domain::{Extension, NamingConvention, TemplateId};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "luafile",
    bin_name = "luafile",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create Luau/Lua script files from templates",
    long_about = "luafile creates ModuleScripts, client and server scripts, and \
                  Knit controllers and services with a suggested name that never \
                  collides with an existing file.",
    after_help = "EXAMPLES:\n\
        \x20 luafile module src/shared --name Util\n\
        \x20 luafile service src/server -y\n\
        \x20 luafile client src/client/init.client.luau --name Camera\n\
        \x20 luafile list --format json\n\
        \x20 luafile completions bash > /usr/share/bash-completion/completions/luafile",
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
    /// Create a ModuleScript.
    #[command(
        visible_alias = "m",
        about = "Create a ModuleScript",
        after_help = "EXAMPLES:\n\
            \x20 luafile module                     # ModuleScript.luau in the workspace\n\
            \x20 luafile module src/shared -n Util  # src/shared/Util.luau"
    )]
    Module(CreateArgs),

    /// Create a client LocalScript.
    #[command(about = "Create a client script (.client)")]
    Client(CreateArgs),

    /// Create a server Script.
    #[command(about = "Create a server script (.server)")]
    Server(CreateArgs),

    /// Create a Knit controller.
    #[command(
        about = "Create a Knit controller",
        after_help = "EXAMPLES:\n\
            \x20 luafile controller src/client -n Camera  # CameraController.luau"
    )]
    Controller(CreateArgs),

    /// Create a Knit service.
    #[command(
        about = "Create a Knit service",
        after_help = "EXAMPLES:\n\
            \x20 luafile service src/server -n Data  # DataService.luau"
    )]
    Service(CreateArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 luafile list\n\
            \x20 luafile list --format json"
    )]
    List(ListArgs),

    /// Initialise a luafile configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 luafile init                      # default location\n\
            \x20 luafile -c ./luafile.toml init    # explicit file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 luafile completions bash > ~/.local/share/bash-completion/completions/luafile\n\
            \x20 luafile completions zsh  > ~/.zfunc/_luafile\n\
            \x20 luafile completions fish > ~/.config/fish/completions/luafile.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the luafile configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 luafile config get settings.type\n\
            \x20 luafile config set settings.type .lua\n\
            \x20 luafile config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Split a create subcommand into its template and arguments.
    ///
    /// Every other command comes back as a [`ToolCommand`].
    pub fn into_create(self) -> Result<(TemplateId, CreateArgs), ToolCommand> {
        match self {
            Self::Module(args) => Ok((TemplateId::ModuleScript, args)),
            Self::Client(args) => Ok((TemplateId::Client, args)),
            Self::Server(args) => Ok((TemplateId::Server, args)),
            Self::Controller(args) => Ok((TemplateId::KnitController, args)),
            Self::Service(args) => Ok((TemplateId::KnitService, args)),
            Self::List(args) => Err(ToolCommand::List(args)),
            Self::Init(args) => Err(ToolCommand::Init(args)),
            Self::Completions(args) => Err(ToolCommand::Completions(args)),
            Self::Config(cmd) => Err(ToolCommand::Config(cmd)),
        }
    }
}

/// The commands that do not create a file.
#[derive(Debug)]
pub enum ToolCommand {
    List(ListArgs),
    Init(InitArgs),
    Completions(CompletionsArgs),
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments shared by the five create subcommands.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// File or directory to create next to / inside.
    ///
    /// A file resolves to its parent directory. Without it the first
    /// workspace root is used.
    #[arg(value_name = "LOCATION", help = "Target file or directory")]
    pub location: Option<PathBuf>,

    /// Text typed over the highlighted part of the suggestion.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "TEXT",
        conflicts_with = "yes",
        value_parser = clap::builder::NonEmptyStringValueParser::new(),
        help = "Name to type over the suggested placeholder"
    )]
    pub name: Option<String>,

    /// Use `--name` as the whole file name.
    #[arg(
        long = "exact",
        requires = "name",
        help = "Treat --name as the complete file name"
    )]
    pub exact: bool,

    /// Accept the suggested name without prompting.
    #[arg(short = 'y', long = "yes", help = "Accept the suggested name")]
    pub yes: bool,

    /// Resolve the name but write nothing.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Do not open the created file.
    #[arg(long = "no-open", help = "Do not open the file in an editor")]
    pub no_open: bool,

    /// Override `settings.type` for this invocation.
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        help = "File extension, e.g. .lua"
    )]
    pub ext: Option<Extension>,

    /// Override `settings.convention` for this invocation.
    #[arg(long = "convention", value_enum, help = "Naming convention")]
    pub convention: Option<Convention>,

    /// Fallback target directories.
    #[arg(
        short = 'w',
        long = "workspace",
        value_name = "DIR",
        help = "Workspace root (repeatable)"
    )]
    pub workspace: Vec<PathBuf>,
}

/// Naming convention override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Convention {
    /// Re-attach `.client` / `.server` / role suffixes to typed names.
    Fixed,
    /// Use typed names as they are.
    #[value(alias = "legacy")]
    Free,
}

impl From<Convention> for NamingConvention {
    fn from(value: Convention) -> Self {
        match value {
            Convention::Fixed => NamingConvention::Fixed,
            Convention::Free => NamingConvention::Free,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `luafile list`.
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
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `luafile init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `luafile completions`.
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

/// Subcommands for `luafile config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `settings.type`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
