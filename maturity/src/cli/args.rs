//! CLI argument definitions
//!
//! All Clap derive structs for `maturity` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Build the product management maturity model site from YAML sources.
#[derive(Parser, Debug)]
#[command(name = "maturity", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MATURITY_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "MATURITY_LOG_FORMAT"
    )]
    pub log_format: LogFormatChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: convert, derive, render.
    Build(DirArgs),

    /// Convert the YAML sources to JSON in the build directory.
    Convert(DirArgs),

    /// Generate assessment.json and guide.json from the converted sources.
    Derive(DirArgs),

    /// Render the HTML pages from the build directory.
    Render(DirArgs),

    /// Check the YAML sources without writing anything.
    Validate(ValidateArgs),

    /// Convert a JSON document to YAML, keeping key order.
    ExportYaml(ExportYamlArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Pipeline Arguments
// ============================================================================

/// Directory layout shared by the pipeline commands.
#[derive(Args, Debug, Clone)]
pub struct DirArgs {
    /// Directory holding model.yaml and guide.yaml.
    #[arg(long, default_value = "src", env = "MATURITY_SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Directory for intermediate and derived JSON.
    #[arg(long, default_value = "build", env = "MATURITY_BUILD_DIR")]
    pub build_dir: PathBuf,

    /// Directory for the rendered HTML pages.
    #[arg(long, default_value = "public", env = "MATURITY_PUBLIC_DIR")]
    pub public_dir: PathBuf,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory holding model.yaml and guide.yaml.
    #[arg(long, default_value = "src", env = "MATURITY_SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `export-yaml`.
#[derive(Args, Debug)]
pub struct ExportYamlArgs {
    /// JSON document to convert.
    pub input: PathBuf,

    /// YAML file to write.
    pub output: PathBuf,
}

// ============================================================================
// Utility Commands
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log output format choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatChoice {
    /// Human-readable lines.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
