//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site metadata configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemeta.toml)
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site URL without editing sitemeta.toml.
    ///
    /// The path component is used as `path_prefix` when the prefix is left at root.
    ///
    /// Example: previewing a GitHub Pages project site:
    ///   sitemeta show --site-url "https://example.github.io/my-project"
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented sitemeta.toml template
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the configuration
    #[command(visible_alias = "c")]
    Check {
        /// Treat warnings and unknown fields as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the resolved configuration record
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Print one field by external name (siteUrl) or key path (site.url)
    #[command(visible_alias = "g")]
    Get {
        /// Field name
        field: String,
    },

    /// Print absolute URLs for site paths
    #[command(visible_alias = "u")]
    Url {
        /// Site-relative paths, e.g. `blog/hello`
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sectioned TOML, as written in sitemeta.toml
    Toml,
    /// Flat JSON keyed by external field names
    #[default]
    Json,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter out null/empty values from output
    #[arg(short = 'E', long)]
    pub filter_empty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// `check --strict`
    pub const fn is_strict(&self) -> bool {
        matches!(self.command, Commands::Check { strict: true })
    }
}
