//! CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Where the catalog and its rules come from.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Seed products from a YAML catalog; starts empty when omitted
    #[arg(short, long, env = "VITRINE_PRODUCTS", global = true)]
    pub products: Option<PathBuf>,

    /// Validation rules YAML file; stock rules when omitted
    #[arg(long, env = "VITRINE_RULES", global = true)]
    pub rules: Option<PathBuf>,

    /// Extra accepted categories (comma separated)
    #[arg(
        short,
        long = "category",
        env = "VITRINE_CATEGORIES",
        value_delimiter = ',',
        global = true
    )]
    pub categories: Vec<String>,
}

/// Vitrine catalog editor
#[derive(Debug, Parser)]
#[command(name = "vitrine", about = "Vitrine product catalog editor", long_about = None)]
pub struct Cli {
    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog settings
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the product list
    List,

    /// Print the selectable colors
    Palette,

    /// Validate a product form YAML file
    Validate {
        /// Form file
        form: PathBuf,
    },

    /// Replay an action script against the catalog
    Run {
        /// Script file
        #[arg(short, long)]
        script: PathBuf,
    },
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
