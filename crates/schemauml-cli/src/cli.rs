//! Command-line interface for the schemauml utility
//!
//! Reads a schema from a file or a Parse Server, converts it to a
//! PlantUML class diagram and writes the result.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::info;

use schemauml::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use schemauml::io::{Credentials, FileSink, FileSource, SchemaSource, ServerSource, DEFAULT_OUT_FILE};
use schemauml::plugins::plantuml::{ClassDiagram, PlantUmlRenderer};

/// schemauml - Convert Parse Server schemas to PlantUML class diagrams
#[derive(Parser, Debug)]
#[command(name = "schemauml")]
#[command(about = "Generate a PlantUML class diagram from a Parse Server schema")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Parse application id
    #[arg(short = 'a', long, env = "SCHEMAUML_APP_ID")]
    pub app_id: Option<String>,

    /// Parse master key
    #[arg(short = 'm', long, env = "SCHEMAUML_MASTER_KEY", hide_env_values = true)]
    pub master_key: Option<String>,

    /// Parse server schemas URL (e.g. http://localhost:1337/parse/schemas)
    #[arg(short = 's', long, env = "SCHEMAUML_SERVER_URL")]
    pub server_url: Option<String>,

    /// Schema input file in JSON (use - for stdin); takes precedence over the server
    #[arg(short = 'i', long)]
    pub in_file: Option<PathBuf>,

    /// Output file for the PlantUML markup (use - for stdout)
    #[arg(short = 'o', long, default_value = DEFAULT_OUT_FILE)]
    pub out_file: PathBuf,

    /// Title line for the diagram
    #[arg(long)]
    pub title: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct SchemaUmlApp {
    renderer: PlantUmlRenderer,
}

impl SchemaUmlApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("schemauml v{}", env!("CARGO_PKG_VERSION"));
        }

        let Some(source) = Self::select_source(&cli) else {
            println!(
                "Please specify a file to read the schema from, or parse server details.\n\n{}",
                Cli::command().render_help()
            );
            return Ok(());
        };

        if let Some(title) = &cli.title {
            self.renderer = PlantUmlRenderer::new().with_title(title);
        }

        let uml = self.convert(source.as_ref())?;
        info!("created uml successfully, writing to {}", cli.out_file.display());

        FileSink::new(&cli.out_file)
            .write(&uml)
            .with_context(|| format!("Failed to write output to '{}'", cli.out_file.display()))?;

        if cli.verbose {
            eprintln!("Wrote {} bytes to {}", uml.len(), cli.out_file.display());
        }
        Ok(())
    }

    /// Pick the schema source from the arguments
    ///
    /// An input file wins over server details. Server mode needs all three
    /// of app id, master key and URL.
    pub fn select_source(cli: &Cli) -> Option<Box<dyn SchemaSource>> {
        if let Some(path) = &cli.in_file {
            return Some(Box::new(FileSource::new(path)));
        }

        match (&cli.app_id, &cli.master_key, &cli.server_url) {
            (Some(app_id), Some(master_key), Some(url)) => Some(Box::new(ServerSource::new(
                url,
                Credentials::new(app_id, master_key),
            ))),
            _ => None,
        }
    }

    /// Load the schema and render it to PlantUML
    pub fn convert(&self, source: &dyn SchemaSource) -> Result<String> {
        let schema = source
            .load()
            .with_context(|| format!("Failed to read schema from {}", source.describe()))?;
        info!("read schema successfully, converting to uml");

        let diagram = ClassDiagram::from_schema(&schema);
        Ok(self.renderer.render_diagram(&diagram))
    }

    /// Get a reference to the renderer (for testing)
    #[cfg(test)]
    pub fn renderer(&self) -> &PlantUmlRenderer {
        &self.renderer
    }
}
