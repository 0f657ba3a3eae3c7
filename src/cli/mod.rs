//! Command-line interface.
//!
//! ```bash
//! devicegate                      # serve on 0.0.0.0:3002
//! devicegate serve --port 8080    # same, custom port
//! devicegate openapi > api.json   # print the OpenAPI document
//! ```

use clap::{Args, Parser, Subcommand};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "devicegate")]
#[command(about = "Authentication and device-metrics gateway", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Print the OpenAPI document as JSON and exit
    Openapi,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "GATEWAY_PORT", default_value_t = 3002)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Resolves the effective command; no subcommand means `serve` with the
    /// top-level flags.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve(self.serve))
    }
}
