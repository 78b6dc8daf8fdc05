use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generator::config::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::generator::GeneratorConfig;
use crate::store::DEFAULT_DB_FILE;

#[derive(Parser, Debug)]
#[command(name = "blogforge")]
#[command(version, about = "Generate long-form articles with AI and keep them in a local blog")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite article database
    #[arg(long, global = true, env = "BLOGFORGE_DB", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    #[command(flatten)]
    pub gemini: GeminiArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings for the Gemini text-generation API
#[derive(Args, Debug, Clone)]
pub struct GeminiArgs {
    /// Gemini API key; without one, demo content is generated
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, global = true, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Generative Language API
    #[arg(long, global = true, env = "GEMINI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl From<GeminiArgs> for GeneratorConfig {
    fn from(args: GeminiArgs) -> Self {
        Self {
            api_key: args.api_key,
            model: args.model,
            api_base: args.api_base,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web application
    Serve {
        /// Address to bind
        #[arg(long, env = "BLOGFORGE_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, short = 'p', env = "BLOGFORGE_PORT", default_value_t = 7000)]
        port: u16,
    },

    /// Generate and save one article
    Generate {
        /// Topic to write about
        topic: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List saved articles, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show article totals
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every saved article
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["blogforge", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 7000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "blogforge",
            "generate",
            "Rust",
            "--db",
            "/tmp/x.db",
            "--model",
            "gemini-1.5-flash",
        ])
        .unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/x.db"));

        let config = GeneratorConfig::from(cli.gemini);
        assert_eq!(config.model, "gemini-1.5-flash");
    }
}
