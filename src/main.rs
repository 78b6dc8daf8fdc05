use blogforge::cli::{
    handle_clear, handle_generate, handle_list, handle_serve, handle_stats, Cli, Commands,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = cli.db;

    let result = match cli.command {
        Commands::Serve { host, port } => handle_serve(&db, cli.gemini.into(), &host, port),
        Commands::Generate { topic, json } => handle_generate(&db, cli.gemini.into(), &topic, json),
        Commands::List { json } => handle_list(&db, json),
        Commands::Stats { json } => handle_stats(&db, json),
        Commands::Clear => handle_clear(&db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
