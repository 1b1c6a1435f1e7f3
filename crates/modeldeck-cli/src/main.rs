//! CLI entry point - wires flags into the server bootstrap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use modeldeck_axum::{CorsConfig, ServerConfig, start_server};

#[derive(Parser)]
#[command(name = "modeldeck", version, about = "Model catalog browser backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Path of the flat settings file
        #[arg(long, default_value = "settings.json")]
        settings_file: PathBuf,

        /// Directory of built frontend assets to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Serve the API only, without static assets
        #[arg(long)]
        api_only: bool,

        /// Override the Hub API base URL
        #[arg(long)]
        hub_base_url: Option<String>,

        /// Restrict CORS to these origins (default: allow all)
        #[arg(long)]
        allow_origin: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            settings_file,
            static_dir,
            api_only,
            hub_base_url,
            allow_origin,
        } => {
            let cors = if allow_origin.is_empty() {
                CorsConfig::AllowAll
            } else {
                CorsConfig::AllowOrigins(allow_origin)
            };

            let mut config = ServerConfig {
                port,
                settings_file,
                hub_base_url,
                static_dir: None,
                cors,
            };

            // Resolve static directory: api-only flag > explicit flag > default locations
            if !api_only {
                if let Some(dir) = static_dir {
                    config.static_dir = Some(dir);
                } else {
                    let candidates = ["./static_frontend", "./dist", "./frontend/dist"];
                    for candidate in &candidates {
                        let path = std::path::Path::new(candidate);
                        if path.join("index.html").exists() {
                            config.static_dir = Some(path.to_path_buf());
                            break;
                        }
                    }
                }
            }

            if let Some(ref dir) = config.static_dir {
                println!();
                println!("  modeldeck server starting...");
                println!();
                println!("  Serving UI from: {}", dir.display());
                println!("  Local:   http://localhost:{port}");
                println!("  Network: http://0.0.0.0:{port}");
                println!();
                println!("  Press Ctrl+C to stop");
                println!();
            } else {
                println!();
                println!("  modeldeck server starting (API only)...");
                println!();
                println!("  API: http://localhost:{port}");
                println!();
                println!("  Tip: Use --static-dir to serve a frontend build");
                println!();
            }

            start_server(config).await?;
        }
    }

    Ok(())
}
