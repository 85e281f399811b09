use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crizmodo_site::{api, config::SiteConfig, export};

#[derive(Parser)]
#[command(name = "crizmodo-site")]
#[command(about = "Website for the CrizModo Discord bot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Write every page as static HTML
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "crizmodo_site=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: SiteConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("CrizModo site listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = SiteConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(config, &host, port).await?,
        Some(Commands::Export { out }) => {
            let written = export::export_site(&config, &out)?;
            tracing::info!("Exported {} pages to {}", written.len(), out.display());
        }
        None => serve(config, "127.0.0.1", 3000).await?,
    }

    Ok(())
}
