use std::path::PathBuf;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use bookshelf_graphql::{
    api::routes::create_router,
    catalog::Catalog,
    config::Config,
    docs,
    AppState,
};

/// GraphQL API over a small catalog of classic books
#[derive(Parser, Debug)]
#[command(name = "bookshelf-graphql")]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Generate static schema documentation
    Docs {
        /// Output directory, defaults to DOCS_DIR
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "bookshelf_graphql=debug,tower_http=debug"
    } else {
        "bookshelf_graphql=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Docs { output } => {
            let output = output.unwrap_or_else(|| config.docs_dir.clone());
            let state = AppState::new(config);
            for path in docs::generate(&state.schema, &output).await? {
                info!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Fail fast on a missing or malformed catalog
    let catalog = Catalog::new(config.books_path.clone());
    let books = catalog.load()?;
    info!("Loaded {} books from {}", books.len(), catalog.path().display());

    let server_addr = config.server_addr;
    let app_state = AppState::new(config);
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
