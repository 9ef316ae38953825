pub mod api;
pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod read_counts;
pub mod schema;

use std::sync::Arc;
use catalog::Catalog;
use config::Config;
use read_counts::ReadCounts;
use schema::{build_schema, BooksSchema};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schema: BooksSchema,
    pub read_counts: ReadCounts,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let read_counts = ReadCounts::new();
        let catalog = Catalog::new(config.books_path.clone());
        let schema = build_schema(catalog, read_counts.clone());

        AppState {
            config: Arc::new(config),
            schema,
            read_counts,
        }
    }
}
