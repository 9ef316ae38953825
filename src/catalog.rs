use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use async_graphql::SimpleObject;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, Result};

/// A single catalog entry. `readCount` is attached by the schema layer.
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub slug: String,
    pub published_year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub pages: Option<i32>,
}

#[derive(Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
}

/// Reads the book list from a YAML file. Nothing is cached: every call
/// goes back to disk.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Book>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let books = parse_books(&contents)?;
        debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    pub fn find(&self, slug: &str) -> Result<Option<Book>> {
        Ok(self.load()?.into_iter().find(|book| book.slug == slug))
    }
}

/// Parses catalog YAML, keeping file order and rejecting duplicate slugs.
pub fn parse_books(contents: &str) -> Result<Vec<Book>> {
    let file: CatalogFile = serde_yaml::from_str(contents)?;

    let mut seen = HashSet::with_capacity(file.books.len());
    for book in &file.books {
        if !seen.insert(book.slug.as_str()) {
            return Err(AppError::Catalog(format!("Duplicate slug: {}", book.slug)));
        }
    }

    Ok(file.books)
}
