//! GraphQL schema for the books catalog.
//!
//! Queries read the catalog straight from disk. The only mutable state is
//! the [`ReadCounts`] store injected as schema data.

use async_graphql::{ComplexObject, Context, EmptySubscription, Object, Result, Schema};
use tracing::debug;

use crate::catalog::{Book, Catalog};
use crate::read_counts::ReadCounts;

pub type BooksSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: Catalog, read_counts: ReadCounts) -> BooksSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .data(read_counts)
        .finish()
}

/// Schema in SDL form, as published under `/docs`.
pub fn export_sdl(schema: &BooksSchema) -> String {
    schema.sdl()
}

#[ComplexObject]
impl Book {
    /// Number of times this book has been read
    async fn read_count(&self, ctx: &Context<'_>) -> Result<u64> {
        Ok(ctx.data::<ReadCounts>()?.get(&self.slug))
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns a list of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(ctx.data::<Catalog>()?.load()?)
    }

    /// Returns a single book by slug
    async fn book(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Slug of the book to fetch")] slug: String,
    ) -> Result<Option<Book>> {
        Ok(ctx.data::<Catalog>()?.find(&slug)?)
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Mark a book as read and increment its read count
    async fn mark_as_read(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Slug of the book that was read")] slug: String,
    ) -> Result<Option<Book>> {
        let Some(book) = ctx.data::<Catalog>()?.find(&slug)? else {
            debug!("markAsRead: no book with slug {:?}", slug);
            return Ok(None);
        };

        let count = ctx.data::<ReadCounts>()?.increment(&book.slug);
        debug!("markAsRead: {} now read {} time(s)", book.slug, count);
        Ok(Some(book))
    }
}
