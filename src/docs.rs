//! Static documentation for the GraphQL API.
//!
//! Writes `schema.graphql` and an `index.html` overview into a directory,
//! which the server then exposes under `/docs`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, Result};
use crate::schema::{export_sdl, BooksSchema};

const ROOT_FIELDS_QUERY: &str = r#"{
  __schema {
    queryType { fields { name description } }
    mutationType { fields { name description } }
  }
}"#;

#[derive(Debug, Deserialize)]
struct Introspection {
    #[serde(rename = "__schema")]
    schema: RootTypes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RootTypes {
    query_type: RootType,
    mutation_type: Option<RootType>,
}

#[derive(Debug, Deserialize)]
struct RootType {
    fields: Vec<RootField>,
}

#[derive(Debug, Deserialize)]
struct RootField {
    name: String,
    description: Option<String>,
}

pub async fn generate(schema: &BooksSchema, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let sdl = export_sdl(schema);
    let roots = root_fields(schema).await?;

    let sdl_path = output_dir.join("schema.graphql");
    fs::write(&sdl_path, &sdl)?;

    let index_path = output_dir.join("index.html");
    fs::write(&index_path, render_index(&roots, &sdl))?;

    info!("Wrote documentation to {}", output_dir.display());
    Ok(vec![index_path, sdl_path])
}

async fn root_fields(schema: &BooksSchema) -> Result<RootTypes> {
    let response = schema.execute(ROOT_FIELDS_QUERY).await;
    if let Some(err) = response.errors.first() {
        return Err(AppError::Schema(format!("Introspection failed: {}", err.message)));
    }

    let data = response
        .data
        .into_json()
        .map_err(|e| AppError::Schema(format!("Introspection failed: {}", e)))?;
    let introspection: Introspection = serde_json::from_value(data)
        .map_err(|e| AppError::Schema(format!("Introspection failed: {}", e)))?;
    Ok(introspection.schema)
}

fn render_index(roots: &RootTypes, sdl: &str) -> String {
    let mut html = String::with_capacity(sdl.len() * 2);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Bookshelf GraphQL API</title>\n");
    html.push_str("<style>body{font-family:sans-serif;max-width:960px;margin:0 auto;padding:20px}pre{background:#1e1e1e;color:#d4d4d4;padding:15px;overflow-x:auto}</style>\n");
    html.push_str("</head>\n<body>\n<h1>Bookshelf GraphQL API</h1>\n");
    let _ = writeln!(html, "<p>Generated {}</p>", Utc::now().to_rfc3339());

    render_section(&mut html, "Queries", &roots.query_type);
    if let Some(mutations) = &roots.mutation_type {
        render_section(&mut html, "Mutations", mutations);
    }

    html.push_str("<h2>Schema</h2>\n<p><a href=\"schema.graphql\">schema.graphql</a></p>\n<pre>");
    html.push_str(&escape_html(sdl));
    html.push_str("</pre>\n<p><a href=\"/\">Back to the playground</a></p>\n</body>\n</html>\n");
    html
}

fn render_section(html: &mut String, heading: &str, root: &RootType) {
    let _ = writeln!(html, "<h2>{}</h2>\n<dl>", heading);
    for field in &root.fields {
        let _ = writeln!(
            html,
            "<dt><code>{}</code></dt><dd>{}</dd>",
            escape_html(&field.name),
            escape_html(field.description.as_deref().unwrap_or(""))
        );
    }
    html.push_str("</dl>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
