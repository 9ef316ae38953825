use axum::{
    routing::{get, post},
    Router,
    body::Bytes,
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::Html,
    Json,
};
use async_graphql::{Request, Response, Variables};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::api::models::GraphQlPayload;
use crate::api::response::{self, MISSING_QUERY};
use crate::AppState;

pub const DOCS_NOT_FOUND: &str =
    "Documentation not found. Run 'bookshelf-graphql docs' to generate it.";

const PLAYGROUND_HTML: &str = include_str!("../../static/playground.html");

pub fn create_router(app_state: AppState) -> Router {
    let docs = ServeDir::new(&app_state.config.docs_dir)
        .not_found_service(docs_not_found.into_service());

    Router::new()
        .route("/", get(playground_handler))
        .route("/graphql", post(graphql_handler))
        .nest_service("/docs", docs)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn graphql_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Response>)> {
    let payload = GraphQlPayload::from_body(&body)?;

    let Some(query) = payload.query_text() else {
        warn!("GraphQL request without a query string");
        return Ok(response::error(StatusCode::OK, MISSING_QUERY.to_string()));
    };
    debug!("GraphQL query: {}", query);

    let mut request = Request::new(query);
    if let Some(variables) = payload.variables {
        request = request.variables(Variables::from_json(variables));
    }
    if let Some(name) = &payload.operation_name {
        request = request.operation_name(name.as_str());
    }

    info!(
        "Executing GraphQL operation {}",
        payload.operation_name.as_deref().unwrap_or("<anonymous>")
    );
    let result = state.schema.execute(request).await;
    if result.is_err() {
        warn!("GraphQL execution returned {} error(s)", result.errors.len());
    }

    Ok(response::success(result))
}

async fn playground_handler() -> Html<&'static str> {
    Html(PLAYGROUND_HTML)
}

async fn docs_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, DOCS_NOT_FOUND)
}
