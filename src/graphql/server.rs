use async_graphql::http::GraphiQLSource;
use async_graphql_axum::rejection::GraphQLRejection;
use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse};
use axum::extract::{FromRequest, Request, State};
use axum::http::{Method, header};
use axum::response::{self, IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use super::schema::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// `/` answers a fixed descriptor. `/graphql` executes requests sent with
/// any method; a browser `GET` without a `query` parameter gets GraphiQL.
pub fn router(schema: BookshelfSchema) -> Router {
    Router::new()
        .route("/", get(index))
        .route(GRAPHQL_PATH, any(graphql))
        .with_state(schema)
}

async fn index() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": concat!("v", env!("CARGO_PKG_VERSION")),
    }))
}

async fn graphql(State(schema): State<BookshelfSchema>, request: Request) -> Response {
    if wants_explorer(&request) {
        return graphiql().into_response();
    }

    match GraphQLBatchRequest::<GraphQLRejection>::from_request(request, &()).await {
        Ok(batch) => GraphQLResponse::from(schema.execute_batch(batch.into_inner()).await).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

fn wants_explorer(request: &Request) -> bool {
    if request.method() != Method::GET {
        return false;
    }

    let has_query = request.uri().query().is_some_and(|q| {
        q.split('&')
            .any(|pair| pair.split('=').next() == Some("query"))
    });
    let accepts_html = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));

    !has_query && accepts_html
}

fn graphiql() -> impl IntoResponse {
    response::Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Serve the API on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, schema: BookshelfSchema) -> std::io::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

pub async fn run_server(schema: BookshelfSchema, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, schema).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
