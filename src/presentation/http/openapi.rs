// src/presentation/http/openapi.rs
use crate::application::dto::PostDto;
use crate::presentation::http::controllers::posts::{
    CreatePostRequest, EditPostRequest, PostListParams,
};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::edit_post,
        crate::presentation::http::controllers::posts::delete_post,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            PostDto,
            CreatePostRequest,
            EditPostRequest,
            PostListParams
        )
    ),
    tags(
        (name = "Posts", description = "Blog post endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Hodolog API",
        description = "Blog post backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let urls = env::var("PUBLIC_API_URLS").unwrap_or_default();
        let mut seen = HashSet::new();
        let servers: Vec<Server> = urls
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.trim_end_matches('/').to_string())
            .filter(|url| seen.insert(url.clone()))
            .map(Server::new)
            .collect();

        if !servers.is_empty() {
            openapi.servers = Some(servers);
        }
    }
}

/// Swagger UI at `/docs`, the raw document at `/openapi.json`, and `/` redirecting to the UI.
pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> PathBuf {
    env::var("OPENAPI_SNAPSHOT_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from)
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
