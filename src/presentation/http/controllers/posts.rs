// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, EditPostCommand},
    dto::PostDto,
    queries::posts::{GetPostQuery, ListPostsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PostIdPath, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// 1-based page number; values below 1 are treated as 1.
    pub page: Option<i64>,
    /// Page size, 10 when omitted, at most 100.
    pub size: Option<i64>,
    /// `field[,direction]` with field `id` or `title`, e.g. `id,desc`.
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Omitted fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post stored."),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> HttpResult<StatusCode> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
    };

    let id = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;

    tracing::info!(post_id = %id, "post created");
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 404, description = "No post with this id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    PostIdPath(id): PostIdPath,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post(GetPostQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "One page of posts, newest first unless sorted otherwise.", body = Vec<PostDto>),
        (status = 400, description = "Malformed paging or sort parameters.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<PostListParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let query = ListPostsQuery {
        page: params.page,
        size: params.size,
        sort: params.sort,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = EditPostRequest,
    responses(
        (status = 200, description = "The post after the edit.", body = PostDto),
        (status = 400, description = "Invalid fields.", body = ErrorResponse),
        (status = 404, description = "No post with this id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn edit_post(
    Extension(state): Extension<HttpState>,
    PostIdPath(id): PostIdPath,
    JsonBody(payload): JsonBody<EditPostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = EditPostCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .post_commands
        .edit_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post removed."),
        (status = 404, description = "No post with this id.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    PostIdPath(id): PostIdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    tracing::info!(post_id = id, "post deleted");
    Ok(StatusCode::OK)
}
