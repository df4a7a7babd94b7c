//! Post CRUD handlers.
//!
//! Each handler performs one store operation. Update and delete check for
//! existence first and answer 404 with an empty body when the post is absent.

use actix_web::{HttpResponse, http::header, web};

use blog_core::domain::{Post, PostId};
use blog_shared::PostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<PostId>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.find_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let saved = state.posts.insert(Post::new(req.title, req.content)).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::Internal("store returned a post without id".to_string()))?;

    tracing::info!(post_id = id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{id}")))
        .finish())
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    // Not atomic with the write below: a concurrent delete can slip in between.
    let Some(existing) = state.posts.find_by_id(id).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    state
        .posts
        .update(existing.with_content(req.title, req.content))
        .await?;

    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let Some(existing) = state.posts.find_by_id(id).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    state.posts.delete(&existing).await?;

    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
