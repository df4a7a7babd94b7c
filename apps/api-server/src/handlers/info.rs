//! Blog metadata endpoint.

use actix_web::{HttpResponse, web};

use crate::state::AppState;

/// GET /info
pub async fn blog_info(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.blog)
}
