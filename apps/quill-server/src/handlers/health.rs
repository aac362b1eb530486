//! Liveness check that also reads the post store.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    store: &'static str,
    posts: usize,
}

/// GET /health
///
/// 200 while the store answers, 503 otherwise.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match state.posts.list().await {
        Ok(posts) => HttpResponse::Ok().json(Health {
            status: "ok",
            store: "reachable",
            posts: posts.len(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read posts");
            HttpResponse::ServiceUnavailable().json(Health {
                status: "degraded",
                store: "unreachable",
                posts: 0,
            })
        }
    }
}
