//! HTTP handlers and route configuration.

mod auth;
mod health;
mod pages;
mod posts;

use actix_web::{HttpResponse, http::header, web};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public pages
        .route("/", web::get().to(pages::home))
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact_form))
        .route("/contact", web::post().to(pages::contact_submit))
        .route("/health", web::get().to(health::health_check))
        // Accounts
        .route("/register", web::get().to(auth::register_form))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout))
        // Posts
        .route("/posts/{id}", web::get().to(posts::show))
        .route("/posts/{id}/comments", web::post().to(posts::add_comment))
        // Admin only
        .route("/new-post", web::get().to(posts::new_post_form))
        .route("/new-post", web::post().to(posts::create_post))
        .route("/edit-post/{id}", web::get().to(posts::edit_post_form))
        .route("/edit-post/{id}", web::post().to(posts::update_post))
        .route("/delete/{id}", web::get().to(posts::delete_post));
}

/// 303 redirect after a successful form submission.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests;
