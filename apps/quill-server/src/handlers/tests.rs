use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::middleware::ErrorHandlers;
use actix_web::{App, test, web};
use chrono::TimeDelta;

use quill_infra::{Argon2Config, JwtConfig};
use quill_shared::dto::{CommentForm, LoginForm, PostForm, RegisterForm};

use super::configure_routes;
use crate::config::SessionConfig;
use crate::middleware::error::render_error_page;
use crate::middleware::session::SESSION_COOKIE;
use crate::state::AppState;

fn state() -> AppState {
    let session = SessionConfig {
        jwt: JwtConfig {
            secret: "handler-test-secret".to_string(),
            issuer: "quill".to_string(),
        },
        ttl: TimeDelta::hours(1),
        cookie_secure: false,
    };
    let hashing = Argon2Config {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    };
    AppState::in_memory(&session, hashing).expect("state")
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(ErrorHandlers::new().default_handler(render_error_page))
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

fn register_form(email: &str) -> RegisterForm {
    RegisterForm {
        email: email.to_string(),
        password: "hunter2".to_string(),
        name: "Ann".to_string(),
    }
}

fn post_form(title: &str) -> PostForm {
    PostForm {
        title: title.to_string(),
        subtitle: "A subtitle".to_string(),
        author: "Ann".to_string(),
        img_url: "https://example.com/cover.png".to_string(),
        body: "<p>Hello</p><script>alert(1)</script>".to_string(),
    }
}

fn session_of<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
        .expect("session cookie")
}

fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn body_text<B: actix_web::body::MessageBody>(resp: ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8 body")
}

#[actix_web::test]
async fn test_health_reports_ok() {
    let app = app!(state());
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store"], "reachable");
    assert_eq!(json["posts"], 0);
}

#[actix_web::test]
async fn test_register_sets_cookie_and_redirects_home() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("ann@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    let cookie = session_of(&resp);
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
}

#[actix_web::test]
async fn test_duplicate_registration_rerenders_form() {
    let app = app!(state());
    for expected in [StatusCode::SEE_OTHER, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/register")
            .set_form(register_form("ann@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
        if expected == StatusCode::CONFLICT {
            assert!(body_text(resp).await.contains("already signed up"));
        }
    }
}

#[actix_web::test]
async fn test_login_failures_are_distinguished() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("ann@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let unknown = test::TestRequest::post()
        .uri("/login")
        .set_form(LoginForm {
            email: "bob@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, unknown).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(resp).await.contains("email does not exist"));

    let wrong = test::TestRequest::post()
        .uri("/login")
        .set_form(LoginForm {
            email: "ann@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, wrong).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_text(resp).await;
    assert!(body.contains("Password incorrect"));
    assert!(!body.contains("value=\"wrong\""));
}

#[actix_web::test]
async fn test_anonymous_cannot_reach_admin_pages() {
    let app = app!(state());
    for uri in ["/new-post", "/edit-post/1", "/delete/1"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");
    }

    let req = test::TestRequest::post()
        .uri("/new-post")
        .set_form(post_form("Sneaky"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(!body_text(resp).await.contains("Sneaky"));
}

#[actix_web::test]
async fn test_comment_requires_login() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/posts/1/comments")
        .set_form(CommentForm {
            body: "Nice".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
}

#[actix_web::test]
async fn test_missing_post_is_404() {
    let app = app!(state());
    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts/42").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_admin_publishes_and_reader_is_refused() {
    let app = app!(state());

    // The first account is the admin.
    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("admin@example.com"))
        .to_request();
    let admin = session_of(&test::call_service(&app, req).await);

    let req = test::TestRequest::post()
        .uri("/new-post")
        .cookie(admin.clone())
        .set_form(post_form("First Post"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("First Post"));
    assert!(body.contains("<p>Hello</p>"));
    assert!(!body.contains("<script>"));

    let req = test::TestRequest::post()
        .uri("/new-post")
        .cookie(admin.clone())
        .set_form(post_form("First Post"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(resp).await.contains("already exists"));

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("reader@example.com"))
        .to_request();
    let reader = session_of(&test::call_service(&app, req).await);

    let req = test::TestRequest::get()
        .uri("/delete/1")
        .cookie(reader.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/posts/1/comments")
        .cookie(reader)
        .set_form(CommentForm {
            body: "<b>Great</b> read".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/delete/1")
        .cookie(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_logout_revokes_session() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("admin@example.com"))
        .to_request();
    let admin = session_of(&test::call_service(&app, req).await);

    let req = test::TestRequest::get()
        .uri("/logout")
        .cookie(admin.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // The old token no longer names a live session.
    let req = test::TestRequest::get()
        .uri("/new-post")
        .cookie(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_error_page_keeps_signed_in_nav() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("admin@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("reader@example.com"))
        .to_request();
    let reader = session_of(&test::call_service(&app, req).await);

    for (uri, status) in [
        ("/new-post", StatusCode::FORBIDDEN),
        ("/posts/9", StatusCode::NOT_FOUND),
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .cookie(reader.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "{uri}");

        let body = body_text(resp).await;
        assert!(body.contains("Log Out"), "{uri}");
        assert!(!body.contains(r#"href="/login""#), "{uri}");
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/new-post").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(body_text(resp).await.contains(r#"href="/login""#));
}

#[actix_web::test]
async fn test_cover_url_with_quotes_cannot_inject_css() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/register")
        .set_form(register_form("admin@example.com"))
        .to_request();
    let admin = session_of(&test::call_service(&app, req).await);

    let mut form = post_form("Quoted Cover");
    form.img_url = "https://example.com/a.png');background-color:red;background-image:url('https://evil.example/x".to_string();
    let req = test::TestRequest::post()
        .uri("/new-post")
        .cookie(admin)
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    let body = body_text(resp).await;
    assert!(!body.contains("style="));
    assert!(body.contains(r#"src="https://example.com/a.png');"#));
}
