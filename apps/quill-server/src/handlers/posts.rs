//! Post pages, comments and the admin's post management.

use actix_web::{HttpResponse, http::StatusCode, web};

use quill_core::DomainError;
use quill_core::domain::{Post, PostDraft, PostId};
use quill_core::services::require_admin;
use quill_shared::dto::{CommentForm, PostForm};

use super::see_other;
use crate::middleware::error::AppResult;
use crate::middleware::session::Visitor;
use crate::state::AppState;
use crate::views::{self, View};

fn to_draft(form: PostForm) -> PostDraft {
    let img_url = form.canonical_img_url().unwrap_or_default();
    PostDraft {
        title: form.title,
        subtitle: form.subtitle,
        author: form.author,
        body: form.body,
        img_url,
    }
}

fn to_form(post: Post) -> PostForm {
    PostForm {
        title: post.title,
        subtitle: post.subtitle,
        author: post.author,
        img_url: post.img_url,
        body: post.body,
    }
}

fn make_post_page(
    visitor: &Visitor,
    form: &PostForm,
    errors: &[String],
    editing: Option<PostId>,
) -> HttpResponse {
    views::page(
        StatusCode::UNPROCESSABLE_ENTITY,
        &View::MakePost {
            form,
            errors,
            editing,
        },
        &visitor.current,
    )
}

/// GET /posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    visitor: Visitor,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(views::page(
        StatusCode::OK,
        &View::Post {
            post: &post,
            comment: &CommentForm::default(),
            errors: &[],
            comment_received: false,
        },
        &visitor.current,
    ))
}

/// POST /posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    visitor: Visitor,
    path: web::Path<PostId>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let form = form.into_inner();

    let (status, errors, received) =
        match state.inbox.comment(&visitor.current, post_id, &form.body).await {
            Ok(()) => (StatusCode::OK, Vec::new(), true),
            Err(DomainError::Unauthorized) => return Ok(see_other("/login")),
            Err(DomainError::Validation(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, vec![msg], false)
            }
            Err(e) => return Err(e.into()),
        };

    let post = state.posts.get(post_id).await?;
    let comment = if received { CommentForm::default() } else { form };

    Ok(views::page(
        status,
        &View::Post {
            post: &post,
            comment: &comment,
            errors: &errors,
            comment_received: received,
        },
        &visitor.current,
    ))
}

/// GET /new-post
pub async fn new_post_form(visitor: Visitor) -> AppResult<HttpResponse> {
    require_admin(&visitor.current)?;

    Ok(views::page(
        StatusCode::OK,
        &View::MakePost {
            form: &PostForm::default(),
            errors: &[],
            editing: None,
        },
        &visitor.current,
    ))
}

/// POST /new-post
pub async fn create_post(
    state: web::Data<AppState>,
    visitor: Visitor,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    require_admin(&visitor.current)?;
    let form = form.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(make_post_page(&visitor, &form, &errors, None));
    }

    match state.posts.create(&visitor.current, to_draft(form.clone())).await {
        Ok(_) => Ok(see_other("/")),
        Err(DomainError::Validation(msg)) => Ok(make_post_page(&visitor, &form, &[msg], None)),
        Err(e) => Err(e.into()),
    }
}

/// GET /edit-post/{id}
pub async fn edit_post_form(
    state: web::Data<AppState>,
    visitor: Visitor,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.load_for_edit(&visitor.current, id).await?;

    Ok(views::page(
        StatusCode::OK,
        &View::MakePost {
            form: &to_form(post),
            errors: &[],
            editing: Some(id),
        },
        &visitor.current,
    ))
}

/// POST /edit-post/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    visitor: Visitor,
    path: web::Path<PostId>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    require_admin(&visitor.current)?;
    let id = path.into_inner();
    let form = form.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(make_post_page(&visitor, &form, &errors, Some(id)));
    }

    match state.posts.edit(&visitor.current, id, to_draft(form.clone())).await {
        Ok(post) => Ok(see_other(&format!("/posts/{}", post.id))),
        Err(DomainError::Validation(msg)) => {
            Ok(make_post_page(&visitor, &form, &[msg], Some(id)))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /delete/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    visitor: Visitor,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&visitor.current, path.into_inner()).await?;
    Ok(see_other("/"))
}
