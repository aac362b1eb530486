use maud::{Markup, PreEscaped, html};

use quill_core::domain::{CurrentUser, Post, PostId};
use quill_shared::ErrorPage;
use quill_shared::dto::{CommentForm, ContactForm, LoginForm, PostForm, RegisterForm};

fn error_list(errors: &[String]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul.errors {
                @for msg in errors { li { (msg) } }
            }
        }
    }
}

fn input(label: &str, name: &str, kind: &str, value: &str) -> Markup {
    html! {
        label { (label) input type=(kind) name=(name) value=(value); }
    }
}

fn textarea(label: &str, name: &str, value: &str) -> Markup {
    html! {
        label { (label) textarea name=(name) { (value) } }
    }
}

fn byline(post: &Post) -> Markup {
    html! {
        p.meta { "Posted by " (post.author) " on " (post.display_date()) }
    }
}

pub(super) fn index(posts: &[Post], current: &CurrentUser) -> Markup {
    html! {
        h1 { "Quill" }
        @for post in posts {
            article.post-preview {
                a href={ "/posts/" (post.id) } {
                    h2 { (post.title) }
                    h3 { (post.subtitle) }
                }
                (byline(post))
            }
            @if current.is_admin() {
                a.delete href={ "/delete/" (post.id) } { "✘" }
            }
        }
        @if current.is_admin() {
            a.button href="/new-post" { "Create New Post" }
        }
    }
}

pub(super) fn post(
    post: &Post,
    comment: &CommentForm,
    errors: &[String],
    comment_received: bool,
    current: &CurrentUser,
) -> Markup {
    html! {
        header.post-heading {
            img.cover src=(post.img_url) alt="";
            h1 { (post.title) }
            h2 { (post.subtitle) }
            (byline(post))
        }
        // Sanitized on write.
        article.post-body { (PreEscaped(&post.body)) }
        @if current.is_admin() {
            a.button href={ "/edit-post/" (post.id) } { "Edit Post" }
        }
        section.comments {
            h3 { "Comments" }
            @if comment_received {
                p { "Thanks, your comment was received." }
            }
            @if current.is_authenticated() {
                (error_list(errors))
                form method="post" action={ "/posts/" (post.id) "/comments" } {
                    (textarea("Comment", "body", &comment.body))
                    button type="submit" { "Submit Comment" }
                }
            } @else {
                p { a href="/login" { "Log in" } " to leave a comment." }
            }
        }
    }
}

pub(super) fn about() -> Markup {
    html! {
        h1 { "About Me" }
        p { "Quill is a small blog about whatever its author is thinking about." }
    }
}

pub(super) fn contact(form: &ContactForm, errors: &[String], received: bool) -> Markup {
    html! {
        @if received {
            h1 { "Message sent" }
            p { "Thanks for getting in touch. I'll reply soon." }
        } @else {
            h1 { "Contact Me" }
            p { "Have questions? Send me a message." }
            (error_list(errors))
            form method="post" action="/contact" {
                (input("Name", "name", "text", &form.name))
                (input("Email Address", "email", "email", &form.email))
                (input("Phone Number", "phone", "tel", &form.phone))
                (textarea("Message", "message", &form.message))
                button type="submit" { "Send" }
            }
        }
    }
}

pub(super) fn register(form: &RegisterForm, errors: &[String]) -> Markup {
    html! {
        h1 { "Register" }
        (error_list(errors))
        form method="post" action="/register" {
            (input("Email", "email", "email", &form.email))
            (input("Password", "password", "password", ""))
            (input("Name", "name", "text", &form.name))
            button type="submit" { "Sign Me Up!" }
        }
    }
}

pub(super) fn login(form: &LoginForm, errors: &[String]) -> Markup {
    html! {
        h1 { "Log In" }
        (error_list(errors))
        form method="post" action="/login" {
            (input("Email", "email", "email", &form.email))
            (input("Password", "password", "password", ""))
            button type="submit" { "Let Me In!" }
        }
    }
}

pub(super) fn make_post(form: &PostForm, errors: &[String], editing: Option<PostId>) -> Markup {
    let (heading, action) = match editing {
        Some(id) => ("Edit Post", format!("/edit-post/{id}")),
        None => ("New Post", "/new-post".to_string()),
    };

    html! {
        h1 { (heading) }
        (error_list(errors))
        form method="post" action=(action) {
            (input("Blog Post Title", "title", "text", &form.title))
            (input("Subtitle", "subtitle", "text", &form.subtitle))
            (input("Your Name", "author", "text", &form.author))
            (input("Blog Image URL", "img_url", "url", &form.img_url))
            (textarea("Blog Content", "body", &form.body))
            button type="submit" { "Submit Post" }
        }
    }
}

pub(super) fn error(problem: &ErrorPage) -> Markup {
    html! {
        h1 { (problem.status) " " (problem.title) }
        @if let Some(detail) = &problem.detail {
            p { (detail) }
        }
        p { a href="/" { "Back to the blog" } }
    }
}
