use maud::{DOCTYPE, Markup, html};

use quill_core::domain::CurrentUser;

pub(super) fn document(title: &str, current: &CurrentUser, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                (nav(current))
                main.container { (content) }
                footer { p { "Copyright © Quill" } }
            }
        }
    }
}

fn nav(current: &CurrentUser) -> Markup {
    html! {
        nav {
            a href="/" { "Home" }
            @if let Some(user) = current.user() {
                span.greeting { "Hi, " (user.name) }
                a href="/logout" { "Log Out" }
            } @else {
                a href="/login" { "Login" }
                a href="/register" { "Register" }
            }
            a href="/about" { "About" }
            a href="/contact" { "Contact" }
        }
    }
}
