//! Form payloads posted by the browser, with field-level validation.
//!
//! `validate` returns one human-readable message per failed field; an empty
//! list means the form is acceptable.

use serde::{Deserialize, Serialize};
use url::Url;

fn require(errors: &mut Vec<String>, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{label} is required."));
    }
}

fn require_email(errors: &mut Vec<String>, value: &str) {
    if value.trim().is_empty() {
        errors.push("Email is required.".to_string());
    } else if !value.contains('@') {
        errors.push("Enter a valid email address.".to_string());
    }
}

/// Registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require_email(&mut errors, &self.email);
        require(&mut errors, &self.password, "Password");
        require(&mut errors, &self.name, "Name");
        errors
    }
}

/// Login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require_email(&mut errors, &self.email);
        require(&mut errors, &self.password, "Password");
        errors
    }
}

/// Create/edit post form. `body` is raw rich-text editor output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    pub body: String,
}

impl PostForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.title, "Blog post title");
        require(&mut errors, &self.subtitle, "Subtitle");
        require(&mut errors, &self.author, "Your name");
        if self.img_url.trim().is_empty() {
            errors.push("Blog image URL is required.".to_string());
        } else if self.canonical_img_url().is_none() {
            errors.push("Blog image URL must be an http(s) URL.".to_string());
        }
        require(&mut errors, &self.body, "Blog content");
        errors
    }
}

impl PostForm {
    /// The image URL as serialized by `url`, with unsafe characters
    /// percent-encoded. `None` unless it parses as http(s).
    pub fn canonical_img_url(&self) -> Option<String> {
        Url::parse(self.img_url.trim())
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .map(String::from)
    }
}

/// Contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "Name");
        require_email(&mut errors, &self.email);
        require(&mut errors, &self.message, "Message");
        errors
    }
}

/// Comment form on a post page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentForm {
    pub body: String,
}
