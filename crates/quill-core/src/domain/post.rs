use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PostId = i32;

/// Post entity - a published blog post.
///
/// `body` always holds sanitized HTML and is rendered without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: NaiveDate,
    pub body: String,
    pub img_url: String,
}

impl Post {
    /// Publication date as shown to readers, e.g. "April 05, 2024".
    pub fn display_date(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }
}

/// Insert payload for a post; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: NaiveDate,
    pub body: String,
    pub img_url: String,
}

/// Editable fields of a post as submitted by the admin. The body is raw,
/// unsanitized editor output.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub body: String,
    pub img_url: String,
}

impl PostDraft {
    /// Names of required fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("author", &self.author),
            ("img_url", &self.img_url),
            ("body", &self.body),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_is_zero_padded_long_month() {
        let post = Post {
            id: 1,
            title: "t".into(),
            subtitle: "s".into(),
            author: "a".into(),
            date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            body: String::new(),
            img_url: "https://example.com/a.png".into(),
        };
        assert_eq!(post.display_date(), "April 05, 2024");
    }

    #[test]
    fn test_missing_fields_treats_whitespace_as_blank() {
        let draft = PostDraft {
            title: "Hello".into(),
            subtitle: "   ".into(),
            author: "Ann".into(),
            body: "<p>x</p>".into(),
            img_url: String::new(),
        };
        assert_eq!(draft.missing_fields(), vec!["subtitle", "img_url"]);
    }
}
