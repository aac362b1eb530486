//! # Quill Shared
//!
//! Types that cross the HTTP boundary: submitted forms and error page contents.

pub mod dto;
pub mod response;

pub use response::ErrorPage;
