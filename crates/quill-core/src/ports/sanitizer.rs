/// Turns untrusted rich text into the HTML subset that views may render raw.
///
/// Implementations must be deterministic and idempotent:
/// `sanitize(&sanitize(x)) == sanitize(x)`.
pub trait HtmlSanitizer: Send + Sync {
    fn sanitize(&self, raw: &str) -> String;
}
