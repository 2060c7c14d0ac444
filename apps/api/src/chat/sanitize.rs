//! Output sanitization for deployments that want plain-text replies.
//!
//! The model is asked for prose, but it still sprinkles markdown into its
//! answers. The chat widget renders raw text, so one deployment variant
//! strips the markup before replying.

/// Markdown emphasis, heading, and quote markers removed from replies.
const MARKUP_CHARS: &[char] = &['*', '_', '#', '>'];

/// Strips markdown markers, collapses every run of two-or-more whitespace
/// characters into a single space, and trims the result.
///
/// A lone whitespace character (a single newline, say) is kept as-is.
/// Idempotent: a second pass leaves the text unchanged.
pub fn sanitize_reply(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !MARKUP_CHARS.contains(c))
        .collect();

    let mut collapsed = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            let mut run = 1usize;
            while chars.peek().map_or(false, |next| next.is_whitespace()) {
                chars.next();
                run += 1;
            }
            collapsed.push(if run > 1 { ' ' } else { c });
        } else {
            collapsed.push(c);
        }
    }

    collapsed.trim().to_string()
}
