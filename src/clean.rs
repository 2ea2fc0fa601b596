use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").unwrap());
static PAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\d+\n").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Drop URLs, e-mail addresses and bare page-number lines, then collapse all
/// whitespace to single spaces.
/// # Example
/// ```
/// use publication_analysis::clean_text;
/// let cleaned = clean_text("See https://example.org\n12\nor mail me@example.org  now ");
/// assert_eq!(cleaned, "See or mail now");
/// ```
pub fn clean_text(text: &str) -> String {
    let text = URL.replace_all(text, "");
    let text = EMAIL.replace_all(&text, "");
    let text = PAGE_NUMBER.replace_all(&text, "\n");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_between_lines_are_dropped() {
        assert_eq!(clean_text("end of page\n42\nnext page"), "end of page next page");
    }

    #[test]
    fn inline_numbers_survive() {
        assert_eq!(clean_text("In 1990 the\tunion  split"), "In 1990 the union split");
    }

    #[test]
    fn emails_and_urls_vanish() {
        assert_eq!(
            clean_text("write to a.b@uni.edu or visit http://x.org/p?q=1."),
            "write to or visit"
        );
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("éléphant", 3), "élé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }
}
