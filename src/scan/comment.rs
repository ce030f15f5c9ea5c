// Thu Feb 12 2026 - Alex

use crate::scan::pattern::COMMENT_PATTERN;
use std::borrow::Cow;

/// Removes `//` and `/* */` comments. Each removed span is replaced by the
/// newlines it contained, so every character offset in the stripped text
/// still maps to its original line number.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_PATTERN.replace_all(text, |caps: &regex::Captures<'_>| {
        caps[0].chars().filter(|&c| c == '\n').collect::<String>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_removed() {
        assert_eq!(strip_comments("int x; // trailing\nint y;"), "int x; \nint y;");
    }

    #[test]
    fn test_block_comment_removed() {
        assert_eq!(strip_comments("int /* inline */ x;"), "int  x;");
    }

    #[test]
    fn test_multiline_block_comment_preserves_line_count() {
        let text = "/* one\ntwo\nthree */\nstruct P;";
        let stripped = strip_comments(text);
        assert_eq!(stripped.matches('\n').count(), text.matches('\n').count());
        assert_eq!(stripped.as_ref(), "\n\n\nstruct P;");
    }

    #[test]
    fn test_fake_nested_block_comment() {
        // Not truly nested: the first `*/` terminates the comment.
        assert_eq!(strip_comments("/* outer /* inner */ int x;"), " int x;");
    }

    #[test]
    fn test_comment_free_text_unchanged() {
        let text = "struct Point { int x; };";
        assert!(matches!(strip_comments(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decorated_block_comment() {
        let text = "/** doc\n * line\n **/ int x;";
        assert_eq!(strip_comments(text), "\n\n int x;");
    }
}
