//! Code fragment extraction.

use regex::Regex;
use std::sync::LazyLock;

// Fenced blocks first so their inner backticks are not re-read as inline spans
static CODE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```.*?```|`[^`]+`").expect("Invalid regex: code fragment pattern")
});

// An info string only counts as such when a newline ends the opening fence line
static FENCE_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^```[\w+-]*[ \t]*\n|^```|```$").expect("Invalid regex: fence delimiter pattern")
});

/// All fenced and inline code spans, in order of appearance, delimiters included
pub fn extract_fragments(text: &str) -> Vec<String> {
    CODE_FRAGMENT
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strip fence/backtick delimiters and surrounding whitespace from a fragment.
///
/// A fence's info string (```` ```rust ````) goes with the fence.
pub fn strip_delimiters(fragment: &str) -> String {
    if fragment.starts_with("```") {
        return FENCE_DELIMITER.replace_all(fragment, "").trim().to_string();
    }

    fragment
        .strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(fragment)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_and_inline_in_order() {
        let text = "Use `npm install` first.\n```js\nconst a = 1;\n```\nThen run `npm start`.";
        let fragments = extract_fragments(text);

        assert_eq!(
            fragments,
            vec![
                "`npm install`".to_string(),
                "```js\nconst a = 1;\n```".to_string(),
                "`npm start`".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_fragments() {
        assert!(extract_fragments("plain prose only").is_empty());
        assert!(extract_fragments("").is_empty());
    }

    #[test]
    fn test_strip_fence_with_language_tag() {
        assert_eq!(
            strip_delimiters("```javascript\nconst x = 1;\nconsole.log(x);\n```"),
            "const x = 1;\nconsole.log(x);"
        );
    }

    #[test]
    fn test_strip_inline() {
        assert_eq!(strip_delimiters("` useState(0) `"), "useState(0)");
    }

    #[test]
    fn test_single_line_fence_keeps_leading_identifier() {
        assert_eq!(strip_delimiters("```useState(0)```"), "useState(0)");
        assert_eq!(strip_delimiters("``` npm start ```"), "npm start");
    }

    #[test]
    fn test_empty_fence_strips_to_empty() {
        assert_eq!(strip_delimiters("```\n```"), "");
    }
}
