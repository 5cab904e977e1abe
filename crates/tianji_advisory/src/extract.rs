//! Pull a JSON object out of free-form model output.

/// The first balanced `{...}` substring of `raw`.
///
/// Braces inside string literals (including escaped quotes) do not count.
/// Returns `None` when no opening brace is ever closed.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_object() {
        assert_eq!(extract_json_object(r#"{"a":1}"#), Some(r#"{"a":1}"#));
    }

    #[test]
    fn fenced_with_prose() {
        let raw = "Here you go:\n```json\n{\"a\": {\"b\": 2}}\n```\nThanks!";
        assert_eq!(extract_json_object(raw), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn braces_inside_strings() {
        let raw = r#"{"a": "} not the end {", "b": "quote \" and }"} tail }"#;
        assert_eq!(
            extract_json_object(raw),
            Some(r#"{"a": "} not the end {", "b": "quote \" and }"}"#)
        );
    }

    #[test]
    fn escaped_backslash_before_quote() {
        let raw = r#"{"path": "C:\\"} trailing"#;
        assert_eq!(extract_json_object(raw), Some(r#"{"path": "C:\\"}"#));
    }

    #[test]
    fn first_of_two() {
        assert_eq!(extract_json_object("{} {\"x\":1}"), Some("{}"));
    }

    #[test]
    fn unbalanced_or_absent() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("{\"a\": 1"), None);
        assert_eq!(extract_json_object("} {"), None);
    }
}
