//! Best-effort incremental text extraction.
//!
//! The streaming endpoint returns a JSON array of response documents, not
//! line-delimited events, so true incremental parsing would need a
//! streaming JSON parser. This scanner approximates it: it collects every
//! `"text": "..."` string field visible in the growing buffer and yields
//! only the newly appended suffix. A chunk boundary that splits a string
//! literal mid-escape can drop or duplicate text; callers who need
//! correctness over latency should use the default buffered path.

use std::sync::LazyLock;

use regex::Regex;

use lucid_protocols::error::RequestError;

use crate::client::TextStream;

static TEXT_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""text"\s*:\s*"((?:[^"\\]|\\.)*)""#).expect("text field pattern compiles")
});

pub(crate) fn extract_stream(response: reqwest::Response) -> TextStream {
    let stream = async_stream::stream! {
        use futures::StreamExt;

        let mut bytes_stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut emitted = String::new();

        while let Some(chunk) = bytes_stream.next().await {
            match chunk {
                Ok(bytes) => {
                    buffer.push_str(&String::from_utf8_lossy(&bytes));
                    let assembled = assemble_text(&buffer);
                    if assembled.len() > emitted.len() && assembled.starts_with(&emitted) {
                        let fresh = assembled[emitted.len()..].to_string();
                        emitted = assembled;
                        yield Ok(fresh);
                    }
                }
                Err(e) => {
                    yield Err(RequestError::Stream(e.to_string()));
                    return;
                }
            }
        }
    };

    Box::pin(stream)
}

/// Every decoded `"text"` field visible in the buffer so far, concatenated.
fn assemble_text(buffer: &str) -> String {
    TEXT_FIELD
        .captures_iter(buffer)
        .filter_map(|captures| decode_json_string(captures.get(1)?.as_str()))
        .collect()
}

/// Decode the escaped interior of a JSON string literal.
fn decode_json_string(raw: &str) -> Option<String> {
    serde_json::from_str(&format!("\"{raw}\"")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_text_complete_fields() {
        let buffer = r#"[{"candidates":[{"content":{"parts":[{"text":"Hello "}]}}]},
                         {"candidates":[{"content":{"parts":[{"text":"world"}]}}]}"#;
        assert_eq!(assemble_text(buffer), "Hello world");
    }

    #[test]
    fn test_assemble_text_ignores_incomplete_literal() {
        // The second text field is still open; only the first is counted.
        let buffer = r#""text": "done", "text": "still goi"#;
        assert_eq!(assemble_text(buffer), "done");
    }

    #[test]
    fn test_assemble_text_decodes_escapes() {
        let buffer = r#""text": "line\nbreak \"quoted\"""#;
        assert_eq!(assemble_text(buffer), "line\nbreak \"quoted\"");
    }

    #[test]
    fn test_assemble_text_empty_buffer() {
        assert_eq!(assemble_text(""), "");
    }

    #[test]
    fn test_suffix_growth_across_chunks() {
        let first = r#""text": "Plants ""#;
        let second = r#""text": "Plants ", "text": "grow.""#;
        let a = assemble_text(first);
        let b = assemble_text(second);
        assert!(b.starts_with(&a));
        assert_eq!(&b[a.len()..], "grow.");
    }
}
