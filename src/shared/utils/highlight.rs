//! Keyword highlighting for list previews and transcript bodies
//!
//! Splits text into match/non-match segments so the view can wrap matches
//! in a `<mark>` without touching the rest of the content. Matching is a
//! case-insensitive literal substring match; the keyword is escaped before
//! it becomes a pattern so regex metacharacters stay literal.

use regex::RegexBuilder;

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
}

/// Split `text` around every case-insensitive occurrence of `keyword`.
///
/// Concatenating the returned segments always reproduces `text` byte for
/// byte; highlighting is presentation only. An empty keyword (or one that
/// fails to compile, which escaping should rule out) yields one unmatched
/// segment.
pub fn highlight_segments(text: &str, keyword: &str) -> Vec<HighlightSegment> {
    let keyword = keyword.trim();
    if keyword.is_empty() || text.is_empty() {
        return vec![HighlightSegment { text: text.to_string(), is_match: false }];
    }

    let pattern = match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => {
            return vec![HighlightSegment { text: text.to_string(), is_match: false }];
        }
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(HighlightSegment {
                text: text[cursor..found.start()].to_string(),
                is_match: false,
            });
        }
        segments.push(HighlightSegment {
            text: found.as_str().to_string(),
            is_match: true,
        });
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(HighlightSegment { text: text[cursor..].to_string(), is_match: false });
    }

    if segments.is_empty() {
        segments.push(HighlightSegment { text: text.to_string(), is_match: false });
    }
    segments
}
