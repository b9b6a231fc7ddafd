// src/core/masking.rs
//! Splits raw input into escape-aware segments in one forward pass.
//!
//! `{...}` is copied verbatim. `[...]` (recognized in smart mode only) is
//! translated with heuristics off and may itself contain `{...}`. An
//! unterminated region runs to the end of the input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text to translate, with heuristics on or off.
    Text { text: &'a str, smart: bool },
    /// Brace contents, never translated.
    Literal(&'a str),
}

pub fn segment(input: &str, smart: bool) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    scan(input, 0, smart, None, &mut segments);
    segments
}

/// Scans from `cursor` until `closer` (or the end), pushing segments.
/// Returns the byte offset just past the closer.
fn scan<'a>(
    input: &'a str,
    mut cursor: usize,
    smart: bool,
    closer: Option<char>,
    segments: &mut Vec<Segment<'a>>,
) -> usize {
    let opens_bracket = smart && closer.is_none();
    let mut start = cursor;

    while let Some((offset, c)) = input[cursor..]
        .char_indices()
        .find(|&(_, c)| c == '{' || Some(c) == closer || (opens_bracket && c == '['))
    {
        let at = cursor + offset;
        push_text(segments, &input[start..at], smart);
        if Some(c) == closer {
            return at + c.len_utf8();
        }
        cursor = if c == '{' {
            let (content, next) = enclosed(input, at + 1, '}');
            segments.push(Segment::Literal(content));
            next
        } else {
            scan(input, at + 1, false, Some(']'), segments)
        };
        start = cursor;
    }

    push_text(segments, &input[start..], smart);
    input.len()
}

/// Content from `body` up to `closer`, and the offset just past it.
fn enclosed(input: &str, body: usize, closer: char) -> (&str, usize) {
    match input[body..].find(closer) {
        Some(len) => (&input[body..body + len], body + len + closer.len_utf8()),
        None => (&input[body..], input.len()),
    }
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, smart: bool) {
    if !text.is_empty() {
        segments.push(Segment::Text { text, smart });
    }
}
