// src/core/tokenizer.rs
use crate::core::tables::PhonemeTables;
use crate::core::types::Token;

const TRAILING_SUPPRESSOR: &str = "+2381";

/// Lowercases a fragment while keeping the uppercase letters that select
/// retroflex and nasal variants: `T`, `D`, `N`, and `SH`/`Sh` (folded to `Sh`).
pub fn fold_case(fragment: &str) -> String {
    let mut folded = String::with_capacity(fragment.len());
    let mut chars = fragment.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            'T' | 'D' | 'N' => folded.push(c),
            'S' if matches!(chars.peek(), Some('H') | Some('h')) => {
                chars.next();
                folded.push_str("Sh");
            }
            _ => folded.extend(c.to_lowercase()),
        }
    }
    folded
}

/// Splits a word into table units by greedy longest match from the left.
///
/// At each position the candidate is shrunk one char at a time until it hits
/// a table key, so the first hit is the longest one. A single char with no
/// entry passes through as a literal. When `elide_final` is set, a
/// multi-codepoint group for the word's last unit loses its trailing
/// suppressor so the final consonant keeps its inherent vowel.
pub fn lookup<'t>(tables: &'t PhonemeTables, fragment: &str, elide_final: bool) -> Vec<Token<'t>> {
    let folded = fold_case(fragment);
    let mut tokens = Vec::new();
    let mut rest = folded.as_str();

    while !rest.is_empty() {
        let mut head_end = char_boundary_after(rest, tables.max_key_chars());
        loop {
            let head = &rest[..head_end];
            if let Some(group) = tables.get(head) {
                let tail = &rest[head_end..];
                let group = if elide_final && is_word_final(tail) {
                    elide_suppressor(group)
                } else {
                    group
                };
                tracing::trace!(unit = head, group, "matched");
                tokens.push(Token::Group(group));
                rest = tail;
                break;
            }
            let mut chars = head.chars();
            let last = chars.next_back();
            if chars.as_str().is_empty() {
                if let Some(c) = last {
                    tokens.push(Token::Literal(c));
                }
                rest = &rest[head_end..];
                break;
            }
            head_end = chars.as_str().len();
        }
    }
    tokens
}

/// Byte offset just past the first `n` chars of `s` (or its end).
fn char_boundary_after(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Nothing but whitespace, or one explicit trailing `\`, follows.
fn is_word_final(tail: &str) -> bool {
    let tail = tail.trim();
    tail.is_empty() || tail == "\\"
}

fn elide_suppressor(group: &str) -> &str {
    match group.strip_suffix(TRAILING_SUPPRESSOR) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => group,
    }
}
