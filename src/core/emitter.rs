// src/core/emitter.rs
use crate::core::types::Token;

/// Resolves tokens to text: every decimal codepoint in a group becomes one
/// char, literals are copied. Empty pieces (e.g. a trailing `+`) are skipped.
pub fn emit(tokens: &[Token<'_>]) -> String {
    let mut text = String::new();
    for token in tokens {
        match *token {
            Token::Group(group) => {
                for piece in group.split('+').filter(|p| !p.is_empty()) {
                    match piece.parse::<u32>().ok().and_then(char::from_u32) {
                        Some(c) => text.push(c),
                        None => tracing::warn!(piece, group, "undecodable codepoint"),
                    }
                }
            }
            Token::Literal(c) => text.push(c),
        }
    }
    text
}

/// Like [`emit`], but falls back to `original` when nothing was produced.
pub fn emit_or(tokens: &[Token<'_>], original: &str) -> String {
    let text = emit(tokens);
    if text.is_empty() {
        original.to_string()
    } else {
        text
    }
}
