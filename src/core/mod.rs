// src/core/mod.rs

pub mod emitter;
pub mod engine;
pub mod heuristics;
pub mod masking;
pub mod special_words;
pub mod tables;
pub mod tokenizer;
pub mod types;
