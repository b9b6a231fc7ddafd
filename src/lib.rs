// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod logging;
pub mod persistence;

pub use crate::core::engine::{convert, Converter};
pub use crate::core::special_words::SpecialWords;
pub use crate::core::tables::PhonemeTables;
pub use crate::persistence::StoreError;
