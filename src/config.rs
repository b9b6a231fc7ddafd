// File: src/config.rs
use std::env;
use std::path::PathBuf;

/// Disables smart mode when set to anything but "" or "0".
pub const PLAIN_ENV: &str = "ROMANISED_PLAIN";
/// Overrides where the special-word table is stored.
pub const SPECIAL_WORDS_ENV: &str = "ROMANISED_SPECIAL_WORDS";

const APP_DIR: &str = "nepali-romanised";
const SPECIAL_WORDS_FILE: &str = "special_words.bin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub smart: bool,
    pub special_words_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smart: true,
            special_words_path: default_special_words_path(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(PLAIN_ENV).ok(), env::var_os(SPECIAL_WORDS_ENV).map(PathBuf::from))
    }

    fn from_vars(plain: Option<String>, special_words_path: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            smart: !plain.is_some_and(|v| !v.is_empty() && v != "0"),
            special_words_path: special_words_path
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(defaults.special_words_path),
        }
    }
}

/// `<data dir>/nepali-romanised/special_words.bin`, falling back to the home
/// directory and then the working directory.
pub fn default_special_words_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(SPECIAL_WORDS_FILE);
    path
}
