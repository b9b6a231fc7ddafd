use clap::Parser;
use romanised::config::Settings;
use romanised::logging::init_tracing;
use romanised::Converter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Convert romanized Nepali to Devanagari.
///
/// `{text}` is copied through untouched, `[text]` is converted without the
/// smart ending rules, and `a/b` converts both spellings back to back.
#[derive(Parser)]
#[command(name = "romanise", version)]
struct Cli {
    /// Text to convert. Reads stdin line by line when omitted.
    text: Vec<String>,

    /// Turn off the smart word-ending rules.
    #[arg(long)]
    plain: bool,

    /// Special-word store (.bin, or .json for a hand-editable list).
    #[arg(long, value_name = "PATH")]
    special_words: Option<PathBuf>,

    /// Add a special word and save the store, e.g. `--add kathi=kaathi`.
    #[arg(long, value_name = "WORD=SPELLING", value_parser = parse_special_word)]
    add: Vec<(String, String)>,
}

fn parse_special_word(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((word, spelling)) if !word.is_empty() && !spelling.is_empty() => {
            Ok((word.to_string(), spelling.to_string()))
        }
        _ => Err(format!("expected WORD=SPELLING, got '{arg}'")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::from_env();
    let smart = settings.smart && !cli.plain;
    let store_path = cli.special_words.unwrap_or(settings.special_words_path);

    let mut converter = Converter::from_file_or_new(&store_path);
    if !cli.add.is_empty() {
        for (word, spelling) in &cli.add {
            converter.special_words_mut().insert(word, spelling);
        }
        converter.save_special_words()?;
        eprintln!("Saved {} special word(s) to '{}'", cli.add.len(), store_path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.text.is_empty() {
        writeln!(out, "{}", converter.convert(&cli.text.join(" "), smart))?;
    } else if cli.add.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", converter.convert(&line?, smart))?;
        }
    }
    Ok(())
}
