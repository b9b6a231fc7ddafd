use crossterm::style::Stylize;
use romanised::config::Settings;
use romanised::logging::init_tracing;
use romanised::Converter;
use std::io::{stdin, stdout, BufRead, Write};

fn main() -> std::io::Result<()> {
    init_tracing();
    let settings = Settings::from_env();
    let mut converter = Converter::from_file_or_new(&settings.special_words_path);
    let mut smart = settings.smart;

    print_banner();
    prompt(smart)?;

    for line in stdin().lock().lines() {
        let input = line?;
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {}
            ":smart" => {
                smart = true;
                println!("{}", "smart mode on".green());
            }
            ":plain" => {
                smart = false;
                println!("{}", "smart mode off".yellow());
            }
            ":save" => match converter.save_special_words() {
                Ok(()) => println!("{}", "special words saved".green()),
                Err(e) => println!("{} {}", "[ERROR]".red(), e),
            },
            ":list" => {
                for (word, spelling) in converter.special_words().iter() {
                    println!("  {} -> {}", word.cyan(), spelling);
                }
            }
            s if s.starts_with(":add") => {
                let mut parts = s.split_whitespace().skip(1);
                match (parts.next(), parts.next()) {
                    (Some(word), Some(spelling)) => {
                        converter.special_words_mut().insert(word, spelling);
                        println!("{} {} -> {}", "added".green(), word, spelling);
                    }
                    _ => println!("{}", "usage: :add WORD SPELLING".red()),
                }
            }
            s => {
                let converted = converter.convert(s, smart);
                println!("{} {}", "=>".dark_grey(), converted.bold());
            }
        }
        prompt(smart)?;
    }

    println!("\nSaving special words...");
    if let Err(e) = converter.save_special_words() {
        eprintln!("{} Could not save special words: {}", "[ERROR]".red(), e);
    } else {
        println!("Special words saved to '{}'", settings.special_words_path.display());
    }
    Ok(())
}

fn print_banner() {
    println!("{}", "Romanized Nepali Converter".bold());
    println!("---------------------------------------------------------------");
    println!("Type romanized text and press [Enter] to convert it.");
    println!("{{text}} stays as typed, [text] skips the smart ending rules.");
    println!(":smart / :plain toggle mode, :add WORD SPELLING, :list, :save, 'exit'.\n");
}

fn prompt(smart: bool) -> std::io::Result<()> {
    let mode = if smart { "smart".green() } else { "plain".yellow() };
    print!("[{}] > ", mode);
    stdout().flush()
}
