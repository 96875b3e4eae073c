use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use translit_core::core::engine::annotated;
use translit_core::core::tokenizer::tokenize;
use translit_core::export::export_plain_text;
use translit_core::{Script, TransliterationEngine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let engine = TransliterationEngine::new();
    let mut script = Script::Devanagari;
    let mut last_output: Vec<String> = Vec::new();

    println!("{}", "Ol Chiki Transliterator".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Type Ol Chiki text and press [Enter] to transliterate.");
    println!("Commands: ':latin', ':deva' to switch script, ':export <path>'");
    println!("to save the last result, ':exit' to quit.\n");

    loop {
        print!("{} ", format!("[{}]>", script_name(script)).dark_grey());
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break; // EOF
        }
        let line = input.trim();

        match line {
            ":exit" => break,
            "" => continue,
            s if s.starts_with(':') => {
                if let Some(path) = s.strip_prefix(":export") {
                    let path = path.trim();
                    if path.is_empty() {
                        println!("{}", "Usage: :export <path>".yellow());
                    } else if let Err(e) = export_plain_text(&last_output, Path::new(path)) {
                        println!("{} {}", "Export failed:".red(), e);
                    } else {
                        println!("Saved to '{path}'.");
                    }
                } else {
                    match Script::from_str(&s[1..]) {
                        Ok(chosen) => {
                            script = chosen;
                            println!("Output script: {}", script_name(script).bold());
                        }
                        Err(e) => println!("{} {}", "?".yellow(), e),
                    }
                }
            }
            text => {
                let start = Instant::now();
                let words = engine.transliterate(text, script);
                let elapsed = start.elapsed();

                last_output = words.to_vec();
                render(text, &last_output, script, elapsed.as_secs_f64() * 1000.0);
            }
        }
    }
}

fn script_name(script: Script) -> &'static str {
    match script {
        Script::Latin => "Latin",
        Script::Devanagari => "Devanagari",
    }
}

fn render(original: &str, output: &[String], script: Script, millis: f64) {
    let source_words: Vec<String> = tokenize(original)
        .into_iter()
        .map(str::to_string)
        .collect();

    println!("\n{}", "Original (Ol Chiki):".bold());
    print_tokens(&source_words);
    println!("{}", format!("Output ({}):", script_name(script)).bold());
    print_tokens(output);
    println!("{}\n", format!("Processing time: {millis:.2} ms").dark_grey());
}

/// Each word printed as an indexed token, mirroring the per-word pairing the
/// engine guarantees (word i of the output corresponds to word i of the input).
fn print_tokens(words: &[String]) {
    for (index, word) in annotated(words) {
        print!("{}{} ", format!("#{index}").dark_grey(), format!(" {word}").cyan());
    }
    println!();
}
