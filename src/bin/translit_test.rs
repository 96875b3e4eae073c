// Minimal harness for eyeballing conversions against the fixed tables.
// Run with: cargo run --bin translit_test
use translit_core::{Script, TransliterationEngine};

fn main() {
    let engine = TransliterationEngine::new();
    let test_cases = [
        "ᱚᱛᱟᱲ ᱮᱥ ᱚᱞᱚ",
        "ᱚ", "ᱟ", "ᱤ", "ᱩ", "ᱮ", "ᱳ",
        "ᱠᱚ", "ᱠᱟ", "ᱛᱤ", "ᱯᱩ", "ᱥᱮ",
        "ᱚᱟ", "ᱠ-ᱟ", "᱑᱒᱓", "ᱠ᱑ᱟ",
    ];
    for input in test_cases.iter() {
        let latin = engine.transliterate(input, Script::Latin).join(" ");
        let deva = engine.transliterate(input, Script::Devanagari).join(" ");
        println!("{input} => {latin} | {deva}");
    }
}
