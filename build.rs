//! Build script to embed the dictionary
//!
//! Reads `data/words.txt` and generates a const slice of normalized words.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DICTIONARY_PATH: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");

    generate_dictionary(
        DICTIONARY_PATH,
        &Path::new(&out_dir).join("dictionary.rs"),
    );

    println!("cargo:rerun-if-changed={DICTIONARY_PATH}");
}

fn generate_dictionary(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
        .collect();
    words.sort_unstable();
    words.dedup();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Words accepted as secrets and guesses").unwrap();
    writeln!(output, "pub const DICTIONARY: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in `DICTIONARY`").unwrap();
    writeln!(output, "pub const DICTIONARY_COUNT: usize = {};", words.len()).unwrap();
}
