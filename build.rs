//! Build script to generate embedded word lists
//!
//! Reads one word list per difficulty and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const TIERS: [(&str, &str); 3] = [("easy", "EASY"), ("medium", "MEDIUM"), ("hard", "HARD")];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (tier, const_name) in TIERS {
        let input_path = format!("data/{tier}.txt");
        generate_word_list(
            &input_path,
            &Path::new(&out_dir).join(format!("{tier}.rs")),
            const_name,
            &format!("Default {tier} word list"),
        );

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
}
