//! Build script to generate embedded word lists
//!
//! Reads one word list file per category from `data/words/` and generates
//! Rust source code with a const table of `(category, words)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const WORDS_DIR: &str = "data/words";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_category_table(
        Path::new(WORDS_DIR),
        &Path::new(&out_dir).join("categories.rs"),
    );

    // Rebuild if any word list changes
    println!("cargo:rerun-if-changed={WORDS_DIR}");
}

fn category_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", dir.display()))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    // Stable output regardless of directory iteration order
    files.sort();
    files
}

fn generate_category_table(input_dir: &Path, output_path: &Path) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// One entry per file in {WORDS_DIR}/").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Bundled word lists as `(category, words)` pairs").unwrap();
    writeln!(output, "pub const EMBEDDED: &[(&str, &[&str])] = &[").unwrap();

    for path in category_files(input_dir) {
        println!("cargo:rerun-if-changed={}", path.display());

        let category = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_else(|| panic!("Bad category file name: {}", path.display()));
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

        writeln!(output, "    (\"{category}\", &[").unwrap();
        for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
            writeln!(output, "        \"{word}\",").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
}
