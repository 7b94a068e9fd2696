//! Build script for chart-bike-rentals.
//!
//! Copies the rental CSV to OUT_DIR so it can be embedded via `include_str!`
//! at compile time. `fixtures/day.csv` is used when present, otherwise the
//! checked-in `fixtures/day_sample.csv`.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("rentals.csv");

    let candidates = ["../fixtures/day.csv", "../fixtures/day_sample.csv"];
    match candidates.iter().map(Path::new).find(|p| p.exists()) {
        Some(src) => {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src.display(), dest.display(), e);
            });
        }
        None => {
            fs::write(&dest, "").unwrap();
            println!("cargo:warning=No rental CSV found in ../fixtures, using empty placeholder");
        }
    }

    for src in &candidates {
        println!("cargo:rerun-if-changed={}", src);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
