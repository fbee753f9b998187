//! Binary entry point for `splace`.

use std::process;

fn main() {
    if let Err(e) = splace::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
