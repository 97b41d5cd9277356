//! `encoding-convert` — convert between hex, base64 and text on the command line.
//!
//! Usage:
//!   encoding-convert <conversion> < input
//!
//! The input is read from stdin and trimmed. The conversion is the first
//! argument; run without arguments to list the available conversions.

use encoding_converter::cli::{convert, usage};
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let conversion = match args.get(1) {
        Some(c) => c.clone(),
        None => {
            eprint!("{}", usage());
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match convert(&conversion, buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
