// Copyright (c) 2024 The Botho Foundation

//! Decode a base-58 private key into its byte array.

use clap::Parser;
use devnet_util_b58::{decode, format_byte_list, init_logging, prompt};

/// Convert a base-58 string to a byte array
#[derive(Debug, Parser)]
#[command(name = "base58-to-bytes")]
struct Config {
    /// Base-58 string; prompted for when omitted
    base58: Option<String>,
}

fn main() {
    init_logging();
    let config = Config::parse();

    let input = match config.base58 {
        Some(base58) => base58,
        None => match prompt("Enter your base58 encoded private key: ") {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                return;
            }
        },
    };

    match decode(&input) {
        Ok(bytes) => println!("Decoded wallet (byte array): {}", format_byte_list(&bytes)),
        Err(e) => eprintln!("Error decoding base58: {}", e),
    }
}
