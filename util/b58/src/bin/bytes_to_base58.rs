// Copyright (c) 2024 The Botho Foundation

//! Encode a keypair byte array as base-58.

use clap::Parser;
use devnet_util_b58::{encode, init_logging, parse_byte_list, prompt};

/// Convert a comma-separated byte array to a base-58 string
#[derive(Debug, Parser)]
#[command(name = "bytes-to-base58")]
struct Config {
    /// Byte array, e.g. `[1,2,3]`; prompted for when omitted
    bytes: Option<String>,
}

fn main() {
    init_logging();
    let config = Config::parse();

    let input = match config.bytes {
        Some(bytes) => bytes,
        None => match prompt("Enter your byte array (comma-separated numbers): ") {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                return;
            }
        },
    };

    match parse_byte_list(&input) {
        Ok(bytes) => println!("Base58 encoded string: {}", encode(&bytes)),
        Err(e) => eprintln!("Invalid byte array input. {}", e),
    }
}
