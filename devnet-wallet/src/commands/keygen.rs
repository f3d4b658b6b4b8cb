//! Keypair generation command

use anyhow::{Context, Result};
use std::path::Path;

use crate::keys::{Keypair, Pubkey};

use super::print_success;

/// Generate a new dev wallet and write it to `path`
pub fn run(path: &Path, force: bool) -> Result<Pubkey> {
    let keypair = Keypair::generate();
    keypair
        .write_to_file(path, force)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let pubkey = keypair.pubkey();
    print_success(&format!("You've generated a new devnet wallet: {}", pubkey));
    println!("Saved to {}", path.display());

    Ok(pubkey)
}
