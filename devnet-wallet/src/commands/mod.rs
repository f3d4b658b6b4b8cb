//! CLI Commands
//!
//! The work behind each binary. Every command prints its own result and
//! returns any failure to `main`, which reports it once.

pub mod airdrop;
pub mod keygen;
pub mod transfer;

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("\x1b[31mError:\x1b[0m {}", message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("\x1b[32m{}\x1b[0m", message);
}

/// Report a failed run. The process still exits normally.
pub fn report_failure(err: &anyhow::Error) {
    eprintln!("\x1b[31mOops, something went wrong:\x1b[0m {:#}", err);
}

/// The line printed after a transaction lands
pub fn success_line(explorer_url: &str) -> String {
    format!("Success! Check out your TX here: {}", explorer_url)
}
