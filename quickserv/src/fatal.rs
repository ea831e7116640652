//! Startup-fatal error reporting (spec.md §7 "Startup-fatal").
//!
//! Every unrecoverable startup condition (bad `--dir`, bind failure, logfile that
//! can't be opened) funnels through here so the "pause unless `--no-pause`"
//! behavior lives in exactly one place.

use shared::system::tool_exit_helpers::exit_error;
use std::io::{self, Write};

/// Prints `err`'s full context chain, optionally waits for Enter, then exits with
/// code 1. Never returns.
pub fn fatal(err: &anyhow::Error, no_pause: bool) -> ! {
    eprintln!("Fatal error: {err}");
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }

    if !no_pause {
        print!("Press Enter to quit!");
        let _ = io::stdout().flush();
        let mut discard = String::new();
        let _ = io::stdin().read_line(&mut discard);
    }

    exit_error();
    unreachable!("exit_error terminates the process")
}
