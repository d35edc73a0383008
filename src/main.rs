//! doryctl - command line client for the Dory CI/CD platform
//!
//! ## Commands
//!
//! - `doryctl def get` - Show project definitions as tables, JSON or YAML
//! - `doryctl completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Project summary
//! doryctl def get test-project1
//!
//! # Build and deploy definitions of one module in the test environment
//! doryctl def get test-project1 build,deploy --module=tp1-go-demo --env=test
//!
//! # Everything as YAML, including empty fields
//! doryctl def get test-project1 all -o yaml --full
//!
//! # Generate shell completions
//! doryctl completions bash > /etc/bash_completion.d/doryctl
//! ```
//!
//! Set `DORYCTL_DEBUG` to log to stderr and `DORYCTL_VERBOSE` to print the
//! full error chain on failure.

use std::process::ExitCode;

use doryctl::infrastructure::init_logging;

mod cli;

fn main() -> ExitCode {
    if std::env::var("DORYCTL_DEBUG").is_ok() {
        init_logging("debug");
    }

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if std::env::var("DORYCTL_VERBOSE").is_ok() {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}
