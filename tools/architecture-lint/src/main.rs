//! Runs the layer boundary lint over the gateway backend.
//!
//! Usage: `cargo run -p architecture-lint [-- <backend dir>]`. Without an
//! argument the backend next to this tool in the workspace is linted.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let backend = std::env::args_os()
        .nth(1)
        .map_or_else(default_backend, PathBuf::from);
    let mut stderr = io::stderr().lock();

    match architecture_lint::lint_tree(&backend.join("src")) {
        Ok(findings) if findings.is_empty() => ExitCode::SUCCESS,
        Ok(findings) => {
            let _ = writeln!(stderr, "{} layer boundary violation(s):", findings.len());
            for finding in &findings {
                let _ = writeln!(stderr, "  {finding}");
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            let _ = writeln!(stderr, "architecture lint failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn default_backend() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../backend")
}
