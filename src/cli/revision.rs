//! Values for the report placeholders
use std::{path::Path, process::Command};

use log::debug;

/// Short hash of the git `HEAD` in `dir`, or `unknown`
pub fn git_head(dir: &Path) -> String {
    let output = Command::new("git")
        .arg("rev-parse")
        .arg("--short")
        .arg("HEAD")
        .current_dir(dir)
        .output();
    match output {
        Ok(output) if output.status.success() => {
            let head = String::from_utf8_lossy(&output.stdout).trim().to_owned();
            if head.is_empty() {
                String::from("unknown")
            } else {
                head
            }
        }
        Ok(output) => {
            debug!("git rev-parse failed: {}", String::from_utf8_lossy(&output.stderr).trim());
            String::from("unknown")
        }
        Err(e) => {
            debug!("Could not run git: {}", e);
            String::from("unknown")
        }
    }
}

/// The current local time, as `YYYY-MM-DD HH:MM`
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}
