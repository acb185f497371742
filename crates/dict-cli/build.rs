use chrono::Local;
use std::process::Command;

/// Run a git command from the crate directory, `None` if git is unavailable
/// or the command fails.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Tracked files modified since HEAD; untracked ones don't count.
fn is_dirty() -> bool {
    Command::new("git")
        .args(["diff", "--quiet", "HEAD"])
        .status()
        .map(|s| !s.success())
        .unwrap_or(false)
}

fn main() {
    let build_hash = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) if is_dirty() => {
            format!("{hash}-dirty-{}", Local::now().format("%Y%m%d-%H%M%S"))
        }
        Some(hash) => hash,
        None => "unknown".to_string(),
    };
    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // .git lives at the workspace root, two levels up
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
