mod git;

use std::path::Path;
use std::process::Command;

fn main() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let commit = std::env::var("COMMAND_FIX_COMMIT")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(git_commit)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=COMMAND_FIX_PROFILE={profile}");
    println!("cargo:rustc-env=COMMAND_FIX_TARGET={target}");
    println!("cargo:rustc-env=COMMAND_FIX_COMMIT={commit}");
    println!("cargo:rerun-if-env-changed=COMMAND_FIX_COMMIT");
    for path in git::watched_paths(Path::new(".git")) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() { None } else { Some(sha) }
}
