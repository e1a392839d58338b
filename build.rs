use std::{env, fs::read_to_string, path::Path, process::Command};

#[path = "src/build_env.rs"]
mod build_env;

use build_env::{commit_from_vcs_info_str, git_watch_paths, resolve_commit, resolve_version};

const VCS_INFO: &str = ".cargo_vcs_info.json";

fn main() {
    println!("cargo:rerun-if-env-changed=STAMP_VERSION");
    println!("cargo:rerun-if-env-changed=STAMP_GIT_COMMIT");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/build_env.rs");
    if Path::new(VCS_INFO).exists() {
        println!("cargo:rerun-if-changed={VCS_INFO}");
    }

    // HEAD alone only changes on checkout; commits move the branch ref.
    let head_ref = git(&["symbolic-ref", "-q", "HEAD"])
        .and_then(|r| git(&["rev-parse", "--git-path", r.trim()]));
    for path in git_watch_paths(
        git(&["rev-parse", "--git-path", "HEAD"]),
        head_ref,
        git(&["rev-parse", "--git-path", "packed-refs"]),
    ) {
        println!("cargo:rerun-if-changed={path}");
    }

    let version = resolve_version(env::var("STAMP_VERSION").ok());

    // get git commit
    let commit = resolve_commit([
        env::var("STAMP_GIT_COMMIT").ok(),
        read_to_string(VCS_INFO)
            .ok()
            .and_then(|raw| commit_from_vcs_info_str(&raw)),
        git(&["rev-parse", "HEAD"]),
    ]);

    println!("cargo:rustc-env=STAMP_VERSION={version}");
    println!("cargo:rustc-env=STAMP_GIT_COMMIT={commit}");
}

/// Stdout of a successful git invocation; `None` without git or outside a repo.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}
