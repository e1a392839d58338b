//! Resolution rules for the values `build.rs` bakes into the binary.
//!
//! Compiled twice: as a module of the build script and, under `cfg(test)`,
//! as a module of the library so the rules are unit tested.

pub const DEFAULT_VERSION: &str = "development";

/// `STAMP_VERSION` if set and non-empty, else [`DEFAULT_VERSION`].
pub fn resolve_version(env: Option<String>) -> String {
    env.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// The `git.sha1` field of a `.cargo_vcs_info.json` document.
pub fn commit_from_vcs_info_str(raw: &str) -> Option<String> {
    let info: serde_json::Value = serde_json::from_str(raw).ok()?;
    info.get("git")?
        .get("sha1")?
        .as_str()
        .map(str::to_string)
}

/// First non-blank candidate, trimmed. Candidates are in priority order:
/// env override, vcs info, `git rev-parse HEAD`. Nothing found gives "".
pub fn resolve_commit<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|c| c.trim().to_string())
        .find(|c| !c.is_empty())
        .unwrap_or_default()
}

/// Files whose change means HEAD may point at a different commit: HEAD
/// itself (detached checkouts, branch switches), the branch ref it points
/// to (new commits) and packed-refs (refs after `git gc`).
pub fn git_watch_paths(
    head: Option<String>,
    head_ref: Option<String>,
    packed_refs: Option<String>,
) -> Vec<String> {
    [head, head_ref, packed_refs]
        .into_iter()
        .flatten()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_defaults_when_unset_or_empty() {
        assert_eq!(resolve_version(None), "development");
        assert_eq!(resolve_version(Some(String::new())), "development");
        assert_eq!(resolve_version(Some("  ".into())), "development");
    }

    #[test]
    fn version_env_is_used() {
        assert_eq!(resolve_version(Some("1.2.3".into())), "1.2.3");
    }

    #[test]
    fn vcs_info_sha1_is_read() {
        let raw = r#"{"git":{"sha1":"0123456789abcdef0123456789abcdef01234567"},"path_in_vcs":""}"#;
        assert_eq!(
            commit_from_vcs_info_str(raw).as_deref(),
            Some("0123456789abcdef0123456789abcdef01234567")
        );
    }

    #[test]
    fn vcs_info_without_sha1_is_ignored() {
        assert_eq!(commit_from_vcs_info_str(r#"{"path_in_vcs":""}"#), None);
        assert_eq!(commit_from_vcs_info_str(r#"{"git":{"sha1":7}}"#), None);
        assert_eq!(commit_from_vcs_info_str("not json"), None);
    }

    #[test]
    fn env_commit_overrides_other_sources() {
        let commit = resolve_commit([
            Some("abc1234".to_string()),
            Some("from-vcs-info".to_string()),
            Some("from-git\n".to_string()),
        ]);
        assert_eq!(commit, "abc1234");
    }

    #[test]
    fn vcs_info_beats_git() {
        let commit = resolve_commit([None, Some("from-vcs-info".to_string()), Some("from-git\n".to_string())]);
        assert_eq!(commit, "from-vcs-info");
    }

    #[test]
    fn git_output_is_trimmed() {
        let commit = resolve_commit([None, None, Some("f205a17389ccf9bdc44b30500b8ac9b78f90a230\n".to_string())]);
        assert_eq!(commit, "f205a17389ccf9bdc44b30500b8ac9b78f90a230");
    }

    #[test]
    fn blank_override_falls_through() {
        let commit = resolve_commit([Some(String::new()), None, Some("from-git".to_string())]);
        assert_eq!(commit, "from-git");
    }

    #[test]
    fn no_source_gives_empty_commit() {
        assert_eq!(resolve_commit([None, None, None]), "");
    }

    #[test]
    fn watch_paths_include_branch_ref() {
        let paths = git_watch_paths(
            Some(".git/HEAD\n".to_string()),
            Some(".git/refs/heads/main\n".to_string()),
            Some(".git/packed-refs\n".to_string()),
        );
        assert_eq!(
            paths,
            vec![".git/HEAD", ".git/refs/heads/main", ".git/packed-refs"]
        );
    }

    #[test]
    fn detached_head_watches_head_and_packed_refs() {
        let paths = git_watch_paths(
            Some(".git/HEAD".to_string()),
            None,
            Some(".git/packed-refs".to_string()),
        );
        assert_eq!(paths, vec![".git/HEAD", ".git/packed-refs"]);
    }

    #[test]
    fn no_git_watches_nothing() {
        assert!(git_watch_paths(None, None, None).is_empty());
    }
}
