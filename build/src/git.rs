use std::fs;
use std::path::{Path, PathBuf};

/// Files whose change means HEAD may point at a different commit: HEAD
/// itself, the reflog (touched by every commit), the branch ref HEAD names
/// and `packed-refs`. Only existing files are returned.
pub fn watched_paths(git_dir: &Path) -> Vec<PathBuf> {
    let mut paths = vec![git_dir.join("HEAD"), git_dir.join("logs").join("HEAD")];
    if let Ok(head) = fs::read_to_string(git_dir.join("HEAD"))
        && let Some(reference) = head_ref(&head)
    {
        paths.push(git_dir.join(reference));
    }
    paths.push(git_dir.join("packed-refs"));
    paths.retain(|path| path.exists());
    paths
}

/// The ref named by a symbolic HEAD (`ref: refs/heads/main`), or `None` for a
/// detached HEAD.
pub fn head_ref(head: &str) -> Option<&str> {
    let reference = head.trim().strip_prefix("ref:")?.trim();
    if reference.is_empty() { None } else { Some(reference) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_symbolic_head() {
        assert_eq!(head_ref("ref: refs/heads/main\n"), Some("refs/heads/main"));
    }

    #[test]
    fn detached_head_has_no_ref() {
        assert_eq!(head_ref("3f2a9c1d0e\n"), None);
        assert_eq!(head_ref("ref:   \n"), None);
    }

    #[test]
    fn missing_git_dir_watches_nothing() {
        assert!(watched_paths(Path::new("/nonexistent/command-fix/.git")).is_empty());
    }
}
