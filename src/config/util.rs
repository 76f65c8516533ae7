//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/firmware/src/   ← start
/// /home/user/firmware/webembed.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a/webembed.toml"), "").unwrap();

        let found = find_config_file(Path::new("webembed.toml"), &nested);
        assert_eq!(found, Some(dir.path().join("a/webembed.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("webembed.toml"), "").unwrap();
        fs::write(nested.join("webembed.toml"), "").unwrap();

        let found = find_config_file(Path::new("webembed.toml"), &nested);
        assert_eq!(found, Some(nested.join("webembed.toml")));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(&path, dir.path()), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("x");
        fs::create_dir_all(nested.join("unlikely-config-name.toml")).unwrap();

        let found = find_config_file(Path::new("unlikely-config-name.toml"), &nested);
        assert_ne!(found, Some(nested.join("unlikely-config-name.toml")));
    }
}
