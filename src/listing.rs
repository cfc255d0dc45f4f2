//! Listing of a freshly cloned directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Names of the entries directly inside `dir`, sorted ascending.
///
/// Sorting is byte-wise and case-sensitive, so `README.md` comes before
/// `client`. Returns `Ok(None)` when `dir` does not exist.
pub fn sorted_entries(dir: &Path) -> Result<Option<Vec<String>>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(Some(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_is_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(sorted_entries(&temp.path().join("absent")).unwrap(), None);
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(sorted_entries(temp.path()).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_entries_sorted_case_sensitive() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("server")).unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join("client.ts"), "").unwrap();
        fs::write(temp.path().join("README.md"), "").unwrap();
        fs::write(temp.path().join("Cargo.toml"), "").unwrap();

        let entries = sorted_entries(temp.path()).unwrap().unwrap();
        assert_eq!(
            entries,
            vec![".git", "Cargo.toml", "README.md", "client.ts", "server"]
        );
    }

    #[test]
    fn test_entries_are_not_recursive() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/nested")).unwrap();
        fs::write(temp.path().join("src/nested/file.rs"), "").unwrap();

        let entries = sorted_entries(temp.path()).unwrap().unwrap();
        assert_eq!(entries, vec!["src"]);
    }
}
