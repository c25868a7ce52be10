//! On-disk size measurement.

use std::path::Path;

use log::debug;
use walkdir::WalkDir;

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Recursively traverses the directory tree using `walkdir` and sums the sizes
/// of all regular files found. Entries that cannot be read (permission denied,
/// broken symlinks, etc.) are skipped so the function always returns a result.
///
/// Returns `0` if the path does not exist. A path to a single file returns
/// that file's size.
pub fn calculate_dir_size(path: &Path) -> u64 {
    let total = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum();

    debug!("{}: {total} bytes", path.display());
    total
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_path_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(calculate_dir_size(&temp_dir.path().join("missing")), 0);
    }

    #[test]
    fn test_empty_dir_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(calculate_dir_size(temp_dir.path()), 0);
    }

    #[test]
    fn test_nested_files_are_summed() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("top.bin"), [0u8; 100]).unwrap();
        fs::write(nested.join("deep.bin"), [0u8; 924]).unwrap();

        assert_eq!(calculate_dir_size(temp_dir.path()), 1_024);
    }

    #[test]
    fn test_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "hello").unwrap();

        assert_eq!(calculate_dir_size(&file), 5);
    }
}
