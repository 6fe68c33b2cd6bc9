use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a registry or config file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a text file after checking that it is a regular, non-symlinked
/// file no larger than [`MAX_FILE_SIZE`].
///
/// Invalid UTF-8 sequences are replaced with U+FFFD, so a bad byte only
/// spoils the line it sits on.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Used in error messages (e.g., "registry file")
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    let bytes = fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("registry.txt");
        fs::write(&file_path, "a -> b").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/registry.txt");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("registry.txt");
        fs::write(&file_path, "serde -> serde_derive").unwrap();

        let content = read_regular_file(&file_path, "registry file").unwrap();
        assert_eq!(content, "serde -> serde_derive");
    }

    #[test]
    fn test_read_regular_file_replaces_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("registry.txt");
        fs::write(&file_path, b"a -> b\nbad\xff -> c\n").unwrap();

        let content = read_regular_file(&file_path, "registry file").unwrap();
        assert_eq!(content, "a -> b\nbad\u{FFFD} -> c\n");
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_regular_file(temp_dir.path(), "registry file");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_missing() {
        let result = read_regular_file(Path::new("/nonexistent/registry.txt"), "registry file");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read registry file metadata"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "a -> b").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_regular_file(&link, "registry file");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/registry.txt");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
