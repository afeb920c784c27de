//! Argument validators for `clap`'s `value_parser`.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Accepts an existing, non-empty regular file.
pub fn non_empty_file(arg: &str) -> Result<PathBuf, String> {
    let path = Path::new(arg);
    if !path.is_file() {
        return Err(format!("File does not exist: '{}'", arg));
    }
    let len = path
        .metadata()
        .map_err(|e| format!("Cannot read file metadata for '{}': {}", arg, e))?
        .len();
    if len == 0 {
        return Err(format!("File is empty: '{}'", arg));
    }
    Ok(path.to_path_buf())
}

/// Accepts a path where a new file may be created.
pub fn new_file_path(arg: &str) -> Result<PathBuf, String> {
    let path = Path::new(arg);
    if arg.ends_with('/') || arg.ends_with(MAIN_SEPARATOR) || path.is_dir() {
        return Err(format!(
            "Directory provided rather than file path: '{}'",
            arg
        ));
    }
    if path.exists() {
        return Err(format!("File already exists: '{}'", arg));
    }
    Ok(path.to_path_buf())
}

pub fn non_negative_mismatch(arg: &str) -> Result<u32, String> {
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| format!("Mismatch number must be an integer: '{}'", arg))?;
    if value < 0 {
        return Err("Mismatch number cannot be negative".to_string());
    }
    u32::try_from(value).map_err(|_| format!("Mismatch number is too large: '{}'", arg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn non_empty_file_accepts_file_with_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ipcress.txt");
        fs::write(&path, "content").unwrap();
        assert_eq!(non_empty_file(path.to_str().unwrap()), Ok(path));
    }

    #[test]
    fn non_empty_file_rejects_missing_and_empty_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "").unwrap();

        let missing = missing.to_str().unwrap();
        assert_eq!(
            non_empty_file(missing),
            Err(format!("File does not exist: '{}'", missing))
        );
        let empty = empty.to_str().unwrap();
        assert_eq!(
            non_empty_file(empty),
            Err(format!("File is empty: '{}'", empty))
        );
    }

    #[test]
    fn non_empty_file_rejects_directories() {
        let dir = tempdir().unwrap();
        let arg = dir.path().to_str().unwrap();
        assert_eq!(
            non_empty_file(arg),
            Err(format!("File does not exist: '{}'", arg))
        );
    }

    #[test]
    fn new_file_path_rejects_directories_and_existing_files() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("out.tsv");
        fs::write(&existing, "x").unwrap();

        let dir_arg = dir.path().to_str().unwrap();
        assert_eq!(
            new_file_path(dir_arg),
            Err(format!(
                "Directory provided rather than file path: '{}'",
                dir_arg
            ))
        );
        assert_eq!(
            new_file_path("results/"),
            Err("Directory provided rather than file path: 'results/'".to_string())
        );
        let existing_arg = existing.to_str().unwrap();
        assert_eq!(
            new_file_path(existing_arg),
            Err(format!("File already exists: '{}'", existing_arg))
        );
    }

    #[test]
    fn new_file_path_accepts_path_in_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.tsv");
        assert_eq!(new_file_path(path.to_str().unwrap()), Ok(path));
    }

    #[test]
    fn mismatch_number_must_be_non_negative_integer() {
        assert_eq!(non_negative_mismatch("0"), Ok(0));
        assert_eq!(non_negative_mismatch("4"), Ok(4));
        assert_eq!(
            non_negative_mismatch("-1"),
            Err("Mismatch number cannot be negative".to_string())
        );
        assert!(non_negative_mismatch("two").is_err());
        assert!(non_negative_mismatch("99999999999").is_err());
    }
}
