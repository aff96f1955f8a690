// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{ExportError, Result};
use std::path::{Component, Path};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ExportError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Output names must be a single plain path component.
    pub fn validate_file_name(name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ExportError::Validation(
                "File name must not be empty".to_string(),
            ));
        }

        let mut components = Path::new(trimmed).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !trimmed.contains(['/', '\\']) => Ok(()),
            _ => Err(ExportError::Validation(format!(
                "File name must not contain path separators: {}",
                name
            ))),
        }
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(ExportError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            return text.to_string();
        }

        let mut end = max_length;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://dict.youdao.com").is_ok());
        assert!(Validator::validate_url("http://127.0.0.1:3000").is_ok());
        assert!(Validator::validate_url("dict.youdao.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(Validator::validate_file_name("words.json").is_ok());
        assert!(Validator::validate_file_name("").is_err());
        assert!(Validator::validate_file_name("..").is_err());
        assert!(Validator::validate_file_name("out/words.csv").is_err());
        assert!(Validator::validate_file_name("out\\words.csv").is_err());
        assert!(Validator::validate_file_name("/words.csv").is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(&temp.path().join("missing")).is_ok());

        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "x").unwrap();
        assert!(Validator::validate_directory(&file_path).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("单词本导出", 4), "单...");
    }
}
