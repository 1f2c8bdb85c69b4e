use std::fmt;

/// Failure to translate a Windows path into its WSL mount form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateError {
    pub message: String,
    pub original_path: String,
}

impl TranslateError {
    fn new(message: impl Into<String>, original_path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            original_path: original_path.into(),
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.original_path)
    }
}

impl std::error::Error for TranslateError {}

/// Translate a Windows drive path to its WSL mount equivalent.
///
/// `H:\Dev\Proj.code-workspace` and `H:/Dev/Proj.code-workspace` both
/// become `/mnt/h/Dev/Proj.code-workspace`. The drive letter is
/// lowercased and separators normalized to `/`. A path that already
/// starts with `/` is assumed to be a WSL path and passes through
/// unchanged. This is a pure string transformation; it never touches
/// the filesystem.
pub fn to_wsl_mount(path: &str) -> Result<String, TranslateError> {
    if path.is_empty() {
        return Err(TranslateError::new("empty path", path));
    }

    if path.starts_with('/') {
        return Ok(path.to_string());
    }

    let bytes = path.as_bytes();
    let drive = match bytes.first() {
        Some(c) if c.is_ascii_alphabetic() && bytes.get(1) == Some(&b':') => {
            c.to_ascii_lowercase() as char
        }
        _ => {
            return Err(TranslateError::new(
                "not a Windows drive path",
                path,
            ))
        }
    };

    let rest = &path[2..];
    let rest = rest.replace('\\', "/");
    let rest = rest.trim_start_matches('/');

    if rest.is_empty() {
        Ok(format!("/mnt/{}", drive))
    } else {
        Ok(format!("/mnt/{}/{}", drive, rest))
    }
}
