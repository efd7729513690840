use std::path::Path;

pub const INPUT_SUFFIX: &str = ".txt";
pub const OUTPUT_SUFFIX: &str = ".html";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileNameError {
    #[error("file name is empty")]
    Empty,
    #[error("invalid {role} file name {name:?}: expected a name ending in {suffix}")]
    WrongSuffix {
        role: &'static str,
        name: String,
        suffix: &'static str,
    },
}

/// Input documents must be plain `.txt` files.
pub fn validate_input_name(name: &str) -> Result<(), FileNameError> {
    validate(name, "input", INPUT_SUFFIX)
}

/// The generated page must be an `.html` file.
pub fn validate_output_name(name: &str) -> Result<(), FileNameError> {
    validate(name, "output", OUTPUT_SUFFIX)
}

fn validate(name: &str, role: &'static str, suffix: &'static str) -> Result<(), FileNameError> {
    if name.trim().is_empty() {
        return Err(FileNameError::Empty);
    }
    // A bare suffix such as ".txt" has no file stem.
    let has_stem = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.len() > suffix.len());
    if !name.ends_with(suffix) || !has_stem {
        return Err(FileNameError::WrongSuffix {
            role,
            name: name.to_string(),
            suffix,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_expected_suffixes() {
        assert_eq!(validate_input_name("data/words.txt"), Ok(()));
        assert_eq!(validate_output_name("cloud.html"), Ok(()));
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert!(matches!(
            validate_input_name("WORDS.TXT"),
            Err(FileNameError::WrongSuffix { role: "input", .. })
        ));
    }

    #[test]
    fn rejects_wrong_or_missing_names() {
        assert_eq!(validate_output_name("  "), Err(FileNameError::Empty));
        assert!(validate_output_name("cloud.htm").is_err());
        assert!(validate_output_name(".html").is_err());
        assert!(validate_input_name("notes.txt.bak").is_err());
    }
}
