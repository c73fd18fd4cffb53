use crate::shared::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::Path;

/// Read the identifier list: one identifier per line, surrounding whitespace
/// ignored, blank lines skipped. A missing file is a `ConfigurationError`.
pub fn read_identifiers(path: &Path) -> AppResult<Vec<String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::ConfigurationError(format!(
                "'{}' file not found",
                path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(parse_identifiers(&contents))
}

pub fn parse_identifiers(contents: &str) -> Vec<String> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_trims_and_keeps_order() {
        let ids = parse_identifiers("  5\n9  \r\n\t52991\t\n");
        assert_eq!(ids, vec!["5", "9", "52991"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let ids = parse_identifiers("5\n\n   \n9\n");
        assert_eq!(ids, vec!["5", "9"]);
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let ids = parse_identifiers("\u{feff}21\n");
        assert_eq!(ids, vec!["21"]);
    }

    #[test]
    fn test_parse_keeps_non_numeric_lines() {
        // Validation happens per identifier during the check, not here
        let ids = parse_identifiers("5\nabc\n");
        assert_eq!(ids, vec!["5", "abc"]);
    }

    #[test]
    fn test_empty_file_yields_empty_list() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let ids = read_identifiers(file.path()).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "5").unwrap();
        writeln!(file, "9").unwrap();

        let ids = read_identifiers(file.path()).unwrap();
        assert_eq!(ids, vec!["5", "9"]);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_identifiers(&dir.path().join("animes.txt"));
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }
}
