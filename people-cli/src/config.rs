use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Load environment variables from a `.env` file.
///
/// With no explicit path the current directory is checked. Variables already
/// present in the environment are never overwritten. A missing default file
/// is not an error; a missing explicit file is.
///
/// Runs before tracing is initialized so `RUST_LOG` can come from the file;
/// the caller logs the returned path.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file: {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e).context("Failed to parse .env"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dotenv(Some(&dir.path().join("absent.env"))).unwrap_err();
        assert!(err.to_string().contains("absent.env"));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PEOPLE_CLI_TEST_ONLY_VAR=from-file").unwrap();

        let loaded = load_dotenv(Some(file.path())).unwrap();
        assert_eq!(loaded.as_deref(), Some(file.path()));
        assert_eq!(
            std::env::var("PEOPLE_CLI_TEST_ONLY_VAR").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn existing_variables_are_not_overridden() {
        std::env::set_var("PEOPLE_CLI_TEST_PRESET", "from-process");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PEOPLE_CLI_TEST_PRESET=from-file").unwrap();

        load_dotenv(Some(file.path())).unwrap();
        assert_eq!(
            std::env::var("PEOPLE_CLI_TEST_PRESET").as_deref(),
            Ok("from-process")
        );
    }
}
