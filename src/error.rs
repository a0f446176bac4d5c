use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] streetpath_core::Error),
    #[error("Failed to read configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse configuration {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Missing {0}")]
    Missing(String),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    /// 1 when a street query matches nothing, 2 when the streets are not
    /// connected, 3 otherwise
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Core(streetpath_core::Error::StreetNotFound { .. }) => ExitCode::from(1),
            Self::Core(streetpath_core::Error::NoPathExists { .. }) => ExitCode::from(2),
            _ => ExitCode::from(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_failure_kind() {
        let not_found = AppError::from(streetpath_core::Error::StreetNotFound {
            query: "nowhere".to_string(),
            samples: vec![],
        });
        let no_path = AppError::from(streetpath_core::Error::NoPathExists { from: 1, to: 2 });
        let missing = AppError::Missing("start street".to_string());

        assert_eq!(not_found.exit_code(), ExitCode::from(1));
        assert_eq!(no_path.exit_code(), ExitCode::from(2));
        assert_eq!(missing.exit_code(), ExitCode::from(3));
    }
}
