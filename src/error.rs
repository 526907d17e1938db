use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParityError {
    #[error(transparent)]
    Fileset(#[from] crate::fileset::FilesetError),

    #[error(transparent)]
    Compare(#[from] crate::compare::CompareError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let err = ParityError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ParityError = io_err.into();
        assert!(matches!(err, ParityError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_fileset_error_is_transparent() {
        let fileset_err = crate::fileset::FilesetError::RootNotFound {
            root: "../prod".into(),
        };
        let err: ParityError = fileset_err.into();
        assert_eq!(
            err.to_string(),
            "environment directory not found: '../prod'"
        );
    }

    #[test]
    fn test_compare_error_is_transparent() {
        let compare_err = crate::compare::CompareError::Read {
            path: "../dev/main.tf".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: ParityError = compare_err.into();
        assert!(matches!(err, ParityError::Compare(_)));
        assert!(err.to_string().contains("main.tf"));
        assert!(err.to_string().contains("denied"));
    }
}
