//! Error types shared by both entry points.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Model file not found: {0}")]
    ModelNotFound(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Model output has {actual} values, expected {expected}")]
    OutputShape { expected: usize, actual: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_model_not_found() {
        let error = Error::ModelNotFound("m_s1.onnx".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Model file not found: m_s1.onnx");
    }

    #[test]
    fn test_error_display_output_shape() {
        let error = Error::OutputShape {
            expected: 10,
            actual: 1000,
        };
        let display = format!("{}", error);
        assert!(display.contains("1000"));
        assert!(display.contains("10"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Inference("session failed".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Inference"));
        assert!(debug.contains("session failed"));
    }
}
