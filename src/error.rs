use thiserror::Error;

#[derive(Error, Debug)]
pub enum CifarError {
    #[error("Test batch not found: {0}. Download the CIFAR-10 binary version and unpack it into ./cifar-10-batches-bin")]
    DatasetNotFound(String),

    #[error("Malformed test batch: {0}")]
    DatasetFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] cifar_common::Error),
}

pub type Result<T> = std::result::Result<T, CifarError>;
