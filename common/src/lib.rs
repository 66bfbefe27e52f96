//! CIFAR-10 Classifier Common Library
//!
//! Shared data contract between the evaluation CLI and the desktop app:
//! the fixed label set, image preprocessing, the ONNX session wrapper and
//! prediction ranking.

pub mod error;
pub mod labels;
pub mod model;
pub mod preprocess;
pub mod rank;

pub use error::{Error, Result};
pub use labels::{CLASS_LABELS, NUM_CLASSES};
pub use model::{Classifier, MODEL_FILE};
pub use preprocess::{image_to_input, INPUT_SIZE};
pub use rank::{rank_predictions, top_prediction, Prediction};
