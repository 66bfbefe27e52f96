//! ONNX session wrapper for the trained CIFAR-10 model.

use std::path::Path;

use ndarray::Array4;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;

use crate::error::{Error, Result};
use crate::labels::NUM_CLASSES;

/// Fixed model filename, read from the working directory.
pub const MODEL_FILE: &str = "m_s1.onnx";

/// A loaded classifier session.
///
/// The model accepts a (1, 32, 32, 3) float tensor scaled to [0,1] in RGB
/// channel order and produces a length-10 probability vector aligned with
/// the fixed label order.
pub struct Classifier {
    session: Session,
}

impl Classifier {
    /// Load the model from the fixed filename in the working directory.
    pub fn load_default() -> Result<Self> {
        Self::load(Path::new(MODEL_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ModelNotFound(path.display().to_string()));
        }

        let _ = ort::init().with_name("cifar-classifier").commit();

        let session = Session::builder()
            .map_err(|e| Error::ModelLoad(format!("failed to create session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| Error::ModelLoad(format!("failed to set optimization level: {e}")))?
            .with_intra_threads(4)
            .map_err(|e| Error::ModelLoad(format!("failed to set intra threads: {e}")))?
            .commit_from_file(path)
            .map_err(|e| Error::ModelLoad(format!("failed to load ONNX model: {e}")))?;

        Ok(Self { session })
    }

    /// Run one forward pass and return the probability vector.
    ///
    /// The output row is validated against the label-set length so index
    /// correspondence can never drift.
    pub fn predict(&mut self, input: Array4<f32>) -> Result<Vec<f32>> {
        let input_name = self.session.inputs()[0].name().to_string();

        let input_tensor = Value::from_array(input)
            .map_err(|e| Error::Inference(format!("failed to create input tensor: {e}")))?;

        let outputs = self
            .session
            .run(ort::inputs![input_name.as_str() => input_tensor])
            .map_err(|e| Error::Inference(e.to_string()))?;

        let output_value = outputs
            .values()
            .next()
            .ok_or_else(|| Error::Inference("model produced no outputs".to_string()))?;

        let (_, data) = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference(format!("failed to extract output tensor: {e}")))?;

        let probabilities: Vec<f32> = data.to_vec();
        if probabilities.len() != NUM_CLASSES {
            return Err(Error::OutputShape {
                expected: NUM_CLASSES,
                actual: probabilities.len(),
            });
        }

        Ok(probabilities)
    }
}
