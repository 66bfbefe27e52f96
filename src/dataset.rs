//! CIFAR-10 binary test batch loader.
//!
//! Each record is 3073 bytes: one label byte followed by 3072 pixel bytes
//! in channel-major order (1024 red, 1024 green, 1024 blue, each a 32x32
//! row-major plane).

use std::path::{Path, PathBuf};

use ndarray::Array4;

use crate::error::{CifarError, Result};
use cifar_common::{INPUT_SIZE, NUM_CLASSES};

pub const DATA_DIR: &str = "cifar-10-batches-bin";
pub const TEST_BATCH: &str = "test_batch.bin";

const PLANE_BYTES: usize = (INPUT_SIZE * INPUT_SIZE) as usize;
const IMAGE_BYTES: usize = 3 * PLANE_BYTES;
const RECORD_BYTES: usize = 1 + IMAGE_BYTES;

/// One labeled test image, pixels kept in the on-disk channel-major layout.
#[derive(Debug, Clone)]
pub struct Example {
    pub label: u8,
    pixels: Vec<u8>,
}

impl Example {
    /// Convert to the model input tensor: (1, 32, 32, 3) NHWC in [0,1].
    pub fn to_input(&self) -> Array4<f32> {
        let size = INPUT_SIZE as usize;
        Array4::from_shape_fn((1, size, size, 3), |(_, y, x, c)| {
            self.pixels[c * PLANE_BYTES + y * size + x] as f32 / 255.0
        })
    }
}

pub fn default_test_batch_path() -> PathBuf {
    Path::new(DATA_DIR).join(TEST_BATCH)
}

pub fn load_test_batch(path: &Path) -> Result<Vec<Example>> {
    if !path.exists() {
        return Err(CifarError::DatasetNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;

    if bytes.is_empty() || bytes.len() % RECORD_BYTES != 0 {
        return Err(CifarError::DatasetFormat(format!(
            "{} bytes is not a whole number of {}-byte records",
            bytes.len(),
            RECORD_BYTES
        )));
    }

    let mut examples = Vec::with_capacity(bytes.len() / RECORD_BYTES);

    for (i, record) in bytes.chunks_exact(RECORD_BYTES).enumerate() {
        let label = record[0];
        if label as usize >= NUM_CLASSES {
            return Err(CifarError::DatasetFormat(format!(
                "record {} has label {} outside the {}-class label set",
                i, label, NUM_CLASSES
            )));
        }
        examples.push(Example {
            label,
            pixels: record[1..].to_vec(),
        });
    }

    Ok(examples)
}
