//! The fixed CIFAR-10 label set.
//!
//! Index order matches the model output row; it must never change.

pub const NUM_CLASSES: usize = 10;

pub const CLASS_LABELS: [&str; NUM_CLASSES] = [
    "airplane",
    "automobile",
    "bird",
    "cat",
    "deer",
    "dog",
    "frog",
    "horse",
    "ship",
    "truck",
];

/// Label for a class index, if in range.
pub fn label_for(index: usize) -> Option<&'static str> {
    CLASS_LABELS.get(index).copied()
}
