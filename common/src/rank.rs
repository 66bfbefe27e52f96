//! Prediction ranking and display formatting.

use crate::labels::label_for;

/// One entry of the prediction vector, paired with its class.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub index: usize,
    pub label: &'static str,
    pub probability: f32,
}

impl Prediction {
    /// Probability as a percentage.
    pub fn percentage(&self) -> f32 {
        self.probability * 100.0
    }

    /// Row text for the ranked list, e.g. `"Truck: 87.65%"`.
    pub fn display_row(&self) -> String {
        format!("{}: {:.2}%", capitalize(self.label), self.percentage())
    }
}

/// All predictions sorted by probability, most confident first.
///
/// The sort is stable, so equal probabilities keep their class-index order.
pub fn rank_predictions(probabilities: &[f32]) -> Vec<Prediction> {
    let mut ranked: Vec<Prediction> = probabilities
        .iter()
        .enumerate()
        .map(|(index, &probability)| Prediction {
            index,
            label: label_for(index).unwrap_or("unknown"),
            probability,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

/// The argmax entry of the prediction vector.
pub fn top_prediction(probabilities: &[f32]) -> Option<Prediction> {
    let (index, &probability) = probabilities
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))?;

    Some(Prediction {
        index,
        label: label_for(index)?,
        probability,
    })
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
