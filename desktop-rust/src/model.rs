use std::path::PathBuf;

use cifar_common::Prediction;

/// UI phase. Widget visibility is derived from this, not toggled ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loaded,
    Classified,
}

/// Result of one classification: top label plus the full ranked list.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub top: Prediction,
    pub ranked: Vec<Prediction>,
}

/// Mutable session state: the loaded image and the classification counter.
///
/// Created at window construction, destroyed at process exit.
#[derive(Debug, Default)]
pub struct Session {
    pub phase: Phase,
    pub image_path: Option<PathBuf>,
    pub count: u32,
    pub outcome: Option<Outcome>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new upload replaces the current image and clears prior results.
    pub fn image_loaded(&mut self, path: PathBuf) {
        self.image_path = Some(path);
        self.outcome = None;
        self.phase = Phase::Loaded;
    }

    /// A completed classification. Counter only moves on success.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.count += 1;
        self.phase = Phase::Classified;
    }

    /// Back to the upload step; the counter is preserved.
    pub fn reset_for_new(&mut self) {
        self.image_path = None;
        self.outcome = None;
        self.phase = Phase::Idle;
    }

    /// Clears everything and zeroes the counter.
    pub fn clear_all(&mut self) {
        self.reset_for_new();
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> Outcome {
        let probabilities: Vec<f32> = (0..10).map(|i| if i == 9 { 0.91 } else { 0.01 }).collect();
        Outcome {
            top: cifar_common::top_prediction(&probabilities).unwrap(),
            ranked: cifar_common::rank_predictions(&probabilities),
        }
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.count, 0);
        assert!(session.image_path.is_none());
        assert!(session.outcome.is_none());
    }

    #[test]
    fn test_upload_transitions_to_loaded() {
        let mut session = Session::new();
        session.image_loaded(PathBuf::from("truck.jpg"));
        assert_eq!(session.phase, Phase::Loaded);
        assert!(session.outcome.is_none());
    }

    #[test]
    fn test_counter_increments_per_success() {
        let mut session = Session::new();
        session.image_loaded(PathBuf::from("truck.jpg"));
        session.record_outcome(outcome());
        assert_eq!(session.count, 1);
        assert_eq!(session.phase, Phase::Classified);

        // Re-classification of the same image is allowed
        session.record_outcome(outcome());
        assert_eq!(session.count, 2);
    }

    #[test]
    fn test_reset_preserves_counter() {
        let mut session = Session::new();
        session.image_loaded(PathBuf::from("truck.jpg"));
        session.record_outcome(outcome());
        session.reset_for_new();

        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.count, 1);
        assert!(session.image_path.is_none());
        assert!(session.outcome.is_none());
    }

    #[test]
    fn test_clear_all_zeroes_counter() {
        let mut session = Session::new();
        session.image_loaded(PathBuf::from("truck.jpg"));
        session.record_outcome(outcome());
        session.clear_all();

        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.count, 0);
        assert!(session.outcome.is_none());
    }

    #[test]
    fn test_new_upload_clears_previous_results() {
        let mut session = Session::new();
        session.image_loaded(PathBuf::from("truck.jpg"));
        session.record_outcome(outcome());

        session.image_loaded(PathBuf::from("frog.png"));
        assert_eq!(session.phase, Phase::Loaded);
        assert!(session.outcome.is_none());
        assert_eq!(session.count, 1);
        assert_eq!(session.image_path, Some(PathBuf::from("frog.png")));
    }

    #[test]
    fn test_failed_attempt_leaves_session_untouched() {
        let mut session = Session::new();
        session.image_loaded(PathBuf::from("truck.jpg"));

        // A failed classification never calls record_outcome
        assert_eq!(session.count, 0);
        assert_eq!(session.phase, Phase::Loaded);
    }
}
