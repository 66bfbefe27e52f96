use cifar_classifier_rust::{dataset, eval::Metrics, Result};
use cifar_common::{Classifier, MODEL_FILE};
use indicatif::ProgressBar;
use rayon::prelude::*;

// Bound on how many input tensors are held in memory at once
const CONVERT_CHUNK: usize = 256;

fn main() -> Result<()> {
    println!("🧪 cifar-classifier-rust - test set evaluation\n");

    // 1. Test batch
    println!("[1/3] Loading test batch...");
    let batch_path = dataset::default_test_batch_path();
    let examples = dataset::load_test_batch(&batch_path)?;
    println!("✔ {} images\n", examples.len());

    // 2. Model
    println!("[2/3] Loading model...");
    let mut classifier = Classifier::load_default()?;
    println!("✔ {}\n", MODEL_FILE);

    // 3. Evaluation
    println!("[3/3] Evaluating...");
    let bar = ProgressBar::new(examples.len() as u64);
    let mut metrics = Metrics::default();

    for chunk in examples.chunks(CONVERT_CHUNK) {
        let inputs: Vec<_> = chunk.par_iter().map(|example| example.to_input()).collect();
        for (example, input) in chunk.iter().zip(inputs) {
            let probabilities = classifier.predict(input)?;
            metrics.record(&probabilities, example.label);
            bar.inc(1);
        }
    }
    bar.finish_and_clear();
    println!("✔ {} images evaluated\n", metrics.count());

    println!("Test Loss: {:.4}", metrics.loss());
    println!(
        "Test Accuracy: {:.4} ({:.2}%)",
        metrics.accuracy(),
        metrics.accuracy() * 100.0
    );

    Ok(())
}
