mod app;
mod io;
mod model;

use app::ClassifierApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([700.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Image Classifier - Multiple Classifications",
        options,
        Box::new(|cc| Box::new(ClassifierApp::new(cc))),
    )
}
