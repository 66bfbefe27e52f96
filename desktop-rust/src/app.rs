use eframe::egui::{self, Color32, RichText};

use cifar_common::{image_to_input, rank_predictions, top_prediction, Classifier, Error};

use crate::io::load_thumbnail;
use crate::model::{Outcome, Phase, Session};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

pub struct ClassifierApp {
    classifier: Option<Classifier>,
    session: Session,
    thumbnail: Option<egui::TextureHandle>,
    status: String,
    busy: bool,
    pending_classify: u8,
    close_confirmed: bool,
}

impl ClassifierApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let classifier = match Classifier::load_default() {
            Ok(classifier) => Some(classifier),
            Err(err) => {
                show_error(&format!("Could not load model: {err}"));
                None
            }
        };
        let status = if classifier.is_some() {
            "Ready to classify images"
        } else {
            "Model not loaded. Classification is unavailable."
        };

        Self {
            classifier,
            session: Session::new(),
            thumbnail: None,
            status: status.to_string(),
            busy: false,
            pending_classify: 0,
            close_confirmed: false,
        }
    }

    fn upload_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Select an image")
            .add_filter("Image files", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            // Cancelled picker is a silent no-op
            return;
        };

        match load_thumbnail(&path) {
            Ok((size, pixels)) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
                self.thumbnail = Some(ctx.load_texture(
                    path.display().to_string(),
                    color_image,
                    egui::TextureOptions::default(),
                ));
                self.session.image_loaded(path);
                self.status = "Image loaded. Ready to classify!".to_string();
            }
            Err(err) => show_error(&format!("Could not load image: {err:#}")),
        }
    }

    fn run_classification(&mut self) {
        match self.classify_current() {
            Ok(outcome) => {
                self.session.record_outcome(outcome);
                self.status =
                    "Classification complete! Upload another image or classify again.".to_string();
            }
            Err(err) => {
                show_error(&format!("Prediction failed: {err}"));
                self.status = "Classification failed. Try again.".to_string();
            }
        }
        self.busy = false;
    }

    fn classify_current(&mut self) -> cifar_common::Result<Outcome> {
        let Some(path) = self.session.image_path.clone() else {
            return Err(Error::Inference("no image loaded".to_string()));
        };
        let Some(classifier) = self.classifier.as_mut() else {
            return Err(Error::ModelLoad("model not loaded".to_string()));
        };

        // The model input comes from the original file, not the thumbnail
        let input = image_to_input(&path)?;
        let probabilities = classifier.predict(input)?;

        let top = top_prediction(&probabilities)
            .ok_or_else(|| Error::Inference("empty prediction vector".to_string()))?;
        Ok(Outcome {
            top,
            ranked: rank_predictions(&probabilities),
        })
    }

    fn reset_for_new(&mut self) {
        self.session.reset_for_new();
        self.thumbnail = None;
        self.status = "Ready for next classification".to_string();
    }

    fn clear_all(&mut self) {
        self.session.clear_all();
        self.thumbnail = None;
        self.status = "All results cleared. Ready to start fresh.".to_string();
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if self.close_confirmed || !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        if confirm_quit() {
            self.close_confirmed = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);

        // Classification is deferred two frames so the busy status paints
        // before inference blocks the UI thread
        if self.pending_classify > 0 {
            self.pending_classify -= 1;
            if self.pending_classify == 0 {
                self.run_classification();
            } else {
                ctx.request_repaint();
            }
        }

        let model_ready = self.classifier.is_some();
        let mut reset_clicked = false;
        let mut clear_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(
                    RichText::new("CIFAR-10 Image Classifier")
                        .size(24.0)
                        .strong()
                        .color(Color32::from_gray(60)),
                );
                ui.label(RichText::new(&self.status).color(Color32::from_gray(120)));
                ui.label(
                    RichText::new(format!(
                        "Classifications performed: {}",
                        self.session.count
                    ))
                    .size(12.0)
                    .italics()
                    .color(Color32::from_gray(140)),
                );
                ui.add_space(8.0);

                let upload_caption = if self.session.phase == Phase::Idle {
                    "Upload New Image"
                } else {
                    "Upload Different Image"
                };
                if ui
                    .add_enabled(model_ready && !self.busy, egui::Button::new(upload_caption))
                    .clicked()
                {
                    self.upload_image(ctx);
                }
                ui.add_space(8.0);

                match &self.thumbnail {
                    Some(texture) => {
                        ui.add(egui::Image::new((texture.id(), texture.size_vec2())));
                    }
                    None => {
                        let placeholder = if self.session.count > 0 {
                            "Upload a new image to classify"
                        } else {
                            "No image selected\nUpload an image to start classifying"
                        };
                        ui.label(RichText::new(placeholder).color(Color32::from_gray(120)));
                    }
                }
                ui.add_space(8.0);

                if matches!(self.session.phase, Phase::Loaded | Phase::Classified) {
                    let classify_caption = if self.busy {
                        "Classifying..."
                    } else if self.session.phase == Phase::Classified {
                        "Classify This Image Again"
                    } else {
                        "Classify This Image"
                    };
                    if ui
                        .add_enabled(model_ready && !self.busy, egui::Button::new(classify_caption))
                        .clicked()
                    {
                        self.busy = true;
                        self.pending_classify = 2;
                        self.status = "Analyzing image...".to_string();
                        ctx.request_repaint();
                    }
                }

                if let Some(outcome) = self.session.outcome.clone() {
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new(format!("Prediction: {}", outcome.top.label.to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(Color32::from_rgb(33, 150, 243)),
                    );
                    ui.label(format!("Confidence: {:.2}%", outcome.top.percentage()));
                    ui.add_space(6.0);

                    ui.label(RichText::new("All Predictions:").strong());
                    egui::ScrollArea::vertical()
                        .max_height(220.0)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            for prediction in &outcome.ranked {
                                ui.label(prediction.display_row());
                            }
                        });
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("Classify Another Image").clicked() {
                            reset_clicked = true;
                        }
                        if ui.button("Clear All Results").clicked() {
                            clear_clicked = true;
                        }
                    });
                }
            });
        });

        if reset_clicked {
            self.reset_for_new();
        }
        if clear_clicked {
            self.clear_all();
        }
    }
}

fn show_error(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn confirm_quit() -> bool {
    let result = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("Quit")
        .set_description("Do you want to quit the classifier?")
        .set_buttons(rfd::MessageButtons::OkCancel)
        .show();
    matches!(result, rfd::MessageDialogResult::Ok)
}
