use crate::image_ref::ImageRef;
use crate::presenter::interface::{Presenter, Screen};
use crate::user_input::interface::UserInputEvent;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const TOAST_DURATION: Duration = Duration::from_secs(2);

#[derive(Default)]
struct Shared {
    screen: Screen,
    toast: Option<(String, Instant)>,
    closed: bool,
}

/// Presenter half. Lives on the app thread and only writes shared state.
pub struct PresenterGui {
    shared: Arc<Mutex<Shared>>,
}

/// Window half. Must be handed to `eframe::run_native` on the main thread.
pub struct PresenterWindow {
    shared: Arc<Mutex<Shared>>,
    input: Sender<UserInputEvent>,
    texture: Option<(ImageRef, egui::TextureHandle)>,
}

impl PresenterGui {
    pub fn new(input: Sender<UserInputEvent>) -> (Self, PresenterWindow) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        (
            Self {
                shared: shared.clone(),
            },
            PresenterWindow {
                shared,
                input,
                texture: None,
            },
        )
    }

    fn with_shared(
        &self,
        f: impl FnOnce(&mut Shared),
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut shared = self.shared.lock().map_err(|e| e.to_string())?;
        f(&mut shared);
        Ok(())
    }
}

impl Presenter for PresenterGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_shared(|shared| shared.screen = Screen::default())
    }

    fn render(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_shared(|shared| shared.screen = screen.clone())
    }

    fn show_toast(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_shared(|shared| shared.toast = Some((message.to_string(), Instant::now())))
    }

    fn close(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_shared(|shared| shared.closed = true)
    }
}

impl PresenterWindow {
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 560.0])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native("Asclepius", options, Box::new(move |_cc| Box::new(self)))
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    fn send(&self, event: UserInputEvent) {
        let _ = self.input.send(event);
    }

    fn texture_for(&mut self, ctx: &egui::Context, image: &ImageRef) -> Option<egui::TextureHandle> {
        if let Some((cached, handle)) = &self.texture {
            if cached == image {
                return Some(handle.clone());
            }
        }

        let rgba = image::open(image.path()).ok()?.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let handle = ctx.load_texture(image.to_string(), color_image, Default::default());
        self.texture = Some((image.clone(), handle.clone()));
        Some(handle)
    }

    fn show_image(&mut self, ui: &mut egui::Ui, image: Option<&ImageRef>) {
        let texture = image.and_then(|image| self.texture_for(ui.ctx(), image));
        match texture {
            Some(texture) => {
                let size = texture.size_vec2();
                let scale = (224.0 / size.x.max(size.y)).min(1.0) * 1.5;
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    size * scale,
                )));
            }
            None => {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(224.0, 224.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 4.0, egui::Color32::from_rgb(220, 220, 220));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "No image",
                    egui::FontId::proportional(16.0),
                    egui::Color32::DARK_GRAY,
                );
            }
        }
    }
}

impl eframe::App for PresenterWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (screen, toast, closed) = match self.shared.lock() {
            Ok(shared) => (
                shared.screen.clone(),
                shared
                    .toast
                    .as_ref()
                    .filter(|(_, shown_at)| shown_at.elapsed() < TOAST_DURATION)
                    .map(|(message, _)| message.clone()),
                shared.closed,
            ),
            Err(_) => return,
        };

        if closed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.send(UserInputEvent::Quit);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                match &screen {
                    Screen::Main {
                        preview,
                        analyze_visible,
                        progress_visible,
                    } => {
                        self.show_image(ui, preview.as_ref());
                        ui.add_space(12.0);
                        if *progress_visible {
                            ui.spinner();
                        }
                        if ui.button("Gallery").clicked() {
                            self.send(UserInputEvent::Gallery);
                        }
                        if *analyze_visible && ui.button("Analyze").clicked() {
                            self.send(UserInputEvent::Analyze);
                        }
                    }
                    Screen::Result { image, text } => {
                        self.show_image(ui, Some(image));
                        ui.add_space(12.0);
                        ui.label(egui::RichText::new(text).size(16.0));
                        ui.add_space(12.0);
                        if ui.button("Back").clicked() {
                            self.send(UserInputEvent::Back);
                        }
                    }
                }

                if let Some(message) = &toast {
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(message)
                            .color(egui::Color32::WHITE)
                            .background_color(egui::Color32::from_rgb(60, 60, 60)),
                    );
                }
            });
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
