use crate::device_display::interface::DeviceDisplay;
use crate::verdict::Verdict;
use eframe::egui;
use image::DynamicImage;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

const AFFIRMATION_SECS: f32 = 0.3;

#[derive(Default)]
struct Screen {
    lines: [String; 2],
    photo: Option<egui::ColorImage>,
    /// Bumped on every `show_image` so the window knows to re-upload.
    photo_version: u64,
    verdict: Option<(Verdict, Instant)>,
    error: Option<String>,
}

struct DisplayWindow {
    screen: Arc<Mutex<Screen>>,
    photo_texture: Option<(u64, egui::TextureHandle)>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut screen = self.screen.lock().unwrap();

        // Upload the photo as a texture when a new one arrives; drop the
        // texture when the screen has been cleared.
        match &screen.photo {
            Some(photo) => {
                let already_uploaded = self
                    .photo_texture
                    .as_ref()
                    .is_some_and(|(version, _)| *version == screen.photo_version);
                if !already_uploaded {
                    let texture = ctx.load_texture(
                        "captured-photo",
                        photo.clone(),
                        egui::TextureOptions::LINEAR,
                    );
                    self.photo_texture = Some((screen.photo_version, texture));
                }
            }
            None => {
                self.photo_texture = None;
            }
        }
        let photo_texture = self.photo_texture.as_ref().map(|(_, texture)| texture);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                for line in &screen.lines {
                    ui.label(egui::RichText::new(line.as_str()).monospace().size(18.0));
                }

                if let Some(texture) = photo_texture {
                    ui.add_space(10.0);
                    ui.add(egui::Image::new(texture).max_width(300.0).max_height(300.0));
                }

                if let Some((verdict, since)) = screen.verdict {
                    let (text, color) = match verdict {
                        Verdict::HotDog => ("Hotdog!", egui::Color32::from_rgb(40, 160, 40)),
                        Verdict::NotHotDog => ("Not hotdog.", egui::Color32::from_rgb(180, 60, 60)),
                    };

                    // Scale-up affirmation: grows to full size over the
                    // animation window, then holds.
                    let t = (since.elapsed().as_secs_f32() / AFFIRMATION_SECS).min(1.0);
                    let size = 24.0 + 24.0 * t;
                    ui.add_space(20.0);
                    ui.label(egui::RichText::new(text).strong().color(color).size(size));

                    if t < 1.0 {
                        ctx.request_repaint_after(Duration::from_millis(16));
                    }
                }
            });
        });

        let mut dismissed = false;
        if let Some(error) = &screen.error {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(error.as_str());
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }
        if dismissed {
            screen.error = None;
        }
    }
}

pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Screen>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let screen = self.screen.clone();

        // The window runs on its own thread and blocks there until closed.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([360.0, 480.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = DisplayWindow {
                screen,
                photo_texture: None,
            };
            let _ = eframe::run_native("Not Hotdog", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().unwrap();
        screen.lines = [String::new(), String::new()];
        screen.photo = None;
        screen.verdict = None;
        screen.error = None;
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= 2 {
            return Err("Invalid line number".into());
        }
        self.screen.lock().unwrap().lines[line as usize] = text.to_string();
        Ok(())
    }

    fn show_image(&mut self, image: &DynamicImage) -> Result<(), Box<dyn Error + Send + Sync>> {
        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let photo = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

        let mut screen = self.screen.lock().unwrap();
        screen.photo = Some(photo);
        screen.photo_version += 1;
        Ok(())
    }

    fn show_verdict(&mut self, verdict: Verdict) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.screen.lock().unwrap().verdict = Some((verdict, Instant::now()));
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.screen.lock().unwrap().error = Some(message.to_string());
        Ok(())
    }
}
