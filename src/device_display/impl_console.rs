use crate::device_display::interface::DeviceDisplay;
use crate::verdict::Verdict;
use image::DynamicImage;
use std::error::Error;

const LINE_WIDTH: usize = 24;

pub struct DeviceDisplayConsole {
    lines: [String; 2],
    verdict: Option<Verdict>,
    error: Option<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
            verdict: None,
            error: None,
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(LINE_WIDTH));
        for line in &self.lines {
            println!("│{:<width$}│", truncate(line), width = LINE_WIDTH);
        }
        if let Some(verdict) = self.verdict {
            let text = match verdict {
                Verdict::HotDog => "*** HOTDOG! ***",
                Verdict::NotHotDog => "Not hotdog.",
            };
            println!("│{:^width$}│", text, width = LINE_WIDTH);
        }
        println!("└{}┘", "─".repeat(LINE_WIDTH));

        if let Some(error) = &self.error {
            println!("Error: {}", error);
        }
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(LINE_WIDTH).collect()
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines = [String::new(), String::new()];
        self.verdict = None;
        self.error = None;
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= 2 {
            return Err("Invalid line number".into());
        }
        self.lines[line as usize] = text.to_string();
        self.render_display();
        Ok(())
    }

    fn show_image(&mut self, _image: &DynamicImage) -> Result<(), Box<dyn Error + Send + Sync>> {
        // No image surface on the console.
        Ok(())
    }

    fn show_verdict(&mut self, verdict: Verdict) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.verdict = Some(verdict);
        self.render_display();
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.error = Some(message.to_string());
        self.render_display();
        Ok(())
    }
}
