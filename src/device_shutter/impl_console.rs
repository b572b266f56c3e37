use crate::device_shutter::interface::{DeviceShutter, ShutterEvent};
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// Reads the capture control from stdin: an empty line or "c" presses
/// the shutter, "r" resets.
pub struct DeviceShutterConsole {
    enabled: Arc<AtomicBool>,
    logger: Arc<dyn Logger>,
}

impl DeviceShutterConsole {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(false)),
            logger: logger.with_namespace("shutter").with_namespace("console"),
        }
    }
}

impl DeviceShutter for DeviceShutterConsole {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn events(&self) -> Receiver<ShutterEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let enabled = self.enabled.clone();
        let logger = self.logger.with_namespace("stdin");

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };

                let event = match line.trim() {
                    "" | "c" | "capture" => {
                        if !enabled.load(Ordering::SeqCst) {
                            let _ = logger.info("Shutter is disabled, ignoring press");
                            continue;
                        }
                        ShutterEvent::Pressed
                    }
                    "r" | "reset" => ShutterEvent::ResetPressed,
                    other => {
                        let _ = logger.info(&format!("Unknown input: {:?}", other));
                        continue;
                    }
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        rx
    }
}
