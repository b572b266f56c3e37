use crate::device_shutter::interface::{DeviceShutter, ShutterEvent};
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// Presses the shutter on a timer whenever it is enabled, and resets
/// shortly after each result, so the whole flow runs hands-free.
pub struct DeviceShutterFake {
    enabled: Arc<AtomicBool>,
    logger: Arc<dyn Logger>,
}

impl DeviceShutterFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(false)),
            logger: logger.with_namespace("shutter").with_namespace("fake"),
        }
    }
}

impl DeviceShutter for DeviceShutterFake {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn events(&self) -> Receiver<ShutterEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let enabled = self.enabled.clone();
        let logger = self.logger.with_namespace("timer");

        std::thread::spawn(move || loop {
            std::thread::sleep(std::time::Duration::from_secs(3));

            if !enabled.load(Ordering::SeqCst) {
                if tx.send(ShutterEvent::ResetPressed).is_err() {
                    break;
                }
                continue;
            }

            let _ = logger.info("Pressing shutter");
            if tx.send(ShutterEvent::Pressed).is_err() {
                break;
            }
        });

        rx
    }
}
