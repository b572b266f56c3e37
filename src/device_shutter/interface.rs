use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutterEvent {
    Pressed,
    ResetPressed,
}

/// The single capture control. It is disabled for exactly the duration
/// of an in-flight capture/classification; a disabled control does not
/// emit `Pressed`.
pub trait DeviceShutter: Send + Sync {
    fn set_enabled(&self, enabled: bool);
    fn is_enabled(&self) -> bool;
    fn events(&self) -> Receiver<ShutterEvent>;
}
