use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_camera::impl_image_dir::DeviceCameraImageDir;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::device_display::impl_gui::DeviceDisplayGui;
use crate::device_display::interface::DeviceDisplay;
use crate::device_shutter::impl_console::DeviceShutterConsole;
use crate::device_shutter::impl_fake::DeviceShutterFake;
use crate::device_shutter::interface::DeviceShutter;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract::ImageClassifierTract;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use crate::recognizer::main::Recognizer;

mod config;
mod device_camera;
mod device_display;
mod device_shutter;
mod error;
mod image_classifier;
mod library;
mod recognizer;
mod verdict;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayKind {
    Console,
    Gui,
}

#[derive(Parser, Debug)]
#[command(about = "Tells you whether a photo shows a hot dog")]
struct Args {
    /// ONNX classification model path.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Labels file, one label per line, in model class order.
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Directory of photos used as the image source. Without it a
    /// synthetic camera is used.
    #[arg(long)]
    images: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "console")]
    display: DisplayKind,

    /// Use the fake classifier instead of loading an ONNX model.
    #[arg(long)]
    fake_classifier: bool,

    /// Press the shutter automatically instead of reading stdin.
    #[arg(long)]
    auto_shutter: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let mut config = Config::default();
    if let Some(model) = args.model {
        config.model.onnx_model_path = model;
    }
    if let Some(labels) = args.labels {
        config.model.labels_path = labels;
    }

    let logger: Arc<dyn Logger> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera: Arc<dyn DeviceCamera> = match args.images {
        Some(dir) => Arc::new(DeviceCameraImageDir::new(dir, logger.clone())),
        None => Arc::new(DeviceCameraFake::new(logger.clone())),
    };

    let device_shutter: Arc<dyn DeviceShutter> = if args.auto_shutter {
        Arc::new(DeviceShutterFake::new(logger.clone()))
    } else {
        Arc::new(DeviceShutterConsole::new(logger.clone()))
    };

    let device_display: Arc<Mutex<dyn DeviceDisplay>> = match args.display {
        DisplayKind::Console => Arc::new(Mutex::new(DeviceDisplayConsole::new())),
        DisplayKind::Gui => Arc::new(Mutex::new(DeviceDisplayGui::new())),
    };

    let image_classifier: Arc<dyn ImageClassifier> = if args.fake_classifier {
        Arc::new(ImageClassifierFake::new(logger.clone()))
    } else {
        Arc::new(ImageClassifierTract::new(config.model.clone(), logger.clone()))
    };

    device_display.lock().unwrap().init()?;

    let recognizer = Recognizer::new(
        logger,
        device_camera,
        device_shutter,
        device_display,
        image_classifier,
    );

    recognizer.run()
}
