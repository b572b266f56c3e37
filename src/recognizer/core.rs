use crate::error::AppError;
use crate::image_classifier::interface::Classification;
use crate::verdict::{decide, Verdict};
use image::DynamicImage;

/// The capture-in-progress flag made explicit: exactly one image may be
/// between shutter press and verdict/error at a time, and that is
/// guaranteed here rather than by an ad hoc boolean.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    LoadingModel,
    /// Model load failed; no further classification this session.
    ModelUnavailable { message: String },
    /// Ready for a shutter press. `message` is the last surfaced error,
    /// shown until the next press or reset.
    Idle { message: Option<String> },
    Capturing,
    /// The captured photo rides along so the display can keep showing it
    /// next to the verdict.
    Classifying { image: DynamicImage },
    ShowingResult { verdict: Verdict, image: DynamicImage },
}

impl Model {
    pub fn to_display_string(&self) -> String {
        match self {
            Model::Classifying { .. } => "Classifying { <image> }".to_string(),
            Model::ShowingResult { verdict, .. } => {
                format!("ShowingResult {{ verdict: {:?}, <image> }}", verdict)
            }
            model => format!("{:?}", model),
        }
    }
}

#[derive(Debug)]
pub enum Event {
    ModelLoadDone(Result<(), AppError>),
    ShutterPressed,
    ResetPressed,
    CaptureDone(Result<Option<DynamicImage>, AppError>),
    ClassifyDone(Result<Vec<Classification>, AppError>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::CaptureDone(Ok(Some(_))) => "CaptureDone(Ok(Some(<image>)))".to_string(),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum Effect {
    LoadModel,
    CaptureImage,
    ClassifyImage { image: DynamicImage },
    SubscribeToShutterEvents,
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::LoadModel => "LoadModel".to_string(),
            Effect::CaptureImage => "CaptureImage".to_string(),
            Effect::ClassifyImage { .. } => "ClassifyImage { <image> }".to_string(),
            Effect::SubscribeToShutterEvents => "SubscribeToShutterEvents".to_string(),
        }
    }
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::LoadingModel,
        vec![Effect::LoadModel, Effect::SubscribeToShutterEvents],
    )
}

/// The capture control is enabled exactly when nothing is in flight and
/// the model is usable.
pub fn is_capture_enabled(model: &Model) -> bool {
    matches!(model, Model::Idle { .. } | Model::ShowingResult { .. })
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model, event) {
        // Startup
        (Model::LoadingModel, Event::ModelLoadDone(Ok(()))) => {
            (Model::Idle { message: None }, vec![])
        }
        (Model::LoadingModel, Event::ModelLoadDone(Err(e))) => (
            Model::ModelUnavailable {
                message: e.to_string(),
            },
            vec![],
        ),

        // Capture
        (Model::Idle { .. }, Event::ShutterPressed)
        | (Model::ShowingResult { .. }, Event::ShutterPressed) => {
            (Model::Capturing, vec![Effect::CaptureImage])
        }
        (Model::Capturing, Event::CaptureDone(Ok(Some(image)))) => (
            Model::Classifying {
                image: image.clone(),
            },
            vec![Effect::ClassifyImage { image }],
        ),
        (Model::Capturing, Event::CaptureDone(Ok(None))) => (
            Model::Idle {
                message: Some("No image was produced".to_string()),
            },
            vec![],
        ),
        (Model::Capturing, Event::CaptureDone(Err(e))) => (
            Model::Idle {
                message: Some(e.to_string()),
            },
            vec![],
        ),

        // Classification
        (Model::Classifying { image }, Event::ClassifyDone(Ok(classifications))) => {
            if classifications.is_empty() {
                (
                    Model::Idle {
                        message: Some(AppError::UnexpectedResultShape.to_string()),
                    },
                    vec![],
                )
            } else {
                (
                    Model::ShowingResult {
                        verdict: decide(&classifications),
                        image,
                    },
                    vec![],
                )
            }
        }
        (Model::Classifying { .. }, Event::ClassifyDone(Err(e))) => (
            Model::Idle {
                message: Some(e.to_string()),
            },
            vec![],
        ),

        // Reset
        (Model::ShowingResult { .. }, Event::ResetPressed)
        | (Model::Idle { .. }, Event::ResetPressed) => (Model::Idle { message: None }, vec![]),

        // Everything else, including shutter presses while an image is in
        // flight, leaves the machine alone.
        (model, _) => (model, vec![]),
    }
}
