use crate::error::AppError;
use crate::image_classifier::interface::Classification;
use crate::recognizer::core::{init, is_capture_enabled, transition, Effect, Event, Model};
use crate::recognizer::fixture::Fixture;
use crate::verdict::Verdict;
use image::DynamicImage;

fn classification(label: &str, confidence: f32) -> Classification {
    Classification {
        label: label.to_string(),
        confidence,
    }
}

fn test_image() -> DynamicImage {
    DynamicImage::new_rgb8(4, 4)
}

#[test]
fn test_init() {
    let (model, effects) = init();

    assert_eq!(model, Model::LoadingModel);
    assert_eq!(
        effects,
        vec![Effect::LoadModel, Effect::SubscribeToShutterEvents]
    );
}

#[test]
fn test_model_load_success() {
    let (model, _) = init();

    let (model, effects) = transition(model, Event::ModelLoadDone(Ok(())));

    assert_eq!(model, Model::Idle { message: None });
    assert!(effects.is_empty());
}

#[test]
fn test_model_load_failure_is_fatal_for_session() {
    let (model, _) = init();

    let error = AppError::ModelLoad("no such file".to_string());
    let (model, effects) = transition(model, Event::ModelLoadDone(Err(error.clone())));

    assert_eq!(
        model,
        Model::ModelUnavailable {
            message: error.to_string()
        }
    );
    assert!(effects.is_empty());
    assert!(!is_capture_enabled(&model));

    // The parked machine ignores further shutter presses.
    let (model, effects) = transition(model, Event::ShutterPressed);
    assert!(matches!(model, Model::ModelUnavailable { .. }));
    assert!(effects.is_empty());
}

#[test]
fn test_happy_path_hot_dog() {
    let model = Model::Idle { message: None };

    let (model, effects) = transition(model, Event::ShutterPressed);
    assert_eq!(model, Model::Capturing);
    assert_eq!(effects, vec![Effect::CaptureImage]);

    let (model, effects) = transition(model, Event::CaptureDone(Ok(Some(test_image()))));
    assert_eq!(
        model,
        Model::Classifying {
            image: test_image()
        }
    );
    assert_eq!(
        effects,
        vec![Effect::ClassifyImage {
            image: test_image()
        }]
    );

    let classifications = vec![
        classification("hotdog, hot dog, red hot", 0.91),
        classification("cheeseburger", 0.05),
    ];
    let (model, effects) = transition(model, Event::ClassifyDone(Ok(classifications)));
    assert_eq!(
        model,
        Model::ShowingResult {
            verdict: Verdict::HotDog,
            image: test_image()
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn test_captured_photo_rides_along_to_the_result() {
    // The photo the user took must be the one shown next to the verdict.
    let photo = DynamicImage::new_rgb8(8, 2);

    let (model, _) = transition(Model::Capturing, Event::CaptureDone(Ok(Some(photo.clone()))));
    assert_eq!(
        model,
        Model::Classifying {
            image: photo.clone()
        }
    );

    let (model, _) = transition(
        model,
        Event::ClassifyDone(Ok(vec![classification("pretzel", 0.7)])),
    );
    assert_eq!(
        model,
        Model::ShowingResult {
            verdict: Verdict::NotHotDog,
            image: photo
        }
    );
}

#[test]
fn test_not_hot_dog_when_top_entry_differs() {
    let classifications = vec![
        classification("bagel, beigel", 0.99),
        classification("hotdog", 0.01),
    ];

    let (model, _) = transition(
        Model::Classifying {
            image: test_image(),
        },
        Event::ClassifyDone(Ok(classifications)),
    );

    assert_eq!(
        model,
        Model::ShowingResult {
            verdict: Verdict::NotHotDog,
            image: test_image()
        }
    );
}

#[test]
fn test_capture_cancelled_surfaces_message() {
    let (model, effects) = transition(Model::Capturing, Event::CaptureDone(Ok(None)));

    match model {
        Model::Idle { message: Some(_) } => (),
        other => panic!("Unexpected model: {:?}", other),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_capture_error_returns_to_idle() {
    let error = AppError::Capture("device busy".to_string());
    let (model, effects) = transition(Model::Capturing, Event::CaptureDone(Err(error.clone())));

    assert_eq!(
        model,
        Model::Idle {
            message: Some(error.to_string())
        }
    );
    assert!(effects.is_empty());
    // Control is back after the error.
    assert!(is_capture_enabled(&model));
}

#[test]
fn test_inference_error_never_reaches_a_verdict() {
    let error = AppError::Inference("bad tensor".to_string());
    let (model, effects) = transition(
        Model::Classifying {
            image: test_image(),
        },
        Event::ClassifyDone(Err(error.clone())),
    );

    assert_eq!(
        model,
        Model::Idle {
            message: Some(error.to_string())
        }
    );
    assert!(effects.is_empty());
    assert!(is_capture_enabled(&model));
}

#[test]
fn test_empty_result_is_a_shape_error() {
    let (model, effects) = transition(
        Model::Classifying {
            image: test_image(),
        },
        Event::ClassifyDone(Ok(vec![])),
    );

    assert_eq!(
        model,
        Model::Idle {
            message: Some(AppError::UnexpectedResultShape.to_string())
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn test_shutter_ignored_while_in_flight() {
    let (model, effects) = transition(Model::Capturing, Event::ShutterPressed);
    assert_eq!(model, Model::Capturing);
    assert!(effects.is_empty());

    let (model, effects) = transition(
        Model::Classifying {
            image: test_image(),
        },
        Event::ShutterPressed,
    );
    assert_eq!(
        model,
        Model::Classifying {
            image: test_image()
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn test_reset_returns_to_idle() {
    let model = Model::ShowingResult {
        verdict: Verdict::HotDog,
        image: test_image(),
    };

    let (model, effects) = transition(model, Event::ResetPressed);
    assert_eq!(model, Model::Idle { message: None });
    assert!(effects.is_empty());
}

#[test]
fn test_reset_dismisses_an_error_message() {
    let model = Model::Idle {
        message: Some("failed to capture image: device busy".to_string()),
    };

    let (model, _) = transition(model, Event::ResetPressed);
    assert_eq!(model, Model::Idle { message: None });
}

#[test]
fn test_shutter_from_result_starts_a_new_capture() {
    let model = Model::ShowingResult {
        verdict: Verdict::NotHotDog,
        image: test_image(),
    };

    let (model, effects) = transition(model, Event::ShutterPressed);
    assert_eq!(model, Model::Capturing);
    assert_eq!(effects, vec![Effect::CaptureImage]);
}

#[test]
fn test_capture_control_enablement_follows_the_model() {
    assert!(!is_capture_enabled(&Model::LoadingModel));
    assert!(!is_capture_enabled(&Model::ModelUnavailable {
        message: "x".to_string()
    }));
    assert!(is_capture_enabled(&Model::Idle { message: None }));
    assert!(!is_capture_enabled(&Model::Capturing));
    assert!(!is_capture_enabled(&Model::Classifying {
        image: test_image()
    }));
    assert!(is_capture_enabled(&Model::ShowingResult {
        verdict: Verdict::HotDog,
        image: test_image()
    }));
}

#[test]
fn test_fixture_wires_the_app_from_fakes() {
    let fixture = Fixture::new();
    assert!(!fixture.device_shutter.is_enabled());
}
