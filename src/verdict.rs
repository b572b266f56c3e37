use crate::image_classifier::interface::Classification;

/// Substring looked for in the top label. Case sensitive and unanchored
/// on purpose: "hotdog stand" counts.
const HOT_DOG_SUBSTRING: &str = "hotdog";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HotDog,
    NotHotDog,
}

/// Only the highest-confidence entry is consulted; the confidence value
/// itself never is. Callers must have already routed an empty result to
/// `AppError::UnexpectedResultShape`; an empty slice here answers
/// `NotHotDog` rather than panicking.
pub fn decide(classifications: &[Classification]) -> Verdict {
    let top_is_hot_dog = classifications
        .first()
        .is_some_and(|top| top.label.contains(HOT_DOG_SUBSTRING));

    if top_is_hot_dog {
        Verdict::HotDog
    } else {
        Verdict::NotHotDog
    }
}
