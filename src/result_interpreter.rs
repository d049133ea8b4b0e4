//! Turns raw classifier output into the text shown on the result screen.

use crate::image_classifier::interface::{Category, Classification};

/// Scores must be strictly above this to be reported.
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

pub const POSITIVE_LABEL: &str = "Cancer";
pub const NEGATIVE_LABEL: &str = "Non Cancer";

pub const POSITIVE_SENTENCE: &str = "This is an example of skin cancer.";
pub const NEGATIVE_SENTENCE: &str = "This is not skin cancer.";
pub const UNRECOGNIZED_SENTENCE: &str = "Label not recognized, the result cannot be confirmed.";
pub const NO_CONFIDENT_CATEGORY_SENTENCE: &str = "No category with percentage > 50% detected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    Positive,
    Negative,
    Unrecognized,
    NoConfidentCategory,
}

impl Finding {
    pub fn sentence(&self) -> &'static str {
        match self {
            Finding::Positive => POSITIVE_SENTENCE,
            Finding::Negative => NEGATIVE_SENTENCE,
            Finding::Unrecognized => UNRECOGNIZED_SENTENCE,
            Finding::NoConfidentCategory => NO_CONFIDENT_CATEGORY_SENTENCE,
        }
    }

    fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label == POSITIVE_LABEL.to_lowercase() {
            Finding::Positive
        } else if label == NEGATIVE_LABEL.to_lowercase() {
            Finding::Negative
        } else {
            Finding::Unrecognized
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub finding: Finding,
    /// Category lines only, without the sentence.
    pub filtered_text: String,
    /// Category lines followed by the interpretation sentence.
    pub display: String,
}

impl Verdict {
    pub fn sentence(&self) -> &'static str {
        self.finding.sentence()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    NoResult,
    Verdict(Verdict),
}

/// `inference_time_ms` plays no part in the decision.
pub fn interpret(
    classifications: Option<&[Classification]>,
    _inference_time_ms: u64,
) -> Interpretation {
    let Some(classifications) = classifications else {
        return Interpretation::NoResult;
    };

    let filtered_text = classifications
        .iter()
        .map(|classification| {
            classification
                .categories
                .iter()
                .filter(|category| is_confident(category))
                .map(format_category)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    let top = classifications
        .iter()
        .flat_map(|classification| classification.categories.iter())
        .filter(|category| is_confident(category))
        .fold(None::<&Category>, |best, category| match best {
            Some(best) if best.score >= category.score => Some(best),
            _ => Some(category),
        });

    let Some(top) = top else {
        return Interpretation::Verdict(Verdict {
            finding: Finding::NoConfidentCategory,
            filtered_text: String::new(),
            display: NO_CONFIDENT_CATEGORY_SENTENCE.to_string(),
        });
    };

    let finding = Finding::from_label(&top.label);
    let display = format!("{}\n\n{}", filtered_text, finding.sentence());

    Interpretation::Verdict(Verdict {
        finding,
        filtered_text,
        display,
    })
}

fn is_confident(category: &Category) -> bool {
    category.score > CONFIDENCE_THRESHOLD
}

/// `"label: 92.0%"`. Rounded to four decimals so f32 noise stays hidden.
pub fn format_category(category: &Category) -> String {
    let percent = (category.score as f64 * 100.0 * 10_000.0).round() / 10_000.0;
    format!("{}: {:?}%", category.label, percent)
}
