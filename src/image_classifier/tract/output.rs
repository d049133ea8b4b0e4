use crate::image_classifier::interface::{Category, Classification};

pub fn softmax(values: &[f32]) -> Vec<f32> {
    let max = values.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = values.iter().map(|v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return vec![0.0; values.len()];
    }
    exps.iter().map(|v| v / sum).collect()
}

/// Turns one head's score vector into a Classification: scores above
/// `score_threshold`, highest first, at most `max_results`.
pub fn scores_to_classification(
    head_index: usize,
    scores: &[f32],
    labels: &[String],
    score_threshold: f32,
    max_results: usize,
) -> Classification {
    let mut categories: Vec<Category> = scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score > score_threshold)
        .map(|(index, score)| Category {
            label: labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| index.to_string()),
            score: *score,
        })
        .collect();

    // stable, so equal scores keep model order
    categories.sort_by(|a, b| b.score.total_cmp(&a.score));
    categories.truncate(max_results);

    Classification {
        head_index,
        head_name: None,
        categories,
    }
}
