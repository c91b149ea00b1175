//! Synthetic precision/recall check of the similarity scorer: known copies
//! and light edits should clear the threshold, unrelated statements should not.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use super::similarity::similarity;

pub(crate) const DEFAULT_THRESHOLD: f64 = 0.45;
const REPETITIONS: usize = 6;

const BASE_TEXTS: [&str; 5] = [
    "The mitochondria is the powerhouse of the cell.",
    "Python is an interpreted high-level general-purpose programming language.",
    "Newton's second law states that Force equals mass times acceleration.",
    "Photosynthesis is the process used by plants to convert light energy into chemical energy.",
    "Artificial Intelligence is intelligence demonstrated by machines, as opposed to natural intelligence.",
];

const DISTINCT_A: [&str; 5] = [
    "The French Revolution began in 1789.",
    "Java is strictly typed.",
    "Mitochondria generate ATP.",
    "Shakespeare wrote Hamlet.",
    "The derivative of x squared is 2x.",
];

const DISTINCT_B: [&str; 5] = [
    "Quantum physics deals with probabilities.",
    "React uses a virtual DOM.",
    "The capital of France is Paris.",
    "E=mc^2 is the mass-energy equivalence.",
    "HTML stands for HyperText Markup Language.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Alteration {
    DirectCopy,
    MinorEdits,
    WordShuffle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct EvaluationReport {
    pub(crate) threshold: f64,
    pub(crate) true_positives: usize,
    pub(crate) false_positives: usize,
    pub(crate) false_negatives: usize,
    pub(crate) true_negatives: usize,
    pub(crate) precision: f64,
    pub(crate) recall: f64,
    pub(crate) f1: f64,
}

pub(crate) fn alter(text: &str, alteration: Alteration, rng: &mut StdRng) -> String {
    match alteration {
        Alteration::DirectCopy => text.to_string(),
        Alteration::MinorEdits => text.replace(" is ", " ").replace(" the ", " "),
        Alteration::WordShuffle => {
            let mut words: Vec<&str> = text.split_whitespace().collect();
            words.shuffle(rng);
            words.join(" ")
        }
    }
}

/// Copies, edits and shuffles of the base texts, cycling through alterations.
pub(crate) fn positive_pairs(seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let alterations = [Alteration::DirectCopy, Alteration::MinorEdits, Alteration::WordShuffle];

    BASE_TEXTS
        .iter()
        .cycle()
        .take(BASE_TEXTS.len() * REPETITIONS)
        .enumerate()
        .map(|(index, text)| {
            let altered = alter(text, alterations[index % alterations.len()], &mut rng);
            (text.to_string(), altered)
        })
        .collect()
}

pub(crate) fn negative_pairs() -> Vec<(String, String)> {
    DISTINCT_A
        .iter()
        .zip(DISTINCT_B.iter())
        .cycle()
        .take(DISTINCT_A.len() * REPETITIONS)
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

pub(crate) fn evaluate(threshold: f64, seed: u64) -> EvaluationReport {
    let flagged = |(a, b): &(String, String)| similarity(a, b) >= threshold;

    let positives = positive_pairs(seed);
    let negatives = negative_pairs();

    let true_positives = positives.iter().filter(|&pair| flagged(pair)).count();
    let false_negatives = positives.len() - true_positives;
    let false_positives = negatives.iter().filter(|&pair| flagged(pair)).count();
    let true_negatives = negatives.len() - false_positives;

    let precision = safe_div(true_positives, true_positives + false_positives);
    let recall = safe_div(true_positives, true_positives + false_negatives);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    EvaluationReport {
        threshold,
        true_positives,
        false_positives,
        false_negatives,
        true_negatives,
        precision,
        recall,
        f1,
    }
}

fn safe_div(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
