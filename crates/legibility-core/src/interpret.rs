//! Plain-language interpretation of readability scores.

use serde::{Deserialize, Serialize};

use crate::readability::{Metric, ReadabilityMetrics};

/// How comfortable a score is for a general audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Easy for most readers.
    Good,
    /// Readable with some effort.
    Fair,
    /// Hard going for many readers.
    Caution,
    /// Very hard to read.
    Poor,
}

/// A score with its label and band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Which score this is.
    pub metric: Metric,
    /// The score itself.
    pub value: f64,
    /// Short description such as "easy reading" or "grade 8.2 level".
    pub label: String,
    /// Comfort band.
    pub band: Band,
}

/// Interpret one score.
pub fn interpret(metric: Metric, value: f64) -> Interpretation {
    let (label, band) = match metric {
        Metric::GunningFog => gunning_fog(value),
        Metric::FleschReadingEase => flesch_reading_ease(value),
        Metric::DaleChall => dale_chall(value),
        _ => grade_level(value),
    };
    Interpretation {
        metric,
        value,
        label,
        band,
    }
}

/// Interpret every score in display order, optionally leaving out the
/// advanced ones.
pub fn interpret_all(metrics: &ReadabilityMetrics, include_advanced: bool) -> Vec<Interpretation> {
    Metric::ALL
        .into_iter()
        .filter(|m| include_advanced || !m.is_advanced())
        .map(|m| interpret(m, metrics.score(m)))
        .collect()
}

/// Label and band for the number of difficult words.
pub fn difficult_words(count: usize) -> (String, Band) {
    let band = match count {
        0..=5 => Band::Good,
        6..=10 => Band::Fair,
        11..=20 => Band::Caution,
        _ => Band::Poor,
    };
    (format!("{count} difficult words"), band)
}

fn gunning_fog(score: f64) -> (String, Band) {
    let (label, band) = if score < 8.0 {
        ("easy reading", Band::Good)
    } else if score < 12.0 {
        ("comfortable reading", Band::Fair)
    } else if score < 17.0 {
        ("difficult reading", Band::Caution)
    } else {
        ("very difficult", Band::Poor)
    };
    (label.to_string(), band)
}

fn flesch_reading_ease(score: f64) -> (String, Band) {
    let label = match score {
        s if s >= 90.0 => "very easy",
        s if s >= 80.0 => "easy",
        s if s >= 70.0 => "fairly easy",
        s if s >= 60.0 => "standard",
        s if s >= 50.0 => "fairly difficult",
        s if s >= 30.0 => "difficult",
        _ => "very confusing",
    };
    // Higher is easier here, unlike every other score
    let band = match score {
        s if s >= 80.0 => Band::Good,
        s if s >= 60.0 => Band::Fair,
        s if s >= 50.0 => Band::Caution,
        _ => Band::Poor,
    };
    (label.to_string(), band)
}

fn dale_chall(score: f64) -> (String, Band) {
    let label = match score {
        s if s <= 4.9 => "easy (grade 4 and below)",
        s if s <= 5.9 => "grades 5-6",
        s if s <= 6.9 => "grades 7-8",
        s if s <= 7.9 => "grades 9-10",
        s if s <= 8.9 => "grades 11-12",
        s if s <= 9.9 => "college",
        _ => "graduate",
    };
    let band = match score {
        s if s <= 5.9 => Band::Good,
        s if s <= 7.9 => Band::Fair,
        s if s <= 8.9 => Band::Caution,
        _ => Band::Poor,
    };
    (label.to_string(), band)
}

fn grade_level(grade: f64) -> (String, Band) {
    let band = match grade {
        g if g <= 6.0 => Band::Good,
        g if g <= 9.0 => Band::Fair,
        g if g <= 12.0 => Band::Caution,
        _ => Band::Poor,
    };
    (format!("grade {grade:.1} level"), band)
}
