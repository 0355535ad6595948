//! Readability scoring.
//!
//! Computes eight standard indices from a handful of text counts:
//!
//! | Metric | Formula |
//! |---|---|
//! | Gunning Fog | `0.4 * (words/sentences + 100 * complex/words)` |
//! | Flesch Reading Ease | `206.835 - 1.015 * words/sentences - 84.6 * syllables/words` |
//! | Flesch-Kincaid Grade | `0.39 * words/sentences + 11.8 * syllables/words - 15.59` |
//! | SMOG | `1.043 * sqrt(complex * 30/sentences) + 3.1291` |
//! | Coleman-Liau | `0.0588 * L - 0.296 * S - 15.8` (per 100 words) |
//! | ARI | `4.71 * chars/words + 0.5 * words/sentences - 21.43` |
//! | Dale-Chall | `0.1579 * difficult% + 0.0496 * words/sentences (+ 3.6365 above 5%)` |
//! | Linsear Write | see [`linsear_write`] |
//!
//! Every score is floored at 0 and Flesch Reading Ease is capped at 100.
//! Characters are counted on the whitespace-normalized text, spaces included.
//! Syllables come from the vowel-group heuristic in [`crate::syllables`].
#![allow(clippy::suboptimal_flops)]

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify;
use crate::error::{AnalysisError, AnalysisResult};
use crate::syllables::count_syllables;
use crate::text::{self, Token};
use crate::word_lists::ReferenceWordList;

/// Words sampled from the start of the text by the Linsear Write formula.
pub const LINSEAR_SAMPLE_SIZE: usize = 100;

/// Readability scores and the counts they were computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityMetrics {
    /// Gunning Fog index.
    pub gunning_fog: f64,
    /// Flesch Reading Ease (0–100, higher is easier).
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level.
    pub flesch_kincaid_grade: f64,
    /// SMOG index.
    pub smog_index: f64,
    /// Coleman-Liau index.
    pub coleman_liau_index: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// Dale-Chall readability score.
    pub dale_chall_readability_score: f64,
    /// Words not found in the reference word list.
    pub difficult_words: usize,
    /// Linsear Write formula grade.
    pub linsear_write_formula: f64,
    /// Number of words.
    pub word_count: usize,
    /// Number of sentences (0 only for empty input).
    pub sentence_count: usize,
    /// Total estimated syllables.
    pub syllable_count: usize,
    /// Characters in the normalized text, spaces included.
    pub character_count: usize,
}

impl ReadabilityMetrics {
    /// Whether this is the all-zero record returned for text with no words.
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Average words per sentence, or 0 for empty input.
    pub fn avg_words_per_sentence(&self) -> f64 {
        ratio(self.word_count, self.sentence_count)
    }

    /// Average syllables per word, or 0 for empty input.
    pub fn avg_syllables_per_word(&self) -> f64 {
        ratio(self.syllable_count, self.word_count)
    }

    /// Percentage of words missing from the reference list, or 0 for empty input.
    pub fn difficult_word_percentage(&self) -> f64 {
        ratio(self.difficult_words, self.word_count) * 100.0
    }

    /// The value of one score.
    pub const fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::GunningFog => self.gunning_fog,
            Metric::FleschReadingEase => self.flesch_reading_ease,
            Metric::FleschKincaidGrade => self.flesch_kincaid_grade,
            Metric::SmogIndex => self.smog_index,
            Metric::ColemanLiauIndex => self.coleman_liau_index,
            Metric::AutomatedReadabilityIndex => self.automated_readability_index,
            Metric::DaleChall => self.dale_chall_readability_score,
            Metric::LinsearWrite => self.linsear_write_formula,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// The eight readability scores, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Gunning Fog index.
    GunningFog,
    /// Flesch Reading Ease.
    FleschReadingEase,
    /// Flesch-Kincaid grade level.
    FleschKincaidGrade,
    /// SMOG index.
    SmogIndex,
    /// Coleman-Liau index.
    ColemanLiauIndex,
    /// Automated Readability Index.
    AutomatedReadabilityIndex,
    /// Dale-Chall readability score.
    DaleChall,
    /// Linsear Write formula.
    LinsearWrite,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Self; 8] = [
        Self::GunningFog,
        Self::FleschReadingEase,
        Self::FleschKincaidGrade,
        Self::SmogIndex,
        Self::ColemanLiauIndex,
        Self::AutomatedReadabilityIndex,
        Self::DaleChall,
        Self::LinsearWrite,
    ];

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GunningFog => "Gunning Fog",
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::FleschKincaidGrade => "Flesch-Kincaid Grade",
            Self::SmogIndex => "SMOG Index",
            Self::ColemanLiauIndex => "Coleman-Liau Index",
            Self::AutomatedReadabilityIndex => "Automated Readability Index",
            Self::DaleChall => "Dale-Chall Score",
            Self::LinsearWrite => "Linsear Write Formula",
        }
    }

    /// Whether the score approximates a school grade.
    pub const fn is_grade_level(self) -> bool {
        matches!(
            self,
            Self::FleschKincaidGrade
                | Self::SmogIndex
                | Self::ColemanLiauIndex
                | Self::AutomatedReadabilityIndex
                | Self::LinsearWrite
        )
    }

    /// Whether the metric is only shown with advanced metrics enabled.
    pub const fn is_advanced(self) -> bool {
        !matches!(
            self,
            Self::GunningFog | Self::FleschReadingEase | Self::FleschKincaidGrade
        )
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw counts feeding the formulas. `words` and `sentences` must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCounts {
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Total syllables.
    pub syllables: usize,
    /// Characters in the normalized text.
    pub characters: usize,
    /// Words with three or more syllables that are not proper nouns.
    pub complex_words: usize,
    /// Words missing from the reference list.
    pub difficult_words: usize,
}

impl TextCounts {
    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    fn complex_word_percentage(&self) -> f64 {
        self.complex_words as f64 / self.words as f64 * 100.0
    }

    fn difficult_word_percentage(&self) -> f64 {
        self.difficult_words as f64 / self.words as f64 * 100.0
    }
}

/// Gunning Fog index, unclamped.
pub fn gunning_fog(c: &TextCounts) -> f64 {
    0.4 * (c.words_per_sentence() + c.complex_word_percentage())
}

/// Flesch Reading Ease, unclamped.
pub fn flesch_reading_ease(c: &TextCounts) -> f64 {
    206.835 - 1.015 * c.words_per_sentence() - 84.6 * c.syllables_per_word()
}

/// Flesch-Kincaid grade level, unclamped.
pub fn flesch_kincaid_grade(c: &TextCounts) -> f64 {
    0.39 * c.words_per_sentence() + 11.8 * c.syllables_per_word() - 15.59
}

/// SMOG index, unclamped.
pub fn smog_index(c: &TextCounts) -> f64 {
    1.043 * (c.complex_words as f64 * (30.0 / c.sentences as f64)).sqrt() + 3.1291
}

/// Coleman-Liau index, unclamped.
pub fn coleman_liau_index(c: &TextCounts) -> f64 {
    let letters_per_100 = c.characters as f64 / c.words as f64 * 100.0;
    let sentences_per_100 = c.sentences as f64 / c.words as f64 * 100.0;
    0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
}

/// Automated Readability Index, unclamped.
pub fn automated_readability_index(c: &TextCounts) -> f64 {
    4.71 * (c.characters as f64 / c.words as f64) + 0.5 * c.words_per_sentence() - 21.43
}

/// Dale-Chall score, unclamped.
pub fn dale_chall(c: &TextCounts) -> f64 {
    let difficult_pct = c.difficult_word_percentage();
    let score = 0.1579 * difficult_pct + 0.0496 * c.words_per_sentence();
    if difficult_pct > 5.0 {
        score + 3.6365
    } else {
        score
    }
}

/// Linsear Write grade, unclamped.
///
/// Samples the first [`LINSEAR_SAMPLE_SIZE`] words in order. Words of one or
/// two syllables score 1, longer words score 3. The total is divided by the
/// sample's words per sentence, then halved (above 10) or reduced by 2 and
/// halved (10 or below).
pub fn linsear_write<'a, I>(words: I, sentences: usize) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sample_size = 0usize;
    let mut easy = 0usize;
    let mut hard = 0usize;

    for word in words.into_iter().take(LINSEAR_SAMPLE_SIZE) {
        sample_size += 1;
        if count_syllables(word) <= 2 {
            easy += 1;
        } else {
            hard += 1;
        }
    }

    let raw = (easy + 3 * hard) as f64 / (sample_size as f64 / sentences as f64);
    if raw > 10.0 {
        raw / 2.0
    } else {
        (raw - 2.0) / 2.0
    }
}

/// Computes [`ReadabilityMetrics`] against a reference word list.
///
/// The calculator holds no per-call state; clone it or share it across
/// threads freely.
#[derive(Debug, Clone)]
pub struct ReadabilityCalculator {
    word_list: Arc<ReferenceWordList>,
}

impl Default for ReadabilityCalculator {
    fn default() -> Self {
        Self::new(ReferenceWordList::dale_chall())
    }
}

impl ReadabilityCalculator {
    /// Create a calculator that classifies difficult words with `word_list`.
    pub const fn new(word_list: Arc<ReferenceWordList>) -> Self {
        Self { word_list }
    }

    /// The reference list in use.
    pub fn word_list(&self) -> &ReferenceWordList {
        &self.word_list
    }

    /// Score a text.
    ///
    /// Text without any words yields the all-zero record (see
    /// [`ReadabilityMetrics::is_empty`]); nothing else can fail.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn calculate(&self, text: &str) -> ReadabilityMetrics {
        let tokenized = text::tokenize(text);
        if tokenized.tokens.is_empty() {
            tracing::debug!("no words in input, returning empty metrics");
            return ReadabilityMetrics::default();
        }

        let counts = self.count(&tokenized.tokens, &tokenized.normalized, tokenized.sentence_count);
        tracing::debug!(?counts, "computed text counts");

        let metrics = ReadabilityMetrics {
            gunning_fog: gunning_fog(&counts).max(0.0),
            flesch_reading_ease: flesch_reading_ease(&counts).clamp(0.0, 100.0),
            flesch_kincaid_grade: flesch_kincaid_grade(&counts).max(0.0),
            smog_index: smog_index(&counts).max(0.0),
            coleman_liau_index: coleman_liau_index(&counts).max(0.0),
            automated_readability_index: automated_readability_index(&counts).max(0.0),
            dale_chall_readability_score: dale_chall(&counts).max(0.0),
            difficult_words: counts.difficult_words,
            linsear_write_formula: linsear_write(tokenized.words(), counts.sentences).max(0.0),
            word_count: counts.words,
            sentence_count: counts.sentences,
            syllable_count: counts.syllables,
            character_count: counts.characters,
        };

        tracing::debug!(
            flesch_reading_ease = metrics.flesch_reading_ease,
            flesch_kincaid_grade = metrics.flesch_kincaid_grade,
            "scored text"
        );
        metrics
    }

    /// Score a text, treating text without words as an error.
    pub fn try_calculate(&self, text: &str) -> AnalysisResult<ReadabilityMetrics> {
        let metrics = self.calculate(text);
        if metrics.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(metrics)
    }

    fn count(&self, tokens: &[Token], normalized: &str, sentences: usize) -> TextCounts {
        TextCounts {
            words: tokens.len(),
            sentences,
            syllables: tokens.iter().map(|t| count_syllables(&t.word)).sum(),
            characters: normalized.chars().count(),
            complex_words: classify::count_complex(tokens),
            difficult_words: classify::count_difficult(tokens, &self.word_list),
        }
    }
}

/// Score a text against the built-in Dale-Chall word list.
pub fn calculate_readability_metrics(text: &str) -> ReadabilityMetrics {
    ReadabilityCalculator::default().calculate(text)
}
