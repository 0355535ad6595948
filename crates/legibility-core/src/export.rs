//! Exporting a metrics record as JSON, CSV or plain text.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::interpret;
use crate::readability::{Metric, ReadabilityMetrics};

/// Characters of the source text included in a JSON export.
pub const TEXT_PREVIEW_CHARS: usize = 100;

/// Output format for [`export_metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportFormat {
    /// Pretty-printed JSON document.
    #[default]
    Json,
    /// `Metric,Value` rows.
    Csv,
    /// Human-readable list.
    #[serde(alias = "txt")]
    #[cfg_attr(feature = "clap", value(alias = "txt"))]
    Text,
}

impl ExportFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Json, Self::Csv, Self::Text];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(AnalysisError::UnknownFormat {
                name: s.to_string(),
                available: Self::ALL.map(Self::as_str).join(", "),
            }),
        }
    }
}

/// Options for [`export_metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output format.
    pub format: ExportFormat,
    /// Add derived averages to JSON output.
    pub include_statistics: bool,
    /// Add the export time (RFC 3339, UTC) to JSON output.
    pub include_timestamp: bool,
    /// List the advanced scores in text output.
    pub include_advanced: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            include_statistics: true,
            include_timestamp: false,
            include_advanced: true,
        }
    }
}

/// Averages derived from a metrics record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Statistics {
    /// Words per sentence.
    pub avg_words_per_sentence: f64,
    /// Syllables per word.
    pub avg_syllables_per_word: f64,
    /// Share of words missing from the reference list, as a percentage.
    pub difficult_word_percentage: f64,
}

impl From<&ReadabilityMetrics> for Statistics {
    fn from(m: &ReadabilityMetrics) -> Self {
        Self {
            avg_words_per_sentence: m.avg_words_per_sentence(),
            avg_syllables_per_word: m.avg_syllables_per_word(),
            difficult_word_percentage: m.difficult_word_percentage(),
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    text: String,
    metrics: &'a ReadabilityMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<Statistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

/// Render a metrics record for the given text.
///
/// JSON exports carry the current time when `include_timestamp` is set; use
/// [`export_metrics_at`] to control it.
pub fn export_metrics(
    text: &str,
    metrics: &ReadabilityMetrics,
    options: &ExportOptions,
) -> AnalysisResult<String> {
    export_metrics_at(text, metrics, options, Utc::now())
}

/// [`export_metrics`] with an explicit export time.
pub fn export_metrics_at(
    text: &str,
    metrics: &ReadabilityMetrics,
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> AnalysisResult<String> {
    match options.format {
        ExportFormat::Json => to_json(text, metrics, options, now),
        ExportFormat::Csv => Ok(to_csv(metrics)),
        ExportFormat::Text => Ok(to_text(metrics, options.include_advanced)),
    }
}

/// The text preview embedded in JSON exports.
pub fn text_preview(text: &str) -> String {
    let mut preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

fn to_json(
    text: &str,
    metrics: &ReadabilityMetrics,
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> AnalysisResult<String> {
    let doc = JsonExport {
        text: text_preview(text),
        metrics,
        statistics: options
            .include_statistics
            .then(|| Statistics::from(metrics)),
        timestamp: options
            .include_timestamp
            .then(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn to_csv(metrics: &ReadabilityMetrics) -> String {
    let mut rows = vec!["Metric,Value".to_string()];
    rows.extend(
        Metric::ALL
            .iter()
            .map(|&m| format!("{},{:.1}", m.label(), metrics.score(m))),
    );
    rows.extend(count_rows(metrics).map(|(label, n)| format!("{label},{n}")));
    rows.join("\n")
}

fn to_text(metrics: &ReadabilityMetrics, include_advanced: bool) -> String {
    let mut out = String::from("Readability results:\n");

    for m in Metric::ALL {
        if m.is_advanced() && !include_advanced {
            continue;
        }
        let value = metrics.score(m);
        let _ = match m {
            Metric::GunningFog | Metric::FleschReadingEase => writeln!(
                out,
                "- {}: {value:.1} ({})",
                m.label(),
                interpret::interpret(m, value).label
            ),
            _ => writeln!(out, "- {}: {value:.1}", m.label()),
        };
    }

    if include_advanced {
        let _ = writeln!(out, "- Difficult Words: {}", metrics.difficult_words);
    }
    let _ = write!(
        out,
        "- Words: {}, Sentences: {}, Syllables: {}",
        metrics.word_count, metrics.sentence_count, metrics.syllable_count
    );
    out
}

fn count_rows(metrics: &ReadabilityMetrics) -> impl Iterator<Item = (&'static str, usize)> {
    [
        ("Difficult Words", metrics.difficult_words),
        ("Word Count", metrics.word_count),
        ("Sentence Count", metrics.sentence_count),
        ("Syllable Count", metrics.syllable_count),
    ]
    .into_iter()
}
