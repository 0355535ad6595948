//! MCP (Model Context Protocol) server.
//!
//! Exposes the scoring engine to AI assistants over stdio. Tools are thin
//! wrappers around `legibility-core`; they validate input size, call the
//! library and return its output as text content.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use legibility_core::{
    ExportFormat, ReadabilityCalculator, ReferenceWordList, Settings, export_metrics, markdown,
    word_frequency,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_info_format")]
    pub format: String,
}

fn default_info_format() -> String {
    "text".to_string()
}

/// Parameters for the `calculate_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CalculateReadabilityParams {
    /// The text to score.
    pub text: String,
    /// Output format: "json", "csv" or "text". Defaults to the configured format.
    pub format: Option<String>,
    /// Strip Markdown formatting before scoring.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Only report Gunning Fog, Flesch Reading Ease and Flesch-Kincaid in text output.
    #[serde(default)]
    pub basic: bool,
    /// Add the export time to JSON output. Defaults to the configured setting.
    pub timestamp: Option<bool>,
}

/// Parameters for the `word_frequency` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WordFrequencyParams {
    /// The text to summarize.
    pub text: String,
    /// Minimum occurrences for a word to be listed.
    pub min_frequency: Option<usize>,
    /// Maximum number of words to list.
    pub max_words: Option<usize>,
    /// Leave common short words out.
    pub exclude_stop_words: Option<bool>,
    /// Strip Markdown formatting first.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// MCP server exposing readability scoring and word frequency.
#[derive(Clone)]
pub struct ReadabilityServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    calculator: ReadabilityCalculator,
    settings: Settings,
    max_input_bytes: Option<usize>,
}

impl Default for ReadabilityServer {
    fn default() -> Self {
        Self::new(
            ReferenceWordList::dale_chall(),
            Settings::default(),
            Some(legibility_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl ReadabilityServer {
    /// Create a server scoring against `word_list` with the given defaults.
    pub fn new(
        word_list: Arc<ReferenceWordList>,
        settings: Settings,
        max_input_bytes: Option<usize>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            calculator: ReadabilityCalculator::new(word_list),
            settings,
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text with all eight readability formulas.
    #[tool(
        description = "Score text with Gunning Fog, Flesch Reading Ease, Flesch-Kincaid, SMOG, Coleman-Liau, ARI, Dale-Chall and Linsear Write. Returns JSON (default), CSV or a text summary."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn calculate_readability(
        &self,
        Parameters(params): Parameters<CalculateReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "calculate_readability",
            format = ?params.format,
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let mut options = self.settings.export_options();
        if let Some(ref name) = params.format {
            options.format = name
                .parse::<ExportFormat>()
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        }
        if params.basic {
            options.include_advanced = false;
        }
        if let Some(stamp) = params.timestamp {
            options.include_timestamp = stamp;
        }

        let text = if params.strip_markdown {
            markdown::strip_to_prose(&params.text)
        } else {
            params.text
        };
        let metrics = self.calculator.calculate(&text);
        let output = export_metrics(&text, &metrics, &options)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        tracing::info!(
            tool = "calculate_readability",
            words = metrics.word_count,
            flesch_reading_ease = metrics.flesch_reading_ease,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// Summarize the most frequent words.
    #[tool(
        description = "List the most frequent words in text with their counts and a display size (12-60) for word clouds. Returns JSON."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_frequency(
        &self,
        Parameters(params): Parameters<WordFrequencyParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_frequency", "executing MCP tool");
        self.check_size(&params.text)?;

        let mut options = self.settings.frequency_options();
        if let Some(min) = params.min_frequency {
            options.min_frequency = min;
        }
        if let Some(max) = params.max_words {
            options.max_words = max;
        }
        if let Some(exclude) = params.exclude_stop_words {
            options.exclude_stop_words = exclude;
        }

        let text = if params.strip_markdown {
            markdown::strip_to_prose(&params.text)
        } else {
            params.text
        };
        let words = word_frequency(&text, &options);
        let json = serde_json::to_string_pretty(&words)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "word_frequency", words = words.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ReadabilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use calculate_readability to score text and \
                 word_frequency to find its most common words.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn readability(text: &str, format: Option<&str>) -> Result<CallToolResult, McpError> {
        ReadabilityServer::default().calculate_readability(Parameters(
            CalculateReadabilityParams {
                text: text.to_string(),
                format: format.map(ToString::to_string),
                strip_markdown: false,
                basic: false,
                timestamp: None,
            },
        ))
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&ReadabilityServer::default());
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("calculate_readability"));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ReadabilityServer::default();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .expect("get_info should succeed");

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn calculate_readability_defaults_to_json() {
        let result = readability(FOX, None).expect("should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["metrics"]["word_count"], 9);
        assert_eq!(json["metrics"]["sentence_count"], 1);
        assert!(json["statistics"].is_object());
    }

    #[test]
    fn calculate_readability_supports_csv_and_text() {
        let csv = readability(FOX, Some("csv")).unwrap();
        assert!(extract_text(&csv).unwrap().starts_with("Metric,Value\n"));

        let text = readability(FOX, Some("txt")).unwrap();
        assert!(extract_text(&text).unwrap().contains("Gunning Fog: 3.6"));
    }

    #[test]
    fn calculate_readability_timestamp_on_request() {
        let result = ReadabilityServer::default()
            .calculate_readability(Parameters(CalculateReadabilityParams {
                text: FOX.to_string(),
                format: None,
                strip_markdown: false,
                basic: false,
                timestamp: Some(true),
            }))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(extract_text(&result).unwrap()).unwrap();
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));

        let plain = readability(FOX, Some("json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(extract_text(&plain).unwrap()).unwrap();
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn calculate_readability_rejects_unknown_format() {
        assert!(readability(FOX, Some("xml")).is_err());
    }

    #[test]
    fn calculate_readability_enforces_size_limit() {
        let server = ReadabilityServer::new(ReferenceWordList::dale_chall(), Settings::default(), Some(10));
        let result = server.calculate_readability(Parameters(CalculateReadabilityParams {
            text: FOX.to_string(),
            format: None,
            strip_markdown: false,
            basic: false,
            timestamp: None,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn calculate_readability_strips_markdown() {
        let server = ReadabilityServer::default();
        let result = server
            .calculate_readability(Parameters(CalculateReadabilityParams {
                text: "# Heading words here\n\nThe cat sat.".to_string(),
                format: Some("json".to_string()),
                strip_markdown: true,
                basic: false,
                timestamp: None,
            }))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(extract_text(&result).unwrap()).unwrap();
        assert_eq!(json["metrics"]["word_count"], 3);
    }

    #[test]
    fn word_frequency_tool_works() {
        let server = ReadabilityServer::default();
        let result = server
            .word_frequency(Parameters(WordFrequencyParams {
                text: "rust rust rust borrow borrow".to_string(),
                min_frequency: Some(2),
                max_words: None,
                exclude_stop_words: None,
                strip_markdown: false,
            }))
            .expect("word_frequency should succeed");

        let json: serde_json::Value = serde_json::from_str(extract_text(&result).unwrap()).unwrap();
        let words = json.as_array().unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0]["word"], "rust");
        assert_eq!(words[0]["count"], 3);
        assert_eq!(words[0]["size"], 24);
    }
}
