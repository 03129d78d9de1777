//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes text statistics and readability scoring over the MCP protocol,
//! making them available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library that
//! the CLI commands use; each `#[tool]` method delegates to `legibility_core`.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors with [`to_mcp_error`]
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use legibility_core::{
    Config, DEFAULT_MAX_INPUT_BYTES, Formula, ReadabilityError, ScoreOptions, TextStats, markdown,
    readability,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `text_stats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextStatsParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `score_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreReadabilityParams {
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Formulas to compute. Omit for the server's defaults.
    pub formulas: Option<Vec<Formula>>,
    /// Seed for SMOG and FORCAST sampling, for reproducible scores.
    pub seed: Option<u64>,
    /// Maximum acceptable Flesch-Kincaid grade level.
    pub max_grade: Option<f64>,
}

/// Map a scoring error onto the MCP error space.
///
/// Problems with the submitted text are the caller's to fix; a word list
/// that cannot be read is a server-side failure.
pub fn to_mcp_error(err: &ReadabilityError) -> McpError {
    match err {
        ReadabilityError::InvalidInput | ReadabilityError::InsufficientData { .. } => {
            McpError::invalid_params(err.to_string(), None)
        }
        ReadabilityError::ResourceLoad { .. } => McpError::internal_error(err.to_string(), None),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server exposing readability scoring to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    defaults: ScoreOptions,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            Config::default().score_options(),
            Some(DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    ///
    /// `defaults` supplies the formulas, seed, word list and grade limit used
    /// when a request leaves them out.
    pub fn new(defaults: ScoreOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            defaults,
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

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "formulas": Formula::ALL.iter().map(Formula::as_str).collect::<Vec<_>>(),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Count words, sentences and syllables.
    #[tool(
        description = "Compute text statistics: total words, sentences, average sentence length, syllables, and monosyllabic/bisyllabic word counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_stats(
        &self,
        Parameters(params): Parameters<TextStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "text_stats",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let text = if params.strip_markdown {
            markdown::strip_to_prose(&params.text)
        } else {
            params.text
        };
        let stats = TextStats::compute(&text).map_err(|e| to_mcp_error(&e))?;

        tracing::info!(
            tool = "text_stats",
            words = stats.total_words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&stats)?)]))
    }

    /// Score readability with the selected formulas.
    #[tool(
        description = "Score readability of text with Flesch Reading Ease (original and revised), Flesch-Kincaid Grade, Dale-Chall, Gunning Fog, SMOG, and FORCAST. Returns statistics, scores, and the sampling seed used."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_readability(
        &self,
        Parameters(params): Parameters<ScoreReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "score_readability",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let options = ScoreOptions {
            strip_markdown: params.strip_markdown,
            formulas: params.formulas.or_else(|| self.defaults.formulas.clone()),
            seed: params.seed.or(self.defaults.seed),
            word_list: self.defaults.word_list.clone(),
            max_grade: params.max_grade.or(self.defaults.max_grade),
        };
        let report =
            readability::check_readability(&params.text, &options).map_err(|e| to_mcp_error(&e))?;

        tracing::info!(
            tool = "score_readability",
            seed = report.seed,
            over_max = report.over_max,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
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
                "{} MCP server. Use text_stats for word and sentence counts and \
                 score_readability for readability formulas.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
