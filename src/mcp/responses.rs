//! Structured output types for MCP tools.
//!
//! Each tool returns a typed output struct wrapped in `Json<T>`, so rmcp
//! auto-infers `outputSchema`. The root type is always an object (MCP
//! requirement).

use schemars::JsonSchema;
use serde::Serialize;

pub use rmcp::handler::server::wrapper::Json;

// ============================================================================
// Line mutations
// ============================================================================

#[derive(Debug, Serialize, JsonSchema)]
pub struct ReadLinesOutput {
    pub total_lines: usize,
    /// The requested range joined as one block of text
    pub text: String,
    /// The same range as addressable per-line records
    pub lines: Vec<LineRecordOutput>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct LineRecordOutput {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct EditLinesOutput {
    pub success: bool,
    pub edited_lines: Vec<usize>,
    pub total_lines: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct InsertLinesOutput {
    pub total_lines: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DeleteLinesOutput {
    pub removed: usize,
    pub total_lines: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ReplaceOutput {
    pub match_count: usize,
}

// ============================================================================
// Traversal
// ============================================================================

#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchOutput {
    /// Count of all matches found, before truncation to the result budget
    pub total_matches: usize,
    pub matches: Vec<SearchMatchOutput>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchMatchOutput {
    pub file: String,
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ListDirectoryOutput {
    pub total: usize,
    pub entries: Vec<DirEntryOutput>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DirEntryOutput {
    pub name: String,
    pub path: String,
    /// "file" or "directory"
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
