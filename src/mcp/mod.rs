// src/mcp/mod.rs
// MCP Server implementation

pub mod responses;

use std::path::Path;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ServerHandler,
};
use serde::Deserialize;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::files::{self, LineEdit};
use crate::traverse;
use crate::utils::ResultExt;

use self::responses::{
    DeleteLinesOutput, DirEntryOutput, EditLinesOutput, InsertLinesOutput, Json,
    LineRecordOutput, ListDirectoryOutput, ReadLinesOutput, ReplaceOutput, SearchMatchOutput,
    SearchOutput,
};

/// MCP server state. Every operation is independently invoked with all
/// context in its arguments, so the server itself holds only the router.
#[derive(Clone)]
pub struct LinesmithServer {
    tool_router: ToolRouter<Self>,
}

impl LinesmithServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for LinesmithServer {
    fn default() -> Self {
        Self::new()
    }
}

// Request types for tools with parameters
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadLinesRequest {
    #[schemars(description = "Absolute file path")]
    pub path: String,
    #[schemars(description = "First line of the range (1-based, inclusive)")]
    pub start_line: i64,
    #[schemars(description = "Last line of the range (1-based, inclusive)")]
    pub end_line: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LineEditRequest {
    #[schemars(description = "Line number to replace (1-based)")]
    pub line: i64,
    #[schemars(description = "New content for the line")]
    pub content: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EditLinesRequest {
    #[schemars(description = "Absolute file path")]
    pub path: String,
    #[schemars(description = "Line replacements; the whole batch is validated before any is applied")]
    pub edits: Vec<LineEditRequest>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InsertLinesRequest {
    #[schemars(description = "Absolute file path")]
    pub path: String,
    #[schemars(description = "Insertion point: 0 = before the first line, N = after line N")]
    pub position: i64,
    #[schemars(description = "Lines to insert, in order")]
    pub lines: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteLinesRequest {
    #[schemars(description = "Absolute file path")]
    pub path: String,
    #[schemars(description = "First line to delete (1-based, inclusive)")]
    pub start_line: i64,
    #[schemars(description = "Last line to delete (1-based, inclusive)")]
    pub end_line: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReplacePatternRequest {
    #[schemars(description = "Absolute file path")]
    pub path: String,
    #[schemars(description = "Regular expression to match")]
    pub pattern: String,
    #[schemars(description = "Replacement template ($1-style group references supported)")]
    pub replacement: String,
    #[schemars(description = "Regex flags: g/i/m/s (default \"g\")")]
    pub flags: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFilesRequest {
    #[schemars(description = "Directory to search")]
    pub directory: String,
    #[schemars(description = "Pattern, tried both as literal substring and as regex")]
    pub pattern: String,
    #[schemars(description = "Descend into subdirectories (default true)")]
    pub recursive: Option<bool>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListDirectoryRequest {
    #[schemars(description = "Directory to list")]
    pub path: String,
    #[schemars(description = "Recurse into subdirectories (default false)")]
    pub recursive: Option<bool>,
    #[schemars(description = "Dot-prefixed extensions to keep, e.g. [\".rs\", \".toml\"]")]
    pub extensions: Option<Vec<String>>,
    #[schemars(description = "Recursion depth bound (default 3); ignored when not recursive")]
    pub max_depth: Option<i64>,
}

#[tool_router]
impl LinesmithServer {
    #[tool(description = "Read an inclusive 1-based line range from a file.")]
    async fn read_lines(
        &self,
        Parameters(req): Parameters<ReadLinesRequest>,
    ) -> Result<Json<ReadLinesOutput>, String> {
        let out = files::read_lines(Path::new(&req.path), req.start_line, req.end_line)
            .await
            .str_err()?;
        Ok(Json(ReadLinesOutput {
            total_lines: out.total_lines,
            text: out.text,
            lines: out
                .records
                .into_iter()
                .map(|r| LineRecordOutput {
                    line: r.line,
                    text: r.text,
                })
                .collect(),
        }))
    }

    #[tool(
        description = "Replace the content of specific lines. The batch fully succeeds or fully fails; no partial application."
    )]
    async fn edit_lines(
        &self,
        Parameters(req): Parameters<EditLinesRequest>,
    ) -> Result<Json<EditLinesOutput>, String> {
        let edits: Vec<LineEdit> = req
            .edits
            .into_iter()
            .map(|e| LineEdit {
                line: e.line,
                content: e.content,
            })
            .collect();
        let out = files::edit_lines(Path::new(&req.path), &edits).await.str_err()?;
        Ok(Json(EditLinesOutput {
            success: true,
            edited_lines: out.edited_lines,
            total_lines: out.total_lines,
        }))
    }

    #[tool(description = "Insert lines at a 0-based position (0 = before the first line).")]
    async fn insert_lines(
        &self,
        Parameters(req): Parameters<InsertLinesRequest>,
    ) -> Result<Json<InsertLinesOutput>, String> {
        let out = files::insert_lines(Path::new(&req.path), req.position, &req.lines)
            .await
            .str_err()?;
        Ok(Json(InsertLinesOutput {
            total_lines: out.total_lines,
        }))
    }

    #[tool(description = "Delete an inclusive 1-based line range from a file.")]
    async fn delete_lines(
        &self,
        Parameters(req): Parameters<DeleteLinesRequest>,
    ) -> Result<Json<DeleteLinesOutput>, String> {
        let out = files::delete_lines(Path::new(&req.path), req.start_line, req.end_line)
            .await
            .str_err()?;
        Ok(Json(DeleteLinesOutput {
            removed: out.removed,
            total_lines: out.total_lines,
        }))
    }

    #[tool(
        description = "Regex-replace over the whole file. Reports how many matches were eligible before replacement; zero matches is still a successful write."
    )]
    async fn replace_pattern(
        &self,
        Parameters(req): Parameters<ReplacePatternRequest>,
    ) -> Result<Json<ReplaceOutput>, String> {
        let flags = req.flags.as_deref().unwrap_or("g");
        let out = files::replace_pattern(Path::new(&req.path), &req.pattern, &req.replacement, flags)
            .await
            .str_err()?;
        Ok(Json(ReplaceOutput {
            match_count: out.match_count,
        }))
    }

    #[tool(
        description = "Search file contents line by line. Matches on literal substring or regex; reports up to 50 hits plus the full match count."
    )]
    async fn search_files(
        &self,
        Parameters(req): Parameters<SearchFilesRequest>,
    ) -> Result<Json<SearchOutput>, String> {
        let recursive = req.recursive.unwrap_or(true);
        let out = traverse::search(Path::new(&req.directory), &req.pattern, recursive).str_err()?;
        Ok(Json(SearchOutput {
            total_matches: out.total_matches,
            matches: out
                .matches
                .into_iter()
                .map(|m| SearchMatchOutput {
                    file: m.file,
                    line: m.line,
                    text: m.text,
                })
                .collect(),
        }))
    }

    #[tool(
        description = "List a directory. Flat by default; recursive mode honors max_depth and an optional extension filter."
    )]
    async fn list_directory(
        &self,
        Parameters(req): Parameters<ListDirectoryRequest>,
    ) -> Result<Json<ListDirectoryOutput>, String> {
        let recursive = req.recursive.unwrap_or(false);
        let max_depth = req.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        let entries = traverse::list_directory(
            Path::new(&req.path),
            recursive,
            req.extensions.as_deref(),
            max_depth,
        )
        .str_err()?;
        let entries: Vec<DirEntryOutput> = entries
            .into_iter()
            .map(|e| DirEntryOutput {
                name: e.name,
                path: e.path,
                kind: e.kind.as_str().to_string(),
                size: e.size,
                extension: e.extension,
            })
            .collect();
        Ok(Json(ListDirectoryOutput {
            total: entries.len(),
            entries,
        }))
    }
}

#[tool_handler]
impl ServerHandler for LinesmithServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "linesmith".into(),
                title: Some("Linesmith - line-addressable file tools".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Linesmith edits text files by line number, searches file contents, and lists directory trees.".into(),
            ),
        }
    }
}
