//! # newscheck-tools
//!
//! Tool implementations and the registry stages resolve tools from:
//!
//! - [`registry::ToolRegistry`] — name → tool map
//! - [`ddg::DdgSearchClient`] — web-search backend adapter
//! - [`search_tool::SearchTool`] — the search capability exposed to stages

#![deny(unsafe_code)]

pub mod ddg;
pub mod registry;
pub mod search_tool;

pub use ddg::DdgSearchClient;
pub use registry::ToolRegistry;
pub use search_tool::SearchTool;
