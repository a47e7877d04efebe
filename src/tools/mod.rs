//! Tool handlers for the mindforge MCP server

pub mod apply_recipe;
pub mod get_recipe;
