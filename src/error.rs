//! Domain-specific error types for mindforge

use serde_json::json;
use thiserror::Error;

/// Main error type for the mindforge MCP server
#[derive(Error, Debug)]
pub enum MindForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Recipe registry error: {message}")]
    Registry { message: String },

    #[error("MCP protocol error: {message}")]
    Mcp { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },
}

impl From<anyhow::Error> for MindForgeError {
    fn from(err: anyhow::Error) -> Self {
        MindForgeError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MindForgeError {
    fn from(err: serde_json::Error) -> Self {
        MindForgeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MindForgeError {
    fn from(err: serde_yaml::Error) -> Self {
        MindForgeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for MindForgeError {
    fn from(err: std::io::Error) -> Self {
        MindForgeError::Registry {
            message: err.to_string(),
        }
    }
}

impl From<rmcp::ErrorData> for MindForgeError {
    fn from(err: rmcp::ErrorData) -> Self {
        MindForgeError::Mcp {
            message: err.message.to_string(),
        }
    }
}

/// Convert MindForgeError to MCP error
impl From<MindForgeError> for rmcp::ErrorData {
    fn from(err: MindForgeError) -> Self {
        let (code, label, details) = match err {
            MindForgeError::Config { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Configuration error",
                message,
            ),
            MindForgeError::Registry { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Recipe registry error",
                message,
            ),
            MindForgeError::Mcp { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "MCP protocol error",
                message,
            ),
            MindForgeError::Serialization { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Serialization error",
                message,
            ),
            MindForgeError::Validation { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Validation error",
                message,
            ),
            MindForgeError::Internal { message } => (
                rmcp::model::ErrorCode::INTERNAL_ERROR,
                "Internal error",
                message,
            ),
            MindForgeError::InvalidParams { message } => (
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "Invalid parameters",
                message,
            ),
        };

        rmcp::ErrorData {
            code,
            message: format!("{label}: {details}").into(),
            data: Some(json!({ "details": details })),
        }
    }
}

/// Result type alias for MindForge operations
pub type Result<T> = std::result::Result<T, MindForgeError>;
