use crate::model::AmountOverflow;
use orcamento_layout::LayoutError;
use orcamento_render_lopdf::RenderError;
use thiserror::Error;

/// Why a quote draft was rejected. Checks run in a fixed order and the first
/// failing one is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Client is required")]
    MissingClient,
    #[error("At least one service is required")]
    NoServices,
    #[error("Invalid delivery deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),
    #[error("Service {index}: name is required")]
    MissingServiceName { index: usize },
    #[error("Service {index}: quantity must be greater than zero")]
    NonPositiveQuantity { index: usize },
    #[error("Service {index}: unit price must be greater than zero")]
    NonPositiveUnitPrice { index: usize },
}

/// A quote could not be turned into a PDF. Never accompanied by partial output.
#[derive(Error, Debug)]
pub enum RenderingFailure {
    #[error("Amount error: {0}")]
    Amount(#[from] AmountOverflow),
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("PDF writing failed: {0}")]
    Pdf(#[from] RenderError),
}

impl RenderingFailure {
    /// Short error kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderingFailure::Amount(_) => "amount",
            RenderingFailure::Layout(_) => "layout",
            RenderingFailure::Pdf(_) => "pdf",
        }
    }
}

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error(transparent)]
    Rendering(#[from] RenderingFailure),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Issuer profile error: {0}")]
    Profile(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
