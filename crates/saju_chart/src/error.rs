//! Error types for chart assembly.

use saju_base::SajuError;
use thiserror::Error;

/// Errors from resolving a chart request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Symbol-layer error with no field context.
    #[error(transparent)]
    Symbol(#[from] SajuError),
    /// A named input field failed to parse.
    #[error("{field}: {source}")]
    Field {
        field: String,
        #[source]
        source: SajuError,
    },
    /// Request body is not valid JSON for a chart input.
    #[error("malformed chart input: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn field(field: impl Into<String>, source: SajuError) -> Self {
        Self::Field {
            field: field.into(),
            source,
        }
    }

    /// Underlying symbol error, if the failure came from the symbol layer.
    pub fn symbol_error(&self) -> Option<&SajuError> {
        match self {
            Self::Symbol(e) | Self::Field { source: e, .. } => Some(e),
            Self::Json(_) => None,
        }
    }
}
