use dict_model::Translation;
use thiserror::Error;

pub mod alfred;
pub mod json;
pub mod raw;

/// Most rows/items any format shows for one lookup.
pub const MAX_RESULTS: usize = 20;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write XML: {0}")]
    Xml(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("rendered XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Aligned two-column plain text.
    Raw,
    /// `{"query", "destination", "source"}` object.
    Json,
    /// Item list for the Alfred launcher's script filter.
    Alfred,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Raw, OutputFormat::Json, OutputFormat::Alfred];

    pub fn can_handle(self, requested: OutputFormat) -> bool {
        self == requested
    }

    /// Render a finished lookup. Never performs I/O.
    pub fn render(self, translation: &Translation) -> Result<String, FormatError> {
        match self {
            OutputFormat::Raw => Ok(raw::render(translation)),
            OutputFormat::Json => json::render(translation),
            OutputFormat::Alfred => alfred::render(translation),
        }
    }
}
