use crate::FormatError;
use dict_model::Translation;

/// A flat object with the keys `query`, `destination` and `source`.
///
/// Other tools read these field names; they must not change.
pub fn render(translation: &Translation) -> Result<String, FormatError> {
    Ok(serde_json::to_string(translation)?)
}
