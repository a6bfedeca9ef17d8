use serde::Deserialize;

/// The body returned by deletions and other acknowledgement-only endpoints.
///
/// Deserializes from `{}` as well, which is what a `204 No Content` becomes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}
