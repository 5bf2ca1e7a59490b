use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    /// Kept as sent; the server is not consistent about zone suffixes.
    #[serde(default)]
    pub created_on: Option<String>,
}
