use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageOptions {
    /// Category name; `None` selects [`crate::DEFAULT_CATEGORY`].
    #[serde(rename = "type")]
    pub category: Option<String>,
}

impl MessageOptions {
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }
}
