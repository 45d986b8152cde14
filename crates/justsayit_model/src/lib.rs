use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod registry;

pub use registry::Registry;

/// Kind of canned response.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    No,
    Yes,
    Maybe,
    Joke,
    Motivation,
    ThankYou,
    Apology,
}

impl Category {
    /// All categories, in registry order.
    pub const ALL: [Category; 7] = [
        Category::No,
        Category::Yes,
        Category::Maybe,
        Category::Joke,
        Category::Motivation,
        Category::ThankYou,
        Category::Apology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::No => "no",
            Category::Yes => "yes",
            Category::Maybe => "maybe",
            Category::Joke => "joke",
            Category::Motivation => "motivation",
            Category::ThankYou => "thank-you",
            Category::Apology => "apology",
        }
    }

    pub fn messages(&self) -> &'static [&'static str] {
        Registry::get(*self)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown response type: {0}")]
pub struct UnknownCategory(String);

impl UnknownCategory {
    pub fn new(value: impl Into<String>) -> Self {
        UnknownCategory(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| UnknownCategory::new(value))
    }
}

impl TryFrom<&str> for Category {
    type Error = UnknownCategory;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::try_from(value.as_str())
    }
}
