//! Random canned responses by category.
//!
//! ```
//! let message = sayit::get_message(Some("yes")).unwrap();
//! assert!(sayit::Category::Yes.messages().contains(&message));
//! ```

use serde::Serialize;

mod options;
mod selector;

pub use justsayit_model::{Category, Registry, UnknownCategory};
pub use options::MessageOptions;
pub use selector::{pick, pick_str, pick_with};

pub const DEFAULT_CATEGORY: Category = Category::No;

/// A message together with the category it was drawn from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaidMessage {
    #[serde(rename = "type")]
    pub category: Category,
    pub message: &'static str,
}

fn resolve(category: Option<&str>) -> Result<Category, UnknownCategory> {
    match category {
        Some(name) => name.parse(),
        None => Ok(DEFAULT_CATEGORY),
    }
}

/// Random message of `category`, or of [`DEFAULT_CATEGORY`] when `None`.
pub fn get_message(category: Option<&str>) -> Result<&'static str, UnknownCategory> {
    say(resolve(category)?)
}

pub fn get_message_with_meta(options: MessageOptions) -> Result<SaidMessage, UnknownCategory> {
    let category = resolve(options.category.as_deref())?;
    Ok(SaidMessage {
        category,
        message: say(category)?,
    })
}

pub fn say(category: Category) -> Result<&'static str, UnknownCategory> {
    pick(category)
}

pub fn list_categories() -> Vec<Category> {
    Registry::categories().to_vec()
}

pub fn is_valid_category(candidate: &str) -> bool {
    Registry::contains(candidate)
}
