use justsayit_model::{Category, UnknownCategory};
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random message of `category`.
pub fn pick(category: Category) -> Result<&'static str, UnknownCategory> {
    pick_with(category, &mut rand::thread_rng())
}

pub fn pick_with<R: Rng + ?Sized>(
    category: Category,
    rng: &mut R,
) -> Result<&'static str, UnknownCategory> {
    category
        .messages()
        .choose(rng)
        .copied()
        .ok_or_else(|| UnknownCategory::new(category.as_str()))
}

/// Validates a raw name against the registry, then picks.
pub fn pick_str(candidate: &str) -> Result<&'static str, UnknownCategory> {
    pick(candidate.parse()?)
}
