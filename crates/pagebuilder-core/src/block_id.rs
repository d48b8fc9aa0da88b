//! Block ids: `{Type}-{8 alphanumerics}`, e.g. `Hero-a1b2c3d4`.
//!
//! Suffixes are random, not allocated. Collisions are unlikely; the mutator
//! still checks against the live document before inserting.

use uuid::Uuid;

pub const SUFFIX_LEN: usize = 8;

/// Fresh id for a block of `block_type`.
pub fn generate(block_type: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{block_type}-{}", &suffix[..SUFFIX_LEN])
}

/// Whether `id` is `{block_type}-` followed by exactly eight ASCII alphanumerics.
pub fn is_well_formed(id: &str, block_type: &str) -> bool {
    let Some(suffix) = id
        .strip_prefix(block_type)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return false;
    };
    !block_type.is_empty()
        && block_type.chars().all(|c| c.is_ascii_alphanumeric())
        && suffix.len() == SUFFIX_LEN
        && suffix.chars().all(|c| c.is_ascii_alphanumeric())
}
