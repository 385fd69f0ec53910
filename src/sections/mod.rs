//! Password scoring sections
//!
//! Each section scores one aspect of the password. The evaluator sums
//! the contributions in order; deductions are returned as negative values.

mod interior;
mod length;
mod pattern;
mod requirements;
mod variety;

pub use interior::interior_section;
pub use length::length_section;
pub use pattern::pattern_deduction_section;
pub use requirements::{requirement_match_count, requirements_section};
pub use variety::character_variety_section;

use crate::classifier::CharCounts;
use crate::config::PolicyConfig;

/// Signed contribution of a section to the raw score.
pub type SectionScore = i64;

/// Signature shared by every scoring section.
pub type Section = fn(&str, &CharCounts, &PolicyConfig) -> SectionScore;
