//! Length section - rewards every character.

use super::SectionScore;
use crate::classifier::CharCounts;
use crate::config::PolicyConfig;

const POINTS_PER_CHARACTER: i64 = 4;

/// Four points per character.
pub fn length_section(_password: &str, counts: &CharCounts, _config: &PolicyConfig) -> SectionScore {
    counts.total() as i64 * POINTS_PER_CHARACTER
}
