//! Interior section - rewards digits and symbols away from the edges.

use super::SectionScore;
use crate::classifier::{count_interior_digits_and_symbols, CharCounts};
use crate::config::PolicyConfig;

pub fn interior_section(password: &str, _counts: &CharCounts, _config: &PolicyConfig) -> SectionScore {
    count_interior_digits_and_symbols(password) as i64 * 2
}
