//! Character variety section - scores the mix of character classes.

use super::SectionScore;
use crate::classifier::CharCounts;
use crate::config::PolicyConfig;

/// Sums the class-based terms of the score.
///
/// The two case terms reward characters *not* in that case:
/// `(len - uppercase) * 2 + (len - lowercase) * 2`. Digits earn 4 points
/// each and every other character 6.
pub fn character_variety_section(
    _password: &str,
    counts: &CharCounts,
    _config: &PolicyConfig,
) -> SectionScore {
    let len = counts.total() as i64;
    let uppercase_term = (len - counts.uppercase as i64) * 2;
    let lowercase_term = (len - counts.lowercase as i64) * 2;
    let digit_term = counts.digits as i64 * 4;
    let other_term = counts.other as i64 * 6;

    uppercase_term + lowercase_term + digit_term + other_term
}
