//! Pattern deduction section - penalizes single-class passwords and repeats.

use super::SectionScore;
use crate::classifier::CharCounts;
use crate::config::PolicyConfig;

const POINTS_PER_REPEAT: i64 = 2;

/// Returns the deductions as a non-positive value.
///
/// - letters only: minus one per letter
/// - digits only: minus one per digit
/// - minus two per adjacent same-class pair (upper, lower, digit)
pub fn pattern_deduction_section(
    _password: &str,
    counts: &CharCounts,
    _config: &PolicyConfig,
) -> SectionScore {
    let only_letters = if counts.digits == 0 && counts.other == 0 {
        counts.letters() as i64
    } else {
        0
    };
    let only_numbers = if counts.letters() == 0 && counts.other == 0 {
        counts.digits as i64
    } else {
        0
    };
    let repeats = (counts.consecutive_uppercase
        + counts.consecutive_lowercase
        + counts.consecutive_digits) as i64;

    -(only_letters + only_numbers + repeats * POINTS_PER_REPEAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    fn score(pwd: &str) -> SectionScore {
        pattern_deduction_section(pwd, &classify(pwd), &PolicyConfig::default())
    }

    #[test]
    fn test_pattern_section_empty() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_pattern_section_only_letters() {
        // 4 letters + 3 repeats * 2
        assert_eq!(score("aaaa"), -10);
        // 4 letters, no same-class neighbours
        assert_eq!(score("aBcD"), -4);
    }

    #[test]
    fn test_pattern_section_only_numbers() {
        // 4 digits + 3 repeats * 2
        assert_eq!(score("1234"), -10);
    }

    #[test]
    fn test_pattern_section_symbols_only_have_no_deduction() {
        assert_eq!(score("!!!!"), 0);
    }

    #[test]
    fn test_pattern_section_repeats_in_mixed_password() {
        assert_eq!(score("Passw0rd!"), -8);
    }
}
