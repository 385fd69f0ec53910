//! Requirements section - rewards each policy rule the password satisfies.

use super::SectionScore;
use crate::classifier::CharCounts;
use crate::config::PolicyConfig;

const POINTS_PER_REQUIREMENT: i64 = 2;

/// Counts the satisfied policy rules.
///
/// One point each for: minimum length reached, and every required class
/// that is present. A custom special-character set earns one more point
/// when the password contains one of its characters.
pub fn requirement_match_count(password: &str, counts: &CharCounts, config: &PolicyConfig) -> usize {
    let mut matches = 0;

    if counts.total() >= config.minimum_length() {
        matches += 1;
    }
    if config.require_uppercase() && counts.uppercase > 0 {
        matches += 1;
    }
    if config.require_lowercase() && counts.lowercase > 0 {
        matches += 1;
    }
    if config.require_digits() && counts.digits > 0 {
        matches += 1;
    }
    if config.require_special() && counts.other > 0 {
        matches += 1;
        if config.has_custom_special_characters()
            && password.chars().any(|c| config.special_characters().contains(&c))
        {
            matches += 1;
        }
    }

    matches
}

pub fn requirements_section(password: &str, counts: &CharCounts, config: &PolicyConfig) -> SectionScore {
    requirement_match_count(password, counts, config) as i64 * POINTS_PER_REQUIREMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::config::PolicyOptions;

    fn count(pwd: &str, config: &PolicyConfig) -> usize {
        requirement_match_count(pwd, &classify(pwd), config)
    }

    fn custom(chars: &[char]) -> PolicyConfig {
        PolicyConfig::resolve(PolicyOptions::new().allowed_special_characters(chars.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_requirements_all_met_default() {
        assert_eq!(count("Passw0rd!", &PolicyConfig::default()), 5);
    }

    #[test]
    fn test_requirements_empty() {
        assert_eq!(count("", &PolicyConfig::default()), 0);
    }

    #[test]
    fn test_requirements_disabled_classes_do_not_count() {
        let config = PolicyConfig::resolve(
            PolicyOptions::new().require_digits(false).require_special(false),
        )
        .unwrap();
        assert_eq!(count("Passw0rd!", &config), 3);
    }

    #[test]
    fn test_requirements_custom_special_bonus() {
        let config = custom(&['~']);
        assert_eq!(count("ab~", &config), 3);
        assert_eq!(count("ab~", &PolicyConfig::default()), 2);
    }

    #[test]
    fn test_requirements_custom_special_without_match() {
        // '!' is "other" but not part of the custom set
        let config = custom(&['~']);
        assert_eq!(count("ab!", &config), 2);
    }

    #[test]
    fn test_requirements_no_bonus_for_default_set() {
        let mut shuffled = crate::config::DEFAULT_SPECIAL_CHARACTERS.to_vec();
        shuffled.rotate_left(5);
        let config = custom(&shuffled);
        assert_eq!(count("Passw0rd!", &config), 5);
    }

    #[test]
    fn test_requirements_section_doubles_count() {
        let pwd = "Passw0rd!";
        let config = PolicyConfig::default();
        assert_eq!(requirements_section(pwd, &classify(pwd), &config), 10);
    }
}
