//! Password generator - random passwords that satisfy a policy.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

use crate::classifier::CharClass;
use crate::config::PolicyConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Random characters added on top of the required ones, at minimum.
const MIN_FILLER_LENGTH: usize = 2;

/// Character sets of the enabled classes, in fixed order:
/// lowercase, uppercase, digits, special.
fn enabled_classes(config: &PolicyConfig) -> Vec<(CharClass, Vec<char>)> {
    let mut classes = Vec::with_capacity(4);
    if config.require_lowercase() {
        classes.push((CharClass::Lowercase, LOWERCASE.chars().collect()));
    }
    if config.require_uppercase() {
        classes.push((CharClass::Uppercase, UPPERCASE.chars().collect()));
    }
    if config.require_digits() {
        classes.push((CharClass::Digit, DIGITS.chars().collect()));
    }
    if config.require_special() {
        classes.push((CharClass::Other, config.special_characters().to_vec()));
    }
    classes
}

/// Characters of the disabled digit and special classes.
fn disallowed_at_edges(config: &PolicyConfig) -> Vec<char> {
    let mut disallowed = Vec::new();
    if !config.require_digits() {
        disallowed.extend(DIGITS.chars());
    }
    if !config.require_special() {
        disallowed.extend_from_slice(config.special_characters());
    }
    disallowed
}

/// Generates a password for `config` using `rng`.
///
/// One character is drawn from every enabled class, then
/// `max(minimum_length - required, 2)` more from the combined pool, and
/// the result is shuffled. The first and last characters are then picked
/// among edge-eligible characters: enabled letters, or any enabled class
/// when no letter class is enabled. Characters are moved to the edges,
/// never dropped, so every required class stays represented.
///
/// With a single edge candidate in the shuffled sequence, that character
/// becomes the first one and the last is a fresh draw from the edge-eligible
/// set, instead of reusing the candidate for both ends. With no candidate,
/// both edges are fresh draws.
///
/// A policy with every class disabled has nothing to draw from and
/// yields an empty password.
pub fn generate_password<R: Rng + ?Sized>(config: &PolicyConfig, rng: &mut R) -> SecretString {
    SecretString::new(build_password(config, rng).into())
}

fn build_password<R: Rng + ?Sized>(config: &PolicyConfig, rng: &mut R) -> String {
    let classes = enabled_classes(config);
    if classes.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("no character class enabled, generating empty password");
        return String::new();
    }

    let pool: Vec<char> = classes
        .iter()
        .flat_map(|(_, chars)| chars.iter().copied())
        .collect();

    let mut combined: Vec<char> = classes
        .iter()
        .filter_map(|(_, chars)| chars.choose(rng).copied())
        .collect();
    let filler = config
        .minimum_length()
        .saturating_sub(combined.len())
        .max(MIN_FILLER_LENGTH);
    for _ in 0..filler {
        if let Some(&c) = pool.choose(rng) {
            combined.push(c);
        }
    }
    combined.shuffle(rng);

    let letters: Vec<char> = classes
        .iter()
        .filter(|(class, _)| matches!(class, CharClass::Lowercase | CharClass::Uppercase))
        .flat_map(|(_, chars)| chars.iter().copied())
        .collect();
    let edge_pool = if letters.is_empty() { pool } else { letters };
    let disallowed = disallowed_at_edges(config);
    let edge_chars: Vec<char> = edge_pool
        .into_iter()
        .filter(|c| !disallowed.contains(c))
        .collect();

    place_edges(combined, &edge_chars, rng)
}

/// Moves the first and last edge-eligible characters of `combined` to the ends.
fn place_edges<R: Rng + ?Sized>(mut combined: Vec<char>, edge_chars: &[char], rng: &mut R) -> String {
    let candidates: Vec<usize> = combined
        .iter()
        .enumerate()
        .filter(|(_, c)| edge_chars.contains(*c))
        .map(|(i, _)| i)
        .collect();

    let (first, last) = match candidates.as_slice() {
        [] => {
            #[cfg(feature = "tracing")]
            tracing::debug!("no edge candidate in shuffled password, drawing both edges");
            (edge_chars.choose(rng).copied(), edge_chars.choose(rng).copied())
        }
        [only] => {
            #[cfg(feature = "tracing")]
            tracing::debug!("single edge candidate in shuffled password, drawing last edge");
            let first = combined.remove(*only);
            (Some(first), edge_chars.choose(rng).copied())
        }
        [head, .., tail] => {
            // tail > head: remove it first so head stays valid
            let last = combined.remove(*tail);
            let first = combined.remove(*head);
            (Some(first), Some(last))
        }
    };

    first.into_iter().chain(combined).chain(last).collect()
}
