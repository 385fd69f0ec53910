//! Character classification - one pass over the input producing per-class counts.

/// ASCII character classes. Anything that is not an ASCII letter or digit is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            CharClass::Lowercase
        } else if c.is_ascii_uppercase() {
            CharClass::Uppercase
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Per-class character counts and adjacent same-class repeats.
///
/// A run of `k` characters of one class contributes `k - 1` repeats.
/// `Other` characters never count as repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCounts {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digits: usize,
    pub other: usize,
    pub consecutive_uppercase: usize,
    pub consecutive_lowercase: usize,
    pub consecutive_digits: usize,
}

impl CharCounts {
    /// Total number of classified characters.
    pub fn total(&self) -> usize {
        self.lowercase + self.uppercase + self.digits + self.other
    }

    pub fn letters(&self) -> usize {
        self.lowercase + self.uppercase
    }
}

/// Classifies every character of `input`.
pub fn classify(input: &str) -> CharCounts {
    let mut counts = CharCounts::default();
    let mut previous: Option<CharClass> = None;

    for c in input.chars() {
        let class = CharClass::of(c);
        let repeated = previous == Some(class);

        match class {
            CharClass::Lowercase => {
                counts.lowercase += 1;
                if repeated {
                    counts.consecutive_lowercase += 1;
                }
            }
            CharClass::Uppercase => {
                counts.uppercase += 1;
                if repeated {
                    counts.consecutive_uppercase += 1;
                }
            }
            CharClass::Digit => {
                counts.digits += 1;
                if repeated {
                    counts.consecutive_digits += 1;
                }
            }
            CharClass::Other => counts.other += 1,
        }

        previous = Some(class);
    }

    counts
}

/// Counts digits and non-alphanumeric characters, ignoring the first and last character.
pub fn count_interior_digits_and_symbols(input: &str) -> usize {
    let len = input.chars().count();
    if len <= 2 {
        return 0;
    }

    input
        .chars()
        .skip(1)
        .take(len - 2)
        .filter(|&c| matches!(CharClass::of(c), CharClass::Digit | CharClass::Other))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(""), CharCounts::default());
    }

    #[test]
    fn test_classify_lowercase_run() {
        let counts = classify("aaaaa");
        assert_eq!(counts.lowercase, 5);
        assert_eq!(counts.consecutive_lowercase, 4);
        assert_eq!(counts.uppercase, 0);
        assert_eq!(counts.digits, 0);
        assert_eq!(counts.other, 0);
        assert_eq!(counts.consecutive_uppercase, 0);
        assert_eq!(counts.consecutive_digits, 0);
    }

    #[test]
    fn test_classify_mixed() {
        let counts = classify("Passw0rd!");
        assert_eq!(
            counts,
            CharCounts {
                lowercase: 6,
                uppercase: 1,
                digits: 1,
                other: 1,
                consecutive_uppercase: 0,
                consecutive_lowercase: 4,
                consecutive_digits: 0,
            }
        );
        assert_eq!(counts.total(), 9);
    }

    #[test]
    fn test_classify_runs_per_class() {
        let counts = classify("AB12cd!!");
        assert_eq!(counts.consecutive_uppercase, 1);
        assert_eq!(counts.consecutive_digits, 1);
        assert_eq!(counts.consecutive_lowercase, 1);
        assert_eq!(counts.other, 2);
    }

    #[test]
    fn test_classify_class_change_breaks_run() {
        let counts = classify("aAaA");
        assert_eq!(counts.consecutive_lowercase, 0);
        assert_eq!(counts.consecutive_uppercase, 0);
    }

    #[test]
    fn test_classify_non_ascii_is_other() {
        let counts = classify("é ß");
        assert_eq!(counts.other, 3);
        assert_eq!(counts.letters(), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_interior_short_inputs() {
        assert_eq!(count_interior_digits_and_symbols(""), 0);
        assert_eq!(count_interior_digits_and_symbols("1"), 0);
        assert_eq!(count_interior_digits_and_symbols("1!"), 0);
    }

    #[test]
    fn test_interior_excludes_edges() {
        assert_eq!(count_interior_digits_and_symbols("1ab1"), 0);
        assert_eq!(count_interior_digits_and_symbols("a1!b"), 2);
        assert_eq!(count_interior_digits_and_symbols("!1!"), 1);
        assert_eq!(count_interior_digits_and_symbols("Passw0rd!"), 1);
    }
}
