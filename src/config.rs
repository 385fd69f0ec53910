//! Policy configuration
//!
//! `PolicyOptions` is what callers hand in; every field is optional.
//! `PolicyConfig` is the resolved, immutable policy shared by scoring and
//! generation.

use crate::error::{Result, ToolkitError};

/// Minimum length used when none is supplied.
pub const DEFAULT_MINIMUM_LENGTH: usize = 8;

/// Built-in special characters, used unless a non-empty custom set is given.
pub const DEFAULT_SPECIAL_CHARACTERS: [char; 21] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '[', ']', '{', '}', '<', '>', '?',
    ',', '.',
];

pub(crate) const ENV_MIN_LENGTH: &str = "PWD_MIN_LENGTH";
pub(crate) const ENV_REQUIRE_UPPERCASE: &str = "PWD_REQUIRE_UPPERCASE";
pub(crate) const ENV_REQUIRE_LOWERCASE: &str = "PWD_REQUIRE_LOWERCASE";
pub(crate) const ENV_REQUIRE_DIGITS: &str = "PWD_REQUIRE_DIGITS";
pub(crate) const ENV_REQUIRE_SPECIAL: &str = "PWD_REQUIRE_SPECIAL";
pub(crate) const ENV_SPECIAL_CHARACTERS: &str = "PWD_SPECIAL_CHARACTERS";

/// Caller-facing policy options. Unset fields take their defaults on resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyOptions {
    pub minimum_length: Option<usize>,
    pub require_uppercase: Option<bool>,
    pub require_lowercase: Option<bool>,
    pub require_digits: Option<bool>,
    pub require_special: Option<bool>,
    pub allowed_special_characters: Option<Vec<char>>,
}

impl PolicyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum_length(mut self, length: usize) -> Self {
        self.minimum_length = Some(length);
        self
    }

    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = Some(required);
        self
    }

    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = Some(required);
        self
    }

    pub fn require_digits(mut self, required: bool) -> Self {
        self.require_digits = Some(required);
        self
    }

    pub fn require_special(mut self, required: bool) -> Self {
        self.require_special = Some(required);
        self
    }

    /// Replaces the built-in special characters. An empty list keeps the defaults.
    pub fn allowed_special_characters<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.allowed_special_characters = Some(chars.into_iter().collect());
        self
    }

    /// Reads options from the `PWD_*` environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`: positive integer
    /// - `PWD_REQUIRE_UPPERCASE`, `PWD_REQUIRE_LOWERCASE`, `PWD_REQUIRE_DIGITS`,
    ///   `PWD_REQUIRE_SPECIAL`: `true`/`false`, `1`/`0` or `yes`/`no`
    /// - `PWD_SPECIAL_CHARACTERS`: each character of the value is allowed
    ///
    /// Unset variables leave the field empty.
    ///
    /// # Errors
    ///
    /// Returns `ToolkitError::InvalidEnvVar` if a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let minimum_length = match env_var(ENV_MIN_LENGTH) {
            Some(value) => Some(value.trim().parse::<usize>().map_err(|_| {
                ToolkitError::InvalidEnvVar {
                    name: ENV_MIN_LENGTH,
                    value: value.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            minimum_length,
            require_uppercase: env_flag(ENV_REQUIRE_UPPERCASE)?,
            require_lowercase: env_flag(ENV_REQUIRE_LOWERCASE)?,
            require_digits: env_flag(ENV_REQUIRE_DIGITS)?,
            require_special: env_flag(ENV_REQUIRE_SPECIAL)?,
            allowed_special_characters: env_var(ENV_SPECIAL_CHARACTERS)
                .map(|value| value.chars().collect()),
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn env_flag(name: &'static str) -> Result<Option<bool>> {
    let Some(value) = env_var(name) else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(ToolkitError::InvalidEnvVar { name, value }),
    }
}

/// Resolved password policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    minimum_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_digits: bool,
    require_special: bool,
    special_characters: Vec<char>,
    custom_special_characters: bool,
}

impl PolicyConfig {
    /// Applies defaults to `options` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMinimumLength` if the minimum length is 0.
    pub fn resolve(options: PolicyOptions) -> Result<Self> {
        let minimum_length = options.minimum_length.unwrap_or(DEFAULT_MINIMUM_LENGTH);
        if minimum_length == 0 {
            return Err(ToolkitError::InvalidMinimumLength(minimum_length));
        }

        let require_uppercase = options.require_uppercase.unwrap_or(true);
        let require_lowercase = options.require_lowercase.unwrap_or(true);
        let require_digits = options.require_digits.unwrap_or(true);
        let require_special = options.require_special.unwrap_or(true);

        let special_characters = match options.allowed_special_characters {
            Some(chars) if !chars.is_empty() => chars,
            _ => DEFAULT_SPECIAL_CHARACTERS.to_vec(),
        };
        let custom_special_characters = !same_characters(&special_characters, &DEFAULT_SPECIAL_CHARACTERS);

        Ok(Self {
            minimum_length,
            require_uppercase,
            require_lowercase,
            require_digits,
            require_special,
            special_characters,
            custom_special_characters,
        })
    }

    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    pub fn require_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn require_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn require_digits(&self) -> bool {
        self.require_digits
    }

    pub fn require_special(&self) -> bool {
        self.require_special
    }

    /// The resolved special characters; never empty.
    pub fn special_characters(&self) -> &[char] {
        &self.special_characters
    }

    /// True when the special characters differ from the built-in set,
    /// compared as unordered multisets.
    pub fn has_custom_special_characters(&self) -> bool {
        self.custom_special_characters
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digits: true,
            require_special: true,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_vec(),
            custom_special_characters: false,
        }
    }
}

fn same_characters(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
