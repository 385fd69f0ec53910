//! Password strength scoring and policy-driven password suggestions
//!
//! A [`PasswordToolkit`] holds one immutable password policy (minimum length,
//! required character classes, allowed special characters). It scores any
//! password on a scale capped at 100 and generates suggestions that satisfy
//! the policy.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based analysis and suggestions with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`PolicyOptions::from_env`] and [`PasswordToolkit::from_env`]:
//!
//! - `PWD_MIN_LENGTH`: minimum password length (default: 8)
//! - `PWD_REQUIRE_UPPERCASE`, `PWD_REQUIRE_LOWERCASE`, `PWD_REQUIRE_DIGITS`,
//!   `PWD_REQUIRE_SPECIAL`: character class requirements (default: true)
//! - `PWD_SPECIAL_CHARACTERS`: allowed special characters
//!   (default: [`DEFAULT_SPECIAL_CHARACTERS`])
//!
//! # Example
//!
//! ```rust
//! use pwd_toolkit::{PasswordToolkit, PolicyOptions};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let toolkit = PasswordToolkit::new(PolicyOptions::new().minimum_length(10))
//!     .expect("valid policy");
//!
//! let password = SecretString::new("Passw0rd!".to_string().into());
//! println!("Score: {}", toolkit.analyse(&password).score);
//!
//! for suggestion in toolkit.suggest(3) {
//!     println!("{} ({})", suggestion.password.expose_secret(), suggestion.score);
//! }
//! ```

// Internal modules
mod classifier;
mod config;
mod error;
mod evaluator;
mod generator;
mod sections;
mod toolkit;

// Public API
pub use classifier::{classify, count_interior_digits_and_symbols, CharClass, CharCounts};
pub use config::{
    PolicyConfig, PolicyOptions, DEFAULT_MINIMUM_LENGTH, DEFAULT_SPECIAL_CHARACTERS,
};
pub use error::{Result, ToolkitError};
pub use evaluator::{analyse_password, score_password, PasswordAnalysis, MAX_SCORE};
pub use generator::generate_password;
pub use sections::requirement_match_count;
pub use toolkit::{PasswordToolkit, Suggestion};

#[cfg(feature = "async")]
pub use evaluator::analyse_tx;
