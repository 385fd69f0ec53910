//! Password toolkit - one policy shared by analysis and suggestions.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{PolicyConfig, PolicyOptions};
use crate::error::Result;
use crate::evaluator::{analyse_password, score_password, PasswordAnalysis};
use crate::generator::generate_password;

/// A generated password together with its score.
#[derive(Debug)]
pub struct Suggestion {
    pub password: SecretString,
    pub score: i64,
}

/// Scores passwords and suggests new ones under a fixed policy.
#[derive(Debug, Clone, Default)]
pub struct PasswordToolkit {
    config: PolicyConfig,
}

impl PasswordToolkit {
    /// Creates a toolkit, applying defaults to unset options.
    ///
    /// # Errors
    ///
    /// See [`PolicyConfig::resolve`].
    pub fn new(options: PolicyOptions) -> Result<Self> {
        let config = PolicyConfig::resolve(options)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            minimum_length = config.minimum_length(),
            require_uppercase = config.require_uppercase(),
            require_lowercase = config.require_lowercase(),
            require_digits = config.require_digits(),
            require_special = config.require_special(),
            custom_special_characters = config.has_custom_special_characters(),
            "password toolkit created"
        );

        Ok(Self { config })
    }

    /// Creates a toolkit from the `PWD_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(PolicyOptions::from_env()?)
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Scores a password under this toolkit's policy.
    pub fn analyse(&self, password: &SecretString) -> PasswordAnalysis {
        analyse_password(password, &self.config)
    }

    /// Generates one password using `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretString {
        generate_password(&self.config, rng)
    }

    /// Generates and scores `n` passwords using the thread-local RNG.
    pub fn suggest(&self, n: usize) -> Vec<Suggestion> {
        self.suggest_with_rng(n, &mut rand::thread_rng())
    }

    /// Generates and scores `n` passwords using `rng`, in generation order.
    pub fn suggest_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Suggestion> {
        (0..n).map(|_| self.suggestion(rng)).collect()
    }

    fn suggestion<R: Rng + ?Sized>(&self, rng: &mut R) -> Suggestion {
        let password = generate_password(&self.config, rng);
        let score = score_password(password.expose_secret(), &self.config);
        Suggestion { password, score }
    }

    /// Async version of [`Self::analyse`] that sends the result via channel.
    #[cfg(feature = "async")]
    pub async fn analyse_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<PasswordAnalysis>,
    ) {
        crate::evaluator::analyse_tx(password, &self.config, token, tx).await
    }

    /// Sends up to `n` suggestions via channel, stopping early on cancellation.
    #[cfg(feature = "async")]
    pub async fn suggest_tx(&self, n: usize, token: CancellationToken, tx: mpsc::Sender<Suggestion>) {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::from_entropy();
        for _i in 0..n {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("suggestions cancelled after {} of {}", _i, n);
                return;
            }

            if let Err(_e) = tx.send(self.suggestion(&mut rng)).await {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password suggestion: {}", _e);
                return;
            }
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_suggest_tx_sends_all() {
        let toolkit = PasswordToolkit::default();
        let (tx, mut rx) = mpsc::channel(8);

        toolkit.suggest_tx(4, CancellationToken::new(), tx).await;

        let mut received = 0;
        while let Some(suggestion) = rx.recv().await {
            assert!(suggestion.score <= 100);
            received += 1;
        }
        assert_eq!(received, 4);
    }

    #[tokio::test]
    async fn test_suggest_tx_cancelled() {
        let toolkit = PasswordToolkit::default();
        let (tx, mut rx) = mpsc::channel(8);
        let token = CancellationToken::new();
        token.cancel();

        toolkit.suggest_tx(4, token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyse_tx_through_toolkit() {
        let toolkit = PasswordToolkit::default();
        let (tx, mut rx) = mpsc::channel(1);
        let pwd = SecretString::new("Passw0rd!".to_string().into());

        toolkit.analyse_tx(&pwd, CancellationToken::new(), tx).await;

        assert_eq!(rx.recv().await.map(|a| a.score), Some(72));
    }
}
