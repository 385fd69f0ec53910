//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classifier::classify;
use crate::config::PolicyConfig;
use crate::sections::{
    character_variety_section, interior_section, length_section, pattern_deduction_section,
    requirements_section, Section,
};

/// Upper bound of the score. There is no lower clamp.
pub const MAX_SCORE: i64 = 100;

/// Result of analysing a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordAnalysis {
    pub score: i64,
}

/// Scores `password` against `config`.
///
/// The score is the sum of every section's contribution, capped at
/// [`MAX_SCORE`]. The same input and policy always produce the same score.
pub fn score_password(password: &str, config: &PolicyConfig) -> i64 {
    let counts = classify(password);

    // Orchestrator: execute sections in sequence
    let sections: [(&str, Section); 5] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("requirements", requirements_section),
        ("interior", interior_section),
        ("pattern", pattern_deduction_section),
    ];

    let mut score: i64 = 0;
    for (_section_name, section_fn) in sections {
        let value = section_fn(password, &counts, config);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, value, "section scored");

        score += value;
    }

    score.min(MAX_SCORE)
}

/// Analyses a secret password.
pub fn analyse_password(password: &SecretString, config: &PolicyConfig) -> PasswordAnalysis {
    PasswordAnalysis {
        score: score_password(password.expose_secret(), config),
    }
}

/// Async version that sends the analysis via channel.
///
/// Waits a short debounce interval first; if `token` is cancelled by then,
/// nothing is sent.
#[cfg(feature = "async")]
pub async fn analyse_tx(
    password: &SecretString,
    config: &PolicyConfig,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAnalysis>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled");
        return;
    }

    let analysis = analyse_password(password, config);

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_analyse_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("Passw0rd!".to_string().into());

        analyse_tx(&pwd, &PolicyConfig::default(), token, tx).await;

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert_eq!(analysis.score, 72);
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyse_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("Passw0rd!".to_string().into());

        analyse_tx(&pwd, &PolicyConfig::default(), token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
