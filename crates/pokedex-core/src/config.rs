//! Lookup configuration structures and loaders.
//!
//! Contains the settings that are shared across frontends: which language
//! the description is taken from and how overlapping lookups commit.

use std::{env, fmt, str::FromStr};

/// Default flavor-text language tag.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Lookup-specific configuration.
#[derive(Clone, Debug)]
pub struct LookupConfig {
    /// Language tag matched against `flavor_text_entries[].language.name`.
    pub language: String,
    pub commit_policy: CommitPolicy,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            commit_policy: CommitPolicy::default(),
        }
    }
}

impl LookupConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKEDEX_LANGUAGE` - Flavor-text language tag (default: en)
    /// - `POKEDEX_COMMIT_POLICY` - `last-completed` or `latest-issued`
    ///   (default: last-completed)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(language) = read_env::<String>("POKEDEX_LANGUAGE") {
            let language = language.trim().to_lowercase();
            if !language.is_empty() {
                config.language = language;
            }
        }

        if let Ok(raw) = env::var("POKEDEX_COMMIT_POLICY") {
            if let Err(e) = config.set_commit_policy(&raw) {
                tracing::warn!("Ignoring POKEDEX_COMMIT_POLICY: {}", e);
            }
        }

        config
    }

    /// Parses and applies a commit policy name.
    ///
    /// On error the current policy is kept and the error is returned for the
    /// caller to report. Call [`LookupConfig::from_env`] only after the
    /// tracing subscriber is installed, or the warning it logs is lost.
    pub fn set_commit_policy(&mut self, raw: &str) -> Result<(), UnknownCommitPolicy> {
        self.commit_policy = raw.parse()?;
        Ok(())
    }
}

/// Decides which completed lookup ends up in the view state when several
/// are in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Every completion is committed; the last one to finish wins.
    #[default]
    LastCompleted,
    /// Only the most recently issued lookup may commit.
    LatestIssued,
}

impl fmt::Display for CommitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommitPolicy::LastCompleted => "last-completed",
            CommitPolicy::LatestIssued => "latest-issued",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown commit policy `{0}` (expected last-completed or latest-issued)")]
pub struct UnknownCommitPolicy(String);

impl FromStr for CommitPolicy {
    type Err = UnknownCommitPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "last-completed" | "completed" => Ok(CommitPolicy::LastCompleted),
            "latest-issued" | "issued" => Ok(CommitPolicy::LatestIssued),
            _ => Err(UnknownCommitPolicy(s.to_string())),
        }
    }
}

pub fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commit_policies() {
        assert_eq!(
            "last-completed".parse::<CommitPolicy>().unwrap(),
            CommitPolicy::LastCompleted
        );
        assert_eq!(
            "LATEST_ISSUED".parse::<CommitPolicy>().unwrap(),
            CommitPolicy::LatestIssued
        );
        assert!("newest".parse::<CommitPolicy>().is_err());
    }

    #[test]
    fn invalid_policy_is_reported_and_keeps_default() {
        let mut config = LookupConfig::default();

        let err = config.set_commit_policy("newest").unwrap_err();
        assert!(err.to_string().contains("newest"));
        assert_eq!(config.commit_policy, CommitPolicy::LastCompleted);

        config.set_commit_policy("latest-issued").unwrap();
        assert_eq!(config.commit_policy, CommitPolicy::LatestIssued);
    }

    #[test]
    fn policy_display_round_trips_through_parse() {
        for policy in [CommitPolicy::LastCompleted, CommitPolicy::LatestIssued] {
            assert_eq!(policy.to_string().parse::<CommitPolicy>().unwrap(), policy);
        }
    }
}
