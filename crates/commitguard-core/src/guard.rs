// Rust guideline compliant 2026-10-18

//! The commit guard: sequences manifest and settings rules into one decision.

use crate::manifest::PackageManifest;
use crate::source::StagedContentSource;
use crate::{settings, Config, Error, Result};
use std::fmt;

/// Prefix of every rejection line.
pub const REJECTION_PREFIX: &str = "Oh no! Bad commit!";

/// Which kind of rule produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// A forbidden package is a dependency.
    ForbiddenPackage,
    /// A package references a forbidden source.
    ForbiddenSource,
    /// A settings key carries a value.
    LeakedSetting,
}

/// A recognised policy violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Rule kind that fired.
    pub rule: RuleKind,
    /// Fixed human-readable reason from the rule.
    pub reason: String,
}

impl Violation {
    /// Renders the single line printed on rejection.
    pub fn message(&self) -> String {
        format!("{} {}", REJECTION_PREFIX, self.reason)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of evaluating the staged content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The commit may proceed.
    Allow,
    /// The commit must be rejected.
    Reject(Violation),
}

impl Decision {
    /// Returns whether the commit may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Returns the violation, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Decision::Allow => None,
            Decision::Reject(violation) => Some(violation),
        }
    }
}

/// Evaluates staged content against the configured rules.
///
/// Manifest rules run before settings rules and the first violation ends the
/// evaluation, so at most one violation is ever reported.
pub struct CommitGuard<'a, S: StagedContentSource + ?Sized> {
    source: &'a S,
    config: &'a Config,
}

impl<'a, S: StagedContentSource + ?Sized> CommitGuard<'a, S> {
    /// Creates a guard reading from `source` with the rules in `config`.
    pub fn new(source: &'a S, config: &'a Config) -> Self {
        Self { source, config }
    }

    /// Runs every check in order.
    ///
    /// # Returns
    ///
    /// [`Decision::Allow`] when no rule fires, otherwise the first violation.
    ///
    /// # Errors
    ///
    /// Returns an error if a document cannot be retrieved, decoded, or parsed,
    /// or a strict source rule finds its package missing.
    pub fn evaluate(&self) -> Result<Decision> {
        if let Some(violation) = self.check_manifest()? {
            return Ok(Decision::Reject(violation));
        }
        if let Some(violation) = self.check_settings()? {
            return Ok(Decision::Reject(violation));
        }
        tracing::debug!("all commit checks passed");
        Ok(Decision::Allow)
    }

    /// Runs the package manifest rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    pub fn check_manifest(&self) -> Result<Option<Violation>> {
        let config = self.config;
        if config.forbidden_packages.is_empty() && config.source_rules.is_empty() {
            return Ok(None);
        }

        let bytes = self.source.read(&config.manifest_path)?;
        let manifest = PackageManifest::parse(&bytes)?;
        tracing::debug!(
            path = %config.manifest_path,
            dependencies = manifest.dependencies.len(),
            "checking package manifest"
        );

        if let Some(rule) = manifest.find_forbidden(&config.forbidden_packages) {
            tracing::info!(package = %rule.id, "forbidden package staged");
            return Ok(Some(Violation {
                rule: RuleKind::ForbiddenPackage,
                reason: rule.reason.clone(),
            }));
        }

        for rule in &config.source_rules {
            if manifest.violates_source(rule, config.strict_sources)? {
                tracing::info!(package = %rule.package, marker = %rule.marker, "forbidden source staged");
                return Ok(Some(Violation {
                    rule: RuleKind::ForbiddenSource,
                    reason: rule.reason.clone(),
                }));
            }
        }

        Ok(None)
    }

    /// Runs the project settings rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings document cannot be read, decoded, or is
    /// not UTF-8.
    pub fn check_settings(&self) -> Result<Option<Violation>> {
        let config = self.config;
        if config.settings_rules.is_empty() {
            return Ok(None);
        }

        let bytes = self.source.read_through_filter(&config.settings_path)?;
        let text = String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            path: config.settings_path.clone(),
        })?;
        tracing::debug!(path = %config.settings_path, "checking project settings");

        Ok(settings::find_leaked(&text, &config.settings_rules).map(|rule| {
            tracing::info!(key = %rule.key, "settings key has a value");
            Violation {
                rule: RuleKind::LeakedSetting,
                reason: rule.reason.clone(),
            }
        }))
    }
}
