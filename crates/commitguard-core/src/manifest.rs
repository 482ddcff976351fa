// Rust guideline compliant 2026-10-18

//! Package manifest parsing and dependency rules.

use crate::{Error, ForbiddenPackage, Result, SourceRule};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The dependency section of a package manifest.
///
/// Only `dependencies` is read; every other top-level field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    /// Package identifier to version or source reference.
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parses a manifest from staged JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not JSON or `dependencies` is missing
    /// or not a map of strings.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Returns the first rule whose package id is a dependency key.
    ///
    /// Keys are compared exactly, so case differences never match.
    pub fn find_forbidden<'a>(&self, rules: &'a [ForbiddenPackage]) -> Option<&'a ForbiddenPackage> {
        rules
            .iter()
            .find(|rule| self.dependencies.contains_key(&rule.id))
    }

    /// Checks whether a source rule's package references its marker.
    ///
    /// The reference and marker are compared case-insensitively. A package that
    /// is absent is not a violation unless `strict` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDependency`] when `strict` is set and the package
    /// is absent.
    pub fn violates_source(&self, rule: &SourceRule, strict: bool) -> Result<bool> {
        match self.dependencies.get(&rule.package) {
            Some(reference) => Ok(reference
                .to_lowercase()
                .contains(&rule.marker.to_lowercase())),
            None if strict => Err(Error::MissingDependency(rule.package.clone())),
            None => Ok(false),
        }
    }
}
