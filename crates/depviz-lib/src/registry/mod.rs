//! # Registry Module
//!
//! Dependency lookup capability consumed by the graph builder.
//!
//! ## Modules
//!
//! - [`nuget`] - Live NuGet v3 flat-container client
//! - [`offline`] - Offline mock registry loaded from a text file

pub mod nuget;
pub mod offline;

pub use nuget::NugetRegistry;
pub use offline::OfflineRegistry;

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Direct dependencies of one package: dependency name -> version string
///
/// An empty version string means "unversioned / latest".
pub type DependencyMap = BTreeMap<String, String>;

/// Errors raised by dependency sources
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for URL: {url}")]
    Http { status: u16, url: String },

    #[error("Failed to parse package index for {package}: {source}")]
    InvalidIndex {
        package: String,
        source: serde_json::Error,
    },

    #[error("No versions published for package {package}")]
    NoVersions { package: String },

    #[error("Malformed package metadata for {package}: {reason}")]
    MalformedMetadata { package: String, reason: String },

    #[error("Failed to read registry file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{message}")]
    Other { message: String },
}

/// Capability returning the direct dependencies of a package
///
/// Implemented by the live registry client, the offline mock registry and
/// test doubles. Lookups are synchronous.
pub trait DependencySource {
    /// Direct dependencies of `name` at `version` (empty = latest)
    fn dependencies(&self, name: &str, version: &str) -> Result<DependencyMap, SourceError>;

    /// Whether the source knows the package at all
    fn contains(&self, _name: &str) -> Result<bool, SourceError> {
        Ok(true)
    }
}

impl<S: DependencySource + ?Sized> DependencySource for &S {
    fn dependencies(&self, name: &str, version: &str) -> Result<DependencyMap, SourceError> {
        (**self).dependencies(name, version)
    }

    fn contains(&self, name: &str) -> Result<bool, SourceError> {
        (**self).contains(name)
    }
}

impl<S: DependencySource + ?Sized> DependencySource for Box<S> {
    fn dependencies(&self, name: &str, version: &str) -> Result<DependencyMap, SourceError> {
        (**self).dependencies(name, version)
    }

    fn contains(&self, name: &str) -> Result<bool, SourceError> {
        (**self).contains(name)
    }
}
