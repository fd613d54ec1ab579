//! NuGet v3 flat-container client
//!
//! Two endpoints are used:
//!
//! - `{base}/{id}/index.json` lists the published versions of a package
//! - `{base}/{id}/{version}/{id}.nuspec` holds the package metadata,
//!   including its `<dependencies>` section
//!
//! Ids and versions are lowercased in URLs as the flat container requires,
//! and versions are normalized to the form it serves (`1.0` -> `1.0.0`).
//! Requests are blocking; the graph walk is strictly sequential.

use super::{DependencyMap, DependencySource, SourceError};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, trace};

/// Public NuGet flat-container endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.nuget.org/v3-flatcontainer";

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// One `<dependency>` entry of a .nuspec, version constraint as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDependency {
    pub id: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
struct PackageIndex {
    versions: Vec<String>,
}

/// Live NuGet registry client
pub struct NugetRegistry {
    client: Client,
    base_url: String,
}

impl NugetRegistry {
    /// Create a client for the public NuGet endpoint
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Create a client for a custom flat-container endpoint (mirrors, tests)
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("depviz/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All published versions of `name`, oldest first
    pub fn versions(&self, name: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("{}/{}/index.json", self.base_url, segment(name));
        let body = self.fetch(&url)?;

        let index: PackageIndex =
            serde_json::from_slice(&body).map_err(|source| SourceError::InvalidIndex {
                package: name.to_string(),
                source,
            })?;

        if index.versions.is_empty() {
            return Err(SourceError::NoVersions {
                package: name.to_string(),
            });
        }

        Ok(index.versions)
    }

    /// Newest stable version, or the newest prerelease when nothing is stable
    pub fn latest_version(&self, name: &str) -> Result<String, SourceError> {
        let versions = self.versions(name)?;
        pick_latest(&versions).ok_or_else(|| SourceError::NoVersions {
            package: name.to_string(),
        })
    }

    /// Raw `<dependency>` entries of `name` at `version`
    pub fn package_dependencies(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Vec<PackageDependency>, SourceError> {
        let id = segment(name);
        let url = format!(
            "{}/{}/{}/{}.nuspec",
            self.base_url,
            id,
            segment(&flat_container_version(version)),
            id
        );
        let body = self.fetch(&url)?;
        let xml = String::from_utf8_lossy(&body);

        parse_nuspec(name, &xml)
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        trace!("Fetching {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl DependencySource for NugetRegistry {
    fn dependencies(&self, name: &str, version: &str) -> Result<DependencyMap, SourceError> {
        let version = if version.is_empty() {
            let latest = self.latest_version(name)?;
            info!("Version not specified for {}, using latest: {}", name, latest);
            latest
        } else {
            version.to_string()
        };

        let mut deps = DependencyMap::new();
        for dep in self.package_dependencies(name, &version)? {
            deps.entry(dep.id)
                .or_insert_with(|| normalize_version(&dep.version));
        }

        Ok(deps)
    }

    fn contains(&self, name: &str) -> Result<bool, SourceError> {
        match self.versions(name) {
            Ok(_) => Ok(true),
            Err(SourceError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(false)
            }
            Err(SourceError::NoVersions { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(&raw.to_lowercase(), PATH_SEGMENT).to_string()
}

fn pick_latest(versions: &[String]) -> Option<String> {
    versions
        .iter()
        .rev()
        .find(|v| !v.contains('-'))
        .or_else(|| versions.last())
        .cloned()
}

/// Reduce a NuGet version constraint to a concrete version to look up
///
/// A bare version is a minimum and is kept as is; an interval keeps its lower
/// bound; a constraint without a lower bound becomes empty (latest).
///
/// ```
/// use depviz_lib::registry::nuget::normalize_version;
///
/// assert_eq!(normalize_version("13.0.1"), "13.0.1");
/// assert_eq!(normalize_version("[4.3.0, )"), "4.3.0");
/// assert_eq!(normalize_version("[1.0,2.0)"), "1.0");
/// assert_eq!(normalize_version("(, 5.0]"), "");
/// ```
pub fn normalize_version(constraint: &str) -> String {
    let trimmed = constraint.trim();

    match trimmed.strip_prefix(['[', '(']) {
        Some(interval) => interval
            .trim_end_matches([']', ')'])
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        None => trimmed.to_string(),
    }
}

/// Version text as the flat container publishes it
///
/// Numeric release parts lose leading zeros and are padded to three; a zero
/// fourth part is dropped. Build metadata after `+` is removed and the
/// prerelease label is kept. Anything non-numeric is passed through.
///
/// ```
/// use depviz_lib::registry::nuget::flat_container_version;
///
/// assert_eq!(flat_container_version("1.0"), "1.0.0");
/// assert_eq!(flat_container_version("4.3.0.0"), "4.3.0");
/// assert_eq!(flat_container_version("2.1-beta+sha.1"), "2.1.0-beta");
/// ```
pub fn flat_container_version(version: &str) -> String {
    let version = version.trim();
    let version = version.split_once('+').map_or(version, |(release, _)| release);
    let (release, prerelease) = match version.split_once('-') {
        Some((release, label)) => (release, Some(label)),
        None => (version, None),
    };

    let Ok(mut parts) = release
        .split('.')
        .map(str::parse::<u64>)
        .collect::<Result<Vec<u64>, _>>()
    else {
        return version.to_string();
    };

    while parts.len() < 3 {
        parts.push(0);
    }
    if parts.len() == 4 && parts[3] == 0 {
        parts.truncate(3);
    }

    let release: Vec<String> = parts.iter().map(u64::to_string).collect();
    match prerelease {
        Some(label) => format!("{}-{}", release.join("."), label),
        None => release.join("."),
    }
}

/// Collect `<dependency>` entries inside `<dependencies>`, including
/// framework `<group>`s
pub(crate) fn parse_nuspec(package: &str, xml: &str) -> Result<Vec<PackageDependency>, SourceError> {
    let malformed = |reason: String| SourceError::MalformedMetadata {
        package: package.to_string(),
        reason,
    };

    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    reader.config_mut().trim_text(true);

    let mut in_dependencies = false;
    let mut dependencies = Vec::new();

    loop {
        match reader.read_event().map_err(|e| malformed(e.to_string()))? {
            Event::Start(e) => {
                let name = e.local_name();
                if name.as_ref().eq_ignore_ascii_case(b"dependencies") {
                    in_dependencies = true;
                } else if in_dependencies && name.as_ref().eq_ignore_ascii_case(b"dependency") {
                    push_dependency(&e, &mut dependencies).map_err(malformed)?;
                }
            }
            Event::Empty(e) => {
                if in_dependencies && e.local_name().as_ref().eq_ignore_ascii_case(b"dependency") {
                    push_dependency(&e, &mut dependencies).map_err(malformed)?;
                }
            }
            Event::End(e) => {
                if e.local_name().as_ref().eq_ignore_ascii_case(b"dependencies") {
                    in_dependencies = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if in_dependencies {
        return Err(malformed("unterminated <dependencies> section".to_string()));
    }

    Ok(dependencies)
}

fn push_dependency(element: &BytesStart<'_>, out: &mut Vec<PackageDependency>) -> Result<(), String> {
    let mut id = None;
    let mut version = String::new();

    for attr in element.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = std::str::from_utf8(&attr.value)
            .map_err(|e| e.to_string())?
            .trim()
            .to_string();

        match attr.key.local_name().as_ref() {
            key if key.eq_ignore_ascii_case(b"id") => id = Some(value),
            key if key.eq_ignore_ascii_case(b"version") => version = value,
            _ => {}
        }
    }

    // Entries without an id carry nothing to follow
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        out.push(PackageDependency { id, version });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("nuget.test.rs");
}
