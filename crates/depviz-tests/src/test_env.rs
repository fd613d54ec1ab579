//! Isolated environments for end-to-end command tests
//!
//! Every environment owns a temporary directory that holds the offline
//! registry and receives generated diagrams. Commands run against an
//! explicit [`AppConfig`], never the process environment.

use anyhow::{Context, Result};
use depviz_lib::application::AppConfig;
use depviz_lib::graph::diagram_file_name;
use depviz_lib::testing::TempDirFixture;
use std::path::{Path, PathBuf};

pub struct TestEnvironment {
    fixture: TempDirFixture,
    registry: Option<PathBuf>,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fixture: TempDirFixture::new().context("Failed to create test directory")?,
            registry: None,
        })
    }

    /// Environment with `content` as its offline registry file
    pub fn with_registry(content: &str) -> Result<Self> {
        let mut env = Self::new()?;
        let path = env
            .fixture
            .write_file("registry.txt", content)
            .context("Failed to write registry")?;
        env.registry = Some(path);
        Ok(env)
    }

    pub fn path(&self) -> &Path {
        self.fixture.path()
    }

    /// Offline configuration for `package`, writing diagrams into this environment
    pub fn offline_config(&self, package: &str) -> Result<AppConfig> {
        let registry = self
            .registry
            .as_ref()
            .context("Environment has no registry; use TestEnvironment::with_registry")?;

        Ok(AppConfig {
            package: Some(package.to_string()),
            url: registry.to_string_lossy().to_string(),
            offline: true,
            output_dir: Some(self.path().to_path_buf()),
            ..AppConfig::default()
        })
    }

    /// Live configuration against a mock flat-container server
    pub fn live_config(&self, base_url: &str, package: &str, version: Option<&str>) -> AppConfig {
        AppConfig {
            package: Some(package.to_string()),
            pkg_version: version.map(str::to_string),
            url: base_url.to_string(),
            net_timeout: 5,
            output_dir: Some(self.path().to_path_buf()),
            ..AppConfig::default()
        }
    }

    /// Contents of the diagram written for `root`
    pub fn read_diagram(&self, root: &str) -> Result<String> {
        let name = diagram_file_name(root);
        self.fixture
            .read_file(&name)
            .with_context(|| format!("Diagram {} was not written", name))
    }

    pub fn diagram_exists(&self, root: &str) -> bool {
        self.fixture.file_exists(&diagram_file_name(root))
    }
}
