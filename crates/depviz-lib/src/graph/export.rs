//! Diagram file output

use super::plantuml::diagram_file_name;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Output directory does not exist: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("Failed to write diagram to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write `diagram` as `<root>_diagram.puml` inside `dir`, returning the path
pub fn write_diagram(dir: &Path, root_name: &str, diagram: &str) -> Result<PathBuf, ExportError> {
    if !dir.is_dir() {
        return Err(ExportError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let path = dir.join(diagram_file_name(root_name));
    std::fs::write(&path, diagram).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), bytes = diagram.len(), "Diagram written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TempDirFixture;

    #[test]
    fn test_write_diagram() {
        let fixture = TempDirFixture::new().unwrap();

        let path = write_diagram(fixture.path(), "App", "@startuml\n@enduml").unwrap();

        assert_eq!(path, fixture.path().join("App_diagram.puml"));
        assert_eq!(
            fixture.read_file("App_diagram.puml").unwrap(),
            "@startuml\n@enduml"
        );
    }

    #[test]
    fn test_write_diagram_overwrites() {
        let fixture = TempDirFixture::new().unwrap();
        fixture.write_file("App_diagram.puml", "stale").unwrap();

        write_diagram(fixture.path(), "App", "fresh").unwrap();
        assert_eq!(fixture.read_file("App_diagram.puml").unwrap(), "fresh");
    }

    #[test]
    fn test_missing_directory() {
        let fixture = TempDirFixture::new().unwrap();
        let err = write_diagram(&fixture.path().join("nope"), "App", "x").unwrap_err();

        assert!(matches!(err, ExportError::MissingDirectory { .. }));
    }
}
