//! Fixture infrastructure for E2E tests
//!
//! Canned offline registries and NuGet flat-container response bodies for
//! mockito servers.

/// Three packages, one shared dependency
pub const DIAMOND_REGISTRY: &str = "\
# diamond: App depends on Core twice over
App: Http Json
Http: Core
Json: Core
Core:
";

/// Two packages depending on each other, plus a bystander
pub const CYCLE_REGISTRY: &str = "\
A: B
B: A C
C:
";

/// Realistic registry with test helpers to filter out
pub const SERVICE_REGISTRY: &str = "\
Service: Service.Core Service.Testing Logging
Service.Core: Logging
Service.Testing: xunit Service.Core
Logging:
xunit:
";

/// `index.json` body listing `versions` oldest first
pub fn index_json(versions: &[&str]) -> String {
    let quoted: Vec<String> = versions.iter().map(|v| format!("\"{v}\"")).collect();
    format!("{{\"versions\":[{}]}}", quoted.join(","))
}

/// Builder for `.nuspec` documents
#[derive(Debug, Default)]
pub struct NuspecBuilder {
    id: String,
    version: String,
    groups: Vec<(Option<String>, Vec<(String, Option<String>)>)>,
}

impl NuspecBuilder {
    pub fn new(id: &str, version: &str) -> Self {
        Self {
            id: id.to_string(),
            version: version.to_string(),
            groups: Vec::new(),
        }
    }

    /// Add a `<group>` for `framework`, or ungrouped dependencies when `None`
    pub fn group(mut self, framework: Option<&str>, deps: &[(&str, Option<&str>)]) -> Self {
        let deps = deps
            .iter()
            .map(|(id, version)| (id.to_string(), version.map(str::to_string)))
            .collect();
        self.groups.push((framework.map(str::to_string), deps));
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        out.push_str(
            "<package xmlns=\"http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd\">\n",
        );
        out.push_str("  <metadata>\n");
        out.push_str(&format!("    <id>{}</id>\n", self.id));
        out.push_str(&format!("    <version>{}</version>\n", self.version));

        if !self.groups.is_empty() {
            out.push_str("    <dependencies>\n");
            for (framework, deps) in &self.groups {
                let indent = if framework.is_some() { "        " } else { "      " };
                if let Some(framework) = framework {
                    out.push_str(&format!("      <group targetFramework=\"{framework}\">\n"));
                }
                for (id, version) in deps {
                    match version {
                        Some(version) => out.push_str(&format!(
                            "{indent}<dependency id=\"{id}\" version=\"{version}\" />\n"
                        )),
                        None => out.push_str(&format!("{indent}<dependency id=\"{id}\" />\n")),
                    }
                }
                if framework.is_some() {
                    out.push_str("      </group>\n");
                }
            }
            out.push_str("    </dependencies>\n");
        }

        out.push_str("  </metadata>\n</package>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_json() {
        assert_eq!(index_json(&["1.0.0", "2.0.0"]), r#"{"versions":["1.0.0","2.0.0"]}"#);
        assert_eq!(index_json(&[]), r#"{"versions":[]}"#);
    }

    #[test]
    fn test_nuspec_builder_groups() {
        let xml = NuspecBuilder::new("Lib", "1.0.0")
            .group(Some("net8.0"), &[("Dep", Some("[1.0.0, )"))])
            .group(None, &[("Loose", None)])
            .build();

        assert!(xml.contains("<group targetFramework=\"net8.0\">"));
        assert!(xml.contains("<dependency id=\"Dep\" version=\"[1.0.0, )\" />"));
        assert!(xml.contains("<dependency id=\"Loose\" />"));
    }

    #[test]
    fn test_nuspec_without_dependencies() {
        let xml = NuspecBuilder::new("Leaf", "2.0.0").build();
        assert!(!xml.contains("<dependencies>"));
    }
}
