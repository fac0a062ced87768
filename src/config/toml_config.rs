use crate::core::{IconConfig, PackageConfig};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_sizes, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declarative build file driving both jobs. The `[icons]` and `[package]`
/// sections are each optional; a missing section skips that job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectSection,
    pub icons: Option<IconsSection>,
    pub package: Option<PackageSection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconsSection {
    pub output_path: String,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    pub source_dir: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

fn default_sizes() -> Vec<u32> {
    vec![16, 48, 128]
}

fn default_name_prefix() -> String {
    "icon".to_string()
}

fn default_output_path() -> String {
    ".".to_string()
}

fn default_archive_name() -> String {
    "extension.zip".to_string()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KitError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    /// Unset variables are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("project.name", &self.project.name)?;

        if self.icons.is_none() && self.package.is_none() {
            return Err(KitError::ConfigError {
                message: "Nothing to do: neither [icons] nor [package] is present".to_string(),
            });
        }

        if let Some(icons) = &self.icons {
            validate_path("icons.output_path", &icons.output_path)?;
            validate_non_empty_string("icons.name_prefix", &icons.name_prefix)?;
            validate_sizes("icons.sizes", &icons.sizes)?;
        }

        if let Some(package) = &self.package {
            validate_path("package.source_dir", &package.source_dir)?;
            validate_path("package.output_path", &package.output_path)?;
            validate_file_extension("package.archive_name", &package.archive_name, &["zip"])?;
        }

        Ok(())
    }
}

impl IconConfig for IconsSection {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    fn name_prefix(&self) -> &str {
        &self.name_prefix
    }
}

impl PackageSection {
    /// Expands the `{timestamp}` placeholder in the archive name so repeated
    /// builds can keep dated artifacts side by side.
    pub fn resolved(&self) -> PackageSection {
        let mut resolved = self.clone();
        if resolved.archive_name.contains("{timestamp}") {
            let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
            resolved.archive_name = resolved.archive_name.replace("{timestamp}", &stamp);
        }
        resolved
    }
}

impl PackageConfig for PackageSection {
    fn source_dir(&self) -> &str {
        &self.source_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
[project]
name = "demo-extension"
version = "1.2.0"

[icons]
output_path = "public/icons"
sizes = [16, 48, 128]
name_prefix = "icon"

[package]
source_dir = "dist"
output_path = "release"
archive_name = "demo.zip"

[monitoring]
enabled = true
"#;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(FULL_CONFIG).unwrap();
        assert_eq!(config.project.name, "demo-extension");

        let icons = config.icons.as_ref().unwrap();
        assert_eq!(icons.sizes, vec![16, 48, 128]);
        assert_eq!(icons.name_prefix, "icon");

        let package = config.package.as_ref().unwrap();
        assert_eq!(package.source_dir, "dist");
        assert_eq!(package.archive_name, "demo.zip");

        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_section_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[project]
name = "demo"

[icons]
output_path = "icons"

[package]
source_dir = "dist"
"#,
        )
        .unwrap();

        let icons = config.icons.as_ref().unwrap();
        assert_eq!(icons.sizes, vec![16, 48, 128]);
        assert_eq!(icons.name_prefix, "icon");

        let package = config.package.as_ref().unwrap();
        assert_eq!(package.output_path, ".");
        assert_eq!(package.archive_name, "extension.zip");

        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_config_without_jobs_is_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[project]
name = "demo"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_archive_extension_is_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[project]
name = "demo"

[package]
source_dir = "dist"
archive_name = "demo.tar"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[project]
name = "demo"

[icons]
output_path = "icons"
sizes = [16, 0]
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WEBEXT_KIT_TEST_DIST", "built/output");
        let config = TomlConfig::from_toml_str(
            r#"
[project]
name = "demo"

[package]
source_dir = "${WEBEXT_KIT_TEST_DIST}"
"#,
        )
        .unwrap();

        assert_eq!(config.package.unwrap().source_dir, "built/output");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
[project]
name = "demo"

[package]
source_dir = "${WEBEXT_KIT_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.package.unwrap().source_dir,
            "${WEBEXT_KIT_TEST_UNSET_VARIABLE}"
        );
    }

    #[test]
    fn test_timestamp_template_is_resolved() {
        let section = PackageSection {
            source_dir: "dist".to_string(),
            output_path: ".".to_string(),
            archive_name: "demo-{timestamp}.zip".to_string(),
        };

        let resolved = section.resolved();
        assert!(!resolved.archive_name.contains("{timestamp}"));
        assert!(resolved.archive_name.starts_with("demo-"));
        assert!(resolved.archive_name.ends_with(".zip"));
    }

    #[test]
    fn test_plain_archive_name_is_unchanged_by_resolve() {
        let section = PackageSection {
            source_dir: "dist".to_string(),
            output_path: ".".to_string(),
            archive_name: "demo.zip".to_string(),
        };

        assert_eq!(section.resolved().archive_name, "demo.zip");
    }
}
