//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Directory name under the user's config dir
const APP_DIR: &str = "agent-orchestra";

/// Project-level file names, checked in order
const PROJECT_FILES: [&str; 2] = ["orchestra.toml", ".orchestra.toml"];

/// Prefix of environment overrides, e.g. `ORCHESTRA_ROUND__MAX_RESEARCH_CYCLES=3`
const ENV_PREFIX: &str = "ORCHESTRA_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables `ORCHESTRA_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./orchestra.toml` or `./.orchestra.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/agent-orchestra/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path();
        Self::figment(global.as_deref(), Path::new("."), config_path.map(PathBuf::as_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// File layers, lowest priority first.
    fn figment(global: Option<&Path>, project_dir: &Path, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::find_project_config(project_dir) {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/agent-orchestra/config.toml if set,
    /// otherwise the platform config dir equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_config(Path::new("."))
    }

    fn find_project_config(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn extract(figment: Figment) -> FileConfig {
        figment.extract().unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.tools.dynamic_capacity, 10);
        assert_eq!(config.round.max_research_cycles, 10);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("agent-orchestra"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = extract(ConfigLoader::figment(None, dir.path(), None));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(
            &global,
            "[tools]\ndynamic_capacity = 5\n\n[round]\nmax_model_retries = 7\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("orchestra.toml"),
            "[tools]\ndynamic_capacity = 3\n",
        )
        .unwrap();

        let config = extract(ConfigLoader::figment(Some(global.as_path()), dir.path(), None));

        assert_eq!(config.tools.dynamic_capacity, 3);
        assert_eq!(config.round.max_model_retries, 7);
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".orchestra.toml"),
            "[round]\nstructured_output = true\n",
        )
        .unwrap();

        let config = extract(ConfigLoader::figment(None, dir.path(), None));

        assert!(config.round.structured_output);
    }

    #[test]
    fn test_explicit_path_has_highest_file_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("orchestra.toml"),
            "[round]\nmax_research_cycles = 4\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[round]\nmax_research_cycles = 8\n").unwrap();

        let config = extract(ConfigLoader::figment(None, dir.path(), Some(explicit.as_path())));

        assert_eq!(config.round.max_research_cycles, 8);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[tools]\ndynamic_capacity = \"many\"\n").unwrap();

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, dir.path(), Some(explicit.as_path())).extract();

        assert!(result.is_err());
    }
}
