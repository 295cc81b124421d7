//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["tripchat.toml", ".tripchat.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TRIPCHAT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./tripchat.toml` or `./.tripchat.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/tripchat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_in(Path::new("."), Self::global_config_path().as_deref(), config_path)
    }

    /// Same as [`load`](Self::load) with explicit project directory and
    /// global file location
    pub fn load_in(
        project_dir: &Path,
        global_path: Option<&Path>,
        config_path: Option<&PathBuf>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::project_config_path_in(project_dir) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("TRIPCHAT_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/tripchat/config.toml` (or the platform
    /// equivalent)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tripchat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_path_in(Path::new("."))
    }

    fn project_config_path_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for `--show-config`)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");
        out.push_str("  [     ] Environment: TRIPCHAT_* (e.g. TRIPCHAT_SERVER__BASE_URL)\n");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            out.push_str(&format!("  [{:<5}] Explicit: {}\n", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => out.push_str(&format!("  [FOUND] Project: {}\n", path.display())),
            None => out.push_str("  [     ] Project: ./tripchat.toml or ./.tripchat.toml\n"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Global:  {}\n", mark, path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.server.endpoint, "/generate");
        assert!(config.tui.mouse);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("tripchat"));
    }

    #[test]
    fn test_project_file_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(
            &global,
            "[server]\nbase_url = \"http://global:1\"\ncookie = \"session=g\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("tripchat.toml"),
            "[server]\nbase_url = \"http://project:2\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_in(dir.path(), Some(&global), None).unwrap();
        assert_eq!(config.server.base_url, "http://project:2");
        // Untouched keys fall through from lower layers
        assert_eq!(config.server.cookie.as_deref(), Some("session=g"));
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".tripchat.toml"),
            "[tui]\nmouse = false\nshow_help_on_start = true\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[tui]\nmouse = true\n").unwrap();

        let config = ConfigLoader::load_in(dir.path(), None, Some(&explicit)).unwrap();
        assert!(config.tui.mouse);
        assert!(config.tui.show_help_on_start);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_in(dir.path(), None, None).unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tripchat.toml"), "[server\nbase_url = 1").unwrap();
        assert!(ConfigLoader::load_in(dir.path(), None, None).is_err());
    }
}
