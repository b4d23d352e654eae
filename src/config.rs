//! Configuration for the navigators
//!
//! The engine itself only ever sees the resolved [`NavigatorConfig`] struct -
//! it never reads files or environment variables (no process-wide state).
//! The demo binary resolves configuration in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/panenav/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved navigator configuration, passed in at construction.
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// Include dotfiles in directory listings (browser only)
    pub show_hidden_files: bool,

    /// Render a size suffix next to non-directory entries
    pub show_file_size: bool,

    /// Enable h/j/k/l and Ctrl+U/D bindings in addition to the arrows
    pub enable_vim_keys: bool,

    /// Upper clamp on the computed viewport budget; 0 = no clamp
    pub max_display_items: usize,

    /// Theme name: "auto", "dracula", "gruvbox"
    pub theme: String,

    /// Editor column headers, pre-translated by the caller
    pub time_label: String,
    pub data_label: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            show_hidden_files: false,
            show_file_size: true,
            enable_vim_keys: false,
            max_display_items: 0,
            theme: "auto".to_string(),
            time_label: "Time".to_string(),
            data_label: "Value".to_string(),
        }
    }
}

/// Config file structure (subset of NavigatorConfig that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    show_hidden_files: Option<bool>,
    show_file_size: Option<bool>,
    enable_vim_keys: Option<bool>,
    max_display_items: Option<usize>,
    theme: Option<String>,
    time_label: Option<String>,
    data_label: Option<String>,
}

impl NavigatorConfig {
    /// Get the config file path: ~/.config/panenav/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("panenav").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist, so users can
    /// discover the available options. Failures are silent - the file is
    /// optional.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Serialize the effective configuration as a commented TOML template.
    pub fn to_toml(&self) -> String {
        format!(
            "# panenav configuration\n\
             \n\
             # Include dotfiles in directory listings\n\
             show_hidden_files = {}\n\
             \n\
             # Render a size suffix next to non-directory entries\n\
             show_file_size = {}\n\
             \n\
             # Enable h/j/k/l and Ctrl+U/D bindings in addition to the arrows\n\
             enable_vim_keys = {}\n\
             \n\
             # Upper clamp on rows shown per pane (0 = no clamp)\n\
             max_display_items = {}\n\
             \n\
             # Theme: \"auto\", \"dracula\", \"gruvbox\"\n\
             theme = \"{}\"\n\
             \n\
             # Editor column headers\n\
             time_label = \"{}\"\n\
             data_label = \"{}\"\n",
            self.show_hidden_files,
            self.show_file_size,
            self.enable_vim_keys,
            self.max_display_items,
            self.theme,
            self.time_label,
            self.data_label,
        )
    }

    /// Load configuration: env vars > config file > defaults.
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        let show_hidden_files = env_bool("PANENAV_SHOW_HIDDEN")
            .or(file.show_hidden_files)
            .unwrap_or(defaults.show_hidden_files);

        let show_file_size = env_bool("PANENAV_SHOW_SIZE")
            .or(file.show_file_size)
            .unwrap_or(defaults.show_file_size);

        let enable_vim_keys = env_bool("PANENAV_VIM_KEYS")
            .or(file.enable_vim_keys)
            .unwrap_or(defaults.enable_vim_keys);

        let max_display_items = std::env::var("PANENAV_MAX_ITEMS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.max_display_items)
            .unwrap_or(defaults.max_display_items);

        let theme = std::env::var("PANENAV_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let time_label = file.time_label.unwrap_or(defaults.time_label);
        let data_label = file.data_label.unwrap_or(defaults.data_label);

        Self {
            show_hidden_files,
            show_file_size,
            enable_vim_keys,
            max_display_items,
            theme,
            time_label,
            data_label,
        }
    }

    /// Load file config if it exists. A file that exists but cannot be
    /// parsed fails fast with a clear error instead of silently falling back
    /// to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse {}: {e}", path.display());
                    eprintln!("To reset, delete the file and rerun panenav.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Cannot read {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }
}

fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.to_lowercase() == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let cfg = NavigatorConfig::default();
        assert!(!cfg.show_hidden_files);
        assert!(!cfg.enable_vim_keys);
        assert_eq!(cfg.max_display_items, 0);
        assert_eq!(cfg.theme, "auto");
    }

    #[test]
    fn template_parses_back_as_file_config() {
        let toml_text = NavigatorConfig::default().to_toml();
        let parsed: FileConfig = toml::from_str(&toml_text).expect("template must parse");
        assert_eq!(parsed.show_hidden_files, Some(false));
        assert_eq!(parsed.theme.as_deref(), Some("auto"));
        assert_eq!(parsed.time_label.as_deref(), Some("Time"));
    }

    #[test]
    fn partial_file_config_leaves_rest_default() {
        let parsed: FileConfig = toml::from_str("enable_vim_keys = true\n").unwrap();
        assert_eq!(parsed.enable_vim_keys, Some(true));
        assert_eq!(parsed.show_hidden_files, None);
    }
}
