use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub draft: DraftConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Размеры нового черновика здания
#[derive(Debug, Deserialize, Clone)]
pub struct DraftConfig {
    pub default_total_floors: usize,
    pub default_units_per_floor: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            default_total_floors: 1,
            default_units_per_floor: contracts::domain::a001_building::inventory::DEFAULT_UNITS_PER_FLOOR,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
port = 3000

[draft]
default_total_floors = 1
default_units_per_floor = 4
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.draft.default_total_floors == 0 || config.draft.default_units_per_floor == 0 {
        anyhow::bail!("[draft] sizes must be positive");
    }
    Ok(config)
}

/// Запомнить загруженную конфигурацию для обработчиков
pub fn set_global(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already initialized, keeping the first one");
    }
}

/// Настройки черновика из загруженной конфигурации (или значения по умолчанию)
pub fn draft_config() -> DraftConfig {
    CONFIG
        .get()
        .map(|c| c.draft.clone())
        .unwrap_or_default()
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}
