use crate::error::{PtobotError, Result};
use ptobot_common::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://ptobot-backend.onrender.com";
pub const DEFAULT_WEBAPP_URL: &str = "https://reports-frontend.onrender.com";

/// Пока нет авторизации через Telegram, все отчёты идут от одного пользователя
pub const DEFAULT_USER_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub user_id: String,
    pub webapp_url: String,
    pub theme: Theme,
    pub timeout_seconds: u64,
    /// Старые бэкенды принимают одно фото в поле `photo`
    pub legacy_photo_field: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            user_id: DEFAULT_USER_ID.into(),
            webapp_url: DEFAULT_WEBAPP_URL.into(),
            theme: Theme::default(),
            timeout_seconds: 30,
            legacy_photo_field: false,
        }
    }
}

impl Config {
    /// Загрузить настройки из `~/.config/ptobot/config.json` и переменных окружения
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PtobotError::Config("домашний каталог не найден".into()))?;
        Ok(home.join(".config").join("ptobot").join("config.json"))
    }

    /// Переменные окружения главнее файла
    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("PTOBOT_API_URL") {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(user_id) = std::env::var("PTOBOT_USER_ID") {
            if !user_id.trim().is_empty() {
                self.user_id = user_id;
            }
        }
        self
    }

    /// Адрес бэкенда без завершающего `/`
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
