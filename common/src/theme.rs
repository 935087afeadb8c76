//! Темы оформления экрана

use serde::{Deserialize, Serialize};
use std::fmt;

/// Тема экрана. Один экран, палитра выбирается здесь.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    DarkGlass,
    FrostedGlass,
}

/// Цвета темы (hex)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::DarkGlass, Theme::FrostedGlass];

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#F8FAFC",
                card: "#FFFFFF",
                accent: "#335E8A",
                accent_hover: "#2A4B6C",
                text: "#0F172A",
                text_muted: "#64748B",
            },
            Theme::DarkGlass => Palette {
                background: "#0B1220",
                card: "#111A2E",
                accent: "#4F8CC9",
                accent_hover: "#3C74AD",
                text: "#E2E8F0",
                text_muted: "#94A3B8",
            },
            Theme::FrostedGlass => Palette {
                background: "#E6EEF6",
                card: "#F4F8FBCC",
                accent: "#335E8A",
                accent_hover: "#2A4B6C",
                text: "#0F172A",
                text_muted: "#5B6B80",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::DarkGlass => "dark-glass",
            Theme::FrostedGlass => "frosted-glass",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" | "dark-glass" => Ok(Theme::DarkGlass),
            "frosted" | "frosted-glass" => Ok(Theme::FrostedGlass),
            _ => Err(format!(
                "Unknown theme: {}. Use light, dark-glass, or frosted-glass",
                s
            )),
        }
    }
}
