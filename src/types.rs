use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Training modality of a session or exercise.
///
/// The backend stores these as free text (`main_type`) or as an enum
/// (`exercise.type`), so deserialization goes through [`Modality::from_raw`]
/// and accepts anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Modality {
    Musculacao,
    Corrida,
    Pedal,
    Outro,
}

impl Modality {
    /// Resolve a raw modality string the way the coaching app does:
    /// substring match, anything unknown falls back to `Outro`.
    pub fn from_raw<S: AsRef<str>>(raw: S) -> Self {
        let text = raw.as_ref().to_uppercase();
        if text.contains("CORRIDA") {
            Self::Corrida
        } else if text.contains("PEDAL") {
            Self::Pedal
        } else if text.contains("MUSC") {
            Self::Musculacao
        } else {
            Self::Outro
        }
    }

    /// Endurance exercises have no per-set tracking; they complete as a unit.
    pub fn is_endurance(self) -> bool {
        matches!(self, Self::Corrida | Self::Pedal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Musculacao => "MUSCULACAO",
            Self::Corrida => "CORRIDA",
            Self::Pedal => "PEDAL",
            Self::Outro => "OUTRO",
        }
    }
}

impl From<String> for Modality {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Modality> for String {
    fn from(m: Modality) -> Self {
        m.as_str().to_string()
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Agenda display order, mirroring the coaching app's grouping.
pub const MODALITY_ORDER: [Modality; 4] = [
    Modality::Musculacao,
    Modality::Corrida,
    Modality::Pedal,
    Modality::Outro,
];

pub static MODALITY_LABELS: Lazy<BTreeMap<Modality, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (Modality::Musculacao, "Musculacao"),
        (Modality::Corrida, "Corrida"),
        (Modality::Pedal, "Pedal"),
        (Modality::Outro, "Outros"),
    ])
});

/// Key/value config persisted as TOML under the user config dir.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: BTreeMap<String, String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("Invalid config file: {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read config: {}", path.display())),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    fn get_or_env(&self, key: &str, env: &str) -> Option<String> {
        std::env::var(env)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.map.get(key).cloned())
    }

    pub fn api_url(&self) -> String {
        self.get_or_env("api_url", "TREINO_API_URL")
            .unwrap_or_else(|| "http://localhost:8000".to_string())
    }

    pub fn token(&self) -> Option<String> {
        self.get_or_env("token", "TREINO_TOKEN")
    }
}
