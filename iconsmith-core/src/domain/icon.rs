//! Icon domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::timestamp;

/// A generated icon stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub id: String,
    pub name: String,
    pub category: IconCategory,
    /// Prompt the image was generated from
    pub prompt: String,
    #[serde(default)]
    pub animation_prompt: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Icon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    FinanceInvestissement,
    Immobilier,
    Vehicules,
    Metiers,
    Objets,
    Lieux,
    Devises,
    Actions,
    Etats,
    Organismes,
    Nourriture,
    Sport,
    Other,
}

impl IconCategory {
    pub const ALL: [IconCategory; 13] = [
        IconCategory::FinanceInvestissement,
        IconCategory::Immobilier,
        IconCategory::Vehicules,
        IconCategory::Metiers,
        IconCategory::Objets,
        IconCategory::Lieux,
        IconCategory::Devises,
        IconCategory::Actions,
        IconCategory::Etats,
        IconCategory::Organismes,
        IconCategory::Nourriture,
        IconCategory::Sport,
        IconCategory::Other,
    ];

    /// Wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            IconCategory::FinanceInvestissement => "finance_investissement",
            IconCategory::Immobilier => "immobilier",
            IconCategory::Vehicules => "vehicules",
            IconCategory::Metiers => "metiers",
            IconCategory::Objets => "objets",
            IconCategory::Lieux => "lieux",
            IconCategory::Devises => "devises",
            IconCategory::Actions => "actions",
            IconCategory::Etats => "etats",
            IconCategory::Organismes => "organismes",
            IconCategory::Nourriture => "nourriture",
            IconCategory::Sport => "sport",
            IconCategory::Other => "other",
        }
    }

    /// Display label shown in the gallery
    pub fn label(self) -> &'static str {
        match self {
            IconCategory::FinanceInvestissement => "Finance & Investissement",
            IconCategory::Immobilier => "Immobilier",
            IconCategory::Vehicules => "Véhicules",
            IconCategory::Metiers => "Métiers",
            IconCategory::Objets => "Objets",
            IconCategory::Lieux => "Lieux",
            IconCategory::Devises => "Devises",
            IconCategory::Actions => "Actions",
            IconCategory::Etats => "États",
            IconCategory::Organismes => "Organismes",
            IconCategory::Nourriture => "Nourriture",
            IconCategory::Sport => "Sport",
            IconCategory::Other => "Autre",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        IconCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown icon category '{}'", s))
    }
}

/// Size variant requested when downloading an icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconSize {
    #[default]
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "2k")]
    TwoK,
    #[serde(rename = "1k")]
    OneK,
}

impl IconSize {
    pub fn as_str(self) -> &'static str {
        match self {
            IconSize::Original => "original",
            IconSize::TwoK => "2k",
            IconSize::OneK => "1k",
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(IconSize::Original),
            "2k" => Ok(IconSize::TwoK),
            "1k" => Ok(IconSize::OneK),
            other => Err(format!(
                "unknown icon size '{}' (expected original, 2k or 1k)",
                other
            )),
        }
    }
}
