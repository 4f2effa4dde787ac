use color_eyre::{Result, eyre::eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::SocialLinks;

/// A catalog file used to seed the store.
///
/// References between documents are written as plain keys: an event's
/// `singer` is the `id` of a `[[singer]]` entry, and so on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryEntry>,
    #[serde(default, rename = "singer")]
    pub singers: Vec<SingerEntry>,
    #[serde(default, rename = "event")]
    pub events: Vec<EventEntry>,
    #[serde(default, rename = "lp")]
    pub lps: Vec<LpEntry>,
    #[serde(default)]
    pub social: Option<SocialLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SingerEntry {
    pub id: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub email: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub spotify: Option<String>,
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventEntry {
    pub id: String,
    pub name: Option<String>,
    pub date: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub singer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LpEntry {
    pub id: String,
    pub name: Option<String>,
    pub year: Option<i64>,
    #[serde(default, rename = "preSave", alias = "pre-save", alias = "pre_save")]
    pub pre_save: Option<bool>,
    #[serde(default, rename = "novaEra", alias = "nova-era", alias = "nova_era")]
    pub nova_era: Option<bool>,
    pub photo: Option<String>,
    pub link1: Option<String>,
    pub link2: Option<String>,
    pub singer: Option<String>,
}

/// Supported catalog encodings, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(eyre!(
                "Unsupported catalog file {} (expected .toml or .json)",
                path.display()
            )),
        }
    }
}

impl CatalogFile {
    pub fn load(path: &Path) -> Result<Self> {
        let format = CatalogFormat::from_path(path)?;
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, format)
    }

    pub fn parse(contents: &str, format: CatalogFormat) -> Result<Self> {
        let catalog: Self = match format {
            CatalogFormat::Toml => toml::from_str(contents)?,
            CatalogFormat::Json => serde_json::from_str(contents)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Rejects entries without a key; dangling references are allowed
    fn validate(&self) -> Result<()> {
        let ids = self
            .categories
            .iter()
            .map(|entry| ("category", entry.id.as_str()))
            .chain(self.singers.iter().map(|entry| ("singer", entry.id.as_str())))
            .chain(self.events.iter().map(|entry| ("event", entry.id.as_str())))
            .chain(self.lps.iter().map(|entry| ("lp", entry.id.as_str())));

        for (table, id) in ids {
            if id.trim().is_empty() {
                return Err(eyre!("A {} entry has an empty id", table));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[category]]
id = "fado"
category = "Fado"

[[singer]]
id = "ana-lua"
name = "Ana Lua"
category = "fado"

[[event]]
id = "lisboa"
name = "Noite em Lisboa"
date = "2026-07-14T21:30"
singer = "ana-lua"

[[lp]]
id = "mare"
name = "Maré"
year = 2025
pre-save = true
nova-era = true

[social]
instagram = "https://instagram.com/sonsdecena"
"#;

    #[test]
    fn test_parse_toml_catalog() {
        let catalog = CatalogFile::parse(SAMPLE, CatalogFormat::Toml).unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.singers[0].category.as_deref(), Some("fado"));
        assert_eq!(catalog.events[0].singer.as_deref(), Some("ana-lua"));
        assert_eq!(catalog.lps[0].pre_save, Some(true));
        assert_eq!(catalog.lps[0].nova_era, Some(true));
        let social = catalog.social.unwrap();
        assert!(social.facebook.is_none());
    }

    #[test]
    fn test_parse_json_catalog_with_camel_case_flags() {
        let json = r#"{
            "lp": [{ "id": "a", "name": "A", "year": 2020, "preSave": false, "novaEra": true }]
        }"#;
        let catalog = CatalogFile::parse(json, CatalogFormat::Json).unwrap();
        assert_eq!(catalog.lps[0].pre_save, Some(false));
        assert_eq!(catalog.lps[0].nova_era, Some(true));
        assert!(catalog.singers.is_empty());
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let toml = "[[singer]]\nid = \" \"\nname = \"x\"\n";
        assert!(CatalogFile::parse(toml, CatalogFormat::Toml).is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("seed.TOML")).unwrap(),
            CatalogFormat::Toml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("dir/seed.json")).unwrap(),
            CatalogFormat::Json
        );
        assert!(CatalogFormat::from_path(Path::new("seed.yaml")).is_err());
        assert!(CatalogFormat::from_path(Path::new("seed")).is_err());
    }
}
