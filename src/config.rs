//! Language -> file extension table.
//!
//! The table is a JSON array of `{ "name", "type", "extensions" }` objects.
//! A copy ships in `configs/language_extensions.json` and is compiled in as the
//! default; `--languages-config-path` replaces it.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{FameError, Result};

const BUILTIN_TABLE: &str = include_str!("../configs/language_extensions.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LanguageTable {
    /// Lowercased name -> language
    languages: HashMap<String, Language>,
}

impl LanguageTable {
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_TABLE)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            FameError::Config(format!("Could not read {}: {}", path.display(), e))
        })?;
        Self::parse(&data).map_err(|e| match e {
            FameError::Config(msg) => FameError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn parse(data: &str) -> Result<Self> {
        let langs: Vec<Language> = serde_json::from_str(data)
            .map_err(|e| FameError::Config(format!("Malformed language table: {}", e)))?;

        let languages = langs
            .into_iter()
            .map(|lang| (lang.name.to_lowercase(), lang))
            .collect();
        Ok(Self { languages })
    }

    /// Extensions of every named language; unknown names contribute nothing.
    pub fn extensions_for(&self, names: &[String]) -> Vec<String> {
        let mut extensions = Vec::new();
        for name in names {
            match self.languages.get(&name.trim().to_lowercase()) {
                Some(lang) => extensions.extend(lang.extensions.iter().cloned()),
                None => tracing::warn!("Unknown language: {}", name),
            }
        }
        extensions
    }
}
