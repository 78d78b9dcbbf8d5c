//! Loading of the three YAML documents the tool runs from:
//! application config, inventory and the API reference table.

use crate::error::{InventoryError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.yaml";
pub const INVENTORY_FILE: &str = "inventory.yaml";
pub const API_FILE: &str = "api.yaml";

/// OAuth1 key bundle for the Cardmarket API
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub app_token: String,
    pub app_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_token", &"<redacted>")
            .field("app_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Display tokens (usually ANSI escapes) per semantic role
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Palette {
    pub green: String,
    pub red: String,
    pub yellow: String,
    pub neutral: String,
}

impl Palette {
    /// Palette with empty tokens, for uncolored output
    pub fn plain() -> Self {
        Self {
            green: String::new(),
            red: String::new(),
            yellow: String::new(),
            neutral: String::new(),
        }
    }

    /// The configured palette, or the plain one when color is switched off.
    ///
    /// Escape tokens are written verbatim; consoles that do not interpret
    /// ANSI sequences (legacy Windows consoles) show them as text, so those
    /// users run with color off.
    pub fn for_output(&self, color: bool) -> Self {
        if color {
            self.clone()
        } else {
            Self::plain()
        }
    }
}

/// What a configured country entry asks the run to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountrySelection {
    /// Only consider listings from sellers in this country
    Filter(String),
    /// Consider every listing
    AllCountries,
    /// Stop processing countries here
    StopRun,
}

impl CountrySelection {
    /// Title used in the report heading
    pub fn label(&self) -> &str {
        match self {
            CountrySelection::Filter(code) => code.as_str(),
            CountrySelection::AllCountries => "International",
            CountrySelection::StopRun => "Stop",
        }
    }

    /// Whether a listing from `country` passes this selection
    pub fn accepts(&self, country: &str) -> bool {
        match self {
            CountrySelection::Filter(code) => code == country,
            CountrySelection::AllCountries => true,
            CountrySelection::StopRun => false,
        }
    }

    fn from_value(key: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) if s.trim().eq_ignore_ascii_case("ALL") => {
                Ok(CountrySelection::AllCountries)
            }
            Value::String(s) if !s.trim().is_empty() => {
                Ok(CountrySelection::Filter(s.trim().to_string()))
            }
            Value::Number(n) if n.as_i64() == Some(0) => Ok(CountrySelection::StopRun),
            other => Err(InventoryError::Config(format!(
                "country entry '{}' has unsupported value {}",
                key,
                describe_value(other)
            ))),
        }
    }
}

/// A single `countries` entry, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub key: String,
    pub selection: CountrySelection,
}

/// Application configuration (`config.yaml`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub countries: Vec<CountryEntry>,
    pub colors: Palette,
}

#[derive(Deserialize)]
struct RawUrl {
    base_url: String,
}

#[derive(Deserialize)]
struct RawConfig {
    url: RawUrl,
    keys: Credentials,
    countries: Mapping,
    colors: Palette,
}

impl AppConfig {
    /// Load and validate `config.yaml`
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_document(path)?;
        Self::parse(&content, path)
    }

    pub(crate) fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawConfig = parse_document(content, path)?;

        let base_url = raw.url.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(InventoryError::Config("url.base_url is empty".to_string()));
        }

        let countries = raw
            .countries
            .iter()
            .map(|(key, value)| {
                let key = key_to_string(key);
                let selection = CountrySelection::from_value(&key, value)?;
                Ok(CountryEntry { key, selection })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            base_url,
            credentials: raw.keys,
            countries,
            colors: raw.colors,
        })
    }
}

/// One tracked holding from `inventory.yaml`
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub name: String,
    pub article_id: u64,
    pub language: String,
    pub stock: f64,
    pub cost_basis: f64,
    pub purchase_date: Option<String>,
}

#[derive(Deserialize)]
struct RawItem {
    article_id: u64,
    language: String,
    stock: f64,
    cost_basis: f64,
    #[serde(default, deserialize_with = "scalar_as_string")]
    purchase_date: Option<String>,
}

/// Inventory items in document order
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Load and validate `inventory.yaml`
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_document(path)?;
        Self::parse(&content, path)
    }

    pub(crate) fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: Mapping = parse_document(content, path)?;

        let mut items = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let name = key_to_string(&key);
            let item: RawItem =
                serde_yaml::from_value(value).map_err(|source| InventoryError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?;

            if !item.stock.is_finite() || item.stock < 0.0 {
                return Err(InventoryError::Config(format!(
                    "item '{}' has invalid stock {}",
                    name, item.stock
                )));
            }
            if !item.cost_basis.is_finite() || item.cost_basis < 0.0 {
                return Err(InventoryError::Config(format!(
                    "item '{}' has invalid cost_basis {}",
                    name, item.cost_basis
                )));
            }

            items.push(InventoryItem {
                name,
                article_id: item.article_id,
                language: item.language,
                stock: item.stock,
                cost_basis: item.cost_basis,
                purchase_date: item.purchase_date,
            });
        }

        Ok(Self { items })
    }

    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Language name to Cardmarket language ID (`api.yaml`)
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    ids: HashMap<String, u32>,
}

#[derive(Deserialize)]
struct RawApi {
    languages: HashMap<String, u32>,
}

impl LanguageTable {
    /// Load `api.yaml`
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_document(path)?;
        Self::parse(&content, path)
    }

    pub(crate) fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawApi = parse_document(content, path)?;
        Ok(Self { ids: raw.languages })
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            ids: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Look up the language ID, failing for languages the table does not know
    pub fn resolve(&self, language: &str) -> Result<u32> {
        self.ids
            .get(language)
            .copied()
            .ok_or_else(|| InventoryError::UnknownLanguage(language.to_string()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// All three documents, loaded from one directory
#[derive(Debug, Clone)]
pub struct Documents {
    pub config: AppConfig,
    pub inventory: Inventory,
    pub languages: LanguageTable,
}

impl Documents {
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        let inventory_path = dir.join(INVENTORY_FILE);
        let api_path = dir.join(API_FILE);

        let config = AppConfig::load(&config_path)?;
        log::info!(
            "Loaded {} ({} country entries)",
            config_path.display(),
            config.countries.len()
        );

        let inventory = Inventory::load(&inventory_path)?;
        log::info!(
            "Loaded {} ({} items)",
            inventory_path.display(),
            inventory.len()
        );

        let languages = LanguageTable::load(&api_path)?;
        log::info!(
            "Loaded {} ({} languages)",
            api_path.display(),
            languages.len()
        );

        Ok(Self {
            config,
            inventory,
            languages,
        })
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: PathBuf::from(path),
        source,
    })
}

fn parse_document<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_yaml::from_str(content).map_err(|source| InventoryError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => describe_value(other),
    }
}

fn describe_value(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| format!("{:?}", value))
}

/// Accepts dates written either quoted or as bare numbers/words
fn scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(key_to_string(&other)),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
