//! Tests for configuration loading.

use super::*;

const CONFIG_YAML: &str = r#"
url:
  base_url: "https://api.cardmarket.com/ws/v2.0/output.json/"
keys:
  app_token: "app"
  app_secret: "app-secret"
  access_token: "access"
  access_token_secret: "access-secret"
countries:
  1: DE
  2: ALL
  3: 0
  4: FR
colors:
  green: "\e[32m"
  red: "\e[31m"
  yellow: "\e[33m"
  neutral: "\e[0m"
"#;

fn dummy_path() -> &'static Path {
    Path::new("config.yaml")
}

// ── AppConfig ────────────────────────────────────────────────────────

#[test]
fn parses_countries_into_selections_in_order() {
    let config = AppConfig::parse(CONFIG_YAML, dummy_path()).unwrap();

    let selections: Vec<_> = config.countries.iter().map(|c| &c.selection).collect();
    assert_eq!(
        selections,
        vec![
            &CountrySelection::Filter("DE".to_string()),
            &CountrySelection::AllCountries,
            &CountrySelection::StopRun,
            &CountrySelection::Filter("FR".to_string()),
        ]
    );
    assert_eq!(config.countries[0].key, "1");
}

#[test]
fn strips_trailing_slash_from_base_url() {
    let config = AppConfig::parse(CONFIG_YAML, dummy_path()).unwrap();
    assert_eq!(
        config.base_url,
        "https://api.cardmarket.com/ws/v2.0/output.json"
    );
}

#[test]
fn reads_palette_escape_tokens() {
    let config = AppConfig::parse(CONFIG_YAML, dummy_path()).unwrap();
    assert_eq!(config.colors.green, "\u{1b}[32m");
    assert_eq!(config.colors.neutral, "\u{1b}[0m");
}

#[test]
fn palette_for_output_drops_tokens_without_color() {
    let config = AppConfig::parse(CONFIG_YAML, dummy_path()).unwrap();
    assert_eq!(config.colors.for_output(true), config.colors);
    assert_eq!(config.colors.for_output(false), Palette::plain());
}

#[test]
fn credentials_debug_is_redacted() {
    let config = AppConfig::parse(CONFIG_YAML, dummy_path()).unwrap();
    let debug = format!("{:?}", config.credentials);
    assert!(!debug.contains("app-secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn rejects_nonzero_numeric_country() {
    let yaml = CONFIG_YAML.replace("3: 0", "3: 7");
    match AppConfig::parse(&yaml, dummy_path()) {
        Err(InventoryError::Config(msg)) => assert!(msg.contains("'3'")),
        other => panic!("Expected InventoryError::Config, got: {other:?}"),
    }
}

#[test]
fn rejects_missing_color_role() {
    let yaml = CONFIG_YAML.replace("  yellow: \"\\e[33m\"\n", "");
    match AppConfig::parse(&yaml, dummy_path()) {
        Err(InventoryError::Yaml { path, .. }) => assert_eq!(path, dummy_path()),
        other => panic!("Expected InventoryError::Yaml, got: {other:?}"),
    }
}

#[test]
fn rejects_malformed_document() {
    let result = AppConfig::parse("url: [unclosed", dummy_path());
    assert!(matches!(result, Err(InventoryError::Yaml { .. })));
}

#[test]
fn selection_accepts_by_country() {
    let de = CountrySelection::Filter("DE".to_string());
    assert!(de.accepts("DE"));
    assert!(!de.accepts("US"));
    assert!(CountrySelection::AllCountries.accepts("US"));
    assert_eq!(CountrySelection::AllCountries.label(), "International");
    assert_eq!(de.label(), "DE");
}

// ── Inventory ────────────────────────────────────────────────────────

#[test]
fn parses_inventory_in_document_order() {
    let yaml = r#"
Modern Horizons 2 Set Booster Display:
  article_id: 541234
  language: English
  stock: 2
  cost_basis: 180.5
  purchase_date: "2021-06-18"
Kaldheim Collector Booster:
  article_id: 498765
  language: German
  stock: 1
  cost_basis: 20
"#;
    let inventory = Inventory::parse(yaml, Path::new("inventory.yaml")).unwrap();

    assert_eq!(inventory.len(), 2);
    let first = &inventory.items()[0];
    assert_eq!(first.name, "Modern Horizons 2 Set Booster Display");
    assert_eq!(first.article_id, 541234);
    assert_eq!(first.stock, 2.0);
    assert_eq!(first.purchase_date.as_deref(), Some("2021-06-18"));

    let second = &inventory.items()[1];
    assert_eq!(second.name, "Kaldheim Collector Booster");
    assert_eq!(second.cost_basis, 20.0);
    assert_eq!(second.purchase_date, None);
}

#[test]
fn inventory_accepts_unquoted_purchase_date() {
    let yaml = r#"
Box:
  article_id: 1
  language: English
  stock: 1
  cost_basis: 1.0
  purchase_date: 2021-06-18
"#;
    let inventory = Inventory::parse(yaml, Path::new("inventory.yaml")).unwrap();
    assert_eq!(
        inventory.items()[0].purchase_date.as_deref(),
        Some("2021-06-18")
    );
}

#[test]
fn inventory_rejects_negative_stock() {
    let yaml = r#"
Box:
  article_id: 1
  language: English
  stock: -3
  cost_basis: 1.0
"#;
    let result = Inventory::parse(yaml, Path::new("inventory.yaml"));
    assert!(matches!(result, Err(InventoryError::Config(_))));
}

#[test]
fn inventory_accepts_fractional_stock() {
    let yaml = r#"
Loose Boosters:
  article_id: 1
  language: English
  stock: 1.5
  cost_basis: 4.0
"#;
    let inventory = Inventory::parse(yaml, Path::new("inventory.yaml")).unwrap();
    assert_eq!(inventory.items()[0].stock, 1.5);
}

#[test]
fn inventory_rejects_negative_cost_basis() {
    let yaml = r#"
Box:
  article_id: 1
  language: English
  stock: 3
  cost_basis: -1.0
"#;
    let result = Inventory::parse(yaml, Path::new("inventory.yaml"));
    assert!(matches!(result, Err(InventoryError::Config(_))));
}

#[test]
fn inventory_rejects_missing_article_id() {
    let yaml = r#"
Box:
  language: English
  stock: 3
  cost_basis: 1.0
"#;
    let result = Inventory::parse(yaml, Path::new("inventory.yaml"));
    assert!(matches!(result, Err(InventoryError::Yaml { .. })));
}

// ── LanguageTable ────────────────────────────────────────────────────

#[test]
fn resolves_known_language() {
    let yaml = "languages:\n  English: 1\n  German: 3\n";
    let table = LanguageTable::parse(yaml, Path::new("api.yaml")).unwrap();
    assert_eq!(table.resolve("German").unwrap(), 3);
    assert_eq!(table.len(), 2);
}

#[test]
fn unknown_language_is_an_error() {
    let table = LanguageTable::from_pairs([("English", 1)]);
    match table.resolve("Klingon") {
        Err(InventoryError::UnknownLanguage(lang)) => assert_eq!(lang, "Klingon"),
        other => panic!("Expected InventoryError::UnknownLanguage, got: {other:?}"),
    }
}
