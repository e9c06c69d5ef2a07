//! Configuration file loading tests

use std::io::Write;
use stockroom::prelude::*;

#[test]
fn test_load_config_from_yaml_file() {
    let yaml = r#"
low_stock_threshold: 5
excess_stock_threshold: 100
discount_tiers:
  - min_total: 5000.0
    pct: 10.0
  - min_total: 10000.0
    pct: 10.0
invoice:
  tax_pct: 18.0
  discount: 0.0
  shipping: 40.0
"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = StoreConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.low_stock_threshold, 5);
    assert_eq!(config.excess_stock_threshold, 100);
    assert_eq!(config.discount_tiers.len(), 2);
    assert_eq!(config.discount_pct(6000.0), 10.0);
    assert_eq!(config.invoice.tax_pct, 18.0);
    assert_eq!(config.invoice.shipping, 40.0);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(StoreConfig::from_yaml_file("/nonexistent/stockroom.yaml").is_err());
}

#[test]
fn test_malformed_yaml_is_an_error() {
    assert!(StoreConfig::from_yaml_str("low_stock_threshold: [not a number").is_err());
}

#[tokio::test]
async fn test_store_built_from_file_config_applies_tiers() {
    let yaml = "low_stock_threshold: 2\nexcess_stock_threshold: 10\ndiscount_tiers:\n  - min_total: 100.0\n    pct: 50.0\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = StoreConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    let store = RecordStore::new(config);

    store
        .add_customer("9876543210", "Ravi", 34, Gender::Male, "12 Main Rd")
        .await
        .unwrap();
    let purchase = store
        .add_purchase(
            "9876543210",
            "Tonic",
            2,
            100.0,
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(purchase.total, 200.0);
    assert_eq!(purchase.final_price, 100.0);
}
