//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A discount tier: purchases whose total exceeds `min_total` qualify for
/// `pct` percent off. The highest qualifying tier applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Purchase total must exceed this to qualify
    pub min_total: f64,

    /// Discount percentage applied to the whole total
    pub pct: f64,
}

/// Defaults applied to invoice lines that omit their own tax or discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDefaults {
    /// Tax percentage per line
    #[serde(default)]
    pub tax_pct: f64,

    /// Flat discount per line
    #[serde(default)]
    pub discount: f64,

    /// Shipping added to the invoice total
    #[serde(default)]
    pub shipping: f64,
}

/// Complete configuration for a record store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Quantities strictly below this are flagged as low stock
    pub low_stock_threshold: u32,

    /// Quantities strictly above this are flagged as excess stock
    pub excess_stock_threshold: u32,

    /// Discount tiers, checked highest-first at purchase time
    #[serde(default)]
    pub discount_tiers: Vec<DiscountTier>,

    /// Invoice-level defaults
    #[serde(default = "InvoiceDefaults::none")]
    pub invoice: InvoiceDefaults,
}

impl InvoiceDefaults {
    fn none() -> Self {
        Self {
            tax_pct: 0.0,
            discount: 0.0,
            shipping: 0.0,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Discount percentage for a purchase total
    ///
    /// Tiers qualify when the total strictly exceeds their `min_total`; the
    /// qualifying tier with the highest `min_total` wins. Returns 0 when no
    /// tier qualifies.
    pub fn discount_pct(&self, total: f64) -> f64 {
        self.discount_tiers
            .iter()
            .filter(|tier| total > tier.min_total)
            .max_by(|a, b| a.min_total.total_cmp(&b.min_total))
            .map(|tier| tier.pct)
            .unwrap_or(0.0)
    }

    /// Create the default configuration
    ///
    /// Thresholds 5/100 and the 10% discount above a 5000 total match the
    /// shop dashboards this store was extracted from.
    pub fn default_config() -> Self {
        Self {
            low_stock_threshold: 5,
            excess_stock_threshold: 100,
            discount_tiers: vec![
                DiscountTier {
                    min_total: 5000.0,
                    pct: 10.0,
                },
                DiscountTier {
                    min_total: 10000.0,
                    pct: 10.0,
                },
            ],
            invoice: InvoiceDefaults::none(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
