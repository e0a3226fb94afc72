//! Site configuration.
//!
//! A browser bundle has no process environment, so overrides are read at
//! compile time (`SANSKRITI_SHOP_URL`, `SANSKRITI_ASSET_BASE`) and otherwise
//! fall back to the defaults below.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SHOP_URL: &str = "https://shop.sanskriti.pushkarverma.dev/";
pub const DEFAULT_ASSET_BASE: &str = "/assets/images";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// External shop opened by the "Shop" button (full page navigation).
    pub shop_url: String,
    /// In-app route of the maps view.
    pub maps_path: String,
    /// In-app route of the cart view ("Buy Now" lands here).
    pub cart_path: String,
    /// Prefix for relative image references in the static data.
    pub asset_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            shop_url: DEFAULT_SHOP_URL.to_string(),
            maps_path: "/maps".to_string(),
            cart_path: "/cart".to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by build-time environment variables.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("SANSKRITI_SHOP_URL"),
            option_env!("SANSKRITI_ASSET_BASE"),
        )
    }

    fn with_overrides(shop_url: Option<&str>, asset_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = shop_url.filter(|s| !s.trim().is_empty()) {
            config.shop_url = url.to_string();
        }
        if let Some(base) = asset_base.filter(|s| !s.trim().is_empty()) {
            config.asset_base = base.to_string();
        }
        config
    }

    pub fn state_path(region_id: &str) -> String {
        format!("/states/{region_id}")
    }
}
