use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Base path static images are served from. Override at build time with
/// `STRAD_ASSET_BASE=https://cdn.example.com/strad trunk build --release`.
pub fn asset_base_path() -> &'static str {
    option_env!("STRAD_ASSET_BASE").unwrap_or("/assets")
}

pub fn asset_url(file_name: &str) -> String {
    format!(
        "{}/{}",
        asset_base_path().trim_end_matches('/'),
        file_name.trim_start_matches('/')
    )
}

pub const CONTACT_EMAIL: &str = "office@strad.at";

/// Tuning for the scroll-spy navigation. Values are in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpyConfig {
    /// Lookahead added to the container scroll offset so a section becomes
    /// active slightly before its top edge reaches the viewport top.
    pub threshold: f64,
    /// Subtracted from every section's top offset before comparison.
    pub margin: f64,
    /// Header switches to its compact style past this scroll offset.
    pub scrolled_after: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        SCROLL_SPY
    }
}

pub const SCROLL_SPY: ScrollSpyConfig = ScrollSpyConfig {
    threshold: 150.0,
    margin: 200.0,
    scrolled_after: 40.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_with_single_slash() {
        let base = asset_base_path().trim_end_matches('/');
        assert_eq!(asset_url("battery.jpg"), format!("{}/battery.jpg", base));
        assert_eq!(asset_url("/battery.jpg"), format!("{}/battery.jpg", base));
    }

    #[test]
    fn default_scroll_spy_matches_tuned_values() {
        let config = ScrollSpyConfig::default();
        assert_eq!(config.threshold, 150.0);
        assert_eq!(config.margin, 200.0);
    }
}
