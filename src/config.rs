use serde::Deserialize;

/// Page tuning knobs. Read from the `config` block of the embedded site
/// data; any missing field keeps its default.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Distance (px) from the viewport top used by the scroll spy.
    pub reference_line: f64,
    /// Scroll offset (px) after which the mobile navbar turns opaque.
    pub scrolled_threshold: f64,
    /// Fake round-trip for the contact form.
    pub submit_delay_ms: u32,
    pub meteor_count: usize,
    pub yearly_discount_pct: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reference_line: 100.0,
            scrolled_threshold: 50.0,
            submit_delay_ms: 2000,
            meteor_count: 20,
            yearly_discount_pct: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_block_keeps_defaults() {
        let cfg: SiteConfig = serde_json::from_str(r#"{"meteor_count": 5}"#).unwrap();
        assert_eq!(cfg.meteor_count, 5);
        assert_eq!(cfg.reference_line, 100.0);
        assert_eq!(cfg.submit_delay_ms, 2000);
    }

    #[test]
    fn test_empty_block_is_default() {
        let cfg: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }
}
