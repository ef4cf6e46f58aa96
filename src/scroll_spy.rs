//! Which page section the visitor is looking at.
//!
//! Sampled on every scroll and resize tick: the first registered section whose
//! box straddles the reference line becomes active. When nothing straddles it
//! (above the first section, or in a gap) the previous answer is kept.

use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::data::NavItem;
use crate::error::{Result, SiteError};

/// Vertical extent of an element relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && line <= self.bottom
    }
}

/// What the tracker needs from the host page.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn section_bounds(&self, anchor: &str) -> Option<Span>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    items: Vec<NavItem>,
}

impl SectionRegistry {
    pub fn new(items: Vec<NavItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptyCollection("nav"));
        }
        let mut seen = HashSet::new();
        for item in &items {
            let anchor = item.anchor();
            if anchor.is_empty() {
                return Err(SiteError::EmptyAnchor(item.label.clone()));
            }
            if !seen.insert(anchor) {
                return Err(SiteError::DuplicateAnchor(anchor.to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn anchor(&self, idx: usize) -> Option<&str> {
        self.items.get(idx).map(NavItem::anchor)
    }

    #[cfg(test)]
    pub fn position(&self, anchor: &str) -> Option<usize> {
        let anchor = anchor.trim_start_matches('#');
        self.items.iter().position(|it| it.anchor() == anchor)
    }

    /// First section, in registry order, whose box contains `line`.
    pub fn section_at(&self, viewport: &impl Viewport, line: f64) -> Option<usize> {
        self.items.iter().position(|it| {
            viewport
                .section_bounds(it.anchor())
                .is_some_and(|span| span.contains(line))
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpy {
    reference_line: f64,
    scrolled_threshold: f64,
    active: usize,
    scrolled: bool,
}

impl ScrollSpy {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            reference_line: 0.0,
            scrolled_threshold: config.scrolled_threshold,
            active: 0,
            scrolled: false,
        }
        .with_reference_line(config.reference_line)
    }

    pub fn with_reference_line(mut self, line: f64) -> Self {
        self.reference_line = line;
        self
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_anchor<'a>(&self, registry: &'a SectionRegistry) -> &'a str {
        registry.anchor(self.active()).unwrap_or_default()
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Re-samples the viewport. Returns true when anything visible changed.
    pub fn observe(&mut self, registry: &SectionRegistry, viewport: &impl Viewport) -> bool {
        let before = *self;
        self.scrolled = viewport.scroll_y() > self.scrolled_threshold;
        if let Some(idx) = registry.section_at(viewport, self.reference_line) {
            self.active = idx;
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeViewport {
        scroll_y: f64,
        boxes: HashMap<&'static str, Span>,
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn section_bounds(&self, anchor: &str) -> Option<Span> {
            self.boxes.get(anchor).copied()
        }
    }

    fn nav(label: &str, href: &str) -> NavItem {
        NavItem {
            label: label.into(),
            href: href.into(),
        }
    }

    fn registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            nav("One", "#one"),
            nav("Two", "#two"),
            nav("Three", "#three"),
        ])
        .unwrap()
    }

    fn three_sections() -> FakeViewport {
        FakeViewport {
            scroll_y: 0.0,
            boxes: HashMap::from([
                ("one", Span::new(0.0, 300.0)),
                ("two", Span::new(300.0, 700.0)),
                ("three", Span::new(700.0, 1200.0)),
            ]),
        }
    }

    fn spy_at(line: f64) -> ScrollSpy {
        ScrollSpy::new(&SiteConfig::default()).with_reference_line(line)
    }

    #[test]
    fn test_reference_line_picks_covering_section() {
        let reg = registry();
        let vp = three_sections();

        let mut spy = spy_at(100.0);
        spy.observe(&reg, &vp);
        assert_eq!(spy.active_anchor(&reg), "one");

        let mut spy = spy_at(500.0);
        assert!(spy.observe(&reg, &vp));
        assert_eq!(spy.active_anchor(&reg), "two");
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let reg = registry();
        let vp = three_sections();

        let mut spy = spy_at(900.0);
        spy.observe(&reg, &vp);
        assert_eq!(spy.active(), 2);

        let mut spy = spy.with_reference_line(-50.0);
        assert!(!spy.observe(&reg, &vp));
        assert_eq!(spy.active_anchor(&reg), "three");
    }

    #[test]
    fn test_shared_edge_goes_to_first_registered() {
        let reg = registry();
        let mut spy = spy_at(300.0);
        spy.observe(&reg, &three_sections());
        assert_eq!(spy.active_anchor(&reg), "one");
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let reg = registry();
        let vp = FakeViewport {
            scroll_y: 0.0,
            boxes: HashMap::from([("three", Span::new(-20.0, 400.0))]),
        };
        let mut spy = spy_at(100.0);
        spy.observe(&reg, &vp);
        assert_eq!(spy.active_anchor(&reg), "three");
    }

    #[test]
    fn test_scrolled_flag_follows_threshold() {
        let reg = registry();
        let mut vp = three_sections();
        let mut spy = spy_at(100.0);

        vp.scroll_y = 50.0;
        spy.observe(&reg, &vp);
        assert!(!spy.scrolled());

        vp.scroll_y = 51.0;
        assert!(spy.observe(&reg, &vp));
        assert!(spy.scrolled());
    }

    #[test]
    fn test_first_sample_on_already_scrolled_page() {
        let reg = registry();
        let mut vp = three_sections();
        vp.scroll_y = 800.0;
        vp.boxes = HashMap::from([
            ("one", Span::new(-800.0, -500.0)),
            ("two", Span::new(-500.0, -100.0)),
            ("three", Span::new(-100.0, 400.0)),
        ]);

        let mut spy = ScrollSpy::new(&SiteConfig::default());
        assert!(spy.observe(&reg, &vp));
        assert_eq!(spy.active_anchor(&reg), "three");
        assert!(spy.scrolled());
    }

    #[test]
    fn test_default_is_first_entry() {
        let reg = registry();
        let spy = spy_at(100.0);
        assert_eq!(spy.active(), 0);
        assert_eq!(spy.active_anchor(&reg), "one");
    }

    #[test]
    fn test_registry_rejects_duplicates_and_blanks() {
        let dup = SectionRegistry::new(vec![nav("A", "#a"), nav("B", "#a")]);
        assert!(matches!(dup, Err(SiteError::DuplicateAnchor(a)) if a == "a"));

        let blank = SectionRegistry::new(vec![nav("A", "#")]);
        assert!(matches!(blank, Err(SiteError::EmptyAnchor(_))));

        assert!(SectionRegistry::new(vec![]).is_err());
    }

    #[test]
    fn test_position_accepts_hash_or_bare() {
        let reg = registry();
        assert_eq!(reg.position("#two"), Some(1));
        assert_eq!(reg.position("two"), Some(1));
        assert_eq!(reg.position("four"), None);
    }
}
