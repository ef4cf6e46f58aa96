//! Static site content, embedded at compile time.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::scroll_spy::SectionRegistry;

const SITE_JSON: &str = include_str!("../data/site.json");

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub features: Vec<String>,
    pub price: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub experience: String,
    pub specialties: Vec<String>,
    pub rating: f32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub monthly_price: u32, // whole dollars
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub date: String, // YYYY-MM-DD
}

impl Testimonial {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn anchor(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct RawSite {
    services: Vec<Service>,
    trainers: Vec<Trainer>,
    plans: Vec<Plan>,
    testimonials: Vec<Testimonial>,
    gallery: Vec<GalleryItem>,
    faqs: Vec<Faq>,
    nav: Vec<NavItem>,
    social: Vec<SocialLink>,
    #[serde(default)]
    config: SiteConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteData {
    pub services: Vec<Service>,
    pub trainers: Vec<Trainer>,
    pub plans: Vec<Plan>,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Vec<GalleryItem>,
    pub faqs: Vec<Faq>,
    pub nav: SectionRegistry,
    pub social: Vec<SocialLink>,
    pub config: SiteConfig,
}

impl SiteData {
    pub fn embedded() -> Result<Self> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSite = serde_json::from_str(json)?;

        if raw.testimonials.is_empty() {
            return Err(SiteError::EmptyCollection("testimonials"));
        }
        unique_ids("services", raw.services.iter().map(|s| &s.id))?;
        unique_ids("trainers", raw.trainers.iter().map(|t| &t.id))?;
        unique_ids("plans", raw.plans.iter().map(|p| &p.id))?;
        unique_ids("testimonials", raw.testimonials.iter().map(|t| &t.id))?;
        unique_ids("gallery", raw.gallery.iter().map(|g| &g.id))?;
        unique_ids("faqs", raw.faqs.iter().map(|f| &f.id))?;

        Ok(Self {
            services: raw.services,
            trainers: raw.trainers,
            plans: raw.plans,
            testimonials: raw.testimonials,
            gallery: raw.gallery,
            faqs: raw.faqs,
            nav: SectionRegistry::new(raw.nav)?,
            social: raw.social,
            config: raw.config,
        })
    }
}

fn unique_ids<'a>(table: &'static str, ids: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SiteError::DuplicateId {
                table,
                id: id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let site = SiteData::embedded().unwrap();
        assert_eq!(site.testimonials.len(), 4);
        assert_eq!(site.faqs.len(), 8);
        assert_eq!(site.nav.items().len(), 9);
        assert_eq!(site.nav.anchor(0), Some("home"));
        assert_eq!(site.nav.position("testimonials"), Some(6));
        assert_eq!(site.plans.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_every_service_has_known_category() {
        let site = SiteData::embedded().unwrap();
        for s in &site.services {
            assert!(
                ["training", "wellness", "nutrition"].contains(&s.category.as_str()),
                "{} has category {}",
                s.title,
                s.category
            );
        }
    }

    #[test]
    fn test_initials() {
        let site = SiteData::embedded().unwrap();
        assert_eq!(site.testimonials[0].initials(), "AT");
    }

    fn minimal(testimonials: &str, faqs: &str) -> String {
        format!(
            r##"{{
              "services": [], "trainers": [], "plans": [], "gallery": [], "social": [],
              "testimonials": {testimonials},
              "faqs": {faqs},
              "nav": [{{"label": "Home", "href": "#home"}}]
            }}"##
        )
    }

    #[test]
    fn test_rejects_empty_testimonials() {
        let err = SiteData::from_json(&minimal("[]", "[]")).unwrap_err();
        assert!(matches!(err, SiteError::EmptyCollection("testimonials")));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let t = r#"[{"id":"1","name":"A B","role":"r","content":"c","rating":5,"date":"2024-01-01"}]"#;
        let f = r#"[{"id":"1","question":"q","answer":"a","category":"General"},
                    {"id":"1","question":"q2","answer":"a2","category":"General"}]"#;
        let err = SiteData::from_json(&minimal(t, f)).unwrap_err();
        assert!(matches!(err, SiteError::DuplicateId { table: "faqs", .. }));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let t = r#"[{"id":"1","name":"A B","role":"r","content":"c","rating":5,"date":"2024-01-01"}]"#;
        let site = SiteData::from_json(&minimal(t, "[]")).unwrap();
        assert_eq!(site.config, SiteConfig::default());
    }

    #[test]
    fn test_malformed_json_is_data_error() {
        assert!(matches!(
            SiteData::from_json("{"),
            Err(SiteError::Data(_))
        ));
    }
}
