use std::rc::Rc;

use yew::prelude::*;

use crate::data::SiteData;

pub mod card_stack;
pub mod feature_cards;
pub mod footer;
pub mod meteor_effect;
pub mod navbar;

pub use card_stack::CardStack;
pub use feature_cards::FeatureCards;
pub use footer::Footer;
pub use meteor_effect::MeteorEffect;
pub use navbar::FloatingDockNavbar;

/// Every section gets the whole site data; they pick what they render.
#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub site: Rc<SiteData>,
}

/// Two-tone heading used at the top of most sections.
pub fn section_title(accent: &str, rest: &str, blurb: &str) -> Html {
    html! {
        <div class="section-head reveal">
            <h2 class="section-title">
                <span class="gradient-text">{ accent.to_string() }</span>
                <span>{ format!(" {rest}") }</span>
            </h2>
            <p class="section-blurb">{ blurb.to_string() }</p>
        </div>
    }
}

pub fn stars(rating: u8) -> Html {
    html! {
        <div class="stars">
            { for (0..5u8).map(|i| html! {
                <span class={classes!("star", (i < rating).then_some("lit"))}>{ "★" }</span>
            }) }
        </div>
    }
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub fn stat_grid(stats: &[Stat]) -> Html {
    html! {
        <div class="stat-grid">
            { for stats.iter().map(|s| html! {
                <div class="glass stat">
                    <div class="stat-number gradient-text">{ s.number }</div>
                    <div class="stat-label">{ s.label }</div>
                </div>
            }) }
        </div>
    }
}
