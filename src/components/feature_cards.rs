use yew::prelude::*;

use super::section_title;
use crate::motion::stagger;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    points: &'static [&'static str],
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "⭐",
        title: "Expert Trainers",
        description: "Certified professionals dedicated to helping you achieve your fitness goals with personalized guidance.",
        points: &["Certified Professionals", "Personalized Plans", "Progress Tracking"],
    },
    Feature {
        icon: "⚡",
        title: "Modern Equipment",
        description: "State-of-the-art fitness equipment from top brands to ensure effective and safe workouts.",
        points: &["Latest Technology", "Regular Maintenance", "Variety of Machines"],
    },
    Feature {
        icon: "❤️",
        title: "Wellness Focus",
        description: "Holistic approach to health combining physical fitness with mental wellness and nutrition.",
        points: &["Nutrition Plans", "Stress Management", "Recovery Sessions"],
    },
    Feature {
        icon: "🛡️",
        title: "Safe Environment",
        description: "Clean, spacious facility with strict safety protocols and comfortable atmosphere.",
        points: &["Sanitized Regularly", "Spacious Layout", "Emergency Support", "Secure Lockers"],
    },
];

#[function_component(FeatureCards)]
pub fn feature_cards() -> Html {
    html! {
        <section class="section">
            <div class="container">
                { section_title(
                    "Why Choose",
                    "FitZone",
                    "Everything you need to reach your goals, under one roof.",
                ) }
                <div class="grid cols-4">
                    { for FEATURES.iter().enumerate().map(|(i, f)| html! {
                        <div class="glass card feature-card reveal" style={stagger(i, 100)}>
                            <div class="card-glow"></div>
                            <div class="feature-icon">{ f.icon }</div>
                            <h3>{ f.title }</h3>
                            <p class="muted">{ f.description }</p>
                            <ul class="ticks">
                                { for f.points.iter().map(|p| html! { <li>{ *p }</li> }) }
                            </ul>
                            <div class="learn-more">{ "Learn more →" }</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
