use yew::prelude::*;

use crate::components::{section_title, stat_grid, Stat};
use crate::motion::stagger;

const ABOUT_STATS: &[Stat] = &[
    Stat { number: "10+", label: "Years in Business" },
    Stat { number: "15,000+", label: "Happy Members" },
    Stat { number: "50+", label: "Expert Trainers" },
    Stat { number: "100+", label: "Weekly Classes" },
];

// (icon, title, description)
const VALUES: &[(&str, &str, &str)] = &[
    ("🏆", "Excellence", "We strive for excellence in everything we do, from equipment quality to customer service."),
    ("🤝", "Community", "Building a supportive community where everyone feels welcome and motivated."),
    ("🌿", "Wellness", "Promoting holistic wellness that encompasses physical, mental, and emotional health."),
    ("🎯", "Results", "Helping our members achieve real, lasting results through proven methods."),
];

// (year, title, description)
const MILESTONES: &[(&str, &str, &str)] = &[
    ("2014", "FitZone Founded", "Started with a small facility and big dreams to transform fitness in our community."),
    ("2017", "First Expansion", "Expanded to a larger facility with state-of-the-art equipment and more class offerings."),
    ("2020", "Digital Transformation", "Launched virtual training programs and mobile app for remote fitness support."),
    ("2024", "Community Leader", "Recognized as the premier fitness destination with over 15,000 active members."),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section">
            <div class="container">
                { section_title(
                    "About",
                    "FitZone",
                    "For over a decade we have helped our members build strength, confidence and healthy habits that last.",
                ) }

                <div class="grid cols-2 about-intro">
                    <div class="glass card certificate">
                        <div class="cert-head">{ "CERTIFICATE" }</div>
                        <div class="cert-sub">{ "OF ACHIEVEMENT" }</div>
                        <p class="muted">{ "This certifies that" }</p>
                        <div class="cert-name gradient-text">{ "FITZONE GYM" }</div>
                        <p class="muted">{ "has been recognized for excellence in" }</p>
                        <div class="cert-field">{ "FITNESS & WELLNESS" }</div>
                        <div class="cert-foot">
                            <span>{ "Awarded on: January 1, 2024" }</span>
                            <span>{ "Director" }</span>
                        </div>
                    </div>
                    <div>
                        <h3>{ "Our Core Values" }</h3>
                        <div class="grid cols-2">
                            { for VALUES.iter().enumerate().map(|(i, (icon, title, text))| html! {
                                <div class="glass card value reveal" style={stagger(i, 100)}>
                                    <div class="feature-icon">{ *icon }</div>
                                    <h4>{ *title }</h4>
                                    <p class="muted">{ *text }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                { stat_grid(ABOUT_STATS) }

                <h3 class="center">{ "Our Journey" }</h3>
                <div class="timeline">
                    { for MILESTONES.iter().enumerate().map(|(i, (year, title, text))| html! {
                        <div class={classes!("milestone", if i % 2 == 0 { "left" } else { "right" })}>
                            <div class="glass card">
                                <div class="year gradient-text">{ *year }</div>
                                <h4>{ *title }</h4>
                                <p class="muted">{ *text }</p>
                            </div>
                            <div class="milestone-dot"></div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
