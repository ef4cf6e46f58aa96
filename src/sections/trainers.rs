use yew::prelude::*;

use crate::components::{section_title, stat_grid, SiteProps, Stat};
use crate::motion::stagger;

const TEAM_STATS: &[Stat] = &[
    Stat { number: "50+", label: "Certified Trainers" },
    Stat { number: "15+", label: "Years Experience" },
    Stat { number: "1000+", label: "Happy Clients" },
    Stat { number: "24/7", label: "Support Available" },
];

#[function_component(TrainersSection)]
pub fn trainers_section(props: &SiteProps) -> Html {
    // Tapping a card pins its bio open (hover does the same on desktop)
    let selected = use_state(|| None::<String>);

    html! {
        <section id="trainers" class="section">
            <div class="container">
                <div class="center">
                    <span class="glass pill">{ "👥 Meet Our Expert Team" }</span>
                </div>
                { section_title(
                    "Professional",
                    "Trainers",
                    "Our certified coaches bring years of experience and a genuine passion for helping you succeed.",
                ) }

                <div class="grid cols-4">
                    { for props.site.trainers.iter().enumerate().map(|(i, t)| {
                        let is_open = selected.as_deref() == Some(t.id.as_str());
                        let onclick = {
                            let selected = selected.clone();
                            let id = t.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                if selected.as_deref() == Some(id.as_str()) {
                                    selected.set(None);
                                } else {
                                    selected.set(Some(id.clone()));
                                }
                            })
                        };
                        html! {
                            <div
                                key={t.id.clone()}
                                class={classes!("glass", "card", "trainer-card", "reveal", is_open.then_some("open"))}
                                style={stagger(i, 100)}
                                {onclick}
                            >
                                <div class="portrait">
                                    <span class="portrait-initial">{ t.name.chars().next().map(String::from).unwrap_or_default() }</span>
                                    <span class="rating-badge">{ format!("★ {:.1}", t.rating) }</span>
                                </div>
                                <h3>{ t.name.clone() }</h3>
                                <div class="role">{ t.role.clone() }</div>
                                <div class="muted small">{ format!("{} experience", t.experience) }</div>
                                <div class="trainer-more">
                                    <p class="muted">{ t.bio.clone() }</p>
                                    <div class="tags">
                                        { for t.specialties.iter().map(|s| html! { <span class="tag">{ s.clone() }</span> }) }
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                { stat_grid(TEAM_STATS) }
            </div>
        </section>
    }
}
