use yew::prelude::*;

use crate::components::{section_title, SiteProps};
use crate::filter;
use crate::motion::stagger;

const CATEGORIES: &[(&str, &str)] = &[
    (filter::ALL, "All Services"),
    ("training", "Training"),
    ("wellness", "Wellness"),
    ("nutrition", "Nutrition"),
];

#[function_component(ServicesSection)]
pub fn services_section(props: &SiteProps) -> Html {
    let active = use_state(|| filter::ALL.to_string());

    let shown = filter::apply(&props.site.services, &active, |s| s.category.as_str());

    html! {
        <section id="services" class="section">
            <div class="container">
                { section_title(
                    "Premium",
                    "Services",
                    "From one-on-one coaching to nutrition and recovery, pick the support that fits your goals.",
                ) }

                <div class="filter-bar">
                    { for CATEGORIES.iter().map(|(id, label)| {
                        let onclick = {
                            let active = active.clone();
                            let id = id.to_string();
                            Callback::from(move |_: MouseEvent| active.set(id.clone()))
                        };
                        html! {
                            <button class={classes!("chip", (*active == *id).then_some("on"))} {onclick}>
                                { *label }
                            </button>
                        }
                    }) }
                </div>

                <div class="grid cols-3">
                    { for shown.into_iter().enumerate().map(|(i, s)| html! {
                        <div key={s.id.clone()} class="glass card service-card reveal" style={stagger(i, 100)}>
                            <div class="service-icon">{ s.icon.clone() }</div>
                            <h3>{ s.title.clone() }</h3>
                            <p class="muted">{ s.description.clone() }</p>
                            <ul class="ticks">
                                { for s.features.iter().map(|f| html! { <li>{ f.clone() }</li> }) }
                            </ul>
                            <div class="card-foot">
                                <span class="price gradient-text">{ s.price.clone() }</span>
                                <a class="btn small primary" href="#contact">{ "Get Started" }</a>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
