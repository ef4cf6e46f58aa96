use yew::prelude::*;

use crate::components::{section_title, stat_grid, SiteProps, Stat};
use crate::disclosure::Disclosure;
use crate::filter;
use crate::motion::stagger;

const FAQ_STATS: &[Stat] = &[
    Stat { number: "24/7", label: "Support" },
    Stat { number: "98%", label: "Satisfaction" },
    Stat { number: "50+", label: "FAQ Topics" },
    Stat { number: "< 1hr", label: "Response Time" },
];

fn icon_for(category: &str) -> &'static str {
    match category {
        "Membership" => "💳",
        "Training" => "💬",
        "Facility" => "🛡️",
        "Classes" => "⏰",
        _ => "❓",
    }
}

#[function_component(FaqSection)]
pub fn faq_section(props: &SiteProps) -> Html {
    let open = use_state(Disclosure::default);
    let category = use_state(|| filter::ALL.to_string());

    let faqs = &props.site.faqs;
    let categories = filter::categories(faqs, |f| f.category.as_str());
    let shown = filter::apply(faqs, &category, |f| f.category.as_str());

    let expand_all = {
        let open = open.clone();
        let ids: Vec<String> = shown.iter().map(|f| f.id.clone()).collect();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*open).clone();
            next.expand_all(ids.iter().map(String::as_str));
            open.set(next);
        })
    };

    let collapse_all = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*open).clone();
            next.collapse_all();
            open.set(next);
        })
    };

    html! {
        <section id="faq" class="section">
            <div class="container narrow">
                <div class="center">
                    <span class="glass pill">{ "❓ Frequently Asked Questions" }</span>
                </div>
                { section_title(
                    "Got",
                    "Questions?",
                    "Find answers to common questions about FitZone memberships, facilities, and services.",
                ) }

                <div class="filter-bar">
                    { for categories.into_iter().map(|c| {
                        let on = *category == c;
                        let onclick = {
                            let category = category.clone();
                            let c = c.clone();
                            Callback::from(move |_: MouseEvent| category.set(c.clone()))
                        };
                        html! {
                            <button class={classes!("chip", "capitalize", on.then_some("on"))} {onclick}>{ c }</button>
                        }
                    }) }
                </div>
                <div class="filter-bar">
                    <button class="chip" onclick={expand_all}>{ "Expand All" }</button>
                    <button class="chip" onclick={collapse_all} disabled={open.open_count() == 0}>{ "Collapse All" }</button>
                </div>

                <div class="faq-list">
                    { for shown.into_iter().enumerate().map(|(i, faq)| {
                        let is_open = open.is_open(&faq.id);
                        let onclick = {
                            let open = open.clone();
                            let id = faq.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*open).clone();
                                next.toggle(&id);
                                open.set(next);
                            })
                        };
                        html! {
                            <div key={faq.id.clone()} class={classes!("glass", "faq-item", "reveal", is_open.then_some("open"))} style={stagger(i, 100)}>
                                <button class="faq-head" {onclick}>
                                    <span class="faq-icon">{ icon_for(&faq.category) }</span>
                                    <span class="faq-q">
                                        <span class="faq-question">{ faq.question.clone() }</span>
                                        <span class="faq-cat">{ faq.category.clone() }</span>
                                    </span>
                                    <span class="chevron">{ "⌄" }</span>
                                </button>
                                if is_open {
                                    <div class="faq-answer">
                                        <p class="muted">{ faq.answer.clone() }</p>
                                    </div>
                                }
                            </div>
                        }
                    }) }
                </div>

                { stat_grid(FAQ_STATS) }

                <div class="glass card center cta">
                    <h3>{ "Still have questions?" }</h3>
                    <p class="muted">{ "Can't find what you're looking for? Our support team is here to help you 24/7." }</p>
                    <div class="hero-cta">
                        <a class="btn primary" href="#contact">{ "Contact Support" }</a>
                        <a class="btn glass" href="#contact">{ "Live Chat" }</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
