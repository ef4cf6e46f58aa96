use yew::prelude::*;

use crate::components::{section_title, SiteProps};
use crate::pricing::{price_label, BillingCycle};

const PERKS: &[(&str, &str, &str)] = &[
    ("🛡️", "No Hidden Fees", "Transparent pricing with no surprises"),
    ("⚡", "Cancel Anytime", "No long-term commitments required"),
    ("⭐", "Premium Support", "Dedicated support for all members"),
];

#[function_component(PricingSection)]
pub fn pricing_section(props: &SiteProps) -> Html {
    let cycle = use_state(BillingCycle::default);
    let discount = props.site.config.yearly_discount_pct;

    let pick = |c: BillingCycle| {
        let cycle = cycle.clone();
        Callback::from(move |_: MouseEvent| cycle.set(c))
    };

    html! {
        <section id="pricing" class="section">
            <div class="container">
                { section_title(
                    "Membership",
                    "Plans",
                    "Choose the perfect plan that fits your fitness goals and budget. All plans include access to our premium facilities.",
                ) }

                <div class="center">
                    <div class="glass toggle">
                        <button
                            class={classes!("toggle-btn", (*cycle == BillingCycle::Monthly).then_some("on"))}
                            onclick={pick(BillingCycle::Monthly)}
                        >
                            { BillingCycle::Monthly.label() }
                        </button>
                        <button
                            class={classes!("toggle-btn", (*cycle == BillingCycle::Yearly).then_some("on"))}
                            onclick={pick(BillingCycle::Yearly)}
                        >
                            { BillingCycle::Yearly.label() }
                            <span class="save">{ format!("Save {discount}%") }</span>
                        </button>
                    </div>
                </div>

                <div class="grid cols-3 plans">
                    { for props.site.plans.iter().map(|plan| html! {
                        <div key={plan.id.clone()} class={classes!("glass", "card", "plan", plan.popular.then_some("popular"))}>
                            if plan.popular {
                                <div class="popular-badge">{ "Most Popular" }</div>
                            }
                            <h3>{ plan.name.clone() }</h3>
                            <p class="muted">{ plan.description.clone() }</p>
                            <div class="plan-price">
                                <span class="amount gradient-text">{ price_label(plan, *cycle, discount) }</span>
                                <span class="period">{ cycle.period() }</span>
                            </div>
                            <ul class="ticks">
                                { for plan.features.iter().map(|f| html! { <li>{ f.clone() }</li> }) }
                            </ul>
                            <a class={classes!("btn", if plan.popular { "primary" } else { "glass" })} href="#contact">
                                { "Get Started" }
                            </a>
                        </div>
                    }) }
                </div>

                <div class="grid cols-3 perks">
                    { for PERKS.iter().map(|(icon, title, text)| html! {
                        <div class="perk">
                            <div class="feature-icon">{ *icon }</div>
                            <h4>{ *title }</h4>
                            <p class="muted">{ *text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
