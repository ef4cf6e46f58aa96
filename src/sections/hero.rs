use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::components::{stat_grid, Stat};
use crate::dom::{self, DomViewport};
use crate::motion::Parallax;
use crate::scroll_spy::Viewport;

const HERO_STATS: &[Stat] = &[
    Stat { number: "10K+", label: "Members" },
    Stat { number: "50+", label: "Expert Trainers" },
    Stat { number: "100+", label: "Classes Weekly" },
    Stat { number: "4.9", label: "Average Rating" },
];

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let scroll_y = use_state(|| 0.0f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "scroll", move |_| scroll_y.set(DomViewport.scroll_y()))
            });
            move || drop(listener)
        });
    }

    let p = Parallax::at(*scroll_y);
    let go = |href: &'static str| Callback::from(move |_: MouseEvent| dom::scroll_to_anchor(href));

    html! {
        <section id="home" class="hero">
            <div class="hero-layer" style={format!("transform: translateY({}px);", p.back_y)}>
                <div class="hero-tint"></div>
            </div>
            <div class="hero-layer" style={format!("transform: translateY({}px);", p.front_y)}>
                <div class="blob blob-a"></div>
                <div class="blob blob-b"></div>
                <div class="blob blob-c"></div>
            </div>

            <div class="hero-content stagger-children" style={format!("opacity: {};", p.content_opacity)}>
                <div class="glass pill">
                    <span class="star lit">{ "★" }</span>
                    <span>{ "Premium Fitness Experience" }</span>
                </div>
                <h1 class="hero-title">
                    <span class="gradient-text">{ "Transform Your Body" }</span>
                    <br />
                    <span>{ "Elevate Your Life" }</span>
                </h1>
                <p class="hero-sub">
                    { "Join FitZone and discover world-class trainers, modern equipment and a community that keeps you moving." }
                </p>
                <div class="hero-cta">
                    <button class="btn primary" onclick={go("#pricing")}>{ "Start Your Journey →" }</button>
                    <button class="btn glass" onclick={go("#gallery")}>{ "▶ Watch Tour" }</button>
                </div>
                { stat_grid(HERO_STATS) }
            </div>

            <div class="scroll-hint">
                <div class="scroll-dot"></div>
            </div>
        </section>
    }
}
