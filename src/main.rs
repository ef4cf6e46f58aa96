use std::rc::Rc;

use gloo::console;
use yew::prelude::*;

mod components;
mod config;
mod contact;
mod data;
mod disclosure;
mod dom;
mod error;
mod filter;
mod meteors;
mod motion;
mod pricing;
mod scroll_spy;
mod sections;
mod selector;

use components::{CardStack, FeatureCards, FloatingDockNavbar, Footer, MeteorEffect};
use data::SiteData;
use sections::{
    AboutSection, ContactSection, FaqSection, GallerySection, HeroSection, PricingSection,
    ServicesSection, TrainersSection,
};

#[function_component(App)]
fn app() -> Html {
    let site = use_memo((), |_| SiteData::embedded().map(Rc::new));

    let site = match &*site {
        Ok(site) => site.clone(),
        Err(e) => {
            console::error!(format!("failed to load site data: {e}"));
            return html! {
                <main class="load-error">
                    <h1>{ "FitZone" }</h1>
                    <div class="form-error">{ format!("ERROR: {e}") }</div>
                </main>
            };
        }
    };

    html! {
        <div class="page">
            <MeteorEffect count={site.config.meteor_count} />
            <FloatingDockNavbar site={site.clone()} />

            <main>
                <HeroSection />
                <FeatureCards />
                <AboutSection />
                <ServicesSection site={site.clone()} />
                <TrainersSection site={site.clone()} />
                <PricingSection site={site.clone()} />
                <GallerySection site={site.clone()} />
                <section id="testimonials" class="section">
                    <CardStack site={site.clone()} />
                </section>
                <FaqSection site={site.clone()} />
                <ContactSection site={site.clone()} />
            </main>

            <Footer {site} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
