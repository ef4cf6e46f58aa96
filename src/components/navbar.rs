use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use super::SiteProps;
use crate::data::SiteData;
use crate::dom::{self, DomViewport};
use crate::scroll_spy::ScrollSpy;

#[derive(Clone, PartialEq)]
struct NavState {
    site: Rc<SiteData>,
    spy: ScrollSpy,
}

enum NavAction {
    Sample,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Sample => {
                let mut spy = self.spy;
                if !spy.observe(&self.site.nav, &DomViewport) {
                    return self;
                }
                Rc::new(NavState {
                    site: self.site.clone(),
                    spy,
                })
            }
        }
    }
}

fn icon_for(label: &str) -> &'static str {
    match label {
        "Home" => "🏠",
        "About" => "ℹ️",
        "Services" | "Trainers" => "👥",
        "Pricing" => "💲",
        "Gallery" => "🖼️",
        "Testimonials" => "💬",
        "FAQ" => "❓",
        "Contact" => "📞",
        _ => "🏠",
    }
}

#[function_component(FloatingDockNavbar)]
pub fn floating_dock_navbar(props: &SiteProps) -> Html {
    let state = {
        let site = props.site.clone();
        use_reducer(move || NavState {
            spy: ScrollSpy::new(&site.config),
            site,
        })
    };
    let menu_open = use_state(|| false);

    // Sample once on mount (restored scroll, deep links), then on every
    // scroll and resize tick
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.dispatch(NavAction::Sample);
            let listeners = window().map(|w| {
                let on_scroll = {
                    let state = state.clone();
                    EventListener::new(&w, "scroll", move |_| state.dispatch(NavAction::Sample))
                };
                let on_resize = EventListener::new(&w, "resize", move |_| {
                    state.dispatch(NavAction::Sample)
                });
                (on_scroll, on_resize)
            });
            move || drop(listeners)
        });
    }

    let on_nav = {
        let menu_open = menu_open.clone();
        Callback::from(move |href: String| {
            dom::scroll_to_anchor(&href);
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let registry = &props.site.nav;
    let spy = state.spy;
    let current = spy.active_anchor(registry);

    let dock_items = registry.items().iter().map(|item| {
        let active = item.anchor() == current;
        let onclick = {
            let on_nav = on_nav.clone();
            let href = item.href.clone();
            Callback::from(move |_: MouseEvent| on_nav.emit(href.clone()))
        };
        html! {
            <div class="dock-item">
                <button class={classes!("dock-btn", active.then_some("active"))} {onclick}>
                    <span class="icon">{ icon_for(&item.label) }</span>
                    <span class="tooltip">{ item.label.clone() }</span>
                </button>
                if active {
                    <div class="dock-pulse"></div>
                }
            </div>
        }
    });

    let menu_items = registry.items().iter().enumerate().map(|(i, item)| {
        let active = item.anchor() == current;
        let onclick = {
            let on_nav = on_nav.clone();
            let href = item.href.clone();
            Callback::from(move |_: MouseEvent| on_nav.emit(href.clone()))
        };
        html! {
            <button
                class={classes!("menu-item", active.then_some("active"))}
                style={crate::motion::stagger(i, 100)}
                {onclick}
            >
                <span class="icon">{ icon_for(&item.label) }</span>
                <span>{ item.label.clone() }</span>
            </button>
        }
    });

    html! {
        <>
            <nav class="dock">
                <div class="glass dock-bar">
                    { for dock_items }
                </div>
            </nav>

            <nav class={classes!("mobile-nav", spy.scrolled().then_some("glass"))}>
                <div class="mobile-bar">
                    <div class="brand gradient-text">{ "FitZone" }</div>
                    <button class="glass menu-toggle" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
                if *menu_open {
                    <div class="glass mobile-menu">
                        { for menu_items }
                    </div>
                }
            </nav>
        </>
    }
}
