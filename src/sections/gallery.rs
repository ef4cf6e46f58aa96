use yew::prelude::*;

use crate::components::{section_title, stat_grid, SiteProps, Stat};
use crate::data::GalleryItem;
use crate::filter;
use crate::motion::stagger;

const GALLERY_STATS: &[Stat] = &[
    Stat { number: "10,000+", label: "Square Feet" },
    Stat { number: "100+", label: "Machines" },
    Stat { number: "50+", label: "Classes Weekly" },
    Stat { number: "24/7", label: "Access" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

#[derive(Properties, PartialEq)]
struct LightboxProps {
    item: GalleryItem,
    on_close: Callback<()>,
}

#[function_component(Lightbox)]
fn lightbox(props: &LightboxProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the panel must not reach the backdrop
    let keep = Callback::from(|e: MouseEvent| e.stop_propagation());
    let item = &props.item;

    html! {
        <div class="lightbox" onclick={close.clone()}>
            <button class="glass round close" onclick={close}>{ "✕" }</button>
            <div class="glass lightbox-panel" onclick={keep}>
                <div class="photo large"></div>
                <div class="lightbox-body">
                    <h3>{ item.title.clone() }</h3>
                    <span class="tag">{ item.category.clone() }</span>
                    <p class="muted">{ item.description.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &SiteProps) -> Html {
    let selected = use_state(|| None::<GalleryItem>);
    let category = use_state(|| filter::ALL.to_string());
    let mode = use_state(|| ViewMode::Grid);

    let items = &props.site.gallery;
    let categories = filter::categories(items, |g| g.category.as_str());
    let shown = filter::apply(items, &category, |g| g.category.as_str());

    let set_mode = |m: ViewMode| {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(m))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id="gallery" class="section">
            <div class="container">
                { section_title(
                    "Gallery",
                    "Showcase",
                    "Take a virtual tour of our state-of-the-art facilities and see the FitZone experience in action.",
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
                    <span class="divider"></span>
                    <button class={classes!("chip", (*mode == ViewMode::Grid).then_some("on"))} onclick={set_mode(ViewMode::Grid)}>{ "▦" }</button>
                    <button class={classes!("chip", (*mode == ViewMode::List).then_some("on"))} onclick={set_mode(ViewMode::List)}>{ "☰" }</button>
                </div>

                <div class={classes!("grid", if *mode == ViewMode::Grid { "cols-3" } else { "cols-1" })}>
                    { for shown.into_iter().enumerate().map(|(i, item)| {
                        let onclick = {
                            let selected = selected.clone();
                            let item = item.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(item.clone())))
                        };
                        html! {
                            <div key={item.id.clone()} class="gallery-item reveal" style={stagger(i, 100)} {onclick}>
                                <div class="photo">
                                    <span class="zoom">{ "🔍" }</span>
                                </div>
                                <div class="gallery-caption">
                                    <h4>{ item.title.clone() }</h4>
                                    <span class="tag">{ item.category.clone() }</span>
                                    <p class="muted small">{ item.description.clone() }</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                { stat_grid(GALLERY_STATS) }
            </div>

            if let Some(item) = (*selected).clone() {
                <Lightbox {item} {on_close} />
            }
        </section>
    }
}
