use gloo::console;
use yew::prelude::*;

use super::{section_title, stars, SiteProps};
use crate::data::Testimonial;
use crate::motion::CardPose;
use crate::selector::{CircularSelector, Direction};

#[derive(Properties, PartialEq)]
struct CardProps {
    testimonial: Testimonial,
    offset: isize,
    on_prev: Callback<MouseEvent>,
    on_next: Callback<MouseEvent>,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &CardProps) -> Html {
    let t = &props.testimonial;
    let active = props.offset == 0;
    let pose = CardPose::for_offset(props.offset);

    let stop = |cb: Callback<MouseEvent>| {
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(e);
        })
    };

    html! {
        <div class="stack-slot" style={pose.style()}>
            <div class={classes!("glass", "testimonial-card", active.then_some("active"))}>
                <div class="quote-mark">{ "❝" }</div>
                { stars(t.rating) }
                <p class="testimonial-text">{ format!("\"{}\"", t.content) }</p>
                <div class="author">
                    <div class="avatar">{ t.initials() }</div>
                    <div>
                        <div class="author-name">{ t.name.clone() }</div>
                        <div class="author-role">{ t.role.clone() }</div>
                    </div>
                </div>
                if active {
                    <div class="card-nav">
                        <button class="glass round" onclick={stop(props.on_prev.clone())}>{ "‹" }</button>
                        <button class="glass round" onclick={stop(props.on_next.clone())}>{ "›" }</button>
                    </div>
                    <div class="card-glow"></div>
                }
            </div>
        </div>
    }
}

#[function_component(CardStack)]
pub fn card_stack(props: &SiteProps) -> Html {
    let testimonials = &props.site.testimonials;

    let selector = {
        let site = props.site.clone();
        use_state(move || {
            CircularSelector::for_items("testimonials", &site.testimonials).unwrap_or_else(|e| {
                console::error!(e.to_string());
                CircularSelector::new(0)
            })
        })
    };

    let step = |dir: Direction| {
        let selector = selector.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *selector;
            next.advance(dir);
            selector.set(next);
        })
    };
    let on_prev = step(Direction::Previous);
    let on_next = step(Direction::Next);

    let on_jump = {
        let selector = selector.clone();
        Callback::from(move |idx: usize| {
            let mut next = *selector;
            match next.jump_to(idx) {
                Ok(true) => selector.set(next),
                Ok(false) => {}
                Err(e) => console::warn!(e.to_string()),
            }
        })
    };

    let body = if selector.active().is_none() {
        html! { <p class="muted center">{ "No testimonials yet." }</p> }
    } else {
        html! {
            <>
                <div class="stack">
                    { for testimonials.iter().enumerate().filter_map(|(i, t)| {
                        let offset = selector.offset_of(i)?;
                        Some(html! {
                            <TestimonialCard
                                key={t.id.clone()}
                                testimonial={t.clone()}
                                {offset}
                                on_prev={on_prev.clone()}
                                on_next={on_next.clone()}
                            />
                        })
                    }) }
                </div>

                <div class="dots">
                    { for (0..selector.len()).map(|i| {
                        let on_jump = on_jump.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_jump.emit(i));
                        html! {
                            <button class={classes!("dot", selector.is_active(i).then_some("active"))} {onclick} />
                        }
                    }) }
                </div>
            </>
        }
    };

    html! {
        <div class="container">
            { section_title(
                "Member",
                "Testimonials",
                "Hear from our members about their transformative fitness journeys at FitZone.",
            ) }
            { body }
        </div>
    }
}
