use yew::prelude::*;

use crate::dom;
use crate::meteors;

#[derive(Properties, PartialEq)]
pub struct MeteorProps {
    pub count: usize,
}

#[function_component(MeteorEffect)]
pub fn meteor_effect(props: &MeteorProps) -> Html {
    // Positions are rolled once per count, not per render
    let shower = use_memo(props.count, |&n| meteors::generate(n, dom::random));

    html! {
        <div class="meteor-field">
            <div class="bg-gradient bg-shift"></div>
            { for shower.iter().map(|m| html! {
                <div class="meteor" style={m.style()}>
                    <div class="meteor-tail"></div>
                </div>
            }) }
            <div class="bg-grid"></div>
        </div>
    }
}
