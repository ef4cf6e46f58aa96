use yew::prelude::*;

use super::SiteProps;

const QUICK_LINKS: &[&str] = &["Home", "About", "Services", "Contact"];

const SERVICE_LINKS: &[(&str, &str)] = &[
    ("Personal Training", "#services"),
    ("Group Classes", "#services"),
    ("Nutrition Plans", "#services"),
    ("Membership", "#pricing"),
];

#[function_component(Footer)]
pub fn footer(props: &SiteProps) -> Html {
    let quick = props
        .site
        .nav
        .items()
        .iter()
        .filter(|it| QUICK_LINKS.contains(&it.label.as_str()));

    html! {
        <footer class="glass footer">
            <div class="container">
                <div class="grid cols-4">
                    <div>
                        <h3 class="gradient-text brand">{ "FitZone" }</h3>
                        <p class="muted">
                            { "Transform your body, elevate your life. Join the premium fitness experience." }
                        </p>
                    </div>
                    <div>
                        <h4>{ "Quick Links" }</h4>
                        <ul class="links">
                            { for quick.map(|it| html! {
                                <li><a href={it.href.clone()}>{ it.label.clone() }</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{ "Services" }</h4>
                        <ul class="links">
                            { for SERVICE_LINKS.iter().map(|(label, href)| html! {
                                <li><a href={*href}>{ *label }</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{ "Contact Info" }</h4>
                        <ul class="links muted">
                            <li>{ "123 Fitness Street, Gym City" }</li>
                            <li>{ "+1 (555) 123-4567" }</li>
                            <li>{ "info@fitzone.com" }</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom muted">
                    { "© 2024 FitZone. All rights reserved. Made with ❤️ for fitness enthusiasts." }
                </div>
            </div>
        </footer>
    }
}
