use gloo::console;
use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{section_title, SiteProps};
use crate::contact::{ContactForm, Field};
use crate::motion::stagger;

// (icon, title, lines)
const CONTACT_INFO: &[(&str, &str, &[&str])] = &[
    ("📍", "Location", &["123 Fitness Street", "Gym City, GC 12345", "United States"]),
    ("📞", "Phone", &["+1 (555) 123-4567", "+1 (555) 987-6543"]),
    ("✉️", "Email", &["info@fitzone.com", "support@fitzone.com"]),
    ("⏰", "Hours", &["Mon-Fri: 5:00 AM - 11:00 PM", "Sat-Sun: 6:00 AM - 9:00 PM"]),
];

#[function_component(ContactSection)]
pub fn contact_section(props: &SiteProps) -> Html {
    let form = use_state(ContactForm::default);
    let err = use_state(|| None::<String>);
    // Keep the pending timeout alive; dropping it cancels the reset
    let pending = use_mut_ref(|| None::<Timeout>);
    let delay_ms = props.site.config.submit_delay_ms;

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(field) = Field::from_name(&input.name()) else { return; };
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let ta: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(Field::Message, ta.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let err = err.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.begin_submit() {
                Ok(false) => {}
                Ok(true) => {
                    console::log!(format!("contact: sending message from {}", next.email));
                    err.set(None);
                    form.set(next);
                    let form = form.clone();
                    *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                        let mut done = (*form).clone();
                        done.finish_submit();
                        form.set(done);
                        console::log!("contact: message sent");
                    }));
                }
                Err(e) => {
                    console::warn!(format!("contact: {e}"));
                    err.set(Some(e.to_string()));
                }
            }
        })
    };

    let sending = form.is_sending();

    html! {
        <section id="contact" class="section">
            <div class="container">
                { section_title(
                    "Get in",
                    "Touch",
                    "Ready to start your fitness journey? Contact us today and let our team help you achieve your goals.",
                ) }

                <div class="grid cols-2">
                    <div class="glass card">
                        <h3>{ "Send us a Message" }</h3>
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="grid cols-2">
                                <label>
                                    <span>{ "Name *" }</span>
                                    <input type="text" name="name" required=true placeholder="John Doe"
                                        value={form.name.clone()} oninput={on_input.clone()} disabled={sending} />
                                </label>
                                <label>
                                    <span>{ "Email *" }</span>
                                    <input type="email" name="email" required=true placeholder="john@example.com"
                                        value={form.email.clone()} oninput={on_input.clone()} disabled={sending} />
                                </label>
                            </div>
                            <label>
                                <span>{ "Phone" }</span>
                                <input type="tel" name="phone" placeholder="+1 (555) 123-4567"
                                    value={form.phone.clone()} oninput={on_input} disabled={sending} />
                            </label>
                            <label>
                                <span>{ "Message *" }</span>
                                <textarea name="message" rows="5" required=true placeholder="Tell us about your fitness goals..."
                                    value={form.message.clone()} oninput={on_message} disabled={sending} />
                            </label>

                            if let Some(e) = (*err).clone() {
                                <div class="form-error">{ e }</div>
                            }

                            <button type="submit" class="btn primary wide" disabled={sending}>
                                if sending {
                                    <span class="spinner"></span>
                                    { "Sending..." }
                                } else {
                                    { "➤ Send Message" }
                                }
                            </button>
                        </form>
                    </div>

                    <div class="contact-side">
                        { for CONTACT_INFO.iter().enumerate().map(|(i, (icon, title, lines))| html! {
                            <div class="glass card info reveal" style={stagger(i, 100)}>
                                <div class="feature-icon">{ *icon }</div>
                                <div>
                                    <h4>{ *title }</h4>
                                    { for lines.iter().map(|l| html! { <p class="muted">{ *l }</p> }) }
                                </div>
                            </div>
                        }) }

                        <div class="glass card">
                            <h4>{ "Follow Us" }</h4>
                            <div class="socials">
                                { for props.site.social.iter().map(|s| html! {
                                    <a class="glass round social" href={s.url.clone()} title={s.platform.clone()}>
                                        { s.icon.clone() }
                                    </a>
                                }) }
                            </div>
                        </div>

                        <div class="glass card live-chat">
                            <div class="feature-icon pulse">{ "💬" }</div>
                            <div>
                                <h4>{ "Live Chat Available" }</h4>
                                <p class="muted">{ "Get instant answers from our support team" }</p>
                                <button class="btn small accent">{ "Start Chat" }</button>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="glass map-placeholder">
                    <div class="center">
                        <div class="map-pin">{ "📍" }</div>
                        <p>{ "Interactive Map" }</p>
                        <p class="muted">{ "Find us easily at our location" }</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
