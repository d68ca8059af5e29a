use leptos::prelude::*;

use crate::components::form_feedback::{bind_field, form_feedback};
use crate::components::nav_bar::NavBar;
use crate::context::{Services, spawn_submit};
use crate::state::form::FormWorkflow;
use crate::state::forms::{CHARITY, ContactForm, EMAIL, MESSAGE, NAME};

#[component]
pub fn ContactPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(FormWorkflow::<ContactForm>::default());
    let (name, set_name) = bind_field(form, NAME);
    let (email, set_email) = bind_field(form, EMAIL);
    let (charity, set_charity) = bind_field(form, CHARITY);
    let (message, set_message) = bind_field(form, MESSAGE);
    let busy = move || form.with(FormWorkflow::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(form, services.clone());
    };

    view! {
        <NavBar/>
        <main class="contact-page">
            <h1>"Contact Us"</h1>
            <p>"Questions about a charity or a donation? Send us a message."</p>
            <form class="contact-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input type="text" prop:value=name on:input=move |ev| set_name(event_target_value(&ev))/>
                </label>
                <label>
                    "Email"
                    <input type="email" prop:value=email on:input=move |ev| set_email(event_target_value(&ev))/>
                </label>
                <label>
                    "Charity"
                    <input type="text" prop:value=charity on:input=move |ev| set_charity(event_target_value(&ev))/>
                </label>
                <label>
                    "Message"
                    <textarea rows="5" prop:value=message on:input=move |ev| set_message(event_target_value(&ev))></textarea>
                </label>
                <button type="submit" disabled=busy>
                    {move || if busy() { "Sending..." } else { "Send Message" }}
                </button>
                {form_feedback(form)}
            </form>
        </main>
    }
}
