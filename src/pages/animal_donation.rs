use leptos::prelude::*;

use crate::components::form_feedback::{bind_field, form_feedback};
use crate::components::nav_bar::NavBar;
use crate::context::{Services, spawn_submit};
use crate::state::form::FormWorkflow;
use crate::state::forms::{AMOUNT, ANIMAL_CHARITIES, AnimalDonationForm, CHARITY, EMAIL, NAME};

#[component]
pub fn AnimalDonationPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(FormWorkflow::<AnimalDonationForm>::default());
    let (name, set_name) = bind_field(form, NAME);
    let (email, set_email) = bind_field(form, EMAIL);
    let (charity, set_charity) = bind_field(form, CHARITY);
    let (amount, set_amount) = bind_field(form, AMOUNT);
    let busy = move || form.with(FormWorkflow::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(form, services.clone());
    };

    view! {
        <NavBar/>
        <main class="donation-page donation-page--animals">
            <h1>"Help Animals in Need"</h1>
            <p>"Choose an animal welfare organisation and make a donation."</p>
            <form class="donation-form" on:submit=on_submit>
                <label>
                    "Your Name"
                    <input type="text" prop:value=name on:input=move |ev| set_name(event_target_value(&ev))/>
                </label>
                <label>
                    "Email"
                    <input type="email" prop:value=email on:input=move |ev| set_email(event_target_value(&ev))/>
                </label>
                <label>
                    "Charity"
                    <select prop:value=charity on:change=move |ev| set_charity(event_target_value(&ev))>
                        <option value="">"Select a charity"</option>
                        {ANIMAL_CHARITIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Amount ($)"
                    <input
                        type="number"
                        min="1"
                        step="0.01"
                        prop:value=amount
                        on:input=move |ev| set_amount(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=busy>
                    {move || if busy() { "Processing..." } else { "Donate Now" }}
                </button>
                {form_feedback(form)}
            </form>
        </main>
    }
}
