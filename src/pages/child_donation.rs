use leptos::prelude::*;

use crate::components::form_feedback::{bind_field, form_feedback};
use crate::components::nav_bar::NavBar;
use crate::context::{Services, spawn_submit};
use crate::state::form::FormWorkflow;
use crate::state::forms::{AMOUNT, CHARITY, CHILD_FOCUS_OPTIONS, CHILD_PRESET_AMOUNTS, ChildDonationForm, EMAIL, NAME};

#[component]
pub fn ChildDonationPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(FormWorkflow::<ChildDonationForm>::default());
    let (amount, set_amount) = bind_field(form, AMOUNT);
    let (name, set_name) = bind_field(form, NAME);
    let (email, set_email) = bind_field(form, EMAIL);
    let (focus, set_focus) = bind_field(form, CHARITY);
    let busy = move || form.with(FormWorkflow::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(form, services.clone());
    };

    view! {
        <NavBar/>
        <main class="donation-page donation-page--children">
            <h1>"Support a Child's Future"</h1>
            <p>"Your gift funds education, healthcare and safe shelter for children."</p>
            <form class="donation-form" on:submit=on_submit>
                <div class="amount-presets">
                    {CHILD_PRESET_AMOUNTS
                        .iter()
                        .map(|preset| {
                            let preset = *preset;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if amount() == preset { "amount-preset amount-preset--active" } else { "amount-preset" }
                                    }
                                    on:click=move |_| set_amount(preset.to_owned())
                                >
                                    {format!("${preset}")}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <label>
                    "Custom Amount ($)"
                    <input
                        type="number"
                        min="1"
                        step="0.01"
                        prop:value=amount
                        on:input=move |ev| set_amount(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Your Name"
                    <input type="text" prop:value=name on:input=move |ev| set_name(event_target_value(&ev))/>
                </label>
                <label>
                    "Email"
                    <input type="email" prop:value=email on:input=move |ev| set_email(event_target_value(&ev))/>
                </label>
                <label>
                    "Donation Focus"
                    <select prop:value=focus on:change=move |ev| set_focus(event_target_value(&ev))>
                        <option value="">"Select a focus"</option>
                        {CHILD_FOCUS_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" disabled=busy>
                    {move || if busy() { "Processing..." } else { "Donate Now" }}
                </button>
                {form_feedback(form)}
            </form>
        </main>
    }
}
