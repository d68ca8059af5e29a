//! Sign-in / sign-up page with a panel toggle.

use leptos::prelude::*;

use crate::components::form_feedback::{bind_field, form_feedback};
use crate::context::{Services, spawn_submit};
use crate::state::form::FormWorkflow;
use crate::state::forms::{EMAIL, PASSWORD, PHONE_NUMBER, SignInForm, SignUpForm};

#[component]
pub fn AuthPage() -> impl IntoView {
    let sign_up_active = RwSignal::new(false);

    view! {
        <div class="auth-page">
            <div class=move || if sign_up_active.get() { "auth-container active" } else { "auth-container" }>
                <SignUpPanel/>
                <SignInPanel/>
                <div class="toggle-panel">
                    <Show
                        when=move || sign_up_active.get()
                        fallback=move || view! {
                            <h1>"Hello, Friend!"</h1>
                            <p>"Register with your personal details to start giving."</p>
                            <button class="hidden-button" on:click=move |_| sign_up_active.set(true)>"Sign Up"</button>
                        }
                    >
                        <h1>"Welcome Back!"</h1>
                        <p>"Enter your personal details to continue."</p>
                        <button class="hidden-button" on:click=move |_| sign_up_active.set(false)>"Sign In"</button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SignInPanel() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(FormWorkflow::<SignInForm>::default());
    let (email, set_email) = bind_field(form, EMAIL);
    let (password, set_password) = bind_field(form, PASSWORD);
    let busy = move || form.with(FormWorkflow::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(form, services.clone());
    };

    view! {
        <div class="form-container sign-in">
            <form on:submit=on_submit>
                <h1>"Sign In"</h1>
                <span>"or use your email password"</span>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| set_email(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| set_password(event_target_value(&ev))
                />
                <button type="submit" disabled=busy>
                    {move || if busy() { "Signing In..." } else { "Sign In" }}
                </button>
                {form_feedback(form)}
            </form>
        </div>
    }
}

#[component]
fn SignUpPanel() -> impl IntoView {
    let services = expect_context::<Services>();
    let form = RwSignal::new(FormWorkflow::<SignUpForm>::default());
    let (email, set_email) = bind_field(form, EMAIL);
    let (password, set_password) = bind_field(form, PASSWORD);
    let (phone, set_phone) = bind_field(form, PHONE_NUMBER);
    let busy = move || form.with(FormWorkflow::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(form, services.clone());
    };

    view! {
        <div class="form-container sign-up">
            <form on:submit=on_submit>
                <h1>"Create Account"</h1>
                <span>"or use your email for registration"</span>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| set_email(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| set_password(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Phone Number"
                    prop:value=phone
                    on:input=move |ev| set_phone(event_target_value(&ev))
                />
                <button type="submit" disabled=busy>"Sign Up"</button>
                {form_feedback(form)}
            </form>
        </div>
    }
}
