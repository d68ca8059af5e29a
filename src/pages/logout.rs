use leptos::prelude::*;

use crate::context::Services;
use crate::state::auth::AuthState;
use crate::state::logout::redirect_to_sign_in;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = RwSignal::new("Logging out...".to_owned());

    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let line = crate::state::logout::perform_logout(&services.guard, &services.api, &services.scheduler).await;
            let _ = status.try_set(line);
            let _ = auth.try_set(AuthState::default());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    view! {
        <main class="logout-page">
            <h1>{move || status.get()}</h1>
            <p>"You will be redirected to the sign-in page shortly."</p>
            <button on:click=move |_| redirect_to_sign_in(services.guard.navigator())>"Go to Login Page"</button>
        </main>
    }
}
