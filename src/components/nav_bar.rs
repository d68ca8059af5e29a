//! Top navigation shell shown on every content page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let who = move || auth.with(|a| a.display_name().map(str::to_owned));

    view! {
        <nav class="navbar">
            <a href="/home" class="navbar__brand">"GiveHope"</a>
            <ul class="navbar__links">
                <li><a href="/home">"Home"</a></li>
                <li><a href="/about">"About"</a></li>
                <li class="navbar__dropdown">
                    <span>"Donate"</span>
                    <ul class="navbar__dropdown-menu">
                        <li><a href="/donate/animals">"Animal Donation"</a></li>
                        <li><a href="/donate/children">"Children Donation"</a></li>
                    </ul>
                </li>
                <li><a href="/contact">"Contact Us"</a></li>
                <li><a href="/history">"History"</a></li>
                <li class="navbar__dropdown">
                    <span>{move || who().unwrap_or_else(|| "Account".to_owned())}</span>
                    <ul class="navbar__dropdown-menu">
                        <li><a href="/profile">"Profile"</a></li>
                        <li><a href="/logout">"Logout"</a></li>
                    </ul>
                </li>
            </ul>
        </nav>
    }
}
