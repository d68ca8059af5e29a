use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="about-page">
            <h1>"About Us"</h1>
            <p>
                "We connect donors with vetted animal welfare and child support organisations. "
                "Every donation is tracked to your account with a downloadable receipt."
            </p>
        </main>
    }
}
