//! Landing page after sign-in.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="home-page">
            <section class="hero-section">
                <h1>"Every Gift Changes a Life"</h1>
                <p>"Support rescued animals and children in need through trusted charities."</p>
            </section>
            <section class="home-page__causes">
                <a class="cause-card" href="/donate/animals">
                    <h2>"Animal Welfare"</h2>
                    <p>"Rescue, shelter and medical care for animals without a voice."</p>
                </a>
                <a class="cause-card" href="/donate/children">
                    <h2>"Child Support"</h2>
                    <p>"Education, healthcare, shelter and family support for children."</p>
                </a>
            </section>
        </main>
    }
}
