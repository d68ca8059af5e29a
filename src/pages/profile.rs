//! Profile page: contact details and donation statistics.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::context::Services;
use crate::net::types::ProfileSummary;
use crate::state::account::Loadable;
use crate::util::currency::{format_count, format_inr};

fn spawn_profile_load(profile: RwSignal<Loadable<ProfileSummary>>, services: Services) {
    profile.set(Loadable::Loading);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(state) = crate::state::account::load_profile(&services.guard, &services.api).await {
            let _ = profile.try_set(state);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = services;
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = expect_context::<Services>();
    let profile = RwSignal::new(Loadable::<ProfileSummary>::Loading);
    let reload = Callback::new(move |()| spawn_profile_load(profile, services.clone()));
    reload.run(());

    view! {
        <NavBar/>
        <main class="profile-page">
            <h1>"My Profile"</h1>
            {move || match profile.get() {
                Loadable::Loading => view! { <p class="loading">"Loading profile..."</p> }.into_any(),
                Loadable::Failed(message) => {
                    view! {
                        <div class="error-message">
                            <p>{message}</p>
                            <button on:click=move |_| reload.run(())>"Retry"</button>
                        </div>
                    }
                        .into_any()
                }
                Loadable::Ready(summary) => profile_details(&summary).into_any(),
            }}
        </main>
    }
}

fn profile_details(summary: &ProfileSummary) -> impl IntoView + use<> {
    let phone = summary.phone_number.clone().unwrap_or_else(|| "Not provided".to_owned());
    let rows = [
        ("Animal Donations", summary.animal_donation_count, summary.total_animal_donation_amount, summary.animal_average()),
        ("Child Donations", summary.child_donation_count, summary.total_child_donation_amount, summary.child_average()),
        ("All Donations", summary.total_count(), summary.total_amount(), summary.overall_average()),
    ];

    view! {
        <section class="profile-card">
            <p><strong>"Email: "</strong>{summary.email.clone()}</p>
            <p><strong>"Phone: "</strong>{phone}</p>
        </section>
        <table class="profile-stats">
            <thead>
                <tr>
                    <th>"Category"</th>
                    <th>"Donations"</th>
                    <th>"Total"</th>
                    <th>"Average"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|(label, count, total, average)| {
                        view! {
                            <tr>
                                <td>{label}</td>
                                <td>{format_count(count)}</td>
                                <td>{format_inr(total)}</td>
                                <td>{format_inr(average)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
