//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::context::Services;
use crate::pages::{
    about::AboutPage, animal_donation::AnimalDonationPage, auth::AuthPage, child_donation::ChildDonationPage,
    contact::ContactPage, history::HistoryPage, home::HomePage, logout::LogoutPage, profile::ProfilePage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the browser services and the signed-in user, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::browser();
    let auth = RwSignal::new(AuthState::default());

    // The token store is only readable in the browser.
    Effect::new({
        let guard = services.guard.clone();
        move |_| auth.set(AuthState::from_session(guard.current().as_ref()))
    });

    provide_context(services);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/donation-client.css"/>
        <Title text="GiveHope"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
                <Route path=StaticSegment("login") view=AuthPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=(StaticSegment("donate"), StaticSegment("animals")) view=AnimalDonationPage/>
                <Route path=(StaticSegment("donate"), StaticSegment("children")) view=ChildDonationPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
            </Routes>
        </Router>
    }
}
