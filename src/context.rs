//! Browser service bundle provided to every page through Leptos context.

use leptos::prelude::RwSignal;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::session::clock::SystemClock;
use crate::session::guard::SessionGuard;
use crate::session::navigation::BrowserNavigator;
use crate::session::store::BrowserTokenStore;
use crate::state::form::{FormKind, FormWorkflow};
use crate::util::schedule::BrowserScheduler;

pub type BrowserGuard = SessionGuard<BrowserTokenStore, BrowserNavigator, SystemClock>;
pub type BrowserApi = ApiClient<BrowserTransport>;

#[derive(Clone, Debug)]
pub struct Services {
    pub guard: BrowserGuard,
    pub api: BrowserApi,
    pub scheduler: BrowserScheduler,
}

impl Services {
    pub fn browser() -> Self {
        Self {
            guard: SessionGuard::new(BrowserTokenStore, BrowserNavigator, SystemClock),
            api: ApiClient::new(ApiConfig::from_build_env(), BrowserTransport),
            scheduler: BrowserScheduler,
        }
    }
}

/// Start a submission of `form` on the browser task queue.
pub fn spawn_submit<K: FormKind>(form: RwSignal<FormWorkflow<K>>, services: Services) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let _ = crate::state::form::submit(&form, &services.guard, &services.api, &services.scheduler).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, services);
    }
}
