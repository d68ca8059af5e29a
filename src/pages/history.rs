//! Donation history page with per-row receipt downloads.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::context::Services;
use crate::net::types::{DonationKind, DonationRecord, HistorySummary};
use crate::state::account::Loadable;
use crate::util::currency::format_inr;

fn spawn_history_load(history: RwSignal<Loadable<Vec<DonationRecord>>>, services: Services) {
    history.set(Loadable::Loading);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(state) = crate::state::account::load_history(&services.guard, &services.api).await {
            let _ = history.try_set(state);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = services;
    }
}

fn spawn_receipt_download(
    record: DonationRecord,
    downloading: RwSignal<Option<String>>,
    notice: RwSignal<Option<String>>,
    services: Services,
) {
    if downloading.get_untracked().is_some() {
        return;
    }
    downloading.set(Some(record.id.clone()));
    notice.set(None);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::state::account::download_receipt(&services.guard, &services.api, &record).await;
        let _ = downloading.try_set(None);
        if let Err(message) = result {
            let _ = notice.try_set(Some(message.to_owned()));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (record, services);
        downloading.set(None);
    }
}

fn kind_label(kind: DonationKind) -> &'static str {
    match kind {
        DonationKind::Animal => "Animal",
        DonationKind::Child => "Child",
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let history = RwSignal::new(Loadable::<Vec<DonationRecord>>::Loading);
    let downloading = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let reload = {
        let services = services.clone();
        Callback::new(move |()| spawn_history_load(history, services.clone()))
    };
    reload.run(());

    let rows = move |records: Vec<DonationRecord>| {
        let services = services.clone();
        records
            .into_iter()
            .map(move |record| {
                let id = record.id.clone();
                let has_receipt = record.receipt_url.is_some();
                let busy = Memo::new(move |_| downloading.with(|d| d.as_deref() == Some(id.as_str())));
                let services = services.clone();
                let kind = kind_label(record.kind);
                let charity = record.charity.clone();
                let amount = format_inr(record.amount);
                let id_label = format!("#{}", record.id);
                let donor_name = record.donor_name.clone();
                let donor_email = record.donor_email.clone();
                view! {
                    <tr class=format!("donation-row {}-type", kind.to_lowercase())>
                        <td class="donation-id">{id_label}</td>
                        <td class="donation-type">{kind}</td>
                        <td class="charity-name">{charity}</td>
                        <td class="donation-amount">{amount}</td>
                        <td class="donor-name">
                            <span class="donor-title">{donor_name}</span>
                            <span class="donor-email">{donor_email}</span>
                        </td>
                        <td class="donation-actions">
                            <button
                                class="receipt-button"
                                disabled=move || !has_receipt || busy.get()
                                on:click=move |_| {
                                    spawn_receipt_download(record.clone(), downloading, notice, services.clone());
                                }
                            >
                                {move || if busy.get() { "Downloading..." } else { "Download Receipt" }}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <NavBar/>
        <main class="history-page">
            <h1>"Donation History"</h1>
            {move || notice.get().map(|message| view! { <p class="error-message" role="alert">{message}</p> })}
            {move || match history.get() {
                Loadable::Loading => view! { <p class="loading">"Loading donation history..."</p> }.into_any(),
                Loadable::Failed(message) => {
                    view! {
                        <div class="error-message">
                            <p>{message}</p>
                            <button on:click=move |_| reload.run(())>"Retry"</button>
                        </div>
                    }
                        .into_any()
                }
                Loadable::Ready(records) if records.is_empty() => {
                    view! {
                        <div class="no-donations">
                            <p>"You haven't made any donations yet."</p>
                            <a href="/donate/animals">"Make your first donation"</a>
                        </div>
                    }
                        .into_any()
                }
                Loadable::Ready(records) => {
                    let summary = HistorySummary::from_records(&records);
                    view! {
                        <section class="history-summary">
                            <div class="summary-card">
                                <h3>"Total Donations"</h3>
                                <p>{summary.count}</p>
                            </div>
                            <div class="summary-card">
                                <h3>"Total Amount"</h3>
                                <p>{format_inr(summary.total_amount)}</p>
                            </div>
                            <div class="summary-card">
                                <h3>"Animal Donations"</h3>
                                <p>{summary.animal_count}</p>
                            </div>
                            <div class="summary-card">
                                <h3>"Child Donations"</h3>
                                <p>{summary.child_count}</p>
                            </div>
                        </section>
                        <table class="donations-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Type"</th>
                                    <th>"Charity"</th>
                                    <th>"Amount"</th>
                                    <th>"Donor"</th>
                                    <th>"Receipt"</th>
                                </tr>
                            </thead>
                            <tbody>{rows(records)}</tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
