use futures::executor::block_on;

use super::*;
use crate::net::types::DonationKind;
use crate::session::navigation::{Navigation, SIGN_IN_PATH};
use crate::testing::{Harness, expired_session, json_response};

const PROFILE_JSON: &str = r#"{"email":"ada@example.com","phoneNumber":"555","animalDonationCount":1,
    "childDonationCount":0,"totalAnimalDonationAmount":25.0,"totalChildDonationAmount":0}"#;

fn record(receipt_url: Option<&str>) -> DonationRecord {
    DonationRecord {
        id: "7".to_owned(),
        kind: DonationKind::Animal,
        charity: "Paws".to_owned(),
        amount: 25.0,
        donor_name: "Ada".to_owned(),
        donor_email: "ada@example.com".to_owned(),
        receipt_url: receipt_url.map(str::to_owned),
    }
}

fn redirected(harness: &Harness) -> bool {
    harness.store.is_empty() && harness.navigator.history() == vec![Navigation::Push(SIGN_IN_PATH.to_owned())]
}

#[test]
fn load_profile_ready_on_success() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(200, PROFILE_JSON));
    let state = block_on(load_profile(&harness.guard, &harness.api));
    let Some(Loadable::Ready(profile)) = state else {
        panic!("expected loaded profile, got {state:?}");
    };
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.animal_donation_count, 1);
}

#[test]
fn load_profile_failure_is_retryable_message() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(500, ""));
    assert_eq!(
        block_on(load_profile(&harness.guard, &harness.api)),
        Some(Loadable::Failed(PROFILE_LOAD_FAILED.to_owned()))
    );
    assert!(harness.navigator.history().is_empty());
}

#[test]
fn load_profile_401_redirects() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(401, ""));
    assert_eq!(block_on(load_profile(&harness.guard, &harness.api)), None);
    assert!(redirected(&harness));
}

#[test]
fn load_history_with_expired_session_makes_no_request() {
    let harness = Harness::new();
    harness.store.save(&expired_session());
    assert_eq!(block_on(load_history(&harness.guard, &harness.api)), None);
    assert_eq!(harness.transport.request_count(), 0);
    assert!(redirected(&harness));
}

#[test]
fn load_history_ready_on_success() {
    let harness = Harness::signed_in();
    harness
        .transport
        .respond(json_response(200, r#"[{"id":1,"type":"Child","charity":"c","amount":10}]"#));
    let state = block_on(load_history(&harness.guard, &harness.api));
    assert!(matches!(state, Some(Loadable::Ready(ref records)) if records.len() == 1));
}

#[test]
fn load_history_unreadable_body_fails() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(200, "not json"));
    assert_eq!(
        block_on(load_history(&harness.guard, &harness.api)),
        Some(Loadable::Failed(HISTORY_LOAD_FAILED.to_owned()))
    );
}

#[test]
fn fetch_receipt_without_url_makes_no_request() {
    let harness = Harness::signed_in();
    assert_eq!(block_on(fetch_receipt(&harness.guard, &harness.api, &record(None))), Err(RECEIPT_MISSING));
    assert_eq!(harness.transport.request_count(), 0);
}

#[test]
fn fetch_receipt_returns_bytes() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(200, "%PDF"));
    let bytes = block_on(fetch_receipt(&harness.guard, &harness.api, &record(Some("/api/donations/receipt/7"))));
    assert_eq!(bytes, Ok(Some(b"%PDF".to_vec())));
}

#[test]
fn fetch_receipt_401_redirects() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(401, ""));
    let result = block_on(fetch_receipt(&harness.guard, &harness.api, &record(Some("/r/7"))));
    assert_eq!(result, Ok(None));
    assert!(redirected(&harness));
}

#[test]
fn fetch_receipt_server_error_is_reported() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(404, ""));
    let result = block_on(fetch_receipt(&harness.guard, &harness.api, &record(Some("/r/7"))));
    assert_eq!(result, Err(RECEIPT_FAILED));
}

#[test]
fn download_receipt_after_redirect_is_ok() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(401, ""));
    let result = block_on(download_receipt(&harness.guard, &harness.api, &record(Some("/r/7"))));
    assert_eq!(result, Ok(()));
}

#[test]
fn fetch_receipt_refuses_foreign_link() {
    let harness = Harness::signed_in();
    let result = block_on(fetch_receipt(&harness.guard, &harness.api, &record(Some("https://attacker.example/r.pdf"))));
    assert_eq!(result, Err(RECEIPT_FAILED));
    assert_eq!(harness.transport.request_count(), 0);
    assert!(harness.navigator.history().is_empty());
}
