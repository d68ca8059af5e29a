use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::session::navigation::{HOME_PATH, Navigation, SIGN_IN_PATH};
use crate::state::forms::{
    AMOUNT, AnimalDonationForm, CHARITY, ContactForm, EMAIL, INVALID_AMOUNT, MESSAGE, NAME, PASSWORD, SignInForm,
};
use crate::testing::{Harness, NOW, expired_session, json_response, token_with_exp};

type Handle<K> = Rc<RefCell<FormWorkflow<K>>>;

fn form_with<K: FormKind>(values: &[(&str, &str)]) -> Handle<K> {
    let mut wf = FormWorkflow::<K>::default();
    for (name, value) in values {
        wf.edit(name, (*value).to_owned());
    }
    Rc::new(RefCell::new(wf))
}

fn run<K: FormKind>(form: &Handle<K>, harness: &Harness) -> Option<FormStatus> {
    block_on(submit::<K, _, _, _, _, _, _>(form, &harness.guard, &harness.api, &harness.scheduler))
}

fn animal_form(amount: &str) -> Handle<AnimalDonationForm> {
    form_with(&[
        (NAME, "Ada"),
        (EMAIL, "ada@example.com"),
        (CHARITY, "Paws & Hearts Animal Rescue"),
        (AMOUNT, amount),
    ])
}

fn contact_form() -> Handle<ContactForm> {
    form_with(&[
        (NAME, "Ada"),
        (EMAIL, "ada@example.com"),
        (CHARITY, "Paws"),
        (MESSAGE, "Hello"),
    ])
}

#[test]
fn default_workflow_is_idle_with_empty_fields() {
    let wf = FormWorkflow::<ContactForm>::default();
    assert_eq!(wf.status(), FormStatus::Idle);
    assert_eq!(wf.message(), None);
    assert_eq!(wf.state().fields.len(), ContactForm::FIELDS.len());
    assert!(wf.state().fields.values().all(String::is_empty));
}

#[test]
fn edit_ignores_unknown_fields() {
    let mut wf = FormWorkflow::<ContactForm>::default();
    wf.edit("nickname", "x".to_owned());
    assert_eq!(wf.field("nickname"), "");
    assert!(!wf.state().fields.contains_key("nickname"));
}

#[test]
fn edit_is_ignored_while_submitting() {
    let form = contact_form();
    assert!(matches!(form.borrow_mut().begin_submit(), Submit::Started(_)));
    form.borrow_mut().edit(NAME, "Grace".to_owned());
    assert_eq!(form.borrow().field(NAME), "Ada");
}

#[test]
fn edit_clears_displayed_result() {
    let mut wf = FormWorkflow::<ContactForm>::default();
    let _ = wf.begin_submit();
    assert_eq!(wf.status(), FormStatus::Error);
    wf.edit(NAME, "Ada".to_owned());
    assert_eq!(wf.status(), FormStatus::Idle);
    assert_eq!(wf.message(), None);
}

#[test]
fn invalid_amount_never_calls_api() {
    for amount in ["0", "-5", "abc", "0.00"] {
        let harness = Harness::signed_in();
        let form = animal_form(amount);
        assert_eq!(run(&form, &harness), Some(FormStatus::Error));
        assert_eq!(harness.transport.request_count(), 0, "amount {amount:?}");
        assert_eq!(form.borrow().message(), Some(INVALID_AMOUNT));
    }
}

#[test]
fn validation_error_reverts_after_display_time() {
    let harness = Harness::signed_in();
    let form = animal_form("0");
    run(&form, &harness);
    assert_eq!(harness.scheduler.delays(), vec![AnimalDonationForm::DISPLAY_FOR]);
    harness.scheduler.run_all();
    assert_eq!(form.borrow().status(), FormStatus::Idle);
    assert_eq!(form.borrow().field(AMOUNT), "0");
}

#[test]
fn submit_while_submitting_is_a_no_op() {
    let harness = Harness::signed_in();
    let form = animal_form("25");
    assert!(matches!(form.borrow_mut().begin_submit(), Submit::Started(_)));
    assert_eq!(run(&form, &harness), Some(FormStatus::Submitting));
    assert_eq!(harness.transport.request_count(), 0);
    assert_eq!(harness.scheduler.pending(), 0);
}

#[test]
fn success_resets_fields_then_reverts_to_idle() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(200, r#"{"message":"saved"}"#));
    let form = animal_form("25");

    assert_eq!(run(&form, &harness), Some(FormStatus::Success));
    assert_eq!(harness.transport.request_count(), 1);
    {
        let wf = form.borrow();
        assert_eq!(wf.status(), FormStatus::Success);
        assert!(wf.state().fields.values().all(String::is_empty));
        assert_eq!(
            wf.message(),
            Some("Thank you Ada! Your donation of $25.00 to Paws & Hearts Animal Rescue has been processed successfully.")
        );
    }

    assert_eq!(harness.scheduler.delays(), vec![AnimalDonationForm::DISPLAY_FOR]);
    harness.scheduler.run_all();
    assert_eq!(form.borrow().status(), FormStatus::Idle);
    assert_eq!(form.borrow().message(), None);
}

#[test]
fn stale_revert_does_not_touch_newer_state() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(200, ""));
    let form = animal_form("25");
    run(&form, &harness);

    form.borrow_mut().edit(NAME, "Grace".to_owned());
    let _ = form.borrow_mut().begin_submit();
    assert_eq!(form.borrow().status(), FormStatus::Error);

    // The success timer fires while the newer validation error is showing.
    let tasks = harness.scheduler.pending();
    assert_eq!(tasks, 1);
    harness.scheduler.run_all();
    assert_eq!(form.borrow().status(), FormStatus::Error);
    assert_eq!(form.borrow().field(NAME), "Grace");
}

#[test]
fn server_error_keeps_fields_and_shows_message() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(400, r#"{"message":"Charity not found"}"#));
    let form = animal_form("25");

    assert_eq!(run(&form, &harness), Some(FormStatus::Error));
    let wf = form.borrow();
    assert_eq!(wf.message(), Some("Charity not found"));
    assert_eq!(wf.field(AMOUNT), "25");
    assert_eq!(wf.field(NAME), "Ada");
    assert!(harness.navigator.history().is_empty());
}

#[test]
fn unauthorized_response_clears_session_and_redirects() {
    let harness = Harness::signed_in();
    harness.transport.respond(json_response(401, ""));
    let form = animal_form("25");

    assert_eq!(run(&form, &harness), None);
    assert!(harness.store.is_empty());
    assert_eq!(harness.navigator.history(), vec![Navigation::Push(SIGN_IN_PATH.to_owned())]);
    assert_eq!(form.borrow().status(), FormStatus::Idle);
}

#[test]
fn expired_session_blocks_call_and_redirects() {
    let harness = Harness::new();
    harness.store.save(&expired_session());
    let form = animal_form("25");

    assert_eq!(run(&form, &harness), None);
    assert_eq!(harness.transport.request_count(), 0);
    assert!(harness.store.is_empty());
    assert_eq!(harness.navigator.history(), vec![Navigation::Push(SIGN_IN_PATH.to_owned())]);
    assert!(!form.borrow().is_submitting());
}

#[test]
fn anonymous_form_does_not_need_a_session() {
    let harness = Harness::new();
    harness.transport.respond(json_response(200, "Message received"));
    let form = contact_form();

    assert_eq!(run(&form, &harness), Some(FormStatus::Success));
    assert_eq!(harness.transport.requests()[0].bearer, None);
    assert!(harness.navigator.history().is_empty());
}

#[test]
fn unreachable_server_uses_form_failure_message() {
    let harness = Harness::new();
    harness.transport.fail("connection refused");
    let form = contact_form();

    assert_eq!(run(&form, &harness), Some(FormStatus::Error));
    assert_eq!(form.borrow().message(), Some("Error connecting to server. Please try again later."));
}

#[test]
fn sign_in_stores_session_and_redirects_home_after_delay() {
    let harness = Harness::new();
    let token = token_with_exp(NOW + 3600);
    harness
        .transport
        .respond(json_response(200, &format!(r#"{{"token":"{token}","name":"Ada"}}"#)));
    let form = form_with::<SignInForm>(&[(EMAIL, "ada@example.com"), (PASSWORD, "pw")]);

    assert_eq!(run(&form, &harness), Some(FormStatus::Success));
    let stored = harness.guard.current().expect("session stored");
    assert_eq!(stored.token, token);
    assert_eq!(stored.subject_email, "ada@example.com");
    assert_eq!(stored.user_name.as_deref(), Some("Ada"));
    assert!(harness.navigator.history().is_empty());

    assert!(harness.scheduler.delays().contains(&Duration::from_secs(1)));
    harness.scheduler.run_all();
    assert_eq!(harness.navigator.history(), vec![Navigation::Push(HOME_PATH.to_owned())]);
}

#[test]
fn sign_in_rejection_does_not_redirect() {
    let harness = Harness::new();
    harness.transport.respond(json_response(401, r#"{"message":"Invalid credentials"}"#));
    let form = form_with::<SignInForm>(&[(EMAIL, "ada@example.com"), (PASSWORD, "bad")]);

    assert_eq!(run(&form, &harness), Some(FormStatus::Error));
    assert_eq!(form.borrow().message(), Some("Invalid credentials"));
    assert!(harness.store.is_empty());
    assert!(harness.navigator.history().is_empty());
    harness.scheduler.run_all();
    assert!(harness.navigator.history().is_empty());
}

#[test]
fn sign_in_with_unreadable_token_fails() {
    let harness = Harness::new();
    harness.transport.respond(json_response(200, r#"{"token":"not-a-jwt"}"#));
    let form = form_with::<SignInForm>(&[(EMAIL, "ada@example.com"), (PASSWORD, "pw")]);

    assert_eq!(run(&form, &harness), Some(FormStatus::Error));
    assert_eq!(form.borrow().message(), Some("Login failed."));
    assert!(harness.store.is_empty());
}

#[test]
fn revert_ignores_mismatched_generation() {
    let mut wf = FormWorkflow::<ContactForm>::default();
    let Submit::Invalid(generation) = wf.begin_submit() else {
        panic!("empty contact form should be invalid");
    };
    assert!(!wf.revert(generation + 1));
    assert!(wf.revert(generation));
    assert!(!wf.revert(generation));
}
