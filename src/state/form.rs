//! One state machine for every form that talks to the backend.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> {Success, Error} -> Idle`. A [`FormKind`] supplies
//! the field set, the validation predicate and the API call; everything else
//! (double-submit protection, session checks, success reset, display
//! timeouts, 401 handling) is shared.
//!
//! Success and Error revert to Idle after the kind's display duration or on
//! the next edit. A generation counter makes stale revert timers no-ops.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::time::Duration;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::{ApiClient, ApiError, ApiResult};
use crate::net::transport::Transport;
use crate::session::clock::Clock;
use crate::session::guard::SessionGuard;
use crate::session::navigation::Navigator;
use crate::session::store::{Session, TokenStore};
use crate::util::schedule::Scheduler;

pub type Fields = BTreeMap<&'static str, String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Local, field-level validation failure. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

/// What a successful submission hands back to the workflow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accepted {
    /// Session issued by the call (sign-in only).
    pub session: Option<Session>,
    /// Confirmation text from the server, if any.
    pub confirmation: Option<String>,
}

/// The varying part of a form: fields, validation, and the API call.
#[allow(async_fn_in_trait)]
pub trait FormKind: Clone + std::fmt::Debug + 'static {
    type Request;

    const FIELDS: &'static [&'static str];
    /// Whether the call needs a valid session.
    const AUTHENTICATED: bool;
    /// How long Success/Error stay visible before reverting to Idle.
    const DISPLAY_FOR: Duration;
    /// Where to go after success, and how long to wait first.
    const REDIRECT_ON_SUCCESS: Option<(&'static str, Duration)> = None;

    /// Check trimmed field values and build the request.
    ///
    /// # Errors
    ///
    /// Returns the message to display when a field is missing or invalid.
    fn validate(fields: &Fields) -> Result<Self::Request, ValidationError>;

    /// Perform the API call. `session` is `Some` whenever `AUTHENTICATED`.
    async fn send<T: Transport>(
        api: &ApiClient<T>,
        session: Option<&Session>,
        request: &Self::Request,
    ) -> ApiResult<Accepted>;

    fn success_message(request: &Self::Request, accepted: &Accepted) -> String;

    fn failure_message(error: &ApiError) -> String {
        error.to_string()
    }
}

/// Display state of one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub fields: Fields,
    pub status: FormStatus,
    pub message: Option<String>,
}

/// Result of asking a workflow to start a submission.
#[derive(Debug, PartialEq, Eq)]
pub enum Submit<R> {
    /// A submission is already in flight.
    Busy,
    /// Validation failed; the message is set. Carries the revert generation.
    Invalid(u64),
    Started(R),
}

#[derive(Clone, Debug)]
pub struct FormWorkflow<K: FormKind> {
    state: FormState,
    generation: u64,
    _kind: PhantomData<fn() -> K>,
}

impl<K: FormKind> Default for FormWorkflow<K> {
    fn default() -> Self {
        Self {
            state: FormState {
                fields: empty_fields(K::FIELDS),
                status: FormStatus::Idle,
                message: None,
            },
            generation: 0,
            _kind: PhantomData,
        }
    }
}

fn empty_fields(names: &'static [&'static str]) -> Fields {
    names.iter().map(|name| (*name, String::new())).collect()
}

impl<K: FormKind> FormWorkflow<K> {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> FormStatus {
        self.state.status
    }

    pub fn message(&self) -> Option<&str> {
        self.state.message.as_deref()
    }

    /// Current value of `name`; unknown fields read as empty.
    pub fn field(&self, name: &str) -> &str {
        self.state.fields.get(name).map_or("", String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.status == FormStatus::Submitting
    }

    /// Update a field and drop any Success/Error display.
    /// Ignored while a submission is in flight (inputs are disabled).
    pub fn edit(&mut self, name: &str, value: String) {
        if self.is_submitting() {
            return;
        }
        if let Some(slot) = self.state.fields.get_mut(name) {
            *slot = value;
        }
        self.settle(FormStatus::Idle, None);
    }

    /// Validate and move to Submitting.
    pub fn begin_submit(&mut self) -> Submit<K::Request> {
        if self.is_submitting() {
            return Submit::Busy;
        }
        match K::validate(&self.state.fields) {
            Ok(request) => {
                self.settle(FormStatus::Submitting, None);
                Submit::Started(request)
            }
            Err(e) => Submit::Invalid(self.settle(FormStatus::Error, Some(e.to_string()))),
        }
    }

    /// Submitting -> Success: fields reset. Returns the revert generation.
    pub fn succeed(&mut self, message: String) -> u64 {
        self.state.fields = empty_fields(K::FIELDS);
        self.settle(FormStatus::Success, Some(message))
    }

    /// Submitting -> Error: fields kept. Returns the revert generation.
    pub fn fail(&mut self, message: String) -> u64 {
        self.settle(FormStatus::Error, Some(message))
    }

    /// Submitting -> Idle without a message (session expiry path).
    pub fn abandon(&mut self) {
        self.settle(FormStatus::Idle, None);
    }

    /// Timer callback: clear Success/Error if nothing happened since.
    pub fn revert(&mut self, generation: u64) -> bool {
        let displaying = matches!(self.state.status, FormStatus::Success | FormStatus::Error);
        if displaying && self.generation == generation {
            self.settle(FormStatus::Idle, None);
            true
        } else {
            false
        }
    }

    fn settle(&mut self, status: FormStatus, message: Option<String>) -> u64 {
        self.state.status = status;
        self.state.message = message;
        self.generation += 1;
        self.generation
    }
}

/// Access to a workflow owned by a view. Returns `None` once the view is
/// torn down, which turns late updates into no-ops.
pub trait FormHandle<K: FormKind> {
    fn apply<R>(&self, f: impl FnOnce(&mut FormWorkflow<K>) -> R) -> Option<R>;
}

impl<K: FormKind> FormHandle<K> for RwSignal<FormWorkflow<K>> {
    fn apply<R>(&self, f: impl FnOnce(&mut FormWorkflow<K>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

fn schedule_revert<K, H, D>(form: &H, scheduler: &D, generation: u64)
where
    K: FormKind,
    H: FormHandle<K> + Clone + 'static,
    D: Scheduler,
{
    let form = form.clone();
    scheduler.after(
        K::DISPLAY_FOR,
        Box::new(move || {
            form.apply(|wf| wf.revert(generation));
        }),
    );
}

/// Drive one submission from the current field values to a display state.
///
/// Returns the status the form settled in, or `None` when the session guard
/// redirected to sign-in or the form was torn down.
pub async fn submit<K, H, S, N, C, T, D>(
    form: &H,
    guard: &SessionGuard<S, N, C>,
    api: &ApiClient<T>,
    scheduler: &D,
) -> Option<FormStatus>
where
    K: FormKind,
    H: FormHandle<K> + Clone + 'static,
    S: TokenStore,
    N: Navigator + Clone + 'static,
    C: Clock,
    T: Transport,
    D: Scheduler,
{
    let request = match form.apply(FormWorkflow::begin_submit)? {
        Submit::Busy => return Some(FormStatus::Submitting),
        Submit::Invalid(generation) => {
            schedule_revert(form, scheduler, generation);
            return Some(FormStatus::Error);
        }
        Submit::Started(request) => request,
    };

    let session = if K::AUTHENTICATED {
        let Ok(session) = guard.ensure() else {
            form.apply(FormWorkflow::abandon);
            return None;
        };
        Some(session)
    } else {
        None
    };

    let outcome = guard.intercept(K::send(api, session.as_ref(), &request).await);
    match outcome {
        Ok(accepted) => {
            if let Some(issued) = &accepted.session {
                guard.establish(issued);
            }
            let message = K::success_message(&request, &accepted);
            let generation = form.apply(|wf| wf.succeed(message))?;
            schedule_revert(form, scheduler, generation);
            if let Some((path, delay)) = K::REDIRECT_ON_SUCCESS {
                let navigator = guard.navigator().clone();
                scheduler.after(delay, Box::new(move || navigator.go_to(path)));
            }
            Some(FormStatus::Success)
        }
        Err(ApiError::Unauthenticated) => {
            form.apply(FormWorkflow::abandon);
            None
        }
        Err(error) => {
            leptos::logging::warn!("form submission failed: {error:?}");
            let message = K::failure_message(&error);
            let generation = form.apply(|wf| wf.fail(message))?;
            schedule_revert(form, scheduler, generation);
            Some(FormStatus::Error)
        }
    }
}
