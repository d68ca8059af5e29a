//! Success/error line under a form.

use leptos::prelude::*;

use crate::state::form::{FormKind, FormStatus, FormWorkflow};

/// CSS modifier for the feedback line.
pub fn feedback_class(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Success => "form-feedback form-feedback--success",
        FormStatus::Error => "form-feedback form-feedback--error",
        FormStatus::Idle | FormStatus::Submitting => "form-feedback",
    }
}

/// Render the workflow's current message, if any.
pub fn form_feedback<K: FormKind>(form: RwSignal<FormWorkflow<K>>) -> impl IntoView {
    let message = move || form.with(|wf| wf.message().map(str::to_owned));
    let class = move || form.with(|wf| feedback_class(wf.status()));

    view! {
        <Show when=move || message().is_some()>
            <p class=class role="status">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}

/// Two-way bind a text input to one workflow field.
pub fn bind_field<K: FormKind>(
    form: RwSignal<FormWorkflow<K>>,
    name: &'static str,
) -> (impl Fn() -> String + Copy + Send + Sync + 'static, impl Fn(String) + Copy + Send + Sync + 'static) {
    let read = move || form.with(|wf| wf.field(name).to_owned());
    let write = move |value: String| form.update(|wf| wf.edit(name, value));
    (read, write)
}
