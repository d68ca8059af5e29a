//! The concrete forms: sign-in, sign-up, animal and child donation, contact.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::time::Duration;

use super::form::{Accepted, Fields, FormKind, ValidationError};
use crate::net::api::{ApiClient, ApiError, ApiResult};
use crate::net::transport::Transport;
use crate::net::types::{ContactRequest, DonationKind, DonationRequest, LoginRequest, RegisterRequest};
use crate::session::navigation::HOME_PATH;
use crate::session::store::Session;
use crate::util::currency::{format_amount, parse_amount_cents};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const NAME: &str = "name";
pub const CHARITY: &str = "charity";
pub const AMOUNT: &str = "amount";
pub const MESSAGE: &str = "message";

pub const REQUIRED_FIELDS: &str = "Please fill in all required fields.";
pub const ALL_FIELDS: &str = "Please fill in all fields.";
pub const INVALID_AMOUNT: &str = "Please enter a valid donation amount.";

const AUTH_REDIRECT: Option<(&str, Duration)> = Some((HOME_PATH, Duration::from_secs(1)));

/// Animal welfare organisations offered by the animal donation form.
pub const ANIMAL_CHARITIES: [&str; 10] = [
    "Paws & Hearts Animal Rescue",
    "Hope for Animals Foundation",
    "Wildlife Conservation Society",
    "Safe Haven Animal Sanctuary",
    "Furry Friends Rescue Center",
    "Ocean Life Protection Fund",
    "Mountain Wildlife Preserve",
    "City Animal Welfare League",
    "Forest Creature Sanctuary",
    "Desert Animal Rescue Network",
];

/// Child donation focus areas as `(value, label)`.
pub const CHILD_FOCUS_OPTIONS: [(&str, &str); 5] = [
    ("education", "Education"),
    ("healthcare", "Healthcare"),
    ("shelter", "Shelter"),
    ("family", "Family Support"),
    ("general", "Most Needed"),
];

/// Quick-pick amounts on the child donation form.
pub const CHILD_PRESET_AMOUNTS: [&str; 3] = ["25", "50", "100"];

/// Backend identifier for a child donation focus. Unknown values go to the
/// general hunger fund.
#[must_use]
pub fn child_charity_identifier(focus: &str) -> &'static str {
    match focus {
        "education" => "children_education",
        "healthcare" => "children_healthcare",
        "shelter" => "children_shelter",
        "family" => "children_family",
        _ => "children_hunger",
    }
}

fn value<'a>(fields: &'a Fields, name: &str) -> &'a str {
    fields.get(name).map_or("", |v| v.trim())
}

fn require<'a, const N: usize>(
    fields: &'a Fields,
    names: [&str; N],
    message: &'static str,
) -> Result<[&'a str; N], ValidationError> {
    let values = names.map(|name| value(fields, name));
    if values.iter().any(|v| v.is_empty()) {
        return Err(ValidationError(message));
    }
    Ok(values)
}

fn validate_donation(fields: &Fields, charity: impl FnOnce(&str) -> String) -> Result<DonationRequest, ValidationError> {
    let [name, email, focus, amount] = require(fields, [NAME, EMAIL, CHARITY, AMOUNT], REQUIRED_FIELDS)?;
    let amount_cents = parse_amount_cents(amount)
        .filter(|cents| *cents > 0)
        .ok_or(ValidationError(INVALID_AMOUNT))?;
    Ok(DonationRequest {
        donor_name: name.to_owned(),
        donor_email: email.to_owned(),
        charity: charity(focus),
        amount_cents,
    })
}

async fn send_donation<T: Transport>(
    api: &ApiClient<T>,
    session: Option<&Session>,
    kind: DonationKind,
    request: &DonationRequest,
) -> ApiResult<Accepted> {
    let session = session.ok_or(ApiError::Unauthenticated)?;
    let confirmation = api.donate(session, kind, request).await?;
    Ok(Accepted {
        session: None,
        confirmation: confirmation.message,
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SignInForm;

impl FormKind for SignInForm {
    type Request = LoginRequest;

    const FIELDS: &'static [&'static str] = &[EMAIL, PASSWORD];
    const AUTHENTICATED: bool = false;
    const DISPLAY_FOR: Duration = Duration::from_secs(5);
    const REDIRECT_ON_SUCCESS: Option<(&'static str, Duration)> = AUTH_REDIRECT;

    fn validate(fields: &Fields) -> Result<LoginRequest, ValidationError> {
        let email = value(fields, EMAIL);
        let password = fields.get(PASSWORD).map_or("", String::as_str);
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError("Please enter your email and password."));
        }
        Ok(LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    async fn send<T: Transport>(
        api: &ApiClient<T>,
        _session: Option<&Session>,
        request: &LoginRequest,
    ) -> ApiResult<Accepted> {
        let response = api.login(request).await?;
        let email = response.email.clone().unwrap_or_else(|| request.email.clone());
        let session = Session::from_token(response.token, email)
            .map_err(|e| ApiError::InvalidResponse(format!("login token: {e}")))?
            .with_identity(response.user_id, response.name);
        Ok(Accepted {
            session: Some(session),
            confirmation: response.message,
        })
    }

    fn success_message(_request: &LoginRequest, _accepted: &Accepted) -> String {
        "Login successful!".to_owned()
    }

    fn failure_message(error: &ApiError) -> String {
        match error {
            ApiError::InvalidResponse(_) => "Login failed.".to_owned(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SignUpForm;

impl FormKind for SignUpForm {
    type Request = RegisterRequest;

    const FIELDS: &'static [&'static str] = &[EMAIL, PASSWORD, PHONE_NUMBER];
    const AUTHENTICATED: bool = false;
    const DISPLAY_FOR: Duration = Duration::from_secs(5);
    const REDIRECT_ON_SUCCESS: Option<(&'static str, Duration)> = AUTH_REDIRECT;

    fn validate(fields: &Fields) -> Result<RegisterRequest, ValidationError> {
        let [email, phone_number] = require(fields, [EMAIL, PHONE_NUMBER], ALL_FIELDS)?;
        let password = fields.get(PASSWORD).map_or("", String::as_str);
        if password.is_empty() {
            return Err(ValidationError(ALL_FIELDS));
        }
        Ok(RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            phone_number: phone_number.to_owned(),
        })
    }

    async fn send<T: Transport>(
        api: &ApiClient<T>,
        _session: Option<&Session>,
        request: &RegisterRequest,
    ) -> ApiResult<Accepted> {
        let confirmation = api.register(request).await?;
        Ok(Accepted {
            session: None,
            confirmation: confirmation.message,
        })
    }

    fn success_message(_request: &RegisterRequest, _accepted: &Accepted) -> String {
        "Registration successful!".to_owned()
    }

    fn failure_message(error: &ApiError) -> String {
        match error {
            ApiError::Rejected { message, .. } => message.clone(),
            _ => "Registration failed. Please try again.".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AnimalDonationForm;

impl FormKind for AnimalDonationForm {
    type Request = DonationRequest;

    const FIELDS: &'static [&'static str] = &[NAME, EMAIL, CHARITY, AMOUNT];
    const AUTHENTICATED: bool = true;
    const DISPLAY_FOR: Duration = Duration::from_secs(8);

    fn validate(fields: &Fields) -> Result<DonationRequest, ValidationError> {
        validate_donation(fields, str::to_owned)
    }

    async fn send<T: Transport>(
        api: &ApiClient<T>,
        session: Option<&Session>,
        request: &DonationRequest,
    ) -> ApiResult<Accepted> {
        send_donation(api, session, DonationKind::Animal, request).await
    }

    fn success_message(request: &DonationRequest, _accepted: &Accepted) -> String {
        format!(
            "Thank you {}! Your donation of ${} to {} has been processed successfully.",
            request.donor_name,
            format_amount(request.amount_cents),
            request.charity
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ChildDonationForm;

impl FormKind for ChildDonationForm {
    type Request = DonationRequest;

    const FIELDS: &'static [&'static str] = &[AMOUNT, NAME, EMAIL, CHARITY];
    const AUTHENTICATED: bool = true;
    const DISPLAY_FOR: Duration = Duration::from_secs(5);

    fn validate(fields: &Fields) -> Result<DonationRequest, ValidationError> {
        validate_donation(fields, |focus| child_charity_identifier(focus).to_owned())
    }

    async fn send<T: Transport>(
        api: &ApiClient<T>,
        session: Option<&Session>,
        request: &DonationRequest,
    ) -> ApiResult<Accepted> {
        send_donation(api, session, DonationKind::Child, request).await
    }

    fn success_message(_request: &DonationRequest, _accepted: &Accepted) -> String {
        "Thank you! Your donation has been processed successfully. Your kindness changes lives.".to_owned()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ContactForm;

impl FormKind for ContactForm {
    type Request = ContactRequest;

    const FIELDS: &'static [&'static str] = &[NAME, EMAIL, CHARITY, MESSAGE];
    const AUTHENTICATED: bool = false;
    const DISPLAY_FOR: Duration = Duration::from_secs(5);

    fn validate(fields: &Fields) -> Result<ContactRequest, ValidationError> {
        let [name, email, charity, message] = require(fields, [NAME, EMAIL, CHARITY, MESSAGE], ALL_FIELDS)?;
        Ok(ContactRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            charity: charity.to_owned(),
            message: message.to_owned(),
        })
    }

    async fn send<T: Transport>(
        api: &ApiClient<T>,
        _session: Option<&Session>,
        request: &ContactRequest,
    ) -> ApiResult<Accepted> {
        let confirmation = api.contact(request).await?;
        Ok(Accepted {
            session: None,
            confirmation: confirmation.message,
        })
    }

    fn success_message(_request: &ContactRequest, _accepted: &Accepted) -> String {
        "Message sent successfully!".to_owned()
    }

    fn failure_message(error: &ApiError) -> String {
        match error {
            ApiError::Unreachable { .. } => "Error connecting to server. Please try again later.".to_owned(),
            other => format!("Failed to send message: {other}"),
        }
    }
}
