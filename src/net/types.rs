//! Wire-protocol DTOs for the donation backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Amounts travel as decimal
//! major units; requests are built from integer cents so validation never
//! touches floating point.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::util::currency::cents_to_major;

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /login` success body: the session token plus identity metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "authToken", alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, alias = "userName")]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// `POST /contact` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub charity: String,
    pub message: String,
}

/// `POST /donate/{animal,child}` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DonationRequest {
    #[serde(rename = "name")]
    pub donor_name: String,
    #[serde(rename = "email")]
    pub donor_email: String,
    /// Backend charity identifier.
    pub charity: String,
    #[serde(rename = "amount", serialize_with = "serialize_cents_as_major")]
    pub amount_cents: u64,
}

fn serialize_cents_as_major<S: Serializer>(cents: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(cents_to_major(*cents))
}

/// Donation category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationKind {
    Animal,
    Child,
}

impl DonationKind {
    /// API path segment under `/donate/`.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Animal => "animal",
            Self::Child => "child",
        }
    }
}

/// A past donation as returned by `GET /donations/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DonationKind,
    pub charity: String,
    pub amount: f64,
    #[serde(rename = "name", default)]
    pub donor_name: String,
    #[serde(rename = "email", default)]
    pub donor_email: String,
    /// Server-supplied receipt path, e.g. `/api/donations/receipt/7`.
    #[serde(rename = "pdfUrl", default)]
    pub receipt_url: Option<String>,
}

impl DonationRecord {
    /// File name offered for the downloaded receipt.
    #[must_use]
    pub fn receipt_file_name(&self) -> String {
        format!("{}_receipt_{}.pdf", self.charity, self.id)
    }
}

/// Aggregate donation statistics from `GET /profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub animal_donation_count: u64,
    #[serde(default)]
    pub child_donation_count: u64,
    #[serde(default)]
    pub total_animal_donation_amount: f64,
    #[serde(default)]
    pub total_child_donation_amount: f64,
}

impl ProfileSummary {
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.animal_donation_count + self.child_donation_count
    }

    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.total_animal_donation_amount + self.total_child_donation_amount
    }

    #[must_use]
    pub fn animal_average(&self) -> f64 {
        average(self.total_animal_donation_amount, self.animal_donation_count)
    }

    #[must_use]
    pub fn child_average(&self) -> f64 {
        average(self.total_child_donation_amount, self.child_donation_count)
    }

    #[must_use]
    pub fn overall_average(&self) -> f64 {
        average(self.total_amount(), self.total_count())
    }
}

/// Totals shown above the history table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistorySummary {
    pub count: usize,
    pub total_amount: f64,
    pub animal_count: usize,
    pub child_count: usize,
}

impl HistorySummary {
    #[must_use]
    pub fn from_records(records: &[DonationRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.count += 1;
            acc.total_amount += record.amount;
            match record.kind {
                DonationKind::Animal => acc.animal_count += 1,
                DonationKind::Child => acc.child_count += 1,
            }
            acc
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(total: f64, count: u64) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

/// Donation ids arrive as numbers from some backends and strings from others.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
