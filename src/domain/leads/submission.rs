//! Lead payloads and the locally kept copy of each.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

pub const DEMO_FORM_NAME: &str = "Demo Booking";
pub const LEAD_SOURCE: &str = "TheoLingua Website";
pub const DEMO_TAGS: &str = "demo-request";

/// A generic lead payload, forwarded to the relay as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadSubmission(pub Value);

impl LeadSubmission {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn top(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    fn data_str(&self, key: &str) -> Option<&str> {
        self.data()
            .and_then(|d| d.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn raw(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or(Value::Null)
    }

    fn raw_data(&self, key: &str) -> Value {
        self.data()
            .and_then(|d| d.get(key))
            .cloned()
            .unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormType {
    Contact,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Contact => "CONTACT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormStatus {
    Unread,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Unread => "UNREAD",
        }
    }
}

/// Local copy of a lead, saved before relaying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormResponseRecord {
    pub id: Uuid,
    pub form_type: FormType,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub metadata: Value,
    pub status: FormStatus,
    pub created_at: DateTime<Utc>,
}

impl FormResponseRecord {
    pub fn from_submission(submission: &LeadSubmission) -> Self {
        let data = submission.data().cloned().unwrap_or(Value::Null);
        let message = match submission.data_str("message") {
            Some(message) => message.to_string(),
            None => data.to_string(),
        };

        Self {
            id: Uuid::new_v4(),
            form_type: FormType::Contact,
            name: submission.data_str("name").unwrap_or("Unknown").to_string(),
            email: submission
                .top("email")
                .or_else(|| submission.data_str("email"))
                .unwrap_or_default()
                .to_string(),
            phone: submission
                .top("phone")
                .or_else(|| submission.data_str("phone"))
                .map(str::to_string),
            subject: submission.top("formName").unwrap_or(DEMO_FORM_NAME).to_string(),
            message,
            metadata: json!({
                "formName": submission.raw("formName"),
                "source": submission.raw("source"),
                "tags": submission.raw("tags"),
                "organization": submission.raw_data("organization"),
                "role": submission.raw_data("role"),
                "program": submission.raw_data("program"),
                "fullData": data,
            }),
            status: FormStatus::Unread,
            created_at: Utc::now(),
        }
    }
}

/// The public "book a demo" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub role: String,
    pub program: String,
    pub message: String,
}

impl DemoBooking {
    pub fn to_submission(&self) -> LeadSubmission {
        let mut data = Map::new();
        for (key, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("organization", &self.organization),
            ("role", &self.role),
            ("program", &self.program),
            ("message", &self.message),
        ] {
            data.insert(key.to_string(), Value::String(value.clone()));
        }

        LeadSubmission(json!({
            "formName": DEMO_FORM_NAME,
            "data": Value::Object(data),
            "email": self.email,
            "phone": self.phone,
            "status": "new",
            "source": LEAD_SOURCE,
            "tags": DEMO_TAGS,
        }))
    }
}
