//! Typed view over the user value stored on a session.
//!
//! The session keeps whatever the login flow handed it. This module decides
//! whether that value describes a real principal: it must be a JSON object with
//! a non-empty scalar `uid`. Numeric and boolean identifiers are rendered as
//! strings. Optional profile fields are read leniently and never invalidate
//! the record.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Field carrying the unique user identifier.
pub const UID_FIELD: &str = "uid";
const EMAIL_FIELD: &str = "email";
const DISPLAY_NAME_FIELD: &str = "displayName";

/// Why a stored value is not an authenticated user.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidUser {
    #[error("user record is not a mapping")]
    NotAMapping,
    #[error("user record has no uid")]
    MissingUid,
    #[error("user record uid is not a scalar")]
    UidNotScalar,
    #[error("user record uid is empty")]
    EmptyUid,
}

/// Authenticated principal, keyed by `uid`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserRecord {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Render the record in the shape a session stores.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(UID_FIELD.to_string(), Value::String(self.uid.clone()));
        if let Some(email) = &self.email {
            map.insert(EMAIL_FIELD.to_string(), Value::String(email.clone()));
        }
        if let Some(display_name) = &self.display_name {
            map.insert(
                DISPLAY_NAME_FIELD.to_string(),
                Value::String(display_name.clone()),
            );
        }
        Value::Object(map)
    }
}

impl TryFrom<&Value> for UserRecord {
    type Error = InvalidUser;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let map = value.as_object().ok_or(InvalidUser::NotAMapping)?;

        let uid = match map.get(UID_FIELD) {
            None | Some(Value::Null) => return Err(InvalidUser::MissingUid),
            Some(Value::String(uid)) if uid.is_empty() => return Err(InvalidUser::EmptyUid),
            Some(Value::String(uid)) => uid.clone(),
            Some(Value::Number(uid)) => uid.to_string(),
            Some(Value::Bool(uid)) => uid.to_string(),
            Some(Value::Array(_) | Value::Object(_)) => return Err(InvalidUser::UidNotScalar),
        };

        Ok(Self {
            uid,
            email: optional_string(map, EMAIL_FIELD),
            display_name: optional_string(map, DISPLAY_NAME_FIELD),
        })
    }
}

impl From<&UserRecord> for Value {
    fn from(user: &UserRecord) -> Self {
        user.to_value()
    }
}

fn optional_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(ToString::to_string)
}
