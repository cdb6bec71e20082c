//! Identity-server event records.
//!
//! Records are supplied by the host per occurrence and are immutable once
//! built. Serializing a record produces the canonical webhook payload: one
//! JSON object per event, blank `error` fields omitted, empty `details`
//! omitted, `ipAddress` null when the host did not capture one.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::kinds::{EventKind, OperationKind, ResourceKind};

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// A user-level event (login, logout, credential change, ...).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    /// What happened.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Realm the event occurred in.
    pub realm_id: String,
    /// Client the user was interacting with.
    pub client_id: String,
    /// Subject of the event.
    pub user_id: String,
    /// Remote address, when the host captured one.
    pub ip_address: Option<String>,
    /// Error code for failed operations.
    #[serde(skip_serializing_if = "blank")]
    pub error: Option<String>,
    /// Free-form key/value details attached by the host.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl UserEvent {
    /// Creates a new user event record.
    pub fn new(
        kind: EventKind,
        realm_id: impl Into<String>,
        client_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            realm_id: realm_id.into(),
            client_id: client_id.into(),
            user_id: user_id.into(),
            ip_address: None,
            error: None,
            details: BTreeMap::new(),
        }
    }

    /// Sets the remote address.
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    /// Sets the error code.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Adds a detail entry.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// An admin event (CRUD operation through the management API).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEvent {
    /// The operation that was performed.
    #[serde(rename = "type")]
    pub operation: OperationKind,
    /// Realm the operation targeted.
    pub realm_id: String,
    /// Client the administrator authenticated through.
    pub client_id: String,
    /// Administrator who performed the operation.
    pub user_id: String,
    /// Remote address, when the host captured one.
    pub ip_address: Option<String>,
    /// Path of the touched resource within the management API.
    pub resource_path: String,
    /// Kind of the touched resource.
    #[serde(rename = "resourceType")]
    pub resource: ResourceKind,
    /// Error code for failed operations.
    #[serde(skip_serializing_if = "blank")]
    pub error: Option<String>,
}

impl AdminEvent {
    /// Creates a new admin event record.
    pub fn new(
        operation: OperationKind,
        resource: ResourceKind,
        realm_id: impl Into<String>,
        client_id: impl Into<String>,
        user_id: impl Into<String>,
        resource_path: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            realm_id: realm_id.into(),
            client_id: client_id.into(),
            user_id: user_id.into(),
            ip_address: None,
            resource_path: resource_path.into(),
            resource,
            error: None,
        }
    }

    /// Sets the remote address.
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    /// Sets the error code.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_user_event_payload() {
        let event = UserEvent::new(EventKind::Login, "master", "web-app", "user-1")
            .with_ip_address("10.0.0.1")
            .with_detail("auth_method", "openid-connect")
            .with_detail("username", "alice");

        let value: Value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "LOGIN",
                "realmId": "master",
                "clientId": "web-app",
                "userId": "user-1",
                "ipAddress": "10.0.0.1",
                "details": {
                    "auth_method": "openid-connect",
                    "username": "alice"
                }
            })
        );
    }

    #[test]
    fn test_user_event_omits_blank_error_and_empty_details() {
        let event = UserEvent::new(EventKind::Logout, "master", "web-app", "user-1");
        let value: Value = serde_json::to_value(&event).unwrap();

        assert!(value.get("error").is_none());
        assert!(value.get("details").is_none());
        assert_eq!(value["ipAddress"], Value::Null);

        let event = event.with_error("");
        let value: Value = serde_json::to_value(&event).unwrap();
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_user_event_includes_error_verbatim() {
        let event = UserEvent::new(EventKind::LoginError, "master", "web-app", "user-1")
            .with_error("invalid_user_credentials");

        let value: Value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["error"], "invalid_user_credentials");
    }

    #[test]
    fn test_admin_event_payload() {
        let event = AdminEvent::new(
            OperationKind::Create,
            ResourceKind::User,
            "master",
            "admin-cli",
            "admin-1",
            "users/user-2",
        )
        .with_ip_address("10.0.0.2");

        let value: Value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "CREATE",
                "realmId": "master",
                "clientId": "admin-cli",
                "userId": "admin-1",
                "ipAddress": "10.0.0.2",
                "resourcePath": "users/user-2",
                "resourceType": "USER"
            })
        );
    }

    #[test]
    fn test_admin_event_error() {
        let event = AdminEvent::new(
            OperationKind::Delete,
            ResourceKind::Group,
            "master",
            "admin-cli",
            "admin-1",
            "groups/g-1",
        )
        .with_error("group_not_found");

        let value: Value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["error"], "group_not_found");
        assert_eq!(value["type"], "DELETE");
        assert_eq!(value["resourceType"], "GROUP");
    }
}
