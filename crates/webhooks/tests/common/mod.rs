//! Shared fixtures for webhook relay tests.

use async_trait::async_trait;

use authrelay_events::{AdminEvent, EventKind, OperationKind, ResourceKind, UserEvent};
use authrelay_webhooks::{ClientModel, RealmSession};

pub const CLIENT_ID: &str = "relay-client";
pub const CLIENT_SECRET: &str = "s3cret";
pub const REALM: &str = "master";

/// Realm session fixture with a single confidential client.
pub struct TestRealm {
    base_url: String,
}

impl TestRealm {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RealmSession for TestRealm {
    async fn find_client(&self, client_id: &str) -> Option<ClientModel> {
        (client_id == CLIENT_ID).then(|| ClientModel {
            client_id: client_id.to_string(),
            public_client: false,
        })
    }

    async fn client_secret(&self, _client: &ClientModel) -> Option<String> {
        Some(CLIENT_SECRET.to_string())
    }

    async fn has_service_account(&self, _client: &ClientModel) -> bool {
        true
    }

    fn realm_name(&self) -> String {
        REALM.to_string()
    }

    fn auth_server_url(&self) -> String {
        self.base_url.clone()
    }
}

pub fn login_event() -> UserEvent {
    UserEvent::new(EventKind::Login, REALM, "web-app", "user-1")
        .with_ip_address("10.0.0.1")
        .with_detail("auth_method", "openid-connect")
}

pub fn user_created_event() -> AdminEvent {
    AdminEvent::new(
        OperationKind::Create,
        ResourceKind::User,
        REALM,
        "admin-cli",
        "admin-1",
        "users/user-2",
    )
}
