//! OAuth2 client-credentials token acquisition.
//!
//! Authenticated deliveries fetch a bearer token from the identity server's
//! own token endpoint. The token is fetched fresh per dispatch and never
//! cached across events.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// A client as seen by the realm, reduced to what token acquisition needs.
#[derive(Debug, Clone)]
pub struct ClientModel {
    /// The client identifier.
    pub client_id: String,
    /// Whether this is a public (non-confidential) client.
    pub public_client: bool,
}

/// Capability interface onto the identity server's session.
///
/// Stands in for the host's full session API; a host integration implements
/// exactly these lookups and nothing else.
#[async_trait]
pub trait RealmSession: Send + Sync {
    /// Looks up a client in the current realm.
    async fn find_client(&self, client_id: &str) -> Option<ClientModel>;

    /// Returns the configured secret of a client, if any.
    async fn client_secret(&self, client: &ClientModel) -> Option<String>;

    /// Checks whether the client has an associated service account.
    async fn has_service_account(&self, client: &ClientModel) -> bool;

    /// Name of the current realm.
    fn realm_name(&self) -> String;

    /// Base URL of the identity server.
    fn auth_server_url(&self) -> String;
}

/// Bearer token for authenticated deliveries.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The raw token value.
    pub token: String,
}

/// Error type for token acquisition.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured client does not exist in the current realm.
    #[error("client not found: {0}")]
    ClientNotFound(String),

    /// The client-credentials grant requires a confidential client.
    #[error("client {0} is a public client")]
    PublicClient(String),

    /// The client has no configured secret.
    #[error("client {0} has no configured secret")]
    MissingSecret(String),

    /// The client has no associated service account.
    #[error("client {0} has no service account")]
    NoServiceAccount(String),

    /// Authenticated delivery is enabled but no realm session is attached.
    #[error("no realm session attached")]
    NoSession,

    /// Transport or response-parse failure.
    #[error("token request failed: {0}")]
    Http(String),

    /// The token endpoint answered with a non-success status.
    #[error("token endpoint returned HTTP {0}")]
    TokenRequestFailed(u16),

    /// The response parsed but carried no token.
    #[error("token response missing access_token")]
    MissingAccessToken,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Http(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Fetches access tokens via the client-credentials grant.
pub struct TokenClient {
    http: reqwest::Client,
}

impl TokenClient {
    /// Creates a token client sharing the given HTTP client.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Performs a client-credentials grant against the realm's token endpoint.
    pub async fn grant(
        &self,
        session: &dyn RealmSession,
        client_id: &str,
    ) -> Result<AccessToken, AuthError> {
        let client = session
            .find_client(client_id)
            .await
            .ok_or_else(|| AuthError::ClientNotFound(client_id.to_string()))?;

        if client.public_client {
            return Err(AuthError::PublicClient(client.client_id));
        }

        let secret = session
            .client_secret(&client)
            .await
            .ok_or_else(|| AuthError::MissingSecret(client.client_id.clone()))?;

        if !session.has_service_account(&client).await {
            return Err(AuthError::NoServiceAccount(client.client_id));
        }

        let token_url = format!(
            "{}/realms/{}/protocol/openid-connect/token",
            session.auth_server_url().trim_end_matches('/'),
            session.realm_name()
        );

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", secret.as_str()),
        ];

        let response = self.http.post(&token_url).form(&params).send().await?;

        if !response.status().is_success() {
            return Err(AuthError::TokenRequestFailed(response.status().as_u16()));
        }

        let body: TokenResponse = response.json().await?;
        let token = body.access_token.ok_or(AuthError::MissingAccessToken)?;

        Ok(AccessToken { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory realm with one configurable client.
    struct StaticRealm {
        client: Option<ClientModel>,
        secret: Option<String>,
        service_account: bool,
    }

    #[async_trait]
    impl RealmSession for StaticRealm {
        async fn find_client(&self, client_id: &str) -> Option<ClientModel> {
            self.client
                .as_ref()
                .filter(|c| c.client_id == client_id)
                .cloned()
        }

        async fn client_secret(&self, _client: &ClientModel) -> Option<String> {
            self.secret.clone()
        }

        async fn has_service_account(&self, _client: &ClientModel) -> bool {
            self.service_account
        }

        fn realm_name(&self) -> String {
            "master".to_string()
        }

        fn auth_server_url(&self) -> String {
            "http://idp.invalid".to_string()
        }
    }

    fn confidential_client(id: &str) -> ClientModel {
        ClientModel {
            client_id: id.to_string(),
            public_client: false,
        }
    }

    #[tokio::test]
    async fn test_grant_rejects_unknown_client() {
        let realm = StaticRealm {
            client: None,
            secret: None,
            service_account: false,
        };

        let err = TokenClient::new(reqwest::Client::new())
            .grant(&realm, "relay-client")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::ClientNotFound(id) if id == "relay-client"));
    }

    #[tokio::test]
    async fn test_grant_rejects_public_client() {
        let realm = StaticRealm {
            client: Some(ClientModel {
                client_id: "relay-client".to_string(),
                public_client: true,
            }),
            secret: Some("s3cret".to_string()),
            service_account: true,
        };

        let err = TokenClient::new(reqwest::Client::new())
            .grant(&realm, "relay-client")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PublicClient(_)));
    }

    #[tokio::test]
    async fn test_grant_rejects_missing_secret() {
        let realm = StaticRealm {
            client: Some(confidential_client("relay-client")),
            secret: None,
            service_account: true,
        };

        let err = TokenClient::new(reqwest::Client::new())
            .grant(&realm, "relay-client")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingSecret(_)));
    }

    #[tokio::test]
    async fn test_grant_rejects_missing_service_account() {
        let realm = StaticRealm {
            client: Some(confidential_client("relay-client")),
            secret: Some("s3cret".to_string()),
            service_account: false,
        };

        let err = TokenClient::new(reqwest::Client::new())
            .grant(&realm, "relay-client")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NoServiceAccount(_)));
    }
}
