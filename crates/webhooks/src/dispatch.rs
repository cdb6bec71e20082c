//! Multi-target webhook dispatch.

use std::sync::Arc;

use serde::Serialize;

use authrelay_events::{AdminEvent, UserEvent};

use crate::config::DispatchConfig;
use crate::error::{WebhookError, WebhookResult};
use crate::token::{AccessToken, AuthError, RealmSession, TokenClient};

/// User-Agent header value sent with every outbound request.
pub const USER_AGENT: &str = concat!("authrelay-bot/", env!("CARGO_PKG_VERSION"));

/// Best-effort webhook dispatcher.
///
/// Serializes an event once and POSTs the identical payload to every
/// configured target URI in order. Every failure is logged and swallowed:
/// one target's failure never affects the others, and nothing propagates to
/// the caller.
pub struct WebhookDispatcher {
    client: reqwest::Client,
    tokens: TokenClient,
    config: DispatchConfig,
    session: Option<Arc<dyn RealmSession>>,
}

impl WebhookDispatcher {
    /// Creates a dispatcher without a realm session.
    ///
    /// With `use_auth` enabled, token acquisition fails until a session is
    /// attached and deliveries go out unauthenticated.
    pub fn new(config: DispatchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            tokens: TokenClient::new(client.clone()),
            client,
            config,
            session: None,
        }
    }

    /// Attaches the realm session used for token acquisition.
    pub fn with_session(mut self, session: Arc<dyn RealmSession>) -> Self {
        self.session = Some(session);
        self
    }

    /// Returns the dispatch configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Serializes and delivers a user event to every target.
    pub async fn dispatch_user(&self, event: &UserEvent) {
        self.dispatch(event).await;
    }

    /// Serializes and delivers an admin event to every target.
    pub async fn dispatch_admin(&self, event: &AdminEvent) {
        self.dispatch(event).await;
    }

    async fn dispatch<E: Serialize>(&self, event: &E) {
        let payload = match serialize(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize event, nothing sent");
                return;
            }
        };

        let token = if self.config.use_auth {
            match self.fetch_access_token().await {
                Ok(token) => Some(token),
                Err(e) => {
                    tracing::warn!(error = %e, "token retrieval failed, delivering unauthenticated");
                    None
                }
            }
        } else {
            None
        };

        for uri in &self.config.target_uris {
            if let Err(e) = self.post(uri, &payload, token.as_ref()).await {
                tracing::warn!(uri = %uri, error = %e, "webhook delivery failed");
            }
        }
    }

    async fn fetch_access_token(&self) -> WebhookResult<AccessToken> {
        let session = self.session.as_deref().ok_or(AuthError::NoSession)?;
        let token = self.tokens.grant(session, &self.config.client_id).await?;
        Ok(token)
    }

    async fn post(
        &self,
        uri: &str,
        payload: &str,
        token: Option<&AccessToken>,
    ) -> WebhookResult<()> {
        let mut request = self
            .client
            .post(uri)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT);

        if let Some(token) = token {
            request = request.bearer_auth(&token.token);
        }

        let response = request
            .body(payload.to_owned())
            .send()
            .await
            .map_err(|e| WebhookError::Delivery {
                uri: uri.to_string(),
                reason: e.to_string(),
            })?;

        // Only a plain 200 counts as delivered.
        if response.status() != reqwest::StatusCode::OK {
            return Err(WebhookError::Delivery {
                uri: uri.to_string(),
                reason: format!("unexpected status {}", response.status()),
            });
        }

        Ok(())
    }
}

fn serialize<E: Serialize>(event: &E) -> WebhookResult<String> {
    Ok(serde_json::to_string(event)?)
}
