//! Closed sets of event, operation, and resource kinds.
//!
//! Kind names arrive as configuration text; parsing is a validated lookup
//! against these enums and unknown names fail with [`KindError`] instead of
//! panicking.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::KindError;

/// Kind of a user-level event emitted by the identity server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Login,
    LoginError,
    Register,
    RegisterError,
    Logout,
    LogoutError,
    CodeToToken,
    CodeToTokenError,
    ClientLogin,
    ClientLoginError,
    RefreshToken,
    RefreshTokenError,
    TokenExchange,
    IntrospectToken,
    UpdateEmail,
    UpdatePassword,
    UpdateProfile,
    UpdateTotp,
    RemoveTotp,
    VerifyEmail,
    SendVerifyEmail,
    SendResetPassword,
    SendResetPasswordError,
    ResetPassword,
    ResetPasswordError,
    FederatedIdentityLink,
    RemoveFederatedIdentity,
    IdentityProviderLogin,
    IdentityProviderLoginError,
    IdentityProviderFirstLogin,
    ImpersonateUser,
    ExecuteActions,
    CustomRequiredAction,
    ClientRegister,
    ClientUpdate,
    ClientDelete,
}

impl EventKind {
    /// Returns the canonical wire name (e.g. `"CODE_TO_TOKEN"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Login => "LOGIN",
            EventKind::LoginError => "LOGIN_ERROR",
            EventKind::Register => "REGISTER",
            EventKind::RegisterError => "REGISTER_ERROR",
            EventKind::Logout => "LOGOUT",
            EventKind::LogoutError => "LOGOUT_ERROR",
            EventKind::CodeToToken => "CODE_TO_TOKEN",
            EventKind::CodeToTokenError => "CODE_TO_TOKEN_ERROR",
            EventKind::ClientLogin => "CLIENT_LOGIN",
            EventKind::ClientLoginError => "CLIENT_LOGIN_ERROR",
            EventKind::RefreshToken => "REFRESH_TOKEN",
            EventKind::RefreshTokenError => "REFRESH_TOKEN_ERROR",
            EventKind::TokenExchange => "TOKEN_EXCHANGE",
            EventKind::IntrospectToken => "INTROSPECT_TOKEN",
            EventKind::UpdateEmail => "UPDATE_EMAIL",
            EventKind::UpdatePassword => "UPDATE_PASSWORD",
            EventKind::UpdateProfile => "UPDATE_PROFILE",
            EventKind::UpdateTotp => "UPDATE_TOTP",
            EventKind::RemoveTotp => "REMOVE_TOTP",
            EventKind::VerifyEmail => "VERIFY_EMAIL",
            EventKind::SendVerifyEmail => "SEND_VERIFY_EMAIL",
            EventKind::SendResetPassword => "SEND_RESET_PASSWORD",
            EventKind::SendResetPasswordError => "SEND_RESET_PASSWORD_ERROR",
            EventKind::ResetPassword => "RESET_PASSWORD",
            EventKind::ResetPasswordError => "RESET_PASSWORD_ERROR",
            EventKind::FederatedIdentityLink => "FEDERATED_IDENTITY_LINK",
            EventKind::RemoveFederatedIdentity => "REMOVE_FEDERATED_IDENTITY",
            EventKind::IdentityProviderLogin => "IDENTITY_PROVIDER_LOGIN",
            EventKind::IdentityProviderLoginError => "IDENTITY_PROVIDER_LOGIN_ERROR",
            EventKind::IdentityProviderFirstLogin => "IDENTITY_PROVIDER_FIRST_LOGIN",
            EventKind::ImpersonateUser => "IMPERSONATE_USER",
            EventKind::ExecuteActions => "EXECUTE_ACTIONS",
            EventKind::CustomRequiredAction => "CUSTOM_REQUIRED_ACTION",
            EventKind::ClientRegister => "CLIENT_REGISTER",
            EventKind::ClientUpdate => "CLIENT_UPDATE",
            EventKind::ClientDelete => "CLIENT_DELETE",
        }
    }
}

impl FromStr for EventKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "LOGIN" => EventKind::Login,
            "LOGIN_ERROR" => EventKind::LoginError,
            "REGISTER" => EventKind::Register,
            "REGISTER_ERROR" => EventKind::RegisterError,
            "LOGOUT" => EventKind::Logout,
            "LOGOUT_ERROR" => EventKind::LogoutError,
            "CODE_TO_TOKEN" => EventKind::CodeToToken,
            "CODE_TO_TOKEN_ERROR" => EventKind::CodeToTokenError,
            "CLIENT_LOGIN" => EventKind::ClientLogin,
            "CLIENT_LOGIN_ERROR" => EventKind::ClientLoginError,
            "REFRESH_TOKEN" => EventKind::RefreshToken,
            "REFRESH_TOKEN_ERROR" => EventKind::RefreshTokenError,
            "TOKEN_EXCHANGE" => EventKind::TokenExchange,
            "INTROSPECT_TOKEN" => EventKind::IntrospectToken,
            "UPDATE_EMAIL" => EventKind::UpdateEmail,
            "UPDATE_PASSWORD" => EventKind::UpdatePassword,
            "UPDATE_PROFILE" => EventKind::UpdateProfile,
            "UPDATE_TOTP" => EventKind::UpdateTotp,
            "REMOVE_TOTP" => EventKind::RemoveTotp,
            "VERIFY_EMAIL" => EventKind::VerifyEmail,
            "SEND_VERIFY_EMAIL" => EventKind::SendVerifyEmail,
            "SEND_RESET_PASSWORD" => EventKind::SendResetPassword,
            "SEND_RESET_PASSWORD_ERROR" => EventKind::SendResetPasswordError,
            "RESET_PASSWORD" => EventKind::ResetPassword,
            "RESET_PASSWORD_ERROR" => EventKind::ResetPasswordError,
            "FEDERATED_IDENTITY_LINK" => EventKind::FederatedIdentityLink,
            "REMOVE_FEDERATED_IDENTITY" => EventKind::RemoveFederatedIdentity,
            "IDENTITY_PROVIDER_LOGIN" => EventKind::IdentityProviderLogin,
            "IDENTITY_PROVIDER_LOGIN_ERROR" => EventKind::IdentityProviderLoginError,
            "IDENTITY_PROVIDER_FIRST_LOGIN" => EventKind::IdentityProviderFirstLogin,
            "IMPERSONATE_USER" => EventKind::ImpersonateUser,
            "EXECUTE_ACTIONS" => EventKind::ExecuteActions,
            "CUSTOM_REQUIRED_ACTION" => EventKind::CustomRequiredAction,
            "CLIENT_REGISTER" => EventKind::ClientRegister,
            "CLIENT_UPDATE" => EventKind::ClientUpdate,
            "CLIENT_DELETE" => EventKind::ClientDelete,
            _ => return Err(KindError::UnknownEventKind(s.to_string())),
        };
        Ok(kind)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an admin operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    /// A resource was created.
    Create,
    /// A resource was updated.
    Update,
    /// A resource was deleted.
    Delete,
    /// A non-CRUD action was invoked on a resource.
    Action,
}

impl OperationKind {
    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Create => "CREATE",
            OperationKind::Update => "UPDATE",
            OperationKind::Delete => "DELETE",
            OperationKind::Action => "ACTION",
        }
    }
}

impl FromStr for OperationKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(OperationKind::Create),
            "UPDATE" => Ok(OperationKind::Update),
            "DELETE" => Ok(OperationKind::Delete),
            "ACTION" => Ok(OperationKind::Action),
            _ => Err(KindError::UnknownOperationKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of resource an admin operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Realm,
    RealmRole,
    RealmRoleMapping,
    RealmScopeMapping,
    User,
    UserLoginFailure,
    UserFederationProvider,
    UserFederationMapper,
    Group,
    GroupMembership,
    Client,
    ClientRole,
    ClientRoleMapping,
    ClientScope,
    ClientScopeMapping,
    ProtocolMapper,
    RequiredAction,
    IdentityProvider,
    IdentityProviderMapper,
    AuthFlow,
    AuthExecutionFlow,
    AuthExecution,
    AuthenticatorConfig,
    Component,
    ClusterNode,
    Authorization,
}

impl ResourceKind {
    /// Returns the canonical wire name (e.g. `"GROUP_MEMBERSHIP"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Realm => "REALM",
            ResourceKind::RealmRole => "REALM_ROLE",
            ResourceKind::RealmRoleMapping => "REALM_ROLE_MAPPING",
            ResourceKind::RealmScopeMapping => "REALM_SCOPE_MAPPING",
            ResourceKind::User => "USER",
            ResourceKind::UserLoginFailure => "USER_LOGIN_FAILURE",
            ResourceKind::UserFederationProvider => "USER_FEDERATION_PROVIDER",
            ResourceKind::UserFederationMapper => "USER_FEDERATION_MAPPER",
            ResourceKind::Group => "GROUP",
            ResourceKind::GroupMembership => "GROUP_MEMBERSHIP",
            ResourceKind::Client => "CLIENT",
            ResourceKind::ClientRole => "CLIENT_ROLE",
            ResourceKind::ClientRoleMapping => "CLIENT_ROLE_MAPPING",
            ResourceKind::ClientScope => "CLIENT_SCOPE",
            ResourceKind::ClientScopeMapping => "CLIENT_SCOPE_MAPPING",
            ResourceKind::ProtocolMapper => "PROTOCOL_MAPPER",
            ResourceKind::RequiredAction => "REQUIRED_ACTION",
            ResourceKind::IdentityProvider => "IDENTITY_PROVIDER",
            ResourceKind::IdentityProviderMapper => "IDENTITY_PROVIDER_MAPPER",
            ResourceKind::AuthFlow => "AUTH_FLOW",
            ResourceKind::AuthExecutionFlow => "AUTH_EXECUTION_FLOW",
            ResourceKind::AuthExecution => "AUTH_EXECUTION",
            ResourceKind::AuthenticatorConfig => "AUTHENTICATOR_CONFIG",
            ResourceKind::Component => "COMPONENT",
            ResourceKind::ClusterNode => "CLUSTER_NODE",
            ResourceKind::Authorization => "AUTHORIZATION",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "REALM" => ResourceKind::Realm,
            "REALM_ROLE" => ResourceKind::RealmRole,
            "REALM_ROLE_MAPPING" => ResourceKind::RealmRoleMapping,
            "REALM_SCOPE_MAPPING" => ResourceKind::RealmScopeMapping,
            "USER" => ResourceKind::User,
            "USER_LOGIN_FAILURE" => ResourceKind::UserLoginFailure,
            "USER_FEDERATION_PROVIDER" => ResourceKind::UserFederationProvider,
            "USER_FEDERATION_MAPPER" => ResourceKind::UserFederationMapper,
            "GROUP" => ResourceKind::Group,
            "GROUP_MEMBERSHIP" => ResourceKind::GroupMembership,
            "CLIENT" => ResourceKind::Client,
            "CLIENT_ROLE" => ResourceKind::ClientRole,
            "CLIENT_ROLE_MAPPING" => ResourceKind::ClientRoleMapping,
            "CLIENT_SCOPE" => ResourceKind::ClientScope,
            "CLIENT_SCOPE_MAPPING" => ResourceKind::ClientScopeMapping,
            "PROTOCOL_MAPPER" => ResourceKind::ProtocolMapper,
            "REQUIRED_ACTION" => ResourceKind::RequiredAction,
            "IDENTITY_PROVIDER" => ResourceKind::IdentityProvider,
            "IDENTITY_PROVIDER_MAPPER" => ResourceKind::IdentityProviderMapper,
            "AUTH_FLOW" => ResourceKind::AuthFlow,
            "AUTH_EXECUTION_FLOW" => ResourceKind::AuthExecutionFlow,
            "AUTH_EXECUTION" => ResourceKind::AuthExecution,
            "AUTHENTICATOR_CONFIG" => ResourceKind::AuthenticatorConfig,
            "COMPONENT" => ResourceKind::Component,
            "CLUSTER_NODE" => ResourceKind::ClusterNode,
            "AUTHORIZATION" => ResourceKind::Authorization,
            _ => return Err(KindError::UnknownResourceKind(s.to_string())),
        };
        Ok(kind)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
