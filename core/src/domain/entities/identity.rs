//! Identity entities for token issuance.

use serde::{Deserialize, Serialize};

/// A user identity as supplied by the caller of an issuance request.
///
/// Immutable for the duration of the request; the service never
/// generates identities on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier
    pub user_id: String,

    /// Display username
    pub username: String,

    /// Email address
    pub email: String,
}

impl Identity {
    /// Creates a new identity
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            email: email.into(),
        }
    }
}

/// A provisioned identity as held by the claims store.
///
/// Extends [`Identity`] with the role set embedded into issued tokens.
/// Provisioning happens outside this service; the store is lookup-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Unique user identifier
    pub user_id: String,

    /// Display username
    pub username: String,

    /// Email address
    pub email: String,

    /// Roles granted to this identity
    pub roles: Vec<String>,
}

impl IdentityRecord {
    /// Creates a new identity record
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            email: email.into(),
            roles,
        }
    }

    /// The identity portion of this record
    pub fn identity(&self) -> Identity {
        Identity::new(&self.user_id, &self.username, &self.email)
    }
}
