//! Identity types bridged between the session store and the auth backend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed-in user identity held in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Auth identity assigned by the backend
    pub id: Uuid,
    /// Email address the account was created with
    pub email: String,
}

/// Opaque bearer credentials issued by the auth backend.
///
/// Stored and replayed verbatim; the application never parses them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
