//! User identity.

use crate::auth::UserRecord;
use morsel_commerce::UserId;
use serde::{Deserialize, Serialize};

/// The storefront's view of who is browsing.
///
/// Anonymous is a perfectly valid state; it only blocks checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum User {
    /// No resolvable identity.
    #[default]
    Anonymous,
    /// Identity returned by the authentication endpoint.
    Identified {
        id: UserId,
        name: Option<String>,
        email: Option<String>,
    },
}

impl User {
    /// Check if an identity is resolved.
    pub fn is_identified(&self) -> bool {
        matches!(self, User::Identified { .. })
    }

    /// Get the user id, if identified.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            User::Identified { id, .. } => Some(id),
            User::Anonymous => None,
        }
    }

    /// Name to show in the rendering layer.
    pub fn display_name(&self) -> &str {
        match self {
            User::Identified { name, email, id } => name
                .as_deref()
                .or(email.as_deref())
                .unwrap_or_else(|| id.as_str()),
            User::Anonymous => "guest",
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User::Identified {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}
