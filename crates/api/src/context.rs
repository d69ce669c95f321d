use sweetshop_auth::Role;
use sweetshop_core::UserId;

/// Principal context for a request (authenticated identity + role).
///
/// Absent from request extensions for anonymous callers; the permission
/// policy decides which operations those may reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    user_id: UserId,
    username: String,
    role: Role,
}

impl PrincipalContext {
    pub fn new(user_id: UserId, username: String, role: Role) -> Self {
        Self {
            user_id,
            username,
            role,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
