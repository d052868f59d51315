use std::fmt;

/// The closed set of roles a token may carry and a route may require.
///
/// Authorization is exact-match only: there is no hierarchy between
/// roles, so holding [`Role::Admin`] does not implicitly satisfy a
/// moderator requirement (or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    /// The wire value stored in a token's `role` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }
}

/// Capitalized form used in error messages ("Require Admin Role!").
impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Moderator => write!(f, "Moderator"),
            Role::User => write!(f, "User"),
        }
    }
}
