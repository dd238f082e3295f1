//! Static user records served by the users endpoint.

use serde::Serialize;

/// A sample user record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    /// Unique user id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl User {
    fn new(id: u64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Seed the fixed user list. Called once at startup; the list is never
/// mutated afterwards.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
        User::new(3, "Bob Johnson", "bob@example.com"),
    ]
}
