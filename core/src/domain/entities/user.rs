//! User entity representing a registered WheelShare member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user plays on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Lists cars for rent
    Owner,
    /// Books listed cars
    Renter,
}

impl UserRole {
    /// Parse a role from its wire representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "renter" => Some(Self::Renter),
            _ => None,
        }
    }

    /// The wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Renter => "renter",
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique across users)
    pub email: String,

    /// Mobile phone number
    pub phone: String,

    /// bcrypt hash of the password; never serialized in responses
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Role (owner or renter)
    pub role: UserRole,

    /// Whether the user passed PAN verification
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a fresh identifier and timestamps
    pub fn new(
        name: String,
        email: String,
        phone: String,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            password_hash,
            role,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Checks if the user lists cars
    pub fn is_owner(&self) -> bool {
        self.role == UserRole::Owner
    }

    /// Checks if the user rents cars
    pub fn is_renter(&self) -> bool {
        self.role == UserRole::Renter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "+919876543210".to_string(),
            "$2b$10$hash".to_string(),
            UserRole::Renter,
        )
    }

    #[test]
    fn new_user_is_unverified() {
        let user = sample_user();
        assert!(!user.is_verified);
        assert!(user.is_renter());
        assert!(!user.is_owner());
    }

    #[test]
    fn verify_flips_flag_and_touches_timestamp() {
        let mut user = sample_user();
        let before = user.updated_at;
        user.verify();
        assert!(user.is_verified);
        assert!(user.updated_at >= before);
    }

    #[test]
    fn role_round_trips_through_wire_format() {
        assert_eq!(UserRole::parse("owner"), Some(UserRole::Owner));
        assert_eq!(UserRole::parse("renter"), Some(UserRole::Renter));
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::Owner.as_str(), "owner");
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$"));
    }
}
