//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "luke@tatooine.org";

/// Default test user password.
pub const DEFAULT_PASSWORD: &str = "use-the-force";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"luke@tatooine.org"`
/// - password: `"use-the-force"`
/// - is_active: `true`
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        email: DEFAULT_EMAIL.to_string(),
        password: DEFAULT_PASSWORD.to_string(),
        is_active: true,
    }
}

/// Creates a user entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let user = fixture::user::entity_builder()
///     .email("leia@alderaan.org")
///     .is_active(false)
///     .build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    entity: user::Model,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.entity.password = password.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    pub fn build(self) -> user::Model {
        self.entity
    }
}
