use async_trait::async_trait;

use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::Role;
use crate::domain::identity::models::RoleId;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::identity::errors::IdentityError;
use crate::identity::models::Username;

/// Persistence operations for users and roles.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a new user and attach the given roles in one transaction.
    ///
    /// # Arguments
    /// * `user` - User data with an already hashed password
    /// * `roles` - Roles to attach to the created user
    ///
    /// # Returns
    /// Created user entity with the attached role names
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, user: NewUser, roles: &[Role]) -> Result<User, IdentityError>;

    /// Retrieve a user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity with attached role names (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_user_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, IdentityError>;

    /// Create a role if it does not exist yet and return it.
    ///
    /// Calling this for an existing role name leaves the stored role
    /// untouched.
    ///
    /// # Arguments
    /// * `name` - Unique role name
    /// * `description` - Description used only when the role is created
    ///
    /// # Returns
    /// The stored role, created or pre-existing
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn ensure_role(&self, name: &str, description: &str) -> Result<Role, IdentityError>;

    /// Attach a role to a user.
    ///
    /// Attaching a role the user already holds is a no-op.
    ///
    /// # Arguments
    /// * `user_id` - User to grant the role to
    /// * `role_id` - Role to attach
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn attach_role(&self, user_id: &UserId, role_id: &RoleId) -> Result<(), IdentityError>;
}
