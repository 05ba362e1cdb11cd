use std::sync::Arc;

use auth::TokenService;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::identity::models::BootstrapAdmin;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::User;
use crate::domain::identity::models::Username;
use crate::identity::errors::IdentityError;
use crate::identity::ports::IdentityRepository;

/// Domain service for account registration, authentication and role
/// management.
pub struct IdentityService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
}

impl<R> IdentityService<R>
where
    R: IdentityRepository,
{
    /// Create a new identity service with an injected repository.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    ///
    /// # Returns
    /// Configured identity service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Register a new account and attach the default role.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    pub async fn register(&self, command: RegisterUserCommand) -> Result<User, IdentityError> {
        // Hash password using auth library
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| IdentityError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user_role = self.repository.ensure_role("user", "Regular user").await?;

        // Self-registered accounts start with the username as display name.
        let full_name = Some(command.username.to_string());
        let new_user = NewUser {
            username: command.username,
            email: command.email,
            full_name,
            password_hash,
        };

        self.repository.create_user(new_user, &[user_role]).await
    }

    /// Check credentials and resolve the caller's identity.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to
    /// the caller; both come back as `None`.
    ///
    /// # Arguments
    /// * `username` - Raw username as submitted
    /// * `password` - Plain text password to check
    ///
    /// # Returns
    /// Identity of the authenticated user, or None on bad credentials
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, IdentityError> {
        // A name that fails validation cannot belong to any stored user.
        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(_) => return Ok(None),
        };

        let user = match self.repository.find_user_by_username(&username).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Ok(None);
        }

        Ok(Some(Identity::from(&user)))
    }

    /// Ensure the baseline roles exist and optionally create the
    /// bootstrap admin account.
    ///
    /// Safe to run on every startup: existing roles are left untouched
    /// and a bootstrap admin whose username is already taken is
    /// skipped.
    ///
    /// # Arguments
    /// * `admin` - Bootstrap admin account to create, if configured
    ///
    /// # Errors
    /// * `InvalidUsername` - Configured admin username fails validation
    /// * `InvalidEmail` - Configured admin email fails validation
    /// * `DatabaseError` - Database operation failed
    pub async fn seed_initial_data(
        &self,
        admin: Option<&BootstrapAdmin>,
    ) -> Result<(), IdentityError> {
        self.repository.ensure_role("user", "Regular user").await?;
        let admin_role = self.repository.ensure_role("admin", "Administrator").await?;

        let admin = match admin {
            Some(admin) => admin,
            None => return Ok(()),
        };

        let username = Username::new(admin.username.clone())?;

        if self
            .repository
            .find_user_by_username(&username)
            .await?
            .is_some()
        {
            tracing::debug!(
                username = %username,
                "Bootstrap admin already present, skipping"
            );
            return Ok(());
        }

        let email = match &admin.email {
            Some(email) => email.clone(),
            None => format!("{}@example.com", admin.username),
        };
        let email = EmailAddress::new(email)?;

        let password_hash = self
            .password_hasher
            .hash(&admin.password)
            .map_err(|e| IdentityError::Unknown(format!("Password hashing failed: {}", e)))?;

        let new_user = NewUser {
            username,
            email,
            full_name: Some(admin.username.clone()),
            password_hash,
        };

        let user = self.repository.create_user(new_user, &[admin_role]).await?;
        tracing::info!(username = %user.username, "Bootstrap admin account created");

        Ok(())
    }

    /// Grant a role to an existing user.
    ///
    /// # Arguments
    /// * `username` - User to promote
    /// * `role_name` - Role to grant, created on demand
    /// * `description` - Description used if the role has to be created
    ///
    /// # Returns
    /// `true` when the role was newly attached, `false` when the user
    /// already held it
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `DatabaseError` - Database operation failed
    pub async fn promote(
        &self,
        username: &str,
        role_name: &str,
        description: &str,
    ) -> Result<bool, IdentityError> {
        let username = Username::new(username.to_string())
            .map_err(|_| IdentityError::NotFound(username.to_string()))?;

        let user = self
            .repository
            .find_user_by_username(&username)
            .await?
            .ok_or(IdentityError::NotFound(username.to_string()))?;

        if user.roles.contains(role_name) {
            return Ok(false);
        }

        let role = self.repository.ensure_role(role_name, description).await?;
        self.repository.attach_role(&user.id, &role.id).await?;

        Ok(true)
    }
}

/// Token-verifying role guard for inbound requests.
///
/// The role check reads the user live from storage on every call, so a
/// promotion or revocation takes effect without waiting for previously
/// issued tokens to expire.
pub struct AccessGuard<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    token_service: Arc<TokenService>,
}

impl<R> AccessGuard<R>
where
    R: IdentityRepository,
{
    /// Create a new access guard.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `token_service` - Verifier for bearer tokens
    ///
    /// # Returns
    /// Configured access guard instance
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
        }
    }

    /// Resolve a bearer token into an identity holding at least one of
    /// the required roles.
    ///
    /// # Arguments
    /// * `token` - Raw bearer token from the Authorization header
    /// * `required_roles` - Role names of which at least one must be held; empty accepts any caller
    /// * `now` - Clock used for the expiry check
    ///
    /// # Returns
    /// Identity of the verified caller
    ///
    /// # Errors
    /// * `Unauthenticated` - Token invalid or expired, or subject unknown
    /// * `Forbidden` - Caller holds none of the required roles
    /// * `DatabaseError` - Database operation failed
    pub async fn authorize(
        &self,
        token: &str,
        required_roles: &[&str],
        now: DateTime<Utc>,
    ) -> Result<Identity, IdentityError> {
        let subject = self
            .token_service
            .verify(token, now)
            .map_err(|_| IdentityError::Unauthenticated)?;

        let username = Username::new(subject).map_err(|_| IdentityError::Unauthenticated)?;

        let user = self
            .repository
            .find_user_by_username(&username)
            .await?
            .ok_or(IdentityError::Unauthenticated)?;

        let identity = Identity::from(&user);

        if !identity.roles.has_any_of(required_roles) {
            return Err(IdentityError::Forbidden);
        }

        Ok(identity)
    }
}
