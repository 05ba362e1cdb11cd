/*!
   Identity repository backed by sqlite.
*/

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::NewUser;
use crate::domain::identity::models::Role;
use crate::domain::identity::models::RoleId;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityRepository;
use crate::identity::errors::IdentityError;

pub struct SqliteIdentityRepository {
    pool: SqlitePool,
}

impl SqliteIdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    full_name: Option<String>,
    password_hash: String,
}

#[derive(sqlx::FromRow)]
struct RoleRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Self {
            id: RoleId(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

#[async_trait]
impl IdentityRepository for SqliteIdentityRepository {
    async fn create_user(&self, user: NewUser, roles: &[Role]) -> Result<User, IdentityError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, full_name, password_hash)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.full_name.as_deref())
        .bind(&user.password_hash)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    // sqlite reports the violated column as "<table>.<column>"
                    if db_err.message().contains("users.username") {
                        return IdentityError::UsernameAlreadyExists(
                            user.username.as_str().to_string(),
                        );
                    }
                    if db_err.message().contains("users.email") {
                        return IdentityError::EmailAlreadyExists(user.email.as_str().to_string());
                    }
                }
            }
            IdentityError::DatabaseError(e.to_string())
        })?;

        let user_id = result.last_insert_rowid();

        for role in roles {
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO user_roles (user_id, role_id)
                VALUES (?, ?)
                "#,
            )
            .bind(user_id)
            .bind(role.id.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        Ok(User {
            id: UserId(user_id),
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            password_hash: user.password_hash,
            roles: roles.iter().map(|role| role.name.clone()).collect(),
        })
    }

    async fn find_user_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, IdentityError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, full_name, password_hash
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let role_names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT r.name
            FROM roles r
            INNER JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = ?
            "#,
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        Ok(Some(User {
            id: UserId(row.id),
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            full_name: row.full_name,
            password_hash: row.password_hash,
            roles: role_names.into_iter().collect(),
        }))
    }

    async fn ensure_role(&self, name: &str, description: &str) -> Result<Role, IdentityError> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO roles (name, description)
            VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(description)
        .execute(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description
            FROM roles
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        Ok(Role::from(row))
    }

    async fn attach_role(&self, user_id: &UserId, role_id: &RoleId) -> Result<(), IdentityError> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO user_roles (user_id, role_id)
            VALUES (?, ?)
            "#,
        )
        .bind(user_id.0)
        .bind(role_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
