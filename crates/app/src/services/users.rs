//! User accounts and password management.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use causa_core::error::CoreError;
use causa_core::types::DbId;
use causa_core::validation;
use causa_db::models::user::{CreateUser, UpdateUser, User, UserSummary};
use causa_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

pub struct UserService<'a> {
    state: &'a AppState,
}

impl<'a> UserService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a user, hashing the password with Argon2. A duplicate
    /// username surfaces as a conflict.
    pub async fn create(
        &self,
        username: &str,
        password: &str,
        full_name: &str,
    ) -> AppResult<UserSummary> {
        validation::validate_username(username)?;
        validate_password(password)?;

        let input = CreateUser {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            full_name: full_name.to_string(),
        };
        let user = UserRepo::create(&self.state.pool, &input).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user.into())
    }

    pub async fn get(&self, id: DbId) -> AppResult<UserSummary> {
        self.get_full(id).await.map(UserSummary::from)
    }

    pub async fn list(&self) -> AppResult<Vec<UserSummary>> {
        let users = UserRepo::list(&self.state.pool).await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    pub async fn update(&self, id: DbId, input: UpdateUser) -> AppResult<UserSummary> {
        UserRepo::update(&self.state.pool, id, &input)
            .await?
            .map(UserSummary::from)
            .ok_or_else(|| AppError::not_found("User", id))
    }

    /// Deactivation is the user lifecycle's soft delete.
    pub async fn deactivate(&self, id: DbId) -> AppResult<()> {
        if !UserRepo::deactivate(&self.state.pool, id).await? {
            return Err(AppError::not_found("User", id));
        }
        Ok(())
    }

    pub async fn reactivate(&self, id: DbId) -> AppResult<()> {
        if !UserRepo::reactivate(&self.state.pool, id).await? {
            return Err(AppError::not_found("User", id));
        }
        Ok(())
    }

    /// Verify a username/password pair, rejecting inactive accounts.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> AppResult<UserSummary> {
        let user = UserRepo::find_by_username(&self.state.pool, username)
            .await?
            .ok_or_else(|| unauthorized())?;
        if !user.is_active {
            return Err(unauthorized());
        }
        if !verify_password(password, &user.password_hash)? {
            return Err(unauthorized());
        }
        Ok(user.into())
    }

    /// Change a password after verifying the current one.
    pub async fn change_password(
        &self,
        id: DbId,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        validate_password(new_password)?;
        let user = self.get_full(id).await?;
        if !verify_password(current_password, &user.password_hash)? {
            return Err(unauthorized());
        }
        UserRepo::update_password(&self.state.pool, id, &hash_password(new_password)?).await?;
        tracing::info!(user_id = id, "Password changed");
        Ok(())
    }

    async fn get_full(&self, id: DbId) -> AppResult<User> {
        UserRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("User", id))
    }
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid username or password".into()))
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ))));
    }
    Ok(())
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
