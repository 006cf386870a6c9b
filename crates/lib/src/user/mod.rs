//! User accounts for Paperboard
//!
//! Registration, password login and account lookup. Passwords are stored as
//! Argon2id hashes; the plaintext never reaches the backend.

pub mod crypto;
pub mod errors;
pub mod types;

pub use errors::UserError;
pub use types::{Credentials, Registration};

use crate::{Instance, Result, models::User};

fn required(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UserError::MissingField { field }.into());
    }
    Ok(())
}

impl Instance {
    /// Create a new account.
    ///
    /// Username and email are trimmed and must be unique. Registrations are
    /// serialized on this Instance so two concurrent requests cannot both pass
    /// the uniqueness checks.
    ///
    /// # Errors
    /// - `UserError::MissingField` if any field is blank
    /// - `UserError::EmailAlreadyRegistered` or `UserError::UsernameAlreadyExists`
    pub async fn register_user(&self, registration: Registration) -> Result<User> {
        let username = registration.username.trim().to_string();
        let email = registration.email.trim().to_string();
        required(&username, "username")?;
        required(&email, "email")?;
        required(&registration.password, "password")?;

        let _guard = self.registration_lock().lock().await;
        let users = self.users();

        if users.find_first(|u| u.email == email).await?.is_some() {
            return Err(UserError::EmailAlreadyRegistered { email }.into());
        }
        if users.find_first(|u| u.username == username).await?.is_some() {
            return Err(UserError::UsernameAlreadyExists { username }.into());
        }

        let user = User {
            username,
            email,
            password_hash: crypto::hash_password(&registration.password)?,
        };
        let oid = users.insert(user.clone()).await?;
        tracing::info!(username = %user.username, %oid, "Registered user");
        Ok(user)
    }

    /// Authenticate by email and password.
    ///
    /// An unknown email and a wrong password both yield
    /// `UserError::InvalidCredentials`.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        let mut matches = self.users().search(|u| u.email == email).await?;

        if matches.len() > 1 {
            return Err(UserError::DuplicateEmailsDetected {
                email: email.to_string(),
                count: matches.len(),
            }
            .into());
        }
        let Some((_, user)) = matches.pop() else {
            tracing::debug!(email, "Login for unknown email");
            return Err(UserError::InvalidCredentials.into());
        };

        crypto::verify_password(password, &user.password_hash)?;
        tracing::debug!(username = %user.username, "User logged in");
        Ok(user)
    }

    /// Look up an account by username.
    pub async fn load_user(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users()
            .find_first(|u| u.username == username)
            .await?
            .map(|(_, user)| user))
    }

    /// Look up an account by username, failing if it does not exist.
    pub async fn get_user(&self, username: &str) -> Result<User> {
        self.load_user(username).await?.ok_or_else(|| {
            UserError::UserNotFound {
                username: username.to_string(),
            }
            .into()
        })
    }

    /// List all usernames in registration order.
    pub async fn list_users(&self) -> Result<Vec<String>> {
        Ok(self
            .users()
            .load_all()
            .await?
            .into_iter()
            .map(|(_, user)| user.username)
            .collect())
    }
}
