use argon2::{
    password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand_core::OsRng;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginRequest, RegisterUserRequest},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
        util::validate::is_valid_email,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an email/password account.
    ///
    /// New accounts always start with the pilot role; instructor accounts are
    /// promoted out of band. The password is stored as an Argon2 hash, never
    /// in clear text.
    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<entity::user::Model, Error> {
        validate_registration(&request)?;

        let user_repository = UserRepository::new(self.db);

        if user_repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(Error::AuthError(AuthError::EmailTaken(request.email)));
        }

        let password_hash = hash_password(&request.password)?;

        let user = user_repository
            .create(
                &request.email,
                &password_hash,
                Some(request.first_name),
                Some(request.last_name),
            )
            .await?;

        Ok(user)
    }

    /// Checks credentials against the stored password hash.
    ///
    /// An unknown email, an account without a stored password, and a wrong
    /// password all collapse into the same error so the response does not
    /// reveal which emails are registered.
    pub async fn login(&self, request: LoginRequest) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        let Some(user) = user_repository.find_by_email(&request.email).await? else {
            return Err(Error::AuthError(AuthError::InvalidCredentials));
        };

        let Some(stored_hash) = user.password.as_deref() else {
            return Err(Error::AuthError(AuthError::InvalidCredentials));
        };

        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|_| Error::AuthError(AuthError::InvalidCredentials))?;

        Argon2::default()
            .verify_password(request.password.as_bytes(), &parsed_hash)
            .map_err(|_| Error::AuthError(AuthError::InvalidCredentials))?;

        Ok(user)
    }
}

fn validate_registration(request: &RegisterUserRequest) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    if !is_valid_email(&request.email) {
        errors.push("email", "must be a valid email address");
    }
    if request.password.len() < 8 {
        errors.push("password", "must be at least 8 characters");
    }
    if request.first_name.trim().is_empty() {
        errors.push("first_name", "must not be empty");
    }
    if request.last_name.trim().is_empty() {
        errors.push("last_name", "must not be empty");
    }

    errors.into_result()
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| Error::InternalError(format!("Failed to hash password: {err}")))?;

    Ok(hash.to_string())
}
