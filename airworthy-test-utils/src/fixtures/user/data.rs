//! User account database insertion utilities.

use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::user::UserFixtures, model::UserModel};

impl<'a> UserFixtures<'a> {
    /// Insert an account with the given email and role.
    ///
    /// # Arguments
    /// - `email` - Login email, must be unique within the test database
    /// - `role` - Platform role for the account
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created account record
    /// - `Err(TestError::DbErr)` - Insert operation failed
    pub async fn insert_user(&self, email: &str, role: UserRole) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();
        let last_name = match role {
            UserRole::Cfi => "Instructor",
            _ => "Pilot",
        };

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(Some(email.to_string())),
            first_name: ActiveValue::Set(Some("Test".to_string())),
            last_name: ActiveValue::Set(Some(last_name.to_string())),
            role: ActiveValue::Set(role),
            cfi_number: ActiveValue::Set(
                matches!(role, UserRole::Cfi).then(|| "CFI-000001".to_string()),
            ),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a pilot account.
    pub async fn insert_pilot(&self, email: &str) -> Result<UserModel, TestError> {
        self.insert_user(email, UserRole::Pilot).await
    }

    /// Insert an instructor account.
    pub async fn insert_cfi(&self, email: &str) -> Result<UserModel, TestError> {
        self.insert_user(email, UserRole::Cfi).await
    }
}
