use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::user::UserRole;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account with the pilot role
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(Some(email.to_string())),
            password: ActiveValue::Set(Some(password_hash.to_string())),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            role: ActiveValue::Set(UserRole::Pilot),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Fetches the accounts for a set of IDs; IDs with no account are skipped
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use airworthy_test_utils::prelude::*;
        use entity::user::UserRole;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating an account, with the pilot role by default
        #[tokio::test]
        async fn creates_pilot_account() -> Result<(), TestError> {
            let test = test_setup_with_platform_tables!()?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository
                .create("amelia@example.com", "hash", Some("Amelia".to_string()), None)
                .await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.email.as_deref(), Some("amelia@example.com"));
            assert_eq!(user.role, UserRole::Pilot);

            Ok(())
        }

        /// Expect Error when creating an account with an email that is already taken
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let mut test = test_setup_with_platform_tables!()?;
            test.user().insert_pilot("amelia@example.com").await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository
                .create("amelia@example.com", "hash", None, None)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use airworthy_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when the account exists
        #[tokio::test]
        async fn finds_existing_account() -> Result<(), TestError> {
            let mut test = test_setup_with_platform_tables!()?;
            let user = test.user().insert_pilot("amelia@example.com").await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.get(user.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when the account does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_account() -> Result<(), TestError> {
            let test = test_setup_with_platform_tables!()?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.get(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.get(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_email {
        use airworthy_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when an account with the email exists
        #[tokio::test]
        async fn finds_account_by_email() -> Result<(), TestError> {
            let mut test = test_setup_with_platform_tables!()?;
            let user = test.user().insert_pilot("amelia@example.com").await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.find_by_email("amelia@example.com").await;

            assert!(matches!(result, Ok(Some(_))));
            assert_eq!(result.unwrap().unwrap().id, user.id);

            Ok(())
        }

        /// Expect Ok(None) when no account has the email
        #[tokio::test]
        async fn returns_none_for_unknown_email() -> Result<(), TestError> {
            let test = test_setup_with_platform_tables!()?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.find_by_email("nobody@example.com").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_many {
        use airworthy_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect only the accounts whose IDs were requested
        #[tokio::test]
        async fn returns_requested_accounts() -> Result<(), TestError> {
            let mut test = test_setup_with_platform_tables!()?;
            let first = test.user().insert_pilot("first@example.com").await?;
            let second = test.user().insert_pilot("second@example.com").await?;
            test.user().insert_pilot("third@example.com").await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.get_many(&[first.id, second.id]).await?;

            assert_eq!(result.len(), 2);

            Ok(())
        }

        /// Expect an empty result for an empty ID set
        #[tokio::test]
        async fn returns_empty_for_no_ids() -> Result<(), TestError> {
            let mut test = test_setup_with_platform_tables!()?;
            test.user().insert_pilot("first@example.com").await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.get_many(&[]).await?;

            assert!(result.is_empty());

            Ok(())
        }
    }
}
