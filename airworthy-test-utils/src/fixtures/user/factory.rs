//! Factory functions for generating mock user database models.
//!
//! Provides pure functions for creating account database models with standard test
//! values. These are in-memory model instances that don't require database interaction,
//! suitable for unit tests.

use chrono::Utc;
use entity::user::UserRole;

use crate::model::UserModel;

/// Create a mock user database model for testing.
///
/// Returns a UserModel with standard test values. This creates an in-memory model
/// instance without database interaction, suitable for unit tests.
///
/// # Arguments
/// - `id` - The user ID
/// - `role` - The platform role for the account
///
/// # Returns
/// - `UserModel` - A user model with test data
pub fn mock_user_model(id: i32, role: UserRole) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id,
        email: Some(format!("user{id}@example.com")),
        password: None,
        first_name: Some("Test".to_string()),
        last_name: Some("Pilot".to_string()),
        profile_image_url: None,
        role,
        cfi_number: matches!(role, UserRole::Cfi).then(|| format!("CFI-{id:06}")),
        created_at: now,
        updated_at: now,
    }
}
