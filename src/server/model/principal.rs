use entity::user::UserRole;
use sea_orm::ActiveEnum;

use crate::server::error::auth::AuthError;

/// The authenticated account behind a request.
///
/// Handlers resolve the principal from the session once and pass it down to
/// services explicitly; nothing below the controller layer reads the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub role: UserRole,
}

impl Principal {
    /// Ensures the principal holds the instructor role.
    pub fn require_cfi(&self) -> Result<(), AuthError> {
        if self.role == UserRole::Cfi {
            Ok(())
        } else {
            Err(AuthError::CfiRequired {
                user_id: self.user_id,
                role: self.role.to_value(),
            })
        }
    }
}

impl From<&entity::user::Model> for Principal {
    fn from(user: &entity::user::Model) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
        }
    }
}
