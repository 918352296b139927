pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::flight::factory as flight_factory, fixtures::user::factory as user_factory,
        test_setup_with_platform_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
