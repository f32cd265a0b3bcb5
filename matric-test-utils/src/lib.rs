pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::{
            candidate::mock_create_candidate,
            hubtel::{
                mock_checkout_endpoint, mock_sms_endpoint, mock_sms_rejected_endpoint,
                mock_status_endpoint,
            },
        },
        test_setup_with_tables, TestError, TestSetup,
    };
}
