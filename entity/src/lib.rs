pub mod admin_log;
pub mod admin_user;
pub mod candidate;
pub mod candidate_log;
pub mod document;
pub mod house;
pub mod payment;
pub mod programme;
pub mod school_class;

pub mod prelude;
