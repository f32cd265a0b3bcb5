pub mod admin;
pub mod candidate;
pub mod document;
pub mod house;
pub mod log;
pub mod payment;
pub mod programme;
pub mod school_class;
