pub mod admin;
pub mod auth;
pub mod candidate;
pub mod document;
pub mod house;
pub mod log;
pub mod payment;
pub mod programme;
pub mod school_class;
pub mod util;
pub mod voucher;
