pub mod api;
pub mod app;
pub mod rate_limit;
pub mod session;
