//! Tests for HTTP controller endpoints, calling handlers directly with a
//! test state and session.

mod admin;
mod auth;
mod voucher;
