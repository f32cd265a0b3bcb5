//! Admission backend core modules.
//!
//! This crate contains all server-side functionality for the matric admission
//! application: HTTP routing, candidate verification and login, fee payment
//! through Hubtel, credential issuance over SMS, house placement, application
//! number sequencing, and the admin management API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod hubtel;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
