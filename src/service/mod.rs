//! Business logic services for the admission workflow.
//!
//! Services coordinate repositories and the Hubtel client: house placement,
//! application number sequencing, credential issuance, and the payment
//! lifecycle. Controllers construct a service per request and call it.

pub mod allocation;
pub mod credential;
pub mod payment;
pub mod retry;
pub mod sequence;
