//! Tests for the admission services: house placement, credential issuance,
//! payment lifecycle, and application number sequencing.

mod allocation;
mod credential;
mod payment;
mod sequence;
