pub mod candidate;
pub mod hubtel;
