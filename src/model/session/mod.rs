pub mod admin;
pub mod candidate;

pub use admin::SessionAdminId;
pub use candidate::SessionCandidate;
