pub use super::admin_log::Entity as AdminLog;
pub use super::admin_user::Entity as AdminUser;
pub use super::candidate::Entity as Candidate;
pub use super::candidate_log::Entity as CandidateLog;
pub use super::document::Entity as Document;
pub use super::house::Entity as House;
pub use super::payment::Entity as Payment;
pub use super::programme::Entity as Programme;
pub use super::school_class::Entity as SchoolClass;
