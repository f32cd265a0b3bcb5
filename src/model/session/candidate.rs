use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

pub const SESSION_CANDIDATE_KEY: &str = "matric:candidate:index_number";

/// Index number of the logged-in candidate, stored in the session after a
/// successful serial/PIN login.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCandidate(pub String);

impl SessionCandidate {
    /// Insert candidate index number into session
    pub async fn insert(session: &Session, index_number: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_CANDIDATE_KEY,
                SessionCandidate(index_number.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get candidate index number from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionCandidate>(SESSION_CANDIDATE_KEY)
            .await?
            .map(|SessionCandidate(index_number)| index_number))
    }
}
