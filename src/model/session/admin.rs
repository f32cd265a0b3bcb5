use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

pub const SESSION_ADMIN_ID_KEY: &str = "matric:admin:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAdminId(pub String);

impl SessionAdminId {
    /// Insert admin ID into session
    pub async fn insert(session: &Session, admin_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_ADMIN_ID_KEY, SessionAdminId(admin_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get admin ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionAdminId>(SESSION_ADMIN_ID_KEY)
            .await?
            .map(|SessionAdminId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session admin id: {}", e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    mod session_insert_admin_id_tests {
        use matric_test_utils::prelude::*;

        use crate::model::session::admin::SessionAdminId;

        #[tokio::test]
        /// Expect success when inserting valid admin ID into session
        async fn test_insert_session_admin_id_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionAdminId::insert(&test.session, 1).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod session_get_admin_id_tests {
        use matric_test_utils::prelude::*;

        use crate::model::session::admin::{SessionAdminId, SESSION_ADMIN_ID_KEY};

        #[tokio::test]
        /// Expect Some when admin ID is present in session
        async fn test_get_session_admin_id_some() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            SessionAdminId::insert(&test.session, 7).await.unwrap();

            let result = SessionAdminId::get(&test.session).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap(), Some(7));

            Ok(())
        }

        #[tokio::test]
        /// Expect None when no admin ID is present in session
        async fn test_get_session_admin_id_none() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionAdminId::get(&test.session).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }

        #[tokio::test]
        /// Expect parse error when admin ID inserted into session is not an i32
        async fn test_get_session_admin_id_parse_error() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            test.session
                .insert(SESSION_ADMIN_ID_KEY, SessionAdminId("invalid_id".to_string()))
                .await?;

            let result = SessionAdminId::get(&test.session).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
