use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{
        CHECKOUT_PATH, SMS_PATH, STATUS_PATH, TEST_CALLBACK_URL, TEST_CANCELLATION_URL,
        TEST_HUBTEL_API_ID, TEST_HUBTEL_API_KEY, TEST_MERCHANT_ACCOUNT, TEST_RETURN_URL,
        TEST_SMS_CLIENT_ID, TEST_SMS_CLIENT_SECRET, TEST_SMS_SENDER,
    },
    error::TestError,
};

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub hubtel: matric::hubtel::Client,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub session: Session,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without wiring test-only state by hand.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, matric::hubtel::Client)>,
    {
        T::from((self.state.db.clone(), self.state.hubtel.clone()))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let hubtel = matric::hubtel::Client::builder()
            .checkout_url(&format!("{}{}", mock_server_url, CHECKOUT_PATH))
            .status_url(&format!("{}{}", mock_server_url, STATUS_PATH))
            .sms_url(&format!("{}{}", mock_server_url, SMS_PATH))
            .api_id(TEST_HUBTEL_API_ID)
            .api_key(TEST_HUBTEL_API_KEY)
            .merchant_account(TEST_MERCHANT_ACCOUNT)
            .callback_url(TEST_CALLBACK_URL)
            .return_url(TEST_RETURN_URL)
            .cancellation_url(TEST_CANCELLATION_URL)
            .sms_client_id(TEST_SMS_CLIENT_ID)
            .sms_client_secret(TEST_SMS_CLIENT_SECRET)
            .sms_sender(TEST_SMS_SENDER)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db, hubtel },
            session,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
