use response_service::config::AppConfig;
use response_service::services::providers::mock::MockTextProvider;
use response_service::services::providers::TextProvider;
use response_service::services::ResponseDb;
use response_service::startup::Application;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: ResponseDb,
    pub db_name: String,
}

impl TestApp {
    /// Spawn the app with the standard mock provider.
    pub async fn spawn() -> Self {
        Self::spawn_with_provider(Arc::new(MockTextProvider::new(true))).await
    }

    /// Spawn the app with an injected provider, on a random port and a
    /// unique database.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("responses_test_{}", Uuid::new_v4());

        let mut config = AppConfig::load().expect("Failed to load configuration");
        config.server.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Cleanup test resources.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
