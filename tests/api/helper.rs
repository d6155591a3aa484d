use lessonrush::{
    app::App,
    config::{get_configuration, DatabaseSettings},
    domain::waitlist::WaitlistEntry,
    telemetry::get_subscriber,
};
use once_cell::sync::Lazy;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = "lessonrush=trace,sqlx=trace,tower_http=trace,axum::rejection=trace";

    if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(env_filter, std::io::stdout).init();
    } else {
        get_subscriber(env_filter, std::io::sink).init();
    };
});

pub struct TestApp {
    pub addr: String,
    pub db_pool: PgPool,
}

impl TestApp {
    pub async fn post_waitlist(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/waitlist", &self.addr))
            .json(&serde_json::from_str::<Value>(body).unwrap())
            .send()
            .await
            .expect("The request should succeed.")
    }

    pub async fn post_waitlist_raw(&self, body: &'static str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/waitlist", &self.addr))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .expect("The request should succeed.")
    }

    pub async fn saved_entries(&self) -> Vec<WaitlistEntry> {
        sqlx::query_as::<_, WaitlistEntry>(
            r#"
            SELECT id, email, feedback, pain_points, created_at, updated_at
            FROM waitlist_entries
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.db_pool)
        .await
        .expect("The waitlist entries should be readable.")
    }

    pub async fn saved_entry(&self, email: &str) -> WaitlistEntry {
        sqlx::query_as::<_, WaitlistEntry>(
            r#"
            SELECT id, email, feedback, pain_points, created_at, updated_at
            FROM waitlist_entries
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.db_pool)
        .await
        .expect("The waitlist entry should exist.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.database.database_name = Uuid::new_v4().to_string();

    let connection_pool = configure_database(&config.database).await;
    let app = App::with(&config)
        .await
        .expect("The listener should be able to bind the address.");

    let test_app = TestApp {
        addr: format!("http://127.0.0.1:{}", app.port()),
        db_pool: connection_pool.clone(),
    };

    let _ = tokio::spawn(async move {
        app.serve(connection_pool)
            .await
            .expect("The server should be running")
    });

    test_app
}

async fn configure_database(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("A postgres connection should be created.");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("The database should be created.");

    // Migrate database
    let connection_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("A postgres connection pool should be created.");

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("The migrations should run without error.");

    connection_pool
}

pub fn get_client() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
