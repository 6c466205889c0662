//! End-to-end persistence tests: service over an on-disk `SQLite` database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use toolwire_core::{
    AgentStateError, AgentStatePort, ConnectionDescriptor, ConnectionDraft, McpConfigError,
    McpConfigService, McpRegistry, RegistrySession,
};
use toolwire_db::{CoreFactory, open_database, setup_database};

/// Agent channel that records every snapshot it receives.
#[derive(Default)]
struct RecordingAgent {
    received: Mutex<Vec<McpRegistry>>,
}

#[async_trait]
impl AgentStatePort for RecordingAgent {
    async fn set_mcp_config(&self, registry: &McpRegistry) -> Result<(), AgentStateError> {
        self.received.lock().unwrap().push(registry.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "recording agent".to_string()
    }
}

async fn service_at(dir: &TempDir, agent: Arc<RecordingAgent>) -> (McpConfigService, sqlx::SqlitePool) {
    let pool = setup_database(&dir.path().join("toolwire.db")).await.unwrap();
    (CoreFactory::build_mcp_config_service(pool.clone(), agent), pool)
}

#[tokio::test]
async fn save_then_hydrate_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut registry = McpRegistry::new();
    registry.add_draft("fs", &ConnectionDraft::stdio("python", "server.py --verbose"));
    registry.add_draft("remote", &ConnectionDraft::sse("http://localhost:8000/events"));

    {
        let (service, pool) = service_at(&dir, Arc::default()).await;
        assert_eq!(service.save(&registry).await.unwrap(), 2);
        pool.close().await;
    }

    let (service, _pool) = service_at(&dir, Arc::default()).await;
    assert_eq!(service.hydrate().await, registry);
}

#[tokio::test]
async fn empty_registry_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let (service, _pool) = service_at(&dir, Arc::default()).await;

    assert_eq!(service.save(&McpRegistry::new()).await.unwrap(), 0);
    assert!(service.hydrate().await.is_empty());
}

#[tokio::test]
async fn corrupted_row_hydrates_empty() {
    let dir = tempfile::tempdir().unwrap();
    let (service, pool) = service_at(&dir, Arc::default()).await;

    sqlx::query("INSERT OR REPLACE INTO config_kv (key, value, updated_at) VALUES (?, ?, ?)")
        .bind("mcp_config")
        .bind("\u{1}\u{2}{\"trunc")
        .bind("2024-01-01 00:00:00")
        .execute(&pool)
        .await
        .unwrap();

    assert!(service.hydrate().await.is_empty());
}

#[tokio::test]
async fn opening_a_session_publishes_hydrated_state() {
    let dir = tempfile::tempdir().unwrap();
    let agent = Arc::new(RecordingAgent::default());
    let (service, _pool) = service_at(&dir, agent.clone()).await;

    let mut stored = McpRegistry::new();
    stored.add("math", ConnectionDescriptor::stdio("python", vec!["math_server.py".into()]));
    service.save(&stored).await.unwrap();

    let session = RegistrySession::open(Arc::new(service)).await;
    assert_eq!(session.registry(), &stored);

    let received = agent.received.lock().unwrap();
    assert_eq!(received.len(), 2, "one push from save, one from open");
    assert!(received.iter().all(|r| *r == stored));
}

#[tokio::test]
async fn failed_save_leaves_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let agent = Arc::new(RecordingAgent::default());

    let mut before = McpRegistry::new();
    before.add("math", ConnectionDescriptor::stdio("python", vec![]));

    {
        let (service, pool) = service_at(&dir, agent.clone()).await;
        service.save(&before).await.unwrap();

        let mut attempted = before.clone();
        attempted.add("remote", ConnectionDescriptor::sse("http://localhost:8000/sse"));

        pool.close().await;
        let result = service.save(&attempted).await;
        assert!(matches!(result, Err(McpConfigError::Persistence(_))));
    }

    assert_eq!(agent.received.lock().unwrap().len(), 1, "no push after a failed write");

    let (service, _pool) = service_at(&dir, Arc::default()).await;
    assert_eq!(service.hydrate().await, before);
}

#[tokio::test]
async fn blank_stored_names_are_dropped_on_hydrate() {
    let dir = tempfile::tempdir().unwrap();
    let (service, pool) = service_at(&dir, Arc::default()).await;

    sqlx::query("INSERT OR REPLACE INTO config_kv (key, value, updated_at) VALUES (?, ?, ?)")
        .bind("mcp_config")
        .bind(
            r#"{"": {"transport": "stdio", "command": "python", "args": []},
                "  ": {"transport": "sse", "url": "http://localhost:8000/sse"},
                "fs": {"transport": "stdio", "command": "npx", "args": ["fs"]}}"#,
        )
        .bind("2024-01-01 00:00:00")
        .execute(&pool)
        .await
        .unwrap();

    let registry = service.hydrate().await;
    let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["fs"]);
}

#[tokio::test]
async fn unreadable_database_hydrates_empty_and_fails_save() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("toolwire.db");
    std::fs::write(&db_path, b"this is not an sqlite database file at all").unwrap();

    let agent = Arc::new(RecordingAgent::default());
    let service = CoreFactory::build_mcp_config_service(open_database(&db_path), agent.clone());

    assert!(service.hydrate().await.is_empty());

    let mut registry = McpRegistry::new();
    registry.add("math", ConnectionDescriptor::stdio("python", vec![]));
    assert!(matches!(
        service.save(&registry).await,
        Err(McpConfigError::Persistence(_))
    ));
    assert!(agent.received.lock().unwrap().is_empty());
}
