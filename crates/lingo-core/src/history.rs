use std::sync::Arc;

use lingo_config::history::HistoryConfig;
use lingo_types::TranslationRecord;

use crate::store::{KeyValueStore, StoreError};

/// Result of a best-effort history write.
///
/// Failures are logged where they happen and handed back for inspection,
/// never raised to the caller as an error.
#[must_use]
#[derive(Debug)]
pub enum WriteOutcome {
    Written,
    Skipped(StoreError),
}

impl WriteOutcome {
    fn log(operation: &str, result: Result<(), StoreError>) -> Self {
        match result {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                tracing::warn!("history {operation} skipped: {e}");
                WriteOutcome::Skipped(e)
            }
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written)
    }
}

/// Bounded, newest-first translation history kept under one storage key.
///
/// `save` is an unguarded read-modify-write: callers must not run two saves
/// against the same store concurrently.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    max_entries: usize,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, max_entries: usize) -> Self {
        Self {
            store,
            key: key.into(),
            max_entries,
        }
    }

    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &HistoryConfig) -> Self {
        Self::new(store, config.storage_key.clone(), config.max_entries)
    }

    /// Persisted history, newest first and never longer than the bound.
    /// Missing or unreadable data yields an empty list.
    pub async fn load(&self) -> Vec<TranslationRecord> {
        match self.try_load().await {
            Ok(mut records) => {
                records.truncate(self.max_entries);
                records
            }
            Err(e) => {
                tracing::warn!("failed to load history, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Prepend `record` and drop whatever falls past the bound
    pub async fn save(&self, record: TranslationRecord) -> WriteOutcome {
        let mut records = self.load().await;
        records.insert(0, record);
        records.truncate(self.max_entries);

        WriteOutcome::log("save", self.write(&records).await)
    }

    pub async fn clear(&self) -> WriteOutcome {
        WriteOutcome::log("clear", self.store.remove(&self.key).await)
    }

    async fn try_load(&self) -> Result<Vec<TranslationRecord>, StoreError> {
        match self.store.get(&self.key).await? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, records: &[TranslationRecord]) -> Result<(), StoreError> {
        let data = serde_json::to_string(records)?;
        self.store.set(&self.key, &data).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::store::MemoryStore;

    const KEY: &str = "recentTranslations";

    fn record(n: usize) -> TranslationRecord {
        let ts = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000 + n as i64).unwrap();
        TranslationRecord::at(format!("text {n}"), format!("texto {n}"), "Spanish".into(), ts)
    }

    fn history() -> (HistoryStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (HistoryStore::new(store.clone(), KEY, 10), store)
    }

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::other("disk unavailable").into())
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("disk unavailable").into())
        }

        async fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("disk unavailable").into())
        }
    }

    #[tokio::test]
    async fn empty_when_nothing_persisted() {
        let (history, _) = history();
        assert!(history.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_returns_identical_record_first() {
        let (history, _) = history();
        let first = TranslationRecord::new("Hello".into(), "Hola".into(), "Spanish".into());
        let second = TranslationRecord::new("Bye".into(), "Adiós".into(), "Spanish".into());

        assert!(history.save(first.clone()).await.is_written());
        assert!(history.save(second.clone()).await.is_written());

        let loaded = history.load().await;
        assert_eq!(loaded, vec![second, first]);
    }

    #[tokio::test]
    async fn eleven_saves_keep_newest_ten() {
        let (history, _) = history();

        for n in 1..=11 {
            let _ = history.save(record(n)).await;
            assert!(history.load().await.len() <= 10);
        }

        let loaded = history.load().await;
        let expected: Vec<_> = (2..=11).rev().map(record).collect();
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn respects_configured_bound() {
        let store = Arc::new(MemoryStore::new());
        let config = HistoryConfig {
            max_entries: 3,
            ..HistoryConfig::default()
        };
        let history = HistoryStore::from_config(store, &config);

        for n in 0..5 {
            let _ = history.save(record(n)).await;
        }

        let originals: Vec<_> = history.load().await.into_iter().map(|r| r.original).collect();
        assert_eq!(originals, ["text 4", "text 3", "text 2"]);
    }

    #[tokio::test]
    async fn lowered_bound_caps_existing_history_on_load() {
        let store = Arc::new(MemoryStore::new());
        let wide = HistoryStore::new(store.clone(), KEY, 20);
        for n in 1..=15 {
            let _ = wide.save(record(n)).await;
        }
        assert_eq!(wide.load().await.len(), 15);

        let narrow = HistoryStore::new(store, KEY, 10);
        let loaded = narrow.load().await;
        let expected: Vec<_> = (6..=15).rev().map(record).collect();
        assert_eq!(loaded, expected);

        let _ = narrow.save(record(16)).await;
        assert_eq!(narrow.load().await.len(), 10);
        assert_eq!(narrow.load().await[0], record(16));
    }

    #[tokio::test]
    async fn corrupt_data_reads_as_empty_and_is_replaced_on_save() {
        let (history, store) = history();
        store.set(KEY, "{not json").await.unwrap();

        assert!(history.load().await.is_empty());

        let _ = history.save(record(1)).await;
        assert_eq!(history.load().await, vec![record(1)]);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let (history, store) = history();
        let _ = history.save(record(1)).await;

        assert!(history.clear().await.is_written());
        assert!(history.load().await.is_empty());
        assert!(store.get(KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn storage_failures_are_swallowed() {
        let history = HistoryStore::new(Arc::new(BrokenStore), KEY, 10);

        assert!(history.load().await.is_empty());
        assert!(matches!(
            history.save(record(1)).await,
            WriteOutcome::Skipped(StoreError::Io(_))
        ));
        assert!(!history.clear().await.is_written());
    }

    #[tokio::test]
    async fn persisted_layout_is_a_json_array() {
        let (history, store) = history();
        let _ = history.save(record(7)).await;

        let raw = store.get(KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["original"], "text 7");
        assert_eq!(json[0]["timestamp"], 1_700_000_000_007i64);
    }
}
