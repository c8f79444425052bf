//! Append-only JSONL observation log

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::StorageError;

/// One persisted death report.
///
/// Timestamps serialize as RFC-3339 with their offset, so the log stays
/// readable and order-independent of the display timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Canonical boss name (catalog key)
    pub boss: String,
    pub observed_at: DateTime<FixedOffset>,
    pub next_spawn: DateTime<FixedOffset>,
}

/// Query interface over the observation log.
///
/// Implementations do short, bounded I/O per call; callers treat every
/// method as a committed-read over all appends so far.
pub trait ObservationStore: Send + Sync {
    fn append(&self, record: &ObservationRecord) -> Result<(), StorageError>;

    /// Latest record per boss. Ties on `observed_at` resolve to the later
    /// record in the log.
    fn latest_all(&self) -> Result<HashMap<String, ObservationRecord>, StorageError>;

    fn latest_one(&self, boss: &str) -> Result<Option<ObservationRecord>, StorageError>;

    /// Most recent records for one boss, newest first, at most `limit`.
    fn history(&self, boss: &str, limit: usize) -> Result<Vec<ObservationRecord>, StorageError>;
}

/// File-backed store, one JSON record per line.
///
/// The file is opened per operation; there is no in-process cache, so
/// concurrent readers always see committed appends.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Store backed by `path`. The file and its parent directories are
    /// created lazily on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// All records in log order. Missing file reads as empty; lines that
    /// fail to decode are skipped with a warning (torn tail tolerance).
    fn read_all(&self) -> Result<Vec<ObservationRecord>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Open {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut records = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ObservationRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = line_no + 1,
                        error = %e,
                        "skipping undecodable observation record"
                    );
                }
            }
        }
        Ok(records)
    }
}

impl ObservationStore for JsonlStore {
    fn append(&self, record: &ObservationRecord) -> Result<(), StorageError> {
        let line = serde_json::to_string(record).map_err(StorageError::Encode)?;
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StorageError::Open {
                path: self.path.clone(),
                source,
            })?;
        writeln!(file, "{line}").map_err(|source| StorageError::Append {
            path: self.path.clone(),
            source,
        })
    }

    fn latest_all(&self) -> Result<HashMap<String, ObservationRecord>, StorageError> {
        let mut latest: HashMap<String, ObservationRecord> = HashMap::new();
        for record in self.read_all()? {
            // `>=` so equal timestamps resolve to the later record
            let newer = latest
                .get(&record.boss)
                .is_none_or(|current| record.observed_at >= current.observed_at);
            if newer {
                latest.insert(record.boss.clone(), record);
            }
        }
        Ok(latest)
    }

    fn latest_one(&self, boss: &str) -> Result<Option<ObservationRecord>, StorageError> {
        Ok(self.latest_all()?.remove(boss))
    }

    fn history(&self, boss: &str, limit: usize) -> Result<Vec<ObservationRecord>, StorageError> {
        let mut records: Vec<ObservationRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| r.boss == boss)
            .collect();
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn temp_store(tag: &str) -> JsonlStore {
        let path = std::env::temp_dir()
            .join("bosswatch-tests")
            .join(format!("{tag}-{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);
        JsonlStore::new(path)
    }

    fn record(boss: &str, observed_at: &str) -> ObservationRecord {
        let observed_at = DateTime::parse_from_rfc3339(observed_at).expect("valid timestamp");
        ObservationRecord {
            boss: boss.to_string(),
            observed_at,
            next_spawn: observed_at + Duration::hours(24),
        }
    }

    #[test]
    fn appended_records_round_trip() {
        let store = temp_store("roundtrip");
        let rec = record("Venatus", "2024-01-01T10:00:00+08:00");
        store.append(&rec).expect("append");

        let latest = store.latest_one("Venatus").expect("query");
        assert_eq!(latest, Some(rec));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = temp_store("missing");
        assert!(store.latest_all().expect("query").is_empty());
        assert_eq!(store.latest_one("Venatus").expect("query"), None);
    }

    #[test]
    fn latest_wins_by_observed_at() {
        let store = temp_store("latest");
        store
            .append(&record("Venatus", "2024-01-02T10:00:00+08:00"))
            .expect("append");
        // Older correction appended later must not override
        store
            .append(&record("Venatus", "2024-01-01T10:00:00+08:00"))
            .expect("append");

        let latest = store.latest_one("Venatus").expect("query").expect("record");
        assert_eq!(
            latest.observed_at,
            DateTime::parse_from_rfc3339("2024-01-02T10:00:00+08:00").unwrap()
        );
    }

    #[test]
    fn equal_timestamps_resolve_to_the_later_record() {
        let store = temp_store("ties");
        let mut first = record("Ego", "2024-01-01T10:00:00+08:00");
        first.next_spawn = first.observed_at + Duration::hours(1);
        let second = record("Ego", "2024-01-01T10:00:00+08:00");
        store.append(&first).expect("append");
        store.append(&second).expect("append");

        let latest = store.latest_one("Ego").expect("query").expect("record");
        assert_eq!(latest.next_spawn, second.next_spawn);
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let store = temp_store("corrupt");
        store
            .append(&record("Venatus", "2024-01-01T10:00:00+08:00"))
            .expect("append");
        let mut file = OpenOptions::new()
            .append(true)
            .open(store.path())
            .expect("open");
        writeln!(file, "{{not json").expect("write");
        store
            .append(&record("Ego", "2024-01-01T11:00:00+08:00"))
            .expect("append");

        let latest = store.latest_all().expect("query");
        assert_eq!(latest.len(), 2);
    }

    #[test]
    fn history_is_newest_first_and_bounded() {
        let store = temp_store("history");
        for day in 1..=5 {
            store
                .append(&record("Baron", &format!("2024-01-0{day}T10:00:00+08:00")))
                .expect("append");
        }
        store
            .append(&record("Ego", "2024-01-09T10:00:00+08:00"))
            .expect("append");

        let history = store.history("Baron", 3).expect("query");
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|r| r.boss == "Baron"));
        assert!(history[0].observed_at > history[1].observed_at);
        assert!(history[1].observed_at > history[2].observed_at);
    }
}
