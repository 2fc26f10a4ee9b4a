// file: src/store.rs
// version: 1.0.0
// guid: 4cd2295a-1bc0-4254-8f50-0898764293c3

//! Persists solved cycles as JSON records with integrity checksums

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, WeaveError};
use crate::weaver::graph::radius_from_layers;
use crate::weaver::types::{Solution, Vert};

/// A solved cycle together with its provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub id: Uuid,
    pub n: u32,
    pub order: usize,
    pub radius: i32,
    pub solve_secs: f64,
    pub solved_at: DateTime<Utc>,
    pub checksum: String,
    pub vertices: Solution,
}

impl SolutionRecord {
    /// Build a record for a freshly solved instance
    pub fn new(n: u32, vertices: Solution, solve_secs: f64) -> Result<Self> {
        let checksum = solution_checksum(&vertices)?;
        Ok(Self {
            id: Uuid::new_v4(),
            n,
            order: vertices.len(),
            radius: radius_from_layers(n),
            solve_secs,
            solved_at: Utc::now(),
            checksum,
            vertices,
        })
    }
}

/// SHA256 over the serialized vertex list
pub fn solution_checksum(vertices: &[Vert]) -> Result<String> {
    let payload = serde_json::to_vec(vertices)?;
    let mut hasher = Sha256::new();
    hasher.update(&payload);
    Ok(hex::encode(hasher.finalize()))
}

/// Directory of solution records, one JSON file per order
pub struct SolutionStore {
    root: PathBuf,
}

impl SolutionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the store directory if it does not exist yet
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Write a record, replacing any earlier record of the same order
    pub async fn save(&self, record: &SolutionRecord) -> Result<PathBuf> {
        let path = self.record_path(record.order);
        let content = serde_json::to_string_pretty(record)?;
        fs::write(&path, content).await?;
        debug!("Saved order {} record to {}", record.order, path.display());
        Ok(path)
    }

    /// Load the record for an order and verify its checksum
    pub async fn load(&self, order: usize) -> Result<SolutionRecord> {
        let path = self.record_path(order);
        let content = fs::read_to_string(&path).await?;
        let record: SolutionRecord = serde_json::from_str(&content)?;
        if solution_checksum(&record.vertices)? != record.checksum {
            return Err(WeaveError::store(format!(
                "checksum mismatch in {}",
                path.display()
            )));
        }
        Ok(record)
    }

    /// List all readable records, smallest order first
    pub async fn list(&self) -> Result<Vec<SolutionRecord>> {
        let mut records = Vec::new();
        if !self.root.exists() {
            return Ok(records);
        }
        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Ok(content) = fs::read_to_string(&path).await {
                    if let Ok(record) = serde_json::from_str::<SolutionRecord>(&content) {
                        records.push(record);
                    }
                }
            }
        }
        records.sort_by_key(|record| record.order);
        Ok(records)
    }

    fn record_path(&self, order: usize) -> PathBuf {
        self.root.join(format!("solution-{order}.json"))
    }
}
