use crate::adapters::{ensure_unique_ids, stage_delete, stage_insert};
use crate::domain::model::{Job, JobId};
use crate::domain::ports::EntityStore;
use crate::utils::error::{JobError, Result};
use crate::utils::validation::validate_entity_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct EntityDocument {
    entity: String,
    records: Vec<Job>,
}

/// Keeps one JSON document per entity (`<data_dir>/<entity>.json`).
///
/// Committed state lives only on disk; staged changes are held in memory
/// until `commit` replaces the document through a temp file and rename.
#[derive(Debug)]
pub struct JsonFileStore {
    entity: String,
    data_dir: PathBuf,
    path: PathBuf,
    pending: Option<Vec<Job>>,
}

impl JsonFileStore {
    pub fn open<P: AsRef<Path>>(data_dir: P, entity: &str) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        validate_entity_name("entity", entity)?;
        fs::create_dir_all(data_dir).map_err(|e| {
            JobError::storage(format!(
                "cannot create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        let path = data_dir.join(format!("{}.json", entity));
        tracing::debug!("Opened {} store at {}", entity, path.display());

        Ok(Self {
            entity: entity.to_string(),
            data_dir: data_dir.to_path_buf(),
            path,
            pending: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending.is_some()
    }

    fn read_document(&self) -> Result<Vec<Job>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read(&self.path)?;
        let document: EntityDocument = serde_json::from_slice(&content).map_err(|e| {
            JobError::storage(format!("{} is corrupt: {}", self.path.display(), e))
        })?;

        if document.entity != self.entity {
            return Err(JobError::storage(format!(
                "{} holds entity '{}', expected '{}'",
                self.path.display(),
                document.entity,
                self.entity
            )));
        }
        ensure_unique_ids(&document.records)?;

        Ok(document.records)
    }

    fn write_document(&self, records: Vec<Job>) -> Result<()> {
        let document = EntityDocument {
            entity: self.entity.clone(),
            records,
        };
        let data = serde_json::to_vec_pretty(&document)?;

        // 先寫暫存檔再改名，避免寫到一半留下壞檔
        let tmp_path = self.path.with_extension("json.tmp");
        if let Err(e) = replace_file(&tmp_path, &self.path, &data) {
            if tmp_path.is_file() {
                let _ = fs::remove_file(&tmp_path);
            }
            return Err(e.into());
        }

        // The new document is already visible; a failed directory sync only
        // weakens crash durability, so it is logged rather than reported.
        if let Err(e) = sync_dir(&self.data_dir) {
            tracing::warn!("⚠️ Could not sync {}: {}", self.data_dir.display(), e);
        }
        Ok(())
    }

    fn pending_mut(&mut self) -> Result<&mut Vec<Job>> {
        if self.pending.is_none() {
            self.pending = Some(self.read_document()?);
        }
        Ok(self.pending.get_or_insert_with(Vec::new))
    }
}

fn replace_file(tmp_path: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(tmp_path, path)
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

impl EntityStore for JsonFileStore {
    fn entity(&self) -> &str {
        &self.entity
    }

    fn fetch_all(&self) -> Result<Vec<Job>> {
        self.read_document()
    }

    fn insert(&mut self, job: &Job) -> Result<()> {
        stage_insert(self.pending_mut()?, job)
    }

    fn delete(&mut self, id: &JobId) -> Result<()> {
        stage_delete(self.pending_mut()?, id)
    }

    fn commit(&mut self) -> Result<()> {
        let Some(records) = self.pending.take() else {
            return Ok(());
        };
        let count = records.len();

        if let Err(e) = self.write_document(records.clone()) {
            // 寫入失敗時保留暫存內容，由呼叫端決定 rollback
            self.pending = Some(records);
            return Err(e);
        }

        tracing::debug!("Committed {} {} record(s) to {}", count, self.entity, self.path.display());
        Ok(())
    }

    fn rollback(&mut self) {
        self.pending = None;
    }
}
