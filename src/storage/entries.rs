//! Expense and income record files
//!
//! Each kind lives in its own JSON file holding the records plus the next id
//! to hand out. Ids start at 1 and are never reused, even after a removal.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::codec::encode;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, EntryKind, LedgerEntry, Money, Timestamp};

use super::file_io::JsonFile;

/// One persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: u64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub amount: Money,
    pub date: Timestamp,
}

impl StoredEntry {
    pub fn to_entry(&self) -> LedgerEntry {
        LedgerEntry {
            id: self.id,
            label: self.label.clone(),
            category: self.category.clone(),
            amount: self.amount,
            timestamp: self.date,
        }
    }

    /// Canonical string for this record
    pub fn encoded(&self) -> String {
        encode(&self.to_entry())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryFile {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    entries: Vec<StoredEntry>,
}

fn first_id() -> u64 {
    1
}

impl Default for EntryFile {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            entries: Vec::new(),
        }
    }
}

/// Repository for one kind of record, kept in insertion order
pub struct EntryRepository {
    kind: EntryKind,
    file: JsonFile<EntryFile>,
    data: RwLock<EntryFile>,
}

impl EntryRepository {
    pub fn new(kind: EntryKind, path: PathBuf) -> Self {
        Self {
            kind,
            file: JsonFile::new(path),
            data: RwLock::new(EntryFile::default()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> LedgerResult<()> {
        let mut file_data = self.file.load()?;

        // Repair a counter that lags behind the highest stored id
        let highest = file_data.entries.iter().map(|e| e.id).max().unwrap_or(0);
        file_data.next_id = file_data.next_id.max(highest + 1);

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data;

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> LedgerResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        self.file.store(&*data)
    }

    /// Append a record, assigning the next id
    pub fn insert(
        &self,
        label: String,
        category: Option<Category>,
        amount: Money,
        date: Timestamp,
    ) -> LedgerResult<StoredEntry> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let entry = StoredEntry {
            id: data.next_id,
            label,
            category,
            amount,
            date,
        };
        data.next_id += 1;
        data.entries.push(entry.clone());

        Ok(entry)
    }

    /// Remove a record by id, returning it
    pub fn remove(&self, id: u64) -> LedgerResult<StoredEntry> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let index = data
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| self.not_found(id))?;

        Ok(data.entries.remove(index))
    }

    /// All records in insertion order
    pub fn get_all(&self) -> LedgerResult<Vec<StoredEntry>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.entries.clone())
    }

    /// All records as canonical strings, in insertion order
    pub fn encoded(&self) -> LedgerResult<Vec<String>> {
        Ok(self.get_all()?.iter().map(StoredEntry::encoded).collect())
    }

    fn not_found(&self, id: u64) -> LedgerError {
        match self.kind {
            EntryKind::Expense => LedgerError::expense_not_found(id.to_string()),
            EntryKind::Income => LedgerError::income_not_found(id.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn create_test_repo() -> (TempDir, EntryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = EntryRepository::new(EntryKind::Expense, temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let (_temp, repo) = create_test_repo();

        let first = repo
            .insert("Lunch".into(), Some(Category::Food), Money::from_pence(1250), ts("2023-10-01"))
            .unwrap();
        let second = repo
            .insert("Rent".into(), Some(Category::Home), Money::from_pence(90000), ts("2023-10-02"))
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.get_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let (temp, repo) = create_test_repo();
        repo.insert("A".into(), Some(Category::Misc), Money::from_pence(1), ts("2023-10-01"))
            .unwrap();
        let b = repo
            .insert("B".into(), Some(Category::Misc), Money::from_pence(2), ts("2023-10-01"))
            .unwrap();

        let removed = repo.remove(b.id).unwrap();
        assert_eq!(removed.label, "B");
        repo.save().unwrap();

        let reloaded = EntryRepository::new(EntryKind::Expense, temp.path().join("expenses.json"));
        reloaded.load().unwrap();
        let c = reloaded
            .insert("C".into(), Some(Category::Misc), Money::from_pence(3), ts("2023-10-01"))
            .unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let (_temp, repo) = create_test_repo();
        let err = repo.remove(9).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Expense not found: 9");
    }

    #[test]
    fn test_encoded_in_insertion_order() {
        let (_temp, repo) = create_test_repo();
        repo.insert("Lunch".into(), Some(Category::Food), Money::from_pence(1250), ts("2023-10-05"))
            .unwrap();
        repo.insert(
            "Cinema".into(),
            Some(Category::Other("Leisure".into())),
            Money::from_pence(123456),
            ts("2023-10-01 19:30:00"),
        )
        .unwrap();

        assert_eq!(
            repo.encoded().unwrap(),
            vec![
                "1: Lunch (Food) - £12.50 on [2023-10-05]".to_string(),
                "2: Cinema (Leisure) - £1,234.56 on [2023-10-01 19:30:00]".to_string(),
            ]
        );
    }

    #[test]
    fn test_save_and_load_preserves_records() {
        let (temp, repo) = create_test_repo();
        repo.insert("Lunch".into(), Some(Category::Food), Money::from_pence(1250), ts("2023-10-05"))
            .unwrap();
        repo.save().unwrap();

        let reloaded = EntryRepository::new(EntryKind::Expense, temp.path().join("expenses.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all().unwrap(), repo.get_all().unwrap());
        assert_eq!(reloaded.get_all().unwrap()[0].id, 1);
    }

    #[test]
    fn test_load_repairs_lagging_counter() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("income.json");
        std::fs::write(
            &path,
            r#"{"next_id": 1, "entries": [{"id": 4, "label": "Gift", "amount": 500, "date": "2023-10-01"}]}"#,
        )
        .unwrap();

        let repo = EntryRepository::new(EntryKind::Income, path);
        repo.load().unwrap();
        let entry = repo
            .insert("Salary".into(), None, Money::from_pence(1), ts("2023-10-02"))
            .unwrap();
        assert_eq!(entry.id, 5);
    }
}
