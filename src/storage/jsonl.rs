//! JSONL (JSON Lines) file access.
//!
//! Each line is one JSON-encoded record. Readers skip unparseable lines
//! with a warning rather than failing the whole read.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};

/// Entity types with a backing JSONL file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Member,
    Team,
    Season,
    Fixture,
    BattingInnings,
    BowlingSpell,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Member => "members.jsonl",
            EntityType::Team => "teams.jsonl",
            EntityType::Season => "seasons.jsonl",
            EntityType::Fixture => "fixtures.jsonl",
            EntityType::BattingInnings => "batting_innings.jsonl",
            EntityType::BowlingSpell => "bowling_spells.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for a specific entity type.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.records_dir().join(entity.filename()))
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single record to the file.
    pub fn append(&self, record: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(record)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended record to {:?}", self.path);
        Ok(())
    }

    /// Write records, replacing the entire file.
    pub fn write_all(&self, records: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for record in records {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} records to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a specific entity type.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.records_dir().join(entity.filename()))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all records from the file. A missing file is an empty collection.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    /// Read records matching a predicate.
    pub fn read_where<F>(&self, predicate: F) -> Result<Vec<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        let all = self.read_all()?;
        Ok(all.into_iter().filter(predicate).collect())
    }

    /// Count records in the file.
    pub fn count(&self) -> Result<usize, StorageError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestRecord {
        id: String,
        name: String,
        value: u32,
    }

    fn record(id: &str, name: &str, value: u32) -> TestRecord {
        TestRecord {
            id: id.to_string(),
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_jsonl_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.jsonl");

        let records = vec![record("1", "First", 100), record("2", "Second", 200)];

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        let count = writer.write_all(&records).unwrap();
        assert_eq!(count, 2);

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        let read = reader.read_all().unwrap();

        assert_eq!(read.len(), 2);
        assert_eq!(read[0], records[0]);
        assert_eq!(read[1], records[1]);
    }

    #[test]
    fn test_jsonl_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("append.jsonl");

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);

        writer.append(&record("1", "First", 100)).unwrap();
        writer.append(&record("2", "Second", 200)).unwrap();

        assert_eq!(reader.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_jsonl_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.jsonl");

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        assert!(reader.read_all().unwrap().is_empty());
        assert_eq!(reader.count().unwrap(), 0);
        assert!(!reader.exists());
    }

    #[test]
    fn test_jsonl_read_where() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("filter.jsonl");

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        writer
            .write_all(&[
                record("1", "A", 50),
                record("2", "B", 150),
                record("3", "C", 250),
            ])
            .unwrap();

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        let filtered = reader.read_where(|r| r.value > 100).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "B");
    }

    #[test]
    fn test_write_all_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("overwrite.jsonl");

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);

        writer.write_all(&[record("1", "Old", 1)]).unwrap();
        writer
            .write_all(&[record("2", "New1", 2), record("3", "New2", 3)])
            .unwrap();

        let read = reader.read_all().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].name, "New1");
    }

    #[test]
    fn test_read_all_skips_bad_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad_lines.jsonl");

        std::fs::write(
            &path,
            r#"{"id":"1","name":"Good","value":1}
not-valid-json
{"id":"2","name":"Also Good","value":2}
"#,
        )
        .unwrap();

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        let records = reader.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Also Good");
    }

    #[test]
    fn test_entity_type_filenames() {
        assert_eq!(EntityType::Member.filename(), "members.jsonl");
        assert_eq!(EntityType::Fixture.filename(), "fixtures.jsonl");
        assert_eq!(
            EntityType::BattingInnings.filename(),
            "batting_innings.jsonl"
        );
        assert_eq!(EntityType::BowlingSpell.filename(), "bowling_spells.jsonl");
    }

    #[test]
    fn test_for_entity_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        let writer: JsonlWriter<TestRecord> = JsonlWriter::for_entity(&config, EntityType::Member);
        assert_eq!(writer.path, config.records_dir().join("members.jsonl"));
    }
}
