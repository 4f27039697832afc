//! Health diary stored as a flat delimited file
//!
//! One entry per line, no header:
//!
//! ```text
//! 2024-03-01,65.0,2000.0,пробіжка 5 км
//! ```
//!
//! The notes field is last and may itself contain commas. Lines whose date
//! cannot be parsed are skipped when reading, so a hand-edited file never
//! blocks the statistics.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::constants::diary;
use crate::errors::{ensure_range, DiaryError, DiaryResult, InputResult};

/// Runtime diary settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryConfig {
    /// Diary file location
    pub path: PathBuf,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(diary::DEFAULT_FILE_NAME),
        }
    }
}

/// One day's record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub calories: f64,
    pub notes: String,
}

impl DiaryEntry {
    /// Creates a validated entry; notes are flattened onto one line
    ///
    /// # Errors
    ///
    /// Returns `InputError` if weight or calories are out of range
    pub fn new(
        date: NaiveDate,
        weight_kg: f64,
        calories: f64,
        notes: impl Into<String>,
    ) -> InputResult<Self> {
        ensure_range("weight (kg)", weight_kg, diary::MIN_WEIGHT_KG, diary::MAX_WEIGHT_KG)?;
        ensure_range("calories", calories, diary::MIN_CALORIES, diary::MAX_CALORIES)?;

        let notes: String = notes.into();
        let notes = notes.lines().map(str::trim).collect::<Vec<_>>().join(" ");

        Ok(Self {
            date,
            weight_kg,
            calories,
            notes,
        })
    }

    /// Serializes the entry as one diary line, including the newline
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{:?}{sep}{:?}{sep}{}\n",
            self.date,
            self.weight_kg,
            self.calories,
            self.notes,
            sep = diary::SEPARATOR
        )
    }

    /// Parses one diary line
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidLine` if the date or a number is malformed
    pub fn parse_line(line_number: usize, line: &str) -> DiaryResult<Self> {
        let invalid = || DiaryError::InvalidLine {
            line: line_number,
            content: line.to_string(),
        };

        let mut fields = line.splitn(4, diary::SEPARATOR);
        let date = fields.next().map(str::trim).ok_or_else(invalid)?;
        let weight = fields.next().map(str::trim).ok_or_else(invalid)?;
        let calories = fields.next().map(str::trim).ok_or_else(invalid)?;
        let notes = fields.next().unwrap_or("").trim_end_matches(['\r', '\n']);

        Ok(Self {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?,
            weight_kg: weight.parse().map_err(|_| invalid())?,
            calories: calories.parse().map_err(|_| invalid())?,
            notes: notes.to_string(),
        })
    }
}

/// Summary figures over all diary entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryStats {
    pub entries: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub weight_mean: f64,
    pub weight_min: f64,
    pub weight_max: f64,
    pub calories_mean: f64,
    pub calories_min: f64,
    pub calories_max: f64,
}

impl DiaryStats {
    /// Computes statistics, or `None` for an empty diary
    pub fn from_entries(entries: &[DiaryEntry]) -> Option<Self> {
        let first = entries.first()?;
        let count = entries.len() as f64;

        let mut stats = Self {
            entries: entries.len(),
            first_date: first.date,
            last_date: first.date,
            weight_mean: 0.0,
            weight_min: f64::INFINITY,
            weight_max: f64::NEG_INFINITY,
            calories_mean: 0.0,
            calories_min: f64::INFINITY,
            calories_max: f64::NEG_INFINITY,
        };

        for entry in entries {
            stats.first_date = stats.first_date.min(entry.date);
            stats.last_date = stats.last_date.max(entry.date);
            stats.weight_mean += entry.weight_kg / count;
            stats.weight_min = stats.weight_min.min(entry.weight_kg);
            stats.weight_max = stats.weight_max.max(entry.weight_kg);
            stats.calories_mean += entry.calories / count;
            stats.calories_min = stats.calories_min.min(entry.calories);
            stats.calories_max = stats.calories_max.max(entry.calories);
        }

        Some(stats)
    }
}

impl fmt::Display for DiaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Записів: {} ({} — {})", self.entries, self.first_date, self.last_date)?;
        writeln!(f, "Середня вага: {:.2} кг", self.weight_mean)?;
        writeln!(f, "Мінімальна вага: {:.2} кг", self.weight_min)?;
        writeln!(f, "Максимальна вага: {:.2} кг", self.weight_max)?;
        writeln!(f, "Середні калорії: {:.0} ккал", self.calories_mean)?;
        writeln!(f, "Мін. калорії: {:.0} ккал", self.calories_min)?;
        write!(f, "Макс. калорії: {:.0} ккал", self.calories_max)
    }
}

/// Handle to the diary file
#[derive(Debug, Clone)]
pub struct Diary {
    path: PathBuf,
}

impl Diary {
    pub fn new(config: &DiaryConfig) -> Self {
        Self {
            path: config.path.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Appends one entry, creating the file if needed
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Io` if the file cannot be opened or written
    pub async fn append(&self, entry: &DiaryEntry) -> DiaryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(entry.to_line().as_bytes()).await?;
        file.flush().await?;

        info!("Appended diary entry for {} to {}", entry.date, self.path.display());
        Ok(())
    }

    /// Reads all well-formed entries, sorted by date
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::NotFound` if the file does not exist, or
    /// `DiaryError::Io` if it cannot be read
    pub async fn read_entries(&self) -> DiaryResult<Vec<DiaryEntry>> {
        if !self.exists() {
            return Err(DiaryError::NotFound {
                path: self.path.clone(),
            });
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut entries = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match DiaryEntry::parse_line(index + 1, line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping diary line: {}", e),
            }
        }

        entries.sort_by_key(|entry| entry.date);
        debug!("Read {} diary entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    /// Reads the diary and summarises it
    ///
    /// # Errors
    ///
    /// Same as [`Diary::read_entries`]
    pub async fn stats(&self) -> DiaryResult<Option<DiaryStats>> {
        let entries = self.read_entries().await?;
        Ok(DiaryStats::from_entries(&entries))
    }

    /// Copies the diary file to `destination`, returning the bytes copied
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::NotFound` if there is no diary yet, or
    /// `DiaryError::Io` if the copy fails
    pub async fn export(&self, destination: &Path) -> DiaryResult<u64> {
        if !self.exists() {
            return Err(DiaryError::NotFound {
                path: self.path.clone(),
            });
        }
        let bytes = tokio::fs::copy(&self.path, destination).await?;
        info!("Exported diary to {} ({} bytes)", destination.display(), bytes);
        Ok(bytes)
    }
}
