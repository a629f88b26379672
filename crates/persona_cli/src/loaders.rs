//! CSV exports → strict engine structs
//!
//! Header-keyed CSV, one row per individual. Empty cells are missing values
//! and normalize to 0. Rows that fail to parse are logged, counted and
//! skipped; a repeated id keeps its first row.
//!
//! Persona columns:
//! `id,name,temperance,diligence,reflection,courage,loyalty,benevolence,fairness,humility,`
//! `command,martial,intellect,charisma,optimism,progressivism,sociality,boldness`
//!
//! Influence columns:
//! `id,name,political,strategic,tech,social,economic,cultural,transhistoricity[,total_score]`

use anyhow::{Context, Result};
use persona_core::{InfluenceScore, PersonaId, PersonaVector, RawInfluenceRow, RawPersonaRow};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, warn};

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    pub duplicates: u32,
}

/// Normalized persona vectors plus display names
#[derive(Debug, Clone, Default)]
pub struct PersonaTable {
    pub personas: Vec<PersonaVector>,
    pub names: FxHashMap<PersonaId, String>,
}

impl PersonaTable {
    pub fn name(&self, id: PersonaId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }
}

/// Normalized influence scores plus display names
#[derive(Debug, Clone, Default)]
pub struct InfluenceTable {
    pub scores: Vec<InfluenceScore>,
    pub names: FxHashMap<PersonaId, String>,
}

impl InfluenceTable {
    pub fn name(&self, id: PersonaId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn get(&self, id: PersonaId) -> Option<&InfluenceScore> {
        self.scores.iter().find(|s| s.id == id)
    }
}

/// Row types that carry an id and an optional display name
trait KeyedRow {
    fn id(&self) -> PersonaId;
    fn name(&self) -> Option<&str>;
}

impl KeyedRow for RawPersonaRow {
    fn id(&self) -> PersonaId {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl KeyedRow for RawInfluenceRow {
    fn id(&self) -> PersonaId {
        self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn read_rows<T>(csv_path: &Path) -> Result<(Vec<T>, FxHashMap<PersonaId, String>, ParseStats)>
where
    T: DeserializeOwned + KeyedRow,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let mut rows: Vec<T> = Vec::new();
    let mut names = FxHashMap::default();
    let mut seen: FxHashSet<PersonaId> = FxHashSet::default();
    let mut stats = ParseStats::default();

    for (line, record) in reader.deserialize::<T>().enumerate() {
        stats.total_rows += 1;
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                stats.failed += 1;
                // +2: header line and 1-based numbering
                warn!(line = line + 2, error = %err, "skipping unparsable row");
                continue;
            }
        };

        if !seen.insert(row.id()) {
            stats.duplicates += 1;
            warn!(id = row.id(), line = line + 2, "duplicate id; keeping first row");
            continue;
        }

        if let Some(name) = row.name().filter(|n| !n.is_empty()) {
            names.insert(row.id(), name.to_string());
        }
        rows.push(row);
        stats.parsed += 1;
    }

    debug!(
        path = %csv_path.display(),
        parsed = stats.parsed,
        failed = stats.failed,
        duplicates = stats.duplicates,
        "csv loaded"
    );

    Ok((rows, names, stats))
}

/// Load persona vectors from a CSV export
pub fn load_personas_csv(csv_path: &Path) -> Result<(PersonaTable, ParseStats)> {
    let (rows, names, stats) = read_rows::<RawPersonaRow>(csv_path)?;
    let personas = rows.iter().map(RawPersonaRow::normalize).collect();
    Ok((PersonaTable { personas, names }, stats))
}

/// Load influence scores from a CSV export (stored totals are recomputed)
pub fn load_influence_csv(csv_path: &Path) -> Result<(InfluenceTable, ParseStats)> {
    let (rows, names, stats) = read_rows::<RawInfluenceRow>(csv_path)?;
    let scores = rows.iter().map(RawInfluenceRow::normalize).collect();
    Ok((InfluenceTable { scores, names }, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_load_personas_with_missing_cells() -> Result<()> {
        let file = write_csv(
            "id,name,temperance,diligence,reflection,courage,loyalty,benevolence,fairness,humility,command,martial,intellect,charisma,optimism,progressivism,sociality,boldness\n\
             1,Yi Sun-sin,80,95,85,99,100,80,85,75,96,88,85,80,-10,0,20,15\n\
             2,Unknown,,,,,,,,,,,,,,,,\n",
        )?;

        let (table, stats) = load_personas_csv(file.path())?;
        assert_eq!(stats.parsed, 2);
        assert_eq!(stats.failed, 0);
        assert_eq!(table.personas.len(), 2);
        assert_eq!(table.personas[0].capabilities.command, 96.0);
        assert_eq!(table.personas[0].tendencies.optimism, -10.0);
        assert!(table.personas[1].values().iter().all(|v| *v == 0.0));
        assert_eq!(table.name(1), Some("Yi Sun-sin"));
        Ok(())
    }

    #[test]
    fn test_absent_columns_default_to_zero() -> Result<()> {
        let file = write_csv("id,martial\n7,97\n")?;
        let (table, stats) = load_personas_csv(file.path())?;
        assert_eq!(stats.parsed, 1);
        assert_eq!(table.personas[0].capabilities.martial, 97.0);
        assert_eq!(table.personas[0].virtues.courage, 0.0);
        assert_eq!(table.name(7), None);
        Ok(())
    }

    #[test]
    fn test_bad_rows_skipped_and_duplicates_counted() -> Result<()> {
        let file = write_csv(
            "id,name,political,strategic,tech,social,economic,cultural,transhistoricity,total_score\n\
             1,A,9,8,2,7,5,6,35,12\n\
             2,B,not-a-number,1,1,1,1,1,1,\n\
             1,A again,1,1,1,1,1,1,1,\n\
             3,C,,,,,,,20,\n",
        )?;

        let (table, stats) = load_influence_csv(file.path())?;
        assert_eq!(stats.total_rows, 4);
        assert_eq!(stats.parsed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.duplicates, 1);

        let first = table.get(1).unwrap();
        assert_eq!(first.total_score(), 72.0);
        assert_eq!(table.get(3).unwrap().total_score(), 20.0);
        assert!(table.get(2).is_none());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_personas_csv(Path::new("/nonexistent/personas.csv"));
        assert!(result.is_err());
    }
}
