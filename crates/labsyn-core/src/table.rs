//! Scanned listing with curator edits.

use labsyn_model::{Record, SynonymFlag, fields};
use tracing::debug;

use crate::error::{CoreError, Result};

/// The annotated output of a scan, kept as plain records so curators can
/// edit a single row without re-running the scan.
#[derive(Debug, Clone, Default)]
pub struct ScannedTable {
    records: Vec<Record>,
}

impl ScannedTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names, taken from the first record.
    pub fn columns(&self) -> Vec<String> {
        self.records
            .first()
            .map(|record| record.keys().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn find_by_id(&self, id: usize) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == Some(id))
    }

    fn find_by_id_mut(&mut self, id: usize) -> Result<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.id() == Some(id))
            .ok_or(CoreError::RecordNotFound { id })
    }

    /// The synonyms currently listed for record `id`.
    pub fn synonyms_of(&self, id: usize) -> Result<Vec<String>> {
        let record = self
            .find_by_id(id)
            .ok_or(CoreError::RecordNotFound { id })?;
        Ok(split_synonyms(record.text(fields::SYNONYMS).unwrap_or_default()))
    }

    /// Replaces the synonyms of record `id`.
    ///
    /// Only the `synonyms` column changes; `possible_synonyms` keeps the
    /// value the scan assigned, so a row stays in its tab after its last
    /// synonym is removed.
    pub fn update_synonyms<S: AsRef<str>>(&mut self, id: usize, names: &[S]) -> Result<()> {
        let joined = names
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(fields::SYNONYM_SEPARATOR);
        let record = self.find_by_id_mut(id)?;
        record.insert(fields::SYNONYMS, joined);
        debug!(id, count = names.len(), "updated synonyms");
        Ok(())
    }

    /// Removes one synonym from record `id`. Returns whether it was listed.
    pub fn remove_synonym(&mut self, id: usize, name: &str) -> Result<bool> {
        let mut names = self.synonyms_of(id)?;
        let before = names.len();
        names.retain(|existing| existing != name);
        if names.len() == before {
            return Ok(false);
        }
        self.update_synonyms(id, &names)?;
        Ok(true)
    }

    /// Records in the given tab, in scan order.
    pub fn rows_with_flag(&self, flag: SynonymFlag) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |record| record_flag(record) == Some(flag))
    }

    pub fn count_with_flag(&self, flag: SynonymFlag) -> usize {
        self.rows_with_flag(flag).count()
    }
}

fn record_flag(record: &Record) -> Option<SynonymFlag> {
    record
        .get(fields::POSSIBLE_SYNONYMS)
        .and_then(SynonymFlag::from_value)
}

/// Splits a `synonyms` cell back into names. An empty cell has no names.
pub fn split_synonyms(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(fields::SYNONYM_SEPARATOR)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use labsyn_model::FieldValue;

    use super::*;

    fn row(id: usize, flag: SynonymFlag, synonyms: &str) -> Record {
        let mut record = Record::new();
        record.insert(fields::POSSIBLE_SYNONYMS, flag);
        record.insert(fields::SYNONYMS, synonyms);
        record.insert(fields::LABS, format!("Lab {id}"));
        record.insert(fields::ID, id);
        record
    }

    fn table() -> ScannedTable {
        ScannedTable::new(vec![
            row(0, SynonymFlag::True, "Lab 1 | Lab 2"),
            row(1, SynonymFlag::True, "Lab 0"),
            row(2, SynonymFlag::False, ""),
        ])
    }

    #[test]
    fn split_empty_has_no_names() {
        assert!(split_synonyms("").is_empty());
        assert_eq!(split_synonyms("A | B"), vec!["A", "B"]);
    }

    #[test]
    fn columns_come_from_first_record() {
        assert_eq!(
            table().columns(),
            vec!["possible_synonyms", "synonyms", "labs", "id"]
        );
        assert!(ScannedTable::default().columns().is_empty());
    }

    #[test]
    fn update_synonyms_by_id() {
        let mut table = table();
        table.update_synonyms(0, &["Lab 2"]).unwrap();
        assert_eq!(table.synonyms_of(0).unwrap(), vec!["Lab 2"]);
        assert_eq!(
            table.find_by_id(0).unwrap().text(fields::SYNONYMS),
            Some("Lab 2")
        );
    }

    #[test]
    fn update_keeps_flag() {
        let mut table = table();
        table.update_synonyms::<&str>(1, &[]).unwrap();
        assert_eq!(
            table.find_by_id(1).unwrap().text(fields::SYNONYMS),
            Some("")
        );
        assert_eq!(table.count_with_flag(SynonymFlag::True), 2);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut table = table();
        assert_eq!(
            table.update_synonyms(9, &["x"]),
            Err(CoreError::RecordNotFound { id: 9 })
        );
        assert!(table.synonyms_of(9).is_err());
    }

    #[test]
    fn remove_synonym_reports_change() {
        let mut table = table();
        assert!(table.remove_synonym(0, "Lab 1").unwrap());
        assert!(!table.remove_synonym(0, "Lab 1").unwrap());
        assert_eq!(table.synonyms_of(0).unwrap(), vec!["Lab 2"]);
    }

    #[test]
    fn rows_with_flag_partitions_in_order() {
        let table = table();
        let suggested: Vec<Option<usize>> = table
            .rows_with_flag(SynonymFlag::True)
            .map(Record::id)
            .collect();
        assert_eq!(suggested, vec![Some(0), Some(1)]);
        assert_eq!(table.count_with_flag(SynonymFlag::False), 1);
    }

    #[test]
    fn boolean_flags_are_recognised() {
        let mut record = row(5, SynonymFlag::False, "");
        record.insert(fields::POSSIBLE_SYNONYMS, FieldValue::Bool(true));
        let table = ScannedTable::new(vec![record]);
        assert_eq!(table.count_with_flag(SynonymFlag::True), 1);
    }
}
