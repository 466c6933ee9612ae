//! CSV loader for bracket tables.
//!
//! Lets additional jurisdictions or years be supplied as data files rather
//! than code. Rows are grouped by `(jurisdiction, tax_year)` in file order
//! and each group must form a valid table; validation failures name the
//! offending group.

use std::collections::BTreeMap;
use std::io::Read;

use impot_core::models::{Bracket, BracketTable, BracketTableError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading bracket data from CSV.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid bracket table for {jurisdiction} {tax_year}: {source}")]
    InvalidTable {
        jurisdiction: String,
        tax_year: i32,
        source: BracketTableError,
    },
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::CsvParse(err.to_string())
    }
}

/// A single row from a bracket-table CSV file.
///
/// Columns:
/// - `jurisdiction`: free-form table key (e.g. `federal`, `montreal`)
/// - `tax_year`: the year the table applies to
/// - `lower_bound`: inclusive lower edge of the bracket
/// - `upper_bound`: exclusive upper edge (empty for the unbounded top tier)
/// - `rate`: marginal rate as a decimal fraction (e.g. 0.15)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub jurisdiction: String,
    pub tax_year: i32,
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket-table data from CSV files.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parses bracket records from any CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, LoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Groups records by `(jurisdiction, tax_year)` and validates each group
    /// into a [`BracketTable`].
    ///
    /// Row order within a group is preserved, so an unsorted or gapped CSV
    /// fails table validation rather than being silently reordered.
    pub fn build_tables(
        records: &[BracketRecord]
    ) -> Result<BTreeMap<(String, i32), BracketTable>, LoaderError> {
        let mut groups: BTreeMap<(String, i32), Vec<Bracket>> = BTreeMap::new();

        for record in records {
            groups
                .entry((record.jurisdiction.clone(), record.tax_year))
                .or_default()
                .push(Bracket::new(
                    record.lower_bound,
                    record.upper_bound,
                    record.rate,
                ));
        }

        let mut tables = BTreeMap::new();
        for ((jurisdiction, tax_year), brackets) in groups {
            let table = BracketTable::new(brackets).map_err(|source| {
                LoaderError::InvalidTable {
                    jurisdiction: jurisdiction.clone(),
                    tax_year,
                    source,
                }
            })?;
            tables.insert((jurisdiction, tax_year), table);
        }

        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = r#"jurisdiction,tax_year,lower_bound,upper_bound,rate
federal,2026,0,55867,0.15
federal,2026,55867,111733,0.205
federal,2026,111733,173205,0.26
federal,2026,173205,246752,0.29
federal,2026,246752,,0.33
quebec,2026,0,51780,0.14
quebec,2026,51780,103545,0.19
quebec,2026,103545,126000,0.24
quebec,2026,126000,,0.2575
"#;

    #[test]
    fn parse_single_record() {
        let csv = "jurisdiction,tax_year,lower_bound,upper_bound,rate\nfederal,2026,0,55867,0.15";

        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            BracketRecord {
                jurisdiction: "federal".to_string(),
                tax_year: 2026,
                lower_bound: dec!(0),
                upper_bound: Some(dec!(55867)),
                rate: dec!(0.15),
            }
        );
    }

    #[test]
    fn parse_empty_upper_bound_as_unbounded() {
        let csv = "jurisdiction,tax_year,lower_bound,upper_bound,rate\nfederal,2026,246752,,0.33";

        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records[0].upper_bound, None);
    }

    #[test]
    fn parse_rejects_malformed_rate() {
        let csv = "jurisdiction,tax_year,lower_bound,upper_bound,rate\nfederal,2026,0,,abc";

        let result = BracketTableLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(LoaderError::CsvParse(_))));
    }

    #[test]
    fn build_tables_groups_by_jurisdiction_and_year() {
        let records = BracketTableLoader::parse(TEST_CSV.as_bytes()).unwrap();

        let tables = BracketTableLoader::build_tables(&records).unwrap();

        assert_eq!(tables.len(), 2);
        let federal = &tables[&("federal".to_string(), 2026)];
        let quebec = &tables[&("quebec".to_string(), 2026)];
        assert_eq!(federal.len(), 5);
        assert_eq!(quebec.len(), 4);
        assert_eq!(federal.marginal_rate(dec!(300000)), dec!(0.33));
    }

    #[test]
    fn build_tables_rejects_gapped_group() {
        let csv = "jurisdiction,tax_year,lower_bound,upper_bound,rate\n\
                   federal,2026,0,50000,0.15\n\
                   federal,2026,60000,,0.205";
        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        let result = BracketTableLoader::build_tables(&records);

        assert!(matches!(
            result,
            Err(LoaderError::InvalidTable { tax_year: 2026, .. })
        ));
    }

    #[test]
    fn build_tables_rejects_unsorted_group() {
        let csv = "jurisdiction,tax_year,lower_bound,upper_bound,rate\n\
                   federal,2026,55867,111733,0.205\n\
                   federal,2026,0,55867,0.15";
        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        let result = BracketTableLoader::build_tables(&records);

        assert!(result.is_err());
    }
}
