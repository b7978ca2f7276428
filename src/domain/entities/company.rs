use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub symbol: String,
    pub company_name: String,
}

impl CompanyRecord {
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
        }
    }
}

/// Fixed, ordered basket of tracked companies.
///
/// Built once at startup and never mutated. Iteration order is the order
/// the records were supplied in, and every pipeline output follows it.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    records: Vec<CompanyRecord>,
    by_symbol: HashMap<String, usize>,
}

impl SymbolCatalog {
    /// Build a catalog from records. Duplicate symbols are rejected so a
    /// symbol can never appear twice in the ticker strip.
    pub fn from_records(mut records: Vec<CompanyRecord>) -> Result<Self, DomainError> {
        let mut by_symbol = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter_mut().enumerate() {
            record.symbol = record.symbol.trim().to_string();
            if record.symbol.is_empty() {
                return Err(DomainError::Catalog(format!(
                    "Empty symbol at catalog position {idx}"
                )));
            }
            if by_symbol.insert(record.symbol.clone(), idx).is_some() {
                return Err(DomainError::Catalog(format!(
                    "Duplicate symbol: {}",
                    record.symbol
                )));
            }
        }
        Ok(Self { records, by_symbol })
    }

    /// Parse the `[{"symbol": .., "company_name": ..}, ..]` catalog format.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let records: Vec<CompanyRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::Catalog(format!("Invalid catalog JSON: {e}")))?;
        Self::from_records(records)
    }

    /// Company name for `symbol`, or `None` when the symbol isn't tracked.
    pub fn lookup(&self, symbol: &str) -> Option<&str> {
        self.by_symbol
            .get(symbol)
            .map(|&idx| self.records[idx].company_name.as_str())
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
