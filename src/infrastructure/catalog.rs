use crate::domain::entities::company::SymbolCatalog;
use crate::domain::error::DomainError;
use std::path::Path;

/// ASX 100 constituents shipped with the binary.
const BUNDLED_ASX100: &str = include_str!("../../data/asx100.json");

pub fn bundled_catalog() -> Result<SymbolCatalog, DomainError> {
    SymbolCatalog::from_json(BUNDLED_ASX100)
}

/// Load a `[{"symbol", "company_name"}]` JSON file.
pub fn load_catalog(path: &Path) -> Result<SymbolCatalog, DomainError> {
    let json = std::fs::read_to_string(path)?;
    SymbolCatalog::from_json(&json)
        .map_err(|e| DomainError::Catalog(format!("{}: {e}", path.display())))
}
