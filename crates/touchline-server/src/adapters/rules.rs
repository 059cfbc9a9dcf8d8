//! Rules Document Loader
//!
//! Reads the league rules once at startup. PDF files go through text
//! extraction; anything else is read as UTF-8, which keeps development
//! with a plain-text rules file simple.

use std::fs;
use std::path::Path;

use touchline::RulesError;

pub fn load_rules(path: &Path) -> Result<String, RulesError> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        pdf_extract::extract_text(path).map_err(|e| RulesError::Extract {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    } else {
        fs::read_to_string(path).map_err(|e| RulesError::Read {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
