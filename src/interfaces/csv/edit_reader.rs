use crate::domain::loan::{LoanCategory, LoanField};
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of an edit script: set `field` of `category` to `value`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ParameterEdit {
    pub category: LoanCategory,
    pub field: LoanField,
    pub value: Decimal,
}

/// Reads parameter edits from a CSV source with a
/// `category,field,value` header.
///
/// Whitespace around cells is trimmed. Rows are decoded lazily so one bad
/// row does not stop the rest of the script.
pub struct EditReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EditReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(source);
        Self { reader }
    }

    pub fn edits(self) -> impl Iterator<Item = Result<ParameterEdit>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LoanError::from))
    }
}
