//! Lenient decoding for values coming out of a spreadsheet.
//!
//! Cells holding identifiers or figures may arrive as JSON numbers or as
//! strings depending on how the sheet is formatted, and blank cells arrive
//! as empty strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl Cell {
    fn into_text(self) -> String {
        match self {
            Cell::Text(s) => s,
            Cell::Integer(n) => n.to_string(),
            Cell::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{}", f as i64),
            Cell::Float(f) => f.to_string(),
            Cell::Flag(b) => b.to_string(),
        }
    }
}

pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Cell::deserialize(deserializer)?.into_text())
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(cell.map(Cell::into_text).filter(|s| !s.is_empty()))
}
