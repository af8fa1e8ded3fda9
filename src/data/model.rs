use std::fmt;

use calamine::{CellErrorType, Data};

// ---------------------------------------------------------------------------
// CellValue – a single worksheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value, detached from the spreadsheet reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date, time or duration, kept as display text.
    Date(String),
    /// Formula error such as `#N/A` or `#DIV/0!`.
    Error(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) | CellValue::Date(s) | CellValue::Error(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Integer(*i),
            Data::Float(v) => CellValue::Float(*v),
            Data::String(s) => CellValue::String(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::Empty => CellValue::Null,
            other @ (Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_)) => {
                CellValue::Date(other.to_string())
            }
        }
    }
}

impl CellValue {
    /// Cell text that stands for "no value", matched exactly.
    const NA_TOKENS: &'static [&'static str] = &[
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ];

    /// Whether the cell holds no measurement.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => Self::NA_TOKENS.contains(&s.as_str()),
            CellValue::Error(e) => e == &CellErrorType::NA.to_string(),
            _ => false,
        }
    }

    /// Interpret the cell as a finite `f64`.
    ///
    /// Missing cells and anything non-numeric yield `None`; callers decide
    /// which of the two they are looking at via [`CellValue::is_missing`].
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::Bool(b) => f64::from(u8::from(*b)),
            CellValue::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }
}

// ---------------------------------------------------------------------------
// RawSheet – one worksheet as loaded
// ---------------------------------------------------------------------------

/// A named worksheet as a grid of cells anchored at A1.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Series / SeriesSet – the extracted measurements
// ---------------------------------------------------------------------------

/// One named group of measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    /// Arithmetic mean, `None` for an empty series.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Title plus the T1/T2/T3 series of one sheet, in plotting order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    pub title: String,
    pub series: Vec<Series>,
}

impl SeriesSet {
    /// Look up a series by name.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Total number of measurements across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_is_arithmetic_average() {
        let s = Series {
            name: "T1".into(),
            values: vec![1.0, 2.0, 4.5],
        };
        assert_relative_eq!(s.mean().unwrap(), 2.5);
    }

    #[test]
    fn mean_of_empty_series_is_none() {
        let s = Series {
            name: "T2".into(),
            values: vec![],
        };
        assert_eq!(s.mean(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn missing_cells() {
        assert!(CellValue::Null.is_missing());
        assert!(CellValue::String("".into()).is_missing());
        assert!(CellValue::String("NaN".into()).is_missing());
        assert!(CellValue::String("#N/A N/A".into()).is_missing());
        assert!(CellValue::String("-1.#IND".into()).is_missing());
        assert!(CellValue::String("1.#QNAN".into()).is_missing());
        // only exact tokens count
        assert!(!CellValue::String("  ".into()).is_missing());
        assert!(!CellValue::String(" NA".into()).is_missing());
        assert!(CellValue::Error("#N/A".into()).is_missing());
        assert!(!CellValue::Error("#DIV/0!".into()).is_missing());
        assert!(!CellValue::Float(0.0).is_missing());
        assert!(!CellValue::String("abc".into()).is_missing());
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(CellValue::Float(1.25).as_f64(), Some(1.25));
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(CellValue::String(" 2.5 ".into()).as_f64(), Some(2.5));
        assert_eq!(CellValue::String("high".into()).as_f64(), None);
        assert_eq!(CellValue::String("inf".into()).as_f64(), None);
        assert_eq!(CellValue::Date("2024-01-01".into()).as_f64(), None);
    }

    #[test]
    fn converts_reader_cells() {
        assert_eq!(CellValue::from(&Data::Int(7)), CellValue::Integer(7));
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Null);
        assert_eq!(
            CellValue::from(&Data::Error(CellErrorType::NA)),
            CellValue::Error("#N/A".into())
        );
        assert_eq!(
            CellValue::from(&Data::String("T1".into())).to_string(),
            "T1"
        );
    }

    #[test]
    fn series_set_lookup() {
        let set = SeriesSet {
            title: "Assay".into(),
            series: vec![
                Series {
                    name: "T1".into(),
                    values: vec![1.0],
                },
                Series {
                    name: "T2".into(),
                    values: vec![2.0, 3.0],
                },
            ],
        };
        assert_eq!(set.get("T2").map(Series::len), Some(2));
        assert!(set.get("T3").is_none());
        assert_eq!(set.point_count(), 3);
    }
}
