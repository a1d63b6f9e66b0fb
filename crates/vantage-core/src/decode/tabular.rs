//! Binding of CSV rows to typed records by column name.

use std::collections::HashMap;
use std::io::Cursor;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::decode::scalar::{self, ScalarError};
use crate::{Error, UtcDateTime};

/// A row could not be bound to its record type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing column '{column}'")]
    MissingColumn { column: String },
    #[error("column '{column}': {source}")]
    InvalidValue {
        column: String,
        #[source]
        source: ScalarError,
    },
}

/// Column name to position lookup for one CSV body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    columns: HashMap<String, usize>,
}

impl Header {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns = HashMap::new();
        for (index, name) in names.into_iter().enumerate() {
            columns.entry(name.into()).or_insert(index);
        }
        Self { columns }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One data row viewed through its header.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    header: &'a Header,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(header: &'a Header, record: &'a StringRecord) -> Self {
        Self { header, record }
    }

    /// Raw cell for `column`; matching is exact and case-sensitive.
    pub fn cell(&self, column: &str) -> Result<&'a str, DecodeError> {
        self.header
            .position(column)
            .and_then(|index| self.record.get(index))
            .ok_or_else(|| DecodeError::MissingColumn {
                column: column.to_owned(),
            })
    }

    pub fn text(&self, column: &str) -> Result<String, DecodeError> {
        self.cell(column).map(str::to_owned)
    }

    pub fn float(&self, column: &str) -> Result<f64, DecodeError> {
        self.parse(column, scalar::parse_float)
    }

    pub fn integer(&self, column: &str) -> Result<i64, DecodeError> {
        self.parse(column, scalar::parse_integer)
    }

    pub fn percent(&self, column: &str) -> Result<f64, DecodeError> {
        self.parse(column, scalar::parse_percent)
    }

    pub fn date(&self, column: &str) -> Result<UtcDateTime, DecodeError> {
        self.parse(column, scalar::parse_date)
    }

    pub fn date_time(&self, column: &str) -> Result<UtcDateTime, DecodeError> {
        self.parse(column, scalar::parse_date_time)
    }

    pub fn timestamp(&self, column: &str) -> Result<UtcDateTime, DecodeError> {
        self.parse(column, scalar::parse_timestamp)
    }

    fn parse<T>(
        &self,
        column: &str,
        parser: fn(&str) -> Result<T, ScalarError>,
    ) -> Result<T, DecodeError> {
        parser(self.cell(column)?).map_err(|source| DecodeError::InvalidValue {
            column: column.to_owned(),
            source,
        })
    }
}

/// Explicit column mapping for a record decoded from CSV.
///
/// Implementations read every field through the [`Row`] getters, so a record
/// is either fully populated or not produced at all.
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError>;
}

/// Lazy, finite sequence of records decoded from one CSV body.
///
/// The first line is the header. Iteration stops for good after the first
/// error.
pub struct Records<T> {
    reader: csv::Reader<Cursor<String>>,
    header: Header,
    record: StringRecord,
    decoded: usize,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: FromRow> Records<T> {
    pub fn from_body(body: impl Into<String>) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(body.into()));
        let header = Header::new(reader.headers()?.iter());

        Ok(Self {
            reader,
            header,
            record: StringRecord::new(),
            decoded: 0,
            done: false,
            _marker: PhantomData,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of records successfully decoded so far.
    pub fn decoded(&self) -> usize {
        self.decoded
    }
}

impl<T: FromRow> Iterator for Records<T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = match self.reader.read_record(&mut self.record) {
            Ok(false) => {
                self.done = true;
                return None;
            }
            Ok(true) => T::from_row(&Row::new(&self.header, &self.record)).map_err(Error::from),
            Err(error) => Err(Error::from(error)),
        };

        match item {
            Ok(_) => self.decoded += 1,
            Err(_) => self.done = true,
        }
        Some(item)
    }
}

impl<T: FromRow> FusedIterator for Records<T> {}
