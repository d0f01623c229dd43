use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("the start date must not be after the end date")]
    Inverted,
}

/// Inclusive release-date window. Either end may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Parse the two form fields. Blank fields are open ends.
    pub fn parse(from: &str, to: &str) -> Result<Self, DateRangeError> {
        Ok(Self {
            from: parse_date(from)?,
            to: parse_date(to)?,
        })
    }

    pub fn validate(&self) -> Result<(), DateRangeError> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from > to => Err(DateRangeError::Inverted),
            _ => Ok(()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Request parameters understood by the releases endpoint.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(from) = self.from {
            pairs.push(("dateFrom", from.format(DATE_FORMAT).to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("dateTo", to.format(DATE_FORMAT).to_string()));
        }
        pairs
    }
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, DateRangeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DateRangeError::InvalidDate(raw.to_string()))
}
