//! Record Status

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Status text that is neither `Listed` nor `Sold`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}', expected 'Listed' or 'Sold'")]
pub struct UnknownStatus(pub String);

/// Lifecycle status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Up for sale.
    Listed,

    /// Sold, with sale details recorded.
    Sold,
}

impl Status {
    /// Text stored in the status column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Listed => "Listed",
            Status::Sold => "Sold",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("listed") {
            Ok(Status::Listed)
        } else if trimmed.eq_ignore_ascii_case("sold") {
            Ok(Status::Sold)
        } else {
            Err(UnknownStatus(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_text_in_any_case() {
        assert_eq!("Listed".parse::<Status>(), Ok(Status::Listed));
        assert_eq!(" sold ".parse::<Status>(), Ok(Status::Sold));
        assert_eq!("SOLD".parse::<Status>(), Ok(Status::Sold));
    }

    #[test]
    fn rejects_other_text() {
        assert_eq!(
            "Pending".parse::<Status>(),
            Err(UnknownStatus("Pending".to_string()))
        );
    }

    #[test]
    fn displays_column_text() {
        assert_eq!(Status::Listed.to_string(), "Listed");
        assert_eq!(Status::Sold.to_string(), "Sold");
    }
}
