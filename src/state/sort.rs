//! Sort specification: which column and which way.

use std::fmt;
use std::str::FromStr;

// ===== SortColumn =====

/// Sortable table column. Closed set: parsing any other name fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    User,
    Date,
    Amount,
    Status,
}

impl SortColumn {
    /// Columns in header order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::User,
        SortColumn::Date,
        SortColumn::Amount,
        SortColumn::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::User => "user",
            SortColumn::Date => "date",
            SortColumn::Amount => "amount",
            SortColumn::Status => "status",
        }
    }

    /// Header label as shown above the column.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::User => "User",
            SortColumn::Date => "Date",
            SortColumn::Amount => "Amount",
            SortColumn::Status => "Status",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = UnknownSortColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSortColumn(s.to_string()))
    }
}

/// A column name that is not one of [`SortColumn::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort column '{0}' (expected one of: user, date, amount, status)")]
pub struct UnknownSortColumn(pub String);

// ===== SortDirection =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(UnknownSortDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort direction '{0}' (expected asc or desc)")]
pub struct UnknownSortDirection(pub String);

// ===== SortSpec =====

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Spec after the user activates `column`.
    ///
    /// Same column flips the direction; a different column starts ascending.
    pub fn activate(self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, self.direction.toggled())
        } else {
            Self::new(column, SortDirection::Ascending)
        }
    }
}

impl Default for SortSpec {
    /// Newest transactions first.
    fn default() -> Self {
        Self::new(SortColumn::Date, SortDirection::Descending)
    }
}
