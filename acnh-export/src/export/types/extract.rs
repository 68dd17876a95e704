//! Field extraction rules
//!
//! Each output field of a record is produced by one of these rules applied
//! to the normalized row. Integer rules fail hard on unparsable cells; the
//! only nulls in the output come from the explicitly nullable rules.

use super::category::Hemisphere;

/// How one record field is derived from a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Integer column; an unparsable cell aborts the run
    Int(&'static str),
    /// Required text column
    Text(&'static str),
    /// Text column where anything but a populated string becomes null
    TextOrNull(&'static str),
    /// Integer column where the literal "NA" becomes null
    IntOrNa(&'static str),
    /// True iff the cell equals the given literal
    Equals(&'static str, &'static str),
    /// Second whitespace-separated token of the cell, as an integer
    /// ("Room 2" -> 2)
    SecondWord(&'static str),
    /// Month-by-month availability map for one hemisphere
    Months(Hemisphere),
    /// First populated time window across all month columns
    FirstTime,
}
