//! Ordered bracket tables.
//!
//! SSS contributions and withholding tax are both looked up in tables of
//! `(upper_bound, rule)` rows. Rows are scanned in ascending order and the
//! first row whose inclusive upper bound admits the value wins; a row without
//! an upper bound catches everything above the last bound.

use crate::error::{EngineError, EngineResult};

/// A row of an ordered bracket table.
pub trait Bracket {
    /// Inclusive upper bound of the row, or `None` for the open-ended top row.
    fn upper_bound(&self) -> Option<f64>;
}

/// Finds the first row admitting `value`, with its index.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::find_bracket;
/// use payroll_preview::config::PreviewRules;
///
/// let rules = PreviewRules::reference();
/// let (index, row) = find_bracket(rules.sss_table(), 1000.0).unwrap();
/// assert_eq!(index, 0);
/// assert_eq!(row.contribution, 50.0);
/// ```
pub fn find_bracket<B: Bracket>(table: &[B], value: f64) -> Option<(usize, &B)> {
    table
        .iter()
        .enumerate()
        .find(|(_, row)| row.upper_bound().is_none_or(|bound| value <= bound))
}

/// Checks that a table can answer every lookup.
///
/// The table must be non-empty, its bounds finite and strictly ascending, and
/// exactly its last row open-ended.
pub fn validate_brackets<B: Bracket>(table_name: &str, table: &[B]) -> EngineResult<()> {
    let invalid = |message: String| EngineError::InvalidRules {
        table: table_name.to_string(),
        message,
    };

    let Some((last, rows)) = table.split_last() else {
        return Err(invalid("table is empty".to_string()));
    };

    if last.upper_bound().is_some() {
        return Err(invalid("last bracket must not have an upper bound".to_string()));
    }

    let mut previous: Option<f64> = None;
    for (index, row) in rows.iter().enumerate() {
        let bound = row.upper_bound().ok_or_else(|| {
            invalid(format!(
                "bracket {} has no upper bound but is not the last bracket",
                index
            ))
        })?;

        if !bound.is_finite() {
            return Err(invalid(format!("bracket {} has a non-finite upper bound", index)));
        }
        if let Some(prev) = previous {
            if bound <= prev {
                return Err(invalid(format!(
                    "bracket {} upper bound {} does not exceed previous bound {}",
                    index, bound, prev
                )));
            }
        }
        previous = Some(bound);
    }

    Ok(())
}
