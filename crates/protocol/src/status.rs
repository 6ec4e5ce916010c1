//! Status labels.
//!
//! A task's status is a free-form string: the board does not fix a set of
//! workflow stages, so any label is a valid status. The empty string means
//! the task has no status yet; everywhere a status is grouped or compared,
//! it is first mapped to its *effective* label, which turns the empty string
//! into [`UNSET_STATUS`].
//!
//! # Examples
//!
//! ```
//! use taskboard_protocol::{UNSET_STATUS, effective_status};
//!
//! assert_eq!(effective_status("todo"), "todo");
//! assert_eq!(effective_status(""), UNSET_STATUS);
//! ```

/// The label used for tasks whose status is empty.
pub const UNSET_STATUS: &str = "unset";

/// Returns the label a status is grouped under.
///
/// Non-empty statuses map to themselves; the empty string maps to
/// [`UNSET_STATUS`].
#[must_use]
pub fn effective_status(status: &str) -> &str {
    if status.is_empty() {
        UNSET_STATUS
    } else {
        status
    }
}

/// Returns `true` if the status is empty or spelled as the unset sentinel.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::is_unset;
///
/// assert!(is_unset(""));
/// assert!(is_unset("unset"));
/// assert!(!is_unset("done"));
/// ```
#[must_use]
pub fn is_unset(status: &str) -> bool {
    effective_status(status) == UNSET_STATUS
}

/// Returns a human-readable name for a status label.
///
/// Separators (`_`, `-`) become spaces and each word is capitalized, so
/// `"in_progress"` is shown as `"In Progress"`. Labels that are already
/// written for humans pass through with only their first letters raised.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::display_name;
///
/// assert_eq!(display_name("todo"), "Todo");
/// assert_eq!(display_name("in_progress"), "In Progress");
/// assert_eq!(display_name("under-review"), "Under Review");
/// assert_eq!(display_name(""), "Unset");
/// ```
#[must_use]
pub fn display_name(status: &str) -> String {
    effective_status(status)
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
