use crate::error::{PlecostError, Result};
use std::cmp::Ordering;
use tracing::trace;

/// Number of numeric components compared; shorter versions are padded with zeros.
const VERSION_WIDTH: usize = 4;

/// Marker for development builds, ordered above every release.
const TRUNK: &str = "trunk";

/// Compares two version strings.
///
/// `"trunk"` (any case) is the greatest version. It is checked on `v1` first,
/// so `compare("trunk", "trunk")` is [`Ordering::Greater`] rather than equal.
///
/// Otherwise both strings are split on `.`, padded to four components and
/// compared component by component. Components past the fourth are validated
/// but do not take part in the ordering. Surrounding whitespace is ignored and
/// components have no upper bound.
///
/// # Errors
///
/// Returns [`PlecostError::VersionParse`] if a component is not a
/// non-negative integer (for example `"1.2-beta"` or `"1..2"`).
///
/// # Example
///
/// ```
/// use plecost::checker::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("1.2.3", "1.3.0").unwrap(), Ordering::Less);
/// assert_eq!(compare("2.0", "2.0.0.0").unwrap(), Ordering::Equal);
/// assert_eq!(compare("Trunk", "9.9").unwrap(), Ordering::Greater);
/// ```
pub fn compare(v1: &str, v2: &str) -> Result<Ordering> {
    if is_trunk(v1) {
        return Ok(Ordering::Greater);
    }
    if is_trunk(v2) {
        return Ok(Ordering::Less);
    }

    let left = version_key(v1)?;
    let right = version_key(v2)?;
    let ordering = left.cmp(&right);

    trace!(v1, v2, ?ordering, "Compared versions.");
    Ok(ordering)
}

/// Returns true when `current` orders strictly before `latest`.
pub fn is_older(current: &str, latest: &str) -> Result<bool> {
    Ok(compare(current, latest)? == Ordering::Less)
}

fn is_trunk(version: &str) -> bool {
    version.trim().eq_ignore_ascii_case(TRUNK)
}

/// Decimal digits with leading zeros stripped; zero is the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Digits<'a>(&'a str);

impl Ord for Digits<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Digits<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn version_key(version: &str) -> Result<[Digits<'_>; VERSION_WIDTH]> {
    let mut key = [Digits::default(); VERSION_WIDTH];

    for (i, component) in version.split('.').enumerate() {
        let digits = parse_component(version, component)?;
        if i < VERSION_WIDTH {
            key[i] = digits;
        }
    }

    Ok(key)
}

fn parse_component<'a>(version: &str, component: &'a str) -> Result<Digits<'a>> {
    let trimmed = component.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PlecostError::VersionParse {
            version: version.to_string(),
            component: component.to_string(),
        });
    }

    Ok(Digits(trimmed.trim_start_matches('0')))
}
