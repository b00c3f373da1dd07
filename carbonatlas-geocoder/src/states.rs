/// U.S. state name resolution
///
/// Holds the fixed table of the 50 state full names and their two-letter
/// abbreviations, and resolves free-form input into a canonical code:
///
/// 1. A case-insensitive match on a full name yields its abbreviation.
/// 2. Input whose uppercase form is a known abbreviation is kept, uppercased.
/// 3. Anything else is rejected before any network call happens.
///
/// The table is built once on first use and never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Full state name (lowercase) to USPS two-letter abbreviation.
pub static STATE_ABBREVIATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("alabama", "AL"),
            ("alaska", "AK"),
            ("arizona", "AZ"),
            ("arkansas", "AR"),
            ("california", "CA"),
            ("colorado", "CO"),
            ("connecticut", "CT"),
            ("delaware", "DE"),
            ("florida", "FL"),
            ("georgia", "GA"),
            ("hawaii", "HI"),
            ("idaho", "ID"),
            ("illinois", "IL"),
            ("indiana", "IN"),
            ("iowa", "IA"),
            ("kansas", "KS"),
            ("kentucky", "KY"),
            ("louisiana", "LA"),
            ("maine", "ME"),
            ("maryland", "MD"),
            ("massachusetts", "MA"),
            ("michigan", "MI"),
            ("minnesota", "MN"),
            ("mississippi", "MS"),
            ("missouri", "MO"),
            ("montana", "MT"),
            ("nebraska", "NE"),
            ("nevada", "NV"),
            ("new hampshire", "NH"),
            ("new jersey", "NJ"),
            ("new mexico", "NM"),
            ("new york", "NY"),
            ("north carolina", "NC"),
            ("north dakota", "ND"),
            ("ohio", "OH"),
            ("oklahoma", "OK"),
            ("oregon", "OR"),
            ("pennsylvania", "PA"),
            ("rhode island", "RI"),
            ("south carolina", "SC"),
            ("south dakota", "SD"),
            ("tennessee", "TN"),
            ("texas", "TX"),
            ("utah", "UT"),
            ("vermont", "VT"),
            ("virginia", "VA"),
            ("washington", "WA"),
            ("west virginia", "WV"),
            ("wisconsin", "WI"),
            ("wyoming", "WY"),
        ])
    });

/// Error for state input that is neither a known full name nor a known
/// abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid state input {0:?}")]
pub struct InvalidStateError(pub String);

/// Resolves a state given as a full name or abbreviation to its canonical
/// two-letter code.
///
/// # Errors
///
/// Returns [`InvalidStateError`] when the input matches neither form.
///
/// # Example
///
/// ```
/// use carbonatlas_geocoder::states::resolve_state;
///
/// assert_eq!(resolve_state("California").unwrap(), "CA");
/// assert_eq!(resolve_state("ca").unwrap(), "CA");
/// assert!(resolve_state("Narnia").is_err());
/// ```
pub fn resolve_state(input: &str) -> Result<String, InvalidStateError> {
    let lowered = input.to_lowercase();
    if let Some(abbr) = STATE_ABBREVIATIONS.get(lowered.as_str()) {
        return Ok((*abbr).to_string());
    }

    let upper = input.to_uppercase();
    if STATE_ABBREVIATIONS.values().any(|abbr| *abbr == upper) {
        return Ok(upper);
    }

    Err(InvalidStateError(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_fifty_states() {
        assert_eq!(STATE_ABBREVIATIONS.len(), 50);
    }

    #[test]
    fn test_full_names_resolve_case_insensitively() {
        // Every full name resolves to its abbreviation regardless of case
        for (name, abbr) in STATE_ABBREVIATIONS.iter() {
            assert_eq!(resolve_state(name).unwrap(), *abbr);
            assert_eq!(resolve_state(&name.to_uppercase()).unwrap(), *abbr);

            // Title-case the first letter, as users typically type it
            let mut chars = name.chars();
            let titled: String = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            assert_eq!(resolve_state(&titled).unwrap(), *abbr);
        }
    }

    #[test]
    fn test_abbreviations_resolve_to_themselves() {
        for abbr in STATE_ABBREVIATIONS.values() {
            assert_eq!(resolve_state(abbr).unwrap(), *abbr);
            assert_eq!(resolve_state(&abbr.to_lowercase()).unwrap(), *abbr);
        }
    }

    #[test]
    fn test_unknown_state_is_rejected() {
        for bad in ["", "Narnia", "C", "CAL", "XX", "new-york"] {
            let err = resolve_state(bad).unwrap_err();
            assert_eq!(err, InvalidStateError(bad.to_string()));
        }
    }

    #[test]
    fn test_multi_word_names() {
        assert_eq!(resolve_state("new hampshire").unwrap(), "NH");
        assert_eq!(resolve_state("New Hampshire").unwrap(), "NH");
        assert_eq!(resolve_state("WEST VIRGINIA").unwrap(), "WV");
    }
}
