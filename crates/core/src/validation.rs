//! Selector validation

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

static SELECTOR_RE: OnceLock<Regex> = OnceLock::new();

/// Check the built selector against the accepted shape: dash-joined segments,
/// each starting with a letter.
pub fn validate_selector(selector: &str) -> Result<()> {
    let re = SELECTOR_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z][.0-9a-zA-Z]*(-[a-zA-Z][.0-9a-zA-Z]*)*$").unwrap()
    });

    if re.is_match(selector) {
        Ok(())
    } else {
        Err(Error::InvalidSelector(selector.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selectors() {
        for selector in ["app-foo", "foo", "app-myWidget", "x-a1", "a.b-c"] {
            assert!(validate_selector(selector).is_ok(), "{selector} should be valid");
        }
    }

    #[test]
    fn test_invalid_selectors() {
        for selector in ["", "1foo", "-foo", "app-", "app--foo", "app foo", "app_foo"] {
            let err = validate_selector(selector);
            assert!(err.is_err(), "{selector} should be rejected");
            assert!(matches!(err.unwrap_err(), Error::InvalidSelector(_)));
        }
    }
}
