//! Textual-format predicates: JSON, URLs, emails, phone numbers.
//!
//! These are the only predicates with internal failure paths. Parse
//! failures are swallowed and reported as `false`, never propagated.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::Value;

/// Optional `http(s)://` scheme, then a domain name with a TLD of at
/// least two letters or a dotted-quad IPv4 address, then optional port,
/// path, query string, and fragment. Case-insensitive, fully anchored.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("url pattern compiles")
});

/// Local part either dot-separated atoms or a quoted string, domain
/// either a bracketed IPv4 address or dotted labels ending in a TLD of
/// at least two letters. Fully anchored.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

/// Check whether the given value parses as JSON text.
///
/// Coercion goes through [`Value::text`]: strings, numbers, and booleans
/// render and parse, everything else is `false`. That makes
/// `is_json(Null)` false here, where a host that stringifies null to
/// `"null"` before parsing would accept it.
#[must_use]
pub fn is_json(value: &Value) -> bool {
    value
        .text()
        .is_some_and(|t| serde_json::from_str::<serde_json::Value>(&t).is_ok())
}

/// Check whether the given value is a valid URL.
#[must_use]
pub fn is_url(value: &Value) -> bool {
    value.text().is_some_and(|t| URL_PATTERN.is_match(&t))
}

/// Check whether the given value is an email address.
#[must_use]
pub fn email(value: &Value) -> bool {
    value.text().is_some_and(|t| EMAIL_PATTERN.is_match(&t))
}

/// Check whether `number` is a valid phone number for the given region
/// (an ISO 3166-1 alpha-2 code such as `"US"` or `"EG"`).
///
/// Validation goes through the libphonenumber metadata. An unknown
/// region, a non-string argument, or a parse failure all classify as
/// `false`.
#[must_use]
pub fn phone(number: &Value, region: &Value) -> bool {
    let (Some(number), Some(region)) = (number.as_str(), region.as_str()) else {
        return false;
    };
    let Ok(id) = region.parse::<phonenumber::country::Id>() else {
        return false;
    };
    match phonenumber::parse(Some(id), number) {
        Ok(parsed) => phonenumber::is_valid(&parsed),
        Err(_) => false,
    }
}
