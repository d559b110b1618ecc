use crate::utils::error::ConfigError;
use std::ffi::{OsStr, OsString};

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// 必填變數：不存在或去除空白後為空都視為缺少
pub fn validate_required_var(name: &str, value: Option<OsString>) -> Result<String, ConfigError> {
    let missing = || ConfigError::MissingVariable {
        name: name.to_string(),
    };

    let value = value.ok_or_else(missing)?;
    let value = value.into_string().map_err(|_| ConfigError::NotUnicode {
        name: name.to_string(),
    })?;

    if value.trim().is_empty() {
        return Err(missing());
    }
    Ok(value)
}

pub fn validate_non_empty_string(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingVariable {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Unset or empty falls back to `default`. Otherwise the leading integer is
/// taken and trailing text ignored ("80.5" is 80, "3000abc" is 3000). No
/// range check is applied.
pub fn parse_port(value: Option<&OsStr>, default: i64) -> Result<i64, ConfigError> {
    let raw = match value {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(default),
    };

    let invalid = || ConfigError::InvalidPort {
        value: raw.to_string_lossy().into_owned(),
    };

    let text = raw.to_str().ok_or_else(invalid)?;
    leading_integer(text).ok_or_else(invalid)
}

/// Optional sign plus the leading run of ASCII digits, after leading
/// whitespace. `None` when there are no digits or the value overflows.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
