//! Input validation for sign and sub-resource names
//!
//! Every caller-supplied name passes through one of the validated types here
//! before it is joined onto a filesystem path. Fields are private to force
//! validation through the public API.

use std::fmt;

/// Upper bound for any name accepted from a caller.
pub const MAX_NAME_LEN: usize = 128;

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for sign and resource names
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid length for {field}: expected 1-{max}, got {actual}")]
    InvalidLength {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Invalid format for {field}: {value:?} (expected: {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{field} must not start with a dot: {value:?}")]
    LeadingDot { field: &'static str, value: String },
}

fn check_length(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidLength {
            field,
            max: MAX_NAME_LEN,
            actual: name.len(),
        });
    }
    Ok(())
}

// ============================================================================
// SignName
// ============================================================================

/// Validated sign name: `^[A-Za-z0-9_-]{1,128}$`
///
/// No separators, no dots, no NUL. Safe to use as a single path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignName(String);

impl SignName {
    /// Create a new validated SignName
    ///
    /// Unlike the exchange's symbol names, sign names are not trimmed: a name
    /// with surrounding whitespace is simply invalid.
    ///
    /// # Examples
    /// ```
    /// use signboard::signs::SignName;
    ///
    /// assert!(SignName::new("uka-17").is_ok());
    /// assert!(SignName::new("../etc").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        check_length("sign", name)?;

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidFormat {
                field: "sign",
                value: name.to_string(),
                expected: "letters, numbers, dash, underscore only",
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SignName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ResourceName - asset / program file names
// ============================================================================

/// Validated file name inside a sign's `assets/` or `pgms/` subtree.
///
/// Same character policy as [`SignName`] plus interior dots so that file
/// extensions survive (`logo.png`, `intro.pgm`). A leading dot is rejected,
/// which also rules out `.` and `..`, and so is any `..` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(field: &'static str, name: &str) -> Result<Self, ValidationError> {
        check_length(field, name)?;

        if name.starts_with('.') {
            return Err(ValidationError::LeadingDot {
                field,
                value: name.to_string(),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        {
            return Err(ValidationError::InvalidFormat {
                field,
                value: name.to_string(),
                expected: "letters, numbers, dash, underscore, dot only",
            });
        }

        if name.contains("..") {
            return Err(ValidationError::InvalidFormat {
                field,
                value: name.to_string(),
                expected: "no '..' sequence",
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
