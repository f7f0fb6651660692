use crate::utils::error::{MuseumError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MuseumError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Extensions are given without the leading dot, e.g. `JPG`.
pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one extension is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for ext in extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MuseumError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Extensions must be alphanumeric and given without a dot".to_string(),
            });
        }
        if !seen.insert(ext.as_str()) {
            return Err(MuseumError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Duplicate extension".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written as a containment check so NaN is rejected
    if !(min..=max).contains(&value) {
        return Err(MuseumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://example.com").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("fallback.max_photos", 12, 1).is_ok());
        assert!(validate_positive_number("fallback.max_photos", 0, 1).is_err());
    }

    #[test]
    fn test_validate_extensions() {
        let exts = vec!["JPG".to_string(), "png".to_string()];
        assert!(validate_extensions("fallback.extensions", &exts).is_ok());

        assert!(validate_extensions("fallback.extensions", &[]).is_err());
        assert!(validate_extensions("fallback.extensions", &[".jpg".to_string()]).is_err());
        assert!(
            validate_extensions("fallback.extensions", &["jpg".to_string(), "jpg".to_string()])
                .is_err()
        );
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("ambient_volume", 0.3, 0.0, 1.0).is_ok());
        assert!(validate_range("ambient_volume", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("ambient_volume", f64::NAN, 0.0, 1.0).is_err());
        assert!(validate_range("ambient_volume", 1.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_validate_path_rejects_nul() {
        assert!(validate_path("photo_folder", "assets/photos/gallery/").is_ok());
        assert!(validate_path("photo_folder", "").is_err());
        assert!(validate_path("photo_folder", "bad\0path").is_err());
    }
}
