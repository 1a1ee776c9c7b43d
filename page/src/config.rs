//! Content file support.
//!
//! Page content can be swapped without touching render logic by pointing the
//! loader at a `.toml` or `.json` file shaped like [`PageContent`].

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::PageContent;

/// Number of tiles the feature grid is laid out for.
pub const FEATURE_COUNT: usize = 6;

/// Number of entries in the navigation bar.
pub const NAV_ITEM_COUNT: usize = 4;

/// Errors raised while loading or validating page content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported content format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("expected {expected} features, found {found}")]
    FeatureCount { expected: usize, found: usize },

    #[error("expected {expected} navigation items, found {found}")]
    NavItemCount { expected: usize, found: usize },

    #[error("{field} must not be empty")]
    EmptyField { field: String },
}

impl PageContent {
    /// Parse content from a TOML document and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Parse content from a JSON document and validate it.
    pub fn from_json_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a file, picking the parser by extension.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => return Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(
            "Loaded page content from {} ({} features)",
            path.display(),
            content.features.items.len()
        );
        Ok(content)
    }

    /// Load content from a file.
    /// Returns the built-in content if the file doesn't exist or is invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Falling back to built-in content: {}", e);
                Self::default()
            }
        }
    }

    /// Check the layout invariants the page relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        non_empty("brand", &self.brand)?;

        if self.nav.items.len() != NAV_ITEM_COUNT {
            return Err(ContentError::NavItemCount {
                expected: NAV_ITEM_COUNT,
                found: self.nav.items.len(),
            });
        }
        for (idx, item) in self.nav.items.iter().enumerate() {
            non_empty(&format!("nav.items[{}]", idx), item)?;
        }
        non_empty("nav.login_label", &self.nav.login_label)?;

        if self.features.items.len() != FEATURE_COUNT {
            return Err(ContentError::FeatureCount {
                expected: FEATURE_COUNT,
                found: self.features.items.len(),
            });
        }
        for (idx, feature) in self.features.items.iter().enumerate() {
            non_empty(&format!("features[{}].title", idx), &feature.title)?;
            non_empty(&format!("features[{}].description", idx), &feature.description)?;
        }

        for (idx, benefit) in self.why.benefits.iter().enumerate() {
            non_empty(&format!("why.benefits[{}]", idx), benefit)?;
        }

        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_content_is_valid() {
        let content = PageContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.features.items.len(), FEATURE_COUNT);
        assert_eq!(content.nav.items.len(), NAV_ITEM_COUNT);
    }

    #[test]
    fn test_rejects_wrong_feature_count() {
        let mut content = PageContent::default();
        content.features.items.pop();

        let err = content.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::FeatureCount {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_rejects_wrong_nav_count() {
        let mut content = PageContent::default();
        content.nav.items.push("Blog".into());

        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::NavItemCount { found: 5, .. }));
    }

    #[test]
    fn test_rejects_empty_feature_title() {
        let mut content = PageContent::default();
        content.features.items[2].title = "   ".into();

        let err = content.validate().unwrap_err();
        assert_eq!(err.to_string(), "features[2].title must not be empty");
    }

    fn empty_field(content: &PageContent) -> String {
        match content.validate() {
            Err(ContentError::EmptyField { field }) => field,
            other => panic!("expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_brand() {
        let mut content = PageContent::default();
        content.brand = String::new();
        assert_eq!(empty_field(&content), "brand");
    }

    #[test]
    fn test_rejects_empty_nav_item() {
        let mut content = PageContent::default();
        content.nav.items[3] = " ".into();
        assert_eq!(empty_field(&content), "nav.items[3]");
    }

    #[test]
    fn test_rejects_empty_login_label() {
        let mut content = PageContent::default();
        content.nav.login_label = String::new();
        assert_eq!(empty_field(&content), "nav.login_label");
    }

    #[test]
    fn test_rejects_empty_benefit() {
        let mut content = PageContent::default();
        content.why.benefits[1] = "\t".into();
        assert_eq!(empty_field(&content), "why.benefits[1]");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let content = PageContent::load_or_default(&temp.path().join("content.toml"));
        assert_eq!(content, PageContent::default());
    }

    #[test]
    fn test_load_toml_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("content.toml");

        let mut custom = PageContent::default();
        custom.brand = "EduEase Beta".into();
        custom.footer = None;
        let mut file = std::fs::File::create(&path).expect("create content");
        write!(file, "{}", toml::to_string(&custom).expect("to toml")).expect("write content");

        let loaded = PageContent::from_path(&path).expect("load toml");
        assert_eq!(loaded, custom);
    }

    #[test]
    fn test_load_json_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("content.json");
        let json = serde_json::to_string_pretty(&PageContent::default()).expect("to json");
        std::fs::write(&path, json).expect("write content");

        let loaded = PageContent::from_path(&path).expect("load json");
        assert_eq!(loaded, PageContent::default());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("content.yaml");
        std::fs::write(&path, "brand: x").expect("write content");

        let err = PageContent::from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("content.toml");
        std::fs::write(&path, "brand = [").expect("write content");

        let content = PageContent::load_or_default(&path);
        assert_eq!(content.brand, "EduEase");
    }
}
