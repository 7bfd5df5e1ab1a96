//! Catalog configuration.
//!
//! Embedders can recolor individual commands without touching the builtin
//! grammar: an override replaces the classification list of one command,
//! keeping its matcher shape. Overrides are validated when the catalog is
//! built, never at parse time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::doxy::fragments::Classification;

use super::CatalogError;

/// Declarative catalog adjustments.
///
/// The serialized form is a JSON object:
///
/// ```text
/// { "classification-overrides": { "todo": ["warning"], "param": ["command", "parameter-clamped", "parameter2"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CatalogConfig {
    /// Replacement classification lists keyed by command name without the
    /// `\`/`@` prefix. Each list must be as long as the command's capture
    /// group count, command token included.
    pub classification_overrides: BTreeMap<String, Vec<Classification>>,
}

impl CatalogConfig {
    /// Parses a configuration document from JSON.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(text).map_err(|err| CatalogError::InvalidDocument {
            message: err.to_string(),
        })
    }

    /// True when the configuration changes nothing.
    pub fn is_empty(&self) -> bool {
        self.classification_overrides.is_empty()
    }

    /// Adds one override, replacing any previous override for `name`.
    pub fn override_classifications(
        &mut self,
        name: impl Into<String>,
        classifications: Vec<Classification>,
    ) -> &mut Self {
        self.classification_overrides
            .insert(name.into(), classifications);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doxy::catalog::CommandCatalog;

    #[test]
    fn parses_override_document() {
        let config = CatalogConfig::from_json(
            r#"{ "classification-overrides": { "todo": ["warning"] } }"#,
        )
        .unwrap();
        assert_eq!(
            config.classification_overrides["todo"],
            vec![Classification::Warning]
        );
    }

    #[test]
    fn empty_document_is_default() {
        let config = CatalogConfig::from_json("{}").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = CatalogConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDocument { .. }));
    }

    #[test]
    fn unknown_classification_name_is_rejected() {
        let err = CatalogConfig::from_json(
            r#"{ "classification-overrides": { "todo": ["sparkly"] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDocument { .. }));
    }

    #[test]
    fn override_applies_to_built_catalog() {
        let mut config = CatalogConfig::default();
        config.override_classifications("todo", vec![Classification::Warning]);
        let catalog = CommandCatalog::with_config(&config).unwrap();
        assert_eq!(
            catalog.classifications_of("todo"),
            Some(&[Classification::Warning][..])
        );
        // Other members of the same builtin group keep their default.
        assert_eq!(
            catalog.classifications_of("note"),
            Some(&[Classification::Note][..])
        );
    }

    #[test]
    fn unknown_command_fails_fast() {
        let mut config = CatalogConfig::default();
        config.override_classifications("notreal", vec![Classification::Command]);
        let err = CommandCatalog::with_config(&config).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCommand {
                name: "notreal".into()
            }
        );
    }

    #[test]
    fn wrong_length_fails_fast() {
        let mut config = CatalogConfig::default();
        config.override_classifications("param", vec![Classification::Command]);
        let err = CommandCatalog::with_config(&config).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ClassificationCount {
                name: "param".into(),
                expected: 3,
                found: 1,
            }
        );
    }
}
