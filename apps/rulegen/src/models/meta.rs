//! Static rule metadata record.
//!
//! Rules declare their metadata in a sidecar file next to the executable
//! module. Only this record is read; rule logic is never executed.
//!
//! ```toml
//! fixable = "code"            # code|whitespace, omitted means none
//! [docs]
//! description = "Enforce consistent spacing"
//! recommended = true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
/// Kind of autofix a rule can apply.
pub enum Fixable {
    #[default]
    None,
    Code,
    Whitespace,
}

impl Fixable {
    pub fn is_fixable(self) -> bool {
        !matches!(self, Fixable::None)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleDocs {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recommended: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// Declarative claims a rule makes about itself. Unknown keys are ignored.
pub struct RuleMeta {
    #[serde(default)]
    pub fixable: Fixable,
    #[serde(default)]
    pub docs: Option<RuleDocs>,
}

impl RuleMeta {
    pub fn docs_description(&self) -> Option<&str> {
        self.docs.as_ref()?.description.as_deref()
    }

    pub fn docs_recommended(&self) -> bool {
        self.docs
            .as_ref()
            .and_then(|d| d.recommended)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_from_toml_and_json() {
        let m: RuleMeta = toml::from_str(
            r#"
fixable = "whitespace"
type = "layout"
[docs]
description = "x"
"#,
        )
        .unwrap();
        assert_eq!(m.fixable, Fixable::Whitespace);
        assert_eq!(m.docs_description(), Some("x"));
        assert!(!m.docs_recommended());

        let m: RuleMeta =
            serde_json::from_str(r#"{"docs":{"recommended":true}}"#).unwrap();
        assert_eq!(m.fixable, Fixable::None);
        assert!(!m.fixable.is_fixable());
        assert!(m.docs_recommended());
        assert_eq!(m.docs_description(), None);
    }

    #[test]
    fn test_unknown_fixable_is_rejected() {
        assert!(toml::from_str::<RuleMeta>(r#"fixable = "everything""#).is_err());
    }
}
