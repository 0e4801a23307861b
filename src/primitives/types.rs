//! Passcode primitive props.
//!
//! Plain data, `Default`-able in the usual props style:
//!
//! ```ignore
//! let props = PasscodeProps {
//!     fields: Fields::Count(6),
//!     character_class: CharacterClass::Digit,
//!     ..Default::default()
//! };
//! ```

use std::collections::BTreeMap;

use crate::state::UpdateCallback;
use crate::types::CharacterClass;

// =============================================================================
// Field identifiers
// =============================================================================

/// Name and id for one field's input element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    pub name: Option<String>,
    pub id: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id.into()),
        }
    }
}

/// How many fields to build, or the explicit list of them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Fields {
    /// N fields named `{name}[i]` with ids `{id}-i`.
    Count(usize),
    /// One field per entry, used as given.
    List(Vec<FieldSpec>),
}

impl Default for Fields {
    fn default() -> Self {
        Fields::Count(0)
    }
}

impl Fields {
    pub fn len(&self) -> usize {
        match self {
            Fields::Count(n) => *n,
            Fields::List(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand into one spec per field. Prefixes default to `code`.
    pub fn specs(&self, name: Option<&str>, id: Option<&str>) -> Vec<FieldSpec> {
        match self {
            Fields::List(list) => list.clone(),
            Fields::Count(n) => {
                let name = name.unwrap_or("code");
                let id = id.unwrap_or("code");
                (0..*n)
                    .map(|i| FieldSpec::new(format!("{}[{}]", name, i), format!("{}-{}", id, i)))
                    .collect()
            }
        }
    }
}

// =============================================================================
// Passcode Props
// =============================================================================

/// Everything needed to mount a passcode.
#[derive(Default)]
pub struct PasscodeProps {
    // =========================================================================
    // Fields
    // =========================================================================

    /// Field count or explicit field list.
    pub fields: Fields,

    /// Name prefix for generated fields (default: "code").
    pub name: Option<String>,

    /// Id prefix for generated fields (default: "code").
    pub id: Option<String>,

    // =========================================================================
    // Value
    // =========================================================================

    /// Characters each field accepts (default: unrestricted).
    pub character_class: CharacterClass,

    /// Initial code.
    pub default_value: Option<String>,

    /// Fired after every value change.
    pub on_update: Option<UpdateCallback>,

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Focus the first field on mount (default: false).
    pub auto_focus: Option<bool>,

    /// Move focus forward on entry and back on deletion (default: true).
    pub auto_tab: Option<bool>,

    /// Mark each field required (default: true).
    pub required: Option<bool>,

    // =========================================================================
    // Rendering pass-through
    // =========================================================================

    /// Declared input type (default: "text").
    pub input_type: Option<String>,

    /// Custom field renderer key. Not interpreted here.
    pub renderer: Option<String>,

    /// Extra attributes applied after the mandated ones.
    pub extra_attributes: BTreeMap<String, String>,
}

impl PasscodeProps {
    pub fn auto_focus_enabled(&self) -> bool {
        self.auto_focus.unwrap_or(false)
    }

    pub fn auto_tab_enabled(&self) -> bool {
        self.auto_tab.unwrap_or(true)
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(true)
    }
}

// =============================================================================
// Tests
// =============================================================================
