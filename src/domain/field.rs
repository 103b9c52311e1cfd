// ============================================================================
// Field Domain Model
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// One of the three synchronized input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// Crafting metal, the pivot unit of every conversion
    Metal,
    /// Keys, worth a configurable amount of metal
    Keys,
    /// Real-world currency, priced per key
    Currency,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Metal, Field::Keys, Field::Currency];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Metal => "metal",
            Field::Keys => "keys",
            Field::Currency => "currency",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The field currently acting as source of truth, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActiveField {
    #[default]
    None,
    Metal,
    Keys,
    Currency,
}

impl ActiveField {
    pub fn field(&self) -> Option<Field> {
        match self {
            ActiveField::None => None,
            ActiveField::Metal => Some(Field::Metal),
            ActiveField::Keys => Some(Field::Keys),
            ActiveField::Currency => Some(Field::Currency),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ActiveField::None)
    }
}

impl From<Field> for ActiveField {
    fn from(field: Field) -> Self {
        match field {
            Field::Metal => ActiveField::Metal,
            Field::Keys => ActiveField::Keys,
            Field::Currency => ActiveField::Currency,
        }
    }
}

impl From<Option<Field>> for ActiveField {
    fn from(field: Option<Field>) -> Self {
        field.map_or(ActiveField::None, ActiveField::from)
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// The three display strings shown to the user.
///
/// The active field holds raw typed text; the other two hold formatted
/// derivations of it, or are empty when the raw text is not a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldValues {
    pub metal: String,
    pub keys: String,
    pub currency: String,
}

impl FieldValues {
    pub fn new(
        metal: impl Into<String>,
        keys: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            metal: metal.into(),
            keys: keys.into(),
            currency: currency.into(),
        }
    }

    /// Only `field` carries text, the others are empty
    pub fn only(field: Field, raw: impl Into<String>) -> Self {
        let mut values = Self::default();
        values.set(field, raw);
        values
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Metal => &self.metal,
            Field::Keys => &self.keys,
            Field::Currency => &self.currency,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Metal => &mut self.metal,
            Field::Keys => &mut self.keys,
            Field::Currency => &mut self.currency,
        };
        *slot = value.into();
    }

    /// True when all three fields are empty
    pub fn is_empty(&self) -> bool {
        self.metal.is_empty() && self.keys.is_empty() && self.currency.is_empty()
    }
}
