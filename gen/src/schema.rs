use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::GenError;

/// Name of the one enum this generator handles.
pub const MODIFIER_STATE_ENUM: &str = "EModifierState";

/// Expected `align` of the dumped enum. The items hold shift values, so they
/// never need the full 32 bits, but the dump pipeline always writes 4.
pub const SHIFT_ALIGN: u64 = 4;

/// Root of the dumped schema document. Exactly two keys; anything else is a
/// different dump format and gets rejected at decode time.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    pub enums:   Map<String, Value>,
    pub classes: Map<String, Value>,
}

/// The `EModifierState` entry under `enums`. Other enums in the dump stay as
/// raw `Value`s and are never inspected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDefinition {
    pub align: u64,
    pub items: Vec<FlagItem>,
}

/// One named bit position. `u64` rejects negative or fractional values during
/// decode, so later stages only deal with non-negative integers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagItem {
    pub name:  String,
    pub value: u64,
}

/// Decode the raw dump text into the typed document.
pub fn parse_document(text: &str) -> Result<SchemaDocument, GenError> {
    let document: SchemaDocument = serde_json::from_str(text)?;
    Ok(document)
}

impl SchemaDocument {
    /// Extract and decode `enums["EModifierState"]`.
    pub fn modifier_state(&self) -> Result<EnumDefinition, GenError> {
        let raw = self.enums.get(MODIFIER_STATE_ENUM).ok_or_else(|| {
            GenError::Shape(format!(
                "enum {:?} not present in the dump",
                MODIFIER_STATE_ENUM
            ))
        })?;
        let definition: EnumDefinition = serde_json::from_value(raw.clone())?;
        Ok(definition)
    }
}
