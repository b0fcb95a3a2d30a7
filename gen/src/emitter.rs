use std::collections::HashMap;

use crate::{error::GenError, names::normalize_flag_name, schema::FlagItem};

/// Width of one backing storage word.
pub const WORD_BITS: u64 = 32;

/// One emitted flag: a normalized member name plus its global bit position.
/// The word index and in-word mask are derived, never stored, so the three
/// representations cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name:  String,
    pub shift: u64,
}

impl EnumMember {
    /// Which 32-bit word holds this flag.
    pub fn word_index(&self) -> u64 {
        self.shift / WORD_BITS
    }

    /// Single-bit pattern within that word.
    pub fn mask(&self) -> u32 {
        1u32 << (self.shift % WORD_BITS)
    }
}

/// Drop the COUNT/INVALID sentinel tail, normalize the remaining names, and
/// assign each flag its position as the shift value. Two raw names landing on
/// the same normalized name is a hard failure; emitting them would alias two
/// distinct flags onto one member.
///
/// Expects an already-validated item sequence (dense values, sentinel tail).
pub fn build_members(items: &[FlagItem]) -> Result<Vec<EnumMember>, GenError> {
    let flags = &items[..items.len().saturating_sub(2)];

    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut members = Vec::with_capacity(flags.len());
    for (position, item) in flags.iter().enumerate() {
        let name = normalize_flag_name(&item.name);
        if let Some(first) = seen.insert(name.clone(), &item.name) {
            return Err(GenError::NameCollision {
                first:      first.to_string(),
                second:     item.name.clone(),
                normalized: name,
            });
        }
        members.push(EnumMember {
            name,
            shift: position as u64,
        });
    }
    Ok(members)
}

/// Render the three enum blocks in the shape the downstream compiler expects,
/// separated by blank lines, members in bit-position order.
pub fn emit(members: &[EnumMember]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("public enum ModifierStateShift".to_string());
    lines.push("{".to_string());
    for member in members {
        lines.push(format!("  {} = {},", member.name, member.shift));
    }
    lines.push("}".to_string());
    lines.push("".to_string());

    lines.push("public enum ModifierStateIndex".to_string());
    lines.push("{".to_string());
    for member in members {
        lines.push(format!(
            "  {} = ModifierStateShift.{} / {},",
            member.name, member.name, WORD_BITS
        ));
    }
    lines.push("}".to_string());
    lines.push("".to_string());

    lines.push("public enum ModifierStateMask : uint".to_string());
    lines.push("{".to_string());
    for member in members {
        lines.push(format!(
            "  {} = 1u << (ModifierStateShift.{} % {}),",
            member.name, member.name, WORD_BITS
        ));
    }
    lines.push("}".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
