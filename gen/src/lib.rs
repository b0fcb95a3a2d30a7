//! modstate-gen
//!
//! This crate implements:
//!  1) A typed decode of the `!GlobalTypes.json` schema dump (`schema`),
//!  2) A validator for the `EModifierState` flag list (`validator`),
//!  3) Raw-name → PascalCase member-name normalization (`names`),
//!  4) Emission of the `ModifierStateShift` / `ModifierStateIndex` /
//!     `ModifierStateMask` enum source (`emitter`),
//!  5) Error types (`GenError`).
//!
//! The modifier-state enum assigns each gameplay modifier a bit position; the
//! runtime packs those bits into an array of 32-bit words. The three emitted
//! enums give downstream code the shift, the word index, and the in-word mask
//! for every flag, consistent by construction.

pub mod emitter;
pub mod error;
pub mod names;
pub mod schema;
pub mod validator;

pub use emitter::{build_members, emit, EnumMember};
pub use error::GenError;
pub use names::normalize_flag_name;
pub use schema::parse_document;
pub use validator::validate;

/// Run the whole pipeline on raw dump text: decode, extract `EModifierState`,
/// validate, normalize, and render the three enum blocks.
/// Returns `Err(GenError)` on the first violated invariant; no partial output.
pub fn generate(text: &str) -> Result<String, GenError> {
    let document = schema::parse_document(text)?;
    let definition = document.modifier_state()?;
    let items = validator::validate(&definition)?;
    let members = emitter::build_members(items)?;
    Ok(emitter::emit(&members))
}
