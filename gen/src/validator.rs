use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::{
    error::GenError,
    schema::{EnumDefinition, FlagItem, SHIFT_ALIGN},
};

pub const COUNT_SENTINEL: &str = "MODIFIER_STATE_COUNT";
pub const INVALID_SENTINEL: &str = "MODIFIER_STATE_INVALID";

/// Reserved out-of-band value of the INVALID sentinel.
pub const INVALID_VALUE: u64 = 255;

/// How many offending names a naming diagnostic lists before truncating.
const NAME_SAMPLE: usize = 4;

lazy_static! {
    static ref FLAG_NAME: Regex = Regex::new(r"^MODIFIER_STATE_[A-Z0-9_]+$").unwrap();
}

/// Verify every structural invariant the emitter relies on, in order, failing
/// on the first violation. On success the full ordered item slice (sentinels
/// included) is returned; source order is the canonical bit-position order.
pub fn validate(definition: &EnumDefinition) -> Result<&[FlagItem], GenError> {
    if definition.align != SHIFT_ALIGN {
        return Err(GenError::Shape(format!(
            "expected align {}, found {}",
            SHIFT_ALIGN, definition.align
        )));
    }

    let items = &definition.items;
    if items.len() < 3 {
        return Err(GenError::TooFewItems(items.len()));
    }

    // Every value except the sentinel tail must equal its index. The emitter
    // later treats position and shift as interchangeable, so this is the
    // load-bearing check.
    for (index, item) in items[..items.len() - 1].iter().enumerate() {
        if item.value != index as u64 {
            return Err(GenError::SparseValues {
                index,
                name: item.name.clone(),
                value: item.value,
            });
        }
    }

    let invalid = &items[items.len() - 1];
    let count = &items[items.len() - 2];
    if invalid.value != INVALID_VALUE {
        return Err(GenError::Sentinel(format!(
            "final item {:?} has value {}, expected {}",
            invalid.name, invalid.value, INVALID_VALUE
        )));
    }
    if invalid.name != INVALID_SENTINEL {
        return Err(GenError::Sentinel(format!(
            "final item is named {:?}, expected {:?}",
            invalid.name, INVALID_SENTINEL
        )));
    }
    if count.name != COUNT_SENTINEL {
        return Err(GenError::Sentinel(format!(
            "second-to-last item is named {:?}, expected {:?}",
            count.name, COUNT_SENTINEL
        )));
    }

    let malformed: Vec<&str> = items
        .iter()
        .filter(|item| !FLAG_NAME.is_match(&item.name))
        .map(|item| item.name.as_str())
        .collect();
    if !malformed.is_empty() {
        let sample: Vec<&str> = malformed.iter().take(NAME_SAMPLE).cloned().collect();
        return Err(GenError::InvalidName(format!(
            "{} name(s) do not match MODIFIER_STATE_<UPPER_SNAKE_CASE>: {}",
            malformed.len(),
            sample.join(", ")
        )));
    }

    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.name.as_str()) {
            return Err(GenError::DuplicateName(item.name.clone()));
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, value: u64) -> FlagItem {
        FlagItem {
            name: name.to_string(),
            value,
        }
    }

    fn definition(items: Vec<FlagItem>) -> EnumDefinition {
        EnumDefinition { align: 4, items }
    }

    fn valid_items() -> Vec<FlagItem> {
        vec![
            item("MODIFIER_STATE_STUNNED", 0),
            item("MODIFIER_STATE_SLOWED", 1),
            item("MODIFIER_STATE_COUNT", 2),
            item("MODIFIER_STATE_INVALID", 255),
        ]
    }

    #[test]
    fn accepts_valid_definition() {
        let def = definition(valid_items());
        let items = validate(&def).expect("validate failed");
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "MODIFIER_STATE_STUNNED");
    }

    #[test]
    fn rejects_wrong_align() {
        let def = EnumDefinition {
            align: 8,
            items: valid_items(),
        };
        assert!(matches!(validate(&def), Err(GenError::Shape(_))));
    }

    #[test]
    fn rejects_fewer_than_three_items() {
        let def = definition(vec![
            item("MODIFIER_STATE_COUNT", 0),
            item("MODIFIER_STATE_INVALID", 255),
        ]);
        assert!(matches!(validate(&def), Err(GenError::TooFewItems(2))));
    }

    #[test]
    fn rejects_value_gap() {
        let def = definition(vec![
            item("MODIFIER_STATE_A", 0),
            item("MODIFIER_STATE_B", 1),
            item("MODIFIER_STATE_C", 3),
            item("MODIFIER_STATE_COUNT", 4),
            item("MODIFIER_STATE_INVALID", 255),
        ]);
        match validate(&def) {
            Err(GenError::SparseValues { index, value, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(value, 3);
            }
            other => panic!("expected SparseValues, got {:?}", other.err()),
        }
    }

    #[test]
    fn rejects_reordered_values() {
        let def = definition(vec![
            item("MODIFIER_STATE_A", 1),
            item("MODIFIER_STATE_B", 0),
            item("MODIFIER_STATE_COUNT", 2),
            item("MODIFIER_STATE_INVALID", 255),
        ]);
        assert!(matches!(
            validate(&def),
            Err(GenError::SparseValues { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_wrong_invalid_value() {
        let def = definition(vec![
            item("MODIFIER_STATE_A", 0),
            item("MODIFIER_STATE_COUNT", 1),
            item("MODIFIER_STATE_INVALID", 2),
        ]);
        assert!(matches!(validate(&def), Err(GenError::Sentinel(_))));
    }

    #[test]
    fn rejects_misnamed_sentinels() {
        let def = definition(vec![
            item("MODIFIER_STATE_A", 0),
            item("MODIFIER_STATE_TOTAL", 1),
            item("MODIFIER_STATE_INVALID", 255),
        ]);
        assert!(matches!(validate(&def), Err(GenError::Sentinel(_))));

        let def = definition(vec![
            item("MODIFIER_STATE_A", 0),
            item("MODIFIER_STATE_COUNT", 1),
            item("MODIFIER_STATE_NONE", 255),
        ]);
        assert!(matches!(validate(&def), Err(GenError::Sentinel(_))));
    }

    #[test]
    fn rejects_malformed_names() {
        let def = definition(vec![
            item("MODIFIER_STATE_A", 0),
            item("modifier_state_b", 1),
            item("MODIFIER_STATE_COUNT", 2),
            item("MODIFIER_STATE_INVALID", 255),
        ]);
        match validate(&def) {
            Err(GenError::InvalidName(msg)) => assert!(msg.contains("modifier_state_b")),
            other => panic!("expected InvalidName, got {:?}", other.err()),
        }
    }

    #[test]
    fn rejects_duplicate_raw_names() {
        let def = definition(vec![
            item("MODIFIER_STATE_A", 0),
            item("MODIFIER_STATE_A", 1),
            item("MODIFIER_STATE_COUNT", 2),
            item("MODIFIER_STATE_INVALID", 255),
        ]);
        assert!(matches!(
            validate(&def),
            Err(GenError::DuplicateName(name)) if name == "MODIFIER_STATE_A"
        ));
    }
}
