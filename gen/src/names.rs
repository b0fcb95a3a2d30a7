/// Shared prefix of every raw flag name, dropped during normalization.
pub const FLAG_PREFIX: &str = "MODIFIER_STATE_";

/// Converts a raw `MODIFIER_STATE_<UPPER_SNAKE_CASE>` name into the PascalCase
/// member name used in the emitted enums. Splits the suffix on underscores and
/// uppercases the first letter of each token, lowercasing the rest.
///
/// Total over all strings; names without the prefix are cased as-is.
pub fn normalize_flag_name(raw: &str) -> String {
    let suffix = raw.strip_prefix(FLAG_PREFIX).unwrap_or(raw);
    suffix
        .split('_')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        })
        .collect()
}
