// Display-name quality rules for snapshot submissions.
//
// The exporter falls back to the bare SteamID digits when it has no real
// display name for a player yet; such a submission must never replace a
// proper stored name.

/// True when the trimmed name is nothing but the decimal form of the id.
pub fn is_id_only_name(name: &str, user_id: i64) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed.chars().all(|c| c.is_ascii_digit())
        && trimmed == user_id.to_string()
}

/// The name worth storing from a submission, if any: trimmed, non-empty,
/// and not an id-only placeholder.
pub fn submitted_name_candidate(name: &str, user_id: i64) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || is_id_only_name(trimmed, user_id) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Name stored for a first-time player with no proper submitted name.
pub fn fallback_name(user_id: i64) -> String {
    user_id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_digits_are_not_a_proper_name() {
        assert!(is_id_only_name("76561198000000001", 76561198000000001));
        assert!(is_id_only_name("  76561198000000001  ", 76561198000000001));
    }

    #[test]
    fn digits_of_a_different_id_count_as_a_name() {
        // Odd, but the rule only rejects the player's own id string
        assert!(!is_id_only_name("76561198000000002", 76561198000000001));
        assert_eq!(
            submitted_name_candidate("76561198000000002", 76561198000000001),
            Some("76561198000000002".to_string())
        );
    }

    #[test]
    fn real_names_pass_through_trimmed() {
        assert_eq!(
            submitted_name_candidate("  Bushwookie ", 42),
            Some("Bushwookie".to_string())
        );
    }

    #[test]
    fn empty_and_placeholder_names_yield_no_candidate() {
        assert_eq!(submitted_name_candidate("", 42), None);
        assert_eq!(submitted_name_candidate("   ", 42), None);
        assert_eq!(submitted_name_candidate("42", 42), None);
    }

    #[test]
    fn fallback_is_the_decimal_id() {
        assert_eq!(fallback_name(76561198000000001), "76561198000000001");
    }
}
