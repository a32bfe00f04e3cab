use crate::domain::entities::grid::CanonicalKey;

/// Keeps only the ASCII digits of the trimmed value.
pub fn normalize_digits(raw: &str) -> String {
    raw.trim().chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// `None` when nothing significant is left, so the cell is not a value.
pub fn canonical_key(raw: &str) -> Option<CanonicalKey> {
    CanonicalKey::from_normalized(normalize_digits(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_characters() {
        assert_eq!(normalize_digits(" +1 (555) 123-4567 "), "15551234567");
        assert_eq!(normalize_digits("555.1234"), "5551234");
    }

    #[test]
    fn digits_only_input_is_unchanged() {
        let once = normalize_digits("0912345678");
        assert_eq!(normalize_digits(&once), once);
    }

    #[test]
    fn blank_or_textual_cells_are_not_values() {
        assert_eq!(canonical_key(""), None);
        assert_eq!(canonical_key("   "), None);
        assert_eq!(canonical_key("n/a"), None);
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(normalize_digits("０９１２"), "");
        assert_eq!(normalize_digits("電話 0912"), "0912");
    }
}
