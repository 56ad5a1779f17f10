//! Field-specific repair of common OCR digit/letter confusions.
//!
//! Normalization never fails: input of an unexpected shape is returned
//! unchanged, and repairing an already-correct value is a no-op, so every
//! function here is idempotent.

/// Repair OCR letter misreads in the digit zone of a 10-character PAN.
///
/// PAN shape is 5 letters, 4 digits, 1 letter; only positions 5-8 are
/// treated as digits. `O` becomes `0`, `I` and `L` become `1`. Everything
/// else, including the letter positions, is left untouched.
pub fn repair_pan_digits(raw: &str) -> String {
    if raw.chars().count() != 10 {
        return raw.to_string();
    }

    raw.chars()
        .enumerate()
        .map(|(i, ch)| {
            if (5..9).contains(&i) {
                match ch {
                    'O' => '0',
                    'I' | 'L' => '1',
                    other => other,
                }
            } else {
                ch
            }
        })
        .collect()
}

/// Force the first four positions of an 11-character IFSC into the letter
/// domain using the fixed digit-to-letter confusion table.
///
/// Position 4 is the literal `0` and positions 5-10 are an alphanumeric
/// branch code; both are left as-is.
pub fn repair_ifsc_prefix(raw: &str) -> String {
    if raw.chars().count() != 11 {
        return raw.to_string();
    }

    raw.chars()
        .enumerate()
        .map(|(i, ch)| {
            if i < 4 {
                match ch {
                    '8' => 'B',
                    '1' => 'I',
                    '0' => 'O',
                    '5' => 'S',
                    '3' => 'E',
                    '2' => 'Z',
                    '7' => 'T',
                    '4' => 'A',
                    '6' => 'G',
                    other => other,
                }
            } else {
                ch
            }
        })
        .collect()
}

/// Regroup a bare 12-digit Aadhaar run into the conventional 4-4-4 display
/// form. Anything that is not exactly 12 digits passes through unchanged.
pub fn group_aadhaar(raw: &str) -> String {
    if raw.len() != 12 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    format!("{} {} {}", &raw[0..4], &raw[4..8], &raw[8..12])
}

/// Reduce a captured mobile value to digits and masking characters.
///
/// Redacted statements print numbers like `98XXXX1234` or `98****1234`;
/// the masking characters are meaningful and kept. Separators between
/// multiple listed numbers (`/`, `,`) are dropped.
pub fn clean_mobile(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '0'..='9' | '*' => Some(c),
            'x' | 'X' => Some('X'),
            _ => None,
        })
        .collect()
}

/// Strip spaces, dashes and slashes from an identifier (customer id, CKYC,
/// account number cleanup). Masking asterisks survive.
pub fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '/')
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_repair_pan_digits() {
        assert_eq!(repair_pan_digits("ABCDEO2I4F"), "ABCDE0214F");
    }

    #[test]
    fn test_repair_pan_digit_zone_only() {
        // O in the letter zone stays; O in the digit zone becomes 0
        assert_eq!(repair_pan_digits("ABCDO1O34F"), "ABCDO1034F");
        assert_eq!(repair_pan_digits("ABCDE1LI4F"), "ABCDE1114F");
    }

    #[test]
    fn test_repair_pan_is_idempotent() {
        let once = repair_pan_digits("ABCDEO23IF");
        let twice = repair_pan_digits(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_repair_pan_wrong_length_passthrough() {
        assert_eq!(repair_pan_digits("ABCDE123"), "ABCDE123");
    }

    #[test]
    fn test_repair_ifsc_prefix() {
        assert_eq!(repair_ifsc_prefix("5B1N0001234"), "SBIN0001234");
        assert_eq!(repair_ifsc_prefix("8DFC0004321"), "BDFC0004321");
    }

    #[test]
    fn test_repair_ifsc_is_idempotent() {
        let once = repair_ifsc_prefix("1C1C0000042");
        assert_eq!(once, "ICIC0000042");
        assert_eq!(repair_ifsc_prefix(&once), once);
    }

    #[test]
    fn test_repair_ifsc_leaves_branch_code() {
        // digits after position 4 are legitimate branch code characters
        assert_eq!(repair_ifsc_prefix("SBIN0811234"), "SBIN0811234");
    }

    #[test]
    fn test_group_aadhaar() {
        assert_eq!(group_aadhaar("772323561747"), "7723 2356 1747");
        assert_eq!(group_aadhaar("7723 2356 1747"), "7723 2356 1747");
        assert_eq!(group_aadhaar("12345"), "12345");
    }

    #[test]
    fn test_clean_mobile() {
        assert_eq!(clean_mobile("98XXXX1234"), "98XXXX1234");
        assert_eq!(clean_mobile("9876543210/9123456789"), "98765432109123456789");
        assert_eq!(clean_mobile("98**xx12"), "98**XX12");
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("12-34/56 78"), "12345678");
        assert_eq!(strip_separators("AB12**34"), "AB12**34");
    }
}
