/// Album codes are exactly six ASCII digits.
pub fn is_valid_code(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.len() == 6 && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Live input sanitizer: keep digits only, cap at six characters.
pub fn format_code_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(6).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("123456"));
        assert!(is_valid_code(" 123456 "));
        assert!(!is_valid_code("12345"));
        assert!(!is_valid_code("1234567"));
        assert!(!is_valid_code("12a456"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("12 456"));
    }

    #[test]
    fn test_format_code_input() {
        assert_eq!(format_code_input(""), "");
        assert_eq!(format_code_input("12-34-56"), "123456");
        assert_eq!(format_code_input("abc123"), "123");
        assert_eq!(format_code_input("123456789"), "123456");
    }
}
