// src/extractors/text.rs

/// Removes every carriage return and line feed, then trims the ends.
/// Interior whitespace is left alone.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_line_breaks_and_ends() {
        assert_eq!(normalize("\r\n   Acme  Drilling \n"), "Acme  Drilling");
        assert_eq!(normalize("Main\r\nStreet"), "MainStreet");
        assert_eq!(normalize("\t City: \r"), "City:");
    }

    #[test]
    fn test_normalize_keeps_interior_order() {
        assert_eq!(normalize("P.O Box  12\t34"), "P.O Box  12\t34");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \r\n\r\n "), "");
    }
}
