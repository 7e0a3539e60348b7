//! Naming convention engine for officer numbers and rendered-image objects.
//!
//! Both names are deterministic given their inputs so the API layer never
//! has to persist a separate counter.

/// Generate an officer number from the RMO code and a 1-based sequence.
///
/// Convention: `OFF{rmo digits}{sequence}` -- the non-digit characters of
/// the RMO code are stripped.
///
/// # Examples
///
/// ```
/// use nameplate_core::naming::officer_number;
///
/// assert_eq!(officer_number("RMO1", 1), "OFF11");
/// assert_eq!(officer_number("RMO1", 12), "OFF112");
/// assert_eq!(officer_number("RMO27", 3), "OFF273");
/// ```
pub fn officer_number(rmo: &str, sequence: i64) -> String {
    let digits: String = rmo.chars().filter(char::is_ascii_digit).collect();
    format!("OFF{digits}{sequence}")
}

/// Generate the object name for a rendered nameplate image.
///
/// Convention: `nameplate-{identifier}-{timestamp_millis}.png`. The
/// identifier is sanitized to `[A-Za-z0-9_]` so arbitrary house or owner
/// names cannot smuggle path separators into the object store.
pub fn nameplate_object_name(identifier: &str, timestamp_millis: i64) -> String {
    let sanitized: String = identifier
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("nameplate-{sanitized}-{timestamp_millis}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_officer_of_rmo1() {
        assert_eq!(officer_number("RMO1", 1), "OFF11");
    }

    #[test]
    fn multi_digit_sequence() {
        assert_eq!(officer_number("RMO1", 10), "OFF110");
    }

    #[test]
    fn multi_digit_rmo() {
        assert_eq!(officer_number("RMO42", 7), "OFF427");
    }

    #[test]
    fn rmo_without_digits() {
        // Degenerate codes still produce a usable number.
        assert_eq!(officer_number("HQ", 5), "OFF5");
    }

    #[test]
    fn object_name_plain() {
        assert_eq!(
            nameplate_object_name("Rose_Villa", 1700000000000),
            "nameplate-Rose_Villa-1700000000000.png"
        );
    }

    #[test]
    fn object_name_sanitizes_specials() {
        assert_eq!(
            nameplate_object_name("Rose Villa/2", 1),
            "nameplate-Rose_Villa_2-1.png"
        );
    }
}
