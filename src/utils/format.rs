// file: src/utils/format.rs
// description: metric card value formatting

/// `1234567` -> `1,234,567`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Loss in millions, two decimals.
pub fn millions(value: f64) -> String {
    format!("${:.2}M", value)
}

pub fn hours(value: f64) -> String {
    format!("{:.1}h", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_units() {
        assert_eq!(millions(4.0), "$4.00M");
        assert_eq!(millions(12.3456), "$12.35M");
        assert_eq!(hours(16.0), "16.0h");
        assert_eq!(hours(0.0), "0.0h");
    }
}
