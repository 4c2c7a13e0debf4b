//! Lowercase roman numerals for child ordinals

const NUMERALS: &[(usize, &str)] = &[
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// `4` → `"iv"`. Zero gives an empty string.
pub fn to_roman(mut n: usize) -> String {
    let mut out = String::new();
    for &(value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman() {
        let numerals: Vec<_> = [1, 2, 4, 9, 14, 19, 20, 40].into_iter().map(to_roman).collect();
        assert_eq!(numerals, vec!["i", "ii", "iv", "ix", "xiv", "xix", "xx", "xl"]);
        assert_eq!(to_roman(0), "");
    }
}
