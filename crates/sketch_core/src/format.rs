use crate::math::constrain;

/// Two-digit lower-case hex for a channel value, clamped to `[0, 255]`.
pub fn hex_str(v: f32) -> String {
    let byte = constrain(v.round(), 0.0, 255.0) as u8;
    format!("{byte:02x}")
}

/// Format an integer in `radix` (2..=36), lower-case digits.
///
/// Radix values outside that range fall back to base 10.
pub fn to_radix_string(value: i64, radix: u32) -> String {
    if !(2..=36).contains(&radix) || radix == 10 {
        return value.to_string();
    }
    let mut n = value.unsigned_abs();
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        let d = (n % radix as u64) as u32;
        digits.push(char::from_digit(d, radix).unwrap_or('0'));
        n /= radix as u64;
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Insert `sep` between groups of three digits of the integer part.
pub fn thousand_sep(value: f64, sep: &str) -> String {
    let s = value.to_string();
    let (int_part, frac_part) = match s.find('.') {
        Some(dot) => s.split_at(dot),
        None => (s.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(s.len() + digits.len() / 3 * sep.len());
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out.push_str(frac_part);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_str_pads_and_clamps() {
        assert_eq!(hex_str(0.0), "00");
        assert_eq!(hex_str(10.0), "0a");
        assert_eq!(hex_str(255.0), "ff");
        assert_eq!(hex_str(400.0), "ff");
        assert_eq!(hex_str(-3.0), "00");
    }

    #[test]
    fn radix_formatting() {
        assert_eq!(to_radix_string(255, 16), "ff");
        assert_eq!(to_radix_string(-5, 2), "-101");
        assert_eq!(to_radix_string(0, 8), "0");
        assert_eq!(to_radix_string(42, 1), "42");
    }

    #[test]
    fn thousand_sep_groups_integer_part_only() {
        assert_eq!(thousand_sep(1234567.0, ","), "1,234,567");
        assert_eq!(thousand_sep(1234.5678, " "), "1 234.5678");
        assert_eq!(thousand_sep(-9876543.0, "."), "-9.876.543");
        assert_eq!(thousand_sep(999.0, ","), "999");
    }
}
