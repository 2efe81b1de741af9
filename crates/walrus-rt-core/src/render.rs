//! Output renderers for the print operations.
//!
//! Each renderer appends the exact bytes a Walrus program observes on
//! standard output. Three of the four operations emit a labelled line
//! (`Out: <value>\n`); character printing emits the single raw byte with no
//! label and no newline, because generated code composes characters into
//! unlabelled streams. That asymmetry is part of the runtime contract.
//!
//! Float rendering follows the C `%g` convention at the default precision
//! of 6: fixed notation while the decimal exponent lies in `[-4, 6)`,
//! scientific notation otherwise, trailing zeros stripped.

/// Label prepended to every line-oriented print operation.
pub const OUT_PREFIX: &[u8] = b"Out: ";

/// `%g` default significant digits.
const FLOAT_PRECISION: usize = 6;

/// Append `Out: <decimal>\n` for a signed integer.
pub fn render_int(value: i64, buf: &mut Vec<u8>) {
    buf.extend_from_slice(OUT_PREFIX);
    push_decimal(value, buf);
    buf.push(b'\n');
}

/// Append `Out: <g-format>\n` for a double.
pub fn render_float(value: f64, buf: &mut Vec<u8>) {
    buf.extend_from_slice(OUT_PREFIX);
    if value.is_nan() {
        buf.extend_from_slice(b"nan");
    } else if value.is_infinite() {
        if value < 0.0 {
            buf.push(b'-');
        }
        buf.extend_from_slice(b"inf");
    } else {
        // Sign rendered separately so negative zero keeps its sign, as %g
        // prints it.
        if value.is_sign_negative() {
            buf.push(b'-');
        }
        let body = format_general(value.abs());
        buf.extend_from_slice(body.as_bytes());
    }
    buf.push(b'\n');
}

/// Append exactly one byte: the character code truncated to `u8`.
///
/// No prefix, no newline. C integer-conversion semantics for out-of-range
/// codes (`printf("%c", x)` takes an `int` and truncates the same way).
pub fn render_char(code: i64, buf: &mut Vec<u8>) {
    buf.push(code as u8);
}

/// Append `Out: <bytes>\n` with the string bytes copied verbatim.
pub fn render_str(bytes: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(OUT_PREFIX);
    buf.extend_from_slice(bytes);
    buf.push(b'\n');
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Render `value` in decimal. Digits are produced right-aligned in a fixed
/// scratch buffer; 20 digits cover `i64::MIN`.
fn push_decimal(value: i64, buf: &mut Vec<u8>) {
    let negative = value < 0;
    let mut abs = (value as i128).unsigned_abs() as u64;

    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    loop {
        pos -= 1;
        digits[pos] = b'0' + (abs % 10) as u8;
        abs /= 10;
        if abs == 0 {
            break;
        }
    }

    if negative {
        buf.push(b'-');
    }
    buf.extend_from_slice(&digits[pos..]);
}

/// `%g` body for a finite non-negative value.
///
/// The fixed/scientific choice depends on the decimal exponent of the value
/// AFTER rounding to 6 significant digits: rounding can carry across a
/// power of ten (999999.5 rounds to 1e+06; 9.99999995e-5 rounds to 0.0001)
/// and the notation must follow the carried exponent. Rust's scientific
/// formatting performs that rounding and normalizes the carry into the
/// exponent, so both the exponent and the mantissa digits come from it.
fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }

    let sci = format!("{:.prec$e}", value, prec = FLOAT_PRECISION - 1);
    let (mantissa, exp_part) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp_part.parse().unwrap_or(0);

    if (-4..FLOAT_PRECISION as i32).contains(&exp) {
        // Fixed notation rounds at the same significant position as the
        // scientific form above, so it cannot carry past the chosen range.
        let frac_digits = (FLOAT_PRECISION as i32 - 1 - exp).max(0) as usize;
        let mut s = format!("{:.prec$}", value, prec = frac_digits);
        strip_trailing_zeros(&mut s);
        s
    } else {
        let mut m = mantissa.to_string();
        strip_trailing_zeros(&mut m);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{m}e{sign}{:02}", exp.unsigned_abs())
    }
}

/// Remove trailing zeros after the decimal point.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn int_bytes(v: i64) -> Vec<u8> {
        let mut buf = Vec::new();
        render_int(v, &mut buf);
        buf
    }

    fn float_bytes(v: f64) -> Vec<u8> {
        let mut buf = Vec::new();
        render_float(v, &mut buf);
        buf
    }

    #[test]
    fn test_render_int_basic() {
        assert_eq!(int_bytes(42), b"Out: 42\n");
        assert_eq!(int_bytes(0), b"Out: 0\n");
        assert_eq!(int_bytes(-123), b"Out: -123\n");
    }

    #[test]
    fn test_render_int_extremes() {
        assert_eq!(int_bytes(i64::MAX), b"Out: 9223372036854775807\n");
        assert_eq!(int_bytes(i64::MIN), b"Out: -9223372036854775808\n");
    }

    #[test]
    fn test_render_float_whole_value_drops_point() {
        assert_eq!(float_bytes(3.0), b"Out: 3\n");
        assert_eq!(float_bytes(100.0), b"Out: 100\n");
        assert_eq!(float_bytes(0.0), b"Out: 0\n");
    }

    #[test]
    fn test_render_float_fractional() {
        assert_eq!(float_bytes(0.1), b"Out: 0.1\n");
        assert_eq!(float_bytes(2.5), b"Out: 2.5\n");
        assert_eq!(float_bytes(-2.5), b"Out: -2.5\n");
        assert_eq!(float_bytes(0.0001), b"Out: 0.0001\n");
    }

    #[test]
    fn test_render_float_six_significant_digits() {
        assert_eq!(float_bytes(core::f64::consts::PI), b"Out: 3.14159\n");
        assert_eq!(float_bytes(123456.0), b"Out: 123456\n");
    }

    #[test]
    fn test_render_float_switches_to_exponential() {
        assert_eq!(float_bytes(1e10), b"Out: 1e+10\n");
        assert_eq!(float_bytes(1234567.0), b"Out: 1.23457e+06\n");
        assert_eq!(float_bytes(1e-5), b"Out: 1e-05\n");
        assert_eq!(float_bytes(-1e10), b"Out: -1e+10\n");
    }

    #[test]
    fn test_render_float_rounding_carry_across_notation() {
        // Rounding to 6 significant digits carries across a power of ten;
        // the notation must follow the carried exponent, as %g does.
        assert_eq!(float_bytes(999999.5), b"Out: 1e+06\n");
        assert_eq!(float_bytes(0.000099999999999), b"Out: 0.0001\n");
    }

    #[test]
    fn test_render_float_non_finite() {
        assert_eq!(float_bytes(f64::NAN), b"Out: nan\n");
        assert_eq!(float_bytes(f64::INFINITY), b"Out: inf\n");
        assert_eq!(float_bytes(f64::NEG_INFINITY), b"Out: -inf\n");
    }

    #[test]
    fn test_render_float_negative_zero_keeps_sign() {
        assert_eq!(float_bytes(-0.0), b"Out: -0\n");
    }

    #[test]
    fn test_render_char_is_unlabelled() {
        let mut buf = Vec::new();
        render_char(65, &mut buf);
        assert_eq!(buf, b"A");
    }

    #[test]
    fn test_render_char_truncates_to_byte() {
        let mut buf = Vec::new();
        render_char(0x141, &mut buf); // 321 -> 65
        assert_eq!(buf, b"A");
        buf.clear();
        render_char(10, &mut buf);
        assert_eq!(buf, b"\n");
    }

    #[test]
    fn test_render_str_verbatim() {
        let mut buf = Vec::new();
        render_str(b"hi", &mut buf);
        assert_eq!(buf, b"Out: hi\n");
    }

    #[test]
    fn test_render_str_empty() {
        let mut buf = Vec::new();
        render_str(b"", &mut buf);
        assert_eq!(buf, b"Out: \n");
    }

    #[test]
    fn test_render_str_no_escaping() {
        let mut buf = Vec::new();
        render_str(b"a\tb\"c", &mut buf);
        assert_eq!(buf, b"Out: a\tb\"c\n");
    }

    #[test]
    fn test_renderers_are_stateless() {
        let mut buf = Vec::new();
        render_int(7, &mut buf);
        render_int(7, &mut buf);
        assert_eq!(buf, b"Out: 7\nOut: 7\n");
    }
}
