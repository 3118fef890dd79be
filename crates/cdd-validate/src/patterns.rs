//! Field format validators.

use std::sync::LazyLock;

use regex::Regex;

/// Element names: technology prefix (`g`/`e`), two-letter area code, digits,
/// optional trailing letter. `gCM00025Z`, `eBL00123Z`.
static NE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ge][A-Z]{2}\d+[A-Z]?$").expect("Invalid NE_Name regex"));

/// Dotted quad shape only; octet bounds are checked separately.
static IPV4_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("Invalid IPv4 regex"));

pub fn is_valid_ne_name(value: &str) -> bool {
    NE_NAME_REGEX.is_match(value)
}

/// Four dot-separated decimal octets, each in 0..=255.
///
/// Leading zeros are accepted (`010.0.0.1`); surrounding whitespace is not.
pub fn is_valid_ipv4(value: &str) -> bool {
    if !IPV4_REGEX.is_match(value) {
        return false;
    }
    value
        .split('.')
        .all(|octet| octet.parse::<u16>().is_ok_and(|n| n <= 255))
}

/// Decimal rendering used for mapping keys: whole numbers keep one
/// fractional digit (`20.0`), others use the shortest form (`1.4`).
///
/// Magnitudes from `1e16` up and below `1e-4` switch to exponent form with a
/// signed, two-digit exponent (`1e+16`, `1.5e-05`), the way config keys
/// written by the planning tools look.
pub fn float_key(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_key(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn exponent_key(value: f64) -> String {
    let rendered = format!("{value:e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return rendered;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ne_names() {
        assert!(is_valid_ne_name("gCM00025Z"));
        assert!(is_valid_ne_name("eBL00123Z"));
        assert!(is_valid_ne_name("eBL00123"));
        assert!(!is_valid_ne_name("XYZ123"));
        assert!(!is_valid_ne_name("gcm00025Z"));
        assert!(!is_valid_ne_name("gCM00025ZZ"));
        assert!(!is_valid_ne_name("gCM"));
    }

    #[test]
    fn ipv4_addresses() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("192.168.1"));
        assert!(!is_valid_ipv4("192.168.1.1.1"));
        assert!(!is_valid_ipv4("1234.1.1.1"));
        assert!(!is_valid_ipv4(" 192.168.1.1"));
        assert!(!is_valid_ipv4("a.b.c.d"));
    }

    #[test]
    fn float_keys() {
        assert_eq!(float_key(20.0), "20.0");
        assert_eq!(float_key(1.4), "1.4");
        assert_eq!(float_key(0.0), "0.0");
        assert_eq!(float_key(f64::NAN), "nan");
        assert_eq!(float_key(-0.0), "-0.0");
        assert_eq!(float_key(0.0001), "0.0001");
        assert_eq!(float_key(9_999_999_999_999_998.0), "9999999999999998.0");
    }

    #[test]
    fn float_keys_switch_to_exponent_form() {
        assert_eq!(float_key(1e16), "1e+16");
        assert_eq!(float_key(1.5e-5), "1.5e-05");
        assert_eq!(float_key(-2.5e20), "-2.5e+20");
        assert_eq!(float_key(1e100), "1e+100");
    }
}
