//! Display helpers for Indian conventions: rupee amounts with lakh/crore
//! grouping, vehicle registration numbers, phone numbers and PIN codes.

use once_cell::sync::Lazy;
use regex::Regex;

/// `XX00XX0000`: state, RTO, series, number.
static VEHICLE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]{2})([0-9]{2})([A-Z]{1,2})([0-9]{1,4})$").unwrap()
});
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s-]").unwrap());
static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());
static MOBILE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:91)?[6-9][0-9]{9}$").unwrap());
static PIN_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").unwrap());

/// Hint shown in vehicle number inputs.
pub const VEHICLE_NUMBER_PLACEHOLDER: &str = "e.g., MH-12-AB-1234 or DL01CA9999";

/// Formats rupees with paise, e.g. `₹12,34,567.50`.
pub fn format_inr(amount: f64) -> String {
    format_rupees(amount, 2)
}

/// Formats rupees rounded to the nearest rupee, e.g. `₹12,34,568`.
pub fn format_inr_whole(amount: f64) -> String {
    format_rupees(amount, 0)
}

fn format_rupees(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return format!("₹{}", amount);
    }

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    // -0.001 rounds to zero and must not print as negative
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(fixed.len() + 8);
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&group_indian(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Groups digits as thousands, then lakhs and crores: `1234567` → `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn normalize_vehicle_number(vehicle_number: &str) -> String {
    SEPARATORS.replace_all(vehicle_number, "").to_uppercase()
}

/// Whether `vehicle_number` is a valid Indian registration number.
///
/// Spaces and hyphens are ignored, as is case.
pub fn validate_vehicle_number(vehicle_number: &str) -> bool {
    VEHICLE_NUMBER.is_match(&normalize_vehicle_number(vehicle_number))
}

/// Formats a registration number as `MH-12-AB-1234`.
///
/// Numbers that do not match the pattern come back uppercased and otherwise untouched.
pub fn format_vehicle_number(vehicle_number: &str) -> String {
    let cleaned = normalize_vehicle_number(vehicle_number);

    match VEHICLE_NUMBER.captures(&cleaned) {
        Some(caps) => format!("{}-{}-{}-{}", &caps[1], &caps[2], &caps[3], &caps[4]),
        None => vehicle_number.to_uppercase(),
    }
}

fn digits_only(input: &str) -> String {
    NON_DIGITS.replace_all(input, "").into_owned()
}

/// Formats a mobile number as `+91-XXXXX-XXXXX`.
///
/// Accepts ten digits, or twelve starting with the `91` country code.
/// Anything else comes back unchanged.
pub fn format_phone(phone: &str) -> String {
    let cleaned = digits_only(phone);

    let national = match cleaned.len() {
        10 => &cleaned[..],
        12 if cleaned.starts_with("91") => &cleaned[2..],
        _ => return phone.to_string(),
    };

    format!("+91-{}-{}", &national[..5], &national[5..])
}

/// Whether `phone` is a valid Indian mobile number.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned = digits_only(phone);
    matches!(cleaned.len(), 10 | 12) && MOBILE_NUMBER.is_match(&cleaned)
}

/// Formats a PIN code as `XXX XXX`.
pub fn format_pincode(pincode: &str) -> String {
    let cleaned = digits_only(pincode);
    if cleaned.len() == 6 {
        format!("{} {}", &cleaned[..3], &cleaned[3..])
    } else {
        pincode.to_string()
    }
}

pub fn validate_pincode(pincode: &str) -> bool {
    PIN_CODE.is_match(&digits_only(pincode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_use_lakh_and_crore_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(123456.0), "₹1,23,456.00");
        assert_eq!(format_inr(1234567.5), "₹12,34,567.50");
        assert_eq!(format_inr(123456789.0), "₹12,34,56,789.00");
        assert_eq!(format_inr(-2500.0), "-₹2,500.00");
        assert_eq!(format_inr(-0.001), "₹0.00");
    }

    #[test]
    fn whole_rupees_round() {
        assert_eq!(format_inr_whole(1234567.6), "₹12,34,568");
        assert_eq!(format_inr_whole(40.0), "₹40");
    }

    #[test]
    fn vehicle_numbers_are_normalized() {
        assert!(validate_vehicle_number("MH12AB1234"));
        assert!(validate_vehicle_number("ka-05-mh-1234"));
        assert!(validate_vehicle_number("DL 01 C 9"));
        assert!(!validate_vehicle_number("M12AB1234"));
        assert!(!validate_vehicle_number("MH12AB12345"));

        assert_eq!(format_vehicle_number("mh12ab1234"), "MH-12-AB-1234");
        assert_eq!(format_vehicle_number("DL 01 CA 9999"), "DL-01-CA-9999");
        assert_eq!(format_vehicle_number("abc 123"), "ABC 123");
    }

    #[test]
    fn phones_accept_optional_country_code() {
        assert_eq!(format_phone("9876543210"), "+91-98765-43210");
        assert_eq!(format_phone("+91 98765 43210"), "+91-98765-43210");
        assert_eq!(format_phone("12345"), "12345");

        assert!(validate_phone("9876543210"));
        assert!(validate_phone("+91-98765-43210"));
        assert!(!validate_phone("5876543210"));
        assert!(!validate_phone("919876543"));
    }

    #[test]
    fn pincodes() {
        assert_eq!(format_pincode("400070"), "400 070");
        assert_eq!(format_pincode("4000"), "4000");
        assert!(validate_pincode("400 070"));
        assert!(!validate_pincode("012345"));
    }
}
