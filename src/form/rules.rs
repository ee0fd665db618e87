use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use super::{Field, FormValues, ValidationResult};

/// How far ahead a trip may be booked, in days.
const BOOKING_WINDOW_DAYS: i64 = 30;

/// Minimum lead time for same-day pickups, in minutes.
const SAME_DAY_LEAD_MINUTES: i64 = 60;

/// One validation predicate with its user-facing message. Predicates get the
/// whole form plus the current wall-clock instant so cross-field rules stay
/// pure functions.
pub struct Rule {
    pub check: fn(&str, &FormValues, NaiveDateTime) -> bool,
    pub message: &'static str,
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // À-ỹ covers the accented letters used in Vietnamese names.
    RE.get_or_init(|| Regex::new(r"^[a-zA-ZÀ-ỹ\s]+$").expect("valid regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0|\+84)(3|5|7|8|9)[0-9]{8}$").expect("valid regex"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub(crate) fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

fn present(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    !value.is_empty()
}

fn at_least_two_chars(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    value.chars().count() >= 2
}

fn at_most_fifty_chars(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    value.chars().count() <= 50
}

fn letters_only(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    name_re().is_match(value)
}

fn mobile_number(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    phone_re().is_match(value)
}

fn email_address(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    email_re().is_match(value)
}

fn at_least_five_chars(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    value.chars().count() >= 5
}

// Date must fall inside [today, today + 30 days], comparing dates only.
fn within_booking_window(value: &str, _: &FormValues, now: NaiveDateTime) -> bool {
    let Some(date) = parse_date(value) else {
        return false;
    };
    let today = now.date();
    date >= today && date <= today + Duration::days(BOOKING_WINDOW_DAYS)
}

// Same-day pickups need more than an hour of lead time; any other pickup
// date accepts any time. An unparseable date defers to the date rule.
fn enough_lead_time(value: &str, values: &FormValues, now: NaiveDateTime) -> bool {
    match parse_date(&values.date) {
        Some(date) if date == now.date() => match parse_time(value) {
            Some(time) => date.and_time(time) > now + Duration::minutes(SAME_DAY_LEAD_MINUTES),
            None => false,
        },
        _ => true,
    }
}

fn whole_passenger_count(value: &str, _: &FormValues, _: NaiveDateTime) -> bool {
    value.parse::<u32>().is_ok_and(|n| (1..=16).contains(&n))
}

/// The declarative rule table. Rules run in order; the first failure wins.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Name => &[
            Rule { check: present, message: "Vui lòng nhập họ và tên" },
            Rule { check: at_least_two_chars, message: "Tên quá ngắn" },
            Rule { check: at_most_fifty_chars, message: "Tên không quá 50 ký tự" },
            Rule { check: letters_only, message: "Tên chỉ chứa chữ cái" },
        ],
        Field::Phone => &[
            Rule { check: present, message: "Vui lòng nhập số điện thoại" },
            Rule { check: mobile_number, message: "Số điện thoại không hợp lệ" },
        ],
        Field::Email => &[
            Rule { check: present, message: "Vui lòng nhập email" },
            Rule { check: email_address, message: "Email không hợp lệ" },
        ],
        Field::Pickup => &[
            Rule { check: present, message: "Vui lòng nhập điểm đón" },
            Rule { check: at_least_five_chars, message: "Địa chỉ quá ngắn" },
        ],
        Field::Destination => &[
            Rule { check: present, message: "Vui lòng nhập điểm đến" },
            Rule { check: at_least_five_chars, message: "Địa chỉ quá ngắn" },
        ],
        Field::Date => &[
            Rule { check: present, message: "Vui lòng chọn ngày" },
            Rule { check: within_booking_window, message: "Ngày không hợp lệ" },
        ],
        Field::Time => &[
            Rule { check: present, message: "Vui lòng chọn giờ" },
            Rule { check: enough_lead_time, message: "Phải trước 1 tiếng" },
        ],
        Field::Passengers => &[
            Rule { check: present, message: "Vui lòng nhập số khách" },
            Rule { check: whole_passenger_count, message: "Số khách 1-16" },
        ],
        Field::Notes => &[],
    }
}

/// Runs one field through its rule list.
pub fn validate_field(field: Field, values: &FormValues, now: NaiveDateTime) -> ValidationResult {
    let value = values.get(field);
    for rule in rules_for(field) {
        if !(rule.check)(value, values, now) {
            return ValidationResult::Invalid(rule.message);
        }
    }
    ValidationResult::Valid
}

/// Validates every field, returning the message for each failing one.
pub fn validate_form(values: &FormValues, now: NaiveDateTime) -> BTreeMap<Field, &'static str> {
    let mut errors = BTreeMap::new();
    for field in Field::ALL {
        if let ValidationResult::Invalid(message) = validate_field(field, values, now) {
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixed clock: mid-morning, well clear of midnight edge cases.
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn valid_values() -> FormValues {
        FormValues {
            name: "Nguyễn Văn A".to_string(),
            phone: "0912345678".to_string(),
            email: "a@example.com".to_string(),
            pickup: "12 Lý Thường Kiệt, Hà Nội".to_string(),
            destination: "Sân bay Nội Bài".to_string(),
            date: "2026-03-20".to_string(),
            time: "09:00".to_string(),
            passengers: "2".to_string(),
            notes: String::new(),
        }
    }

    fn check(field: Field, values: &FormValues) -> ValidationResult {
        validate_field(field, values, now())
    }

    fn with(field: Field, value: &str) -> FormValues {
        let mut values = valid_values();
        values.set(field, value.to_string());
        values
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_form(&valid_values(), now()).is_empty());
    }

    // ── Name ──

    #[test]
    fn test_name_accepts_vietnamese_diacritics() {
        for name in ["Nguyễn Văn A", "Trần Thị Ngọc Ánh", "Đỗ Hữu Phước", "Le An"] {
            assert!(check(Field::Name, &with(Field::Name, name)).is_valid(), "{name}");
        }
    }

    #[test]
    fn test_name_required() {
        assert_eq!(
            check(Field::Name, &with(Field::Name, "")),
            ValidationResult::Invalid("Vui lòng nhập họ và tên")
        );
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(
            check(Field::Name, &with(Field::Name, "A")),
            ValidationResult::Invalid("Tên quá ngắn")
        );
    }

    #[test]
    fn test_name_too_long() {
        let long = "Nguyễn ".repeat(10);
        assert_eq!(long.chars().count(), 70);
        assert_eq!(
            check(Field::Name, &with(Field::Name, &long)),
            ValidationResult::Invalid("Tên không quá 50 ký tự")
        );
    }

    #[test]
    fn test_name_fifty_chars_is_accepted() {
        let name = "Trần Ngọc ".repeat(5);
        assert_eq!(name.chars().count(), 50);
        assert!(check(Field::Name, &with(Field::Name, &name)).is_valid());
    }

    #[test]
    fn test_name_rejects_digits_and_symbols() {
        for name in ["Nguyễn 9", "An@Bình", "Văn_A", "A.B"] {
            assert_eq!(
                check(Field::Name, &with(Field::Name, name)),
                ValidationResult::Invalid("Tên chỉ chứa chữ cái"),
                "{name}"
            );
        }
    }

    // ── Phone ──

    #[test]
    fn test_phone_accepts_valid_prefixes() {
        for phone in [
            "0312345678",
            "0512345678",
            "0712345678",
            "0812345678",
            "0912345678",
            "+84912345678",
            "+84387654321",
        ] {
            assert!(check(Field::Phone, &with(Field::Phone, phone)).is_valid(), "{phone}");
        }
    }

    #[test]
    fn test_phone_rejects_wrong_prefix() {
        for phone in ["0112345678", "0212345678", "0412345678", "0612345678", "1912345678"] {
            assert_eq!(
                check(Field::Phone, &with(Field::Phone, phone)),
                ValidationResult::Invalid("Số điện thoại không hợp lệ"),
                "{phone}"
            );
        }
    }

    #[test]
    fn test_phone_rejects_wrong_digit_count() {
        // Seven and nine trailing digits around the required eight.
        for phone in ["091234567", "09123456789", "+8491234567", "0912 345 678"] {
            assert_eq!(
                check(Field::Phone, &with(Field::Phone, phone)),
                ValidationResult::Invalid("Số điện thoại không hợp lệ"),
                "{phone}"
            );
        }
    }

    #[test]
    fn test_phone_required() {
        assert_eq!(
            check(Field::Phone, &with(Field::Phone, "")),
            ValidationResult::Invalid("Vui lòng nhập số điện thoại")
        );
    }

    // ── Email ──

    #[test]
    fn test_email_basic_shape() {
        assert!(check(Field::Email, &with(Field::Email, "a@b.co")).is_valid());
        for email in ["", "a@b", "a b@c.com", "a@b c.com", "@b.com", "a@.com"] {
            assert!(!check(Field::Email, &with(Field::Email, email)).is_valid(), "{email}");
        }
    }

    // ── Pickup / destination ──

    #[test]
    fn test_addresses_need_five_chars() {
        assert_eq!(
            check(Field::Pickup, &with(Field::Pickup, "Q1")),
            ValidationResult::Invalid("Địa chỉ quá ngắn")
        );
        assert_eq!(
            check(Field::Destination, &with(Field::Destination, "Nhà")),
            ValidationResult::Invalid("Địa chỉ quá ngắn")
        );
        assert!(check(Field::Pickup, &with(Field::Pickup, "Cầu Giấy")).is_valid());
    }

    #[test]
    fn test_address_required_messages_differ() {
        assert_eq!(
            check(Field::Pickup, &with(Field::Pickup, "")),
            ValidationResult::Invalid("Vui lòng nhập điểm đón")
        );
        assert_eq!(
            check(Field::Destination, &with(Field::Destination, "")),
            ValidationResult::Invalid("Vui lòng nhập điểm đến")
        );
    }

    // ── Date ──

    #[test]
    fn test_date_today_is_accepted() {
        let mut values = with(Field::Date, "2026-03-16");
        // Keep the time rule satisfied for a same-day pickup.
        values.time = "18:00".to_string();
        assert!(check(Field::Date, &values).is_valid());
    }

    #[test]
    fn test_date_window_boundaries() {
        // now() is 2026-03-16, so the window closes on 2026-04-15.
        assert!(check(Field::Date, &with(Field::Date, "2026-04-15")).is_valid());
        assert_eq!(
            check(Field::Date, &with(Field::Date, "2026-04-16")),
            ValidationResult::Invalid("Ngày không hợp lệ")
        );
    }

    #[test]
    fn test_date_in_past_rejected() {
        assert_eq!(
            check(Field::Date, &with(Field::Date, "2026-03-15")),
            ValidationResult::Invalid("Ngày không hợp lệ")
        );
    }

    #[test]
    fn test_date_unparseable_rejected() {
        for date in ["tomorrow", "2026-13-01", "16/03/2026"] {
            assert_eq!(
                check(Field::Date, &with(Field::Date, date)),
                ValidationResult::Invalid("Ngày không hợp lệ"),
                "{date}"
            );
        }
    }

    #[test]
    fn test_date_required() {
        assert_eq!(
            check(Field::Date, &with(Field::Date, "")),
            ValidationResult::Invalid("Vui lòng chọn ngày")
        );
    }

    // ── Time (cross-field with date) ──

    fn same_day(time: &str) -> FormValues {
        let mut values = valid_values();
        values.date = "2026-03-16".to_string();
        values.time = time.to_string();
        values
    }

    #[test]
    fn test_same_day_thirty_minutes_ahead_rejected() {
        assert_eq!(
            check(Field::Time, &same_day("10:30")),
            ValidationResult::Invalid("Phải trước 1 tiếng")
        );
    }

    #[test]
    fn test_same_day_ninety_minutes_ahead_accepted() {
        assert!(check(Field::Time, &same_day("11:30")).is_valid());
    }

    #[test]
    fn test_same_day_exactly_one_hour_rejected() {
        // The lead requirement is strictly more than 60 minutes.
        assert_eq!(
            check(Field::Time, &same_day("11:00")),
            ValidationResult::Invalid("Phải trước 1 tiếng")
        );
    }

    #[test]
    fn test_future_date_accepts_any_time() {
        let mut values = valid_values();
        values.date = "2026-03-17".to_string();
        values.time = "00:05".to_string();
        assert!(check(Field::Time, &values).is_valid());
    }

    #[test]
    fn test_time_rule_defers_when_date_missing() {
        let mut values = valid_values();
        values.date = String::new();
        values.time = "09:00".to_string();
        // The date rule reports the missing date; the time itself passes.
        assert!(check(Field::Time, &values).is_valid());
        assert!(!check(Field::Date, &values).is_valid());
    }

    #[test]
    fn test_time_required() {
        assert_eq!(
            check(Field::Time, &with(Field::Time, "")),
            ValidationResult::Invalid("Vui lòng chọn giờ")
        );
    }

    // ── Passengers ──

    #[test]
    fn test_passenger_bounds() {
        assert!(check(Field::Passengers, &with(Field::Passengers, "1")).is_valid());
        assert!(check(Field::Passengers, &with(Field::Passengers, "16")).is_valid());
        for count in ["0", "17", "-1", "2.5", "nhiều"] {
            assert_eq!(
                check(Field::Passengers, &with(Field::Passengers, count)),
                ValidationResult::Invalid("Số khách 1-16"),
                "{count}"
            );
        }
    }

    #[test]
    fn test_passengers_required() {
        assert_eq!(
            check(Field::Passengers, &with(Field::Passengers, "")),
            ValidationResult::Invalid("Vui lòng nhập số khách")
        );
    }

    // ── Notes ──

    #[test]
    fn test_notes_always_valid() {
        assert!(check(Field::Notes, &with(Field::Notes, "")).is_valid());
        let long = "cần ghế trẻ em ".repeat(500);
        assert!(check(Field::Notes, &with(Field::Notes, &long)).is_valid());
    }
}
