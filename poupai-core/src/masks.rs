//! pt-BR input masks and money formatting.
//!
//! Dates are typed as `dd/mm/aaaa`, amounts as digits where the last two are
//! cents (`123456` -> `1.234,56`).

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::time::parse_timestamp;

fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Progressive date mask: `1` -> `1`, `1602` -> `16/02`, `16022026` -> `16/02/2026`.
pub fn mask_date_br(input: &str) -> String {
    let d: String = digits(input).chars().take(8).collect();
    match d.len() {
        0..=2 => d,
        3..=4 => format!("{}/{}", &d[..2], &d[2..]),
        _ => format!("{}/{}/{}", &d[..2], &d[2..4], &d[4..]),
    }
}

/// Strict `dd/mm/yyyy` parse. Impossible dates (31/02) are rejected.
pub fn parse_date_br(input: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").ok()?;
    let caps = re.captures(input.trim())?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `dd/mm/yyyy` -> `yyyy-mm-dd`
pub fn date_br_to_iso(input: &str) -> Option<String> {
    parse_date_br(input).map(|d| d.format("%Y-%m-%d").to_string())
}

pub fn format_date_br(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// ISO date -> `dd/mm/yyyy`; unparseable input is returned as is.
pub fn iso_to_br(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(ts) => format_date_br(ts.date()),
        None => iso.to_string(),
    }
}

pub fn today_br(today: NaiveDate) -> String {
    format_date_br(today)
}

fn group_thousands(int_digits: &str) -> String {
    let mut out = String::with_capacity(int_digits.len() + int_digits.len() / 3);
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Currency input mask. Every digit typed shifts the cents left.
pub fn mask_currency_br(input: &str) -> String {
    let d = digits(input);
    if d.is_empty() {
        return String::new();
    }
    let trimmed = d.trim_start_matches('0');
    let padded = format!("{trimmed:0>3}");
    let (int_part, cents) = padded.split_at(padded.len() - 2);
    format!("{},{}", group_thousands(int_part), cents)
}

/// `1.234,56` -> `1234.56`. Empty or non-numeric input gives `None`.
pub fn parse_brl(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    let normalized = s.replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `1234.5` -> `1.234,50`
pub fn format_amount_br(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = (cents / 100).to_string();
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{},{:02}", group_thousands(&int_part), cents % 100)
}

/// `1234.5` -> `R$ 1.234,50`
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_amount_br(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_date_progressive() {
        assert_eq!(mask_date_br(""), "");
        assert_eq!(mask_date_br("1"), "1");
        assert_eq!(mask_date_br("16"), "16");
        assert_eq!(mask_date_br("160"), "16/0");
        assert_eq!(mask_date_br("1602"), "16/02");
        assert_eq!(mask_date_br("16/02/20"), "16/02/20");
        assert_eq!(mask_date_br("16022026999"), "16/02/2026");
    }

    #[test]
    fn test_parse_date_br() {
        assert_eq!(parse_date_br("16/02/2026"), NaiveDate::from_ymd_opt(2026, 2, 16));
        assert_eq!(parse_date_br("31/02/2026"), None);
        assert_eq!(parse_date_br("16/2/2026"), None);
        assert_eq!(parse_date_br("2026-02-16"), None);
        assert_eq!(date_br_to_iso("05/10/2026").as_deref(), Some("2026-10-05"));
    }

    #[test]
    fn test_iso_to_br() {
        assert_eq!(iso_to_br("2026-10-05"), "05/10/2026");
        assert_eq!(iso_to_br("2026-10-05T23:00:00"), "05/10/2026");
        assert_eq!(iso_to_br("sem data"), "sem data");
    }

    #[test]
    fn test_mask_currency() {
        assert_eq!(mask_currency_br(""), "");
        assert_eq!(mask_currency_br("abc"), "");
        assert_eq!(mask_currency_br("1"), "0,01");
        assert_eq!(mask_currency_br("000"), "0,00");
        assert_eq!(mask_currency_br("1250"), "12,50");
        assert_eq!(mask_currency_br("123456"), "1.234,56");
        assert_eq!(mask_currency_br("R$ 1.234.567,89"), "1.234.567,89");
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("1.234,56"), Some(1234.56));
        assert_eq!(parse_brl("12,5"), Some(12.5));
        assert_eq!(parse_brl("0,00"), Some(0.0));
        assert_eq!(parse_brl(""), None);
        assert_eq!(parse_brl("doze"), None);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(-52.3), "R$ -52,30");
        assert_eq!(format_amount_br(1_000_000.0), "1.000.000,00");
        assert_eq!(format_amount_br(999.999), "1.000,00");
    }
}
