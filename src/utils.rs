//! Helper functions for presentation callers

/// Indonesian month names in calendar order
const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// English month names in calendar order
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Resolve an Indonesian or English month name to its number (1-12),
/// case-insensitively. Returns `None` for anything else.
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.trim();
    for months in [&MONTHS_ID, &MONTHS_EN] {
        if let Some(idx) = months.iter().position(|m| m.eq_ignore_ascii_case(name)) {
            return Some(idx as u32 + 1);
        }
    }
    None
}

/// The Indonesian name for a month number (1-12)
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS_ID.get(month.checked_sub(1)? as usize).copied()
}
