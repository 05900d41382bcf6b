//! Overview Date field handling
//!
//! RFC 3977 leaves the overview Date field as whatever the article carried, so the
//! decoder runs a fixed cascade of layouts and keeps the raw text when none match.

use chrono::{Datelike, Timelike};
use nntp_engine::date::{ZoneStyle, layouts, match_layout, parse_date};

#[test]
fn test_rfc5322_full_form() {
    let date = parse_date("Mon, 02 Jan 2006 15:04:05 -0700").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2006, 1, 2));
    assert_eq!((date.hour(), date.minute(), date.second()), (15, 4, 5));
    assert_eq!(date.offset().local_minus_utc(), -7 * 3600);
}

#[test]
fn test_short_form_named_zone() {
    let date = parse_date("02 Jan 06 15:04 MST").unwrap();
    assert_eq!(date.year(), 2006);
    assert_eq!(date.offset().local_minus_utc(), -7 * 3600);
}

#[test]
fn test_not_a_date() {
    assert!(parse_date("not-a-date").is_none());
}

#[test]
fn test_catalogue_order_is_fixed() {
    let all = layouts();
    assert_eq!(all.len(), 48);

    // Weekday-less layouts come first, and within them unpadded days
    assert!(all[..24].iter().all(|l| !l.weekday));
    assert!(all[24..].iter().all(|l| l.weekday));
    assert!(all[..12].iter().all(|l| !l.zero_padded_day));

    // Innermost dimension cycles through the three zone styles
    assert_eq!(all[0].zone, ZoneStyle::Numeric);
    assert_eq!(all[1].zone, ZoneStyle::Named);
    assert_eq!(all[2].zone, ZoneStyle::NumericAndName);
}

#[test]
fn test_same_input_same_layout() {
    let input = "Tue, 15 Nov 1994 08:12:31 +0200";
    let (first, a) = match_layout(input).unwrap();
    let (second, b) = match_layout(input).unwrap();
    assert_eq!(first, second);
    assert_eq!(a, b);
    assert!(first.weekday && first.seconds && first.four_digit_year);
}

#[test]
fn test_common_usenet_variants() {
    let cases = [
        ("6 Oct 1998 04:38:40 -0500", -5 * 3600),
        ("Sat, 1 Jan 2000 00:00:00 GMT", 0),
        ("Wed, 31 Dec 1969 23:59 PST", -8 * 3600),
        ("Fri, 13 Feb 2009 23:31:30 +0100 (CET)", 3600),
        ("9 Sep 99 9:09 EDT", -4 * 3600),
    ];
    for (input, offset) in cases {
        let date = parse_date(input).unwrap_or_else(|| panic!("{input:?} should parse"));
        assert_eq!(date.offset().local_minus_utc(), offset, "{input:?}");
    }
}

#[test]
fn test_rejected_variants() {
    for input in [
        "2024-01-01 10:00:00",
        "Mon Jan  2 15:04:05 2006",
        "Mon, 02 Jan 2006",
        "Mon, 02 Jan 2006 15:04:05",
        "Mon, 02 Foo 2006 15:04:05 +0000",
        "Mon, 02 Jan 2006 15:04:05 +0000 trailing",
    ] {
        assert!(parse_date(input).is_none(), "{input:?} should not parse");
    }
}
