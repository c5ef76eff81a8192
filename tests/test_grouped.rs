mod common;

use int_output::{Buffer, WriteInt};

use crate::common::sink;

#[test]
fn test_i32_grouped() {
    let test_cases: &[(&str, i32)] = &[
        ("0", 0),
        ("1", 1),
        ("123", 123),
        ("1,234", 1234),
        ("12,345", 12345),
        ("123,456", 123456),
        ("1,234,567", 1234567),
        ("12,345,678", 12345678),
        ("123,456,789", 123456789),
        ("1,234,567,890", 1234567890),
        ("2,147,483,647", i32::MAX),
        ("-2,147,483,648", i32::MIN),
    ];

    for &(expected, input) in test_cases {
        let mut buf = Buffer::new();
        assert_eq!(expected, buf.format_int_grouped(input, ','));
        assert_eq!(expected, sink(|s| s.write_int_grouped(input, ',')));
    }
}

#[test]
fn test_i64_grouped() {
    let test_cases: &[(&str, i64)] = &[
        ("0", 0),
        ("1", 1),
        ("123", 123),
        ("1,234", 1234),
        ("12,345,678,901", 12345678901),
        ("123,456,789,012", 123456789012),
        ("1,234,567,890,123", 1234567890123),
        ("12,345,678,901,234", 12345678901234),
        ("123,456,789,012,345", 123456789012345),
        ("1,234,567,890,123,456", 1234567890123456),
        ("12,345,678,901,234,567", 12345678901234567),
        ("123,456,789,012,345,678", 123456789012345678),
        ("1,234,567,890,123,456,789", 1234567890123456789),
        ("9,223,372,036,854,775,807", i64::MAX),
        ("-9,223,372,036,854,775,808", i64::MIN),
    ];

    for &(expected, input) in test_cases {
        let mut buf = Buffer::new();
        assert_eq!(expected, buf.format_int_grouped(input, ','));
        assert_eq!(expected, sink(|s| s.write_int_grouped(input, ',')));
    }
}

#[test]
fn test_u64_grouped() {
    let mut buf = Buffer::new();
    assert_eq!(
        "18,446,744,073,709,551,615",
        buf.format_int_grouped(u64::MAX, ',')
    );
}

#[test]
fn test_separator_choice() {
    let mut buf = Buffer::new();
    assert_eq!("1.234.567", buf.format_int_grouped(1234567, '.'));
    assert_eq!("1 234 567", buf.format_int_grouped(1234567, ' '));
}

// Separators may be any char; a 4-byte one against the widest values is the
// exact capacity of the scratch buffer.
#[test]
fn test_multi_byte_separator() {
    let mut buf = Buffer::new();
    assert_eq!("1𠜱234𠜱567", buf.format_int_grouped(1234567, '𠜱'));
    assert_eq!(
        "-9𠜱223𠜱372𠜱036𠜱854𠜱775𠜱808",
        buf.format_int_grouped(i64::MIN, '𠜱')
    );
    assert_eq!(
        "18𠜱446𠜱744𠜱073𠜱709𠜱551𠜱615",
        buf.format_int_grouped(u64::MAX, '𠜱')
    );
}

#[test]
fn test_group_sizes() {
    // every group of digits between separators is exactly 3 wide, except
    // possibly the leftmost
    for &n in &[1u64, 12, 123, 1234, 12345678901234567890] {
        let mut buf = Buffer::new();
        let formatted = buf.format_int_grouped(n, ',');
        let groups: Vec<&str> = formatted.split(',').collect();
        assert!((1..=3).contains(&groups[0].len()));
        for group in &groups[1..] {
            assert_eq!(3, group.len());
        }
    }
}

#[test]
fn test_money_composition() {
    fn format_money(dollars: u64, cents: i32) -> String {
        let mut out = String::with_capacity(32);
        out.push('$');
        out.write_int_grouped(dollars, ',').unwrap();
        out.push('.');
        out.write_2_digits(cents).unwrap();
        out
    }

    assert_eq!("$1.00", format_money(1, 0));
    assert_eq!("$1,234.56", format_money(1234, 56));
}
