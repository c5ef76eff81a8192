mod common;

use int_output::{Buffer, ErrorKind, WriteInt};
use rand::Rng;

use crate::common::sink;

#[test]
fn test_i32() {
    let test_cases: &[(&str, i32)] = &[
        ("0", 0),
        ("123456", 123456),
        ("-22334455", -22334455),
        ("2147483647", i32::MAX),
        ("-2147483648", i32::MIN),
    ];

    for &(expected, input) in test_cases {
        let mut buf = Buffer::new();
        assert_eq!(expected, buf.format_int(input));
        assert_eq!(expected, sink(|s| s.write_int(input)));
    }
}

#[test]
fn test_u32() {
    let test_cases: &[(&str, u32)] = &[
        ("0", 0),
        ("123456", 123456),
        ("2147483648", 2147483648),
        ("3456789012", 3456789012),
        ("4294967295", u32::MAX),
        // unsigned view of a negative bit pattern
        ("2309737967", 0x89ABCDEFu32),
        ("2309737967", -1985229329i32 as u32),
    ];

    for &(expected, input) in test_cases {
        let mut buf = Buffer::new();
        assert_eq!(expected, buf.format_int(input));
        assert_eq!(expected, sink(|s| s.write_int(input)));
    }
}

#[test]
fn test_i64() {
    let test_cases: &[(&str, i64)] = &[
        ("0", 0),
        ("123456789012345678", 123456789012345678),
        ("-2233445566778899", -2233445566778899),
        ("2147483647", i64::from(i32::MAX)),
        ("-2147483648", i64::from(i32::MIN)),
        ("9223372036854775807", i64::MAX),
        ("-9223372036854775808", i64::MIN),
    ];

    for &(expected, input) in test_cases {
        let mut buf = Buffer::new();
        assert_eq!(expected, buf.format_int(input));
        assert_eq!(expected, sink(|s| s.write_int(input)));
    }
}

#[test]
fn test_u64() {
    let test_cases: &[(&str, u64)] = &[
        ("0", 0),
        ("1234567890123456789", 1234567890123456789),
        // i64::MAX + 1, i.e. the sign bit set
        ("9223372036854775808", 9223372036854775808),
        ("12345678901234567890", 12345678901234567890),
        ("18446744073709551615", u64::MAX),
    ];

    for &(expected, input) in test_cases {
        let mut buf = Buffer::new();
        assert_eq!(expected, buf.format_int(input));
        assert_eq!(expected, sink(|s| s.write_int(input)));
    }
}

#[test]
fn test_positive() {
    let mut buf = Buffer::new();
    assert_eq!("0", buf.format_int_positive(0).unwrap());
    assert_eq!("123456", buf.format_int_positive(123456).unwrap());
    assert_eq!("2147483647", buf.format_int_positive(i32::MAX).unwrap());
    assert_eq!("9223372036854775807", buf.format_int_positive(i64::MAX).unwrap());

    // unsigned types satisfy the contract trivially
    assert_eq!("18446744073709551615", buf.format_int_positive(u64::MAX).unwrap());
}

#[test]
fn test_positive_rejects_negative() {
    let mut out = String::from("$");
    let err = out.write_int_positive(-1).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::IllegalValue { value: -1, .. }
    ));
    // nothing was appended
    assert_eq!(out, "$");

    let mut buf = Buffer::new();
    assert!(buf.format_int_positive(i32::MIN).is_err());
    assert!(buf.format_int_positive(i64::MIN).is_err());
}

#[test]
fn test_round_trip_random() {
    let mut rng = rand::thread_rng();
    let mut buf = Buffer::new();

    for _ in 0..10_000 {
        let n: i32 = rng.gen();
        assert_eq!(Ok(n), buf.format_int(n).parse());
    }
    for _ in 0..10_000 {
        let n: i64 = rng.gen();
        assert_eq!(Ok(n), buf.format_int(n).parse());
    }
    for _ in 0..10_000 {
        let n: u64 = rng.gen();
        assert_eq!(Ok(n), buf.format_int(n).parse());
    }
}
