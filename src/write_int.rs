use core::fmt;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::integer::Integer;

/// Extension methods that append integer text onto any [`fmt::Write`] sink:
/// `String`, `fmt::Formatter`, a fixed-capacity string type, and so on.
///
/// Every method formats into a stack scratch buffer first and then appends
/// with a single `write_str`, so a failed validation leaves the sink
/// untouched and no heap allocation ever happens.
///
/// # Example
///
/// ```
/// use int_output::WriteInt;
///
/// let mut out = String::new();
/// out.write_int(1234567890)?;
/// assert_eq!(out, "1234567890");
/// # Ok::<(), int_output::Error>(())
/// ```
pub trait WriteInt: fmt::Write {
    /// Appends `value` as minimal decimal digits, with a leading `-` for
    /// negative values. Zero appends `"0"`.
    ///
    /// ```
    /// use int_output::WriteInt;
    /// use core::fmt::Write;
    ///
    /// let mut out = String::new();
    /// out.write_int(i32::MIN)?;
    /// out.write_char(' ')?;
    /// out.write_int(0x89ABCDEFu32)?; // unsigned view of a bit pattern
    /// assert_eq!(out, "-2147483648 2309737967");
    /// # Ok::<(), int_output::Error>(())
    /// ```
    fn write_int<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_int(value)).map_err(Error::from)
    }

    /// Appends `value` as decimal digits, rejecting negative input with
    /// [`ErrorKind::IllegalValue`](crate::ErrorKind::IllegalValue) before
    /// anything reaches the sink.
    fn write_int_positive<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        let formatted = buf.format_int_positive(value)?;
        self.write_str(formatted).map_err(Error::from)
    }

    /// Appends `value` in decimal with `separator` placed `scale` digit
    /// positions from the right, zero-padded so that a digit appears on
    /// each side of the separator.
    ///
    /// Scale zero and negative scales append plain decimal digits; scales
    /// above [`MAX_SCALE`](crate::MAX_SCALE) fail with
    /// [`ErrorKind::Capacity`](crate::ErrorKind::Capacity).
    ///
    /// ```
    /// use int_output::WriteInt;
    ///
    /// let mut out = String::new();
    /// out.write_int_scaled(123456, 8, '.')?;
    /// assert_eq!(out, "0.00123456");
    /// # Ok::<(), int_output::Error>(())
    /// ```
    fn write_int_scaled<I: Integer>(
        &mut self,
        value: I,
        scale: i32,
        separator: char,
    ) -> Result<(), Error> {
        let mut buf = Buffer::new();
        let formatted = buf.format_int_scaled(value, scale, separator)?;
        self.write_str(formatted).map_err(Error::from)
    }

    /// Appends `value` in decimal with `separator` between each group of
    /// three digits, counted from the right.
    ///
    /// ```
    /// use int_output::WriteInt;
    ///
    /// let mut out = String::new();
    /// out.write_int_grouped(1234567890, ',')?;
    /// assert_eq!(out, "1,234,567,890");
    /// # Ok::<(), int_output::Error>(())
    /// ```
    fn write_int_grouped<I: Integer>(&mut self, value: I, separator: char) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_int_grouped(value, separator))
            .map_err(Error::from)
    }

    /// Appends the bit pattern of `value` as minimal upper-case hex digits.
    /// No sign is ever emitted.
    fn write_hex<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex(value)).map_err(Error::from)
    }

    /// Appends the bit pattern of `value` as minimal lower-case hex digits.
    fn write_hex_lower<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_lower(value)).map_err(Error::from)
    }

    /// Appends `value` as one decimal digit; values outside `0..10` are
    /// rejected.
    fn write_digit(&mut self, value: i32) -> Result<(), Error> {
        let mut buf = Buffer::new();
        let formatted = buf.format_digit(value)?;
        self.write_str(formatted).map_err(Error::from)
    }

    /// Appends the least significant decimal digit of `value`.
    fn write_digit_safe(&mut self, value: i32) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_digit_safe(value)).map_err(Error::from)
    }

    /// Appends `value` as exactly two decimal digits, zero-padded; values
    /// outside `0..100` are rejected. Handy for cents, minutes or seconds.
    fn write_2_digits(&mut self, value: i32) -> Result<(), Error> {
        let mut buf = Buffer::new();
        let formatted = buf.format_2_digits(value)?;
        self.write_str(formatted).map_err(Error::from)
    }

    /// Appends the least significant two decimal digits of `value`.
    fn write_2_digits_safe(&mut self, value: i32) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_2_digits_safe(value)).map_err(Error::from)
    }

    /// Appends `value` as exactly three decimal digits, zero-padded; values
    /// outside `0..1000` are rejected.
    fn write_3_digits(&mut self, value: i32) -> Result<(), Error> {
        let mut buf = Buffer::new();
        let formatted = buf.format_3_digits(value)?;
        self.write_str(formatted).map_err(Error::from)
    }

    /// Appends the least significant three decimal digits of `value`.
    fn write_3_digits_safe(&mut self, value: i32) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_3_digits_safe(value)).map_err(Error::from)
    }

    /// Appends the low 4 bits of `value` as one upper-case hex digit.
    fn write_hex_1<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_1(value)).map_err(Error::from)
    }

    /// Appends the low 4 bits of `value` as one lower-case hex digit.
    fn write_hex_1_lower<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_1_lower(value)).map_err(Error::from)
    }

    /// Appends the low 8 bits of `value` as two upper-case hex digits.
    fn write_hex_2<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_2(value)).map_err(Error::from)
    }

    /// Appends the low 8 bits of `value` as two lower-case hex digits.
    fn write_hex_2_lower<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_2_lower(value)).map_err(Error::from)
    }

    /// Appends the low 16 bits of `value` as four upper-case hex digits.
    fn write_hex_4<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_4(value)).map_err(Error::from)
    }

    /// Appends the low 16 bits of `value` as four lower-case hex digits.
    fn write_hex_4_lower<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_4_lower(value)).map_err(Error::from)
    }

    /// Appends the low 32 bits of `value` as eight upper-case hex digits,
    /// left-padded with `0`; wider values are silently truncated.
    ///
    /// ```
    /// use int_output::WriteInt;
    ///
    /// let mut out = String::new();
    /// out.write_hex_8(0xABCD)?;
    /// assert_eq!(out, "0000ABCD");
    /// # Ok::<(), int_output::Error>(())
    /// ```
    fn write_hex_8<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_8(value)).map_err(Error::from)
    }

    /// Appends the low 32 bits of `value` as eight lower-case hex digits.
    fn write_hex_8_lower<I: Integer>(&mut self, value: I) -> Result<(), Error> {
        let mut buf = Buffer::new();
        self.write_str(buf.format_hex_8_lower(value)).map_err(Error::from)
    }
}

impl<W: fmt::Write + ?Sized> WriteInt for W {}
