use core::fmt;
use core::str;

use crate::constants::MAX_BUF_LEN;
use crate::decimal;
use crate::error::Error;
use crate::hex;
use crate::integer::Integer;

/// A stack-allocated scratch buffer for formatting integers without heap
/// allocation.
///
/// Digits are written into the tail of the buffer at their final offsets,
/// most-significant first, so the finished text is borrowed straight out of
/// the buffer with no copying or reversal. Each `format_*` call replaces the
/// previous content.
///
/// # Example
///
/// ```
/// use int_output::Buffer;
///
/// let mut buf = int_output::Buffer::new();
/// assert_eq!(buf.format_int(-22334455), "-22334455");
/// assert_eq!(buf.format_hex(0xDEADFEEDu32), "DEADFEED");
/// ```
#[derive(Clone, Copy)]
pub struct Buffer {
    pub(crate) inner: [u8; MAX_BUF_LEN],
    pub(crate) pos: usize,
}

impl Buffer {
    /// Returns a new, empty `Buffer`.
    pub fn new() -> Buffer {
        Buffer {
            inner: [0; MAX_BUF_LEN],
            pos: MAX_BUF_LEN,
        }
    }

    /// Returns the content of the last `format_*` call as a `&str`.
    pub fn as_str(&self) -> &str {
        // Content is only ever ASCII digits/signs plus whole
        // char::encode_utf8 sequences, so it is always valid UTF-8.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the content of the last `format_*` call as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[self.pos..]
    }

    /// Length of the current content in bytes.
    pub fn len(&self) -> usize {
        MAX_BUF_LEN - self.pos
    }

    /// Whether the buffer currently holds no content.
    pub fn is_empty(&self) -> bool {
        self.pos == MAX_BUF_LEN
    }

    pub(crate) fn reset(&mut self) {
        self.pos = MAX_BUF_LEN;
    }

    pub(crate) fn push_byte(&mut self, b: u8) {
        self.pos -= 1;
        self.inner[self.pos] = b;
    }

    pub(crate) fn push_char(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp).as_bytes();
        self.pos -= encoded.len();
        self.inner[self.pos..self.pos + encoded.len()].copy_from_slice(encoded);
    }

    /// Formats `value` as minimal decimal digits, with a leading `-` for
    /// negative values.
    ///
    /// ```
    /// let mut buf = int_output::Buffer::new();
    /// assert_eq!(buf.format_int(i64::MIN), "-9223372036854775808");
    /// ```
    pub fn format_int<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        value.write_dec(self);
        self.as_str()
    }

    /// Like [`format_int`](Buffer::format_int), but rejects negative input
    /// with [`ErrorKind::IllegalValue`](crate::ErrorKind::IllegalValue)
    /// instead of emitting a sign. Infallible for unsigned types.
    pub fn format_int_positive<I: Integer>(&mut self, value: I) -> Result<&str, Error> {
        self.reset();
        value.write_dec_positive(self)?;
        Ok(self.as_str())
    }

    /// Formats `value` in decimal with `separator` placed `scale` digit
    /// positions from the right, zero-padding so that at least one digit
    /// appears on each side of the separator.
    ///
    /// A scale of zero is plain decimal. A negative scale (decimal point to
    /// the right of the last digit) is also treated as plain decimal; it is
    /// left to the caller to append trailing zeros or an exponent. Scales
    /// above [`MAX_SCALE`](crate::MAX_SCALE) do not fit the buffer and fail
    /// with [`ErrorKind::Capacity`](crate::ErrorKind::Capacity).
    ///
    /// ```
    /// let mut buf = int_output::Buffer::new();
    /// assert_eq!(buf.format_int_scaled(123456, 8, '.')?, "0.00123456");
    /// # Ok::<(), int_output::Error>(())
    /// ```
    pub fn format_int_scaled<I: Integer>(
        &mut self,
        value: I,
        scale: i32,
        separator: char,
    ) -> Result<&str, Error> {
        self.reset();
        value.write_dec_scaled(self, scale, separator)?;
        Ok(self.as_str())
    }

    /// Formats `value` in decimal with `separator` between each group of
    /// three digits, counted from the right. Only the magnitude is grouped;
    /// the sign, if any, comes first.
    pub fn format_int_grouped<I: Integer>(&mut self, value: I, separator: char) -> &str {
        self.reset();
        value.write_dec_grouped(self, separator);
        self.as_str()
    }

    /// Formats the bit pattern of `value` as minimal upper-case hexadecimal
    /// digits. No sign is ever emitted; `-1i32` formats as `"FFFFFFFF"`.
    pub fn format_hex<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_trimmed(value.to_bits(), true, self);
        self.as_str()
    }

    /// Like [`format_hex`](Buffer::format_hex), in lower case.
    pub fn format_hex_lower<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_trimmed(value.to_bits(), false, self);
        self.as_str()
    }

    /// Formats `value` as a single decimal digit. Values outside `0..10`
    /// are rejected with
    /// [`ErrorKind::IllegalValue`](crate::ErrorKind::IllegalValue).
    pub fn format_digit(&mut self, value: i32) -> Result<&str, Error> {
        self.reset();
        decimal::write_fixed_checked(value, 1, self)?;
        Ok(self.as_str())
    }

    /// Formats the least significant decimal digit of `value`. Never fails.
    pub fn format_digit_safe(&mut self, value: i32) -> &str {
        self.reset();
        decimal::write_fixed_safe(value, 1, self);
        self.as_str()
    }

    /// Formats `value` as exactly two decimal digits, zero-padded. Values
    /// outside `0..100` are rejected.
    ///
    /// ```
    /// let mut buf = int_output::Buffer::new();
    /// assert_eq!(buf.format_2_digits(7)?, "07");
    /// # Ok::<(), int_output::Error>(())
    /// ```
    pub fn format_2_digits(&mut self, value: i32) -> Result<&str, Error> {
        self.reset();
        decimal::write_fixed_checked(value, 2, self)?;
        Ok(self.as_str())
    }

    /// Formats the least significant two decimal digits of `value`. Never
    /// fails.
    pub fn format_2_digits_safe(&mut self, value: i32) -> &str {
        self.reset();
        decimal::write_fixed_safe(value, 2, self);
        self.as_str()
    }

    /// Formats `value` as exactly three decimal digits, zero-padded. Values
    /// outside `0..1000` are rejected.
    pub fn format_3_digits(&mut self, value: i32) -> Result<&str, Error> {
        self.reset();
        decimal::write_fixed_checked(value, 3, self)?;
        Ok(self.as_str())
    }

    /// Formats the least significant three decimal digits of `value`. Never
    /// fails.
    pub fn format_3_digits_safe(&mut self, value: i32) -> &str {
        self.reset();
        decimal::write_fixed_safe(value, 3, self);
        self.as_str()
    }

    /// Formats the low 4 bits of `value` as one upper-case hex digit.
    pub fn format_hex_1<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 1, true, self);
        self.as_str()
    }

    /// Formats the low 4 bits of `value` as one lower-case hex digit.
    pub fn format_hex_1_lower<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 1, false, self);
        self.as_str()
    }

    /// Formats the low 8 bits of `value` as two upper-case hex digits.
    pub fn format_hex_2<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 2, true, self);
        self.as_str()
    }

    /// Formats the low 8 bits of `value` as two lower-case hex digits.
    pub fn format_hex_2_lower<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 2, false, self);
        self.as_str()
    }

    /// Formats the low 16 bits of `value` as four upper-case hex digits.
    pub fn format_hex_4<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 4, true, self);
        self.as_str()
    }

    /// Formats the low 16 bits of `value` as four lower-case hex digits.
    pub fn format_hex_4_lower<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 4, false, self);
        self.as_str()
    }

    /// Formats the low 32 bits of `value` as eight upper-case hex digits,
    /// left-padded with `0`. Wider values are silently truncated.
    ///
    /// ```
    /// let mut buf = int_output::Buffer::new();
    /// assert_eq!(buf.format_hex_8(0xABCD), "0000ABCD");
    /// ```
    pub fn format_hex_8<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 8, true, self);
        self.as_str()
    }

    /// Formats the low 32 bits of `value` as eight lower-case hex digits.
    pub fn format_hex_8_lower<I: Integer>(&mut self, value: I) -> &str {
        self.reset();
        hex::write_fixed(value.to_bits(), 8, false, self);
        self.as_str()
    }
}

impl Default for Buffer {
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Buffer").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "with-serde")]
mod serde_impls {
    use core::fmt;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Buffer;
    use crate::constants::MAX_BUF_LEN;

    impl Serialize for Buffer {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Buffer {
        fn deserialize<D>(deserializer: D) -> Result<Buffer, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct BufferVisitor;

            impl<'de> de::Visitor<'de> for BufferVisitor {
                type Value = Buffer;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "a string no longer than {} bytes", MAX_BUF_LEN)
                }

                fn visit_str<E>(self, v: &str) -> Result<Buffer, E>
                where
                    E: de::Error,
                {
                    if v.len() > MAX_BUF_LEN {
                        return Err(E::invalid_length(v.len(), &self));
                    }
                    let mut buf = Buffer::new();
                    buf.pos = MAX_BUF_LEN - v.len();
                    buf.inner[buf.pos..].copy_from_slice(v.as_bytes());
                    Ok(buf)
                }
            }

            deserializer.deserialize_str(BufferVisitor)
        }
    }
}
