/// Largest supported scale for the scaled-decimal operations.
///
/// Scales above this bound would overflow the internal scratch buffer and
/// are rejected with [`ErrorKind::Capacity`](crate::ErrorKind::Capacity).
pub const MAX_SCALE: usize = 38;

// A separator is a single char, so at most 4 bytes of UTF-8.
pub(crate) const MAX_SEP_LEN: usize = 4;

// Want this to be as large as the largest possible output of any operation.
// Grouped u64 is 20 digits + 6 separators; grouped i64::MIN is 19 digits +
// 6 separators + the sign; both come to 44 bytes with 4-byte separators.
// Scaled output at MAX_SCALE needs sign + "0" + separator + MAX_SCALE
// digits, which is the same 44.
pub(crate) const MAX_BUF_LEN: usize = 2 + MAX_SEP_LEN + MAX_SCALE;

pub(crate) const DIGIT_TABLE: &[u8; 200] =
    b"0001020304050607080910111213141516171819\
      2021222324252627282930313233343536373839\
      4041424344454647484950515253545556575859\
      6061626364656667686970717273747576777879\
      8081828384858687888990919293949596979899";

pub(crate) const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";
pub(crate) const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
