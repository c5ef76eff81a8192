//! A low-level library for writing integers as text straight into a
//! caller-supplied sink, without allocating an intermediate string.
//!
//! Digits are produced into a fixed-size scratch buffer at their final
//! offsets (most-significant first, no reversal pass), then handed to the
//! destination in a single append. Memory use is O(1) no matter the value.
//!
//! # Picking an API
//!
//! There are two entry points:
//!
//! 1. **[`Buffer`]** — a stack-allocated scratch buffer. Format a value and
//!    borrow the result as a `&str`. Works without `std` and never touches
//!    the heap.
//!
//!    ```
//!    use int_output::Buffer;
//!
//!    let mut buf = Buffer::new();
//!    assert_eq!(buf.format_int_grouped(1234567890, ','), "1,234,567,890");
//!    ```
//!
//! 2. **[`WriteInt`]** — extension methods on every [`core::fmt::Write`]
//!    sink (`String`, `fmt::Formatter`, a fixed-capacity string type, ...),
//!    appending the digits directly.
//!
//!    ```
//!    use int_output::WriteInt;
//!
//!    let mut out = String::new();
//!    out.push('$');
//!    out.write_int_grouped(1234u64, ',')?;
//!    out.push('.');
//!    out.write_2_digits(56)?;
//!    assert_eq!(out, "$1,234.56");
//!    # Ok::<(), int_output::Error>(())
//!    ```
//!
//! Values of `i32`, `u32`, `i64` and `u64` are accepted everywhere through
//! the sealed [`Integer`] trait. Formatting a bit pattern as unsigned is a
//! cast away: `(-1985229329i32 as u32)` renders as `"2309737967"`.
//!
//! # Operations
//!
//! * plain decimal, with a validated positive-only variant
//! * scaled decimal (`123456` at scale 8 is `"0.00123456"`)
//! * grouped decimal (a separator every three digits)
//! * trimmed hexadecimal, upper- or lower-case, of the raw bit pattern
//! * fixed-width decimal (1, 2 or 3 digits) and hexadecimal (1, 2, 4 or
//!   8 digits)
//!
//! # Features
//!
//! * `std` (default) — implements [`std::error::Error`] for [`Error`].
//!   Disable for `no_std` use; nothing else changes.
//! * `with-serde` — serializes a [`Buffer`] as its string content.

#![no_std]
#![doc(html_root_url = "https://docs.rs/int-output/0.1.0")]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

mod buffer;
mod constants;
mod decimal;
mod error;
mod hex;
mod integer;
mod write_int;

pub use crate::buffer::Buffer;
pub use crate::constants::MAX_SCALE;
pub use crate::error::{Error, ErrorKind};
pub use crate::integer::Integer;
pub use crate::write_int::WriteInt;

mod private {
    pub trait Sealed {}
}
