//! Console output helpers.
//!
//! [`write`] and [`write_line`] print a value's [`Display`] form to standard
//! output. [`debug`] prints `debug:{value}` to standard error and hands the
//! value back, so it can be dropped into the middle of an expression.
//!
//! Each helper has a `*_to` counterpart that targets any [`io::Write`] sink
//! and reports write failures instead of panicking.

use std::fmt::Display;
use std::io;

/// Prints `value` to standard output without a trailing newline.
///
/// # Panics
///
/// Panics if writing to standard output fails, like [`print!`].
///
/// # Examples
///
/// ```
/// use fnkit::sequence::write;
///
/// write(&"x");
/// write("borrowed str");
/// ```
#[inline]
pub fn write<T: Display + ?Sized>(value: &T) {
    print!("{value}");
}

/// Prints `value` to standard output followed by a newline.
///
/// # Panics
///
/// Panics if writing to standard output fails, like [`println!`].
///
/// # Examples
///
/// ```
/// use fnkit::sequence::write_line;
///
/// write_line(&42);
/// ```
#[inline]
pub fn write_line<T: Display + ?Sized>(value: &T) {
    println!("{value}");
}

/// Prints `debug:{value}` to standard error and returns `value`.
///
/// # Panics
///
/// Panics if writing to standard error fails, like [`eprintln!`].
///
/// # Examples
///
/// ```
/// use fnkit::sequence::debug;
///
/// let doubled = debug(21) * 2;
/// assert_eq!(doubled, 42);
/// ```
#[inline]
pub fn debug<T: Display>(value: T) -> T {
    eprintln!("debug:{value}");
    value
}

/// Writes `value` to `sink` without a trailing newline.
///
/// # Errors
///
/// Returns the sink's error if the write fails.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::write_to;
///
/// let mut buffer = Vec::new();
/// write_to(&mut buffer, &3.5)?;
/// assert_eq!(buffer, b"3.5");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_to<W, T>(sink: &mut W, value: &T) -> io::Result<()>
where
    W: io::Write + ?Sized,
    T: Display + ?Sized,
{
    write!(sink, "{value}")
}

/// Writes `value` to `sink` followed by a newline.
///
/// # Errors
///
/// Returns the sink's error if the write fails.
pub fn write_line_to<W, T>(sink: &mut W, value: &T) -> io::Result<()>
where
    W: io::Write + ?Sized,
    T: Display + ?Sized,
{
    writeln!(sink, "{value}")
}

/// Writes `debug:{value}` and a newline to `sink`, then returns `value`.
///
/// # Errors
///
/// Returns the sink's error if the write fails; `value` is dropped in that
/// case.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::debug_to;
///
/// let mut buffer = Vec::new();
/// let value = debug_to(&mut buffer, "ready")?;
/// assert_eq!(value, "ready");
/// assert_eq!(String::from_utf8(buffer).unwrap(), "debug:ready\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn debug_to<W, T>(sink: &mut W, value: T) -> io::Result<T>
where
    W: io::Write + ?Sized,
    T: Display,
{
    writeln!(sink, "debug:{value}")?;
    Ok(value)
}
