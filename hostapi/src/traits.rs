//! Host API trait: host-side signatures of the `std` import namespace.
//!
//! Each method corresponds to a function the guest imports from `std`.
//! Pointer resolution happens in the runner, not here: this trait works with
//! Rust slices and values, so a method only ever sees memory the runner has
//! already bounds-checked.
//!
//! Every method has a default implementation in terms of
//! [`console`](HostApi::console); implementors only supply the console.

use crate::console::HostConsole;
use crate::error::HostError;
use crate::format;

/// Host-side implementation of the `std` imports.
pub trait HostApi {
    /// The console the bridge writes to and reads from.
    type Console: HostConsole;

    /// Mutable access to the console.
    fn console(&mut self) -> &mut Self::Console;

    /// Read a line into `out`.
    ///
    /// Copies `min(N, out.len())` bytes of the UTF-8 line and returns `N`,
    /// the full encoded length. End of input reads as an empty line.
    fn readln(&mut self, out: &mut [u8]) -> Result<usize, HostError> {
        let line = self.console().read_line()?.unwrap_or_default();
        let bytes = line.as_bytes();
        let copied = bytes.len().min(out.len());
        out[..copied].copy_from_slice(&bytes[..copied]);
        Ok(bytes.len())
    }

    /// Decode `bytes` as UTF-8 (lossy) and write them.
    fn print(&mut self, bytes: &[u8]) -> Result<(), HostError> {
        let text = String::from_utf8_lossy(bytes);
        self.console().write_str(&text)
    }

    /// `print` followed by a newline.
    fn println(&mut self, bytes: &[u8]) -> Result<(), HostError> {
        let text = String::from_utf8_lossy(bytes);
        self.console().write_line(&text)
    }

    /// Write a single newline.
    fn ln(&mut self) -> Result<(), HostError> {
        self.console().write_str("\n")
    }

    fn print_int(&mut self, value: i32) -> Result<(), HostError> {
        self.console().write_str(&format::format_int(value))
    }

    fn println_int(&mut self, value: i32) -> Result<(), HostError> {
        self.console().write_line(&format::format_int(value))
    }

    fn print_real(&mut self, value: f64) -> Result<(), HostError> {
        self.console().write_str(&format::format_real(value))
    }

    fn println_real(&mut self, value: f64) -> Result<(), HostError> {
        self.console().write_line(&format::format_real(value))
    }

    /// Integer padded to `abs(width)` columns; negative width left-aligns.
    fn print_int_pad(&mut self, value: i32, width: i32) -> Result<(), HostError> {
        let console = self.console();
        format::write_padded(&format::format_int(value), width, |piece| {
            console.write_str(piece)
        })
    }

    /// Real padded to `abs(width)` columns; negative width left-aligns.
    fn print_real_pad(&mut self, value: f64, width: i32) -> Result<(), HostError> {
        let console = self.console();
        format::write_padded(&format::format_real(value), width, |piece| {
            console.write_str(piece)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem_console::MemConsole;

    struct TestHost {
        console: MemConsole,
    }

    impl HostApi for TestHost {
        type Console = MemConsole;

        fn console(&mut self) -> &mut MemConsole {
            &mut self.console
        }
    }

    fn host(input: &[&str]) -> TestHost {
        TestHost {
            console: MemConsole::with_input(input.iter().copied()),
        }
    }

    #[test]
    fn test_readln_fits() {
        let mut h = host(&["hello"]);
        let mut buf = [0u8; 8];
        assert_eq!(h.readln(&mut buf).unwrap(), 5);
        assert_eq!(&buf[..5], b"hello");
        assert_eq!(&buf[5..], &[0, 0, 0]);
    }

    #[test]
    fn test_readln_truncates_but_reports_full_length() {
        let mut h = host(&["hello world"]);
        let mut buf = [0u8; 5];
        assert_eq!(h.readln(&mut buf).unwrap(), 11);
        assert_eq!(&buf, b"hello");
    }

    #[test]
    fn test_readln_counts_utf8_bytes() {
        let mut h = host(&["héllo"]);
        let mut buf = [0u8; 16];
        assert_eq!(h.readln(&mut buf).unwrap(), 6);
        assert_eq!(&buf[..6], "héllo".as_bytes());
    }

    #[test]
    fn test_readln_end_of_input_is_empty_line() {
        let mut h = host(&[]);
        let mut buf = [7u8; 4];
        assert_eq!(h.readln(&mut buf).unwrap(), 0);
        assert_eq!(buf, [7u8; 4]);
    }

    #[test]
    fn test_print_and_println() {
        let mut h = host(&[]);
        h.print(b"ab").unwrap();
        h.println(b"cd").unwrap();
        h.ln().unwrap();
        assert_eq!(h.console.output(), "abcd\n\n");
    }

    #[test]
    fn test_print_invalid_utf8_is_replaced() {
        let mut h = host(&[]);
        h.print(&[b'a', 0xff, b'b']).unwrap();
        assert_eq!(h.console.output(), "a\u{fffd}b");
    }

    #[test]
    fn test_numbers() {
        let mut h = host(&[]);
        h.println_int(-7).unwrap();
        h.println_real(1.5).unwrap();
        h.print_int(3).unwrap();
        h.print_real(0.5).unwrap();
        assert_eq!(h.console.output(), "-7\n1.5\n30.5");
    }

    #[test]
    fn test_padding() {
        let mut h = host(&[]);
        h.print_int_pad(42, 5).unwrap();
        h.print_int_pad(42, -5).unwrap();
        h.print_int_pad(12345, 3).unwrap();
        h.print_real_pad(2.5, 5).unwrap();
        h.print_real_pad(2.5, -5).unwrap();
        assert_eq!(h.console.output(), "   4242   12345  2.52.5  ");
    }

    #[test]
    fn test_padding_wide_fields() {
        let mut h = host(&[]);
        h.print_int_pad(7, 70_000).unwrap();
        let right = h.console.take_output();
        assert_eq!(right.len(), 70_000);
        assert!(right.ends_with(" 7"));

        h.print_real_pad(1.5, -70_000).unwrap();
        let left = h.console.take_output();
        assert_eq!(left.len(), 70_000);
        assert!(left.starts_with("1.5 "));
    }
}
