//! Bounds-checked windows into guest linear memory.
//!
//! Every `(offset, len)` pair a guest passes to a host function is resolved
//! through a [`MemoryWindow`] before any byte is touched. Both values arrive
//! as wasm `i32` and are reinterpreted as unsigned 32-bit quantities, the way
//! wasm32 addresses are. A window that does not fit in memory yields
//! `HostError::OutOfBounds`.

use stdhost_hostapi::HostError;

/// A guest-supplied range `[offset, offset + len)` in linear memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryWindow {
    offset: u32,
    len: u32,
}

impl MemoryWindow {
    /// Build a window from the raw `i32` arguments of a guest call.
    pub fn from_guest(offset: i32, len: i32) -> Self {
        Self {
            offset: offset as u32,
            len: len as u32,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte range of the window inside a memory of `size` bytes.
    fn range(&self, size: usize) -> Result<std::ops::Range<usize>, HostError> {
        let start = self.offset as usize;
        let end = start
            .checked_add(self.len as usize)
            .filter(|end| *end <= size)
            .ok_or_else(|| HostError::out_of_bounds(self.offset, self.len, size))?;
        Ok(start..end)
    }

    /// Borrow the window's bytes.
    pub fn slice<'m>(&self, mem: &'m [u8]) -> Result<&'m [u8], HostError> {
        let range = self.range(mem.len())?;
        Ok(&mem[range])
    }

    /// Mutably borrow the window's bytes.
    pub fn slice_mut<'m>(&self, mem: &'m mut [u8]) -> Result<&'m mut [u8], HostError> {
        let range = self.range(mem.len())?;
        Ok(&mut mem[range])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(mem: &[u8], offset: i32, len: i32) -> Result<Vec<u8>, HostError> {
        MemoryWindow::from_guest(offset, len).slice(mem).map(<[u8]>::to_vec)
    }

    #[test]
    fn test_read_basic() {
        let mem = vec![10, 20, 30, 40, 50];
        assert_eq!(read(&mem, 1, 3).unwrap(), vec![20, 30, 40]);
    }

    #[test]
    fn test_read_out_of_bounds() {
        let mem = vec![10, 20, 30];
        assert!(read(&mem, 1, 3).is_err());
        assert!(read(&mem, -1, 1).is_err());
        assert!(read(&mem, 0, -1).is_err());
    }

    #[test]
    fn test_window_reaching_end_is_valid() {
        let mem = vec![1, 2, 3, 4];
        let window = MemoryWindow::from_guest(2, 2);
        assert_eq!(window.slice(&mem).unwrap(), &[3, 4]);
    }

    #[test]
    fn test_empty_window_at_end_is_valid() {
        let mem = vec![1, 2, 3, 4];
        let window = MemoryWindow::from_guest(4, 0);
        assert!(window.is_empty());
        assert!(window.slice(&mem).unwrap().is_empty());
        assert!(MemoryWindow::from_guest(5, 0).slice(&mem).is_err());
    }

    #[test]
    fn test_out_of_bounds_reports_window() {
        let mem = vec![0u8; 16];
        let err = MemoryWindow::from_guest(10, 8).slice(&mem).unwrap_err();
        assert_eq!(err, HostError::out_of_bounds(10, 8, 16));
    }

    #[test]
    fn test_negative_values_are_unsigned() {
        let window = MemoryWindow::from_guest(-1, -2);
        assert_eq!(window.offset(), u32::MAX);
        assert_eq!(window.len(), u32::MAX - 1);
        let mem = vec![0u8; 8];
        assert!(window.slice(&mem).is_err());
    }

    #[test]
    fn test_slice_mut_out_of_bounds_leaves_memory_untouched() {
        let mut mem = vec![0; 4];
        assert!(MemoryWindow::from_guest(2, 3).slice_mut(&mut mem).is_err());
        assert_eq!(mem, vec![0; 4]);
    }

    #[test]
    fn test_slice_mut_writes_through() {
        let mut mem = vec![0u8; 6];
        MemoryWindow::from_guest(1, 3)
            .slice_mut(&mut mem)
            .unwrap()
            .copy_from_slice(b"abc");
        assert_eq!(&mem, b"\0abc\0\0");
    }

    #[test]
    fn test_utf8_round_trip_through_window() {
        let text = "añb€c";
        let mut mem = vec![0u8; 32];
        let window = MemoryWindow::from_guest(4, text.len() as i32);
        window.slice_mut(&mut mem).unwrap().copy_from_slice(text.as_bytes());
        let bytes = read(&mem, 4, text.len() as i32).unwrap();
        let decoded = String::from_utf8_lossy(&bytes);
        assert_eq!(decoded, text);
        assert_eq!(decoded.as_bytes(), text.as_bytes());
    }
}
