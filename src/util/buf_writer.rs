//! Safe, panic-free buffer writer with offset tracking

use crate::err::Errno;

pub struct BufWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BufWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Push bytes onto the buffer, returning an error if it would overflow
    pub fn push(&mut self, data: &[u8]) -> Result<(), Errno> {
        let end = self.pos.checked_add(data.len()).ok_or(Errno::EOVERFLOW)?;

        if end > self.buf.len() {
            return Err(Errno::EOVERFLOW);
        }

        // Use unsafe pointer copy to avoid panic branch from copy_from_slice's length assertion.
        //
        // # SAFETY
        //
        // - We've verified that self.pos + data.len() <= self.buf.len(), and thus we know the
        // destination slice has exactly data.len() bytes available.
        // - Rust type system ensures both source and destination are valid for data.len() bytes
        // - Rust type system ensures they don't overlap (destination is a mutable slice we own).
        unsafe {
            core::ptr::copy_nonoverlapping(
                data.as_ptr(),
                self.buf.as_mut_ptr().add(self.pos),
                data.len(),
            )
        };
        self.pos = end;
        Ok(())
    }

    /// Push a single byte `n` times, returning an error if it would overflow
    ///
    /// Used for column padding in the report table.
    pub fn push_repeated(&mut self, byte: u8, n: usize) -> Result<(), Errno> {
        let end = self.pos.checked_add(n).ok_or(Errno::EOVERFLOW)?;

        if end > self.buf.len() {
            return Err(Errno::EOVERFLOW);
        }

        // # SAFETY
        //
        // We've verified that self.pos + n <= self.buf.len().
        unsafe { core::ptr::write_bytes(self.buf.as_mut_ptr().add(self.pos), byte, n) };
        self.pos = end;
        Ok(())
    }

    /// Get the current write position
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Reset the write position to 0
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Get a reference to the populated segment of the buffer
    pub fn as_slice(&self) -> &[u8] {
        // # SAFETY
        //
        // We've been actively tracking pos relative to buffer size to ensure this works.
        unsafe { self.buf.get_unchecked(0..self.pos) }
    }

    /// Consume the writer, returning the populated segment with the buffer's own lifetime
    pub fn into_slice(self) -> &'a [u8] {
        let Self { buf, pos } = self;
        // # SAFETY
        //
        // We've been actively tracking pos relative to buffer size to ensure this works.
        unsafe { buf.get_unchecked(0..pos) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tracks_position() {
        let mut buf = [0u8; 8];
        let mut w = BufWriter::new(&mut buf);
        w.push(b"abc").unwrap();
        w.push(b"de").unwrap();
        assert_eq!(w.pos(), 5);
        assert_eq!(w.as_slice(), b"abcde");
    }

    #[test]
    fn test_push_rejects_overflow() {
        let mut buf = [0u8; 4];
        let mut w = BufWriter::new(&mut buf);
        assert_eq!(w.push(b"12345"), Err(Errno::EOVERFLOW));
        assert_eq!(w.pos(), 0);
    }

    #[test]
    fn test_push_repeated_pads() {
        let mut buf = [0u8; 8];
        let mut w = BufWriter::new(&mut buf);
        w.push(b"x").unwrap();
        w.push_repeated(b' ', 3).unwrap();
        assert_eq!(w.as_slice(), b"x   ");
    }

    #[test]
    fn test_reset() {
        let mut buf = [0u8; 8];
        let mut w = BufWriter::new(&mut buf);
        w.push(b"abc").unwrap();
        w.reset();
        assert_eq!(w.pos(), 0);
        assert_eq!(w.as_slice(), b"");
    }
}
