use crate::err::*;
use crate::types::*;

pub const STDIN: Fd = Fd(0);
pub const STDOUT: Fd = Fd(1);
pub const STDERR: Fd = Fd(2);

/// File descriptor
///
/// Spawnmark only ever touches the three standard descriptors it inherits, so there is no open()
/// or close() here.
#[derive(Clone)]
pub struct Fd(c_int);

impl Fd {
    pub fn write(&self, buf: &[u8]) -> Result<usize, Errno> {
        // SAFETY: buf is a valid slice for its whole length
        unsafe { crate::syscall::write(self.0, buf) }
    }

    /// Write the entire buffer, retrying on short writes and EINTR
    pub fn write_all(&self, buf: &[u8]) -> Result<(), Errno> {
        let mut remaining = buf;
        while !remaining.is_empty() {
            match self.write(remaining) {
                // get() rather than indexing to keep this free of panic branches
                Ok(n) => remaining = remaining.get(n..).unwrap_or(&[]),
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
