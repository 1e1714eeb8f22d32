//! System call types that are strongly associated with specific system calls are defined in the
//! corresponding system call file.  Those shared across many are defined here.

#[allow(non_camel_case_types)]
pub type pid_t = i32;

#[allow(non_camel_case_types)]
pub type c_int = core::ffi::c_int;

#[allow(non_camel_case_types)]
pub type c_char = core::ffi::c_char;

pub type CStr = core::ffi::CStr;

#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct timespec {
    pub tv_sec: i64,
    pub tv_nsec: i64,
}
const _: () = assert!(core::mem::size_of::<timespec>() == 16);

impl timespec {
    pub fn nanos_since(self, earlier: timespec) -> i64 {
        self.tv_sec
            .wrapping_sub(earlier.tv_sec)
            .saturating_mul(1_000_000_000)
            .saturating_add(self.tv_nsec.wrapping_sub(earlier.tv_nsec))
    }

    /// Elapsed seconds at microsecond granularity, for report rendering
    pub fn secs_since(self, earlier: timespec) -> f64 {
        let micros = self.nanos_since(earlier) / 1_000;
        micros as f64 / 1_000_000.0
    }
}

pub trait CountParse {
    fn parse_count(&self) -> Result<usize, crate::err::Errno>;
}

impl CountParse for &[u8] {
    fn parse_count(&self) -> Result<usize, crate::err::Errno> {
        if self.is_empty() {
            return Err(crate::err::Errno::EINVAL);
        }

        let mut result: usize = 0;
        for &b in *self {
            if !b.is_ascii_digit() {
                return Err(crate::err::Errno::EINVAL);
            }
            result = result
                .checked_mul(10)
                .and_then(|r| r.checked_add((b - b'0') as usize))
                .ok_or(crate::err::Errno::EINVAL)?;
        }
        Ok(result)
    }
}

impl CountParse for &CStr {
    fn parse_count(&self) -> Result<usize, crate::err::Errno> {
        self.to_bytes().parse_count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerCountError {
    /// Not a decimal integer, or too large for usize
    Invalid,
    /// Zero workers would measure nothing
    Zero,
    /// Exceeds the fixed thread-handle buffer
    TooMany,
}

/// Parse and bound a command-line worker count
///
/// Thread handles live in a fixed buffer of MAX_WORKERS entries, so the bound is part of what
/// makes a count valid, not a caller concern.
pub trait WorkerCountParse {
    fn parse_worker_count(&self) -> Result<usize, WorkerCountError>;
}

impl WorkerCountParse for &[u8] {
    fn parse_worker_count(&self) -> Result<usize, WorkerCountError> {
        let count = self.parse_count().map_err(|_| WorkerCountError::Invalid)?;

        if count == 0 {
            return Err(WorkerCountError::Zero);
        }
        if count > crate::constants::MAX_WORKERS {
            return Err(WorkerCountError::TooMany);
        }

        Ok(count)
    }
}

impl WorkerCountParse for &CStr {
    fn parse_worker_count(&self) -> Result<usize, WorkerCountError> {
        self.to_bytes().parse_worker_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::Errno;

    #[test]
    fn test_nanos_since_whole_seconds() {
        let earlier = timespec {
            tv_sec: 10,
            tv_nsec: 0,
        };
        let later = timespec {
            tv_sec: 12,
            tv_nsec: 0,
        };
        assert_eq!(later.nanos_since(earlier), 2_000_000_000);
    }

    #[test]
    fn test_nanos_since_nsec_borrow() {
        let earlier = timespec {
            tv_sec: 10,
            tv_nsec: 900_000_000,
        };
        let later = timespec {
            tv_sec: 11,
            tv_nsec: 100_000_000,
        };
        assert_eq!(later.nanos_since(earlier), 200_000_000);
    }

    #[test]
    fn test_secs_since_truncates_to_micros() {
        let earlier = timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        let later = timespec {
            tv_sec: 0,
            tv_nsec: 123_456_789,
        };
        assert_eq!(later.secs_since(earlier), 0.123456);
    }

    #[test]
    fn test_parse_count_valid() {
        assert_eq!(b"1000".as_slice().parse_count(), Ok(1000));
        assert_eq!(b"0".as_slice().parse_count(), Ok(0));
    }

    #[test]
    fn test_parse_count_rejects_empty() {
        assert_eq!(b"".as_slice().parse_count(), Err(Errno::EINVAL));
    }

    #[test]
    fn test_parse_count_rejects_non_digits() {
        assert_eq!(b"12x4".as_slice().parse_count(), Err(Errno::EINVAL));
        assert_eq!(b"-5".as_slice().parse_count(), Err(Errno::EINVAL));
    }

    #[test]
    fn test_parse_count_rejects_overflow() {
        assert_eq!(
            b"99999999999999999999999".as_slice().parse_count(),
            Err(Errno::EINVAL)
        );
    }

    #[test]
    fn test_parse_worker_count_in_bounds() {
        assert_eq!(c"1".parse_worker_count(), Ok(1));
        assert_eq!(c"1000".parse_worker_count(), Ok(1000));
        assert_eq!(
            crate::constants::MAX_WORKERS,
            c"4096".parse_worker_count().unwrap()
        );
    }

    #[test]
    fn test_parse_worker_count_rejects_zero() {
        assert_eq!(c"0".parse_worker_count(), Err(WorkerCountError::Zero));
    }

    #[test]
    fn test_parse_worker_count_rejects_over_max() {
        assert_eq!(c"4097".parse_worker_count(), Err(WorkerCountError::TooMany));
        assert_eq!(
            c"99999999999999999999999".parse_worker_count(),
            Err(WorkerCountError::Invalid)
        );
    }

    #[test]
    fn test_parse_worker_count_rejects_garbage() {
        assert_eq!(c"12x4".parse_worker_count(), Err(WorkerCountError::Invalid));
        assert_eq!(c"".parse_worker_count(), Err(WorkerCountError::Invalid));
    }
}
