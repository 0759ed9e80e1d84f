//! Linux entropy via the `getrandom(2)` system call.
//!
//! `getrandom` reads from the same pool as `/dev/urandom` but blocks until
//! that pool has been initialized, and it needs no file descriptor.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` with cryptographically secure random bytes.
///
/// Partial reads and `EINTR` are retried until the buffer is full. Any
/// other failure is returned to the caller.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    fill_with(buf, |rest| unsafe {
        getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0)
    })
}

/// Drives `read` until `buf` is full. `read` follows the syscall
/// convention: a byte count, or a negative value with `errno` set.
fn fill_with(buf: &mut [u8], mut read: impl FnMut(&mut [u8]) -> isize) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = read(&mut buf[filled..]);

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        // a zero-length read would never make progress
        if ret == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "getrandom() returned no bytes",
            ));
        }

        filled += ret as usize;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_large_buffer() {
        let mut buf = vec![0u8; 1 << 20];

        sys_random(&mut buf).unwrap();

        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn partial_reads_are_resumed() {
        let mut buf = [0u8; 10];
        let mut calls = 0;

        fill_with(&mut buf, |rest| {
            calls += 1;
            rest[0] = 0xaa;
            1
        })
        .unwrap();

        assert_eq!(calls, 10);
        assert_eq!(buf, [0xaa; 10]);
    }

    #[test]
    fn zero_length_read_is_an_error() {
        let mut buf = [0u8; 4];
        let mut calls = 0;

        let err = fill_with(&mut buf, |_| {
            calls += 1;
            0
        })
        .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(calls, 1);
    }

    #[test]
    fn empty_buffer_makes_no_call() {
        fill_with(&mut [], |_| panic!("no read expected")).unwrap();
    }
}
