use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    // the length parameter is a u32
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(io::Error::other(format!(
                "BCryptGenRandom failed with status {status:#x}"
            )));
        }
    }

    Ok(())
}
