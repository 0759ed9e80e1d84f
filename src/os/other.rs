use std::io;

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    getrandom::fill(buf).map_err(|err| io::Error::other(err.to_string()))
}
