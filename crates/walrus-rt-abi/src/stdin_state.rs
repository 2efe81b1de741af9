//! Process-global stdin scanner.
//!
//! `scanf`-style reading needs one byte of pushback that survives across
//! calls to `_gets_int`, so the scanner lives for the process lifetime
//! behind a mutex. No other state is shared between runtime calls.

use std::sync::{Mutex, OnceLock};

use walrus_rt_core::scan::{ByteSource, IntScanner};

/// `ByteSource` reading one byte per `read(2)` from fd 0.
///
/// Byte-at-a-time reads leave everything after the scanned token in the
/// kernel buffer, so input not consumed by the runtime stays available to
/// the process (and to whatever inherits the fd).
pub(crate) struct FdSource {
    fd: libc::c_int,
}

impl ByteSource for FdSource {
    fn next_byte(&mut self) -> Option<u8> {
        let mut byte = 0u8;
        loop {
            // SAFETY: reading 1 byte into a local; fd validity is the
            // process's invariant for fd 0.
            let rc = unsafe { libc::read(self.fd, (&raw mut byte).cast(), 1) };
            if rc == 1 {
                return Some(byte);
            }
            if rc < 0 && std::io::Error::last_os_error().raw_os_error() == Some(libc::EINTR) {
                continue;
            }
            // EOF or unrecoverable read error: both end the token stream.
            return None;
        }
    }
}

static STDIN_SCANNER: OnceLock<Mutex<IntScanner<FdSource>>> = OnceLock::new();

pub(crate) fn stdin_scanner() -> &'static Mutex<IntScanner<FdSource>> {
    STDIN_SCANNER.get_or_init(|| {
        Mutex::new(IntScanner::new(FdSource {
            fd: libc::STDIN_FILENO,
        }))
    })
}
