//! Process lifecycle hooks requested by a merge.

use std::io::{self, Read};
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

/// Read `reader` until end of input, discarding the bytes. Returns how many were read.
pub fn drain_until_eof<R: Read>(mut reader: R) -> io::Result<u64> {
    io::copy(&mut reader, &mut io::sink())
}

/// Consume stdin on a background thread and exit the process with status 0 once it closes.
///
/// A read error ends the thread without exiting.
pub fn install_stdin_exit_hook() -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-exit".to_string())
        .spawn(|| match drain_until_eof(io::stdin().lock()) {
            Ok(bytes) => {
                info!(bytes, "stdin closed, exiting");
                std::process::exit(0);
            }
            Err(e) => warn!(error = %e, "Reading stdin failed; exit hook disarmed"),
        })
}
