//! Stdin read on a worker thread.
//!
//! The SIGINT handler restarts a blocked `read`, so the prompter never sees
//! an interrupt while it waits on stdin directly. Lines arrive over a channel
//! instead, and the interrupt flag is polled between receives.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::prompt::{LineEvent, LineSource};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Lines read from the process stdin by a background reader.
pub struct ConsoleLines {
    lines: mpsc::Receiver<io::Result<Vec<u8>>>,
}

impl ConsoleLines {
    pub fn spawn() -> io::Result<Self> {
        let (line_tx, line_rx) = mpsc::sync_channel(1);
        thread::Builder::new()
            .name("console-reader".to_string())
            .spawn(move || {
                let stdin = io::stdin();
                let mut stdin = stdin.lock();
                loop {
                    let mut line = Vec::new();
                    let read = stdin.read_until(b'\n', &mut line).map(|_| line);
                    let finished = !matches!(&read, Ok(line) if !line.is_empty());
                    if line_tx.send(read).is_err() || finished {
                        debug!("console reader stopped");
                        break;
                    }
                }
            })?;
        Ok(Self { lines: line_rx })
    }
}

impl LineSource for ConsoleLines {
    fn next_line(&mut self, interrupted: &AtomicBool) -> io::Result<LineEvent> {
        loop {
            if interrupted.swap(false, Ordering::SeqCst) {
                return Ok(LineEvent::Interrupted);
            }
            match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(line)) if line.is_empty() => return Ok(LineEvent::Closed),
                Ok(Ok(line)) => return Ok(LineEvent::Line(line)),
                Ok(Err(err)) => return Err(err),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Ok(LineEvent::Closed),
            }
        }
    }
}
