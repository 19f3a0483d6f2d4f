use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use signal_hook::consts::SIGINT;
use signal_hook::flag;

/// Routes SIGINT into a flag instead of terminating the process.
///
/// Whoever waits on the console clears the flag and shows the prompt again.
pub fn install() -> io::Result<Arc<AtomicBool>> {
    let interrupted = Arc::new(AtomicBool::new(false));
    flag::register(SIGINT, Arc::clone(&interrupted))?;
    Ok(interrupted)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::install;

    #[test]
    fn installed_flag_starts_clear() {
        let flag = install().expect("register SIGINT handler");
        assert!(!flag.load(Ordering::SeqCst));
    }
}
