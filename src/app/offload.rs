//! Run slow work off the UI thread with a spinner

use std::thread;
use std::time::Duration;

use anyhow::anyhow;

use super::frontend::{Frontend, Screen};

/// Delay between spinner frames
const SPIN_INTERVAL: Duration = Duration::from_millis(80);

/// Run `work` on a worker thread, redrawing a progress screen until it ends
///
/// Keys are not read while the worker runs; anything typed meanwhile is
/// flushed afterwards.
pub fn run_with_progress<F, W, R>(frontend: &mut F, label: &str, work: W) -> anyhow::Result<R>
where
    F: Frontend + ?Sized,
    W: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let handle = thread::Builder::new()
        .name("renview-worker".to_string())
        .spawn(work)?;

    let mut tick = 0;
    while !handle.is_finished() {
        frontend.draw(&Screen::Progress { label, tick })?;
        tick += 1;
        thread::sleep(SPIN_INTERVAL);
    }

    let result = handle
        .join()
        .map_err(|_| anyhow!("{label}: worker thread panicked"))?;
    frontend.flush_input()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::frontend::testing::ScriptedFrontend;

    #[test]
    fn test_returns_worker_result() {
        let mut fe = ScriptedFrontend::new(vec![]);
        let value = run_with_progress(&mut fe, "Counting", || (1..=10).sum::<u32>()).unwrap();
        assert_eq!(value, 55);
    }

    #[test]
    fn test_draws_progress_while_busy() {
        let mut fe = ScriptedFrontend::new(vec![]);
        run_with_progress(&mut fe, "Scanning", || {
            thread::sleep(Duration::from_millis(300));
        })
        .unwrap();
        assert!(!fe.drawn.is_empty());
        assert!(fe.drawn.iter().all(|d| d == "Scanning"));
    }

    #[test]
    fn test_worker_panic_is_an_error() {
        let mut fe = ScriptedFrontend::new(vec![]);
        let result = run_with_progress(&mut fe, "Boom", || -> u32 { panic!("worker failed") });
        assert!(result.is_err());
    }
}
