//! Runs the scan indicator's cycle loop off the UI thread.

use std::time::Duration;

use qrforge_business::run_indicator;
use qrforge_states::{TaskHandle, TaskId};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Spawns one [`run_indicator`] loop per indicator task and lets the task's
/// cancellation token end it.
pub struct IndicatorDriver {
    runtime: Option<Runtime>,
    current: Option<(TaskId, JoinHandle<u64>)>,
}

impl Default for IndicatorDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorDriver {
    pub fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("qrforge-indicator")
            .enable_time()
            .build()
            .inspect_err(|err| log::warn!("Scan indicator runtime unavailable: {err}"))
            .ok();
        Self {
            runtime,
            current: None,
        }
    }

    /// Makes sure a loop is running for `handle`, requesting a repaint every cycle.
    ///
    /// A missing or cancelled handle forgets the previous loop, which has
    /// already stopped through its token.
    pub fn sync(&mut self, handle: Option<&TaskHandle>, period: Duration, ctx: &egui::Context) {
        let Some(handle) = handle.filter(|h| !h.is_cancelled()) else {
            self.current = None;
            return;
        };
        if self.is_driving(handle.id()) {
            return;
        }
        let Some(runtime) = &self.runtime else {
            return;
        };

        let ctx = ctx.clone();
        let task = runtime.spawn(run_indicator(
            handle.cancellation_token(),
            period,
            move |cycle| {
                log::trace!("Scan indicator cycle {cycle}");
                ctx.request_repaint();
            },
        ));
        self.current = Some((handle.id(), task));
    }

    pub fn is_driving(&self, id: TaskId) -> bool {
        self.current.as_ref().is_some_and(|(current, _)| *current == id)
    }
}
