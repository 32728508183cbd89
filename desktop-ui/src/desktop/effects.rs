use chrono::Local;
use desktop_types::{CancelTimer, ClockConfig, ClockReading, ScopedTimer};
use dioxus::core::Task;
use dioxus::prelude::{spawn, Signal, WritableExt};
use dioxus_logger::tracing::debug;
use gloo_timers::future::TimeoutFuture;

/// Spawned clock loop owned by a [`ScopedTimer`].
pub struct ClockTask(Task);

impl CancelTimer for ClockTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

pub fn read_clock(config: &ClockConfig) -> ClockReading {
    ClockReading::at(Local::now().naive_local(), config)
}

/// Refresh `reading` every tick until the returned timer is disposed.
///
/// Must be called from inside a component scope.
pub fn start_clock(
    mut reading: Signal<ClockReading>,
    config: ClockConfig,
) -> ScopedTimer<ClockTask> {
    let interval_ms = config.tick_interval_ms;
    let task = spawn(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            reading.set(read_clock(&config));
        }
    });
    debug!(interval_ms, "Clock loop started");
    ScopedTimer::new(ClockTask(task))
}
