//! Repeating tick scheduler
//!
//! An [`AnimationLoop`] owns at most one tokio task. The task runs the tick
//! callback, then waits one period, until it is told to shut down.
//!
//! Shutdown has two parts:
//! - a `oneshot` signal raced against the sleep, so a stopped task wakes up
//!   right away instead of finishing its wait
//! - a generation counter guarded by the tick gate; a tick only runs while
//!   its task's generation is current, and [`AnimationLoop::stop`] bumps the
//!   counter under the same lock
//!
//! Together they mean no tick starts after `stop` returns, and a tick that
//! was already running has finished by then.
//!
//! Do not call `stop` or `adjust_speed` while holding a lock the tick
//! callback takes, and never from inside the callback itself.

use motionkit_core::{AnimationEvent, AppEvent, EventBus, SharedCallback};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Shortest period a loop will run at.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Period used when none is given.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

struct RunningTask {
    handle: JoinHandle<()>,
    shutdown: oneshot::Sender<()>,
}

struct Control {
    period: Duration,
    task: Option<RunningTask>,
}

pub struct AnimationLoop {
    runtime: Handle,
    tick: SharedCallback,
    control: Mutex<Control>,
    /// Current generation. Held for the duration of every tick.
    gate: Arc<Mutex<u64>>,
    events: Option<Arc<EventBus>>,
}

fn clamp_period(period: Duration) -> Duration {
    if period < MIN_PERIOD {
        tracing::warn!(
            "Tick period {:?} below minimum, using {:?}",
            period,
            MIN_PERIOD
        );
        MIN_PERIOD
    } else {
        period
    }
}

/// Drop the task if it ended on its own, which only happens when a tick
/// panicked.
fn reap_finished(control: &mut Control) -> bool {
    if control
        .task
        .as_ref()
        .is_some_and(|task| task.handle.is_finished())
    {
        control.task = None;
        tracing::warn!("Tick task ended unexpectedly, animation stopped");
        true
    } else {
        false
    }
}

fn millis(period: Duration) -> u64 {
    u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
}

impl AnimationLoop {
    /// Create a stopped loop with [`DEFAULT_PERIOD`].
    pub fn new(runtime: Handle, tick: SharedCallback) -> Self {
        Self::with_period(runtime, DEFAULT_PERIOD, tick)
    }

    pub fn with_period(runtime: Handle, period: Duration, tick: SharedCallback) -> Self {
        Self {
            runtime,
            tick,
            control: Mutex::new(Control {
                period: clamp_period(period),
                task: None,
            }),
            gate: Arc::new(Mutex::new(0)),
            events: None,
        }
    }

    /// Publish lifecycle events to `bus` from now on.
    pub fn attach_event_bus(&mut self, bus: Arc<EventBus>) {
        self.events = Some(bus);
    }

    /// Begin ticking. Returns `false` if the loop was already running.
    pub fn start(&self) -> bool {
        let period = {
            let mut control = self.control.lock();
            reap_finished(&mut control);
            if control.task.is_some() {
                tracing::debug!("Animation already running");
                return false;
            }
            self.spawn_locked(&mut control);
            control.period
        };
        tracing::info!("Animation started, period {:?}", period);
        self.publish(AnimationEvent::Started {
            period_ms: millis(period),
        });
        true
    }

    /// Stop ticking. Returns `false` if the loop was not running.
    ///
    /// Blocks until an in-flight tick has completed.
    pub fn stop(&self) -> bool {
        let stopped = {
            let mut control = self.control.lock();
            self.stop_locked(&mut control)
        };
        if stopped {
            tracing::info!("Animation stopped");
            self.publish(AnimationEvent::Stopped);
        }
        stopped
    }

    /// Restart a running loop with a new period.
    ///
    /// A stopped loop is left alone and keeps its period; returns `false`.
    pub fn adjust_speed(&self, period: Duration) -> bool {
        let period = clamp_period(period);
        let old = {
            let mut control = self.control.lock();
            if !self.stop_locked(&mut control) {
                tracing::debug!("Ignoring speed change while stopped");
                return false;
            }
            let old = control.period;
            control.period = period;
            self.spawn_locked(&mut control);
            old
        };
        tracing::info!("Animation period {:?} -> {:?}", old, period);
        self.publish(AnimationEvent::SpeedAdjusted {
            old_period_ms: millis(old),
            new_period_ms: millis(period),
        });
        true
    }

    pub fn state(&self) -> LoopState {
        let mut control = self.control.lock();
        reap_finished(&mut control);
        if control.task.is_some() {
            LoopState::Running
        } else {
            LoopState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    pub fn period(&self) -> Duration {
        self.control.lock().period
    }

    fn spawn_locked(&self, control: &mut Control) {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let generation = *self.gate.lock();
        let gate = Arc::clone(&self.gate);
        let tick = Arc::clone(&self.tick);
        let period = control.period;

        let handle = self.runtime.spawn(async move {
            loop {
                {
                    let current = gate.lock();
                    if *current != generation {
                        break;
                    }
                    tick();
                }

                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = tokio::time::sleep(period) => {}
                }
            }
            tracing::trace!("Tick task generation {} finished", generation);
        });

        control.task = Some(RunningTask {
            handle,
            shutdown: shutdown_tx,
        });
    }

    fn stop_locked(&self, control: &mut Control) -> bool {
        if reap_finished(control) {
            return false;
        }
        let Some(task) = control.task.take() else {
            return false;
        };

        // Waits for a tick in progress.
        *self.gate.lock() += 1;

        let _ = task.shutdown.send(());
        task.handle.abort();
        true
    }

    fn publish(&self, event: AnimationEvent) {
        if let Some(bus) = &self.events {
            bus.publish(AppEvent::Animation(event));
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        let mut control = self.control.lock();
        self.stop_locked(&mut control);
    }
}

impl std::fmt::Debug for AnimationLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let control = self.control.lock();
        f.debug_struct("AnimationLoop")
            .field("period", &control.period)
            .field("running", &control.task.is_some())
            .finish()
    }
}
