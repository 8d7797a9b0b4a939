//! Run lifecycle: generation, pacing, cancellation, and history navigation
//!
//! The controller owns the dataset, the speed/size settings, and the
//! recorded trace of the active run. A run is recorded in full by the
//! engine and then delivered step by step, either manually
//! ([`RunController::step_forward`] / [`RunController::step_backward`])
//! or through the blocking [`RunController::run`] loop, which paces
//! deliveries and honors the cancellation token between steps.

use crate::dataset::{Dataset, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::engine::{EngineError, StepEngine};
use crate::registry::{AlgorithmId, Family};
use crate::snapshot::{RunMetrics, Snapshot, StepTrace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;
pub const DEFAULT_ARRAY_SIZE: usize = 20;

/// Shared cancellation flag. Clones observe the same run; requesting
/// cancellation is idempotent, and doing so with no run in progress is a
/// no-op.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn rearm(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// How a run ended. Cancellation is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Cancelled,
}

/// Terminal report of one run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub status: RunStatus,
    pub metrics: RunMetrics,
}

struct ActiveRun {
    trace: StepTrace,
    /// Fully-mutated working copy, applied to the dataset on completion.
    terminal: Option<Dataset>,
    /// Number of steps delivered so far.
    cursor: usize,
    /// Set once the cursor first reaches the end of the trace. From then
    /// on the run counts as finished: metrics are frozen and new runs may
    /// start, but the trace stays navigable.
    done: bool,
    started_at: Instant,
}

pub struct RunController {
    dataset: Dataset,
    array_size: usize,
    speed: u8,
    rng: StdRng,
    cancel: CancelToken,
    active: Option<ActiveRun>,
    /// Live metrics during a run, frozen at its end.
    metrics: RunMetrics,
    /// Last delivered snapshot, kept for rendering and partial-state
    /// restore on cancellation.
    current: Option<Snapshot>,
}

impl RunController {
    pub fn new(family: Family) -> Result<Self, EngineError> {
        Self::with_seed(family, rand::random())
    }

    /// Deterministic constructor; two controllers built from the same seed
    /// generate identical datasets.
    pub fn with_seed(family: Family, seed: u64) -> Result<Self, EngineError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let dataset = Dataset::generate(family, DEFAULT_ARRAY_SIZE, &mut rng)?;
        Ok(RunController {
            dataset,
            array_size: DEFAULT_ARRAY_SIZE,
            speed: DEFAULT_SPEED,
            rng,
            cancel: CancelToken::default(),
            active: None,
            metrics: RunMetrics::default(),
            current: None,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    /// Delay between step deliveries: 101 - speed milliseconds.
    pub fn pace(&self) -> Duration {
        Duration::from_millis(u64::from(101 - self.speed))
    }

    pub fn metrics(&self) -> RunMetrics {
        self.metrics
    }

    /// The last delivered snapshot, if any step has been delivered since
    /// the last generation.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// True while a started run has undelivered steps remaining.
    pub fn is_running(&self) -> bool {
        matches!(&self.active, Some(run) if !run.done)
    }

    /// Steps delivered so far, for progress display.
    pub fn position(&self) -> usize {
        self.active.as_ref().map_or(0, |run| run.cursor)
    }

    /// Total recorded steps of the active trace.
    pub fn total_steps(&self) -> usize {
        self.active.as_ref().map_or(0, |run| run.trace.len())
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn set_speed(&mut self, speed: u8) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::RunInProgress);
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(EngineError::InvalidSpeed { speed });
        }
        self.speed = speed;
        Ok(())
    }

    pub fn set_array_size(&mut self, size: usize) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::RunInProgress);
        }
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
            return Err(EngineError::InvalidArraySize { size });
        }
        self.array_size = size;
        Ok(())
    }

    /// Replace the dataset with a freshly generated one and reset metrics
    /// and any finished trace.
    pub fn generate(&mut self, family: Family) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::RunInProgress);
        }
        self.dataset = Dataset::generate(family, self.array_size, &mut self.rng)?;
        self.active = None;
        self.metrics = RunMetrics::default();
        self.current = None;
        Ok(())
    }

    /// Record a full run of `algorithm` over a working copy of the
    /// dataset. No steps are delivered yet; the dataset itself is updated
    /// only when the run completes (or partially, on cancellation).
    pub fn start(&mut self, algorithm: AlgorithmId) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::RunInProgress);
        }

        let mut working = self.dataset.clone();
        let trace = StepEngine::execute(algorithm, &mut working)?;

        self.cancel.rearm();
        self.metrics = RunMetrics::default();
        self.current = None;
        self.active = Some(ActiveRun {
            trace,
            terminal: Some(working),
            cursor: 0,
            done: false,
            started_at: Instant::now(),
        });
        Ok(())
    }

    /// Deliver the next recorded step, or `None` once the trace is
    /// exhausted. Reaching the end for the first time finishes the run:
    /// the terminal dataset state is applied and metrics freeze.
    pub fn step_forward(&mut self) -> Option<&Snapshot> {
        let live = self.is_running();
        let (snapshot, at_end) = {
            let run = self.active.as_mut()?;
            if run.cursor >= run.trace.len() {
                return None;
            }
            let mut snapshot = run.trace.get(run.cursor).cloned()?;
            run.cursor += 1;
            if live {
                snapshot.metrics.elapsed_ms = run.started_at.elapsed().as_millis() as u64;
            }
            (snapshot, run.cursor == run.trace.len())
        };

        if live {
            self.metrics = snapshot.metrics;
        }
        self.current = Some(snapshot);
        if at_end {
            self.complete();
        }
        self.current.as_ref()
    }

    /// Step back to the previous delivered snapshot. `None` at (or before)
    /// the first step.
    pub fn step_backward(&mut self) -> Option<&Snapshot> {
        let snapshot = {
            let run = self.active.as_mut()?;
            if run.cursor <= 1 {
                return None;
            }
            run.cursor -= 1;
            run.trace.get(run.cursor - 1).cloned()?
        };
        self.current = Some(snapshot);
        self.current.as_ref()
    }

    /// Reset the cursor to before the first step. Does not un-finish a
    /// completed run.
    pub fn rewind_to_start(&mut self) {
        if let Some(run) = &mut self.active {
            run.cursor = 0;
        }
        self.current = None;
    }

    /// Run `algorithm` to completion on the calling thread, delivering
    /// each snapshot to `on_step` and sleeping the configured pace between
    /// steps. The cancellation token is checked once per suspension; at
    /// most one further step is delivered after cancellation is requested.
    pub fn run<F>(&mut self, algorithm: AlgorithmId, mut on_step: F) -> Result<RunReport, EngineError>
    where
        F: FnMut(&Snapshot),
    {
        self.start(algorithm)?;
        let delay = self.pace();

        let mut status = RunStatus::Completed;
        loop {
            if self.cancel.is_cancelled() {
                status = RunStatus::Cancelled;
                break;
            }
            match self.step_forward() {
                Some(snapshot) => on_step(snapshot),
                None => break,
            }
            thread::sleep(delay);
        }

        if status == RunStatus::Cancelled {
            self.discard_active();
        }
        Ok(RunReport {
            status,
            metrics: self.metrics,
        })
    }

    /// Cancel and discard the active run immediately, keeping the last
    /// delivered partial state visible. Safe to call with no run active.
    pub fn abort(&mut self) {
        self.cancel.cancel();
        self.discard_active();
    }

    fn complete(&mut self) {
        if let Some(run) = &mut self.active {
            if !run.done {
                run.done = true;
                if let Some(terminal) = run.terminal.take() {
                    self.dataset = terminal;
                }
            }
        }
    }

    fn discard_active(&mut self) {
        if let Some(run) = self.active.take() {
            if !run.done {
                // Nothing past the last emission may become visible.
                if let Some(snapshot) = &self.current {
                    self.dataset.restore(&snapshot.structure);
                }
            }
        }
    }
}
