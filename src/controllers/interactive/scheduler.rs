use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_render_port::FrameRenderPort;
use crate::controllers::interactive::ports::frame_sink::FrameSink;

pub const DEFAULT_COALESCE_DELAY: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerPhase {
    Idle,
    Rendering,
    RenderingQueued,
}

#[derive(Debug)]
struct Job {
    generation: u64,
    request: RenderRequest,
}

// `starting` is the job the worker has been told to run next; `queued` is the
// single pending slot that newer requests overwrite while a render is running.
#[derive(Debug)]
struct SchedulerState {
    phase: SchedulerPhase,
    starting: Option<Job>,
    queued: Option<Job>,
    shutdown: bool,
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    renders_started: AtomicU64,
    state: Mutex<SchedulerState>,
    wake: Condvar,
    renderer: Arc<dyn FrameRenderPort>,
    sink: Arc<dyn FrameSink>,
    coalesce_delay: Duration,
}

impl SharedState {
    fn lock(&self) -> MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs renders on a dedicated worker thread, one at a time.
///
/// A request made while idle starts at once. Requests made while a render is
/// in flight collapse into a single queued slot; when the in-flight render
/// completes, the worker waits `coalesce_delay` and then runs whatever is in
/// that slot. Every executed render produces exactly one [`RenderEvent`].
pub struct RenderScheduler {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new(renderer: Arc<dyn FrameRenderPort>, sink: Arc<dyn FrameSink>) -> Self {
        Self::with_coalesce_delay(renderer, sink, DEFAULT_COALESCE_DELAY)
    }

    pub fn with_coalesce_delay(
        renderer: Arc<dyn FrameRenderPort>,
        sink: Arc<dyn FrameSink>,
        coalesce_delay: Duration,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            renders_started: AtomicU64::new(0),
            state: Mutex::new(SchedulerState {
                phase: SchedulerPhase::Idle,
                starting: None,
                queued: None,
                shutdown: false,
            }),
            wake: Condvar::new(),
            renderer,
            sink,
            coalesce_delay,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Hands a request to the worker and returns its generation without
    /// waiting for the render.
    pub fn request_render(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let job = Job {
            generation,
            request,
        };

        let mut state = self.shared.lock();

        if state.shutdown {
            debug!(generation, "scheduler shut down; request dropped");
            return generation;
        }

        match state.phase {
            SchedulerPhase::Idle => {
                debug!(generation, "render requested while idle");
                state.starting = Some(job);
                state.phase = SchedulerPhase::Rendering;
                self.shared.wake.notify_one();
            }
            SchedulerPhase::Rendering | SchedulerPhase::RenderingQueued => {
                if let Some(superseded) = state.queued.replace(job) {
                    debug!(
                        generation,
                        superseded = superseded.generation,
                        "queued render superseded"
                    );
                } else {
                    debug!(generation, "render queued behind in-flight render");
                }
                state.phase = SchedulerPhase::RenderingQueued;
            }
        }

        generation
    }

    #[must_use]
    pub fn phase(&self) -> SchedulerPhase {
        self.shared.lock().phase
    }

    #[must_use]
    pub fn renders_started(&self) -> u64 {
        self.shared.renders_started.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    #[must_use]
    pub fn coalesce_delay(&self) -> Duration {
        self.shared.coalesce_delay
    }

    /// Lets the in-flight render finish, drops any queued request, and joins
    /// the worker.
    pub fn shutdown(&mut self) {
        {
            let mut state = self.shared.lock();
            state.shutdown = true;
            if let Some(dropped) = state.queued.take() {
                debug!(generation = dropped.generation, "queued render dropped on shutdown");
            }
        }
        self.shared.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let job = {
                let state = shared.lock();
                let mut state = shared
                    .wake
                    .wait_while(state, |s| s.starting.is_none() && !s.shutdown)
                    .unwrap_or_else(PoisonError::into_inner);

                if state.shutdown {
                    return;
                }

                match state.starting.take() {
                    Some(job) => job,
                    None => continue,
                }
            };

            Self::execute(shared, job);

            let mut state = shared.lock();

            if state.queued.is_none() {
                state.phase = SchedulerPhase::Idle;
                continue;
            }

            // newer requests may still replace the queued one during the delay
            let (mut state, _) = shared
                .wake
                .wait_timeout_while(state, shared.coalesce_delay, |s| !s.shutdown)
                .unwrap_or_else(PoisonError::into_inner);

            if state.shutdown {
                state.queued = None;
                return;
            }

            state.starting = state.queued.take();
            state.phase = SchedulerPhase::Rendering;
        }
    }

    fn execute(shared: &SharedState, job: Job) {
        let Job {
            generation,
            request,
        } = job;

        shared.renders_started.fetch_add(1, Ordering::AcqRel);
        debug!(
            generation,
            width = request.pixel_rect.width(),
            height = request.pixel_rect.height(),
            kind = %request.config.kind,
            "render started"
        );

        let event = match shared.renderer.render(&request) {
            Ok(frame) => {
                debug!(
                    generation,
                    elapsed_ms = frame.elapsed_milliseconds(),
                    "render finished"
                );

                RenderEvent::Frame(FrameData {
                    generation,
                    config: request.config,
                    pixel_buffer: frame.pixel_buffer,
                    render_duration: frame.render_duration,
                })
            }
            Err(error) => {
                warn!(generation, %error, "render failed");

                RenderEvent::Error(RenderError {
                    generation,
                    message: error.to_string(),
                })
            }
        };

        shared
            .last_completed_generation
            .store(generation, Ordering::Release);
        shared.sink.submit(event);
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
