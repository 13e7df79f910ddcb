//! `gloo-timers` driver for [`views::Tracker`].
//!
//! DESIGN
//! ======
//! The tracker lives in a signal so views re-render from it directly. Each
//! effect it returns is performed here: requests run on `spawn_local`, the
//! repeating timer is a sleep loop tagged with a [`TimerGate`] generation, and
//! notices go to the shared queue. An alive flag cleared in `on_cleanup`
//! guards every completion, so nothing writes to a disposed view. A tick that
//! fires while an earlier request is still out is skipped ([`InFlight`]), so a
//! slow backend never sees overlapping status requests from one poller.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use leptos::prelude::*;
use records::{ValidationResult, WorkflowJob};
use views::{Effect, FetchReason, NoticeQueue, Pollable, Tracker};

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::{auth, clock, notify};

/// Where a tracker's records come from.
pub trait PollSource: Send + Sync + 'static {
    type Record: Pollable + Clone + Send + Sync + 'static;

    fn fetch(&self) -> impl Future<Output = Result<Self::Record, String>>;

    fn start(&self) -> impl Future<Output = Result<(), String>>;
}

/// Validation of one object. Builds its API handle per request so token
/// refreshes are picked up.
pub struct ValidationFeed {
    pub config: ClientConfig,
    pub auth: RwSignal<AuthState>,
    pub object_id: i64,
}

impl PollSource for ValidationFeed {
    type Record = ValidationResult;

    async fn fetch(&self) -> Result<ValidationResult, String> {
        auth::api(&self.config, self.auth).validation(self.object_id).await
    }

    async fn start(&self) -> Result<(), String> {
        auth::api(&self.config, self.auth).start_validation(self.object_id).await
    }
}

pub struct JobFeed {
    pub config: ClientConfig,
    pub auth: RwSignal<AuthState>,
    pub job_id: i64,
}

impl PollSource for JobFeed {
    type Record = WorkflowJob;

    async fn fetch(&self) -> Result<WorkflowJob, String> {
        auth::api(&self.config, self.auth).get_job(self.job_id).await
    }

    async fn start(&self) -> Result<(), String> {
        Err(format!("job {} was started at submission", self.job_id))
    }
}

/// Generation counter for the single repeating timer. Arming bumps the
/// generation; a sleeping loop exits once its generation is stale.
#[derive(Debug, Default)]
pub struct TimerGate {
    generation: AtomicU64,
}

impl TimerGate {
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    pub fn disarm(&self) {
        self.arm();
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == generation
    }
}

/// Count of outstanding status requests. User-initiated fetches always go
/// out; timer ticks only claim an idle slot.
#[derive(Debug, Default)]
pub struct InFlight {
    outstanding: AtomicUsize,
}

impl InFlight {
    pub fn begin(&self) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
    }

    /// Claim the slot for a tick; `false` when a request is still out.
    pub fn try_begin_tick(&self) -> bool {
        self.outstanding
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn finish(&self) {
        let _ = self
            .outstanding
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    pub fn is_idle(&self) -> bool {
        self.outstanding.load(Ordering::Acquire) == 0
    }
}

pub struct Poller<S: PollSource> {
    source: Arc<S>,
    tracker: RwSignal<Tracker<S::Record>>,
    notices: RwSignal<NoticeQueue>,
    alive: Arc<AtomicBool>,
    timer: Arc<TimerGate>,
    in_flight: Arc<InFlight>,
}

impl<S: PollSource> Clone for Poller<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            tracker: self.tracker,
            notices: self.notices,
            alive: Arc::clone(&self.alive),
            timer: Arc::clone(&self.timer),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

/// Mount a tracker for the current component. Unmounting the component
/// unmounts the tracker and stops its timer.
pub fn use_poller<S: PollSource>(source: S, tracker: Tracker<S::Record>) -> Poller<S> {
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let tracker = RwSignal::new(tracker);
    let alive = Arc::new(AtomicBool::new(true));

    let alive_cleanup = Arc::clone(&alive);
    on_cleanup(move || {
        alive_cleanup.store(false, Ordering::Relaxed);
        tracker.try_update(|t| {
            let _ = t.unmount();
        });
    });

    Poller {
        source: Arc::new(source),
        tracker,
        notices,
        alive,
        timer: Arc::new(TimerGate::default()),
        in_flight: Arc::new(InFlight::default()),
    }
}

impl<S: PollSource> Poller<S> {
    pub fn tracker(&self) -> RwSignal<Tracker<S::Record>> {
        self.tracker
    }

    /// Fetch and poll while the result is live.
    pub fn refresh(&self) {
        self.dispatch(Tracker::refresh);
    }

    /// Ask the backend to (re)run, then poll.
    pub fn start(&self) {
        self.dispatch(Tracker::start);
    }

    pub fn stop(&self) {
        self.dispatch(Tracker::stop_polling);
    }

    pub fn dismiss_error(&self) {
        if self.is_alive() {
            self.tracker.update(Tracker::dismiss_error);
        }
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    fn dispatch(&self, op: impl FnOnce(&mut Tracker<S::Record>) -> Vec<Effect>) {
        if !self.is_alive() {
            return;
        }
        let effects = self.tracker.try_update(op).unwrap_or_default();
        self.perform(effects);
    }

    fn perform(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch(reason) => {
                    let claimed = if reason == FetchReason::Tick {
                        self.in_flight.try_begin_tick()
                    } else {
                        self.in_flight.begin();
                        true
                    };
                    if !claimed {
                        continue;
                    }
                    let this = self.clone();
                    spawn(async move {
                        let result = this.source.fetch().await;
                        this.in_flight.finish();
                        this.dispatch(|t| t.on_status(reason, result, clock::now()));
                    });
                }
                Effect::Start => {
                    let this = self.clone();
                    spawn(async move {
                        let result = this.source.start().await;
                        this.dispatch(|t| t.on_started(result));
                    });
                }
                Effect::StartTimer(interval) => {
                    let generation = self.timer.arm();
                    let this = self.clone();
                    spawn(async move {
                        loop {
                            sleep(interval).await;
                            if !this.is_alive() || !this.timer.is_current(generation) {
                                break;
                            }
                            this.dispatch(Tracker::tick);
                        }
                    });
                }
                Effect::StopTimer => self.timer.disarm(),
                Effect::Notify(notice) => {
                    if self.is_alive() {
                        notify::notify(self.notices, notice);
                    }
                }
            }
        }
    }
}

fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

async fn sleep(interval: std::time::Duration) {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(interval).await;
    #[cfg(not(feature = "csr"))]
    let _ = interval;
}
