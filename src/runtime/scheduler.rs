//! The running toy.
//!
//! Three tasks cooperate:
//! - the refresh task fetches on the refresh cadence or on demand, filters
//!   the result by favorite team and forwards it tagged with a generation
//! - the tick task emits scroll/animation ticks on the fixed tick cadence
//! - the display task owns the [`DisplayController`] and the renderer and is
//!   the only place display state changes
//!
//! Settings are snapshotted at the start of every cycle.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use super::events::{DisplayMessage, ToyAction, ToyEvent};
use crate::config::SettingsHandle;
use crate::constants::cadence;
use crate::data_fetcher::api::MatchFetcher;
use crate::data_fetcher::filter::filter_matches;
use crate::display::{DisplayController, DisplayEvent, FrameRenderer};

pub struct ScoreToy {
    messages: mpsc::Sender<DisplayMessage>,
    refresh_now: Arc<Notify>,
    shutdown: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl ScoreToy {
    /// Starts fetching and rendering with the standard tick cadence.
    ///
    /// The first fetch starts immediately. Must be called inside a tokio
    /// runtime.
    pub fn start<R>(fetcher: Arc<MatchFetcher>, settings: SettingsHandle, renderer: R) -> Self
    where
        R: FrameRenderer + 'static,
    {
        Self::start_with_tick(
            fetcher,
            settings,
            renderer,
            Duration::from_millis(cadence::TICK_MS),
        )
    }

    pub fn start_with_tick<R>(
        fetcher: Arc<MatchFetcher>,
        settings: SettingsHandle,
        renderer: R,
        tick: Duration,
    ) -> Self
    where
        R: FrameRenderer + 'static,
    {
        let (messages, receiver) = mpsc::channel(cadence::EVENT_CHANNEL_CAPACITY);
        let (shutdown, shutdown_rx) = watch::channel(false);
        let refresh_now = Arc::new(Notify::new());

        let tasks = vec![
            tokio::spawn(refresh_loop(
                fetcher,
                settings.clone(),
                messages.clone(),
                Arc::clone(&refresh_now),
                shutdown_rx.clone(),
            )),
            tokio::spawn(tick_loop(tick, messages.clone(), shutdown_rx.clone())),
            tokio::spawn(display_loop(renderer, settings, receiver, shutdown_rx)),
        ];

        info!("Score toy started");
        Self {
            messages,
            refresh_now,
            shutdown,
            tasks,
        }
    }

    /// Routes a device event to the display or the refresh task
    pub async fn send(&self, event: ToyEvent) {
        debug!("Received {event:?}");
        match event.action() {
            ToyAction::Refresh => self.trigger_refresh(),
            ToyAction::Display(display_event) => {
                if self
                    .messages
                    .send(DisplayMessage::Event(display_event))
                    .await
                    .is_err()
                {
                    debug!("Display task has stopped, dropping {event:?}");
                }
            }
        }
    }

    /// Fetches as soon as the refresh task is idle, without waiting for
    /// the refresh interval
    pub fn trigger_refresh(&self) {
        self.refresh_now.notify_one();
    }

    /// Stops both cadences and waits for every task to finish.
    ///
    /// The display is turned off before this returns and no frame is drawn
    /// afterwards.
    pub async fn shutdown(self) {
        info!("Shutting down score toy");
        self.shutdown.send_replace(true);
        for result in join_all(self.tasks).await {
            if let Err(e) = result {
                error!("Score toy task ended abnormally: {e}");
            }
        }
    }
}

async fn refresh_loop(
    fetcher: Arc<MatchFetcher>,
    settings: SettingsHandle,
    messages: mpsc::Sender<DisplayMessage>,
    refresh_now: Arc<Notify>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut generation: u64 = 0;

    loop {
        let mut fetch = fetcher.spawn_fetch();
        let joined = tokio::select! {
            joined = &mut fetch => joined,
            _ = shutdown.changed() => {
                fetch.abort();
                break;
            }
        };

        match joined {
            Ok(result) => {
                generation += 1;
                let config = settings.snapshot();
                let result =
                    result.map(|matches| filter_matches(matches, &config.favorite_teams));
                let message = DisplayMessage::Refreshed { generation, result };
                if messages.send(message).await.is_err() {
                    break;
                }
            }
            Err(e) => error!("Fetch task failed: {e}"),
        }

        let interval = settings.snapshot().refresh_interval();
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = refresh_now.notified() => debug!("Manual refresh requested"),
            _ = shutdown.changed() => break,
        }
    }
    debug!("Refresh task stopped");
}

async fn tick_loop(
    tick: Duration,
    messages: mpsc::Sender<DisplayMessage>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + tick, tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Ticks are lossy: a busy display skips frames instead of queueing them
                match messages.try_send(DisplayMessage::Event(DisplayEvent::Tick)) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                    Err(mpsc::error::TrySendError::Closed(_)) => break,
                }
            }
            _ = shutdown.changed() => break,
        }
    }
    debug!("Tick task stopped");
}

async fn display_loop<R: FrameRenderer>(
    mut renderer: R,
    settings: SettingsHandle,
    mut messages: mpsc::Receiver<DisplayMessage>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut controller = DisplayController::new();
    let mut latest_generation: u64 = 0;

    if let Err(e) = renderer.render(&controller.render(&settings.snapshot())) {
        warn!("Failed to render frame: {e}");
    }

    loop {
        let message = tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            message = messages.recv() => match message {
                Some(message) => message,
                None => break,
            },
        };

        let event = match message {
            DisplayMessage::Refreshed { generation, result } => {
                if generation <= latest_generation {
                    debug!("Dropping stale refresh {generation} (latest {latest_generation})");
                    continue;
                }
                latest_generation = generation;
                DisplayEvent::Refresh(result)
            }
            DisplayMessage::Event(event) => event,
        };

        if let Some(frame) = controller.handle_event(event, &settings.snapshot())
            && let Err(e) = renderer.render(&frame)
        {
            warn!("Failed to render frame: {e}");
        }
    }

    if let Err(e) = renderer.turn_off() {
        warn!("Failed to turn off display: {e}");
    }
    debug!("Display task stopped");
}
