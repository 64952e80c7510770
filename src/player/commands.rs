// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! MPV-backed streaming engine.
//!
//! The worker owns a `libmpv` handle configured for network playback (no
//! video, a read-ahead cache, a bounded network timeout). It alternates
//! between draining [`AudioPlayerCommand`]s from the UI and polling MPV,
//! translating property changes and end-of-file notices into [`AppEvent`]s.

use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};

use anyhow::{Context, Result};
use mpv::{EndFileReason, Format, MpvHandler};
use tracing::{debug, info, warn};

use crate::{
    events::AppEvent,
    player::{AudioPlayer, PlayerState, StreamOptions, stream::StreamTracker},
};

const EVENT_POLL_SECS: f64 = 0.05;

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    PlayUrl(String),
    TogglePause,
    Seek(i32),
    Stop,
    AdjustVolume(i32),
    ToggleMute,
}

/// Spawns the streaming worker thread.
///
/// If the worker fails, the failure is broadcast as a fatal application
/// event.
pub(crate) fn spawn_player_worker(
    options: StreamOptions,
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let result = PlayerWorker::new(&options, event_tx.clone()).and_then(|mut worker| worker.run(&command_rx));

        if let Err(e) = result {
            let _ = event_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:#}", e)));
        }
    });
}

struct PlayerWorker {
    handler: MpvHandler,
    event_tx: Sender<AppEvent>,
    streams: StreamTracker,
    is_paused: bool,
    is_idle: bool,
    state: PlayerState,
}

impl PlayerWorker {
    fn new(options: &StreamOptions, event_tx: Sender<AppEvent>) -> Result<Self> {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder.set_option("vo", "null").context("Failed to disable video output")?;
        builder.set_option("cache", "yes").context("Failed to enable the stream cache")?;
        builder
            .set_option("cache-secs", options.cache_secs as f64)
            .context("Failed to set the stream cache size")?;
        builder
            .set_option("network-timeout", options.network_timeout_secs as f64)
            .context("Failed to set the network timeout")?;

        let mut handler = builder.build().context("Failed to build MPV handler")?;

        handler
            .observe_property::<&str>("media-title", 0)
            .context("Failed to observe media-title")?;
        for name in ["duration", "time-pos", "volume"] {
            handler
                .observe_property::<f64>(name, 0)
                .with_context(|| format!("Failed to observe {}", name))?;
        }
        for name in ["pause", "idle-active"] {
            handler
                .observe_property::<bool>(name, 0)
                .with_context(|| format!("Failed to observe {}", name))?;
        }

        Ok(Self {
            handler,
            event_tx,
            streams: StreamTracker::default(),
            is_paused: false,
            is_idle: true,
            state: PlayerState::Stopped,
        })
    }

    /// Runs until the application drops its end of the command channel.
    fn run(&mut self, command_rx: &Receiver<AudioPlayerCommand>) -> Result<()> {
        info!("Audio worker started");

        while self.drain_commands(command_rx)? {
            if let Some(event) = self.poll_mpv() {
                self.send(event)?;
            }
        }

        info!("Audio worker stopped");
        Ok(())
    }

    /// Returns `false` once the command channel is closed.
    fn drain_commands(&mut self, command_rx: &Receiver<AudioPlayerCommand>) -> Result<bool> {
        loop {
            match command_rx.try_recv() {
                Ok(command) => self.execute(command)?,
                Err(TryRecvError::Empty) => return Ok(true),
                Err(TryRecvError::Disconnected) => return Ok(false),
            }
        }
    }

    fn execute(&mut self, command: AudioPlayerCommand) -> Result<()> {
        debug!(?command, "Audio command");

        match command {
            AudioPlayerCommand::PlayUrl(url) => {
                // "replace" releases the current stream before the new one
                if let Err(e) = self.handler.command(&["loadfile", &url, "replace"]) {
                    warn!(%url, error = %e, "Failed to load stream");
                    self.send(AppEvent::Error(format!("Failed to load stream: {}", e)))?;
                    return Ok(());
                }
                self.streams.loading(url);
                self.handler.set_property("pause", false)?;
            }
            AudioPlayerCommand::TogglePause => self.handler.command(&["cycle", "pause"])?,
            AudioPlayerCommand::Seek(delta) => {
                self.handler.command(&["seek", &delta.to_string(), "relative"])?
            }
            AudioPlayerCommand::Stop => {
                self.handler.command(&["stop"])?;
                self.streams.stopped();
            }
            AudioPlayerCommand::AdjustVolume(delta) => {
                self.handler.command(&["add", "volume", &delta.to_string()])?
            }
            AudioPlayerCommand::ToggleMute => self.handler.command(&["cycle", "mute"])?,
        }

        Ok(())
    }

    /// Waits briefly for one MPV event and maps it to an application event.
    ///
    /// Player state transitions are sent from here directly, before the
    /// mapped event.
    fn poll_mpv(&mut self) -> Option<AppEvent> {
        let event = match self.handler.wait_event(EVENT_POLL_SECS)? {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("media-title", Format::Str(title)) => Some(AppEvent::TitleChanged(title.to_string())),
                ("duration", Format::Double(duration)) => Some(AppEvent::DurationChanged(duration as u64)),
                ("pause", Format::Flag(pause)) => {
                    self.is_paused = pause;
                    None
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(AppEvent::TimeChanged(seconds))
                }
                ("volume", Format::Double(volume)) => {
                    Some(AppEvent::VolumeChanged(volume.round() as u32))
                }
                ("idle-active", Format::Flag(idle)) => {
                    self.is_idle = idle;
                    None
                }
                _ => None,
            },

            mpv::Event::StartFile => {
                self.streams.started();
                None
            }

            mpv::Event::EndFile(Ok(EndFileReason::MPV_END_FILE_REASON_EOF)) => {
                self.streams.ended().map(AppEvent::TrackFinished)
            }
            mpv::Event::EndFile(Ok(reason)) => {
                debug!(?reason, "Stream ended");
                self.streams.ended();
                None
            }
            mpv::Event::EndFile(Err(e)) => {
                let url = self.streams.ended().unwrap_or_default();
                warn!(%url, error = %e, "Stream failed");
                Some(AppEvent::Error(format!("Unable to play the selected song: {}", e)))
            }

            _ => None,
        };

        let state = AudioPlayer::player_state(self.is_paused, self.is_idle);
        if state != self.state {
            self.state = state;
            if self.event_tx.send(AppEvent::PlayerStateChanged(state)).is_err() {
                return None;
            }
        }

        event
    }

    fn send(&self, event: AppEvent) -> Result<()> {
        self.event_tx.send(event).context("Failed to send player event")
    }
}
