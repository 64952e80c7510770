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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! such as the catalog HTTP request, from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into network
//! operations and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to by events.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{error, warn};

use crate::{config::AppConfig, events::AppEvent, http::CatalogClient};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchCatalog,
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread builds its own HTTP client and enters a blocking loop,
/// listening for incoming [`AppTask`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let client = CatalogClient::new(&config);

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                event_tx: &event_tx,
                client: client.as_ref().map_err(|e| e.to_string()),
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    client: Result<&'a CatalogClient, String>,
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result back
/// through the application event channel.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchCatalog => fetch_catalog(ctx),
    }
}

fn fetch_catalog(ctx: &TaskContext) -> Result<()> {
    let client = match &ctx.client {
        Ok(client) => *client,
        Err(message) => {
            error!(%message, "HTTP client unavailable");
            ctx.event_tx.send(AppEvent::CatalogFailed(message.clone()))?;
            return Ok(());
        }
    };

    match client.fetch_catalog() {
        Ok(songs) => ctx.event_tx.send(AppEvent::CatalogLoaded(songs))?,
        Err(e) => {
            warn!(error = %e, "Catalog fetch failed");
            ctx.event_tx.send(AppEvent::CatalogFailed(e.to_string()))?;
        }
    }

    Ok(())
}
