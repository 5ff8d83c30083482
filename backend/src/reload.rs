//! Rebuilds the tournament or replay tables from their upstream API.
//!
//! A reload truncates its tables, fetches a fresh snapshot, flattens it and
//! inserts everything again. Each step commits on its own, a failure part way
//! through leaves whatever was written up to that point. Progress is written
//! to the task status log: one `started` entry and then exactly one `ended` or
//! `error` entry per task.

use std::sync::Arc;

use crate::error::Error;
use crate::storage::{Crosswalk, Storage, Table};
use crate::upstream::{ReplaySource, TournamentSource};

mod replay;
mod tournament;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Toornament,
    Ballchasing,
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toornament => "toornament",
            Self::Ballchasing => "ballchasing",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether two reloads of the same source may run at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Reloads of one source can interleave, so one reload's truncate can
    /// run between another one's inserts and rows end up duplicated.
    Unguarded,
    /// Reloads of one source wait for each other.
    #[default]
    Exclusive,
}

/// Rows inserted per table, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadSummary {
    pub rows: Vec<(Table, usize)>,
}

impl ReloadSummary {
    fn push(&mut self, table: Table, count: usize) {
        self.rows.push((table, count));
    }

    pub fn inserted(&self, table: Table) -> usize {
        self.rows
            .iter()
            .filter(|(t, _)| *t == table)
            .map(|(_, count)| count)
            .sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    #[error(transparent)]
    Reload(#[from] Error),
    #[error("Reload task did not run to completion")]
    Join(#[from] tokio::task::JoinError),
}

/// A reload running in the background.
pub struct ReloadHandle {
    pub task_id: uuid::Uuid,
    pub source: Source,
    handle: tokio::task::JoinHandle<Result<ReloadSummary, Error>>,
}

impl ReloadHandle {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(self) -> Result<ReloadSummary, WaitError> {
        Ok(self.handle.await??)
    }
}

struct Inner {
    storage: Arc<dyn Storage>,
    tournaments: Arc<dyn TournamentSource>,
    replays: Arc<dyn ReplaySource>,
    crosswalk: Arc<dyn Crosswalk>,
    policy: ReloadPolicy,
    tournament_lock: tokio::sync::Mutex<()>,
    replay_lock: tokio::sync::Mutex<()>,
}

#[derive(Clone)]
pub struct Reloader {
    inner: Arc<Inner>,
}

impl Reloader {
    pub fn new(
        storage: Arc<dyn Storage>,
        tournaments: Arc<dyn TournamentSource>,
        replays: Arc<dyn ReplaySource>,
        crosswalk: Arc<dyn Crosswalk>,
        policy: ReloadPolicy,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                tournaments,
                replays,
                crosswalk,
                policy,
                tournament_lock: tokio::sync::Mutex::new(()),
                replay_lock: tokio::sync::Mutex::new(()),
            }),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn reload_tournament(&self, task_id: uuid::Uuid, tournament_id: &str) -> Result<ReloadSummary, Error> {
        let _guard = match self.inner.policy {
            ReloadPolicy::Exclusive => Some(self.inner.tournament_lock.lock().await),
            ReloadPolicy::Unguarded => None,
        };

        self.track(
            task_id,
            Source::Toornament,
            tournament::run(&self.inner, tournament_id),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn reload_replays(&self, task_id: uuid::Uuid, group_id: &str) -> Result<ReloadSummary, Error> {
        let _guard = match self.inner.policy {
            ReloadPolicy::Exclusive => Some(self.inner.replay_lock.lock().await),
            ReloadPolicy::Unguarded => None,
        };

        self.track(task_id, Source::Ballchasing, replay::run(&self.inner, group_id))
            .await
    }

    pub fn spawn_tournament<IS>(&self, tournament_id: IS) -> ReloadHandle
    where
        IS: Into<String>,
    {
        let task_id = uuid::Uuid::now_v7();
        let tournament_id = tournament_id.into();
        let reloader = self.clone();

        let handle = tokio::spawn(async move { reloader.reload_tournament(task_id, &tournament_id).await });

        ReloadHandle {
            task_id,
            source: Source::Toornament,
            handle,
        }
    }

    pub fn spawn_replays<IS>(&self, group_id: IS) -> ReloadHandle
    where
        IS: Into<String>,
    {
        let task_id = uuid::Uuid::now_v7();
        let group_id = group_id.into();
        let reloader = self.clone();

        let handle = tokio::spawn(async move { reloader.reload_replays(task_id, &group_id).await });

        ReloadHandle {
            task_id,
            source: Source::Ballchasing,
            handle,
        }
    }

    async fn track<F>(&self, task_id: uuid::Uuid, source: Source, work: F) -> Result<ReloadSummary, Error>
    where
        F: std::future::Future<Output = Result<ReloadSummary, Error>>,
    {
        self.record(
            task_id,
            source,
            common::TaskState::Started,
            format!("{} reload started", source),
            None,
        )
        .await?;
        tracing::info!(%task_id, %source, "Reload started");

        match work.await {
            Ok(summary) => {
                if let Err(e) = self
                    .record(
                        task_id,
                        source,
                        common::TaskState::Ended,
                        format!("{} reload ended", source),
                        None,
                    )
                    .await
                {
                    tracing::error!(%task_id, %source, "Recording reload end: {}", e.detail());
                    return Err(e);
                }
                tracing::info!(%task_id, %source, ?summary, "Reload ended");

                Ok(summary)
            }
            Err(e) => {
                let detail = e.detail();
                tracing::error!(%task_id, %source, "Reload failed: {}", detail);

                let record = serde_json::to_value(e.record()).ok();
                if let Err(log_error) = self
                    .record(
                        task_id,
                        source,
                        common::TaskState::Errored,
                        format!("{} reload error: {}", source, detail),
                        record,
                    )
                    .await
                {
                    tracing::error!(%task_id, "Recording reload failure: {}", log_error);
                }

                Err(e)
            }
        }
    }

    async fn record(
        &self,
        task_id: uuid::Uuid,
        source: Source,
        state: common::TaskState,
        status: String,
        error: Option<serde_json::Value>,
    ) -> Result<(), Error> {
        self.inner
            .storage
            .record_task_status(crate::models::NewTaskStatus {
                task_id,
                source: source.name().to_owned(),
                state: state_name(state).to_owned(),
                status,
                error,
                created_at: chrono::Utc::now(),
            })
            .await?;

        Ok(())
    }
}

pub fn state_name(state: common::TaskState) -> &'static str {
    match state {
        common::TaskState::Started => "started",
        common::TaskState::Ended => "ended",
        common::TaskState::Errored => "errored",
    }
}

pub fn parse_state(name: &str) -> Option<common::TaskState> {
    match name {
        "started" => Some(common::TaskState::Started),
        "ended" => Some(common::TaskState::Ended),
        "errored" => Some(common::TaskState::Errored),
        _ => None,
    }
}

/// Converts a stored status entry into its API form. An unknown state is
/// reported as errored.
pub fn task_status(record: crate::models::TaskStatusRecord) -> common::TaskStatus {
    let error = record
        .error
        .and_then(|value| serde_json::from_value::<common::ErrorRecord>(value).ok());

    common::TaskStatus {
        task_id: record.task_id,
        source: record.source,
        state: parse_state(&record.state).unwrap_or(common::TaskState::Errored),
        status: record.status,
        error,
        created_at: record.created_at,
    }
}
