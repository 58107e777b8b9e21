//! Fire-and-forget worker launcher.
//!
//! Starts N OS threads running the same task and hands back their handles
//! without waiting on any of them. Joining is opt-in through
//! [`WorkerHandle::join`] or [`join_all`].

use std::any::Any;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Worker count used when nothing else is configured.
pub const DEFAULT_WORKER_COUNT: usize = 5;

/// Line each worker writes by default.
pub const WORKER_LINE: &str = "Worker";

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to spawn worker {index}: {source}")]
    Spawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("Worker '{name}' panicked: {message}")]
    WorkerPanicked { name: String, message: String },
}

/// Handle to one launched worker thread.
///
/// Dropping the handle detaches the thread; it keeps running until its task
/// returns or the process exits.
#[derive(Debug)]
pub struct WorkerHandle {
    index: usize,
    name: String,
    inner: JoinHandle<()>,
}

impl WorkerHandle {
    /// Position of this worker in launch order, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Thread name (`worker-<index>`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the task has returned (or panicked). Never blocks.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Block until the worker completes.
    ///
    /// A panic inside the task is reported here and nowhere else.
    pub fn join(self) -> Result<(), LaunchError> {
        let WorkerHandle { name, inner, .. } = self;
        inner.join().map_err(|payload| {
            let message = panic_message(payload.as_ref());
            warn!(worker = %name, %message, "worker panicked");
            LaunchError::WorkerPanicked { name, message }
        })
    }
}

/// Launch `count` threads, each running `task` once.
///
/// Returns immediately with one handle per thread, in launch order. A count of
/// zero launches nothing. If the OS refuses to create a thread the error names
/// the failing index; workers launched before it keep running detached.
pub fn launch<F>(count: usize, task: F) -> Result<Vec<WorkerHandle>, LaunchError>
where
    F: Fn() + Send + Sync + 'static,
{
    let task = Arc::new(task);
    let mut handles = Vec::with_capacity(count);

    for index in 0..count {
        let name = format!("worker-{index}");
        let task = Arc::clone(&task);
        let inner = thread::Builder::new()
            .name(name.clone())
            .spawn(move || (*task)())
            .map_err(|source| LaunchError::Spawn { index, source })?;

        debug!(worker = %name, "worker launched");
        handles.push(WorkerHandle { index, name, inner });
    }

    info!(count, "launched workers");
    Ok(handles)
}

/// Launch `count` workers that each print `message` to stdout.
pub fn launch_printing(
    count: usize,
    message: impl Into<String>,
) -> Result<Vec<WorkerHandle>, LaunchError> {
    let message = message.into();
    launch(count, move || {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{message}") {
            warn!(error = %e, "worker could not write to stdout");
        }
    })
}

/// Launch `count` workers that each append `message` as one line to `sink`.
pub fn launch_with_sink<W>(
    count: usize,
    message: impl Into<String>,
    sink: Arc<Mutex<W>>,
) -> Result<Vec<WorkerHandle>, LaunchError>
where
    W: Write + Send + 'static,
{
    let message = message.into();
    launch(count, move || {
        // A poisoned sink still holds whole lines.
        let mut out = sink.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{message}") {
            warn!(error = %e, "worker could not write to sink");
        }
    })
}

/// Join every handle in launch order. Returns how many workers panicked.
pub fn join_all(handles: Vec<WorkerHandle>) -> usize {
    handles
        .into_iter()
        .map(WorkerHandle::join)
        .filter(Result::is_err)
        .count()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
