//! Timer-driven driver for [`Typewriter`].
//!
//! One tokio task owns the state machine. Each loop iteration sleeps for
//! [`Typewriter::delay`], applies one transition and publishes the new frame
//! on a `watch` channel, so there is never more than one pending timer.
//! Observers poll [`Animator::current`] or await changes on
//! [`Animator::subscribe`].

use super::{Frame, Typewriter};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct Animator {
    frames: watch::Receiver<Frame>,
    /// Set by `dispose`. The task advances and publishes only while holding
    /// this lock with the flag clear.
    stopped: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

fn lock(flag: &Mutex<bool>) -> MutexGuard<'_, bool> {
    flag.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Animator {
    /// Start animating. Must be called from within a tokio runtime.
    pub fn spawn(mut typewriter: Typewriter) -> Self {
        let (tx, rx) = watch::channel(typewriter.frame());
        let stopped = Arc::new(Mutex::new(false));
        let task_stopped = Arc::clone(&stopped);

        let task = tokio::spawn(async move {
            tracing::debug!(timing = ?typewriter.timing(), "typewriter started");
            loop {
                let delay = typewriter.delay();
                if delay.is_zero() {
                    // zero-delay transitions still give other tasks a turn
                    tokio::task::yield_now().await;
                } else {
                    tokio::time::sleep(delay).await;
                }

                let previous = typewriter.phrase_index();
                {
                    let stopped = lock(&task_stopped);
                    if *stopped {
                        break;
                    }
                    let frame = typewriter.advance();
                    tx.send_replace(frame);
                }
                if typewriter.phrase_index() != previous {
                    tracing::trace!(
                        phrase = typewriter.phrase_index(),
                        mode = ?typewriter.mode(),
                        "next phrase"
                    );
                }
            }
        });

        Self {
            frames: rx,
            stopped,
            task: Some(task),
        }
    }

    /// The most recently published frame.
    pub fn current(&self) -> Frame {
        self.frames.borrow().clone()
    }

    /// A receiver that is notified on every published frame. It closes once
    /// the animator is disposed.
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the pending timer and stop the task. Safe to call repeatedly.
    ///
    /// Once this returns no further frame is published, even if the task is
    /// mid-poll on another worker thread.
    pub fn dispose(&mut self) {
        *lock(&self.stopped) = true;
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(last = ?self.frames.borrow().text, "typewriter disposed");
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.dispose();
    }
}
