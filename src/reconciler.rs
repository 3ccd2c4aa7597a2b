// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness reconciliation over a step-only light API.
//!
//! Cloud lights cannot be set to an absolute brightness; they only accept
//! "one level brighter" and "one level darker". [`BrightnessReconciler`]
//! drives the tracked brightness toward a target by issuing one step at a
//! time and recomputing the remaining distance after every round trip.
//!
//! # Algorithm
//!
//! Each iteration compares `floor(current * 9 / 100)` with
//! `floor(target * 9 / 100)`:
//!
//! - levels differ: issue one step toward the target, then move `current` by
//!   `round(|target - current| / |level difference|)`, at least 1, kept inside
//!   the brightness band of the neighbouring level
//! - levels match: snap `current` to `target` and stop
//!
//! The target is re-read at every iteration, so a new target set while a
//! step is in flight is honoured by the next step. At most one loop runs per
//! reconciler; [`BrightnessReconciler::set_target`] during a running loop only
//! records the value.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use remo_bridge::reconciler::{BrightnessReconciler, StepDirection, StepDriver};
//! use remo_bridge::types::Brightness;
//!
//! struct Noop;
//!
//! impl StepDriver for Noop {
//!     async fn step(&self, _direction: StepDirection) -> remo_bridge::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> remo_bridge::Result<()> {
//! let reconciler = Arc::new(BrightnessReconciler::new(Noop));
//! assert_eq!(reconciler.current(), Brightness::MAX);
//!
//! reconciler.set_target(Brightness::new(40)?).await.unwrap()?;
//! assert_eq!(reconciler.current().value(), 40);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::error::Error;
use crate::types::{Brightness, LightButton};

/// Direction of a single step command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// One level brighter.
    Up,
    /// One level darker.
    Down,
}

impl StepDirection {
    /// The light button that performs this step.
    #[must_use]
    pub const fn button(self) -> LightButton {
        match self {
            Self::Up => LightButton::BrightUp,
            Self::Down => LightButton::BrightDown,
        }
    }
}

/// Something that can move a light one level up or down.
pub trait StepDriver: Send + Sync {
    /// Performs one step.
    ///
    /// # Errors
    ///
    /// Returns error if the remote call fails.
    fn step(&self, direction: StepDirection) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Snapshot of the reconciler's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcilerState {
    current: Brightness,
    target: Brightness,
    running: bool,
}

impl ReconcilerState {
    fn new(initial: Brightness) -> Self {
        Self {
            current: initial,
            target: initial,
            running: false,
        }
    }

    /// Tracked brightness of the device.
    #[must_use]
    pub fn current(&self) -> Brightness {
        self.current
    }

    /// Brightness the loop is driving toward.
    #[must_use]
    pub fn target(&self) -> Brightness {
        self.target
    }

    /// Whether a reconciliation loop is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Outcome of comparing current and target brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Settled,
    Step {
        direction: StepDirection,
        next: Brightness,
    },
}

fn plan(current: Brightness, target: Brightness) -> Plan {
    let from = current.level();
    let to = target.level();
    let levels = from.steps_to(to);
    if levels == 0 {
        return Plan::Settled;
    }

    // Levels are monotonic in brightness, so delta and levels share a sign.
    let delta = (i32::from(target.value()) - i32::from(current.value())).abs();
    let levels_left = levels.abs();
    let magnitude = ((2 * delta + levels_left) / (2 * levels_left)).max(1);

    let (direction, moved) = if levels > 0 {
        (StepDirection::Up, i32::from(current.value()) + magnitude)
    } else {
        (StepDirection::Down, i32::from(current.value()) - magnitude)
    };

    let band = from.step_toward(to).band();
    let next = moved.clamp(i32::from(*band.start()), i32::from(*band.end()));

    Plan::Step {
        direction,
        next: Brightness::clamped(next),
    }
}

/// Clears the `running` flag when the loop exits, unless the loop already
/// cleared it while holding the state lock.
struct RunningGuard<'a> {
    state: &'a Mutex<ReconcilerState>,
    armed: bool,
}

impl<'a> RunningGuard<'a> {
    fn acquire(state: &'a Mutex<ReconcilerState>) -> Option<Self> {
        let mut locked = state.lock();
        if locked.running {
            return None;
        }
        locked.running = true;
        Some(Self { state, armed: true })
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.lock().running = false;
        }
    }
}

/// Drives a light's brightness toward a target through step commands.
///
/// Created with both current and target brightness at 100%.
#[derive(Debug)]
pub struct BrightnessReconciler<D> {
    driver: D,
    state: Mutex<ReconcilerState>,
}

impl<D: StepDriver> BrightnessReconciler<D> {
    /// Creates a reconciler assuming the light is at full brightness.
    #[must_use]
    pub fn new(driver: D) -> Self {
        Self::with_brightness(driver, Brightness::MAX)
    }

    /// Creates a reconciler with a known starting brightness.
    #[must_use]
    pub fn with_brightness(driver: D, initial: Brightness) -> Self {
        Self {
            driver,
            state: Mutex::new(ReconcilerState::new(initial)),
        }
    }

    /// Returns the step driver.
    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Returns the tracked brightness. Never touches the network.
    #[must_use]
    pub fn current(&self) -> Brightness {
        self.state.lock().current
    }

    /// Returns the latest requested brightness.
    #[must_use]
    pub fn target(&self) -> Brightness {
        self.state.lock().target
    }

    /// Returns `true` while a reconciliation loop is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.lock().running
    }

    /// Returns a copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> ReconcilerState {
        *self.state.lock()
    }

    /// Records a new target and starts reconciliation on a background task.
    ///
    /// Returns immediately. The returned handle resolves to the outcome of
    /// this call's reconciliation attempt; it resolves to `Ok(())` right away
    /// when another loop is already running, since that loop picks up the new
    /// target. Dropping the handle does not cancel anything.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn set_target(self: &Arc<Self>, target: Brightness) -> JoinHandle<Result<(), Error>>
    where
        D: 'static,
    {
        self.state.lock().target = target;
        tracing::debug!(target = %target, "Brightness target updated");

        let this = Arc::clone(self);
        tokio::spawn(async move {
            let result = this.reconcile().await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "Brightness reconciliation failed");
            }
            result
        })
    }

    /// Runs the reconciliation loop until the levels match.
    ///
    /// Returns `Ok(())` immediately if a loop is already running. Brightness
    /// applied by earlier successful steps is kept when a step fails.
    ///
    /// # Errors
    ///
    /// Returns the first step failure. The running flag is cleared before
    /// the error is returned.
    pub async fn reconcile(&self) -> Result<(), Error> {
        let Some(mut guard) = RunningGuard::acquire(&self.state) else {
            tracing::trace!("Reconciliation already running");
            return Ok(());
        };

        loop {
            let (direction, next) = {
                let mut state = self.state.lock();
                match plan(state.current, state.target) {
                    Plan::Settled => {
                        state.current = state.target;
                        // Released under the lock so a concurrent set_target
                        // either sees the loop running or can start a new one.
                        state.running = false;
                        guard.disarm();
                        tracing::debug!(brightness = %state.current, "Brightness settled");
                        return Ok(());
                    }
                    Plan::Step { direction, next } => (direction, next),
                }
            };

            tracing::debug!(direction = ?direction, next = %next, "Stepping brightness");
            self.driver.step(direction).await?;
            self.state.lock().current = next;
        }
    }
}
