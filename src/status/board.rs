use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{Arc, RwLock},
};

use tokio::time::{sleep_until, Duration, Instant};

use crate::timing::{
    clock::Clock,
    schedule::{evaluate, StoreStatus},
};

use super::renderer::{render, StatusDisplay, StatusError};

/// Holds the last rendered store status.
///
/// The board renders once when it is created, so readers never see a
/// placeholder. `run` keeps it fresh on a fixed period.
pub struct StatusBoard {
    clock: Arc<dyn Clock>,
    display: RwLock<StatusDisplay>,
}

impl StatusBoard {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let display = render(Self::evaluate_now(clock.as_ref()));
        Self {
            clock,
            display: RwLock::new(display),
        }
    }

    pub fn current(&self) -> StatusDisplay {
        match self.display.read() {
            Ok(display) => display.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn refresh(&self) -> StatusDisplay {
        let outcome = Self::evaluate_now(self.clock.as_ref());
        if let Err(err) = &outcome {
            tracing::warn!("Showing closed status after a failed evaluation: {}", err);
        }
        let display = render(outcome);
        match self.display.write() {
            Ok(mut slot) => *slot = display.clone(),
            Err(poisoned) => *poisoned.into_inner() = display.clone(),
        }
        display
    }

    pub async fn run(self: Arc<Self>, interval: Duration) {
        tracing::info!("Refreshing store status every {:?}", interval);
        loop {
            sleep_until(Instant::now() + interval).await;
            let shown = self.refresh();
            tracing::debug!(text = shown.text(), class = ?shown.class(), "Store status refreshed");
        }
    }

    fn evaluate_now(clock: &dyn Clock) -> Result<StoreStatus, StatusError> {
        catch_unwind(AssertUnwindSafe(|| {
            let moment = clock.now();
            tracing::trace!(
                day = moment.day_of_week(),
                hour = moment.hour(),
                minute = moment.minute(),
                "Evaluating store status"
            );
            evaluate(moment)
        }))
        .map_err(|payload| StatusError::Panicked(panic_message(payload.as_ref())))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
