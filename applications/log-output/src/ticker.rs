/// Periodic heartbeat lines
use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;
use todo_core::SessionId;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// `"{ISO timestamp}: {id}"`
pub fn tick_line(now: DateTime<Utc>, id: &SessionId) -> String {
    format!("{}: {}", now.to_rfc3339_opts(SecondsFormat::Millis, true), id)
}

/// Emit one line with a fresh id every `period` until `shutdown` flips to true.
///
/// The first line comes one full period after start.
pub async fn run_ticker<F>(period: Duration, mut shutdown: watch::Receiver<bool>, mut emit: F)
where
    F: FnMut(String),
{
    let mut ticks = interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                emit(tick_line(Utc::now(), &SessionId::generate()));
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    tracing::debug!("Ticker stopped");
                    return;
                }
            }
        }
    }
}
