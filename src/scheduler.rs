use crate::display::DisplaySink;
use crate::job::PollingJob;
use anyhow::Context;
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

pub struct Scheduler {
    period: Duration,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Prepares the ledger, polls once right away, then every `period`
    /// until `shutdown` resolves. The job runs inline, so a slow poll
    /// delays the next tick instead of overlapping with it.
    /// The first failing poll ends the loop with its error.
    pub async fn run<D, S>(&self, job: &mut PollingJob<D>, shutdown: S) -> anyhow::Result<()>
    where
        D: DisplaySink,
        S: Future<Output = ()>,
    {
        let ledger = job.ledger();
        let created = ledger
            .ensure_header()
            .with_context(|| format!("failed to create {}", ledger.path().display()))?;
        if created {
            tracing::info!("Created ledger {}", ledger.path().display());
        }

        job.run().await?;

        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutting down...");
                    return Ok(());
                }
                _ = interval.tick() => {
                    job.run().await?;
                }
            }
        }
    }
}
