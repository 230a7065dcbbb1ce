use crate::core::message::compose_message;
use crate::core::{Delivery, Pipeline};
use crate::utils::error::Result;

pub const DRY_RUN_LINK: &str = "(playlist not published: dry run)";

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Delivery> {
        tracing::info!("Fetching venue schedule...");
        let schedule = self.pipeline.extract().await?;
        tracing::info!("Found {} show nights", schedule.len());

        tracing::info!("Building track list...");
        let draft = self.pipeline.transform(schedule).await?;
        tracing::info!(
            "Collected {} tracks ({} artists matched, {} skipped)",
            draft.tracks.len(),
            draft.matched.len(),
            draft.skipped.len()
        );

        tracing::info!("Publishing playlist and sending text...");
        let delivery = self.pipeline.load(draft).await?;

        Ok(delivery)
    }

    /// Runs extract and transform only, returning the message that would be sent.
    pub async fn dry_run(&self) -> Result<String> {
        let schedule = self.pipeline.extract().await?;
        let draft = self.pipeline.transform(schedule).await?;
        tracing::info!(
            "Dry run: {} tracks would be published ({} artists skipped)",
            draft.tracks.len(),
            draft.skipped.len()
        );

        let (dates, performers) = draft.schedule.split();
        Ok(compose_message(&dates, &performers, DRY_RUN_LINK))
    }
}
