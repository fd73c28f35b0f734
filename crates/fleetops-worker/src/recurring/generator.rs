//! Recurring load generation orchestrator.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use fleetops_core::result::AppResult;
use fleetops_entity::load::model::CreatedLoad;

use crate::store::{LoadStore, TemplateStore};

use super::{materialize, schedule, sequence};

/// Result of one generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationOutcome {
    /// Number of loads created in this run.
    pub created: usize,
    /// The created loads, in processing order.
    pub loads: Vec<CreatedLoad>,
}

/// Orchestrates schedule matching, sequence allocation, and load
/// materialization for one daily batch run.
///
/// Runs are expected not to overlap: sequence numbers are only
/// guaranteed monotonic across runs when the daily trigger never fires
/// before the previous run completes.
#[derive(Debug)]
pub struct RecurringLoadGenerator {
    templates: Arc<dyn TemplateStore>,
    loads: Arc<dyn LoadStore>,
}

impl RecurringLoadGenerator {
    /// Create a new generator over the given stores.
    pub fn new(templates: Arc<dyn TemplateStore>, loads: Arc<dyn LoadStore>) -> Self {
        Self { templates, loads }
    }

    /// Generate loads for every template due on `date`.
    ///
    /// The year's sequence is resolved once per run and advanced
    /// in-memory, so N matched templates consume N strictly increasing,
    /// contiguous numbers. Templates whose recurring group already has
    /// a load picking up on `date` are skipped and consume no number.
    ///
    /// Any storage error aborts the run; loads inserted earlier in the
    /// same run stay committed, as there is no enclosing transaction
    /// (accepted limitation — the only resumption marker is
    /// `last_generated_at` on the templates that completed).
    pub async fn generate_for_date(&self, date: NaiveDate) -> AppResult<GenerationOutcome> {
        let due: Vec<_> = self
            .templates
            .find_active()
            .await?
            .into_iter()
            .filter(|template| schedule::is_due(template, date))
            .collect();

        if due.is_empty() {
            debug!(%date, "No recurring templates due");
            return Ok(GenerationOutcome::default());
        }

        let year = date.year();
        let last = self.loads.last_load_number_for_year(year).await?;
        let mut next = sequence::next_sequence(last.as_deref());

        let mut created = Vec::new();

        for template in &due {
            if self
                .loads
                .exists_for_group_on(template.recurring_group_id, date)
                .await?
            {
                debug!(
                    template_id = %template.id,
                    %date,
                    "Group already has a load for this date, skipping"
                );
                continue;
            }

            let load_number = sequence::format_load_number(year, next);
            next += 1;

            let new_load = materialize::materialize(template, date, load_number);
            let load = self.loads.create(&new_load).await?;

            info!(
                load_number = %load.load_number,
                template_id = %template.id,
                status = %load.status,
                "Created recurring load"
            );

            created.push(CreatedLoad {
                id: load.id,
                load_number: load.load_number,
            });

            self.templates.mark_generated(template.id, Utc::now()).await?;
        }

        Ok(GenerationOutcome {
            created: created.len(),
            loads: created,
        })
    }
}
