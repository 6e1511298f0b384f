//! The daily selection cycle behind `GET /api/operators`.
//!
//! One clock reading drives both the seed and the displayed timestamp, so a
//! response can never pair the seed of one minute with the label of the next.

use std::sync::Arc;

use chrono::NaiveDateTime;
use roster_core::code::VerificationCode;
use roster_core::error::{CoreError, CoreResult};
use roster_core::record::CharacterRecord;
use roster_core::sampler;
use roster_core::seed::{Clock, TimeSeed};
use roster_core::store::{EligibleSet, RecordStore};
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::config::ServerConfig;

/// Display format of [`DailySelection::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Response body of `GET /api/operators`.
#[derive(Debug, Clone, Serialize)]
pub struct DailySelection {
    pub operators: Vec<CharacterRecord>,
    pub verification_code: VerificationCode,
    pub timestamp: String,
}

pub struct SelectionService {
    store: RecordStore,
    eligible: OnceCell<Arc<EligibleSet>>,
    clock: Arc<dyn Clock>,
    selection_size: usize,
}

impl SelectionService {
    pub fn new(store: RecordStore, clock: Arc<dyn Clock>, selection_size: usize) -> Self {
        Self {
            store,
            eligible: OnceCell::new(),
            clock,
            selection_size,
        }
    }

    pub fn from_config(config: &ServerConfig, clock: Arc<dyn Clock>) -> Self {
        let store = RecordStore::new(config.snapshot_path.clone(), config.avatars_dir.clone())
            .with_name_field(config.name_field.clone())
            .with_url_prefix(config.avatars_url_prefix.clone());
        Self::new(store, clock, config.selection_size)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The eligible set, loading the snapshot on first use.
    ///
    /// Concurrent first callers share one load. A failed load is not cached,
    /// so the next call tries again.
    pub async fn eligible(&self) -> CoreResult<Arc<EligibleSet>> {
        self.eligible
            .get_or_try_init(|| async {
                let store = self.store.clone();
                let loaded = tokio::task::spawn_blocking(move || store.load())
                    .await
                    .map_err(|e| {
                        CoreError::Configuration(format!("Snapshot load task failed: {e}"))
                    })??;

                if loaded.excluded_count() > 0 {
                    tracing::warn!(
                        excluded = loaded.excluded_count(),
                        eligible = loaded.eligible.len(),
                        "Some snapshot rows were excluded from selection"
                    );
                }

                Ok::<_, CoreError>(Arc::new(loaded.eligible))
            })
            .await
            .cloned()
    }

    /// Draw the selection for the current minute.
    pub async fn daily_selection(&self) -> CoreResult<DailySelection> {
        let now = self.clock.now();
        let eligible = self.eligible().await?;
        draw(&eligible, now, self.selection_size)
    }
}

/// Draw `k` characters for the minute containing `now`.
pub fn draw(eligible: &EligibleSet, now: NaiveDateTime, k: usize) -> CoreResult<DailySelection> {
    let seed = TimeSeed::from_datetime(now);
    let chosen = sampler::sample(eligible.records(), &seed, k)?;
    let verification_code = VerificationCode::derive(chosen.iter().copied(), &seed);

    tracing::debug!(%seed, code = %verification_code, count = chosen.len(), "Drew selection");

    Ok(DailySelection {
        operators: chosen.into_iter().cloned().collect(),
        verification_code,
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
    })
}
