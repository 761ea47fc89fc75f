//! Meeting scheduling.

use std::sync::Arc;

use chrono::Local;
use tracing::warn;

use crate::catalog;
use crate::clients::DocumentStore;
use crate::outcome::Outcome;
use crate::records::Meeting;
use crate::registry::collections;

pub struct MeetingService {
    store: Arc<dyn DocumentStore>,
}

impl MeetingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn schedule(&self, meeting: &Meeting) -> Outcome<()> {
        match self
            .store
            .set(collections::MEETINGS, &meeting.id, meeting.to_raw())
            .await
        {
            Ok(()) => Outcome::success_empty(),
            Err(err) => Outcome::failure(catalog::meeting::SCHEDULE_FAILED, Some(err.into())),
        }
    }

    /// Future meetings for a group, soonest first. Undecodable documents are
    /// skipped with a warning.
    pub async fn upcoming_for_group(&self, group_id: &str) -> Outcome<Vec<Meeting>> {
        let docs = match self.store.list(collections::MEETINGS).await {
            Ok(docs) => docs,
            Err(err) => return Outcome::failure(catalog::meeting::LOAD_FAILED, Some(err.into())),
        };
        let now = Local::now();
        let mut meetings = Vec::new();
        for (id, raw) in &docs {
            match Meeting::from_raw(id, raw) {
                Ok(meeting) if meeting.group_id == group_id && meeting.scheduled_at >= now => {
                    meetings.push(meeting);
                }
                Ok(_) => {}
                Err(err) => warn!(%id, error = %err, "skipping undecodable meeting"),
            }
        }
        meetings.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        Outcome::success(meetings)
    }
}
