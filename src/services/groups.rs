//! Group membership operations.

use std::sync::Arc;

use tracing::warn;

use crate::catalog;
use crate::clients::DocumentStore;
use crate::outcome::Outcome;
use crate::records::Group;
use crate::registry::collections;

pub struct GroupService {
    store: Arc<dyn DocumentStore>,
}

impl GroupService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn fetch(&self, group_id: &str) -> Outcome<Group> {
        match self.store.get(collections::GROUPS, group_id).await {
            Ok(Some(raw)) => match Group::from_raw(group_id, &raw) {
                Ok(group) => Outcome::success(group),
                Err(err) => Outcome::failure(catalog::group::LOAD_FAILED, Some(err.into())),
            },
            Ok(None) => Outcome::failure(catalog::group::NOT_FOUND, None),
            Err(err) => Outcome::failure(catalog::group::LOAD_FAILED, Some(err.into())),
        }
    }

    pub async fn save(&self, group: &Group) -> Outcome<()> {
        match self
            .store
            .set(collections::GROUPS, &group.id, group.to_raw())
            .await
        {
            Ok(()) => Outcome::success_empty(),
            Err(err) => Outcome::failure(catalog::group::SAVE_FAILED, Some(err.into())),
        }
    }

    /// Adds a member to the group's roster: read, append, write back.
    pub async fn join(&self, group_id: &str, uid: &str) -> Outcome<Group> {
        let mut group = match self.fetch(group_id).await {
            Outcome::Success(Some(group)) => group,
            other => return other,
        };
        if group.member_ids.iter().any(|member| member == uid) {
            return Outcome::failure(catalog::group::ALREADY_MEMBER, None);
        }
        group.member_ids.push(uid.to_string());
        match self
            .store
            .set(collections::GROUPS, group_id, group.to_raw())
            .await
        {
            Ok(()) => Outcome::success(group),
            Err(err) => Outcome::failure(catalog::group::SAVE_FAILED, Some(err.into())),
        }
    }

    /// Groups the given member belongs to. Documents that fail to decode are
    /// skipped with a warning rather than poisoning the whole listing.
    pub async fn groups_for_user(&self, uid: &str) -> Outcome<Vec<Group>> {
        let docs = match self.store.list(collections::GROUPS).await {
            Ok(docs) => docs,
            Err(err) => return Outcome::failure(catalog::group::LOAD_FAILED, Some(err.into())),
        };
        let mut groups = Vec::new();
        for (id, raw) in &docs {
            match Group::from_raw(id, raw) {
                Ok(group) => {
                    if group.member_ids.iter().any(|member| member == uid) {
                        groups.push(group);
                    }
                }
                Err(err) => warn!(%id, error = %err, "skipping undecodable group document"),
            }
        }
        Outcome::success(groups)
    }
}
