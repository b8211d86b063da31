use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;

/// An alive association row as loaded from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAssociation<A> {
    pub association_id: Uuid,
    pub child_id: Uuid,
    pub attrs: A,
}

/// One entry of the caller-supplied target membership.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredMember<A> {
    pub child_id: Uuid,
    pub attrs: A,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedUpdate<A> {
    pub association_id: Uuid,
    pub child_id: Uuid,
    pub attrs: A,
}

/// Minimal write set turning the current membership into the desired one.
/// The three sets are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncPlan<A> {
    pub remove: Vec<ActiveAssociation<A>>,
    pub add: Vec<DesiredMember<A>>,
    pub update: Vec<PlannedUpdate<A>>,
}

/// Child ids touched by a sync, per phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncOutcome {
    pub added: Vec<Uuid>,
    pub removed: Vec<Uuid>,
    pub updated: Vec<Uuid>,
}

/// Persistence collaborator for one association table. Implementations read
/// and write alive rows only; `soft_delete` stamps `deleted_at` and the row
/// stays behind for audit.
#[async_trait]
pub trait AssociationStore {
    type Attrs: Clone + PartialEq + Send + Sync;

    async fn find_active(&self, parent_id: Uuid) -> Result<Vec<ActiveAssociation<Self::Attrs>>>;
    async fn insert(&self, parent_id: Uuid, child_id: Uuid, attrs: &Self::Attrs) -> Result<()>;
    async fn soft_delete(&self, association_id: Uuid) -> Result<()>;
    async fn update_attrs(&self, association_id: Uuid, attrs: &Self::Attrs) -> Result<()>;
}

/// Pure diff between the alive rows and the desired membership.
///
/// Duplicate child ids in `desired` collapse to their last occurrence.
/// Alive rows missing from `desired` land in `remove`; desired children with
/// no alive row land in `add`; children present on both sides land in
/// `update` only when their stored attrs differ.
pub fn plan_sync<A: Clone + PartialEq>(
    active: &[ActiveAssociation<A>],
    desired: &[DesiredMember<A>],
) -> SyncPlan<A> {
    let mut deduped: Vec<DesiredMember<A>> = Vec::with_capacity(desired.len());
    let mut slot_by_child: HashMap<Uuid, usize> = HashMap::new();
    for member in desired {
        match slot_by_child.get(&member.child_id) {
            Some(&slot) => deduped[slot] = member.clone(),
            None => {
                slot_by_child.insert(member.child_id, deduped.len());
                deduped.push(member.clone());
            }
        }
    }

    let active_by_child: HashMap<Uuid, &ActiveAssociation<A>> =
        active.iter().map(|row| (row.child_id, row)).collect();

    let remove = active
        .iter()
        .filter(|row| !slot_by_child.contains_key(&row.child_id))
        .cloned()
        .collect();

    let mut add = Vec::new();
    let mut update = Vec::new();
    for member in deduped {
        match active_by_child.get(&member.child_id) {
            None => add.push(member),
            Some(row) if row.attrs != member.attrs => update.push(PlannedUpdate {
                association_id: row.association_id,
                child_id: member.child_id,
                attrs: member.attrs,
            }),
            Some(_) => {}
        }
    }

    SyncPlan { remove, add, update }
}

/// Reconciles the alive associations of `parent_id` to exactly `desired`.
///
/// Idempotent: a second call with the same desired set issues no writes.
/// The three phases run as independent statements, soft-delete first, then
/// insert, then update. A persistence failure mid-way leaves a partially
/// applied roster; callers retry with the same desired set to converge.
/// Re-adding a previously removed child always inserts a fresh row, never
/// resurrects the soft-deleted one.
pub async fn sync_associations<S>(
    store: &S,
    parent_id: Uuid,
    desired: &[DesiredMember<S::Attrs>],
) -> Result<SyncOutcome>
where
    S: AssociationStore + Sync,
{
    let active = store.find_active(parent_id).await?;
    let plan = plan_sync(&active, desired);

    let mut outcome = SyncOutcome::default();

    for row in &plan.remove {
        store.soft_delete(row.association_id).await?;
        outcome.removed.push(row.child_id);
    }
    for member in &plan.add {
        store.insert(parent_id, member.child_id, &member.attrs).await?;
        outcome.added.push(member.child_id);
    }
    for change in &plan.update {
        store.update_attrs(change.association_id, &change.attrs).await?;
        outcome.updated.push(change.child_id);
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::error::StorageError;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Role {
        Head,
        Assistant,
    }

    #[derive(Debug, Clone)]
    struct MemRow {
        association_id: Uuid,
        parent_id: Uuid,
        child_id: Uuid,
        attrs: Role,
        deleted_at: Option<DateTime<Utc>>,
    }

    #[derive(Default)]
    struct MemStore {
        rows: Mutex<Vec<MemRow>>,
        writes: AtomicUsize,
        /// Writes succeed until the budget runs out, then everything fails.
        write_budget: Option<usize>,
    }

    impl MemStore {
        fn failing_after(writes: usize) -> Self {
            Self {
                write_budget: Some(writes),
                ..Self::default()
            }
        }

        fn charge_write(&self) -> Result<()> {
            let spent = self.writes.fetch_add(1, Ordering::SeqCst);
            if let Some(budget) = self.write_budget
                && spent >= budget
            {
                return Err(StorageError::Database(sqlx::Error::PoolClosed));
            }
            Ok(())
        }

        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn alive_rows(&self, parent_id: Uuid) -> Vec<MemRow> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.parent_id == parent_id && r.deleted_at.is_none())
                .cloned()
                .collect()
        }

        fn all_rows(&self) -> Vec<MemRow> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssociationStore for MemStore {
        type Attrs = Role;

        async fn find_active(&self, parent_id: Uuid) -> Result<Vec<ActiveAssociation<Role>>> {
            Ok(self
                .alive_rows(parent_id)
                .into_iter()
                .map(|r| ActiveAssociation {
                    association_id: r.association_id,
                    child_id: r.child_id,
                    attrs: r.attrs,
                })
                .collect())
        }

        async fn insert(&self, parent_id: Uuid, child_id: Uuid, attrs: &Role) -> Result<()> {
            self.charge_write()?;
            self.rows.lock().unwrap().push(MemRow {
                association_id: Uuid::new_v4(),
                parent_id,
                child_id,
                attrs: *attrs,
                deleted_at: None,
            });
            Ok(())
        }

        async fn soft_delete(&self, association_id: Uuid) -> Result<()> {
            self.charge_write()?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.association_id == association_id && r.deleted_at.is_none())
                .ok_or(StorageError::NotFound)?;
            row.deleted_at = Some(Utc::now());
            Ok(())
        }

        async fn update_attrs(&self, association_id: Uuid, attrs: &Role) -> Result<()> {
            self.charge_write()?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.association_id == association_id && r.deleted_at.is_none())
                .ok_or(StorageError::NotFound)?;
            row.attrs = *attrs;
            Ok(())
        }
    }

    fn member(child_id: Uuid, attrs: Role) -> DesiredMember<Role> {
        DesiredMember { child_id, attrs }
    }

    fn alive_child_ids(store: &MemStore, parent_id: Uuid) -> HashSet<Uuid> {
        store.alive_rows(parent_id).iter().map(|r| r.child_id).collect()
    }

    #[tokio::test]
    async fn second_identical_sync_issues_no_writes() {
        let store = MemStore::default();
        let parent = Uuid::new_v4();
        let desired = vec![
            member(Uuid::new_v4(), Role::Head),
            member(Uuid::new_v4(), Role::Assistant),
        ];

        let first = sync_associations(&store, parent, &desired).await.unwrap();
        assert_eq!(first.added.len(), 2);
        let writes_after_first = store.write_count();

        let second = sync_associations(&store, parent, &desired).await.unwrap();
        assert_eq!(second, SyncOutcome::default());
        assert_eq!(store.write_count(), writes_after_first);

        let expected: HashSet<Uuid> = desired.iter().map(|m| m.child_id).collect();
        assert_eq!(alive_child_ids(&store, parent), expected);
    }

    #[tokio::test]
    async fn round_trip_keeps_surviving_rows_and_soft_deletes_the_rest() {
        let store = MemStore::default();
        let parent = Uuid::new_v4();
        let (kept, dropped, introduced) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let d1 = vec![member(kept, Role::Head), member(dropped, Role::Assistant)];
        sync_associations(&store, parent, &d1).await.unwrap();
        let kept_row_id = store
            .alive_rows(parent)
            .iter()
            .find(|r| r.child_id == kept)
            .unwrap()
            .association_id;

        let d2 = vec![member(kept, Role::Head), member(introduced, Role::Assistant)];
        let outcome = sync_associations(&store, parent, &d2).await.unwrap();

        assert_eq!(outcome.added, vec![introduced]);
        assert_eq!(outcome.removed, vec![dropped]);
        assert!(outcome.updated.is_empty());

        let expected: HashSet<Uuid> = [kept, introduced].into();
        assert_eq!(alive_child_ids(&store, parent), expected);

        // The survivor kept its row identity.
        let alive = store.alive_rows(parent);
        let kept_row = alive.iter().find(|r| r.child_id == kept).unwrap();
        assert_eq!(kept_row.association_id, kept_row_id);

        // The dropped row is stamped, not erased.
        let all = store.all_rows();
        let dropped_row = all.iter().find(|r| r.child_id == dropped).unwrap();
        assert!(dropped_row.deleted_at.is_some());
    }

    #[tokio::test]
    async fn attr_change_updates_the_row_in_place() {
        let store = MemStore::default();
        let parent = Uuid::new_v4();
        let coach = Uuid::new_v4();

        sync_associations(&store, parent, &[member(coach, Role::Assistant)])
            .await
            .unwrap();
        let original_row_id = store.alive_rows(parent)[0].association_id;

        let outcome = sync_associations(&store, parent, &[member(coach, Role::Head)])
            .await
            .unwrap();

        assert_eq!(outcome.updated, vec![coach]);
        assert!(outcome.added.is_empty() && outcome.removed.is_empty());

        let rows = store.all_rows();
        assert_eq!(rows.len(), 1, "no delete-and-recreate");
        assert_eq!(rows[0].association_id, original_row_id);
        assert_eq!(rows[0].attrs, Role::Head);
    }

    #[tokio::test]
    async fn syncing_to_empty_soft_deletes_every_active_row() {
        let store = MemStore::default();
        let parent = Uuid::new_v4();
        let desired: Vec<DesiredMember<Role>> = (0..3)
            .map(|_| member(Uuid::new_v4(), Role::Assistant))
            .collect();
        sync_associations(&store, parent, &desired).await.unwrap();

        let outcome = sync_associations(&store, parent, &[]).await.unwrap();

        assert_eq!(outcome.removed.len(), 3);
        assert!(alive_child_ids(&store, parent).is_empty());
        assert_eq!(store.all_rows().len(), 3);
        assert!(store.all_rows().iter().all(|r| r.deleted_at.is_some()));
    }

    #[tokio::test]
    async fn re_adding_creates_a_fresh_row() {
        let store = MemStore::default();
        let parent = Uuid::new_v4();
        let referee = Uuid::new_v4();

        sync_associations(&store, parent, &[member(referee, Role::Head)])
            .await
            .unwrap();
        let first_row_id = store.alive_rows(parent)[0].association_id;

        sync_associations(&store, parent, &[]).await.unwrap();
        sync_associations(&store, parent, &[member(referee, Role::Head)])
            .await
            .unwrap();

        let alive = store.alive_rows(parent);
        assert_eq!(alive.len(), 1);
        assert_ne!(alive[0].association_id, first_row_id);
        assert_eq!(store.all_rows().len(), 2);
    }

    #[tokio::test]
    async fn duplicate_desired_entries_collapse_to_the_last() {
        let store = MemStore::default();
        let parent = Uuid::new_v4();
        let coach = Uuid::new_v4();

        let desired = vec![member(coach, Role::Assistant), member(coach, Role::Head)];
        let outcome = sync_associations(&store, parent, &desired).await.unwrap();

        assert_eq!(outcome.added, vec![coach]);
        let alive = store.alive_rows(parent);
        assert_eq!(alive.len(), 1);
        assert_eq!(alive[0].attrs, Role::Head);
    }

    #[tokio::test]
    async fn partial_failure_leaves_mixed_state_and_a_retry_converges() {
        let parent = Uuid::new_v4();
        let children: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let desired: Vec<DesiredMember<Role>> =
            children.iter().map(|&c| member(c, Role::Assistant)).collect();

        // Budget covers the first insert only: the sync dies mid-apply.
        let store = MemStore::failing_after(1);
        let err = sync_associations(&store, parent, &desired).await.unwrap_err();
        assert!(matches!(err, StorageError::Database(_)));
        assert_eq!(alive_child_ids(&store, parent).len(), 1, "mixed state");

        // Same desired set against a healthy store picks up where it died.
        let healthy = MemStore {
            rows: Mutex::new(store.all_rows()),
            ..MemStore::default()
        };
        sync_associations(&healthy, parent, &desired).await.unwrap();
        assert_eq!(
            alive_child_ids(&healthy, parent),
            children.iter().copied().collect::<HashSet<Uuid>>()
        );
    }

    #[test]
    fn plan_sets_are_mutually_exclusive() {
        let (a, b, c, d) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let active = vec![
            ActiveAssociation { association_id: Uuid::new_v4(), child_id: a, attrs: Role::Head },
            ActiveAssociation { association_id: Uuid::new_v4(), child_id: b, attrs: Role::Head },
            ActiveAssociation { association_id: Uuid::new_v4(), child_id: c, attrs: Role::Head },
        ];
        // a stays untouched, b changes role, c is removed, d is new.
        let desired = vec![member(a, Role::Head), member(b, Role::Assistant), member(d, Role::Head)];

        let plan = plan_sync(&active, &desired);

        let removed: Vec<Uuid> = plan.remove.iter().map(|r| r.child_id).collect();
        let added: Vec<Uuid> = plan.add.iter().map(|m| m.child_id).collect();
        let updated: Vec<Uuid> = plan.update.iter().map(|u| u.child_id).collect();

        assert_eq!(removed, vec![c]);
        assert_eq!(added, vec![d]);
        assert_eq!(updated, vec![b]);
    }
}
