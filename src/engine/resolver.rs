// ==========================================
// Process id resolver
// ==========================================
// Turns a case id into the deduplicated, optionally date-ordered
// sequence of process ids that drives the traversal. The document
// store connection is scoped to each resolve call.
// ==========================================

use crate::config::AppConfig;
use crate::repository::case_store::{CaseStore, SqliteCaseStore};
use crate::repository::error::DataSourceResult;
use std::collections::HashSet;
use tracing::{debug, info};

/// Ordering policy of the resolved sequence.
///
/// The two variants intentionally diverge on entries without a
/// publish date: `Encounter` keeps every id, `LastPublishDate` drops
/// undated ones. Both behaviors are observable output and preserved
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    /// First-appearance order while walking Requests[].Processes[]
    Encounter,
    /// Ascending publish date, stable on ties; undated entries are
    /// excluded
    LastPublishDate,
}

/// Resolves the process ids of a case.
pub struct ProcessIdResolver<'a> {
    config: &'a AppConfig,
}

impl<'a> ProcessIdResolver<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Resolve a case id into its process id sequence.
    ///
    /// # Returns
    /// - Ok(None): no case record with this id
    /// - Ok(Some(ids)): deduplicated ids in the requested order
    /// - Err: document store connection or query failure
    pub fn resolve(&self, case_id: i64, order: OrderBy) -> DataSourceResult<Option<Vec<i64>>> {
        info!(case_id, "connecting to case document store");
        let store = SqliteCaseStore::connect(&self.config.case_db_path)?;
        let resolved = resolve_with(&store, case_id, order);
        drop(store);
        debug!(case_id, "case document store connection released");
        resolved
    }
}

/// Resolution against any case store (the scoped-connection wrapper
/// above is the production path; tests inject their own store).
pub fn resolve_with<S: CaseStore>(
    store: &S,
    case_id: i64,
    order: OrderBy,
) -> DataSourceResult<Option<Vec<i64>>> {
    let refs = match store.find_case_process_refs(case_id)? {
        None => {
            info!(case_id, "no case document found");
            return Ok(None);
        }
        Some(refs) => refs,
    };

    // Deduplicate on first encounter; entries without a process id
    // contribute nothing. The first occurrence also pins the publish
    // date used by the ordered variant.
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for r in &refs {
        if let Some(id) = r.process_id {
            if seen.insert(id) {
                unique.push((id, r.last_publish_date));
            }
        }
    }

    let ids: Vec<i64> = match order {
        OrderBy::Encounter => unique.into_iter().map(|(id, _)| id).collect(),
        OrderBy::LastPublishDate => {
            let mut dated: Vec<_> = unique
                .into_iter()
                .filter_map(|(id, date)| date.map(|d| (id, d)))
                .collect();
            // sort_by is stable: encounter order breaks date ties
            dated.sort_by(|a, b| a.1.cmp(&b.1));
            dated.into_iter().map(|(id, _)| id).collect()
        }
    };

    info!(case_id, count = ids.len(), "resolved process ids");
    Ok(Some(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::{DocumentRecord, ProcessRef};
    use crate::repository::error::DataSourceResult;
    use chrono::{DateTime, Utc};
    use std::cell::Cell;

    struct FakeCaseStore {
        refs: Option<Vec<ProcessRef>>,
        calls: Cell<usize>,
    }

    impl FakeCaseStore {
        fn with_refs(refs: Vec<ProcessRef>) -> Self {
            Self {
                refs: Some(refs),
                calls: Cell::new(0),
            }
        }

        fn empty() -> Self {
            Self {
                refs: None,
                calls: Cell::new(0),
            }
        }
    }

    impl CaseStore for FakeCaseStore {
        fn find_case_process_refs(
            &self,
            _case_id: i64,
        ) -> DataSourceResult<Option<Vec<ProcessRef>>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.refs.clone())
        }

        fn find_documents_by_case(&self, _case_id: i64) -> DataSourceResult<Vec<DocumentRecord>> {
            Ok(Vec::new())
        }
    }

    fn r(id: Option<i64>, date: Option<&str>) -> ProcessRef {
        ProcessRef {
            process_id: id,
            last_publish_date: date.map(|d| d.parse::<DateTime<Utc>>().unwrap()),
        }
    }

    #[test]
    fn test_missing_case_resolves_to_none() {
        let store = FakeCaseStore::empty();
        let resolved = resolve_with(&store, 9, OrderBy::Encounter).unwrap();
        assert!(resolved.is_none());
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn test_duplicates_contribute_once() {
        let store = FakeCaseStore::with_refs(vec![
            r(Some(5), None),
            r(Some(3), None),
            r(Some(5), None),
            r(None, None),
        ]);
        let ids = resolve_with(&store, 1, OrderBy::Encounter).unwrap().unwrap();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn test_encounter_order_keeps_undated_entries() {
        let store = FakeCaseStore::with_refs(vec![
            r(Some(5), Some("2024-02-01T00:00:00Z")),
            r(Some(3), None),
            r(Some(1), Some("2024-01-01T00:00:00Z")),
        ]);
        let ids = resolve_with(&store, 1, OrderBy::Encounter).unwrap().unwrap();
        assert_eq!(ids, vec![5, 3, 1]);
    }

    #[test]
    fn test_publish_date_order_excludes_undated_and_sorts() {
        let store = FakeCaseStore::with_refs(vec![
            r(Some(5), Some("2024-02-01T00:00:00Z")),
            r(Some(3), None),
            r(Some(5), Some("2024-02-01T00:00:00Z")),
            r(Some(1), Some("2024-01-01T00:00:00Z")),
        ]);
        let ids = resolve_with(&store, 1, OrderBy::LastPublishDate)
            .unwrap()
            .unwrap();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_date_ties_break_on_encounter_order() {
        let store = FakeCaseStore::with_refs(vec![
            r(Some(8), Some("2024-03-01T00:00:00Z")),
            r(Some(2), Some("2024-03-01T00:00:00Z")),
            r(Some(6), Some("2024-03-01T00:00:00Z")),
        ]);
        let ids = resolve_with(&store, 1, OrderBy::LastPublishDate)
            .unwrap()
            .unwrap();
        assert_eq!(ids, vec![8, 2, 6]);
    }

    #[test]
    fn test_case_with_no_processes_resolves_empty() {
        let store = FakeCaseStore::with_refs(Vec::new());
        let ids = resolve_with(&store, 1, OrderBy::Encounter).unwrap().unwrap();
        assert!(ids.is_empty());
    }
}
