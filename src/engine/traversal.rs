// ==========================================
// Hierarchical traversal engine
// ==========================================
// One pass per process id, three cascading query levels, keys
// discovered at each level feeding the next. Events stream to the
// caller one at a time; nothing is buffered. Input order is
// significant and preserved (it reflects resolver priority).
// ==========================================

use crate::engine::events::TraversalEvent;
use crate::repository::error::{DataSourceError, DataSourceResult};
use crate::repository::process_store::ProcessStore;
use tracing::{debug, warn};

/// Cascading three-level traversal over a process store.
pub struct HierarchicalTraversalEngine<'a, S: ProcessStore> {
    store: &'a S,
}

impl<'a, S: ProcessStore> HierarchicalTraversalEngine<'a, S> {
    /// The store must already be connected: a store that cannot be
    /// reached at all aborts the run before any traversal starts.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Traverse every process id in input order, streaming one event
    /// per observation into `on_event`.
    ///
    /// # Errors
    /// A store-level failure (connection, query) is fatal and ends
    /// the pass; a fault scoped to one step row becomes a `RowError`
    /// event and traversal continues with the next row.
    pub fn traverse(
        &self,
        process_ids: &[i64],
        mut on_event: impl FnMut(TraversalEvent),
    ) -> DataSourceResult<()> {
        for &process_id in process_ids {
            self.traverse_process(process_id, &mut on_event)?;
        }
        Ok(())
    }

    fn traverse_process(
        &self,
        process_id: i64,
        on_event: &mut impl FnMut(TraversalEvent),
    ) -> DataSourceResult<()> {
        // Level 1: process metadata
        let processes = self.store.fetch_processes(process_id)?;
        if processes.is_empty() {
            // Cascade-skip: no child queries on a missing parent
            debug!(process_id, "level 1 returned no rows");
            on_event(TraversalEvent::ProcessMissing(process_id));
            return Ok(());
        }
        for record in processes {
            on_event(TraversalEvent::ProcessFound(record));
        }

        // Level 2: process steps
        let steps = self.store.fetch_steps(process_id)?;
        if steps.is_empty() {
            debug!(process_id, "level 2 returned no rows");
            on_event(TraversalEvent::StepsMissing(process_id));
            return Ok(());
        }

        // Level 3: statuses, keyed per step. A failure here is scoped
        // to the one step row it belongs to.
        for step in steps {
            let process_step_id = step.process_step_id;
            on_event(TraversalEvent::StepFound(step));

            match self.store.fetch_step_statuses(process_step_id) {
                Ok(statuses) if statuses.is_empty() => {
                    on_event(TraversalEvent::StatusMissing(process_step_id));
                }
                Ok(statuses) => {
                    for status in statuses {
                        on_event(TraversalEvent::StatusFound(status));
                    }
                }
                Err(e @ DataSourceError::Connection(_)) | Err(e @ DataSourceError::Lock(_)) => {
                    return Err(e);
                }
                Err(row_fault) => {
                    warn!(process_step_id, error = %row_fault, "step row fault, continuing");
                    on_event(TraversalEvent::RowError {
                        process_step_id,
                        message: row_fault.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
