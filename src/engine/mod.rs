// ==========================================
// Engine layer - resolution and traversal
// ==========================================
// The engines own the cascading semantics (key propagation, ordering
// policy, cascade-skip) and emit events; they never build SQL and
// never touch a rendering surface directly.
// ==========================================

pub mod events;
pub mod orchestrator;
pub mod resolver;
pub mod traversal;

pub use events::TraversalEvent;
pub use orchestrator::CaseAnalysisOrchestrator;
pub use resolver::{resolve_with, OrderBy, ProcessIdResolver};
pub use traversal::HierarchicalTraversalEngine;
