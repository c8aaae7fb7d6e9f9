// ==========================================
// Domain layer - value records
// ==========================================
// Read-once records scoped to a single traversal pass. Nothing here
// is mutated after creation; rows are mapped into these structs
// immediately after each query so positional access never leaks out
// of the repository layer.
// ==========================================

pub mod case;
pub mod process;

pub use case::{DocumentRecord, ProcessRef};
pub use process::{ProcessRecord, ProcessStepRecord, StepStatusRecord};
