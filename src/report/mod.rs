// ==========================================
// Report layer
// ==========================================
// Bilingual text normalization plus the dual-sink emitter. The two
// text representations (logical for the log, visual for the console)
// are produced together by one normalization call and must never be
// conflated: the log is the permanent record of what was stored, the
// console shows what a left-to-right terminal can render.
// ==========================================

pub mod normalize;
pub mod sink;

pub use normalize::{normalize, NormalForm};
pub use sink::{EmitOptions, Emphasis, Level, ReportLine, ReportSink};
