//! Registry change classification.
//!
//! Compares two registry snapshots and decides, per XEP, whether anything
//! worth announcing happened.
//!
//! ## Entry points
//!
//! ```ignore
//! use xepnotify_core::diff::{collect_updates, PlanOptions};
//!
//! let updates = collect_updates(&old, &new, &PlanOptions::default());
//! for update in &updates {
//!     println!("{} {}", update.key, update.action);
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: classification is a function of two immutable records.
//! - **At most one action** per XEP per comparison.
//! - **Determinism**: updates are ordered by group (changed, added, proto)
//!   and by key within each group.

pub mod engine;
pub mod plan;
pub mod significance;

pub use engine::diff_infos;
pub use plan::{collect_updates, PendingUpdate, PlanOptions};
pub use significance::{decompose_version, is_editorial, is_significant, BumpFilter};
