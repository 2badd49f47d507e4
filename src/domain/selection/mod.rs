//! Template selection: criteria, pure scoring, and ranking.

mod criteria;
mod score;
mod selector;

pub use criteria::{Complexity, SelectionCriteria};
pub use score::{ScoreBreakdown, score_template};
pub use selector::{ScoredTemplate, rank, select_best};
