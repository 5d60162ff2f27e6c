// src/providers/mod.rs

use crate::errors::Result;
use crate::problem::ProblemInput;

pub mod gemini;

/// The solver backend contract: one best-effort attempt per submission.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait SolverProvider: Send + Sync {
    /// Sends a single problem to the model and returns its Markdown+LaTeX
    /// answer verbatim.
    ///
    /// # Returns
    /// A `Result` containing a tuple of the generated `String` and the latency in milliseconds (`u64`).
    fn solve(
        &self,
        input: &ProblemInput,
    ) -> impl std::future::Future<Output = Result<(String, u64)>> + Send;
}
