/// Validator contract and the ordered, run-everything pipeline.
///
/// Each identifier kind owns one [`Pipeline`] built exactly once. Running it
/// invokes every stage regardless of earlier failures and merges all
/// results, so a candidate that violates several rules reports all of them.
use tracing::trace;

use crate::validation::ValidationResult;

/// A single, stateless validation stage over a value of type `T`.
///
/// Implementations hold no mutable state and receive the value only by
/// shared reference, so one instance may be invoked from any number of
/// threads at once.
///
/// A validator whose precondition does not hold (for example a checksum
/// stage handed a string with non-digit characters) returns an empty result;
/// the format or length stage of the same pipeline owns that failure.
///
/// The trait is object safe; pipelines store stages as
/// `Box<dyn Validator<T>>`.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Short stage name used in trace output.
    fn name(&self) -> &'static str;

    /// Checks `value` and returns every violation found.
    fn validate(&self, value: &T) -> ValidationResult;
}

/// Fixed, ordered list of [`Validator`]s bound to one identifier kind.
///
/// Built once from a complete stage list; there is no way to add or remove a
/// stage afterwards.
pub struct Pipeline<T: ?Sized> {
    kind: &'static str,
    stages: Vec<Box<dyn Validator<T>>>,
}

impl<T: ?Sized> Pipeline<T> {
    /// Builds a pipeline for the identifier kind `kind` from `stages`.
    pub fn new(kind: &'static str, stages: Vec<Box<dyn Validator<T>>>) -> Self {
        Self { kind, stages }
    }

    /// Runs every stage against `value` and merges their results in stage
    /// order. Never stops early.
    pub fn run_all(&self, value: &T) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for stage in &self.stages {
            let stage_result = stage.validate(value);
            trace!(
                kind = self.kind,
                stage = stage.name(),
                errors = stage_result.len(),
                "validator stage finished"
            );
            result.extend_from(stage_result);
        }
        result
    }

    /// Identifier kind this pipeline validates.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` for a pipeline without stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T: ?Sized> std::fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("kind", &self.kind)
            .field("stages", &self.stage_names())
            .finish()
    }
}
