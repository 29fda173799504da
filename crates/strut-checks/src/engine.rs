//! The convention engine: runs every enabled check over a program snapshot.
//!
//! Units are independent of each other, so they are checked in parallel;
//! each worker reports into a private buffer and the buffers are merged in
//! snapshot order, which keeps the output stable across runs.

use rayon::prelude::*;
use strut_core::config::StrutConfig;
use strut_core::diagnostics::{CheckId, Diagnostic, DiagnosticBuffer, DiagnosticSink};
use strut_front::ast::{CompilationUnit, RoutineDecl};
use strut_front::snapshot::ProgramSnapshot;
use strut_front::types::TypeOracle;

use crate::extract::BindingDecl;
use crate::paths::PathClassifier;
use crate::result::CheckRunResult;
use crate::{conformance, extract, layers, receivers, routines, tags};

/// Orchestrates all convention checks for one configuration. Stateless
/// between runs; a run is a pure function of (snapshot, configuration).
pub struct ConventionEngine {
    config: StrutConfig,
    classifier: PathClassifier,
}

impl ConventionEngine {
    pub fn new(config: StrutConfig) -> Self {
        let classifier = PathClassifier::new(&config.groups, &config.entry_paths);
        Self { config, classifier }
    }

    /// Check every unit of the snapshot and collect the result.
    pub fn check_program(&self, snapshot: &ProgramSnapshot) -> CheckRunResult {
        let oracle = &snapshot.types;
        let per_unit: Vec<Vec<Diagnostic>> = snapshot
            .units
            .par_iter()
            .map(|unit| {
                let mut buffer = DiagnosticBuffer::new();
                self.check_unit(unit, oracle, &mut buffer);
                buffer.into_vec()
            })
            .collect();

        let units_analyzed = snapshot.units.iter().map(|u| u.file.clone()).collect();
        CheckRunResult::new(units_analyzed, per_unit.into_iter().flatten().collect())
    }

    /// Run the enabled checks over one unit, reporting into `sink`.
    ///
    /// Order matters for output stability: layer dependencies first, then
    /// receiver shapes, then binding conformance, then tags. Bindings are
    /// extracted from every configure routine, including ones whose receiver
    /// was just flagged; a receiver violation doesn't unregister the
    /// bindings the routine declares.
    pub fn check_unit(
        &self,
        unit: &CompilationUnit,
        oracle: &dyn TypeOracle,
        sink: &mut dyn DiagnosticSink,
    ) {
        let checks = &self.config.checks;

        if checks.dependency_conventions {
            for d in layers::check_dependencies(unit, &self.classifier, &self.config.groups) {
                sink.report(d);
            }
        }

        let configure = routines::configure_routines(unit, oracle, &self.config.framework);
        let inject = routines::inject_routines(unit);

        if checks.configure_receiver {
            for routine in &configure {
                if let Some(d) = receivers::check_receiver(&unit.file, routine, CheckId::ConfigureReceiver)
                {
                    sink.report(d);
                }
            }
        }
        if checks.inject_receiver {
            for routine in &inject {
                if let Some(d) =
                    receivers::check_receiver(&unit.file, routine, CheckId::InjectReceiver)
                {
                    sink.report(d);
                }
            }
        }

        let bindings: Vec<BindingDecl> = configure
            .iter()
            .flat_map(|routine| extract::extract(routine, &self.config.framework))
            .collect();

        if checks.binding_conformance {
            for binding in &bindings {
                if let Some(d) = conformance::check_binding(binding, oracle, &unit.file) {
                    sink.report(d);
                }
            }
        }

        if checks.strict_tags {
            // Only well-formed inject routines count as tag consumers.
            let valid_inject: Vec<&RoutineDecl> = inject
                .into_iter()
                .filter(|r| receivers::has_reference_receiver(r))
                .collect();
            for d in tags::check_tags(unit, oracle, &valid_inject, &bindings) {
                sink.report(d);
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
