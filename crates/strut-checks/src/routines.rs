//! Discovery of the two routine kinds the injection checks care about.
//!
//! A *configure routine* is any routine whose parameter list includes a
//! reference to the framework's injector capability type; bindings may only
//! appear there. An *inject routine* is a method named by the constructor
//! injection convention.

use strut_core::config::FrameworkConfig;
use strut_front::ast::{CompilationUnit, RoutineDecl};
use strut_front::types::TypeOracle;

/// Conventional name of constructor-style injection points.
pub const INJECT_ROUTINE_NAME: &str = "Inject";

/// All routines of the unit that take a reference to the injector capability
/// type, regardless of receiver shape. Receiver violations are flagged
/// separately; receiver-less configure routines still contribute bindings.
pub fn configure_routines<'a>(
    unit: &'a CompilationUnit,
    oracle: &dyn TypeOracle,
    framework: &FrameworkConfig,
) -> Vec<&'a RoutineDecl> {
    unit.routines
        .iter()
        .filter(|r| takes_injector(r, oracle, framework))
        .collect()
}

/// All methods of the unit named by the inject convention. Free functions
/// with the conventional name qualify too, so the receiver check can flag
/// them.
pub fn inject_routines<'a>(unit: &'a CompilationUnit) -> Vec<&'a RoutineDecl> {
    unit.routines
        .iter()
        .filter(|r| r.name == INJECT_ROUTINE_NAME)
        .collect()
}

fn takes_injector(
    routine: &RoutineDecl,
    oracle: &dyn TypeOracle,
    framework: &FrameworkConfig,
) -> bool {
    routine.params.iter().any(|p| {
        let Some(ty) = p.ty else { return false };
        // The capability is always passed by reference (`*dingo.Injector`).
        let Some(elem) = oracle.deref(ty) else {
            return false;
        };
        match oracle.named(elem) {
            Some((package, name)) => {
                package == framework.package && name == framework.injector_type
            }
            None => false,
        }
    })
}
