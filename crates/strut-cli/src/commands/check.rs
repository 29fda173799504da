use std::path::PathBuf;

use strut_checks::engine::ConventionEngine;
use strut_core::config::StrutConfig;
use strut_core::diagnostics::Severity;
use strut_front::snapshot::ProgramSnapshot;
use strut_output::OutputFormatter;

/// Run `strut check <snapshot>` — validate a program snapshot.
///
/// Exit codes: 0 clean, 1 violations found, 2 environment or input error.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    snapshot_path: PathBuf,
    strict: bool,
    config_dir: Option<PathBuf>,
) -> i32 {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(cwd) => cwd.join(".strut"),
            Err(e) => {
                eprintln!("strut check: failed to get current directory: {}", e);
                return 2;
            }
        },
    };
    let config = StrutConfig::load(&config_dir);

    let snapshot = match ProgramSnapshot::load(&snapshot_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "strut check: cannot load snapshot {}: {}",
                snapshot_path.display(),
                e
            );
            return 2;
        }
    };

    let engine = ConventionEngine::new(config);
    let result = engine.check_program(&snapshot);

    if verbose {
        eprintln!(
            "strut check: {} unit(s), {} diagnostic(s)",
            result.units_analyzed.len(),
            result.diagnostics.len()
        );
    }

    let output = formatter.format_check(&result);
    if !output.is_empty() {
        println!("{}", output);
    }

    let fatal = result.diagnostics.iter().any(|d| match d.severity {
        Severity::Error => true,
        Severity::Warning => strict,
    });
    if fatal {
        1
    } else {
        0
    }
}
