use std::path::PathBuf;

use strut_core::config::StrutConfig;

/// Run `strut init` — write the default configuration file.
pub fn run(config_dir: Option<PathBuf>) -> i32 {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(cwd) => cwd.join(".strut"),
            Err(e) => {
                eprintln!("strut init: failed to get current directory: {}", e);
                return 2;
            }
        },
    };

    let config_path = config_dir.join("strut.json");
    if config_path.exists() {
        eprintln!("strut init: {} already exists", config_path.display());
        return 0;
    }

    if let Err(e) = std::fs::create_dir_all(&config_dir) {
        eprintln!(
            "strut init: cannot create {}: {}",
            config_dir.display(),
            e
        );
        return 2;
    }

    let content = match serde_json::to_string_pretty(&StrutConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("strut init: cannot serialize default config: {}", e);
            return 2;
        }
    };
    if let Err(e) = std::fs::write(&config_path, content) {
        eprintln!("strut init: cannot write {}: {}", config_path.display(), e);
        return 2;
    }

    println!("Initialized {}", config_path.display());
    0
}
