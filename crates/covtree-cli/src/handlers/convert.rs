//! Convert command handler

use crate::commands::ConvertArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use covtree::input::{json::to_json, lcov::parse_lcov};
use tracing::info;

/// Execute the convert command: LCOV in, JSON line coverage out
pub fn execute_convert(config: &CliConfig, args: &ConvertArgs) -> CliResult<()> {
    let content = std::fs::read_to_string(&args.lcov)?;
    let files = parse_lcov(&content)?;
    let json = to_json(&files)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, format!("{json}\n"))?;
            info!(files = files.len(), output = %path.display(), "converted tracefile");
            if !config.verbosity.is_quiet() {
                println!("Wrote {} files to {}", files.len(), path.display());
            }
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;
    use covtree::input::json::parse_json;
    use tempfile::TempDir;

    #[test]
    fn test_convert_to_file() {
        let temp = TempDir::new().unwrap();
        let lcov = temp.path().join("lcov.info");
        std::fs::write(&lcov, "SF:src/a.rs\nDA:2,3\nend_of_record\n").unwrap();
        let output = temp.path().join("out").join("coverage.json");

        let args = ConvertArgs {
            lcov,
            output: Some(output.clone()),
        };
        let config = CliConfig::new().with_verbosity(Verbosity::Quiet);
        execute_convert(&config, &args).unwrap();

        let files = parse_json(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].lines.get(&1), Some(&-2));
        assert_eq!(files[0].lines.get(&2), Some(&1));
    }

    #[test]
    fn test_convert_missing_input() {
        let args = ConvertArgs {
            lcov: "/nonexistent/lcov.info".into(),
            output: None,
        };
        assert!(execute_convert(&CliConfig::new(), &args).is_err());
    }
}
