//! Import a tower record and list every problem found in it.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tower_content::{ImportResult, TowerLoader};

/// Import a tower record and report its errors
#[derive(Parser)]
pub struct Check {
    /// Tower record (JSON) to check
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let result = TowerLoader::load(&self.file)?;
        report(&result, &mut io::stdout().lock())?;

        if !result.is_clean() {
            bail!(
                "{} has {} import error(s)",
                self.file.display(),
                result.errors.len()
            );
        }
        Ok(())
    }
}

pub(crate) fn report(result: &ImportResult, out: &mut impl Write) -> io::Result<()> {
    let tower = &result.tower;
    writeln!(
        out,
        "Tower '{}': {} standard room(s), {} nexus room(s), {} enemies, {} levels",
        tower.name,
        tower.standard_rooms.len(),
        tower.nexus_rooms.len(),
        tower.enemies.len(),
        tower.levels.len()
    )?;

    if result.is_clean() {
        return writeln!(out, "no errors");
    }
    for error in &result.errors {
        writeln!(out, "  - {error}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_content::import_tower;

    fn render(result: &ImportResult) -> String {
        let mut out = Vec::new();
        report(result, &mut out).expect("write to memory");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn clean_record_is_summarised() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../game/content/data/towers/sample.json");
        let result = TowerLoader::load(&path).expect("sample loads");
        let text = render(&result);
        assert!(text.starts_with("Tower 'Sample tower': 2 standard room(s), 1 nexus room(s)"));
        assert!(text.ends_with("no errors\n"));
    }

    #[test]
    fn errors_are_listed_one_per_line() {
        let text = render(&import_tower("{}"));
        assert!(text.contains("  - Tower name is missing\n"));
        assert!(text.contains("  - Tower has no starting position\n"));
        assert!(!text.contains("no errors"));
    }

    #[test]
    fn failing_check_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{}").expect("write record");

        let error = Check { file: path }.execute().unwrap_err();
        assert!(error.to_string().contains("6 import error(s)"));
    }
}
