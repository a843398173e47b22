pub mod check;
pub mod demo;
pub mod init;
pub mod resolve;

use std::path::Path;

use tb_core::Encounter;
use tb_engine::validate_roster;

/// Load an encounter file and print validation findings to stderr.
/// Returns the encounter only if validation found no errors.
fn load_encounter(file: &Path) -> Result<Encounter, String> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let encounter: Encounter =
        serde_json::from_str(&content).map_err(|e| format!("invalid encounter file: {e}"))?;

    let issues = validate_roster(encounter.actors());
    for issue in &issues {
        eprintln!("  {issue}");
    }
    if issues.iter().any(|i| i.is_error) {
        return Err("encounter failed validation".into());
    }

    Ok(encounter)
}
