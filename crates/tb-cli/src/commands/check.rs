use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let encounter = super::load_encounter(file)?;

    println!("  All checks passed for '{}'.", encounter.name);
    println!("  {} actors, round {}", encounter.len(), encounter.round);

    Ok(())
}
