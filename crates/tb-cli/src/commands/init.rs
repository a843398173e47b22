use std::fs;
use std::path::Path;

use tb_core::{Actor, CharacterClass, Encounter};

pub fn run(file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("'{}' already exists", file.display()));
    }

    let mut encounter = Encounter::new("Crypt of the Ember King");
    let actors = [
        Actor::character("kaela", "Kaela", CharacterClass::Vanguard, 23),
        Actor::character("sylla", "Sylla", CharacterClass::Runeweaver, 61),
        Actor::summon("ember-wisp", "Ember Wisp", "kaela", 23),
        Actor::monster("gravefang-1", "Gravefang", 31),
        Actor::monster("gravefang-2", "Gravefang", 31),
    ];
    for actor in actors {
        encounter
            .add_actor(actor)
            .map_err(|e| format!("template roster: {e}"))?;
    }

    let json = serde_json::to_string_pretty(&encounter)
        .map_err(|e| format!("cannot serialize template: {e}"))?;
    fs::write(file, json).map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    println!(
        "Created encounter '{}' in {}",
        encounter.name,
        file.display()
    );
    println!();
    println!("Get started:");
    println!("  # Edit {} to set up your roster", file.display());
    println!("  tb check    # Validate the roster");
    println!("  tb resolve  # Show the round's acting order");

    Ok(())
}
