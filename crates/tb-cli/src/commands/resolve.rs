use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tb_core::Actor;
use tb_engine::resolve_turn_order;

pub fn run(file: &Path) -> Result<(), String> {
    let encounter = super::load_encounter(file)?;
    let order = resolve_turn_order(encounter.actors());

    println!(
        "  {} '{}' {}",
        "Turn order".bold(),
        encounter.name,
        format!("(round {})", encounter.round).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Init", "Name", "Kind", "Class", "Status"]);

    for (position, actor) in order.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            actor.initiative.to_string(),
            actor.name.clone(),
            actor.kind.to_string(),
            actor.class.map_or_else(|| "—".to_string(), |c| c.to_string()),
            status(actor).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} actors", order.len());

    Ok(())
}

fn status(actor: &Actor) -> &'static str {
    if actor.is_dead {
        "dead"
    } else if actor.is_exhausted {
        "exhausted"
    } else {
        "ready"
    }
}
