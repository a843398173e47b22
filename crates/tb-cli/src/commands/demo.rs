use colored::Colorize;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tb_core::{Actor, ActorKind, CharacterClass};
use tb_engine::{InitiativeSelection, RoundTracker, calculate_initiative};

pub fn run(rounds: u32, seed: u64) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);

    let party = [
        ("kaela", "Kaela", CharacterClass::Vanguard),
        ("sylla", "Sylla", CharacterClass::Runeweaver),
        ("brannik", "Brannik", CharacterClass::Earthcaller),
    ];

    let mut actors = Vec::new();
    for (id, name, class) in party {
        let initiative = draw_initiative(&mut rng)?;
        actors.push(Actor::character(id, name, class, initiative));
    }

    // Kaela's wisp fights at her side, sharing her initiative.
    let wisp_initiative = actors[0].initiative;
    actors.push(Actor::summon(
        "ember-wisp",
        "Ember Wisp",
        "kaela",
        wisp_initiative,
    ));

    let monster_count: u32 = rng.random_range(2..=4);
    for i in 1..=monster_count {
        let initiative = rng.random_range(1..=90);
        actors.push(Actor::monster(
            format!("gravefang-{i}"),
            format!("Gravefang {i}"),
            initiative,
        ));
    }

    println!(
        "  {} {}",
        "Demo encounter".bold(),
        format!("({} actors, seed={seed})", actors.len()).dimmed()
    );

    let mut tracker = RoundTracker::new(&actors);
    for _ in 0..rounds {
        println!();
        println!(
            "  {}",
            format!("Round {}", tracker.round()).bold().underline()
        );
        for (position, actor) in tracker.order().iter().enumerate() {
            println!(
                "  {:>2}. [{:>2}] {} ({})",
                position + 1,
                actor.initiative,
                actor.name,
                actor.kind
            );
        }

        // Everyone takes their turn, then the players pick fresh cards.
        while !tracker.advance() {}

        let mut selections = Vec::new();
        for actor in tracker.order() {
            if actor.kind == ActorKind::Character {
                selections.push(InitiativeSelection::new(
                    actor.id.clone(),
                    draw_initiative(&mut rng)?,
                ));
            }
        }
        tracker.begin_round(&selections);
    }

    Ok(())
}

/// Pick two cards from the hand and resolve them; now and then the
/// character opts for a long rest instead.
fn draw_initiative(rng: &mut StdRng) -> Result<u32, String> {
    let long_rest = rng.random_bool(0.1);
    let top = rng.random_range(1..=90);
    let bottom = rng.random_range(1..=90);
    calculate_initiative(Some(top), Some(bottom), long_rest).map_err(|e| e.to_string())
}
