//! Roster validation ahead of order resolution.
//!
//! The resolver itself never fails: it degrades gracefully on unresolved
//! references and empty input. Callers that accept untrusted encounters
//! (a lobby layer, a file loaded from disk) run this check first and
//! decide what to do with the findings.

use std::collections::HashSet;

use tb_core::{Actor, ActorKind};

use crate::initiative::LONG_REST_INITIATIVE;

/// A problem found while validating a roster.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Display name (and id) of the actor the issue concerns.
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Validate a round's actor set before handing it to the resolver.
///
/// Errors: an empty roster, duplicate ids, initiatives past the reserved
/// long rest value. Warnings: summons whose owner reference does not
/// resolve to a character, summons whose initiative differs from their
/// owner's, and characters without a class (they lose all class
/// tie-breaks).
pub fn validate_roster(actors: &[Actor]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if actors.is_empty() {
        issues.push(ValidationIssue::error("roster", "no actors to order"));
        return issues;
    }

    let mut seen = HashSet::new();
    for actor in actors {
        if !seen.insert(&actor.id) {
            issues.push(ValidationIssue::error(
                &actor.name,
                format!("duplicate actor id '{}'", actor.id),
            ));
        }
    }

    for actor in actors {
        if actor.initiative > LONG_REST_INITIATIVE {
            issues.push(ValidationIssue::error(
                &actor.name,
                format!(
                    "initiative {} is past the long rest value {LONG_REST_INITIATIVE}",
                    actor.initiative
                ),
            ));
        }

        match actor.kind {
            ActorKind::Character => {
                if actor.class.is_none() {
                    issues.push(ValidationIssue::warning(
                        &actor.name,
                        "character has no class and loses all class tie-breaks",
                    ));
                }
            }
            ActorKind::Summon => validate_owner_link(actor, actors, &mut issues),
            ActorKind::Monster => {}
        }
    }

    issues
}

/// Check a summon's ownership link against the rest of the roster.
fn validate_owner_link(summon: &Actor, actors: &[Actor], issues: &mut Vec<ValidationIssue>) {
    let Some(owner_id) = &summon.owner else {
        return;
    };

    match actors.iter().find(|a| &a.id == owner_id) {
        None => issues.push(ValidationIssue::warning(
            &summon.name,
            format!("owner '{owner_id}' is not in the roster; treated as unowned"),
        )),
        Some(owner) if owner.kind != ActorKind::Character => {
            issues.push(ValidationIssue::warning(
                &summon.name,
                format!(
                    "owner '{owner_id}' is a {}, not a character; treated as unowned",
                    owner.kind
                ),
            ));
        }
        Some(owner) if owner.initiative != summon.initiative => {
            issues.push(ValidationIssue::warning(
                &summon.name,
                format!(
                    "initiative {} differs from owner's {}; summons normally share it",
                    summon.initiative, owner.initiative
                ),
            ));
        }
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::CharacterClass;

    fn errors(issues: &[ValidationIssue]) -> usize {
        issues.iter().filter(|i| i.is_error).count()
    }

    #[test]
    fn clean_roster_has_no_issues() {
        let issues = validate_roster(&[
            Actor::character("p1", "Kaela", CharacterClass::Vanguard, 23),
            Actor::monster("m1", "Gravefang", 31),
            Actor::summon("s1", "Ember Wisp", "p1", 23),
        ]);
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn empty_roster_is_an_error() {
        let issues = validate_roster(&[]);
        assert_eq!(errors(&issues), 1);
    }

    #[test]
    fn duplicate_ids_are_errors() {
        let issues = validate_roster(&[
            Actor::monster("m1", "Gravefang", 31),
            Actor::monster("m1", "Bonecrawler", 40),
        ]);
        assert_eq!(errors(&issues), 1);
        assert!(issues[0].message.contains("duplicate"));
    }

    #[test]
    fn initiative_past_long_rest_is_an_error() {
        let issues = validate_roster(&[Actor::monster("m1", "Gravefang", 120)]);
        assert_eq!(errors(&issues), 1);
        assert!(issues[0].message.contains("long rest"));
    }

    #[test]
    fn unresolved_owner_warns() {
        let issues = validate_roster(&[Actor::summon("s1", "Ember Wisp", "ghost", 23)]);
        assert_eq!(errors(&issues), 0);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("not in the roster"));
    }

    #[test]
    fn non_character_owner_warns() {
        let issues = validate_roster(&[
            Actor::monster("m1", "Gravefang", 31),
            Actor::summon("s1", "Ember Wisp", "m1", 31),
        ]);
        assert_eq!(errors(&issues), 0);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("not a character"));
    }

    #[test]
    fn initiative_mismatch_with_owner_warns() {
        let issues = validate_roster(&[
            Actor::character("p1", "Kaela", CharacterClass::Vanguard, 23),
            Actor::summon("s1", "Ember Wisp", "p1", 40),
        ]);
        assert_eq!(errors(&issues), 0);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("differs from owner"));
    }

    #[test]
    fn classless_character_warns() {
        let mut hero = Actor::character("p1", "Kaela", CharacterClass::Vanguard, 23);
        hero.class = None;
        let issues = validate_roster(&[hero]);
        assert_eq!(errors(&issues), 0);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn stray_summon_is_fine() {
        let issues = validate_roster(&[Actor::stray_summon("s1", "Wandering Husk", 40)]);
        assert!(issues.is_empty());
    }

    #[test]
    fn display_includes_level_and_subject() {
        let issue = ValidationIssue::warning("Ember Wisp", "something odd");
        assert_eq!(issue.to_string(), "warning: Ember Wisp: something odd");
    }
}
