// src/teams.rs
//
// Typed team records produced by `specs::teams` and consumed by the renderer.
// Records are built once per run and never mutated afterwards.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Player1,
    Player2,
    Observer1,
    Observer2,
}

impl Role {
    pub fn is_player(self) -> bool {
        matches!(self, Role::Player1 | Role::Player2)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub role: Role,
    /// Role label exactly as it appeared in the sheet ("Player 1", "Observer", ...)
    pub label: String,
    /// `"None"` (see `ParseOptions::absent_name`) marks an empty slot
    pub display_name: String,
    pub contact_handle: String,
    /// Only meaningful for players
    pub eliminated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Team {
    pub number: String,
    pub bird_name: String,
    pub players: Vec<Member>,
    pub observers: Vec<Member>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Alive,
    Partial,
    Eliminated,
}

impl Team {
    /// Players that count towards status (slot not marked absent).
    fn counted_players<'a>(&'a self, absent_name: &'a str) -> impl Iterator<Item = &'a Member> + 'a {
        self.players.iter().filter(move |p| p.display_name != absent_name)
    }

    /// Alive with no eliminated counted player, Eliminated with no alive one,
    /// Partial otherwise. A team with no counted players is Alive.
    pub fn status(&self, absent_name: &str) -> TeamStatus {
        let (mut alive, mut out) = (0usize, 0usize);
        for p in self.counted_players(absent_name) {
            if p.eliminated { out += 1 } else { alive += 1 }
        }
        match (alive, out) {
            (_, 0) => TeamStatus::Alive,
            (0, _) => TeamStatus::Eliminated,
            _ => TeamStatus::Partial,
        }
    }

    pub fn has_alive_player(&self, absent_name: &str) -> bool {
        self.counted_players(absent_name).any(|p| !p.eliminated)
    }
}

/// Split into (alive, eliminated) pages, preserving sheet order.
/// A team lands on the alive page iff it still has a counted, non-eliminated player.
pub fn partition_by_alive(teams: Vec<Team>, absent_name: &str) -> (Vec<Team>, Vec<Team>) {
    teams.into_iter().partition(|t| t.has_alive_player(absent_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(role: Role, name: &str, eliminated: bool) -> Member {
        Member {
            role,
            label: String::from(if role == Role::Player1 { "Player 1" } else { "Player 2" }),
            display_name: String::from(name),
            contact_handle: String::new(),
            eliminated,
        }
    }

    fn team(players: Vec<Member>) -> Team {
        Team { number: String::from("1"), players, ..Team::default() }
    }

    #[test]
    fn all_alive_is_alive() {
        let t = team(vec![player(Role::Player1, "A", false), player(Role::Player2, "B", false)]);
        assert_eq!(t.status("None"), TeamStatus::Alive);
    }

    #[test]
    fn all_eliminated_is_eliminated() {
        let t = team(vec![player(Role::Player1, "A", true), player(Role::Player2, "B", true)]);
        assert_eq!(t.status("None"), TeamStatus::Eliminated);
    }

    #[test]
    fn one_each_is_partial() {
        let t = team(vec![player(Role::Player1, "A", false), player(Role::Player2, "B", true)]);
        assert_eq!(t.status("None"), TeamStatus::Partial);
    }

    #[test]
    fn absent_players_are_not_counted() {
        // The absent slot is flagged alive but must not rescue the team
        let t = team(vec![player(Role::Player1, "A", true), player(Role::Player2, "None", false)]);
        assert_eq!(t.status("None"), TeamStatus::Eliminated);
        assert!(!t.has_alive_player("None"));

        // An absent eliminated slot does not make it partial either
        let t = team(vec![player(Role::Player1, "A", false), player(Role::Player2, "None", true)]);
        assert_eq!(t.status("None"), TeamStatus::Alive);
    }

    #[test]
    fn no_players_is_alive_but_goes_to_eliminated_page() {
        let t = team(vec![]);
        assert_eq!(t.status("None"), TeamStatus::Alive);
        let (alive, gone) = partition_by_alive(vec![t], "None");
        assert!(alive.is_empty());
        assert_eq!(gone.len(), 1);
    }

    #[test]
    fn partition_keeps_order() {
        let mk = |n: &str, elim: bool| Team {
            number: String::from(n),
            players: vec![player(Role::Player1, "X", elim)],
            ..Team::default()
        };
        let (alive, gone) = partition_by_alive(
            vec![mk("1", false), mk("2", true), mk("3", false), mk("4", true)],
            "None",
        );
        let nums = |v: &[Team]| v.iter().map(|t| t.number.clone()).collect::<Vec<_>>();
        assert_eq!(nums(&alive), vec!["1", "3"]);
        assert_eq!(nums(&gone), vec!["2", "4"]);
    }
}
