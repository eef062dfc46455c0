//! Integration tests for single elimination: round layout, byes and propagation.

use bracket_engine::{generate_rounds, Bracket, Format, PlayerEntry, PlayerProfile, Round};
use std::collections::HashSet;

fn roster(n: usize) -> Vec<PlayerEntry> {
    (1..=n).map(|i| PlayerEntry::from(format!("P{i}"))).collect()
}

fn single(n: usize) -> Vec<Round> {
    generate_rounds(n, &roster(n), Format::SingleElimination)
}

fn bye_matches(round: &Round) -> usize {
    round.matches.iter().filter(|m| m.has_bye()).count()
}

#[test]
fn too_few_entrants_yield_no_rounds() {
    assert!(generate_rounds(0, &[], Format::SingleElimination).is_empty());
    assert!(generate_rounds(8, &[], Format::SingleElimination).is_empty());
    assert!(generate_rounds(1, &roster(1), Format::SingleElimination).is_empty());
    assert!(generate_rounds(1, &roster(4), Format::SingleElimination).is_empty());
    assert!(generate_rounds(4, &roster(1), Format::DoubleElimination).is_empty());
    assert!(generate_rounds(0, &[], Format::Swiss).is_empty());
}

#[test]
fn power_of_two_rosters_halve_each_round() {
    for (n, depth) in [(2, 1), (4, 2), (8, 3), (16, 4)] {
        let rounds = single(n);
        assert_eq!(rounds.len(), depth, "rounds for {n}");
        assert_eq!(rounds.last().unwrap().name, "Final");
        let mut expected = n / 2;
        for round in &rounds {
            assert_eq!(round.bracket, Bracket::Winners);
            assert_eq!(round.matches.len(), expected);
            assert!(round.matches.iter().all(|m| m.bracket == Bracket::Winners));
            expected /= 2;
        }
        assert!(rounds[0].matches.iter().all(|m| m.winner.is_none()));
    }
}

#[test]
fn rounds_are_named_from_the_final_back() {
    let names = |n| single(n).into_iter().map(|r| r.name).collect::<Vec<_>>();
    assert_eq!(names(2), ["Final"]);
    assert_eq!(names(4), ["Semifinales", "Final"]);
    assert_eq!(names(8), ["Cuartos", "Semifinales", "Final"]);
    assert_eq!(names(16), ["Ronda 1", "Cuartos", "Semifinales", "Final"]);
    assert_eq!(
        names(64),
        ["Ronda 1", "Ronda 2", "Ronda 3", "Cuartos", "Semifinales", "Final"]
    );
}

#[test]
fn three_entrants_get_one_bye_propagated_to_the_final() {
    let rounds = single(3);
    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].matches.len(), 2);
    assert_eq!(bye_matches(&rounds[0]), 1);

    let bye = rounds[0].matches.iter().find(|m| m.has_bye()).unwrap();
    assert_eq!(bye.winner.as_deref(), Some("P3"));
    assert_eq!(bye.top.name, "P3");

    let final_match = &rounds[1].matches[0];
    assert_eq!(final_match.top.name, "TBD");
    assert_eq!(final_match.bottom.name, "P3");
    assert_eq!(final_match.winner, None);
}

#[test]
fn five_entrants_pad_to_eight_after_the_roster() {
    let rounds = single(5);
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0].matches.len(), 4);
    assert_eq!(bye_matches(&rounds[0]), 2);

    let slots: Vec<_> = rounds[0]
        .matches
        .iter()
        .flat_map(|m| [m.top.name.as_str(), m.bottom.name.as_str()])
        .collect();
    assert_eq!(slots, ["P1", "P2", "P3", "P4", "P5", "BYE", "BYE", "BYE"]);

    // P5 advances; the BYE-vs-BYE match has nobody to send on.
    assert_eq!(rounds[0].matches[3].winner, None);
    assert_eq!(rounds[1].matches[1].top.name, "P5");
    assert_eq!(rounds[1].matches[1].bottom.name, "TBD");
}

#[test]
fn bye_winner_carries_profile_into_next_round() {
    let players = vec![
        PlayerEntry::from("A"),
        PlayerEntry::from("B"),
        PlayerProfile::new("P1")
            .with_avatar("a1")
            .with_email("e1")
            .with_field("team", "red")
            .into(),
    ];
    let rounds = generate_rounds(3, &players, Format::SingleElimination);

    let advanced = &rounds[1].matches[0].bottom;
    assert_eq!(advanced.name, "P1");
    assert_eq!(advanced.avatar.as_deref(), Some("a1"));
    assert_eq!(advanced.email(), Some("e1"));
    assert_eq!(advanced.extra["team"], "red");
    assert_eq!(advanced.score, None);

    let first = &rounds[0].matches[0].top;
    assert_eq!(first.name, "A");
    assert_eq!(first.avatar, None);
    assert_eq!(first.email(), None);

    let json = serde_json::to_value(&rounds).unwrap();
    let top = &json[0]["matches"][0]["top"];
    assert!(top["avatar"].is_null());
    assert!(top.get("avatar").is_some());
    assert!(top.get("email").is_none());
    assert!(top["score"].is_null());
    let bottom = &json[1]["matches"][0]["bottom"];
    assert_eq!(bottom["email"], "e1");
    assert_eq!(bottom["team"], "red");
}

#[test]
fn match_ids_are_unique_and_sequential() {
    let rounds = single(13);
    let ids: Vec<_> = rounds
        .iter()
        .flat_map(|r| r.matches.iter().map(|m| m.id))
        .collect();
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(ids, (1..=15u64).collect::<Vec<_>>());
}

#[test]
fn winners_are_routed_to_the_next_round() {
    let rounds = single(8);
    for pair in rounds.windows(2) {
        for (i, game) in pair[0].matches.iter().enumerate() {
            assert_eq!(game.next_match_winner, Some(pair[1].matches[i / 2].id));
            assert_eq!(game.next_match_loser, None);
        }
    }
    assert_eq!(rounds[2].matches[0].next_match_winner, None);
}

#[test]
fn roster_length_wins_over_participant_count() {
    assert_eq!(
        generate_rounds(10, &roster(4), Format::SingleElimination),
        single(4)
    );
    assert_eq!(
        generate_rounds(2, &roster(6), Format::SingleElimination),
        single(6)
    );
}

#[test]
fn unknown_format_builds_single_elimination() {
    let format = Format::from_name("round-robin");
    assert_eq!(format, Format::SingleElimination);
    assert_eq!(generate_rounds(4, &roster(4), format), single(4));

    let parsed: Format = serde_json::from_str("\"ladder\"").unwrap();
    assert_eq!(parsed, Format::SingleElimination);
    let parsed: Format = serde_json::from_str("\"double-elimination\"").unwrap();
    assert_eq!(parsed, Format::DoubleElimination);
    assert_eq!(serde_json::to_string(&Format::Swiss).unwrap(), "\"swiss\"");
}

#[test]
fn generation_is_deterministic() {
    for format in [Format::SingleElimination, Format::DoubleElimination, Format::Swiss] {
        assert_eq!(
            generate_rounds(11, &roster(11), format),
            generate_rounds(11, &roster(11), format)
        );
    }
}

#[test]
fn rounds_survive_a_json_round_trip() {
    let rounds = single(6);
    let json = serde_json::to_string(&rounds).unwrap();
    let back: Vec<Round> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rounds);
}
