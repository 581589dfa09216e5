mod common;

use common::sample_store;
use rusty_scramble::controller::leaderboard::build_leaderboard;
use rusty_scramble::model::{ScoreDisplay, ShotType, format_to_par};

#[test]
fn test_joint_strokes_count_once_per_player() {
    let mut store = sample_store(&["A", "B", "C"]);
    store.add_stroke(1).unwrap();
    store.add_stroke(1).unwrap();
    store.add_stroke(1).unwrap();
    for p in ["A", "B", "C"] {
        store.toggle_stroke_player(1, 0, p).unwrap();
    }
    store.toggle_stroke_player(1, 1, "A").unwrap();
    store.toggle_stroke_player(1, 1, "B").unwrap();
    store.toggle_stroke_player(1, 2, "A").unwrap();

    let board = build_leaderboard(&store);
    let total = |name: &str| {
        board
            .standings
            .iter()
            .find(|s| s.player == name)
            .unwrap()
            .total_strokes
    };
    assert_eq!(total("A"), 3);
    assert_eq!(total("B"), 2);
    assert_eq!(total("C"), 1);
    for name in ["A", "B", "C"] {
        assert_eq!(total(name), store.total_strokes_for_player(name));
    }
}

#[test]
fn test_par_override_drives_to_par() {
    let mut store = sample_store(&["A", "B"]);
    store.allocate_through(5).unwrap();
    for _ in 0..4 {
        let idx = store.add_stroke(5).unwrap();
        store.toggle_stroke_player(5, idx, "A").unwrap();
        store.toggle_stroke_player(5, idx, "B").unwrap();
    }
    assert_eq!(store.course().par_for(5), 5);
    store.set_par_override(5, 4).unwrap();

    let board = build_leaderboard(&store);
    for standing in &board.standings {
        let hole5 = &standing.holes[4];
        assert_eq!(hole5.hole, 5);
        assert_eq!(hole5.par, 4);
        assert_eq!(hole5.strokes, 4);
        assert_eq!(hole5.to_par, 0);
        assert_eq!(hole5.display(), ScoreDisplay::Par);
    }
}

#[test]
fn test_par_override_applies_to_players_without_strokes() {
    let mut store = sample_store(&["A", "B"]);
    store.allocate_through(5).unwrap();
    let idx = store.add_stroke(5).unwrap();
    store.toggle_stroke_player(5, idx, "A").unwrap();
    store.set_par_override(5, 4).unwrap();

    let board = build_leaderboard(&store);
    let hole5 = |name: &str| {
        board
            .standings
            .iter()
            .find(|s| s.player == name)
            .unwrap()
            .holes[4]
            .clone()
    };
    assert_eq!(hole5("A").par, 4);
    assert_eq!(hole5("A").to_par, -3);
    assert_eq!(hole5("B").par, 4);
    assert_eq!(hole5("B").strokes, 0);
    assert_eq!(hole5("B").to_par, -4);
    assert!(!hole5("B").is_played());
}

#[test]
fn test_unplayed_holes_count_against_par() {
    let mut store = sample_store(&["A", "B"]);
    store.allocate_through(2).unwrap();
    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 0, "A").unwrap();
    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 1, "A").unwrap();
    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 2, "A").unwrap();

    let board = build_leaderboard(&store);
    assert_eq!(board.holes_started, 2);
    // B has no strokes yet, so leads
    let b = &board.standings[0];
    assert_eq!(b.player, "B");
    assert_eq!(b.total_strokes, 0);
    assert_eq!(b.holes.len(), 2);
    assert!(b.holes.iter().all(|h| !h.is_played()));
    assert_eq!(b.holes[0].to_par, -4);
    assert_eq!(b.holes[1].to_par, -4);
    assert_eq!(b.total_to_par, -8);

    let a = &board.standings[1];
    assert_eq!(a.player, "A");
    assert_eq!(a.holes[0].to_par, -1);
    assert_eq!(a.holes[0].display(), ScoreDisplay::Birdie);
    assert!(a.holes[0].is_played());
    assert_eq!(a.holes[1].to_par, -4);
    assert_eq!(a.total_to_par, -5);
    assert_eq!(format_to_par(a.total_to_par), "-5");
}

#[test]
fn test_standings_sort_by_strokes_then_entry_order() {
    let mut store = sample_store(&["Ann", "Bo", "Cy"]);
    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 0, "Ann").unwrap();
    store.toggle_stroke_player(1, 0, "Bo").unwrap();
    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 1, "Ann").unwrap();

    let board = build_leaderboard(&store);
    let order: Vec<&str> = board.standings.iter().map(|s| s.player.as_str()).collect();
    assert_eq!(order, vec!["Cy", "Bo", "Ann"]);

    let mut tie = sample_store(&["Ann", "Bo", "Cy"]);
    tie.add_stroke(1).unwrap();
    for p in ["Cy", "Ann", "Bo"] {
        tie.toggle_stroke_player(1, 0, p).unwrap();
    }
    let board = build_leaderboard(&tie);
    let order: Vec<&str> = board.standings.iter().map(|s| s.player.as_str()).collect();
    assert_eq!(order, vec!["Ann", "Bo", "Cy"]);
}

#[test]
fn test_shot_type_tally_reads_tag_copies() {
    let mut store = sample_store(&["A", "B"]);
    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 0, "A").unwrap();
    store.toggle_stroke_player(1, 0, "B").unwrap();
    store.set_shot_type(1, 0, Some(ShotType::Drive)).unwrap();

    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 1, "A").unwrap();
    store.toggle_stroke_player(1, 1, "B").unwrap();
    store.set_shot_type(1, 1, Some(ShotType::Gimme)).unwrap();

    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 2, "B").unwrap();

    let board = build_leaderboard(&store);
    for standing in &board.standings {
        assert_eq!(standing.shot_types.get(&ShotType::Drive), Some(&1));
        assert_eq!(standing.shot_types.get(&ShotType::Gimme), Some(&1));
        assert_eq!(standing.shot_types.values().sum::<usize>(), 2);
    }
}

#[test]
fn test_leaderboard_json_shape() {
    let mut store = sample_store(&["A"]);
    store.add_stroke(1).unwrap();
    store.toggle_stroke_player(1, 0, "A").unwrap();
    store.set_shot_type(1, 0, Some(ShotType::WaterHazard)).unwrap();

    let value = serde_json::to_value(build_leaderboard(&store)).unwrap();
    assert_eq!(value["course_name"], "Cedar Ridge");
    assert_eq!(value["standings"][0]["total_strokes"], 1);
    assert_eq!(value["standings"][0]["total_to_par"], -3);
    assert_eq!(value["standings"][0]["shot_types"]["Water Hazard"], 1);
}
