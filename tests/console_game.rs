//! Full matches driven through the console front end with scripted input.

use connect_four::config::AppConfig;
use connect_four::game::{Coord, GameOutcome, GameState, Seat};
use connect_four::ui::{Console, RenderStyle};

const PLAIN: RenderStyle = RenderStyle {
    color: false,
    show_key: true,
};

fn play(script: &str, state: &mut GameState) -> (Option<GameOutcome>, String) {
    let mut console = Console::new(script.as_bytes(), Vec::new(), PLAIN);
    let outcome = console.play(state).expect("writing to a Vec never fails");
    (outcome, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn diagonal_win_with_point_ids_and_retries() {
    let mut state = GameState::initial();
    // X climbs A6 B5 C4 D3 while O fills underneath; O's "d1" is refused
    // before O recovers with a legal point.
    let script = "A6\nB6\nB5\nC6\nA5\nd1\nC5\nC4\nD6\nA4\nD5\nG6\nD4\nD3\n";
    let (outcome, output) = play(script, &mut state);

    let expected = [(2, 3), (3, 2), (4, 1), (5, 0)].map(Coord::from);
    assert_eq!(
        outcome,
        Some(GameOutcome::Winner {
            seat: Seat::One,
            line: expected,
        })
    );
    assert!(output.contains("Inaccessible Point ID provided: D1"));
    assert!(output.contains("=====> Player One is the winner!"));
    assert!(output.contains("A6 B6 C6 D6 E6 F6 G6"));
}

#[test]
fn configured_players_take_turns() {
    let config: AppConfig = toml::from_str(
        r##"
[player_one]
name = "Ann"
token = "#"

[player_two]
name = "Bob"
token = "*"
"##,
    )
    .unwrap();
    config.validate().unwrap();

    let mut state = GameState::new(config.players());
    let (outcome, output) = play("g\ng\nf\nf\ne\ne\nd\n", &mut state);

    assert!(matches!(
        outcome,
        Some(GameOutcome::Winner { seat: Seat::One, .. })
    ));
    assert!(output.contains("Bob: your turn to play!"));
    assert!(output.contains("=====> Ann is the winner!"));
    assert!(output.contains("[#][#][#][#]"));
}

#[test]
fn input_ending_mid_game_has_no_outcome() {
    let mut state = GameState::initial();
    let (outcome, output) = play("a\nb\n", &mut state);
    assert_eq!(outcome, None);
    assert_eq!(state.current_seat(), Seat::One);
    assert_eq!(output.matches("Enter column: ").count(), 3);
}

#[test]
fn partial_player_section_keeps_seat_token() {
    let config: AppConfig = toml::from_str("[player_two]\nname = \"Bob\"\n").unwrap();
    config.validate().unwrap();

    let mut state = GameState::new(config.players());
    let (outcome, output) = play("a\nb\na\nb\na\nb\na\n", &mut state);

    assert!(matches!(
        outcome,
        Some(GameOutcome::Winner { seat: Seat::One, .. })
    ));
    assert!(output.contains("Bob: your turn to play!"));
    assert_eq!(state.player(Seat::Two).token(), 'O');
}
