//! End-to-end games through the text console.

use std::io::Cursor;

use save_our_planet::core::FixedDice;
use save_our_planet::error::GameError;
use save_our_planet::rules::TurnEngine;
use save_our_planet::ui::ConsolePort;

fn console(input: &str) -> ConsolePort<Cursor<Vec<u8>>, Vec<u8>> {
    ConsolePort::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

// ============================================================================
// Full sessions
// ============================================================================

#[test]
fn test_console_game_to_quit() {
    // Two players; Ada rolls and buys the marine plant, Grace quits.
    let mut port = console("2\nAda\nGrace\n1\n1\n2\n");
    let mut engine = TurnEngine::setup(&mut port, FixedDice::new([(1, 1)])).unwrap();

    let report = engine.run(&mut port).unwrap();
    assert_eq!(report.standings[0].resources, 700);

    let text = String::from_utf8(port.into_output()).unwrap();
    assert!(text.contains("SAVE OUR PLANET"));
    assert!(text.contains("=== Ada's TURN ==="));
    assert!(text.contains("Ada rolled 1 and 1 for a total of 2"));
    assert!(text.contains("Ada purchased Marine Renewable Energy Plant for 300 resources"));
    assert!(text.contains("[2] Marine Renewable Energy Plant - Owned by Ada (Level 0)"));
    assert!(text.contains("Grace has decided to quit the game."));
    assert!(text.contains("- Marine Renewable Energy Plant (Level 0, Value: 300)"));
    assert!(text.contains("Total Worth: 1000"));
}

#[test]
fn test_console_recovers_from_bad_input() {
    let mut port = console("five\n9\n2\nAda\nAda\nGrace\n0\nroll\n2\n");
    let mut engine = TurnEngine::setup(&mut port, FixedDice::new([(1, 1)])).unwrap();

    let record = engine.play_turn(&mut port).unwrap();
    assert_eq!(record.action, save_our_planet::core::TurnAction::Quit);

    let text = String::from_utf8(port.into_output()).unwrap();
    assert_eq!(text.matches("Please enter a valid number.").count(), 2);
    assert!(text.contains("Number of players must be between 2 and 4."));
    assert!(text.contains("Please enter a number between 1 and 2."));
    assert!(text.contains("already taken"));
}

#[test]
fn test_console_eof_during_setup() {
    let mut port = console("3\nAda\n");
    let result = TurnEngine::setup(&mut port, FixedDice::new([(1, 1)]));
    assert!(matches!(result, Err(GameError::InputClosed)));
}
