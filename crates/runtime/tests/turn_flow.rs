use game_core::{Player, RollError, Seat, TurnOutcome};
use runtime::{
    MatchEvent, RecordingSink, RuntimeError, ScriptedDecisions, ScriptedRolls, play_turn,
};

fn fixture_player() -> Player {
    Player::new("fixture")
}

#[test]
fn bust_forfeits_the_whole_accumulation() {
    let player = fixture_player();
    // 1,1 = 200 points with three junk dice, then the reroll scores nothing.
    let mut rolls = ScriptedRolls::new([vec![1, 1, 2, 3, 4], vec![2, 3, 4]]);
    let mut decider = ScriptedDecisions::new([]);
    let mut sink = RecordingSink::new();

    let summary = play_turn(Seat(0), &player, 5, &mut rolls, &mut decider, &mut sink).unwrap();

    assert_eq!(summary.outcome, TurnOutcome::Busted);
    assert_eq!(summary.net_points, 0);
    assert_eq!(summary.forfeited, 200);
    assert_eq!(summary.rolls, 2);
    // The bust came while below the minimum, so the decider was never asked.
    assert_eq!(rolls.requested(), &[5, 3]);
}

#[test]
fn banking_commits_the_accumulation() {
    let player = fixture_player();
    let mut rolls = ScriptedRolls::new([vec![1, 1, 1, 5, 2]]);
    let mut decider = ScriptedDecisions::new([false]);
    let mut sink = RecordingSink::new();

    let summary = play_turn(Seat(0), &player, 5, &mut rolls, &mut decider, &mut sink).unwrap();

    assert_eq!(summary.outcome, TurnOutcome::Banked);
    assert_eq!(summary.net_points, 1050);
    assert_eq!(summary.forfeited, 0);
    assert_eq!(summary.rolls, 1);
}

#[test]
fn below_minimum_the_decider_is_never_consulted() {
    let player = fixture_player();
    // 50, then 50 more, then a bust: the turn never reaches 300, so an empty
    // decision script must not be touched.
    let mut rolls = ScriptedRolls::new([vec![5, 2, 3, 4, 6], vec![5, 2, 3, 4], vec![2, 3, 4]]);
    let mut decider = ScriptedDecisions::new([]);
    let mut sink = RecordingSink::new();

    let summary = play_turn(Seat(0), &player, 5, &mut rolls, &mut decider, &mut sink).unwrap();

    assert_eq!(summary.outcome, TurnOutcome::Busted);
    assert!(
        sink.events
            .iter()
            .any(|event| matches!(event, MatchEvent::RerollForced { .. }))
    );
}

#[test]
fn hot_dice_rerolls_the_full_pool() {
    let player = fixture_player();
    // All five dice score, the player presses on, and the next throw uses
    // six dice.
    let mut rolls = ScriptedRolls::new([vec![1, 1, 1, 5, 5], vec![2, 3, 4, 6, 3, 4]]);
    let mut decider = ScriptedDecisions::new([true]);
    let mut sink = RecordingSink::new();

    let summary = play_turn(Seat(0), &player, 5, &mut rolls, &mut decider, &mut sink).unwrap();

    assert_eq!(rolls.requested(), &[5, 6]);
    assert!(
        sink.events
            .iter()
            .any(|event| matches!(event, MatchEvent::HotDice { .. }))
    );
    // The gamble failed, taking the 1100 with it.
    assert_eq!(summary.outcome, TurnOutcome::Busted);
    assert_eq!(summary.forfeited, 1100);
}

#[test]
fn exhausted_roll_script_surfaces_a_provider_error() {
    let player = fixture_player();
    let mut rolls = ScriptedRolls::new([vec![5, 2, 3, 4, 6]]);
    let mut decider = ScriptedDecisions::new([]);
    let mut sink = RecordingSink::new();

    let result = play_turn(Seat(0), &player, 5, &mut rolls, &mut decider, &mut sink);

    assert!(matches!(
        result,
        Err(RuntimeError::ProviderFailed { provider: "roll", .. })
    ));
}

#[test]
fn malformed_roll_surfaces_an_invalid_roll_error() {
    let player = fixture_player();
    let mut rolls = ScriptedRolls::new([vec![7, 1, 1, 1, 1]]);
    let mut decider = ScriptedDecisions::new([]);
    let mut sink = RecordingSink::new();

    let result = play_turn(Seat(0), &player, 5, &mut rolls, &mut decider, &mut sink);

    assert_eq!(
        result,
        Err(RuntimeError::InvalidRoll(RollError::FaceOutOfRange {
            value: 7
        }))
    );
}
