//! Tests for the game controller and time travel.

use tictactoe_history::{
    ControllerError, DisplayModel, Evaluation, GameController, Intent, Player, Position,
    SelectOutcome, Square,
};

fn play(controller: &mut GameController, indices: &[usize]) {
    for &index in indices {
        let outcome = controller.select_index(index).expect("index in range");
        assert!(outcome.is_placed(), "move {} was ignored: {}", index, outcome);
    }
}

#[test]
fn test_first_click_places_x() {
    let mut controller = GameController::new();
    controller.select_index(0).unwrap();
    assert_eq!(controller.current_board(), &"X________".parse().unwrap());
    assert_eq!(controller.active_player(), Player::O);
}

#[test]
fn test_occupied_cell_never_changes_state() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4]);
    let before = controller.clone();
    for index in [0, 4] {
        assert_eq!(controller.select_index(index).unwrap(), SelectOutcome::Occupied);
        assert_eq!(controller, before);
    }
}

#[test]
fn test_decided_board_blocks_moves() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(controller.evaluation(), Evaluation::Draw);

    let won = {
        let mut c = GameController::new();
        play(&mut c, &[6, 0, 4, 1, 2]);
        c
    };
    assert_eq!(won.evaluation().winner(), Some(Player::X));

    for mut decided in [controller, won] {
        let before = decided.clone();
        for pos in Position::ALL {
            assert!(!decided.select_cell(pos).is_placed());
        }
        assert_eq!(decided, before);
    }
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 1, 2, 3]);
    assert_eq!(controller.history().len(), 5);

    controller.jump_to(2).unwrap();
    controller.select_index(5).unwrap();

    assert_eq!(controller.history().len(), 4);
    let positions: Vec<Option<Position>> = controller
        .history()
        .records()
        .iter()
        .map(|r| *r.position())
        .collect();
    assert_eq!(
        positions,
        vec![
            None,
            Some(Position::TopLeft),
            Some(Position::TopCenter),
            Some(Position::MiddleRight)
        ]
    );
}

#[test]
fn test_time_travel_revisits_any_state() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 3, 1, 4, 2]);
    assert!(controller.evaluation().is_over());

    for step in (0..controller.history().len()).rev() {
        controller.jump_to(step).unwrap();
        assert_eq!(controller.active_player(), Player::for_step(step));
        assert_eq!(controller.current_board().occupied(), step);
    }

    controller.jump_to(5).unwrap();
    assert_eq!(controller.evaluation().winner(), Some(Player::X));
    assert_eq!(controller.history().len(), 6);
}

#[test]
fn test_jump_past_end_is_error() {
    let mut controller = GameController::new();
    play(&mut controller, &[4]);
    assert_eq!(
        controller.jump_to(2),
        Err(ControllerError::StepOutOfRange { step: 2, len: 2 })
    );
    assert_eq!(controller.current_step(), 1);
}

#[test]
fn test_branch_from_start_replaces_everything() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 1, 2]);
    controller.dispatch(Intent::JumpTo(0)).unwrap();
    controller.dispatch(Intent::SelectCell(Position::BottomRight)).unwrap();

    assert_eq!(controller.history().len(), 2);
    assert_eq!(
        controller.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert!(controller.current_board().is_empty(Position::TopLeft));
}

#[test]
fn test_display_model_after_each_operation() {
    let mut controller = GameController::new();
    controller.dispatch(Intent::SelectCell(Position::Center)).unwrap();
    controller.dispatch(Intent::SelectCell(Position::TopLeft)).unwrap();
    controller.dispatch(Intent::SetReversed(true)).unwrap();

    let model = DisplayModel::from_controller(&controller);
    let labels: Vec<&str> = model.moves().iter().map(|m| m.label().as_str()).collect();
    assert_eq!(
        labels,
        vec!["Go to move #2: (1, 1)", "Go to move #1: (2, 2)", "Go to game start"]
    );

    controller.dispatch(Intent::JumpTo(1)).unwrap();
    let model = DisplayModel::from_controller(&controller);
    assert_eq!(model.status(), "Next player: O");
    assert!(*model.moves()[1].is_current());
    assert!(*model.moves()[0].is_latest());
}
