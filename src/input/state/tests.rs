use super::*;
use crate::config::{Action, KeybindingsConfig};
use crate::draw::{DrawCommand, FrameStyle, HIGHLIGHTER, ORANGE, Point, RED};
use crate::input::{
    Buttons, InputEvent, Key, KeyInput, Modifiers, PointerEvent, PointerKind, ToolPresets,
    ToolState,
};
use std::time::{Duration, Instant};

fn create_test_input_state() -> InputState {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();

    let mut state = InputState::with_defaults(
        ToolState::new(RED, 6.0),
        ToolPresets::default(),
        action_map,
        DebugLog::default(),
    );
    state.update_screen_dimensions(800, 600);
    state.needs_redraw = false;
    state
}

fn pointer(kind: PointerKind, x: f64, y: f64, buttons: Buttons) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(kind, Point::new(x, y), buttons))
}

fn press(x: f64, y: f64) -> InputEvent {
    pointer(PointerKind::Press, x, y, Buttons::PRIMARY)
}

fn drag(x: f64, y: f64) -> InputEvent {
    pointer(PointerKind::Drag, x, y, Buttons::PRIMARY)
}

fn release(x: f64, y: f64) -> InputEvent {
    pointer(PointerKind::Release, x, y, Buttons::NONE)
}

fn cancel() -> InputEvent {
    pointer(PointerKind::Cancel, 0.0, 0.0, Buttons::NONE)
}

fn key(c: char) -> InputEvent {
    InputEvent::Key(KeyInput::press(Key::Char(c)))
}

fn current_len(state: &InputState) -> Option<usize> {
    state.current_stroke().map(|stroke| stroke.points().len())
}

#[test]
fn press_drag_release_commits_one_stroke() {
    let mut state = create_test_input_state();

    state.dispatch([press(10.0, 10.0)]);
    assert_eq!(current_len(&state), Some(1));

    state.dispatch([drag(10.0, 16.0)]);
    assert_eq!(current_len(&state), Some(3));
    assert_eq!(
        state.current_stroke().unwrap().points(),
        &[
            Point::new(10.0, 10.0),
            Point::new(10.0, 13.0),
            Point::new(10.0, 16.0)
        ]
    );

    state.dispatch([release(10.0, 16.0)]);
    assert!(state.current_stroke().is_none());
    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.strokes()[0].points().len(), 3);
    assert!(state.needs_redraw);
}

#[test]
fn committed_point_count_is_one_plus_added_points() {
    let mut state = create_test_input_state();
    state.dispatch([press(0.0, 0.0)]);

    let mut expected = 1;
    for (x, y) in [(7.0, 0.0), (7.0, 1.0), (40.0, 25.0), (40.0, 25.0)] {
        let before = current_len(&state).unwrap();
        state.dispatch([drag(x, y)]);
        expected += current_len(&state).unwrap() - before;
    }
    state.dispatch([release(40.0, 25.0)]);

    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.strokes()[0].points().len(), expected);
}

#[test]
fn highlighter_key_changes_next_stroke() {
    let mut state = create_test_input_state();

    state.dispatch([key('x'), press(100.0, 100.0)]);

    let stroke = state.current_stroke().unwrap();
    assert_eq!(stroke.color, HIGHLIGHTER);
    assert_eq!(stroke.color.a, 64.0 / 255.0);
    assert_eq!((stroke.color.r, stroke.color.g, stroke.color.b), (0.0, 0.0, 0.0));
    assert_eq!(stroke.width, 20.0);
}

#[test]
fn toggling_dim_twice_restores_composition() {
    let mut state = create_test_input_state();
    let style = FrameStyle::default();
    state.dispatch([press(5.0, 5.0), release(5.0, 5.0)]);
    let original = state.compose_frame(&style);

    state.dispatch([key('a')]);
    assert!(state.tool.dim);
    assert_eq!(state.compose_frame(&style).len(), original.len() + 1);

    state.dispatch([key('a')]);
    assert!(!state.tool.dim);
    assert_eq!(state.compose_frame(&style), original);
}

#[test]
fn cancel_commits_partial_stroke() {
    let mut state = create_test_input_state();

    state.dispatch([press(10.0, 10.0), drag(10.0, 16.0), cancel()]);

    assert!(state.current_stroke().is_none());
    assert!(matches!(state.state, DrawingState::Idle));
    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.strokes()[0].points().len(), 3);
}

#[test]
fn clear_empties_committed_and_current_strokes() {
    let mut state = create_test_input_state();
    state.dispatch([
        press(1.0, 1.0),
        release(1.0, 1.0),
        press(2.0, 2.0),
        release(2.0, 2.0),
        press(3.0, 3.0),
        drag(30.0, 3.0),
    ]);
    assert_eq!(state.frame.len(), 2);
    assert!(state.is_drawing());

    state.dispatch([key('c')]);

    assert!(state.frame.is_empty());
    assert!(state.current_stroke().is_none());
}

#[test]
fn clear_on_empty_canvas_is_harmless() {
    let mut state = create_test_input_state();
    state.handle_action(Action::ClearCanvas);
    assert!(state.frame.is_empty());
    assert!(state.needs_redraw);
}

#[test]
fn repeated_key_commands_are_idempotent() {
    let mut state = create_test_input_state();

    for c in ['o', 'x', '3', 'r'] {
        state.dispatch([key(c)]);
        let once = state.tool;
        state.dispatch([key(c)]);
        assert_eq!(state.tool, once, "key {c} is not idempotent");
    }
    assert_eq!(state.tool.color, RED);
    assert_eq!(state.tool.width_dp, 12.0);
}

#[test]
fn color_and_width_keys_update_tool() {
    let mut state = create_test_input_state();

    state.dispatch([key('O'), key('1')]);
    assert_eq!(state.tool.color, ORANGE);
    assert_eq!(state.tool.width_dp, 3.0);

    state.dispatch([key('2')]);
    assert_eq!(state.tool.width_dp, 6.0);
}

#[test]
fn key_release_has_no_effect() {
    let mut state = create_test_input_state();
    state.dispatch([InputEvent::Key(KeyInput::release(Key::Char('a')))]);
    assert!(!state.tool.dim);
    assert!(!state.needs_redraw);
}

#[test]
fn unbound_key_does_not_request_redraw() {
    let mut state = create_test_input_state();
    state.dispatch([key('q'), InputEvent::Key(KeyInput::press(Key::Unknown))]);
    assert!(!state.needs_redraw);
    assert_eq!(state.tool, ToolState::new(RED, 6.0));
}

#[test]
fn modifiers_do_not_block_plain_bindings() {
    let mut state = create_test_input_state();
    let input = KeyInput {
        modifiers: Modifiers {
            shift: true,
            ..Modifiers::default()
        },
        ..KeyInput::press(Key::Char('G'))
    };
    state.dispatch([InputEvent::Key(input)]);
    assert_eq!(state.tool.color, crate::draw::GREEN);
    assert!(state.modifiers.shift);
}

#[test]
fn escape_requests_exit_and_stops_batch() {
    let mut state = create_test_input_state();

    state.dispatch([
        InputEvent::Key(KeyInput::press(Key::Escape)),
        key('a'),
        press(10.0, 10.0),
    ]);

    assert!(state.should_exit);
    assert!(!state.tool.dim);
    assert!(state.current_stroke().is_none());
}

#[test]
fn press_without_primary_button_is_ignored() {
    let mut state = create_test_input_state();
    state.dispatch([pointer(PointerKind::Press, 10.0, 10.0, Buttons::SECONDARY)]);
    assert!(state.current_stroke().is_none());
    assert!(!state.needs_redraw);
}

#[test]
fn press_outside_surface_is_ignored() {
    let mut state = create_test_input_state();
    state.dispatch([press(-1.0, 10.0), press(800.0, 10.0), press(10.0, 600.0)]);
    assert!(state.current_stroke().is_none());
}

#[test]
fn drag_and_release_while_idle_are_ignored() {
    let mut state = create_test_input_state();
    state.dispatch([drag(10.0, 10.0), release(10.0, 10.0), cancel()]);
    assert!(state.frame.is_empty());
    assert!(state.current_stroke().is_none());
    assert!(!state.needs_redraw);
}

#[test]
fn second_press_while_drawing_keeps_stroke() {
    let mut state = create_test_input_state();
    state.dispatch([press(10.0, 10.0), press(50.0, 50.0)]);
    let stroke = state.current_stroke().unwrap();
    assert_eq!(stroke.points(), &[Point::new(10.0, 10.0)]);
}

#[test]
fn open_stroke_keeps_redraw_alive() {
    let mut state = create_test_input_state();
    state.dispatch([press(10.0, 10.0)]);
    state.needs_redraw = false;

    state.dispatch(std::iter::empty());
    assert!(state.needs_redraw);

    state.dispatch([release(10.0, 10.0)]);
    state.needs_redraw = false;
    state.dispatch(std::iter::empty());
    assert!(!state.needs_redraw);
}

#[test]
fn stroke_width_follows_pixels_per_dp() {
    let mut state = create_test_input_state();
    state.set_pixels_per_dp(2.0);

    state.dispatch([press(10.0, 10.0), drag(10.0, 22.0)]);

    let stroke = state.current_stroke().unwrap();
    assert_eq!(stroke.width, 12.0);
    assert_eq!(stroke.radius(), 6.0);
    assert_eq!(stroke.points().len(), 3);
}

#[test]
fn tool_changes_do_not_affect_open_stroke() {
    let mut state = create_test_input_state();
    state.dispatch([press(10.0, 10.0), key('b'), key('3')]);

    let stroke = state.current_stroke().unwrap();
    assert_eq!(stroke.color, RED);
    assert_eq!(stroke.width, 6.0);
}

#[test]
fn focus_loss_clears_modifiers() {
    let mut state = create_test_input_state();
    state.modifiers.ctrl = true;
    state.dispatch([InputEvent::Focus(false)]);
    assert_eq!(state.modifiers, Modifiers::default());
}

#[test]
fn compose_frame_draws_open_stroke_last() {
    let mut state = create_test_input_state();
    state.dispatch([press(1.0, 1.0), release(1.0, 1.0), key('b'), press(9.0, 9.0)]);

    let commands = state.compose_frame(&FrameStyle::default());
    assert_eq!(commands.len(), 3);
    assert!(matches!(
        commands[2],
        DrawCommand::FillEllipse { color, .. } if color == crate::draw::BLUE
    ));
}

#[test]
fn pointer_log_is_throttled() {
    let mut log = DebugLog::new(true, Duration::from_millis(150));
    let start = Instant::now();

    assert!(log.should_log_pointer(start));
    assert!(!log.should_log_pointer(start + Duration::from_millis(50)));
    assert!(!log.should_log_pointer(start + Duration::from_millis(149)));
    assert!(log.should_log_pointer(start + Duration::from_millis(150)));
    assert!(!log.should_log_pointer(start + Duration::from_millis(200)));
}

#[test]
fn disabled_debug_log_never_logs() {
    let mut log = DebugLog::default();
    assert!(!log.enabled());
    assert!(!log.should_log_pointer(Instant::now()));
}

#[test]
fn from_config_uses_drawing_defaults() {
    let mut config = crate::config::Config::default();
    config.drawing.default_color = crate::config::ColorSpec::Name("orange".into());
    config.drawing.default_width = 3.0;

    let state = InputState::from_config(&config, true);
    assert_eq!(state.tool.color, ORANGE);
    assert_eq!(state.tool.width_dp, 3.0);
    assert!(state.debug.enabled());
}
