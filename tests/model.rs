use lifepad::{DragState, GameField, GridGeometry, Playback, Session};
use std::time::Duration;

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

const COLS: usize = 40;
const ROWS: usize = 40;
const CELL_SIZE: f64 = 15.;

fn assert_fields_equal(a: &GameField, b: &GameField) {
    assert_eq!(a.size(), b.size());
    let (w, h) = a.size();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            assert_eq!(a.get(x, y), b.get(x, y), "x={} y={}", x, y);
        }
    }
}

#[test]
fn test_isolated_cell_dies() {
    let mut field = GameField::blank(3, 3);
    field.set(1, 1, true);
    let next = field.step();
    assert_eq!(next.population(), 0);
}

#[test]
fn test_blinker_oscillates() {
    let mut field = GameField::blank(5, 5);
    for y in 0..3 {
        field.set(1, y, true);
    }

    let once = field.step();
    // the vertical bar flips to a horizontal one
    assert!(once.get(0, 1) && once.get(1, 1) && once.get(2, 1));
    assert_eq!(once.population(), 3);

    let twice = once.step();
    assert_fields_equal(&twice, &field);
}

#[test]
fn test_block_is_a_fixed_point() {
    let mut field = GameField::blank(4, 4);
    for y in 1..3 {
        for x in 1..3 {
            field.set(x, y, true);
        }
    }
    let next = field.step();
    assert_fields_equal(&next, &field);
}

#[test]
fn test_out_of_bounds_reads_dead() {
    let mut field = GameField::blank(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            field.set(x, y, true);
        }
    }
    assert!(!field.get(-1, 0));
    assert!(!field.get(0, -1));
    assert!(!field.get(4, 0));
    assert!(!field.get(0, 4));
    assert!(!field.get(i32::MIN, i32::MAX));
}

#[test]
fn test_clear_then_step_stays_dead() {
    let mut field = GameField::blank(8, 8);
    field.randomize(Some(SEED), FILL_RATE);
    field.clear();
    assert_eq!(field.population(), 0);
    assert_eq!(field.step().population(), 0);
}

#[test]
fn test_randomize_is_deterministic() {
    let mut a = GameField::blank(16, 16);
    let mut b = GameField::blank(16, 16);
    a.randomize(Some(SEED), FILL_RATE);
    b.randomize(Some(SEED), FILL_RATE);
    assert!(a.population() > 0);
    assert_fields_equal(&a, &b);
}

#[test]
fn test_cell_center_roundtrip() {
    let geometry = GridGeometry::new(COLS, ROWS, CELL_SIZE);
    for cy in 0..ROWS as i32 {
        for cx in 0..COLS as i32 {
            let (px, py) = geometry.cell_center(cx, cy);
            assert_eq!(geometry.cell_at(px, py), (cx, cy));
        }
    }
}

#[test]
fn test_snap_agrees_with_cell_lookup() {
    let geometry = GridGeometry::new(COLS, ROWS, CELL_SIZE);
    // sweep awkward positions, including near-boundary ones
    for i in 0..1000 {
        let (px, py) = geometry.clamp_to_scene(i as f64 * 0.61, i as f64 * 0.59);
        let (sx, sy) = geometry.snap_to_lattice(px, py);
        assert_eq!(geometry.cell_at(sx, sy), geometry.cell_at(px, py));
    }
}

#[test]
fn test_clamp_keeps_margin() {
    let geometry = GridGeometry::new(COLS, ROWS, CELL_SIZE);
    let margin = geometry.margin();
    let (px, py) = geometry.clamp_to_scene(-100., 1e6);
    assert_eq!((px, py), (margin, geometry.scene_height() - margin));
    let (cx, cy) = geometry.cell_at(px, py);
    assert_eq!((cx, cy), (0, ROWS as i32 - 1));
}

#[test]
fn test_speed_clamps_at_bounds() {
    let mut playback = Playback::new();
    assert_eq!(playback.speed(), Playback::DEFAULT_SPEED);

    for _ in 0..5 {
        playback.speed_up();
    }
    assert_eq!(playback.speed(), Playback::TOP_SPEED);
    playback.speed_up();
    assert_eq!(playback.speed(), Playback::TOP_SPEED);

    playback.set_speed(1);
    playback.speed_down();
    assert_eq!(playback.speed(), 1);
}

#[test]
fn test_invalid_speed_is_ignored() {
    let mut playback = Playback::new();
    playback.set_speed(Playback::TOP_SPEED + 1);
    assert_eq!(playback.speed(), Playback::DEFAULT_SPEED);
}

#[test]
fn test_start_stop_idempotent() {
    let mut playback = Playback::new();
    assert!(playback.start());
    assert!(!playback.start());
    assert!(playback.is_playing());
    assert!(playback.stop());
    assert!(!playback.stop());
    assert!(!playback.is_playing());
}

#[test]
fn test_tick_fires_at_speed_interval() {
    let mut playback = Playback::new();
    playback.set_speed(10); // 100 ms between generations
    playback.start();
    assert!(!playback.tick(Duration::from_millis(60)));
    assert!(playback.tick(Duration::from_millis(60)));
    // the accumulator resets after firing
    assert!(!playback.tick(Duration::from_millis(60)));
}

#[test]
fn test_stop_cancels_pending_tick() {
    let mut playback = Playback::new();
    playback.set_speed(10);
    playback.start();
    assert!(!playback.tick(Duration::from_millis(90)));
    playback.stop();
    assert!(!playback.tick(Duration::from_secs(10)));
    // restarting does not inherit the discarded time
    playback.start();
    assert!(!playback.tick(Duration::from_millis(90)));
}

#[test]
fn test_zero_speed_never_fires() {
    let mut playback = Playback::new();
    playback.set_speed(0);
    playback.start();
    assert!(!playback.tick(Duration::from_secs(60)));
}

#[test]
fn test_drag_paints_then_erases() {
    let mut session = Session::new(COLS, ROWS, CELL_SIZE);

    // a drag starting on a dead cell paints
    session.drag_started(22., 22.); // cell (1, 1)
    assert_eq!(session.drag(), DragState::Fill);
    assert!(session.field().get(1, 1));
    session.pointer_moved(37., 22.); // cell (2, 1)
    assert!(session.field().get(2, 1));
    session.drag_ended();
    assert_eq!(session.drag(), DragState::Off);

    // a drag starting on a live cell erases
    session.drag_started(22., 22.);
    assert_eq!(session.drag(), DragState::Clear);
    assert!(!session.field().get(1, 1));
    session.pointer_moved(37., 22.);
    assert!(!session.field().get(2, 1));
    session.drag_ended();
}

#[test]
fn test_drag_start_while_dragging_is_ignored() {
    let mut session = Session::new(COLS, ROWS, CELL_SIZE);
    session.drag_started(22., 22.);
    assert!(session.field().get(1, 1));
    // a second press event must not toggle the cell back
    session.drag_started(22., 22.);
    assert_eq!(session.drag(), DragState::Fill);
    assert!(session.field().get(1, 1));
}

#[test]
fn test_pointer_leave_hides_cursor_and_ends_drag() {
    let mut session = Session::new(COLS, ROWS, CELL_SIZE);
    session.drag_started(22., 22.);
    session.pointer_moved(50., 50.);
    assert_eq!(session.cursor_cell(), Some((3, 3)));
    session.pointer_left();
    assert_eq!(session.cursor_cell(), None);
    assert_eq!(session.drag(), DragState::Off);
}

#[test]
fn test_cursor_snaps_to_cell_center() {
    let mut session = Session::new(COLS, ROWS, CELL_SIZE);
    session.pointer_moved(20., 20.);
    assert_eq!(session.cursor_cell(), Some((1, 1)));
    assert_eq!(session.cursor(), Some(session.geometry().cell_center(1, 1)));
}

#[test]
fn test_clear_stops_playback() {
    let mut session = Session::new(COLS, ROWS, CELL_SIZE);
    session.drag_started(22., 22.);
    session.drag_ended();
    session.start();
    assert!(session.is_running());
    session.clear();
    assert!(!session.is_running());
    assert_eq!(session.field().population(), 0);
    assert_eq!(session.generation(), 0);
}

#[test]
fn test_advance_steps_when_throttle_fires() {
    let mut session = Session::new(5, 5, CELL_SIZE);
    // paint a blinker down column 1 with a single drag
    for cy in 0..3 {
        let (px, py) = session.geometry().cell_center(1, cy);
        if cy == 0 {
            session.drag_started(px, py);
        } else {
            session.pointer_moved(px, py);
        }
    }
    session.drag_ended();
    assert_eq!(session.field().population(), 3);

    session.start();
    // default speed 5 -> one generation per 200 ms
    session.advance(Duration::from_millis(150));
    assert_eq!(session.generation(), 0);
    session.advance(Duration::from_millis(100));
    assert_eq!(session.generation(), 1);
    assert!(session.field().get(0, 1));
    assert!(session.field().get(1, 1));
    assert!(session.field().get(2, 1));

    session.stop();
    session.advance(Duration::from_secs(10));
    assert_eq!(session.generation(), 1);
}
