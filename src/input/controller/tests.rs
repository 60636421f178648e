use super::*;
use crate::config::Config;
use crate::draw::{BLACK, Canvas, Color, NoteSize, RED, Stroke, view};
use crate::input::{BoardCommand, Mode, MouseButton};
use crate::session::BoardDocument;
use crate::util::{Point, Rect};

fn create_board() -> BoardController {
    BoardController::default()
}

fn stroke_points(board: &BoardController) -> Vec<(Point, Point)> {
    board
        .canvas()
        .strokes()
        .map(|(_, stroke)| (stroke.start, stroke.end))
        .collect()
}

fn draw_path(board: &mut BoardController, points: &[(f64, f64)]) {
    let (x, y) = points[0];
    board.on_pointer_down(MouseButton::Left, x, y);
    for &(x, y) in &points[1..] {
        board.on_pointer_move(x, y);
    }
    board.on_pointer_up();
}

#[test]
fn starts_in_pan_mode() {
    let board = create_board();
    assert_eq!(board.mode(), Mode::Pan);
    assert!(!board.is_drawing());
    assert!(!board.is_erasing());
    assert_eq!(board.gesture(), Gesture::Idle);
}

#[test]
fn modes_stay_mutually_exclusive() {
    let mut board = create_board();
    let toggles = [true, false, false, true, true, false, true, true, false, false];
    for drawing in toggles {
        if drawing {
            board.toggle_drawing();
        } else {
            board.toggle_eraser();
        }
        assert!(!(board.is_drawing() && board.is_erasing()));
    }

    board.toggle_drawing();
    assert!(board.is_drawing());
    board.toggle_eraser();
    assert!(board.is_erasing());
    assert!(!board.is_drawing());
}

#[test]
fn each_move_appends_one_segment() {
    let mut board = create_board();
    board.toggle_drawing();
    draw_path(&mut board, &[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (10.0, 5.0)]);

    assert_eq!(
        stroke_points(&board),
        vec![
            (Point::new(0.0, 0.0), Point::new(5.0, 0.0)),
            (Point::new(5.0, 0.0), Point::new(5.0, 5.0)),
            (Point::new(5.0, 5.0), Point::new(10.0, 5.0)),
        ]
    );
    assert_eq!(board.gesture(), Gesture::Idle);
    assert!(board.is_drawing());
}

#[test]
fn moves_without_press_draw_nothing() {
    let mut board = create_board();
    board.toggle_drawing();
    board.on_pointer_move(3.0, 3.0);
    board.on_pointer_down(MouseButton::Left, 0.0, 0.0);
    board.on_pointer_up();
    board.on_pointer_move(8.0, 8.0);
    assert_eq!(board.canvas().stroke_count(), 0);
}

#[test]
fn strokes_snapshot_the_pen() {
    let mut board = create_board();
    board.toggle_drawing();
    board.set_pen_width(3.0);
    draw_path(&mut board, &[(0.0, 0.0), (1.0, 1.0)]);

    board.set_pen_color(Some(RED));
    board.set_pen_width(12.0);
    draw_path(&mut board, &[(2.0, 2.0), (3.0, 3.0)]);

    board.set_pen_color(None);
    assert_eq!(board.state().pen.color, RED);

    let strokes: Vec<Stroke> = board.canvas().strokes().map(|(_, s)| *s).collect();
    assert_eq!((strokes[0].color, strokes[0].width), (BLACK, 3.0));
    assert_eq!((strokes[1].color, strokes[1].width), (RED, 12.0));
}

#[test]
fn drawing_maps_screen_to_canvas_space() {
    let mut board = create_board();
    board.on_scroll(1.0);
    board.on_scroll(1.0);
    let zoom = board.view().zoom;

    board.toggle_drawing();
    draw_path(&mut board, &[(0.0, 0.0), (121.0, 60.5)]);

    let (_, end) = stroke_points(&board)[0];
    assert!((end.x - 121.0 / zoom).abs() < 1e-9);
    assert!((end.y - 60.5 / zoom).abs() < 1e-9);
}

#[test]
fn eraser_removes_contained_and_keeps_distant_strokes() {
    let mut board = create_board();
    board.toggle_drawing();
    board.set_pen_width(2.0);
    draw_path(&mut board, &[(100.0, 100.0), (104.0, 104.0)]);
    draw_path(&mut board, &[(300.0, 300.0), (310.0, 300.0)]);
    assert_eq!(board.canvas().stroke_count(), 2);

    board.toggle_eraser();
    board.on_pointer_down(MouseButton::Left, 102.0, 102.0);
    board.on_pointer_up();

    let remaining = stroke_points(&board);
    assert_eq!(remaining, vec![(Point::new(300.0, 300.0), Point::new(310.0, 300.0))]);
}

#[test]
fn eraser_uses_bounding_box_not_segment_distance() {
    let mut board = create_board();
    board.toggle_drawing();
    board.set_pen_width(1.0);
    // Long diagonal: the corner (95, 5) is far from the segment but inside its box.
    draw_path(&mut board, &[(0.0, 0.0), (100.0, 100.0)]);

    board.set_eraser_size(4.0);
    let removed = board.erase_at(Point::new(95.0, 5.0));
    assert_eq!(removed, 1);
    assert_eq!(board.canvas().stroke_count(), 0);
}

#[test]
fn eraser_never_touches_non_intersecting_boxes() {
    let mut board = create_board();
    board.toggle_drawing();
    board.set_pen_width(2.0);
    draw_path(&mut board, &[(0.0, 0.0), (10.0, 0.0)]);

    board.set_eraser_size(10.0);
    let stroke_box = board.canvas().strokes().next().unwrap().1.bounding_box();
    let point = Point::new(30.0, 30.0);
    assert!(!Rect::centered_square(point, 10.0).intersects(&stroke_box));
    assert_eq!(board.erase_at(point), 0);
    assert_eq!(board.canvas().stroke_count(), 1);
}

#[test]
fn erasing_continues_while_held() {
    let mut board = create_board();
    board.toggle_drawing();
    draw_path(&mut board, &[(0.0, 0.0), (1.0, 0.0)]);
    draw_path(&mut board, &[(200.0, 0.0), (201.0, 0.0)]);
    draw_path(&mut board, &[(400.0, 0.0), (401.0, 0.0)]);

    board.toggle_eraser();
    board.on_pointer_down(MouseButton::Left, 0.0, 0.0);
    assert_eq!(board.gesture(), Gesture::Erasing);
    board.on_pointer_move(200.0, 0.0);
    assert_eq!(board.canvas().stroke_count(), 1);

    board.on_pointer_up();
    board.on_pointer_move(400.0, 0.0);
    assert_eq!(board.canvas().stroke_count(), 1);
}

#[test]
fn zoom_steps_and_clamps() {
    let mut board = create_board();
    board.on_scroll(120.0);
    assert!((board.view().zoom - 1.1).abs() < 1e-9);
    board.on_scroll(-120.0);
    assert!((board.view().zoom - 1.0).abs() < 1e-9);
    board.on_scroll(0.0);
    assert!((board.view().zoom - 1.0).abs() < 1e-9);

    let deltas = [1.0, 1.0, -1.0, 1.0, 1.0, 1.0];
    for _ in 0..40 {
        for delta in deltas {
            board.on_scroll(delta);
            assert!((view::MIN_ZOOM..=view::MAX_ZOOM).contains(&board.view().zoom));
        }
    }
    assert_eq!(board.view().zoom, view::MAX_ZOOM);

    for _ in 0..100 {
        board.on_scroll(-1.0);
        assert!((view::MIN_ZOOM..=view::MAX_ZOOM).contains(&board.view().zoom));
    }
    assert_eq!(board.view().zoom, view::MIN_ZOOM);
}

#[test]
fn zoom_does_not_touch_model_coordinates() {
    let mut board = create_board();
    let id = board.add_note("fixed", NoteSize::Small);
    board.on_scroll(1.0);
    board.on_scroll(1.0);

    let note = board.canvas().note(id).unwrap();
    assert_eq!(note.position, Point::new(0.0, 0.0));
    assert_eq!(note.width, 150.0);
    assert_eq!(board.canvas().view().zoom, board.view().zoom);
}

#[test]
fn panning_moves_view_opposite_to_drag() {
    let mut board = create_board();
    board.on_pointer_down(MouseButton::Left, 500.0, 500.0);
    assert!(matches!(board.gesture(), Gesture::Panning { .. }));
    board.on_pointer_move(520.0, 490.0);
    board.on_pointer_move(530.0, 490.0);
    board.on_pointer_up();

    assert_eq!(board.view().offset_x, -30.0);
    assert_eq!(board.view().offset_y, 10.0);
    assert_eq!(board.canvas().view(), board.view());
    assert_eq!(board.canvas().stroke_count(), 0);
}

#[test]
fn pointer_on_note_drags_it_in_any_mode() {
    let mut board = create_board();
    let id = board.add_note("drag me", NoteSize::Small);
    board.toggle_drawing();

    board.on_pointer_down(MouseButton::Left, 10.0, 10.0);
    assert!(matches!(board.gesture(), Gesture::DraggingNote { .. }));
    board.on_pointer_move(40.0, 30.0);
    board.on_pointer_up();

    assert_eq!(board.canvas().stroke_count(), 0);
    assert_eq!(board.canvas().note(id).unwrap().position, Point::new(30.0, 20.0));
    assert_eq!(board.selected_note(), Some(id));
    assert_eq!(board.view().offset_x, 0.0);
}

#[test]
fn eraser_press_on_note_does_not_erase() {
    let mut board = create_board();
    board.toggle_drawing();
    draw_path(&mut board, &[(10.0, 10.0), (20.0, 20.0)]);
    board.add_note("cover", NoteSize::Small);

    board.toggle_eraser();
    board.on_pointer_down(MouseButton::Left, 15.0, 15.0);
    board.on_pointer_up();
    assert_eq!(board.canvas().stroke_count(), 1);
}

#[test]
fn delete_note_requires_selection() {
    let mut board = create_board();
    let keep = board.add_note("keep", NoteSize::Small);
    assert!(board.delete_note().is_none());
    assert_eq!(board.canvas().note_count(), 1);

    let far = board.add_note("ignored", NoteSize::Small);
    board.move_note(far, 400.0, 400.0);

    board.on_pointer_down(MouseButton::Right, 410.0, 410.0);
    assert_eq!(board.selected_note(), Some(far));
    let removed = board.delete_note().unwrap();
    assert_eq!(removed.text, "ignored");
    assert!(board.canvas().note(keep).is_some());
    assert_eq!(board.selected_note(), None);
    assert!(board.delete_note().is_none());

    // Right-click on empty board clears the selection.
    board.select_note_at(10.0, 10.0);
    board.select_note_at(900.0, 900.0);
    assert!(board.delete_note().is_none());
    assert_eq!(board.canvas().note_count(), 1);
}

#[test]
fn note_edits_apply_and_reject_bad_sizes() {
    let mut board = create_board();
    let id = board.add_note("", NoteSize::Large);
    assert_eq!(board.canvas().note(id).unwrap().text, "New Note");

    assert!(board.edit_note_text(id, "Call mum"));
    assert!(board.resize_note(id, 320.0, 180.0));
    assert!(!board.resize_note(id, 0.0, 180.0));
    assert!(!board.resize_note(id, f64::INFINITY, 10.0));
    assert!(board.move_note(id, -5.0, 7.0));

    let note = board.canvas().note(id).unwrap();
    assert_eq!(note.text, "Call mum");
    assert_eq!((note.width, note.height), (320.0, 180.0));
    assert_eq!(note.position, Point::new(-5.0, 7.0));

    board.select_note_at(0.0, 10.0);
    board.delete_note();
    assert!(!board.edit_note_text(id, "gone"));
    assert!(!board.move_note(id, 0.0, 0.0));
}

#[test]
fn load_replaces_instead_of_merging() {
    let mut board = create_board();
    for i in 0..5 {
        board.add_note(format!("n{i}"), NoteSize::Normal);
    }
    board.toggle_drawing();
    draw_path(&mut board, &[(0.0, 300.0), (1.0, 300.0), (2.0, 300.0), (3.0, 300.0)]);
    assert_eq!(board.canvas().stroke_count(), 3);

    let document = BoardDocument::from_json_slice(
        br#"{"notes": [{"text": "a", "pos": [0, 0], "size": [10, 10]},
                       {"text": "b", "pos": [1, 1], "size": [10, 10]}],
             "lines": [{"start": [0, 0], "end": [1, 1]}]}"#,
    )
    .unwrap();
    board.load_document(&document);

    assert_eq!(board.canvas().note_count(), 2);
    assert_eq!(board.canvas().stroke_count(), 1);
    assert_eq!(board.selected_note(), None);
    assert!(board.is_drawing());
}

#[test]
fn load_empty_object_yields_empty_board() {
    let mut board = create_board();
    board.add_note("x", NoteSize::Small);
    board.load_document(&BoardDocument::from_json_slice(b"{}").unwrap());
    assert_eq!(board.canvas().note_count(), 0);
    assert_eq!(board.canvas().stroke_count(), 0);
}

#[test]
fn loaded_lines_use_current_pen_and_notes_fixed_font() {
    let mut config = Config::default();
    config.notes.load_font_size = 16.0;
    let mut board = BoardController::from_config(&config);
    board.add_note("tiny", NoteSize::Small);
    board.toggle_drawing();
    draw_path(&mut board, &[(0.0, 300.0), (9.0, 300.0)]);
    let document = board.document();

    let green = Color::new(0.0, 0.5, 0.0, 1.0);
    board.set_pen_color(Some(green));
    board.set_pen_width(9.0);
    board.load_document(&document);

    let stroke = *board.canvas().strokes().next().unwrap().1;
    assert_eq!((stroke.color, stroke.width), (green, 9.0));
    let note = board.canvas().notes().next().unwrap().1;
    assert_eq!(note.font.size, 16.0);
    assert_eq!(note.font.family, "Arial");
}

#[test]
fn config_seeds_initial_state() {
    let mut config = Config::default();
    config.pen.default_color = crate::config::ColorSpec::Name("red".into());
    config.pen.default_width = 8.0;
    config.eraser.default_size = 33.0;
    config.notes.font_family = "Sans".into();

    let mut board = BoardController::from_config(&config);
    assert_eq!(board.state().pen.color, RED);
    assert_eq!(board.state().pen.width, 8.0);
    assert_eq!(board.state().eraser.size, 33.0);
    let id = board.add_note("x", NoteSize::Normal);
    assert_eq!(board.canvas().note(id).unwrap().font.family, "Sans");
}

#[test]
fn dispatch_drives_the_same_operations() {
    let mut board = create_board();
    let commands = vec![
        BoardCommand::AddNote {
            text: "Buy milk".into(),
            size: NoteSize::Small,
        },
        BoardCommand::ToggleDrawing,
        BoardCommand::SetPenWidth { width: 50.0 },
        BoardCommand::PointerDown {
            button: MouseButton::Left,
            x: 200.0,
            y: 200.0,
        },
        BoardCommand::PointerMove { x: 210.0, y: 200.0 },
        BoardCommand::PointerMove { x: 220.0, y: 200.0 },
        BoardCommand::PointerUp,
        BoardCommand::Scroll { delta: 1.0 },
        BoardCommand::SetPenColor { color: None },
        BoardCommand::Save { path: None },
        BoardCommand::Load { path: None },
    ];
    for command in commands {
        board.dispatch(command).unwrap();
    }

    assert_eq!(board.canvas().note_count(), 1);
    assert_eq!(board.canvas().stroke_count(), 2);
    assert_eq!(board.state().pen.width, 20.0);
    assert!((board.view().zoom - 1.1).abs() < 1e-9);
}

#[test]
fn dispatch_save_and_load_round_trip() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("board.json");

    let mut board = create_board();
    board.add_note("persist", NoteSize::Normal);
    board
        .dispatch(BoardCommand::Save {
            path: Some(path.clone()),
        })
        .unwrap();

    let mut other = create_board();
    other
        .dispatch(BoardCommand::Load {
            path: Some(path.clone()),
        })
        .unwrap();
    assert_eq!(other.document(), board.document());
}

#[test]
fn failed_load_keeps_current_board() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let mut board = create_board();
    board.add_note("survivor", NoteSize::Small);
    let result = board.dispatch(BoardCommand::Load { path: Some(path) });
    assert!(result.is_err());
    assert_eq!(board.canvas().note_count(), 1);
}

#[test]
fn toggling_mode_cancels_gesture() {
    let mut board = create_board();
    board.toggle_drawing();
    board.on_pointer_down(MouseButton::Left, 0.0, 0.0);
    board.toggle_eraser();
    assert_eq!(board.gesture(), Gesture::Idle);
    board.on_pointer_move(10.0, 10.0);
    assert_eq!(board.canvas().stroke_count(), 0);
}

#[test]
fn non_finite_positions_are_rejected() {
    let mut board = create_board();
    let id = board.add_note("anchored", NoteSize::Small);
    assert!(!board.move_note(id, f64::NAN, 3.0));
    assert!(!board.move_note(id, 3.0, f64::NEG_INFINITY));
    assert_eq!(board.canvas().note(id).unwrap().position, Point::new(0.0, 0.0));

    board.toggle_drawing();
    board.on_pointer_down(MouseButton::Left, f64::NAN, 400.0);
    assert_eq!(board.gesture(), Gesture::Idle);

    board.on_pointer_down(MouseButton::Left, 400.0, 400.0);
    board.on_pointer_move(f64::INFINITY, 410.0);
    board.on_pointer_move(410.0, 410.0);
    board.on_pointer_up();
    assert_eq!(
        stroke_points(&board),
        vec![(Point::new(400.0, 400.0), Point::new(410.0, 410.0))]
    );

    board.on_pointer_down(MouseButton::Left, 10.0, 10.0);
    board.on_pointer_move(f64::NAN, f64::NAN);
    board.on_pointer_up();
    assert_eq!(board.canvas().note(id).unwrap().position, Point::new(0.0, 0.0));
}

#[test]
fn board_stays_loadable_after_rejected_input() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("board.json");

    let mut board = create_board();
    let id = board.add_note("kept", NoteSize::Normal);
    board.move_note(id, f64::NAN, 3.0);
    board.save_to(&path).unwrap();

    let mut reloaded = create_board();
    reloaded.load_from(&path).unwrap();
    assert_eq!(reloaded.document(), board.document());
}
