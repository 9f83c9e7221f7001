use super::*;

#[test]
fn cursor_starts_on_line_one() {
    let cursor = ScanCursor::default();
    assert_eq!(cursor.position, 0);
    assert_eq!(cursor.line, 1);
}

#[test]
fn cursor_advances_monotonically() {
    let mut cursor = ScanCursor::default();
    cursor.advance(3);
    cursor.advance(2);
    cursor.next_line();
    assert_eq!(cursor.position, 5);
    assert_eq!(cursor.line, 2);
}

#[test]
fn blank_run_counts_consecutive_blank_lines() {
    let mut line = LineState::default();

    line.mark_non_blank();
    line.record_blank_run();
    assert_eq!(line.blank_run, 0);
    assert!(line.line_is_blank);

    line.record_blank_run();
    line.record_blank_run();
    assert_eq!(line.blank_run, 2);

    line.mark_non_blank();
    line.record_blank_run();
    assert_eq!(line.blank_run, 0);
}

#[test]
fn start_line_resets_length_only() {
    let mut line = LineState {
        length: 40,
        indentation_hint: 1,
        current_indentation: 2,
        ..LineState::default()
    };
    line.start_line(120);

    assert_eq!(line.length, 0);
    assert_eq!(line.line_start, 120);
    assert_eq!(line.indentation_hint, 1);
    assert_eq!(line.current_indentation, 2);
}

#[test]
fn suppression_defaults_to_active() {
    let suppression = SuppressionState::default();
    assert!(suppression.is_active(1));
    assert!(suppression.is_active(500));
}

#[test]
fn suppressed_line_disables_exactly_that_line() {
    let suppression = SuppressionState {
        suppressed_line: Some(4),
        file_suppressed: false,
    };
    assert!(suppression.is_active(3));
    assert!(!suppression.is_active(4));
    assert!(suppression.is_active(5));
}

#[test]
fn file_suppression_disables_every_line() {
    let suppression = SuppressionState {
        suppressed_line: None,
        file_suppressed: true,
    };
    assert!(!suppression.is_active(1));
    assert!(!suppression.is_active(99));
}

#[test]
fn scan_state_follows_cursor_line() {
    let mut state = ScanState::new();
    state.suppression.suppressed_line = Some(2);
    assert!(state.styling_active());
    state.cursor.next_line();
    assert!(!state.styling_active());
}
