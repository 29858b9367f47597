use minitools::core::{LinearScale, count_in_pixel_range, count_in_range, gap_counts, split_at_threshold};
use minitools::interaction::{DragEvent, DragPhase, ThresholdHandle, ThresholdLineSet};

#[test]
fn threshold_handle_follows_total_translation() {
    let handle = ThresholdHandle::new(200.0).apply(DragEvent::Start, 0.0, 600.0);
    assert_eq!(handle.phase(), DragPhase::Dragging { reference: 200.0 });

    let handle = handle
        .apply(DragEvent::Update { translation: 15.0 }, 0.0, 600.0)
        .apply(DragEvent::Update { translation: 40.0 }, 0.0, 600.0);
    assert_eq!(handle.position(), 240.0);

    let handle = handle.apply(DragEvent::End, 0.0, 600.0);
    assert!(!handle.phase().is_dragging());
    assert_eq!(handle.position(), 240.0);
}

#[test]
fn threshold_handle_is_clamped_to_bounds() {
    let start = ThresholdHandle::new(100.0).apply(DragEvent::Start, 0.0, 600.0);

    let left = start.apply(DragEvent::Update { translation: -400.0 }, 0.0, 600.0);
    let right = start.apply(DragEvent::Update { translation: 900.0 }, 0.0, 600.0);

    assert_eq!(left.position(), 0.0);
    assert_eq!(right.position(), 600.0);
}

#[test]
fn threshold_handle_ignores_updates_while_idle() {
    let idle = ThresholdHandle::new(100.0);
    let after = idle.apply(DragEvent::Update { translation: 50.0 }, 0.0, 600.0);

    assert_eq!(after, idle);
}

#[test]
fn threshold_handle_inverts_to_domain_value() {
    let scale = LinearScale::with_width(0.0, 130.0, 650.0);
    let handle = ThresholdHandle::at_value(80.0, scale);

    assert_eq!(handle.position(), 400.0);
    assert!((handle.value(scale) - 80.0).abs() <= 1e-9);
}

#[test]
fn split_counts_threshold_value_below() {
    let split = split_at_threshold(&[10.0, 20.0, 20.0, 30.0, f64::NAN], 20.0);

    assert_eq!(split.at_or_below, 3);
    assert_eq!(split.above, 1);
    assert_eq!(split.total(), 4);
}

#[test]
fn range_counts_are_inclusive() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(count_in_range(&values, 2.0, 4.0), 3);
    assert_eq!(count_in_range(&values, 4.0, 2.0), 0);

    let scale = LinearScale::with_width(0.0, 10.0, 100.0);
    assert_eq!(count_in_pixel_range(&values, scale, 20.0, 40.0), 3);
}

#[test]
fn gap_counts_split_chart_at_cut_lines() {
    let scale = LinearScale::with_width(0.0, 100.0, 100.0);
    let values = [5.0, 25.0, 50.0, 75.0, 100.0];

    let gaps = gap_counts(&values, scale, &[50.0, 25.0, 50.0], 100.0);
    let spans: Vec<(f64, f64, usize)> = gaps
        .iter()
        .map(|gap| (gap.start_px, gap.end_px, gap.count))
        .collect();

    // Half-open gaps: the value on the chart's right edge is not counted.
    assert_eq!(spans, vec![(0.0, 25.0, 1), (25.0, 50.0, 1), (50.0, 100.0, 2)]);
    assert_eq!(gaps[0].mid_px(), 12.5);
}

#[test]
fn gap_counts_without_cuts_is_empty() {
    let scale = LinearScale::with_width(0.0, 100.0, 100.0);

    assert!(gap_counts(&[1.0], scale, &[], 100.0).is_empty());
    assert_eq!(gap_counts(&[1.0], scale, &[-5.0, 400.0], 100.0).len(), 1);
}

#[test]
fn lines_are_added_clamped_and_sorted() {
    let mut lines = ThresholdLineSet::new(300.0);
    let right = lines.add_at(250.0);
    let left = lines.add_at(-20.0);
    let beyond = lines.add_at(900.0);

    assert_ne!(right, left);
    assert_eq!(lines.positions(), vec![0.0, 250.0, 300.0]);
    assert!(lines.remove(beyond));
    assert!(!lines.remove(beyond));
    assert_eq!(lines.positions(), vec![0.0, 250.0]);
}

#[test]
fn dragging_a_line_reorders_the_set() {
    let mut lines = ThresholdLineSet::new(300.0);
    let first = lines.add_at(50.0);
    lines.add_at(150.0);

    lines.apply(first, DragEvent::Start);
    assert_eq!(lines.dragging_id(), Some(first));
    lines.apply(first, DragEvent::Update { translation: 200.0 });
    lines.apply(first, DragEvent::End);

    assert_eq!(lines.dragging_id(), None);
    assert_eq!(lines.positions(), vec![150.0, 250.0]);
    assert_eq!(lines.lines()[1].id, first);
}

#[test]
fn guides_cannot_be_dragged_and_survive_clear() {
    let mut lines = ThresholdLineSet::new(200.0);
    lines.set_guides(&[0.0, 100.0, 200.0]);
    let manual = lines.add_at(60.0);

    let guide_id = lines.lines()[0].id;
    lines.apply(guide_id, DragEvent::Start);
    lines.apply(guide_id, DragEvent::Update { translation: 50.0 });
    assert_eq!(lines.dragging_id(), None);

    lines.clear_manual();
    assert_eq!(lines.positions(), vec![0.0, 100.0, 200.0]);
    assert!(lines.lines().iter().all(|line| !line.draggable && line.id != manual));

    lines.set_guides(&[]);
    assert!(lines.is_empty());
}

#[test]
fn line_set_reports_gap_counts() {
    let scale = LinearScale::with_width(0.0, 10.0, 100.0);
    let mut lines = ThresholdLineSet::new(100.0);
    lines.add_at(50.0);

    let counts: Vec<usize> = lines
        .gap_counts(&[1.0, 2.0, 5.0, 9.0], scale)
        .iter()
        .map(|gap| gap.count)
        .collect();

    assert_eq!(counts, vec![2, 2]);
}
