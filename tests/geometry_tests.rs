use sonar::{
    enumerate_placements, hit_run, neighbors, placement_fits, CellStatus, Dimensions, Direction,
    Grid, Orientation, Placement,
};

#[test]
fn test_horizontal_placements_scan_rows_first() {
    let dims = Dimensions::new(2, 3);
    let placements = enumerate_placements(dims, 2, Orientation::Horizontal, |_, _| false);
    let origins: Vec<(usize, usize)> = placements.iter().map(|p| (p.row, p.col)).collect();
    assert_eq!(origins, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    let cells: Vec<(usize, usize)> = placements[0].cells().collect();
    assert_eq!(cells, vec![(0, 0), (0, 1)]);
}

#[test]
fn test_vertical_placements_scan_columns_first() {
    let dims = Dimensions::new(3, 2);
    let placements = enumerate_placements(dims, 2, Orientation::Vertical, |_, _| false);
    let origins: Vec<(usize, usize)> = placements.iter().map(|p| (p.row, p.col)).collect();
    assert_eq!(origins, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    let cells: Vec<(usize, usize)> = placements[0].cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0)]);
}

#[test]
fn test_blocked_cells_veto_overlapping_placements() {
    let dims = Dimensions::new(1, 3);
    let all = enumerate_placements(dims, 2, Orientation::Horizontal, |_, _| false);
    assert_eq!(all.len(), 2);
    let end_blocked = enumerate_placements(dims, 2, Orientation::Horizontal, |_, c| c == 2);
    assert_eq!(end_blocked.len(), 1);
    assert_eq!((end_blocked[0].row, end_blocked[0].col), (0, 0));
    let mid_blocked = enumerate_placements(dims, 2, Orientation::Horizontal, |_, c| c == 1);
    assert!(mid_blocked.is_empty());
}

#[test]
fn test_degenerate_lengths_have_no_placements() {
    let dims = Dimensions::new(1, 3);
    assert!(enumerate_placements(dims, 0, Orientation::Horizontal, |_, _| false).is_empty());
    assert!(enumerate_placements(dims, 4, Orientation::Horizontal, |_, _| false).is_empty());
    assert!(enumerate_placements(dims, 2, Orientation::Vertical, |_, _| false).is_empty());
}

#[test]
fn test_neighbors_clip_at_the_edges() {
    let dims = Dimensions::new(3, 3);
    let mut corner: Vec<(usize, usize)> = neighbors(dims, 0, 0).collect();
    corner.sort_unstable();
    assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);
    assert_eq!(neighbors(dims, 1, 1).count(), 8);
}

#[test]
fn test_placement_fits_enforces_the_no_touch_rule() {
    let dims = Dimensions::new(4, 4);
    let mut occupied = Grid::new(dims, false);
    occupied[(1, 1)] = true;

    let overlapping = Placement {
        row: 1,
        col: 1,
        length: 1,
        orientation: Orientation::Horizontal,
    };
    assert!(!placement_fits(&occupied, &overlapping));

    // diagonal contact counts as touching
    let diagonal = Placement {
        row: 0,
        col: 2,
        length: 2,
        orientation: Orientation::Horizontal,
    };
    assert!(!placement_fits(&occupied, &diagonal));

    let clear = Placement {
        row: 3,
        col: 0,
        length: 2,
        orientation: Orientation::Horizontal,
    };
    assert!(placement_fits(&occupied, &clear));
}

#[test]
fn test_direction_steps_stop_at_the_grid_edge() {
    let dims = Dimensions::new(2, 2);
    assert_eq!(Direction::Up.step(dims, (0, 0)), None);
    assert_eq!(Direction::Left.step(dims, (0, 0)), None);
    assert_eq!(Direction::Down.step(dims, (1, 1)), None);
    assert_eq!(Direction::Right.step(dims, (1, 1)), None);
    assert_eq!(Direction::Down.step(dims, (0, 0)), Some((1, 0)));
    for dir in Direction::ALL {
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

#[test]
fn test_hit_run_spans_the_contiguous_hits() {
    let dims = Dimensions::new(1, 5);
    let mut status = Grid::new(dims, CellStatus::Unknown);
    status[(0, 1)] = CellStatus::Hit;
    status[(0, 2)] = CellStatus::Hit;
    status[(0, 3)] = CellStatus::Hit;
    assert_eq!(
        hit_run(&status, (0, 2), Orientation::Horizontal),
        vec![(0, 1), (0, 2), (0, 3)]
    );
    assert_eq!(
        hit_run(&status, (0, 2), Orientation::Vertical),
        vec![(0, 2)]
    );
    // runs from an end cell cover the same span
    assert_eq!(
        hit_run(&status, (0, 1), Orientation::Horizontal),
        vec![(0, 1), (0, 2), (0, 3)]
    );
}

#[test]
fn test_hit_runs_split_per_orientation_at_a_crossing() {
    let dims = Dimensions::new(3, 3);
    let mut status = Grid::new(dims, CellStatus::Unknown);
    for cell in [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)] {
        status[cell] = CellStatus::Hit;
    }
    assert_eq!(
        hit_run(&status, (1, 1), Orientation::Horizontal),
        vec![(1, 0), (1, 1), (1, 2)]
    );
    assert_eq!(
        hit_run(&status, (1, 1), Orientation::Vertical),
        vec![(0, 1), (1, 1), (2, 1)]
    );
}
