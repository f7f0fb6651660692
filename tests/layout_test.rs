use photo_museum::{layout, layout_named, LayoutMode, MuseumError};
use std::collections::HashSet;

const MODES: [LayoutMode; 3] = [LayoutMode::Wall, LayoutMode::Circle, LayoutMode::Grid];

#[test]
fn test_one_placement_per_photo() {
    for mode in MODES {
        for count in 0..=50 {
            assert_eq!(layout(count, mode).len(), count, "{} x {}", mode, count);
        }
    }
}

#[test]
fn test_layouts_are_deterministic() {
    for mode in MODES {
        for count in [0, 1, 5, 12, 33] {
            assert_eq!(layout(count, mode), layout(count, mode));
        }
    }
}

#[test]
fn test_wall_and_grid_positions_are_distinct() {
    for mode in [LayoutMode::Wall, LayoutMode::Grid] {
        for count in 1..=40 {
            let positions: HashSet<(i64, i64)> = layout(count, mode)
                .iter()
                .map(|p| {
                    (
                        (p.position.x * 1000.0).round() as i64,
                        (p.position.y * 1000.0).round() as i64,
                    )
                })
                .collect();
            assert_eq!(positions.len(), count, "{} x {}", mode, count);
        }
    }
}

#[test]
fn test_wall_never_exceeds_four_columns() {
    for count in 1..=30 {
        let placements = layout(count, LayoutMode::Wall);
        let top = placements[0].position.y;
        let top_row = placements
            .iter()
            .filter(|p| (p.position.y - top).abs() < 1e-9)
            .count();
        assert_eq!(top_row, count.min(4));
    }
}

#[test]
fn test_wall_five_photos_scenario() {
    let placements = layout(5, LayoutMode::Wall);

    let row0: Vec<_> = placements[..4].iter().map(|p| p.position.y).collect();
    assert!(row0.iter().all(|y| *y == row0[0]));
    assert!(placements[4].position.y < row0[0]);
    assert_ne!(placements[4].position.y, placements[3].position.y);
}

#[test]
fn test_circle_shares_height_and_spacing() {
    for count in 1..=24 {
        let placements = layout(count, LayoutMode::Circle);
        assert!(placements.iter().all(|p| p.position.y == 2.0));

        let step = 360.0 / count as f64;
        for (i, p) in placements.iter().enumerate() {
            // rotation.y = 180 - angle
            let angle = 180.0 - p.rotation.y;
            assert!((angle - step * i as f64).abs() < 1e-9);
        }

        let total: f64 = (0..count).map(|_| step).sum();
        assert!((total - 360.0).abs() < 1e-9);
    }
}

#[test]
fn test_unknown_layout_name() {
    assert!(matches!(
        layout_named(4, "mosaic"),
        Err(MuseumError::UnsupportedLayout(_))
    ));
    assert_eq!(layout_named(4, "Circle").unwrap(), layout(4, LayoutMode::Circle));
}
