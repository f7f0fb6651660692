//! Placement generation for the three room layouts.
//!
//! Every function here is pure: the same `(count, mode)` always produces the
//! same placements, one per photo.

use crate::domain::model::{LayoutMode, PlacementSpec, Vec3};
use crate::utils::error::Result;
use std::f64::consts::PI;

const WALL_MAX_COLUMNS: usize = 4;
const WALL_SPACING: f64 = 3.0;
const WALL_DEPTH: f64 = -7.0;

const CIRCLE_MIN_RADIUS: f64 = 5.0;
const CIRCLE_RADIUS_PER_PHOTO: f64 = 0.8;
const CIRCLE_HEIGHT: f64 = 2.0;

const GRID_SPACING: f64 = 2.5;
const GRID_DEPTH: f64 = -6.0;

const BASE_HEIGHT: f64 = 2.0;
const ROW_HEIGHT: f64 = 2.0;

pub fn layout(count: usize, mode: LayoutMode) -> Vec<PlacementSpec> {
    tracing::debug!("Generating {} layout for {} photos", mode, count);

    if count == 0 {
        return Vec::new();
    }

    let placements = match mode {
        LayoutMode::Wall => wall(count),
        LayoutMode::Circle => circle(count),
        LayoutMode::Grid => grid(count),
    };

    debug_assert_eq!(placements.len(), count);
    placements
}

/// Same as [`layout`] but takes the mode by name, as it appears in configuration.
pub fn layout_named(count: usize, mode: &str) -> Result<Vec<PlacementSpec>> {
    let mode: LayoutMode = mode.parse()?;
    Ok(layout(count, mode))
}

/// Row 0 is the top row; rows are centred around the base height.
fn row_height(row: usize, rows: usize) -> f64 {
    BASE_HEIGHT + (rows as f64 / 2.0 - row as f64) * ROW_HEIGHT
}

fn wall(count: usize) -> Vec<PlacementSpec> {
    let cols = WALL_MAX_COLUMNS.min(count);
    let rows = count.div_ceil(cols);

    (0..count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            PlacementSpec {
                position: Vec3::new(
                    (col as f64 - cols as f64 / 2.0) * WALL_SPACING + WALL_SPACING / 2.0,
                    row_height(row, rows),
                    WALL_DEPTH,
                ),
                rotation: Vec3::ZERO,
            }
        })
        .collect()
}

fn circle(count: usize) -> Vec<PlacementSpec> {
    let radius = CIRCLE_MIN_RADIUS.max(count as f64 * CIRCLE_RADIUS_PER_PHOTO);

    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * PI * 2.0;
            PlacementSpec {
                position: Vec3::new(angle.cos() * radius, CIRCLE_HEIGHT, angle.sin() * radius),
                // face the centre
                rotation: Vec3::new(0.0, -angle.to_degrees() + 180.0, 0.0),
            }
        })
        .collect()
}

fn grid(count: usize) -> Vec<PlacementSpec> {
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);

    (0..count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            PlacementSpec {
                position: Vec3::new(
                    (col as f64 - cols as f64 / 2.0) * GRID_SPACING,
                    row_height(row, rows),
                    GRID_DEPTH,
                ),
                rotation: Vec3::ZERO,
            }
        })
        .collect()
}
