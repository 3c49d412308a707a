//! # Embedder
//!
//! Writes a bitstream into channel parities.
//!
//! ## Traversal
//! Columns `start_column ..= start_column + columns_used - 1`, each column top
//! to bottom, each pixel's channels in fixed order. The extractor scans in the
//! same column-major order, so this order is part of the format.
//!
//! ## Parity adjustment
//! A channel already carrying the wanted parity is left alone; otherwise it
//! moves by exactly one step toward the wanted parity:
//!
//! | parity | bit | delta |
//! |--------|-----|-------|
//! | 0      | 0   | 0     |
//! | 1      | 1   | 0     |
//! | 0      | 1   | +1    |
//! | 1      | 0   | -1    |
//!
//! An even value is at most 254 and an odd one at least 1, so the adjustment
//! never leaves `0..=255`.

use log::debug;

use super::codec::Bitstream;
use super::grid::PixelGrid;
use super::planner::EmbedPlan;
use crate::common::error::{Result, StegoError};

/// Delta indexed by `[parity][target_bit]`.
const PARITY_DELTA: [[i16; 2]; 2] = [[0, 1], [-1, 0]];

/// Embed `bits` into `grid` along `plan`, returning the modified grid.
///
/// Stops as soon as the bitstream is exhausted, even mid-pixel; everything
/// after that point is untouched.
///
/// # Errors
/// `PlanOutOfBounds` if the planned columns leave the grid or cannot hold
/// `ceil(bits.len() / channels)` pixels.
pub fn embed(mut grid: PixelGrid, bits: &Bitstream, plan: &EmbedPlan) -> Result<PixelGrid> {
    check_plan(&grid, bits, plan)?;

    let height = grid.height();
    let mut stream = bits.iter();
    let mut changed = 0usize;

    'outer: for x in plan.start_column..plan.start_column + plan.columns_used {
        for y in 0..height {
            for channel in grid.pixel_mut(x, y) {
                let Some(bit) = stream.next() else {
                    break 'outer;
                };
                let delta = PARITY_DELTA[(*channel % 2) as usize][bit as usize];
                if delta != 0 {
                    *channel = (*channel as i16 + delta) as u8;
                    changed += 1;
                }
            }
        }
    }

    debug!(
        "Embedded {} bits from column {}, {} channel values changed",
        bits.len(),
        plan.start_column,
        changed
    );
    Ok(grid)
}

fn check_plan(grid: &PixelGrid, bits: &Bitstream, plan: &EmbedPlan) -> Result<()> {
    let pixels = bits.len().div_ceil(grid.channels());
    let end = plan.start_column + plan.columns_used;
    let fits = end <= grid.width() && plan.columns_used * grid.height() >= pixels;
    if fits {
        Ok(())
    } else {
        Err(StegoError::PlanOutOfBounds {
            start: plan.start_column,
            end,
            pixels,
            width: grid.width(),
            height: grid.height(),
        })
    }
}
