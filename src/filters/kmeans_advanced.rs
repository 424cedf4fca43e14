//! One-shot dominant-colour clustering.
//!
//! A cheap stand-in for iterative k-means: visible samples are grouped
//! into coarse RGB buckets, each bucket resolves to one palette colour,
//! and the grid is rewritten through that mapping. The bucket memoization
//! is also a correctness property: two samples in the same bucket always
//! come out the same colour.

use std::collections::HashMap;

use crate::types::{Colour, Palette, PixelGrid};

/// Bucket width per channel. 256/32 = 8 groups per channel.
const BUCKET_SIZE: u8 = 32;

/// Running weighted average of the true colours that landed in a bucket.
#[derive(Debug, Default)]
struct Bucket {
    sum_r: f64,
    sum_g: f64,
    sum_b: f64,
    count: f64,
}

impl Bucket {
    fn add(&mut self, colour: Colour) {
        self.sum_r += colour.r as f64;
        self.sum_g += colour.g as f64;
        self.sum_b += colour.b as f64;
        self.count += 1.0;
    }

    /// The bucket's representative: the mean of its members.
    fn representative(&self) -> Colour {
        Colour::from_rgb_f64(
            self.sum_r / self.count,
            self.sum_g / self.count,
            self.sum_b / self.count,
        )
    }
}

#[inline]
fn bucket_key(colour: Colour) -> (u8, u8, u8) {
    (
        colour.r / BUCKET_SIZE * BUCKET_SIZE,
        colour.g / BUCKET_SIZE * BUCKET_SIZE,
        colour.b / BUCKET_SIZE * BUCKET_SIZE,
    )
}

/// Quantize the grid through coarse bucket clustering.
pub fn apply(grid: &mut PixelGrid, palette: &Palette) {
    let mut buckets: HashMap<(u8, u8, u8), Bucket> = HashMap::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }
            let colour = grid.rgba(x, y);
            buckets.entry(bucket_key(colour)).or_default().add(colour);
        }
    }

    // One palette resolution per bucket, keyed by the bucket, not the pixel.
    let mapping: HashMap<(u8, u8, u8), Colour> = buckets
        .iter()
        .map(|(&key, bucket)| (key, palette.closest(bucket.representative())))
        .collect();

    tracing::trace!(buckets = mapping.len(), "resolved colour buckets");

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }
            let snapped = mapping[&bucket_key(grid.rgba(x, y))];
            grid.set_rgb(x, y, snapped);
        }
    }
}
