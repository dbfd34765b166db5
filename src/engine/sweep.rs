//! Sweep preparation: polar transform, coarse cull, breakpoints, splitting.
//!
//! These stages turn raw walls into a set of polar segments whose angular
//! spans form a consistent refinement of the circle: within any cell of
//! the final angle partition, every candidate segment spans the whole
//! cell, which is what makes per-cell occlusion resolution well-defined.

use crate::core::types::{Point, PolarSegment, Segment, SegmentId};
use crate::error::Result;
use log::{debug, trace};

/// Transform walls into the polar frame of `viewpoint`.
///
/// Walls touching the viewpoint are dropped silently. Source ids are
/// allocated from a counter local to this call; they are unique within
/// the returned set only.
pub fn to_polar(viewpoint: &Point, walls: &[Segment]) -> Vec<PolarSegment> {
    let mut next_id: SegmentId = 1;
    let mut segments = Vec::with_capacity(walls.len());
    for wall in walls {
        if let Some(segment) = PolarSegment::from_wall(viewpoint, wall, next_id) {
            segments.push(segment);
            next_id += 1;
        }
    }
    trace!(
        "polar transform kept {} of {} walls",
        segments.len(),
        walls.len()
    );
    segments
}

/// All distinct endpoint angles of `segments`, sorted ascending.
///
/// Deduplication is exact: these angles define the cell partition and two
/// cells may not share a boundary "within epsilon".
pub fn collect_angles(segments: &[PolarSegment]) -> Vec<f64> {
    let mut angles: Vec<f64> = segments
        .iter()
        .flat_map(|segment| [segment.start.angle, segment.end.angle])
        .collect();
    angles.sort_by(f64::total_cmp);
    angles.dedup();
    angles
}

/// Drop segments that cannot be the nearest wall anywhere.
///
/// For each angular cell (consecutive endpoint angles, wrapping), the
/// candidates are the segments spanning the whole cell; any candidate
/// whose nearest point is farther than the closest candidate's farthest
/// point is unreachable in that cell. A segment survives if it is
/// reachable in at least one cell it spans. Purely an optimization: the
/// pipeline's final output is identical without it.
pub fn coarse_cull(segments: &[PolarSegment]) -> Vec<PolarSegment> {
    let angles = collect_angles(segments);
    if angles.is_empty() {
        return Vec::new();
    }

    let mut keep = vec![false; segments.len()];
    for (i, &cell_start) in angles.iter().enumerate() {
        let cell_end = angles[(i + 1) % angles.len()];
        let candidates: Vec<usize> = segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| {
                segment.contains_angle(cell_start) && segment.contains_angle(cell_end)
            })
            .map(|(index, _)| index)
            .collect();

        let reach_limit = candidates
            .iter()
            .map(|&index| segments[index].max_distance)
            .fold(f64::INFINITY, f64::min);

        for &index in &candidates {
            if segments[index].min_distance <= reach_limit {
                keep[index] = true;
            }
        }
    }

    let kept: Vec<PolarSegment> = segments
        .iter()
        .zip(&keep)
        .filter(|(_, &keep)| keep)
        .map(|(segment, _)| segment.clone())
        .collect();
    debug!(
        "coarse cull hid {} of {} segments",
        segments.len() - kept.len(),
        segments.len()
    );
    kept
}

/// Partition angles that fall strictly inside the segment's span, in
/// sweep order.
///
/// For a seam-crossing segment the sweep runs through +π into -π, so the
/// contained angles are ordered positives-ascending then
/// negatives-ascending.
pub fn breakpoints_within(segment: &PolarSegment, angles: &[f64]) -> Vec<f64> {
    let contained = angles
        .iter()
        .copied()
        .filter(|&angle| segment.strictly_contains_angle(angle));
    if !segment.goes_over_pi {
        return contained.collect();
    }
    let (positive, negative): (Vec<f64>, Vec<f64>) =
        contained.partition(|&angle| angle >= 0.0);
    let mut ordered = positive;
    ordered.extend(negative);
    ordered
}

/// Cut every segment at the partition angles inside its span.
///
/// The pieces of one segment form a contiguous refinement of its span;
/// zero-width pieces (and zero-span inputs) are dropped so nothing
/// degenerate reaches occlusion resolution.
pub fn split_all(segments: &[PolarSegment], angles: &[f64]) -> Result<Vec<PolarSegment>> {
    let mut pieces = Vec::with_capacity(segments.len());
    for segment in segments {
        let breakpoints = breakpoints_within(segment, angles);
        for piece in split_segment(segment, &breakpoints)? {
            if piece.start.angle != piece.end.angle {
                pieces.push(piece);
            }
        }
    }
    trace!("split {} segments into {} pieces", segments.len(), pieces.len());
    Ok(pieces)
}

/// Cut one segment at the given interior angles, in sweep order.
fn split_segment(segment: &PolarSegment, breakpoints: &[f64]) -> Result<Vec<PolarSegment>> {
    if segment.start.angle == segment.end.angle {
        return Ok(vec![segment.clone()]);
    }

    let mut pieces = Vec::with_capacity(breakpoints.len() + 1);
    let mut from = segment.start.angle;
    for &to in breakpoints.iter().chain([segment.end.angle].iter()) {
        pieces.push(segment.slice(from, to)?);
        from = to;
    }
    Ok(pieces)
}
