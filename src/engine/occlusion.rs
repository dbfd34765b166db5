//! Occlusion resolution and arc joining.
//!
//! After splitting, every angular cell is populated by pieces that span it
//! exactly; resolution keeps one piece per cell, and joining glues the
//! surviving pieces back into the longest continuous arcs.

use crate::core::types::PolarSegment;
use log::trace;

/// Keep the nearest piece of every angular cell.
///
/// Pieces are grouped by their exact `(start.angle, end.angle)` key. The
/// winner is not simply the shortest: it is the piece deviating least from
/// the group's shortest start and end lengths. Where a wall's endpoint
/// exactly touches another wall, both pieces measure the same cell and
/// rounding decides which is "shorter" at each end; least deviation picks
/// the piece that stays contiguous with its neighbours instead.
pub fn resolve_occlusion(mut pieces: Vec<PolarSegment>) -> Vec<PolarSegment> {
    let total = pieces.len();
    // Stable sort: groups keep their split order, and ties below keep the
    // first contender.
    pieces.sort_by(|a, b| {
        a.start
            .angle
            .total_cmp(&b.start.angle)
            .then_with(|| a.end.angle.total_cmp(&b.end.angle))
    });

    let mut visible = Vec::new();
    let mut index = 0;
    while index < pieces.len() {
        let mut group_end = index + 1;
        while group_end < pieces.len()
            && pieces[group_end].start.angle == pieces[index].start.angle
            && pieces[group_end].end.angle == pieces[index].end.angle
        {
            group_end += 1;
        }
        let group = &pieces[index..group_end];

        let shortest_start = group
            .iter()
            .map(|piece| piece.start.length)
            .fold(f64::INFINITY, f64::min);
        let shortest_end = group
            .iter()
            .map(|piece| piece.end.length)
            .fold(f64::INFINITY, f64::min);
        let deviation = |piece: &PolarSegment| {
            (piece.start.length - shortest_start).abs() + (piece.end.length - shortest_end).abs()
        };

        let mut winner = &group[0];
        for piece in &group[1..] {
            if deviation(piece) < deviation(winner) {
                winner = piece;
            }
        }
        visible.push(winner.clone());
        index = group_end;
    }

    trace!("occlusion kept {} of {} pieces", visible.len(), total);
    visible
}

/// Merge adjacent colinear pieces back into continuous arcs.
///
/// Pieces are walked in `(start.angle, end.angle, start.length,
/// end.length)` order; a piece is merged into the running arc when the two
/// lie on the same wall line and the arc's end touches the piece's start
/// within `epsilon`. A final pass merges the last arc into the first
/// across the ±π seam, rebuilding the wrap flag so the seam is not
/// artificially split. Idempotent.
pub fn join_arcs(
    mut pieces: Vec<PolarSegment>,
    epsilon: f64,
    orientation_epsilon: f64,
) -> Vec<PolarSegment> {
    let total = pieces.len();
    pieces.sort_by(PolarSegment::sort_cmp);

    let mut joined: Vec<PolarSegment> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        if let Some(arc) = joined.last_mut() {
            if arc.is_colinear(&piece, orientation_epsilon)
                && arc.end.almost_eq(&piece.start, epsilon)
            {
                *arc = arc.with_endpoints(arc.start, piece.end);
                continue;
            }
        }
        joined.push(piece);
    }

    if joined.len() > 1 {
        let last = joined.last().unwrap();
        let first = &joined[0];
        if last.is_colinear(first, orientation_epsilon) && last.end.almost_eq(&first.start, epsilon)
        {
            let merged = first.with_endpoints(last.start, first.end);
            joined[0] = merged;
            joined.pop();
        }
    }

    trace!("joined {} pieces into {} arcs", total, joined.len());
    joined
}
