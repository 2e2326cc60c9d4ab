//! Squarified treemap layout, after van Wijk & van de Wetering
//! (https://vanwijk.win.tue.nl/stm.pdf). Rows are peeled off greedily:
//! the next item joins the current row only while the row's worst-case
//! aspect ratio does not get worse.

use std::cmp::Ordering;

use crate::tree::arena::NodeId;

/// One child entering layout: the node plus its aggregated weight.
#[derive(Debug, Clone, Copy)]
pub struct LayoutItem {
    pub node: NodeId,
    pub weight: f64,
}

/// A positioned rectangle produced by the layout.
#[derive(Debug, Clone, Copy)]
pub struct Positioned {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Partition the target rectangle among `items`, one rectangle per item
/// with positive weight, area proportional to weight. Degenerate input
/// (no items, non-positive dimensions or total weight) yields an empty
/// result rather than NaN rectangles.
pub fn layout(items: &[LayoutItem], x: f64, y: f64, w: f64, h: f64) -> Vec<Positioned> {
    if items.is_empty() || w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    let total: f64 = items.iter().map(|it| it.weight).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    // Convert weights into target pixel areas.
    let scale = (w * h) / total;
    let mut scaled: Vec<(NodeId, f64)> = items
        .iter()
        .map(|it| (it.node, it.weight * scale))
        .collect();
    // Descending by area; the sort is stable, so ties keep input order.
    scaled.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut rects = Vec::with_capacity(scaled.len());
    let (mut rx, mut ry, mut rw, mut rh) = (x, y, w, h);
    let mut next = 0;

    while next < scaled.len() && rw > 0.0 && rh > 0.0 {
        let horizontal = rw >= rh;
        let short = if horizontal { rh } else { rw };

        // Grow the row while the worst aspect ratio is non-increasing.
        let mut row_end = next + 1;
        let mut worst = worst_aspect(&scaled[next..row_end], short);
        while row_end < scaled.len() {
            let trial = worst_aspect(&scaled[next..row_end + 1], short);
            if trial <= worst {
                worst = trial;
                row_end += 1;
            } else {
                break;
            }
        }

        let row = &scaled[next..row_end];
        let row_sum: f64 = row.iter().map(|(_, a)| a).sum();
        let remaining_sum: f64 = scaled[row_end..].iter().map(|(_, a)| a).sum();
        let total_sum = row_sum + remaining_sum;
        if total_sum <= 0.0 {
            // Only zero-area stragglers left; they contribute no rectangle.
            break;
        }

        if horizontal {
            // Wide remainder: the row is a vertical strip at the left edge,
            // items stacked top to bottom.
            let strip_w = (row_sum / total_sum) * rw;
            let mut off = 0.0;
            for &(node, area) in row {
                let item_h = (area / row_sum) * rh;
                rects.push(Positioned {
                    node,
                    x: rx,
                    y: ry + off,
                    w: strip_w.max(0.0),
                    h: item_h.max(0.0),
                });
                off += item_h;
            }
            rx += strip_w;
            rw = (rw - strip_w).max(0.0);
        } else {
            // Tall remainder: the row is a horizontal strip at the top,
            // items stacked left to right.
            let strip_h = (row_sum / total_sum) * rh;
            let mut off = 0.0;
            for &(node, area) in row {
                let item_w = (area / row_sum) * rw;
                rects.push(Positioned {
                    node,
                    x: rx + off,
                    y: ry,
                    w: item_w.max(0.0),
                    h: strip_h.max(0.0),
                });
                off += item_w;
            }
            ry += strip_h;
            rh = (rh - strip_h).max(0.0);
        }

        next = row_end;
    }

    rects
}

/// Worst single-rectangle aspect ratio a row would produce when laid out
/// against a side of length `short`: max(L²·Amax/S², S²/(L²·Amin)).
/// Amin is clamped to 1 so a zero-weight item that slipped through
/// upstream filtering cannot divide by zero.
fn worst_aspect(row: &[(NodeId, f64)], short: f64) -> f64 {
    if row.is_empty() || short <= 0.0 {
        return f64::INFINITY;
    }
    let sum: f64 = row.iter().map(|(_, a)| a).sum();
    if sum <= 0.0 {
        return f64::INFINITY;
    }
    let max_a = row.iter().map(|&(_, a)| a).fold(0.0_f64, f64::max);
    let mut min_a = row.iter().map(|&(_, a)| a).fold(f64::INFINITY, f64::min);
    if min_a <= 0.0 {
        min_a = 1.0;
    }
    let short_sq = short * short;
    let sum_sq = sum * sum;
    ((short_sq * max_a) / sum_sq).max(sum_sq / (short_sq * min_a))
}
