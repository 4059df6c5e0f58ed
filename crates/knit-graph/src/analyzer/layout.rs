//! Default grid positions for nodes without coordinates.

use crate::config::LayoutConfig;
use crate::domain::Node;

/// Fill in missing coordinates from a row-major grid.
///
/// The cell is chosen by the node's position in `nodes`; each coordinate is
/// filled independently and present values are never overwritten, so positions
/// a user dragged survive re-analysis.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn apply_default_layout(nodes: &mut [Node], layout: &LayoutConfig) {
    let columns = layout.columns.max(1);
    let mut placed = 0usize;

    for (i, node) in nodes.iter_mut().enumerate() {
        let column = (i % columns) as f64;
        let row = (i / columns) as f64;

        if node.x.is_none() || node.y.is_none() {
            placed += 1;
        }
        node.x.get_or_insert(layout.origin.x + column * layout.spacing);
        node.y.get_or_insert(layout.origin.y + row * layout.spacing);
    }

    if placed > 0 {
        tracing::debug!(placed, "Assigned default grid positions");
    }
}
