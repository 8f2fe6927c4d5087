//! Greedy column-packing layout engine.
//!
//! A layout pass takes a menu snapshot and a theme, flattens the menu into
//! display nodes and distributes them over a fixed number of columns:
//!
//! 1. Walk nodes in order, accumulating height in the current column.
//! 2. A node that would overflow the column moves to the next one; when no
//!    column is left, packing stops and the remaining nodes are dropped.
//! 3. Trailing category headers are stripped from every column.
//! 4. In bounded passes, leftover space is back-filled with filler images.
//!
//! The pass is a pure function of its inputs and never fails.

use crate::models::{MenuCategory, ThemeConfig, VisibilityPolicy};
use crate::services::flatten::{flatten_menu, DisplayNode};
use crate::services::geometry::CanvasGeometry;
use serde::Serialize;
use tracing::{debug, trace};

/// Minimum slack (in pixels) worth filling with an image.
pub const MIN_BACKFILL_SLACK: f64 = 150.0;

/// Upper bound on back-fill iterations.
pub const MAX_BACKFILL_ITERATIONS: usize = 20;

/// Caller-controlled switches for a layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Show every item regardless of selection
    pub preview_mode: bool,
    /// Drop the logo band and force three columns
    pub hide_header: bool,
    /// Stop placing items once this many are on the board
    pub item_quota: Option<usize>,
}

impl LayoutOptions {
    /// Options for a pass bounded to `quota` items.
    #[must_use]
    pub fn bounded(quota: usize) -> Self {
        Self {
            item_quota: Some(quota),
            ..Self::default()
        }
    }
}

/// A node together with the height it was assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode<'a> {
    /// The node itself
    pub node: DisplayNode<'a>,
    /// Vertical space it occupies
    pub height: f64,
}

/// One vertical lane of the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Column<'a> {
    /// Nodes top to bottom
    pub nodes: Vec<PlacedNode<'a>>,
    /// Sum of node heights
    pub height: f64,
}

impl<'a> Column<'a> {
    fn push(&mut self, node: DisplayNode<'a>, height: f64) {
        self.nodes.push(PlacedNode { node, height });
        self.height += height;
    }

    /// Removes category headers left dangling at the bottom of the column.
    fn strip_trailing_headers(&mut self) {
        while self.nodes.last().is_some_and(|placed| placed.node.is_header()) {
            if let Some(placed) = self.nodes.pop() {
                self.height -= placed.height;
            }
        }
        if self.nodes.is_empty() {
            self.height = 0.0;
        }
    }

    /// Number of item rows in the column.
    pub fn item_count(&self) -> usize {
        self.nodes.iter().filter(|placed| placed.node.is_item()).count()
    }

    /// Unused vertical space given the grid height.
    pub fn slack(&self, grid_height: f64) -> f64 {
        grid_height - self.height
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLayout<'a> {
    /// Geometry the pass was computed with
    pub geometry: CanvasGeometry,
    /// Exactly `geometry.columns` columns
    pub columns: Vec<Column<'a>>,
    /// Nodes that did not fit anywhere
    pub dropped_nodes: usize,
    /// Filler images placed by back-fill
    pub images_used: usize,
}

impl BoardLayout<'_> {
    /// Number of item rows actually on the board.
    pub fn visible_item_count(&self) -> usize {
        self.columns.iter().map(Column::item_count).sum()
    }

    /// Returns true if no column holds any node.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.nodes.is_empty())
    }
}

/// Cursor state at the end of greedy packing.
#[derive(Debug)]
pub(crate) struct PackOutcome<'a> {
    pub columns: Vec<Column<'a>>,
    /// Index of the column being filled when packing stopped
    pub cursor: usize,
    /// Height accumulated in that column
    pub cursor_height: f64,
    pub items_placed: usize,
    /// Packing ran past the last column
    pub exhausted: bool,
    pub dropped: usize,
}

/// Greedily distributes nodes over the geometry's columns.
///
/// Item nodes without a resolvable name are skipped and take no space.
/// A node that does not fit moves to the next column and is placed there
/// unconditionally, so a single oversized item may overrun its column.
pub(crate) fn pack_nodes<'a>(
    nodes: Vec<DisplayNode<'a>>,
    geometry: &CanvasGeometry,
    item_quota: Option<usize>,
) -> PackOutcome<'a> {
    let total = nodes.len();
    let mut columns: Vec<Column<'a>> = (0..geometry.columns).map(|_| Column::default()).collect();
    let mut cursor = 0;
    let mut used = 0.0;
    let mut items_placed = 0;
    let mut handled = 0;
    let mut exhausted = false;

    for node in nodes {
        if item_quota.is_some_and(|quota| items_placed >= quota) {
            break;
        }

        let height = match &node {
            DisplayNode::Header { .. } => geometry.header_node_height,
            DisplayNode::Item { data } => match data.label() {
                Some(label) => geometry.item_height(label),
                None => {
                    handled += 1;
                    continue;
                }
            },
            DisplayNode::Image { height, .. } => *height,
        };

        if used + height > geometry.grid_height {
            cursor += 1;
            used = 0.0;
            if cursor >= geometry.columns {
                exhausted = true;
                break;
            }
        }

        if node.is_item() {
            items_placed += 1;
        }
        columns[cursor].push(node, height);
        used += height;
        handled += 1;
    }

    PackOutcome {
        columns,
        cursor,
        cursor_height: used,
        items_placed,
        exhausted,
        dropped: total - handled,
    }
}

/// Appends filler images to the columns with the most slack.
///
/// Each iteration picks the column with the largest slack (the leftmost on
/// ties) and, if that slack is at least [`MIN_BACKFILL_SLACK`], fills it
/// exactly with the next image. Returns the number of images used.
fn backfill_images<'a>(columns: &mut [Column<'a>], grid_height: f64, images: &[&'a str]) -> usize {
    let mut remaining = images.iter();
    let mut used = 0;

    for iteration in 0..MAX_BACKFILL_ITERATIONS {
        let best = columns
            .iter()
            .map(|column| column.slack(grid_height))
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (index, slack)| match best {
                Some((_, best_slack)) if best_slack >= slack => best,
                _ => Some((index, slack)),
            });

        let Some((index, slack)) = best else {
            break;
        };
        if slack.is_nan() || slack < MIN_BACKFILL_SLACK {
            break;
        }
        let Some(source) = remaining.next() else {
            break;
        };

        trace!(iteration, column = index, slack, source, "back-filling column");
        columns[index].push(DisplayNode::Image { source, height: slack }, slack);
        used += 1;
    }

    used
}

/// Runs a full layout pass over a menu snapshot.
///
/// Inputs are only borrowed; calling this twice with the same arguments
/// yields identical layouts.
pub fn layout_board<'a>(
    categories: &'a [MenuCategory],
    theme: &'a ThemeConfig,
    options: LayoutOptions,
) -> BoardLayout<'a> {
    let geometry = CanvasGeometry::new(theme, options.hide_header);
    let policy = VisibilityPolicy {
        include_unselected: options.preview_mode,
        show_unavailable: theme.show_unavailable,
    };

    let nodes = flatten_menu(categories, policy);
    let outcome = pack_nodes(nodes, &geometry, options.item_quota);
    let mut columns = outcome.columns;

    for column in &mut columns {
        column.strip_trailing_headers();
    }

    // Filler images only pad a bounded board that actually shows items
    let images: Vec<&str> = theme.filler_images().collect();
    let images_used =
        if options.item_quota.is_some() && outcome.items_placed > 0 && !images.is_empty() {
            backfill_images(&mut columns, geometry.grid_height, &images)
        } else {
            0
        };

    let layout = BoardLayout {
        geometry,
        columns,
        dropped_nodes: outcome.dropped,
        images_used,
    };

    debug!(
        columns = geometry.columns,
        items = layout.visible_item_count(),
        dropped = layout.dropped_nodes,
        images = images_used,
        "layout pass complete"
    );

    layout
}
