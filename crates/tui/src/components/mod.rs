//! UI building blocks used by the picker screen.

/// Selection chips.
pub mod chips;
/// Query prompt with the live match counter.
pub mod prompt;
/// Result table construction and rendering.
pub mod tables;
/// Header, level selector and feedback banner lines.
pub mod status;

use ratatui::layout::Rect;

pub use chips::{ChipsContext, chip_rows, chips_height, render_chips};
pub use prompt::{PromptContext, render_prompt};
pub use status::{HeaderContext, LevelContext, render_banner, render_header, render_level};
pub use tables::{ResultsContext, TableSpec, build_rows, column_widths, render_table};

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
