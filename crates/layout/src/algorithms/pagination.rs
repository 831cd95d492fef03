/// Small tolerance for floating point drift when comparing heights.
pub const EPSILON: f32 = 0.01;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a piece of content fits below the cursor.
///
/// * `cursor_y`: The current Y position relative to the top of the frame.
/// * `child_height`: The required height for the content.
/// * `frame_height`: The height of the page's content frame.
pub fn check_child_fit(cursor_y: f32, child_height: f32, frame_height: f32) -> BreakAnalysis {
    let available = (frame_height - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: child_height > available + EPSILON,
        remaining_height: available,
    }
}
