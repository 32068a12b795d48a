use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window creation and presentation settings.
pub struct WindowOptions {
    /// Window title.
    pub title: String,
    /// Logical width at creation. Also fixes the projection aspect ratio.
    pub width: u32,
    /// Logical height at creation.
    pub height: u32,
    /// Shrink the window to half its creation size right after it opens.
    pub halve_on_create: bool,
    /// Present with vsync (FIFO) instead of immediately.
    pub vsync: bool,
    /// Hide and confine the cursor, using raw mouse motion for looking.
    pub grab_cursor: bool,
    /// Background color (linear RGBA).
    pub clear_color: [f32; 4],
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "lodview".into(),
            width: 1600,
            height: 1200,
            halve_on_create: true,
            vsync: true,
            grab_cursor: false,
            clear_color: [0.85, 0.85, 0.85, 1.0],
        }
    }
}

impl WindowOptions {
    /// Width over height of the creation size.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}
