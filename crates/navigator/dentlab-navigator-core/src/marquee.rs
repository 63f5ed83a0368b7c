//! Auto-scrolling client logo rows.
//!
//! Each row's track holds its logos twice; positions wrap after one copy's
//! width so the loop is seamless. Even rows drift rightward, odd rows
//! leftward.

use serde::{Deserialize, Serialize};

/// Pixels per frame at 60 fps.
pub const DEFAULT_SPEED: f32 = 0.8;
/// Gap used when the host cannot read one from computed styles.
pub const DEFAULT_GAP_PX: f32 = 32.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarqueeDirection {
    /// Translate grows from 0 toward `width`.
    Rightward,
    /// Translate shrinks from `-width` toward `-2 * width`.
    Leftward,
}

impl MarqueeDirection {
    pub fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            MarqueeDirection::Rightward
        } else {
            MarqueeDirection::Leftward
        }
    }
}

/// Width of one copy of a row's logos. `item_count` counts both copies.
pub fn row_width(item_width: f32, gap: Option<f32>, item_count: usize) -> f32 {
    let stride = item_width + gap.unwrap_or(DEFAULT_GAP_PX);
    (item_count / 2) as f32 * stride
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarqueeRow {
    /// Position of the row among all client rows in the document.
    pub index: usize,
    pub direction: MarqueeDirection,
    pub width: f32,
    pub position: f32,
}

impl MarqueeRow {
    pub fn new(index: usize, width: f32) -> Self {
        let direction = MarqueeDirection::for_row(index);
        Self {
            index,
            direction,
            width,
            position: Self::origin(direction, width),
        }
    }

    fn origin(direction: MarqueeDirection, width: f32) -> f32 {
        match direction {
            MarqueeDirection::Rightward => 0.0,
            MarqueeDirection::Leftward => -width,
        }
    }

    /// Move by `distance` px and wrap.
    pub fn step(&mut self, distance: f32) {
        match self.direction {
            MarqueeDirection::Rightward => {
                self.position += distance;
                if self.position >= self.width {
                    self.position = 0.0;
                }
            }
            MarqueeDirection::Leftward => {
                self.position -= distance;
                if self.position <= -self.width * 2.0 {
                    self.position = -self.width;
                }
            }
        }
    }

    /// Re-measure after layout changes; restarts from the origin.
    pub fn resize(&mut self, width: f32) {
        self.width = width;
        self.position = Self::origin(self.direction, width);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Marquee {
    rows: Vec<MarqueeRow>,
    speed: f32,
}

impl Marquee {
    /// One row per entry in `widths`, in document order. Rows with no width
    /// (no logos) are skipped.
    pub fn new(widths: &[f32]) -> Self {
        let rows = widths
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(i, w)| MarqueeRow::new(i, *w))
            .collect();
        Self {
            rows,
            speed: DEFAULT_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn rows(&self) -> &[MarqueeRow] {
        &self.rows
    }

    /// Advance all rows by `dt` seconds. Returns each row's translate in px.
    pub fn update(&mut self, dt: f32) -> Vec<f32> {
        let distance = self.speed * dt * 60.0;
        for row in &mut self.rows {
            row.step(distance);
        }
        self.positions()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.rows.iter().map(|r| r.position).collect()
    }

    /// Re-measure rows. `widths` holds one entry per client row in document
    /// order, the same list `new` takes.
    pub fn resize(&mut self, widths: &[f32]) {
        for row in &mut self.rows {
            if let Some(width) = widths.get(row.index) {
                row.resize(*width);
            }
        }
    }
}
