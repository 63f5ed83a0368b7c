//! Image carousels: services slider (one slide per step) and the workshop and
//! factory galleries (one page of slides per step).
//!
//! Slides per view follow viewport-width breakpoints. The carousel only
//! tracks indices; `view()` reports the track offset, dot states, and button
//! enablement for the host to apply.

use serde::{Deserialize, Serialize};

/// Minimum horizontal travel, in px, before a touch drag counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlidePaging {
    /// Move one slide per step; one dot per slide.
    Single,
    /// Move a full view per step; one dot per view.
    Page,
}

/// Viewport-width breakpoints mapping to slides per view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// `(min_width_px, slides_per_view)`, widest first.
    steps: Vec<(f32, usize)>,
}

impl Breakpoints {
    pub fn new(mut steps: Vec<(f32, usize)>) -> Self {
        steps.sort_by(|a, b| b.0.total_cmp(&a.0));
        Self { steps }
    }

    /// Services slider: two slides from 768px up.
    pub fn services() -> Self {
        Self::new(vec![(768.0, 2)])
    }

    /// Workshop and factory galleries: three from 1024px, two from 768px.
    pub fn gallery() -> Self {
        Self::new(vec![(1024.0, 3), (768.0, 2)])
    }

    pub fn per_view(&self, width: f32) -> usize {
        self.steps
            .iter()
            .find(|(min, _)| width >= *min)
            .map(|(_, n)| (*n).max(1))
            .unwrap_or(1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotView {
    pub visible: bool,
    pub active: bool,
}

/// Everything a host needs to render the carousel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub current: usize,
    pub per_view: usize,
    /// Track `translateX` in percent.
    pub translate_x_percent: f32,
    pub dots: Vec<DotView>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    total: usize,
    current: usize,
    paging: SlidePaging,
    breakpoints: Breakpoints,
    width: f32,
    touch_start: Option<f32>,
    touch_last: Option<f32>,
}

impl Carousel {
    pub fn new(total: usize, paging: SlidePaging, breakpoints: Breakpoints, width: f32) -> Self {
        Self {
            total,
            current: 0,
            paging,
            breakpoints,
            width,
            touch_start: None,
            touch_last: None,
        }
    }

    pub fn services(total: usize, width: f32) -> Self {
        Self::new(total, SlidePaging::Single, Breakpoints::services(), width)
    }

    pub fn gallery(total: usize, width: f32) -> Self {
        Self::new(total, SlidePaging::Page, Breakpoints::gallery(), width)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn per_view(&self) -> usize {
        self.breakpoints.per_view(self.width)
    }

    /// Highest first-visible index that still fills a whole view.
    pub fn max_slide(&self) -> usize {
        self.total.saturating_sub(self.per_view())
    }

    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.max_slide());
    }

    /// Index a dot jumps to when clicked.
    pub fn dot_target(&self, dot: usize) -> usize {
        match self.paging {
            SlidePaging::Single => dot,
            SlidePaging::Page => dot * self.per_view(),
        }
    }

    pub fn click_dot(&mut self, dot: usize) {
        self.go_to(self.dot_target(dot));
    }

    /// Returns whether the position changed.
    pub fn next(&mut self) -> bool {
        let max = self.max_slide();
        if self.current >= max {
            return false;
        }
        let step = match self.paging {
            SlidePaging::Single => 1,
            SlidePaging::Page => self.per_view(),
        };
        self.current = (self.current + step).min(max);
        true
    }

    /// Returns whether the position changed.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        let step = match self.paging {
            SlidePaging::Single => 1,
            SlidePaging::Page => self.per_view(),
        };
        self.current = self.current.saturating_sub(step);
        true
    }

    pub fn touch_start(&mut self, x: f32) {
        self.touch_start = Some(x);
        self.touch_last = None;
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.touch_start.is_some() {
            self.touch_last = Some(x);
        }
    }

    /// Finish a drag; a leftward swipe past the threshold advances. Returns
    /// whether the position changed.
    pub fn touch_end(&mut self) -> bool {
        let (start, last) = (self.touch_start.take(), self.touch_last.take());
        match (start, last) {
            (Some(start), Some(last)) => self.swipe(start - last),
            _ => false,
        }
    }

    /// Positive `dx` (finger moved left) advances.
    pub fn swipe(&mut self, dx: f32) -> bool {
        if dx.abs() <= SWIPE_THRESHOLD_PX {
            return false;
        }
        if dx > 0.0 {
            self.next()
        } else {
            self.prev()
        }
    }

    /// Apply a new viewport width. Returns whether slides per view changed.
    pub fn resize(&mut self, width: f32) -> bool {
        let before = self.per_view();
        self.width = width;
        if self.per_view() == before {
            return false;
        }
        self.current = self.current.min(self.max_slide());
        true
    }

    pub fn view(&self) -> CarouselView {
        let per_view = self.per_view();
        let max = self.max_slide();
        let dots = match self.paging {
            SlidePaging::Single => (0..self.total)
                .map(|i| DotView {
                    visible: i <= max,
                    active: i <= max && i == self.current,
                })
                .collect(),
            SlidePaging::Page => {
                let views = self.total.div_ceil(per_view);
                let active = self.current / per_view;
                (0..views)
                    .map(|i| DotView {
                        visible: true,
                        active: i == active,
                    })
                    .collect()
            }
        };
        CarouselView {
            current: self.current,
            per_view,
            translate_x_percent: -(self.current as f32 * (100.0 / per_view as f32)),
            dots,
            prev_disabled: self.current == 0,
            next_disabled: self.current >= max,
        }
    }
}
