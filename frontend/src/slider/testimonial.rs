//! Testimonial carousel: one slide per view, navigated by dots.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TestimonialState {
    current: usize,
    slide_count: usize,
    slide_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialView {
    pub transform: String,
    pub active_dot: Option<usize>,
}

impl TestimonialState {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Takes fresh measurements and keeps the selected slide when it still exists.
    pub fn setup(&self, slide_count: usize, slide_width: f64) -> Self {
        Self {
            current: self.current.min(slide_count.saturating_sub(1)),
            slide_count,
            slide_width,
        }
    }

    pub fn select(&self, index: usize) -> Self {
        if index >= self.slide_count {
            return *self;
        }
        Self { current: index, ..*self }
    }

    pub fn view(&self) -> TestimonialView {
        let width = if self.slide_width.is_finite() && self.slide_width > 0.0 {
            self.slide_width
        } else {
            0.0
        };
        TestimonialView {
            transform: format!("translateX(-{}px)", self.current as f64 * width),
            active_dot: (self.slide_count > 0).then_some(self.current),
        }
    }
}
