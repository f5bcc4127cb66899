//! Single-item carousel that cycles through a fixed list.

/// Position within a list of `len` slides. Wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Carousel over `len` slides, showing the first.
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Index of the slide on display. Always 0 for an empty carousel.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Show slide `index`, clamped to the last slide.
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    /// The slide on display.
    pub fn current<'a, T>(&self, slides: &'a [T]) -> Option<&'a T> {
        slides.get(self.index)
    }
}
