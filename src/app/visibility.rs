//! Scroll-into-view detection for fade-in sections.
//!
//! A [`SectionWatch`] is a subscription on one section. Each time the page
//! scrolls, the owner calls [`SectionWatch::observe`]; once the section is far
//! enough into the viewport the watch's [`Latch`] is set and the watch is
//! done. Owners drop finished watches, and dropping the owner releases the
//! rest.

use crate::app::state::Section;

/// One-way flag: once set it stays set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch(bool);

impl Latch {
    pub fn set(&mut self) {
        self.0 = true;
    }

    pub fn is_set(&self) -> bool {
        self.0
    }
}

/// A vertical run of rows: `start..start + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub start: usize,
    pub height: usize,
}

impl RowSpan {
    pub fn new(start: usize, height: usize) -> Self {
        Self { start, height }
    }

    pub fn end(&self) -> usize {
        self.start + self.height
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.end()
    }
}

/// How much of `section` is on screen once `bottom_margin` rows are cut from
/// the bottom of the viewport.
///
/// Sections taller than the viewport are measured against the viewport, so
/// a long section on a short terminal can still reach 1.0.
pub fn intersection_ratio(section: RowSpan, viewport: RowSpan, bottom_margin: usize) -> f32 {
    let view_end = viewport.end().saturating_sub(bottom_margin).max(viewport.start);
    let visible_rows = section.height.min(view_end - viewport.start);
    if visible_rows == 0 {
        return 0.0;
    }
    let top = section.start.max(viewport.start);
    let bottom = section.end().min(view_end);
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) as f32 / visible_rows as f32
}

#[derive(Debug, Clone)]
pub struct SectionWatch {
    pub section: Section,
    threshold: f32,
    bottom_margin: usize,
    latch: Latch,
}

impl SectionWatch {
    pub fn new(section: Section, threshold: f32, bottom_margin: usize) -> Self {
        Self {
            section,
            threshold: threshold.clamp(0.0, 1.0),
            bottom_margin,
            latch: Latch::default(),
        }
    }

    /// Feed the current geometry. Returns `true` the one time the watch fires.
    pub fn observe(&mut self, section: RowSpan, viewport: RowSpan) -> bool {
        if self.latch.is_set() {
            return false;
        }
        let ratio = intersection_ratio(section, viewport, self.bottom_margin);
        // a zero threshold still needs some overlap
        if ratio > 0.0 && ratio >= self.threshold {
            self.latch.set();
            return true;
        }
        false
    }

    pub fn fired(&self) -> bool {
        self.latch.is_set()
    }
}
