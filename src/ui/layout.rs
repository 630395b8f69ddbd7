use std::borrow::Cow;

use ratatui::layout::Rect;
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::StripOptions;
use crate::model::OpenFile;

/// Columns of padding on each side of a tab
pub const TAB_PADDING: u16 = 1;

/// Width of the divider drawn after every tab
pub const DIVIDER_WIDTH: u16 = 1;

/// Geometry of a single rendered tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabRegion {
    /// Index into the open files
    pub index: usize,
    /// Whole tab, excluding the divider
    pub area: Rect,
    /// Label and marker; a click here selects the tab
    pub body: Rect,
    /// Close control; never overlaps `body`
    pub close: Option<Rect>,
    /// Display width of the (possibly truncated) label
    pub label_width: u16,
}

/// Result of a hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// Body of the tab at this index
    Body(usize),
    /// Close control of the tab at this index
    Close(usize),
    /// Inside the strip but not on a tab (dividers, trailing space)
    Strip,
    /// Outside the strip
    None,
}

/// Computed geometry for the tab strip.
///
/// The strip is a single row. When the tabs overflow the available width the
/// layout starts at the caller's scroll offset, or else at the first tab that
/// keeps the active one fully visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStripLayout {
    area: Rect,
    tabs: Vec<TabRegion>,
    first_visible: usize,
}

impl TabStripLayout {
    /// Lay out `files` inside `area`. Empty input yields an empty layout.
    ///
    /// `scroll` is the index of the leftmost tab, clamped to the last file.
    /// Without it the strip scrolls just enough to show the active tab.
    pub fn compute(
        area: Rect,
        files: &[OpenFile],
        active_file: Option<&str>,
        options: &StripOptions,
        scroll: Option<usize>,
    ) -> Self {
        if files.is_empty() || area.width == 0 || area.height == 0 {
            return Self::default();
        }

        let area = Rect {
            height: 1,
            ..area
        };
        let widths: Vec<TabWidths> = files.iter().map(|f| TabWidths::measure(f, options)).collect();
        let active_index = active_file.and_then(|path| files.iter().position(|f| f.path == path));
        let first_visible = match scroll {
            Some(offset) => offset.min(files.len() - 1),
            None => first_visible_tab(&widths, active_index, area.width),
        };

        let right = area.x + area.width;
        let mut x = area.x;
        let mut tabs = Vec::new();

        for (index, w) in widths.iter().enumerate().skip(first_visible) {
            let total = w.total();
            let available = right.saturating_sub(x);
            if available == 0 || (total > available && !tabs.is_empty()) {
                break;
            }

            let width = total.min(available);
            let tab_area = Rect::new(x, area.y, width, 1);
            let body_width = w.body().min(width);
            let close = (w.close > 0 && body_width + w.close <= width)
                .then(|| Rect::new(x + body_width, area.y, w.close, 1));

            tabs.push(TabRegion {
                index,
                area: tab_area,
                body: Rect::new(x, area.y, body_width, 1),
                close,
                label_width: w.label,
            });

            x = x.saturating_add(width).saturating_add(DIVIDER_WIDTH);
        }

        Self {
            area,
            tabs,
            first_visible,
        }
    }

    /// Row occupied by the strip
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Visible tabs, left to right
    pub fn tabs(&self) -> &[TabRegion] {
        &self.tabs
    }

    /// Index of the leftmost visible tab
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Region for the tab at `index`, if visible
    pub fn tab(&self, index: usize) -> Option<&TabRegion> {
        self.tabs.iter().find(|t| t.index == index)
    }

    /// Determine which region a point is in
    pub fn hit_test(&self, x: u16, y: u16) -> HitRegion {
        if self.tabs.is_empty() || !contains(self.area, x, y) {
            return HitRegion::None;
        }

        for tab in &self.tabs {
            if let Some(close) = tab.close {
                if contains(close, x, y) {
                    return HitRegion::Close(tab.index);
                }
            }
            if contains(tab.body, x, y) {
                return HitRegion::Body(tab.index);
            }
        }

        HitRegion::Strip
    }

    /// Destination slot for a drop at the given point.
    ///
    /// A divider belongs to the tab on its left and space after the last tab
    /// maps to the last visible tab. `None` outside the strip.
    pub fn drop_slot(&self, x: u16, y: u16) -> Option<usize> {
        if !contains(self.area, x, y) {
            return None;
        }

        let last = self.tabs.last()?;
        let slot = self
            .tabs
            .iter()
            .find(|t| x < t.area.x + t.area.width + DIVIDER_WIDTH)
            .unwrap_or(last)
            .index;
        debug!("Drop slot at column {}: {}", x, slot);
        Some(slot)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Column widths of one tab's parts
#[derive(Debug, Clone, Copy)]
struct TabWidths {
    label: u16,
    marker: u16,
    /// Space, glyph and right padding; zero when the close control is hidden
    close: u16,
}

impl TabWidths {
    fn measure(file: &OpenFile, options: &StripOptions) -> Self {
        let label = file.label().width().min(options.max_label_width as usize) as u16;
        let marker = if file.is_modified {
            options.modified_marker.width() as u16
        } else {
            0
        };
        let close = if options.show_close_button {
            options.close_glyph.width() as u16 + TAB_PADDING
        } else {
            0
        };
        Self {
            label,
            marker,
            close,
        }
    }

    /// Left padding, label, marker and the gap before the close glyph
    fn body(&self) -> u16 {
        let trailing = if self.close > 0 { 1 } else { TAB_PADDING };
        TAB_PADDING + self.label + self.marker + trailing
    }

    fn total(&self) -> u16 {
        self.body() + self.close
    }
}

/// Leftmost tab such that the active tab ends inside `width`
fn first_visible_tab(widths: &[TabWidths], active: Option<usize>, width: u16) -> usize {
    let Some(active) = active else {
        return 0;
    };

    let mut first = 0;
    let span = |first: usize| -> u32 {
        widths[first..=active]
            .iter()
            .map(|w| u32::from(w.total() + DIVIDER_WIDTH))
            .sum::<u32>()
            - u32::from(DIVIDER_WIDTH)
    };
    while first < active && span(first) > u32::from(width) {
        first += 1;
    }
    first
}

/// Truncate a string to fit within a given display width
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if s.width() <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}
