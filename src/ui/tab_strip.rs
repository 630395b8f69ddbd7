use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::layout::{truncate_to_width, TabRegion, TabStripLayout, TAB_PADDING};
use crate::config::{StripOptions, Theme};
use crate::model::OpenFile;

/// Divider drawn between tabs
const DIVIDER: &str = "│";

/// Drawn on the divider where a dragged tab will land
const DROP_INDICATOR: &str = "▏";

/// An in-progress drag, as shown by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPreview {
    /// Index of the tab being dragged
    pub source: usize,
    /// Slot under the pointer, `None` outside the strip
    pub destination: Option<usize>,
}

/// Widget that renders one row of tabs for the open files
pub struct TabStrip<'a> {
    files: &'a [OpenFile],
    active_file: Option<&'a str>,
    options: Cow<'a, StripOptions>,
    theme: Theme,
    hovered: Option<usize>,
    drag: Option<DragPreview>,
    scroll: Option<usize>,
}

impl<'a> TabStrip<'a> {
    /// Strip for `files`, highlighting the tab whose path is `active_file`
    pub fn new(files: &'a [OpenFile], active_file: Option<&'a str>) -> Self {
        Self {
            files,
            active_file,
            options: Cow::Owned(StripOptions::default()),
            theme: Theme::default(),
            hovered: None,
            drag: None,
            scroll: None,
        }
    }

    /// Label width and glyphs
    pub fn options(mut self, options: &'a StripOptions) -> Self {
        self.options = Cow::Borrowed(options);
        self
    }

    /// Resolved styles to draw with
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Tab under the pointer
    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Drag in progress, if any
    pub fn drag(mut self, drag: Option<DragPreview>) -> Self {
        self.drag = drag;
        self
    }

    /// Index of the leftmost tab; `None` keeps the active tab in view
    pub fn scroll(mut self, offset: Option<usize>) -> Self {
        self.scroll = offset;
        self
    }

    /// Geometry this widget uses when rendered into `area`
    pub fn layout(&self, area: Rect) -> TabStripLayout {
        TabStripLayout::compute(
            area,
            self.files,
            self.active_file,
            &self.options,
            self.scroll,
        )
    }

    fn is_active(&self, file: &OpenFile) -> bool {
        self.active_file == Some(file.path.as_str())
    }

    fn tab_style(&self, index: usize, file: &OpenFile) -> Style {
        let style = if self.is_active(file) {
            self.theme.active
        } else if self.hovered == Some(index) {
            self.theme.inactive.patch(self.theme.hover)
        } else {
            self.theme.inactive
        };

        match self.drag {
            Some(drag) if drag.source == index => style.add_modifier(Modifier::REVERSED),
            _ => style,
        }
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Nothing at all for an empty strip, not even the background
        if self.files.is_empty() {
            return;
        }

        let layout = self.layout(area);
        let strip = layout.area();
        if strip.width == 0 {
            return;
        }

        let fill = " ".repeat(strip.width as usize);
        buf.set_string(strip.x, strip.y, &fill, self.theme.bar);

        for tab in layout.tabs() {
            if let Some(file) = self.files.get(tab.index) {
                self.render_tab(tab, file, buf);
            }

            let divider_x = tab.area.x + tab.area.width;
            if divider_x < strip.x + strip.width {
                buf.set_string(divider_x, strip.y, DIVIDER, self.theme.divider);
            }
        }

        self.render_drop_indicator(&layout, buf);
    }
}

impl TabStrip<'_> {
    fn render_tab(&self, tab: &TabRegion, file: &OpenFile, buf: &mut Buffer) {
        let style = self.tab_style(tab.index, file);
        let area = tab.area;
        let right = area.x + area.width;

        let fill = " ".repeat(area.width as usize);
        buf.set_string(area.x, area.y, &fill, style);

        // Label, then the marker right after it
        let label = truncate_to_width(file.label(), self.options.max_label_width as usize);
        let label_x = area.x + TAB_PADDING;
        if label_x >= right {
            return;
        }
        let (marker_x, _) = buf.set_stringn(
            label_x,
            area.y,
            &label,
            (right - label_x) as usize,
            style,
        );

        if file.is_modified && marker_x < right {
            buf.set_stringn(
                marker_x,
                area.y,
                &self.options.modified_marker,
                (right - marker_x) as usize,
                style.patch(self.theme.marker),
            );
        }

        if let Some(close) = tab.close {
            buf.set_stringn(
                close.x,
                close.y,
                &self.options.close_glyph,
                close.width as usize,
                style.patch(self.theme.close),
            );
        }
    }

    fn render_drop_indicator(&self, layout: &TabStripLayout, buf: &mut Buffer) {
        let Some(DragPreview {
            source,
            destination: Some(destination),
        }) = self.drag
        else {
            return;
        };
        if source == destination {
            return;
        }
        let Some(target) = layout.tab(destination) else {
            return;
        };

        // Moving left lands before the target, moving right lands after it
        let strip = layout.area();
        let x = if destination < source {
            target.area.x.saturating_sub(1).max(strip.x)
        } else {
            target.area.x + target.area.width
        };
        if x < strip.x + strip.width {
            buf.set_string(x, strip.y, DROP_INDICATOR, self.theme.drop_indicator);
        }
    }
}
