//! Page header, mode toggle and stage stepper.

use svg::node::element as svg_element;

use showcase_core::{
    draw::{Drawable as _, LayeredOutput, RenderLayer, Text, TextDefinition},
    geometry::{Bounds, Point, Size},
};

use super::Svg;
use crate::{
    catalog::stage_tabs,
    state::{UiState, ViewMode},
};

const BUTTON_PADDING_X: f32 = 16.0;
const BUTTON_PADDING_Y: f32 = 8.0;
const ROW_GAP: f32 = 12.0;
const BUTTON_GAP: f32 = 8.0;
const STEP_CONNECTOR: f32 = 28.0;

/// A button of the mode toggle or the stage stepper.
struct Button<'a> {
    label: &'a str,
    active: bool,
    attribute: (&'static str, &'static str),
}

impl Svg {
    /// Draws the header rows centered on `page_width`.
    ///
    /// Returns the output and the bottom edge of the last row.
    pub(super) fn render_chrome(
        &self,
        state: &UiState,
        page_width: f32,
        padding: f32,
    ) -> (LayeredOutput, f32) {
        let mut output = LayeredOutput::new();
        let mut y = padding;

        if !self.title.is_empty() {
            let header = Text::new(&self.theme.header, &self.title);
            let size = header.size_hint();
            let center = Point::new(page_width / 2.0, y + size.height() / 2.0);
            output.merge(header.render_to_layers(center));
            y += size.height() + ROW_GAP;
        }

        let toggle: Vec<_> = ViewMode::ALL
            .into_iter()
            .map(|mode| Button {
                label: mode.button_label(),
                active: mode == state.mode(),
                attribute: ("data-mode", mode.as_str()),
            })
            .collect();
        y += self.render_button_row(&mut output, &toggle, page_width, y, BUTTON_GAP, false);
        y += ROW_GAP;

        let stepper: Vec<_> = stage_tabs()
            .map(|(stage, label)| Button {
                label,
                active: stage == state.stage(),
                attribute: ("data-stage", stage.as_str()),
            })
            .collect();
        y += self.render_button_row(&mut output, &stepper, page_width, y, STEP_CONNECTOR, true);

        (output, y)
    }

    /// Draws one centered row of buttons starting at `top`; returns the row height.
    fn render_button_row(
        &self,
        output: &mut LayeredOutput,
        buttons: &[Button<'_>],
        page_width: f32,
        top: f32,
        gap: f32,
        connected: bool,
    ) -> f32 {
        let sizes: Vec<Size> = buttons
            .iter()
            .map(|button| {
                let text = Text::new(self.button_text(button.active), button.label);
                let size = text.size_hint();
                Size::new(
                    size.width() + 2.0 * BUTTON_PADDING_X,
                    size.height() + 2.0 * BUTTON_PADDING_Y,
                )
            })
            .collect();

        let height = sizes.iter().map(|size| size.height()).fold(0.0, f32::max);
        let row_width = sizes.iter().map(|size| size.width()).sum::<f32>()
            + gap * buttons.len().saturating_sub(1) as f32;

        let mut x = (page_width - row_width) / 2.0;
        let center_y = top + height / 2.0;
        for (index, (button, size)) in buttons.iter().zip(&sizes).enumerate() {
            if connected && index > 0 {
                let line = svg_element::Line::new()
                    .set("x1", x - gap)
                    .set("y1", center_y)
                    .set("x2", x)
                    .set("y2", center_y)
                    .set("stroke", "#D1D5DB")
                    .set("stroke-width", 2);
                output.add_to_layer(RenderLayer::Chrome, Box::new(line));
            }

            let top_left = Point::new(x, center_y - size.height() / 2.0);
            let bounds = Bounds::new_from_top_left(top_left, *size);
            let fill = match (button.active, connected) {
                (true, _) => "#2563EB",
                (false, false) => "#E5E7EB",
                (false, true) => "#F3F4F6",
            };
            let (key, value) = button.attribute;
            let rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("rx", 6)
                .set("fill", fill)
                .set(key, value);
            output.add_to_layer(RenderLayer::Chrome, Box::new(rect));

            let text = Text::new(self.button_text(button.active), button.label);
            output.merge(text.render_to_layers(bounds.center()));

            x += size.width() + gap;
        }

        height
    }

    fn button_text(&self, active: bool) -> &TextDefinition {
        if active {
            &self.theme.active_button
        } else {
            &self.theme.button
        }
    }
}
