//! SVG export backend.
//!
//! [`SvgBuilder`] resolves the style and layout configuration into an [`Svg`]
//! renderer. [`Svg::render_view`] draws one [`View`] as a complete page:
//!
//! ```text
//! +--------------------------------------------------+
//! |                      title                       |
//! |          [ mode toggle ]  [ mode toggle ]        |
//! |        [ stage ] -- [ stage ] -- [ stage ]       |
//! | +------------------------------+ +-------------+ |
//! | |  diagram          [overlay]  | | detail      | |
//! | |                              | | panel       | |
//! | +------------------------------+ +-------------+ |
//! +--------------------------------------------------+
//! ```
//!
//! Buttons carry `data-mode` and `data-stage`, cards carry `data-node`, and
//! edges carry `data-edge`, so a host page can wire them to actions.

mod chrome;
mod diagram;
mod panel;
mod theme;

use std::path::Path;

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use showcase_core::{
    draw::{ArrowDrawer, Card, Drawable as _, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

use crate::{
    ShowcaseError,
    config::{LayoutConfig, StyleConfig},
    diagram::DiagramNode,
    export::{self, Exporter, View},
};

use panel::TextFlow;
use theme::Theme;

/// Space between the diagram panel border and the outermost cards.
const DIAGRAM_INSET: f32 = 32.0;
const MIN_DIAGRAM_HEIGHT: f32 = 400.0;
const PANEL_INSET: f32 = 20.0;
const OVERLAY_WIDTH: f32 = 360.0;
const OVERLAY_INSET: f32 = 16.0;

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder {
    style: StyleConfig,
    layout: LayoutConfig,
    title: String,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    pub fn with_layout(mut self, layout: &LayoutConfig) -> Self {
        self.layout = layout.clone();
        self
    }

    /// Sets the header drawn at the top of every page.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Resolves colors and fonts.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Config`] if a configured color cannot be parsed.
    pub fn build(self) -> Result<Svg, ShowcaseError> {
        let theme = Theme::from_style(&self.style)?;
        Ok(Svg {
            theme,
            layout: self.layout,
            title: self.title,
        })
    }
}

/// SVG renderer for showcase views.
#[derive(Debug)]
pub struct Svg {
    theme: Theme,
    layout: LayoutConfig,
    title: String,
}

impl Svg {
    /// Outer size of the card drawn for `node`.
    pub fn card_size(&self, node: &DiagramNode) -> Size {
        let Some(definition) = self.theme.card(node.category()) else {
            return Size::default();
        };
        let mut card = Card::new(definition, node.label());
        if let Some(subtitle) = node.subtitle() {
            card = card.with_subtitle(subtitle);
        }
        card.size()
    }

    /// Draws `view` as a standalone SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if an edge style or card style cannot
    /// be resolved, or if the layout misses a node of the diagram.
    pub fn render_view(&self, view: &View<'_>) -> Result<Document, export::Error> {
        let padding = self.layout.padding();
        let panel_width = self.layout.panel_width();
        let feature = view.panel().feature();

        // Text panels are flowed first; their heights decide the page size
        let mut detail = TextFlow::new(&self.theme.panel, panel_width - 2.0 * PANEL_INSET);
        if let Some(feature) = feature {
            let top = detail.cursor();
            detail.gap(8.0);
            detail.push_blocks(&feature.selection_blocks());
            detail.gap(8.0);
            detail.frame(top, "#EFF6FF", "#3B82F6");
            detail.gap(16.0);
        }
        detail.push_blocks(&view.panel().summary().blocks());
        let (detail_output, detail_height) = detail.finish();

        let diagram_bounds = view.layout().bounds();
        let diagram_width = diagram_bounds.width() + 2.0 * DIAGRAM_INSET;
        let overlay_width = OVERLAY_WIDTH.min(diagram_width - 2.0 * OVERLAY_INSET);
        let overlay = feature.map(|feature| {
            let mut flow = TextFlow::new(&self.theme.panel, overlay_width - 2.0 * OVERLAY_INSET);
            flow.push_blocks(&feature.detail_blocks());
            flow.finish()
        });

        let overlay_height = overlay
            .as_ref()
            .map_or(0.0, |(_, height)| height + 2.0 * OVERLAY_INSET);
        let diagram_height = (diagram_bounds.height() + 2.0 * DIAGRAM_INSET)
            .max(MIN_DIAGRAM_HEIGHT)
            .max(overlay_height + 2.0 * OVERLAY_INSET);
        let content_height = diagram_height.max(detail_height + 2.0 * PANEL_INSET);

        let page_width = padding + diagram_width + padding + panel_width + padding;
        let (chrome_output, chrome_height) = self.render_chrome(view.state(), page_width, padding);
        let content_top = chrome_height + padding;
        let page_height = content_top + content_height + padding;

        let diagram_panel = Bounds::new_from_top_left(
            Point::new(padding, content_top),
            Size::new(diagram_width, diagram_height),
        );
        let detail_panel = Bounds::new_from_top_left(
            Point::new(diagram_panel.max_x() + padding, content_top),
            Size::new(panel_width, content_height),
        );

        let mut arrows = ArrowDrawer::default();
        let mut output = chrome_output;
        output.merge(self.render_diagram(view, diagram_panel, &mut arrows)?);
        output.merge(self.render_panel_background(detail_panel));

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {page_width} {page_height}"))
            .set("width", page_width)
            .set("height", page_height)
            .set("data-mode", view.state().mode().as_str())
            .set("data-stage", view.state().stage().as_str());

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", page_width)
            .set("height", page_height)
            .set("fill", self.theme.background)
            .set("fill-opacity", self.theme.background.alpha());
        doc = doc.add(background);
        doc = doc.add(arrows.draw_marker_definitions());

        for group in output.render() {
            doc = doc.add(group);
        }

        let mut detail_group =
            translated(detail_panel.min_point(), PANEL_INSET).set("data-panel", "detail");
        for group in detail_output.render() {
            detail_group = detail_group.add(group);
        }
        doc = doc.add(detail_group);

        // Overlay goes last so it stays above every diagram layer
        if let (Some((overlay_output, height)), Some(feature)) = (overlay, feature) {
            let size = Size::new(overlay_width, height + 2.0 * OVERLAY_INSET);
            let top_left = Point::new(
                diagram_panel.max_x() - OVERLAY_INSET - size.width(),
                diagram_panel.min_y() + OVERLAY_INSET,
            );
            let node_id = feature.node().as_str();
            let card = self.render_overlay(node_id, top_left, size, overlay_output);
            doc = doc.add(card);
        }

        debug!(
            width = page_width,
            height = page_height,
            markers_len = arrows.marker_count();
            "View rendered"
        );
        Ok(doc)
    }

    /// Renders `view` to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`Svg::render_view`].
    pub fn render_to_string(&self, view: &View<'_>) -> Result<String, export::Error> {
        Ok(self.render_view(view)?.to_string())
    }

    fn render_panel_background(&self, bounds: Bounds) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", 12)
            .set("fill", "white")
            .set("stroke", "#E5E7EB")
            .set("stroke-width", 1);
        output.add_to_layer(RenderLayer::Background, Box::new(rect));
        output
    }

    fn render_overlay(
        &self,
        node_id: &str,
        top_left: Point,
        size: Size,
        content: LayeredOutput,
    ) -> svg_element::Group {
        let frame = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", 10)
            .set("fill", "white")
            .set("stroke", "#D1D5DB")
            .set("stroke-width", 1);

        let close = svg_element::Text::new("×")
            .set("x", size.width() - OVERLAY_INSET)
            .set("y", OVERLAY_INSET)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-size", 18)
            .set("fill", "#6B7280")
            .set("data-action", "close-panel");

        let mut inner = translated(Point::default(), OVERLAY_INSET);
        for group in content.render() {
            inner = inner.add(group);
        }

        translated(top_left, 0.0)
            .set("data-overlay", "feature")
            .set("data-node", node_id)
            .add(frame)
            .add(inner)
            .add(close)
    }

    fn write_document(&self, path: &Path, doc: &Document) -> Result<(), export::Error> {
        svg::save(path, doc).map_err(|err| {
            error!(path:? = path, err:% = err; "Failed to write SVG file");
            export::Error::Io(err)
        })?;
        info!(path:? = path; "SVG exported");
        Ok(())
    }
}

impl Exporter for Svg {
    fn export_view(&self, view: &View<'_>, path: &Path) -> Result<(), export::Error> {
        let doc = self.render_view(view)?;
        self.write_document(path, &doc)
    }
}

fn translated(origin: Point, inset: f32) -> svg_element::Group {
    svg_element::Group::new().set(
        "transform",
        format!("translate({}, {})", origin.x() + inset, origin.y() + inset),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{NodeId, StageId},
        layout::DiagramLayout,
        panel::DetailPanel,
        state::{Action, UiState, ViewMode},
    };

    fn render(state: &UiState) -> String {
        let svg = SvgBuilder::new().with_title("Demo").build().unwrap();
        let diagram = state.diagram();
        let scale = match state.mode() {
            ViewMode::Flow => 1.0,
            ViewMode::Architecture => 1.6,
        };
        let layout = DiagramLayout::compute(&diagram, scale, |node| svg.card_size(node)).unwrap();
        let panel = DetailPanel::derive(state);
        let view = View::new(state, &diagram, &layout, &panel);
        svg.render_to_string(&view).unwrap()
    }

    #[test]
    fn test_card_size_respects_minimum() {
        let svg = SvgBuilder::new().build().unwrap();
        let diagram = UiState::new().diagram();
        for node in diagram.nodes() {
            let size = svg.card_size(node);
            assert!(size.width() >= 110.0, "{}", node.id());
            assert!(size.height() >= 44.0, "{}", node.id());
        }
    }

    #[test]
    fn test_every_node_and_edge_is_tagged() {
        let mut state = UiState::new();
        state.apply(Action::SetMode(ViewMode::Architecture));
        let rendered = render(&state);

        for node in state.diagram().nodes() {
            let tag = format!("data-node=\"{}\"", node.id().as_str());
            assert!(rendered.contains(&tag), "missing {tag}");
        }
        for edge in state.diagram().edges() {
            let tag = format!("data-edge=\"{}\"", edge.id());
            assert!(rendered.contains(&tag), "missing {tag}");
        }
    }

    #[test]
    fn test_chrome_buttons_present() {
        let rendered = render(&UiState::new());
        for mode in ViewMode::ALL {
            assert!(rendered.contains(mode.button_label()));
        }
        for stage in StageId::ALL {
            assert!(rendered.contains(&format!("data-stage=\"{}\"", stage.as_str())));
        }
        assert!(rendered.contains("Demo"));
    }

    #[test]
    fn test_overlay_only_with_selection() {
        let mut state = UiState::new();
        state.apply(Action::SetMode(ViewMode::Architecture));
        assert!(!render(&state).contains("data-overlay"));

        state.apply(Action::ClickNode(NodeId::Reconciler));
        let rendered = render(&state);
        assert!(rendered.contains("data-overlay=\"feature\""));
        assert!(rendered.contains("Key Features:"));
        assert!(rendered.contains("Selected: Reconciler"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.svg");

        let svg = SvgBuilder::new().build().unwrap();
        let state = UiState::new();
        let diagram = state.diagram();
        let layout = DiagramLayout::compute(&diagram, 1.0, |node| svg.card_size(node)).unwrap();
        let panel = DetailPanel::derive(&state);
        let view = View::new(&state, &diagram, &layout, &panel);
        svg.export_view(&view, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }

    #[test]
    fn test_export_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("view.svg");

        let svg = SvgBuilder::new().build().unwrap();
        let state = UiState::new();
        let diagram = state.diagram();
        let layout = DiagramLayout::compute(&diagram, 1.0, |node| svg.card_size(node)).unwrap();
        let panel = DetailPanel::derive(&state);
        let view = View::new(&state, &diagram, &layout, &panel);
        let err = svg.export_view(&view, &path).unwrap_err();
        assert!(matches!(err, export::Error::Io(_)));
    }
}
