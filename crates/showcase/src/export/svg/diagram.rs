//! SVG rendering of the diagram panel.

use log::trace;
use svg::node::element as svg_element;

use showcase_core::{
    draw::{ArrowDrawer, Card, Drawable as _, LabeledArrow, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point},
};

use super::{DIAGRAM_INSET, Svg};
use crate::export::{self, View};

impl Svg {
    /// Draws the panel frame, edges and cards of `view` inside `panel`.
    ///
    /// Arrow markers are registered on `arrows`; the caller emits their
    /// definitions once per document.
    pub(super) fn render_diagram(
        &self,
        view: &View<'_>,
        panel: Bounds,
        arrows: &mut ArrowDrawer,
    ) -> Result<LayeredOutput, export::Error> {
        let mut output = LayeredOutput::new();
        let diagram = view.diagram();
        let layout = view.layout();
        let selected = view.state().selected();

        let frame = svg_element::Rectangle::new()
            .set("x", panel.min_x())
            .set("y", panel.min_y())
            .set("width", panel.width())
            .set("height", panel.height())
            .set("rx", 12)
            .set("fill", "white")
            .set("stroke", "#E5E7EB")
            .set("stroke-width", 1)
            .set("data-mode", diagram.mode().as_str())
            .set("data-stage", diagram.stage().as_str());
        output.add_to_layer(RenderLayer::Background, Box::new(frame));

        // Cards are centered vertically when the panel is taller than the diagram
        let spare_height = panel.height() - 2.0 * DIAGRAM_INSET - layout.bounds().height();
        let offset = Point::new(
            panel.min_x() + DIAGRAM_INSET,
            panel.min_y() + DIAGRAM_INSET + spare_height.max(0.0) / 2.0,
        );

        for edge in diagram.edges() {
            let (start, end) = layout.edge_endpoints(edge).ok_or_else(|| {
                export::Error::Render(format!("edge `{}` has an unplaced endpoint", edge.id()))
            })?;
            let stroke = edge
                .style()
                .to_stroke()
                .map_err(|err| export::Error::Render(err.to_string()))?;

            let mut arrow =
                LabeledArrow::new(&stroke, edge.style().path()).with_edge_id(edge.id());
            if !edge.label().is_empty() {
                arrow = arrow.with_label(&self.theme.edge_label, edge.label());
            }
            let (start, end) = (start.add_point(offset), end.add_point(offset));
            output.merge(arrows.draw_arrow(&arrow, start, end));
            trace!(edge = edge.id(); "Edge rendered");
        }

        for node in diagram.nodes() {
            let id = node.id();
            let placed = layout.node(id).ok_or_else(|| {
                export::Error::Render(format!("node `{id}` is missing from the layout"))
            })?;
            let definition = self.theme.card(node.category()).ok_or_else(|| {
                export::Error::Render(format!("no card style for category `{}`", node.category()))
            })?;

            let mut card = Card::new(definition, node.label()).with_node_id(id.as_str());
            if let Some(subtitle) = node.subtitle() {
                card = card.with_subtitle(subtitle);
            }
            if node.is_highlighted() {
                card = card.with_highlight(&self.theme.highlight);
            }
            if selected == Some(id) {
                card = card.with_ring(&self.theme.selection);
            }
            output.merge(card.render_to_layers(placed.center().add_point(offset)));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use showcase_core::geometry::Insets;

    use super::*;
    use crate::{
        catalog::{NodeId, StageId},
        export::svg::SvgBuilder,
        layout::DiagramLayout,
        panel::DetailPanel,
        state::{Action, UiState, ViewMode},
    };

    fn render(state: &UiState) -> LayeredOutput {
        let svg = SvgBuilder::new().build().unwrap();
        let diagram = state.diagram();
        let layout = DiagramLayout::compute(&diagram, 1.6, |node| svg.card_size(node)).unwrap();
        let panel = DetailPanel::derive(state);
        let view = View::new(state, &diagram, &layout, &panel);
        let bounds = layout.bounds().add_padding(Insets::uniform(DIAGRAM_INSET));

        let mut arrows = ArrowDrawer::default();
        svg.render_diagram(&view, bounds, &mut arrows).unwrap()
    }

    #[test]
    fn test_one_card_and_arrow_per_element() {
        let mut state = UiState::new();
        state.apply(Action::SetMode(ViewMode::Architecture));
        let output = render(&state);

        let diagram = state.diagram();
        assert_eq!(output.count(RenderLayer::Content), diagram.node_count());
        assert_eq!(output.count(RenderLayer::Arrow), diagram.edges().len());
    }

    #[test]
    fn test_highlight_and_ring_outlines() {
        let mut state = UiState::new();
        state.apply_all([
            Action::SetMode(ViewMode::Architecture),
            Action::SelectStage(StageId::Target),
        ]);
        let highlighted = state.diagram().highlighted_ids().len();
        assert_eq!(render(&state).count(RenderLayer::Highlight), highlighted);

        state.apply(Action::ClickNode(NodeId::Reconciler));
        assert_eq!(
            render(&state).count(RenderLayer::Highlight),
            highlighted + 1
        );
    }
}
