//! Integration tests for the Showcase API
//!
//! These tests render whole views through the public entry points.

use showcase::{
    Showcase,
    catalog::{NodeId, StageId},
    color::Color,
    config::{AppConfig, LayoutConfig, SiteConfig, StyleConfig},
    state::{Action, UiState, ViewMode},
};

fn state_with(actions: impl IntoIterator<Item = Action>) -> UiState {
    let mut state = UiState::new();
    state.apply_all(actions);
    state
}

#[test]
fn test_render_every_stage_and_mode() {
    let showcase = Showcase::default();

    for mode in ViewMode::ALL {
        for stage in StageId::ALL {
            let state = state_with([Action::SetMode(mode), Action::SelectStage(stage)]);
            let result = showcase.render_svg(&state);

            let svg = match result {
                Ok(svg) => svg,
                Err(err) => panic!("Failed to render {mode}/{stage}: {err}"),
            };
            assert!(svg.contains("<svg"), "Output should contain SVG tag");
            assert!(svg.contains("</svg>"), "Output should be complete SVG");

            for node in state.diagram().nodes() {
                let attribute = format!("data-node=\"{}\"", node.id().as_str());
                assert!(
                    svg.contains(&attribute),
                    "{mode}/{stage}: missing {attribute}"
                );
            }
        }
    }
}

#[test]
fn test_active_buttons_follow_state() {
    let state = state_with([
        Action::SetMode(ViewMode::Architecture),
        Action::SelectStage(StageId::Transition),
    ]);
    let svg = Showcase::default()
        .render_svg(&state)
        .expect("Failed to render");

    assert!(svg.contains("data-mode=\"architecture\""));
    assert!(svg.contains("data-stage=\"transition\""));
    assert!(svg.contains(ViewMode::Flow.button_label()));
    assert!(svg.contains(ViewMode::Architecture.button_label()));
    assert!(svg.contains("Key Components:"));
}

#[test]
fn test_selection_renders_feature_card() {
    let state = state_with([
        Action::SetMode(ViewMode::Architecture),
        Action::ClickNode(NodeId::KvStorage),
    ]);
    let svg = Showcase::default()
        .render_svg(&state)
        .expect("Failed to render");

    assert!(svg.contains("data-overlay=\"feature\""));
    assert!(svg.contains("Selected: KV Store"));
}

#[test]
fn test_closing_removes_feature_card() {
    let state = state_with([
        Action::SetMode(ViewMode::Architecture),
        Action::ClickNode(NodeId::KvStorage),
        Action::ClosePanel,
    ]);
    let svg = Showcase::default()
        .render_svg(&state)
        .expect("Failed to render");
    assert!(!svg.contains("data-overlay"));
}

#[test]
fn test_render_is_deterministic() {
    let showcase = Showcase::new(AppConfig::default());
    let state = state_with([Action::SelectStage(StageId::Target)]);

    let first = showcase.render_svg(&state).expect("Failed to render");
    let second = showcase.render_svg(&state).expect("Failed to render");
    assert_eq!(first, second);
}

#[test]
fn test_custom_config_is_applied() {
    let config: AppConfig = toml::from_str(
        r##"
        [style]
        background_color = "#101010"

        [site]
        title = "WAF Roadmap"
        "##,
    )
    .expect("Failed to parse config");

    let svg = Showcase::new(config)
        .render_svg(&UiState::new())
        .expect("Failed to render");
    assert!(svg.contains("WAF Roadmap"));
    let background = Color::new("#101010").expect("valid color").to_string();
    assert!(svg.contains(&background));
}

#[test]
fn test_render_every_view_at_other_scales() {
    for scale in [1.0, 0.5] {
        let config = AppConfig::new(
            LayoutConfig::new(scale, scale, 24.0, 380.0),
            StyleConfig::default(),
            SiteConfig::default(),
        );
        config.validate().expect("config should be valid");
        let showcase = Showcase::new(config);

        for mode in ViewMode::ALL {
            for stage in StageId::ALL {
                let state = state_with([Action::SetMode(mode), Action::SelectStage(stage)]);
                let svg = match showcase.render_svg(&state) {
                    Ok(svg) => svg,
                    Err(err) => panic!("Failed to render {mode}/{stage} at {scale}: {err}"),
                };
                for node in state.diagram().nodes() {
                    let attribute = format!("data-node=\"{}\"", node.id().as_str());
                    assert!(svg.contains(&attribute), "{mode}/{stage} at {scale}");
                }
            }
        }
    }
}

#[test]
fn test_write_svg_creates_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("view.svg");

    Showcase::default()
        .write_svg(&UiState::new(), &path)
        .expect("Failed to write SVG");

    let written = std::fs::read_to_string(&path).expect("Failed to read SVG");
    assert!(written.contains("data-node=\"user\""));
}
