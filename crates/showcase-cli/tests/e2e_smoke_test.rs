use std::fs;

use tempfile::tempdir;

use showcase::{
    catalog::{NodeId, StageId},
    state::ViewMode,
};
use showcase_cli::{
    Args, CliError, Command, RenderArgs, SiteArgs, StateArgs, run, run_with_output,
};

fn cli_args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_render_every_view() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut failed_views = Vec::new();

    for mode in ViewMode::ALL {
        for stage in StageId::ALL {
            let output_path = temp_dir.path().join(format!("{mode}-{stage}.svg"));
            let args = cli_args(Command::Render(RenderArgs {
                state: StateArgs {
                    mode: Some(mode),
                    stage: Some(stage),
                    ..StateArgs::default()
                },
                output: output_path.to_string_lossy().to_string(),
            }));

            match run(&args) {
                Ok(()) => {
                    let svg = fs::read_to_string(&output_path).expect("Failed to read output");
                    assert!(svg.contains("<svg"), "{mode}/{stage}: not an SVG");
                }
                Err(err) => failed_views.push(format!("{mode}/{stage}: {err}")),
            }
        }
    }

    if !failed_views.is_empty() {
        eprintln!("\nViews that failed:");
        for view in &failed_views {
            eprintln!("  - {view}");
        }
        panic!("{} view(s) failed unexpectedly", failed_views.len());
    }
}

#[test]
fn e2e_smoke_test_describe_selection() {
    let args = cli_args(Command::Describe(StateArgs {
        mode: Some(ViewMode::Architecture),
        select: Some(NodeId::Reconciler),
        ..StateArgs::default()
    }));

    let mut output = Vec::new();
    run_with_output(&args, &mut output).expect("describe should succeed");

    let text = String::from_utf8(output).expect("output should be UTF-8");
    assert!(text.contains("Backend Architecture Overview"));
    assert!(text.contains("Selected: Reconciler"));
    assert!(text.contains("Data Reconciler Worker"));
}

#[test]
fn e2e_smoke_test_site_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let site_dir = temp_dir.path().join("site");

    let args = cli_args(Command::Site(SiteArgs {
        output: site_dir.to_string_lossy().to_string(),
    }));
    run(&args).expect("site export should succeed");

    assert!(site_dir.join("index.html").is_file());
    assert!(site_dir.join("flow-current.svg").is_file());
    let selection = site_dir.join("architecture-target-control-plane.svg");
    assert!(selection.is_file());
}

#[test]
fn e2e_smoke_test_select_hidden_node_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("hidden.svg");

    let args = cli_args(Command::Render(RenderArgs {
        state: StateArgs {
            stage: Some(StageId::Transition),
            select: Some(NodeId::App),
            ..StateArgs::default()
        },
        output: output_path.to_string_lossy().to_string(),
    }));

    let err = run(&args).expect_err("selecting a hidden node should fail");
    assert!(matches!(err, CliError::NodeNotInView { .. }));
    assert!(!output_path.exists(), "no file should be written on error");
}

#[test]
fn e2e_smoke_test_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = cli_args(Command::Describe(StateArgs::default()));
    args.config = Some(
        temp_dir
            .path()
            .join("missing.toml")
            .to_string_lossy()
            .to_string(),
    );

    let mut output = Vec::new();
    assert!(run_with_output(&args, &mut output).is_err());
    assert!(output.is_empty());
}
