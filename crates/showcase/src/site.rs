//! Static site export.
//!
//! [`SiteBuilder`] renders every reachable view into a directory:
//!
//! - `flow-<stage>.svg` and `architecture-<stage>.svg` for each stage, with
//!   nothing selected;
//! - `architecture-<stage>-<node>.svg` for each architecture node, with that
//!   node selected;
//! - `index.html` linking all of the above, with links prefixed by the
//!   configured base path.

use std::{fmt::Write as _, fs, path::Path};

use log::{debug, info};

use crate::{
    Showcase, ShowcaseError,
    catalog::{NodeId, StageId},
    state::{Action, UiState, ViewMode},
};

/// One exported view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    file_name: String,
    state: UiState,
}

impl SitePage {
    fn new(state: UiState) -> Self {
        let mut file_name = format!("{}-{}", state.mode(), state.stage());
        if let Some(node) = state.selected() {
            file_name.push('-');
            file_name.push_str(&node.slug());
        }
        file_name.push_str(".svg");
        Self { file_name, state }
    }

    /// File name relative to the site directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    fn link_text(&self) -> String {
        let stage = self.state.stage().tab_label();
        match self.state.selected() {
            Some(node) => format!("{stage}: {}", node_label(&self.state, node)),
            None => stage.to_string(),
        }
    }
}

fn node_label(state: &UiState, node: NodeId) -> &'static str {
    state
        .diagram()
        .node(node)
        .map_or(node.as_str(), |node| node.label())
}

/// Pages written by [`SiteBuilder::build`], in index order.
#[derive(Debug, Clone, Default)]
pub struct SiteManifest {
    pages: Vec<SitePage>,
}

impl SiteManifest {
    pub fn pages(&self) -> &[SitePage] {
        &self.pages
    }

    /// File names of every page plus `index.html`.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        std::iter::once(INDEX_FILE).chain(self.pages.iter().map(SitePage::file_name))
    }
}

const INDEX_FILE: &str = "index.html";

/// Writes the static site of a [`Showcase`].
///
/// ```rust,no_run
/// use showcase::{Showcase, site::SiteBuilder};
///
/// let showcase = Showcase::default();
/// let manifest = SiteBuilder::new(&showcase)
///     .build("site".as_ref())
///     .expect("Failed to export site");
/// assert!(manifest.files().any(|file| file == "index.html"));
/// ```
#[derive(Debug)]
pub struct SiteBuilder<'a> {
    showcase: &'a Showcase,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(showcase: &'a Showcase) -> Self {
        Self { showcase }
    }

    /// Every view the site contains, in index order.
    pub fn pages(&self) -> Vec<SitePage> {
        let mut pages = Vec::new();
        for mode in ViewMode::ALL {
            for stage in StageId::ALL {
                let mut state = UiState::new();
                state.apply_all([Action::SetMode(mode), Action::SelectStage(stage)]);
                pages.push(SitePage::new(state));

                if mode == ViewMode::Architecture {
                    for node in state.diagram().nodes() {
                        let mut selected = state;
                        selected.apply(Action::ClickNode(node.id()));
                        pages.push(SitePage::new(selected));
                    }
                }
            }
        }
        pages
    }

    /// Renders every page and the index into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Io`] if the directory or index cannot be
    /// written, or any error of [`Showcase::write_svg`].
    pub fn build(&self, dir: &Path) -> Result<SiteManifest, ShowcaseError> {
        let pages = self.pages();
        info!(dir:? = dir, pages_len = pages.len(); "Exporting site");

        fs::create_dir_all(dir)?;
        for page in &pages {
            let path = dir.join(page.file_name());
            self.showcase.write_svg(page.state(), &path)?;
            debug!(file = page.file_name(); "Page written");
        }

        let manifest = SiteManifest { pages };
        fs::write(dir.join(INDEX_FILE), self.render_index(&manifest))?;

        info!(dir:? = dir; "Site exported");
        Ok(manifest)
    }

    /// Renders `index.html` for `manifest`.
    pub fn render_index(&self, manifest: &SiteManifest) -> String {
        let site = self.showcase.config().site();
        let base = site.base_url();
        let title = escape_html(site.title());

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(html, "<h1>{title}</h1>");

        for mode in ViewMode::ALL {
            let _ = writeln!(html, "<h2>{}</h2>\n<ul>", escape_html(mode.button_label()));
            let pages = manifest.pages().iter();
            for page in pages.filter(|page| page.state().mode() == mode) {
                let _ = writeln!(
                    html,
                    "<li><a href=\"{}{}\">{}</a></li>",
                    escape_html(&base),
                    escape_html(page.file_name()),
                    escape_html(&page.link_text()),
                );
            }
            html.push_str("</ul>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, LayoutConfig, SiteConfig, StyleConfig};

    #[test]
    fn test_page_names() {
        let showcase = Showcase::default();
        let pages = SiteBuilder::new(&showcase).pages();
        let names: Vec<_> = pages.iter().map(SitePage::file_name).collect();

        assert_eq!(names[0], "flow-current.svg");
        assert!(names.contains(&"architecture-target.svg"));
        assert!(names.contains(&"architecture-current-reconciler.svg"));
        assert!(names.contains(&"architecture-transition-d1-database.svg"));
        // 3 flow + 3 architecture + 3 * 6 selections
        assert_eq!(pages.len(), 24);
    }

    #[test]
    fn test_selected_pages_carry_selection() {
        let showcase = Showcase::default();
        let pages = SiteBuilder::new(&showcase).pages();
        let page = pages
            .iter()
            .find(|page| page.file_name() == "architecture-target-control-plane.svg")
            .unwrap();
        assert_eq!(page.state().selected(), Some(NodeId::ControlPlane));
        assert_eq!(page.state().stage(), StageId::Target);
    }

    #[test]
    fn test_index_links_use_base_path() {
        let config = AppConfig::new(
            LayoutConfig::default(),
            StyleConfig::default(),
            SiteConfig::new("Demo <WAF>", "/Adaptive-Profiler-Demo"),
        );
        let showcase = Showcase::new(config);
        let builder = SiteBuilder::new(&showcase);
        let manifest = SiteManifest {
            pages: builder.pages(),
        };

        let index = builder.render_index(&manifest);
        assert!(index.contains("href=\"/Adaptive-Profiler-Demo/flow-current.svg\""));
        assert!(index.contains("<title>Demo &lt;WAF&gt;</title>"));
        assert!(index.contains("Current State: Reconciler"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
