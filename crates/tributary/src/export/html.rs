use log::{debug, info};
use serde::Serialize;

use tributary_core::color::ColorScale;

use super::{Error, Exporter};
use crate::{
    charts::Chart,
    config::{AssetsConfig, LayoutConfig, StyleConfig},
    view::ChartView,
};

const TEMPLATE: &str = include_str!("../../templates/report.html");

const DEFAULT_PAGE_TITLE: &str = "University Financial Flows";

/// Page-wide settings handed to the drawing script.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Settings<'a> {
    layout: &'a LayoutConfig,
    align: &'static str,
    link_opacity: f32,
    font: &'a str,
    background: Option<String>,
}

/// Builder for the [`Html`] exporter.
///
/// Configuration is checked by [`HtmlBuilder::build`], so an exporter never
/// starts rendering with an unusable palette or layout.
#[derive(Debug, Default)]
pub struct HtmlBuilder<'a> {
    page_title: Option<&'a str>,
    layout: Option<&'a LayoutConfig>,
    style: Option<&'a StyleConfig>,
    assets: Option<&'a AssetsConfig>,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_title(mut self, page_title: &'a str) -> Self {
        self.page_title = Some(page_title);
        self
    }

    pub fn with_layout(mut self, layout: &'a LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_assets(mut self, assets: &'a AssetsConfig) -> Self {
        self.assets = Some(assets);
        self
    }

    /// Validate the configuration and create the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout dimensions, palette, link
    /// opacity, or background color are invalid.
    pub fn build(self) -> Result<Html, Error> {
        let layout = self.layout.copied().unwrap_or_default();
        layout.validate().map_err(Error::Render)?;

        let style = self.style.cloned().unwrap_or_default();
        let scale = style.color_scale().map_err(Error::Render)?;
        let link_opacity = style.link_opacity().map_err(Error::Render)?;
        let background = style
            .background_color()
            .map_err(Error::Render)?
            .map(|color| color.to_string());

        let settings = Settings {
            layout: &layout,
            align: layout.node_align().d3_function(),
            link_opacity,
            font: style.font(),
            background,
        };
        let settings = embed_json(&settings)?;

        Ok(Html {
            page_title: self.page_title.unwrap_or(DEFAULT_PAGE_TITLE).to_string(),
            assets: self.assets.cloned().unwrap_or_default(),
            settings,
            scale,
        })
    }
}

/// Standalone HTML page drawing each chart with d3-sankey.
///
/// Layout happens in the browser; colors and hover text are resolved here.
#[derive(Debug)]
pub struct Html {
    page_title: String,
    assets: AssetsConfig,
    settings: String,
    scale: ColorScale,
}

impl Exporter for Html {
    fn export_charts(&mut self, charts: &[Chart]) -> Result<String, Error> {
        let views: Vec<_> = charts
            .iter()
            .map(|chart| ChartView::new(chart, self.scale.clone()))
            .collect();
        let charts_json = embed_json(&views)?;

        let output = TEMPLATE
            .replace("{{page_title}}", &escape_html(&self.page_title))
            .replace("{{d3_url}}", &escape_html(self.assets.d3_url()))
            .replace("{{d3_sankey_url}}", &escape_html(self.assets.d3_sankey_url()))
            .replace("/*{{settings}}*/", &self.settings)
            .replace("/*{{charts}}*/", &charts_json);

        info!(charts = views.len(), bytes = output.len(); "Charts exported as HTML");
        Ok(output)
    }
}

/// Serialize a value for embedding in an inline `<script>`.
fn embed_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let json = serde_json::to_string(value)?;
    debug!(bytes = json.len(); "Embedding JSON");
    // A literal `</` could close the script element early.
    Ok(json.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use tributary_core::diagram::{Diagram, Link, Node};

    use super::*;
    use crate::config::AppConfig;

    fn chart(title: &str) -> Chart {
        Chart::new(
            title,
            Diagram::new(vec![Node::new("A"), Node::new("B")], vec![Link::new("A", "B", 1234.0)]),
        )
    }

    #[test]
    fn test_placeholders_are_replaced() {
        let config = AppConfig::default();
        let mut html = HtmlBuilder::new()
            .with_layout(config.layout())
            .with_style(config.style())
            .with_assets(config.assets())
            .build()
            .unwrap();

        let output = html.export_charts(&[chart("First"), chart("Second")]).unwrap();

        assert!(!output.contains("{{"));
        assert!(output.contains("<title>University Financial Flows</title>"));
        assert!(output.contains(config.assets().d3_sankey_url()));
        assert!(output.contains("\"align\":\"sankeyJustify\""));
        assert!(output.contains("\"title\":\"Second\""));
        assert!(output.contains("A → B\\n1,234"));
    }

    #[test]
    fn test_script_close_is_escaped() {
        let mut html = HtmlBuilder::new().build().unwrap();

        let output = html.export_charts(&[chart("</script><b>")]).unwrap();

        assert!(!output.contains("</script><b>"));
        assert!(output.contains("<\\/script><b>"));
    }

    #[test]
    fn test_page_title_is_escaped() {
        let mut html = HtmlBuilder::new().with_page_title("Costs & <Fees>").build().unwrap();

        let output = html.export_charts(&[]).unwrap();

        assert!(output.contains("<title>Costs &amp; &lt;Fees&gt;</title>"));
    }

    #[test]
    fn test_invalid_palette_fails_build() {
        let config: AppConfig = toml::from_str("[style]\npalette = [\"nope\"]").unwrap();

        let result = HtmlBuilder::new().with_style(config.style()).build();

        assert!(matches!(result, Err(Error::Render(_))));
    }
}
