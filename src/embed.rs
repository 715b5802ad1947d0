//! Embed configuration for the external advanced-chart script.
//!
//! Charts themselves are drawn by a third-party script. All the dashboard
//! produces is the container element id, the script URL and the JSON config
//! the script reads from its own body.

use serde::Serialize;

use crate::config::ChartConfig;

/// Script that renders the chart into its container.
pub const SCRIPT_URL: &str =
    "https://s3.tradingview.com/external-embedding/embed-widget-advanced-chart.js";

/// Prefix of every chart container id.
const CONTAINER_PREFIX: &str = "tradingview-widget-";

/// JSON body of the embed script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedConfig {
    pub autosize: bool,
    pub symbol: String,
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub enable_publishing: bool,
    pub allow_symbol_change: bool,
    pub container_id: String,
}

/// Everything needed to place one chart on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEmbed {
    config: EmbedConfig,
}

impl ChartEmbed {
    /// Builds the embed for `symbol` using the chart options in `chart`.
    pub fn new(symbol: &str, chart: &ChartConfig) -> Self {
        let container_id = container_id(symbol);
        Self {
            config: EmbedConfig {
                autosize: true,
                symbol: symbol.to_string(),
                interval: chart.interval.clone(),
                timezone: chart.timezone.clone(),
                theme: chart.theme.clone(),
                style: "1".to_string(),
                locale: chart.locale.clone(),
                enable_publishing: false,
                allow_symbol_change: true,
                container_id,
            },
        }
    }

    /// Id of the element the chart renders into.
    pub fn container_id(&self) -> &str {
        &self.config.container_id
    }

    /// URL of the rendering script.
    pub fn script_url(&self) -> &'static str {
        SCRIPT_URL
    }

    /// The script configuration.
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Pretty-printed JSON configuration.
    pub fn config_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.config)
    }

    /// Container `div` with the configured script inside it.
    pub fn to_html(&self) -> Result<String, serde_json::Error> {
        // `</` inside the script body would close the tag early.
        let body = self.config_json()?.replace("</", "<\\/");
        Ok(format!(
            "<div id=\"{id}\" style=\"height: 100%; width: 100%\">\n\
             <script type=\"text/javascript\" src=\"{src}\" async>\n{body}\n</script>\n\
             </div>",
            id = self.container_id(),
            src = SCRIPT_URL,
        ))
    }
}

/// `tradingview-widget-` followed by `symbol` with every character outside
/// `[A-Za-z0-9]` replaced by `_`.
pub fn container_id(symbol: &str) -> String {
    let mut id = String::with_capacity(CONTAINER_PREFIX.len() + symbol.len());
    id.push_str(CONTAINER_PREFIX);
    id.extend(
        symbol
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }),
    );
    id
}
