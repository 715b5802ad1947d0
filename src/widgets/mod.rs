//! Chart widgets and the widget set editor.
//!
//! A widget is one dashboard panel showing the chart for a single
//! instrument symbol. Widgets are grouped into a [`WidgetSet`], which owns
//! the widgets together with their per-breakpoint layout and applies
//! edits to both.
//!
//! # Example
//!
//! ```
//! use dataeyes_dashboard::layout::Breakpoint;
//! use dataeyes_dashboard::widgets::{IdGenerator, WidgetSet};
//!
//! let mut set = WidgetSet::with_defaults();
//! let mut ids = IdGenerator::new();
//! let id = set.add_widget("BINANCE:BTCUSDT", &mut ids).expect("symbol is not blank");
//! assert!(set.layouts().placement(Breakpoint::Lg, &id).is_some());
//! ```

mod id;
mod set;

pub use id::IdGenerator;
pub use set::{EditError, WidgetSet};

use serde::{Deserialize, Serialize};

/// The compiled-in widget set used on first start and by reset.
///
/// Pairs of `(id, symbol)`: oil volatility, gold volatility and the
/// skew index.
pub const DEFAULT_WIDGETS: &[(&str, &str)] = &[
    ("ovx", "FRED:OVXCLS"),
    ("gvz", "FRED:GVZCLS"),
    ("skew", "NASDAQ:SDEX"),
];

/// One dashboard panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// Key unique within the owning widget set.
    #[serde(rename = "i")]
    pub id: String,
    /// Instrument identifier handed to the chart embed, e.g. `FRED:OVXCLS`.
    pub symbol: String,
}

impl Widget {
    /// Creates a widget from an id and a symbol.
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}

/// Returns a fresh copy of [`DEFAULT_WIDGETS`].
pub fn default_widgets() -> Vec<Widget> {
    DEFAULT_WIDGETS
        .iter()
        .map(|(id, symbol)| Widget::new(*id, *symbol))
        .collect()
}
