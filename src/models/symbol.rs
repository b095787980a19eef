use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    Stock,
    Crypto,
    Commodity,
    Forex,
}

/// Entry of the built-in ticker catalogue used for autocomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: SymbolCategory,
}
