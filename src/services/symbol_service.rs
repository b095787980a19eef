use crate::models::{SymbolCategory, SymbolInfo};

const fn symbol(symbol: &'static str, name: &'static str, category: SymbolCategory) -> SymbolInfo {
    SymbolInfo { symbol, name, category }
}

static CATALOGUE: [SymbolInfo; 12] = [
    symbol("AAPL", "Apple Inc.", SymbolCategory::Stock),
    symbol("MSFT", "Microsoft Corporation", SymbolCategory::Stock),
    symbol("TSLA", "Tesla Inc.", SymbolCategory::Stock),
    symbol("BTC-USD", "Bitcoin USD", SymbolCategory::Crypto),
    symbol("ETH-USD", "Ethereum USD", SymbolCategory::Crypto),
    symbol("GC=F", "Gold (XAUUSD)", SymbolCategory::Commodity),
    symbol("SI=F", "Silver", SymbolCategory::Commodity),
    symbol("PL=F", "Platinum", SymbolCategory::Commodity),
    symbol("EURUSD=X", "EUR / USD", SymbolCategory::Forex),
    symbol("LMT", "Lockheed Martin", SymbolCategory::Stock),
    symbol("RHM.DE", "Rheinmetall AG", SymbolCategory::Stock),
    symbol("RTX", "RTX Corporation", SymbolCategory::Stock),
];

pub fn catalogue() -> &'static [SymbolInfo] {
    &CATALOGUE
}

/// Case-insensitive substring match on symbol or name. An empty query
/// suggests nothing.
pub fn search(query: &str) -> Vec<&'static SymbolInfo> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    CATALOGUE
        .iter()
        .filter(|s| s.symbol.to_lowercase().contains(&query) || s.name.to_lowercase().contains(&query))
        .collect()
}
