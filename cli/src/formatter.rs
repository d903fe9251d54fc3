use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use merchant::response::format_credits;
use merchant::{convert, FactSheet, MetalFact, SymbolFact};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_facts(&self, facts: &FactSheet, json: bool) -> Result<String> {
        if json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(facts)?));
        }

        if facts.is_empty() {
            return Ok("No facts recorded yet.\n".to_string());
        }

        let mut output = String::new();
        if !facts.symbols.is_empty() {
            output.push_str(&self.format_symbols_table(&facts.symbols));
            output.push('\n');
        }
        if !facts.metals.is_empty() {
            output.push_str(&self.format_metals_table(&facts.metals));
            output.push('\n');
        }
        Ok(output)
    }

    fn format_symbols_table(&self, symbols: &[SymbolFact]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Word").set_alignment(CellAlignment::Left),
            Cell::new("Symbol").set_alignment(CellAlignment::Center),
            Cell::new("Value").set_alignment(CellAlignment::Right),
        ]));

        for fact in symbols {
            let value = convert(&fact.symbol.to_string())
                .map(|v| v.to_string())
                .unwrap_or_else(|_| "?".to_string());
            table.add_row(Row::from(vec![
                Cell::new(&fact.word),
                Cell::new(fact.symbol).set_alignment(CellAlignment::Center),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }

    fn format_metals_table(&self, metals: &[MetalFact]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Metal").set_alignment(CellAlignment::Left),
            Cell::new("Hint").set_alignment(CellAlignment::Left),
            Cell::new("Credits per unit").set_alignment(CellAlignment::Right),
        ]));

        for fact in metals {
            let hint = format!("{} = {} Credits", fact.phrase, fact.amount);
            let unit_value = fact
                .unit_value
                .map(format_credits)
                .unwrap_or_else(|| "?".to_string());
            table.add_row(Row::from(vec![
                Cell::new(&fact.metal),
                Cell::new(hint),
                Cell::new(unit_value).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }
}
