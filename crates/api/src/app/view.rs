//! Page rendering.
//!
//! The page is one handlebars template compiled at startup. Text placed in
//! HTML is escaped by handlebars; text placed inside inline script (event
//! handler attributes) goes through the `escapejs` helper first.

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
    TemplateError,
};
use serde::Serialize;
use serde_json::Value;

use cablestock_inventory::catalog::{self, CABLE_CATEGORIES};
use cablestock_inventory::{Inventory, InventoryItem, Outcome};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.hbs");
const INDEX: &str = "index";

/// Escape text for a single- or double-quoted JavaScript string literal.
pub fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// `{{escapejs value}}`: JS string escaping followed by HTML escaping, so the
/// result is safe inside a quoted attribute such as `onclick="f('...')"`.
/// Missing and null values render as nothing.
fn escapejs_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let raw = match h.param(0).map(|p| p.value()) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    out.write(&handlebars::html_escape(&escape_js(&raw)))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct CategoryView {
    name: &'static str,
    sizes: &'static [&'static str],
}

/// Everything the template reads.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    inventory: Vec<&'a InventoryItem>,
    message: &'a str,
    has_search: bool,
    search_results: Vec<&'a InventoryItem>,
    edit_ref: Option<&'a str>,
    cable_categories: Vec<CategoryView>,
    wire_types: Vec<String>,
    lengths: Vec<u32>,
}

impl<'a> PageView<'a> {
    pub fn new(inventory: &'a Inventory, outcome: &'a Outcome) -> Self {
        Self {
            inventory: inventory.iter().collect(),
            message: &outcome.message,
            has_search: outcome.search_results.is_some(),
            search_results: outcome
                .search_results
                .as_ref()
                .map(|r| r.iter().collect())
                .unwrap_or_default(),
            edit_ref: outcome.edit_ref.as_deref(),
            cable_categories: CABLE_CATEGORIES
                .iter()
                .map(|&(name, sizes)| CategoryView { name, sizes })
                .collect(),
            wire_types: catalog::wire_types(),
            lengths: catalog::lengths(),
        }
    }
}

pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_helper("escapejs", Box::new(escapejs_helper));
        registry.register_template_string(INDEX, INDEX_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn render(&self, view: &PageView<'_>) -> Result<String, RenderError> {
        self.registry.render(INDEX, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cablestock_inventory::{InventoryCommand, Length};

    fn stocked(entries: &[(&str, f64, u32)]) -> Inventory {
        entries
            .iter()
            .map(|(t, l, q)| InventoryItem::new(*t, Length::new(*l).unwrap(), *q))
            .collect()
    }

    fn render(inventory: &Inventory, outcome: &Outcome) -> String {
        PageRenderer::new()
            .unwrap()
            .render(&PageView::new(inventory, outcome))
            .unwrap()
    }

    #[test]
    fn escape_js_handles_quotes_backslashes_and_newlines() {
        assert_eq!(escape_js(r#"a\b"#), r#"a\\b"#);
        assert_eq!(escape_js("it's"), r"it\'s");
        assert_eq!(escape_js(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_js("one\ntwo"), r"one\ntwo");
        assert_eq!(escape_js("plain"), "plain");
    }

    #[test]
    fn page_lists_inventory_and_message() {
        let inv = stocked(&[("Shielded 6", 5.0, 2)]);
        let outcome = Outcome {
            message: "Wire added to inventory with reference: SH 6 Core - 5.0".into(),
            ..Outcome::default()
        };
        let html = render(&inv, &outcome);

        assert!(html.contains("Wire added to inventory with reference: SH 6 Core - 5.0"));
        assert!(html.contains("SH 6 Core - 5.0"));
        assert!(html.contains("Shielded 6"));
        assert!(html.contains("Red Cable (2/0)"));
        assert!(!html.contains("Search results"));
    }

    #[test]
    fn edit_ref_shows_the_quantity_form() {
        let mut inv = stocked(&[("Armored 6", 3.0, 1), ("Earth 14", 7.0, 1)]);
        let outcome = inv.handle(&InventoryCommand::Edit {
            reference: "AR 6 - 3.0".into(),
        });
        let html = render(&inv, &outcome);

        assert_eq!(html.matches(r#"name="new_quantity""#).count(), 1);
        assert!(html.contains(r#"value="save_edit_AR 6 - 3.0""#));
    }

    #[test]
    fn search_results_section_appears_after_search() {
        let mut inv = stocked(&[("Armored 6", 3.0, 1)]);
        let outcome = inv.handle(&InventoryCommand::Search {
            wire_type: Some("Earth 14".into()),
            length: None,
        });
        let html = render(&inv, &outcome);

        assert!(html.contains("Search results"));
        assert!(html.contains("No inventory found for Earth 14"));
    }

    #[test]
    fn free_text_in_script_attributes_is_escaped() {
        let inv = stocked(&[("O'Brien \"X\" 4", 2.0, 1)]);
        let html = render(&inv, &Outcome::default());

        assert!(html.contains(r"O\&#x27;Brien \&quot;X\&quot;"));
        assert!(!html.contains("O'Brien"));
    }
}
