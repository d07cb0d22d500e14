//! HTML rendering seam.
//!
//! Handlers only pass items and an optional error message; markup lives in
//! the `templates/` directory and is rendered by [`TeraViews`].

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use stockroom_inventory::InventoryItem;

use crate::app::dto::ItemResponse;

const TEMPLATES: [(&str, &str); 4] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("edit.html", include_str!("../../templates/edit.html")),
    ("add_supplier.html", include_str!("../../templates/add_supplier.html")),
];

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to add template {name}: {source}")]
    Load {
        name: &'static str,
        #[source]
        source: tera::Error,
    },
    #[error("failed to render template {name}: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: tera::Error,
    },
}

pub trait ViewRenderer: Send + Sync {
    /// Item list with the create form.
    fn index(&self, items: &[InventoryItem], error: Option<&str>) -> Result<String, ViewError>;

    /// Edit form for one item (`inventory_name`, `new_amount`).
    fn edit(&self, item: &InventoryItem) -> Result<String, ViewError>;

    /// Supplier form for one item (`supplier_name`).
    fn add_supplier(&self, item: &InventoryItem) -> Result<String, ViewError>;
}

#[derive(Serialize)]
struct IndexPage<'a> {
    items: Vec<ItemResponse>,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct ItemPage {
    item: ItemResponse,
}

/// Built-in templates, compiled once. Autoescaping is on for every `.html` template.
#[derive(Debug, Clone)]
pub struct TeraViews {
    tera: Tera,
}

impl TeraViews {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        // Layout first: children are resolved against it as they are added.
        for (name, content) in TEMPLATES {
            tera.add_raw_template(name, content)
                .map_err(|source| ViewError::Load { name, source })?;
        }

        tracing::debug!(templates = TEMPLATES.len(), "page templates loaded");
        Ok(Self { tera })
    }

    fn render(&self, name: &'static str, page: &impl Serialize) -> Result<String, ViewError> {
        let context = Context::from_serialize(page).map_err(|source| ViewError::Render { name, source })?;
        self.tera
            .render(name, &context)
            .map_err(|source| ViewError::Render { name, source })
    }
}

impl ViewRenderer for TeraViews {
    fn index(&self, items: &[InventoryItem], error: Option<&str>) -> Result<String, ViewError> {
        let page = IndexPage {
            items: items.iter().map(ItemResponse::from).collect(),
            error,
        };
        self.render("index.html", &page)
    }

    fn edit(&self, item: &InventoryItem) -> Result<String, ViewError> {
        self.render("edit.html", &ItemPage { item: item.into() })
    }

    fn add_supplier(&self, item: &InventoryItem) -> Result<String, ViewError> {
        self.render("add_supplier.html", &ItemPage { item: item.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ItemId;

    fn views() -> TeraViews {
        TeraViews::new().unwrap()
    }

    #[test]
    fn index_escapes_user_text_and_shows_error() {
        let item = InventoryItem::from_parts(ItemId::new(1), "<b>Bolt</b>".into(), 3, Some("A&B".into()));
        let html = views().index(&[item], Some("Amount must be a valid integer.")).unwrap();

        assert!(html.contains("&lt;b&gt;Bolt"));
        assert!(!html.contains("<b>Bolt"));
        assert!(html.contains("A&amp;B"));
        assert!(html.contains("<p class=\"error\">Amount must be a valid integer.</p>"));
        assert!(html.contains("action=\"/delete/1\""));
    }

    #[test]
    fn index_without_error_or_supplier() {
        let item = InventoryItem::from_parts(ItemId::new(2), "Nut".into(), 0, None);
        let html = views().index(&[item], None).unwrap();

        assert!(html.starts_with("<!doctype html>"));
        assert!(!html.contains("class=\"error\""));
        assert!(html.contains("<td>Nut</td>"));
        assert!(html.contains("<td></td>"));
    }

    #[test]
    fn edit_form_uses_expected_field_names() {
        let item = InventoryItem::from_parts(ItemId::new(5), "Nut".into(), 2, None);
        let html = views().edit(&item).unwrap();
        assert!(html.contains("name=\"inventory_name\" value=\"Nut\""));
        assert!(html.contains("name=\"new_amount\" value=\"2\""));
        assert!(html.contains("action=\"/edit/5\""));
        assert!(html.contains("<title>Edit item</title>"));
    }

    #[test]
    fn supplier_form_prefills_current_supplier() {
        let item = InventoryItem::from_parts(ItemId::new(4), "Nut".into(), 2, Some("Acme".into()));
        let html = views().add_supplier(&item).unwrap();
        assert!(html.contains("name=\"supplier_name\" value=\"Acme\""));
        assert!(html.contains("action=\"/add_supplier/4\""));
    }
}
