use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Bridge to the client-side rendering layer: a component name plus the
/// props it should be hydrated with.
#[derive(Debug, Serialize)]
pub struct Page {
    pub component: &'static str,
    pub props: Value,
}

pub fn render(component: &'static str, props: Value) -> Json<Page> {
    Json(Page { component, props })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_serializes_component_and_props() {
        let Json(page) = render("Admin/Plans/Index", json!({ "plans": [] }));

        let serialized = serde_json::to_value(&page).unwrap();
        assert_eq!(serialized["component"], "Admin/Plans/Index");
        assert_eq!(serialized["props"]["plans"], json!([]));
    }
}
