use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;
use stockroom_inventory::{
    messages, AssignSupplier, CreateItem, InventoryItem, PatchItem, RawAmount, ReplaceItem,
};

// -------------------------
// JSON request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub amount: Option<RawAmount>,
}

impl From<CreateItemRequest> for CreateItem {
    fn from(body: CreateItemRequest) -> Self {
        CreateItem {
            name: body.name,
            amount: body.amount,
            missing_message: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub amount: Option<RawAmount>,
}

impl From<UpdateItemRequest> for PatchItem {
    fn from(body: UpdateItemRequest) -> Self {
        PatchItem {
            name: body.name,
            amount: body.amount,
        }
    }
}

// -------------------------
// HTML form DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemForm {
    pub inventory_name: Option<String>,
    pub inventory_amount: Option<String>,
}

impl From<CreateItemForm> for CreateItem {
    fn from(form: CreateItemForm) -> Self {
        CreateItem {
            name: form.inventory_name,
            amount: form.inventory_amount.map(RawAmount::Text),
            missing_message: Some(messages::MISSING_ITEM_NAME_OR_AMOUNT),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditItemForm {
    pub inventory_name: Option<String>,
    pub new_amount: Option<String>,
}

impl From<EditItemForm> for ReplaceItem {
    fn from(form: EditItemForm) -> Self {
        ReplaceItem {
            name: form.inventory_name,
            amount: form.new_amount.map(RawAmount::Text),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SupplierForm {
    pub supplier_name: Option<String>,
}

impl From<SupplierForm> for AssignSupplier {
    fn from(form: SupplierForm) -> Self {
        AssignSupplier {
            supplier: form.supplier_name,
        }
    }
}

// -------------------------
// JSON response DTOs
// -------------------------

/// Full item representation; `supplier` is `null` until assigned.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub amount: i64,
    pub supplier: Option<String>,
}

impl From<&InventoryItem> for ItemResponse {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id_typed(),
            name: item.name().to_string(),
            amount: item.amount(),
            supplier: item.supplier().map(str::to_string),
        }
    }
}

/// Body of a successful create: no supplier field yet.
#[derive(Debug, Serialize)]
pub struct CreatedItemResponse {
    pub id: ItemId,
    pub name: String,
    pub amount: i64,
}

impl From<&InventoryItem> for CreatedItemResponse {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id_typed(),
            name: item.name().to_string(),
            amount: item.amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub result: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_string_or_number_amount() {
        let a: CreateItemRequest = serde_json::from_str(r#"{"name":"Bolt","amount":"10"}"#).unwrap();
        let b: CreateItemRequest = serde_json::from_str(r#"{"name":"Bolt","amount":10}"#).unwrap();
        assert_eq!(CreateItem::from(a).validate().unwrap().amount, 10);
        assert_eq!(CreateItem::from(b).validate().unwrap().amount, 10);
    }

    #[test]
    fn unknown_and_mistyped_fields_are_rejected() {
        assert!(serde_json::from_str::<CreateItemRequest>(r#"{"name":"Bolt","amount":1,"colour":"red"}"#).is_err());
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"supplier":"Acme"}"#).is_err());
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"name":7}"#).is_err());
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"amount":2.5}"#).is_err());
    }

    #[test]
    fn page_create_form_uses_page_wording() {
        let form = CreateItemForm {
            inventory_name: Some("Bolt".into()),
            inventory_amount: None,
        };
        assert_eq!(
            CreateItem::from(form).validate().unwrap_err().to_string(),
            messages::MISSING_ITEM_NAME_OR_AMOUNT
        );
    }

    #[test]
    fn item_response_serializes_null_supplier() {
        let item = InventoryItem::from_parts(ItemId::new(1), "Bolt".into(), 10, None);
        let json = serde_json::to_value(ItemResponse::from(&item)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Bolt", "amount": 10, "supplier": null})
        );

        let created = serde_json::to_value(CreatedItemResponse::from(&item)).unwrap();
        assert_eq!(created, serde_json::json!({"id": 1, "name": "Bolt", "amount": 10}));
    }
}
