use common::{
    entities::inventory::{to_cents, InventoryItem, PublicInventoryItem},
    error::{self, AddCode},
    repository::RepositoryObject,
    serde_ext::double_option,
    validation,
};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateInventory {
    pub name: String,
    pub quantity: i64,
    pub description: Option<String>,
    pub inventory_code: String,
    pub price: f64,
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryChange {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

pub struct InventoryService {
    repo: RepositoryObject<InventoryItem>,
}

impl InventoryService {
    pub fn new(repo: RepositoryObject<InventoryItem>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateInventory) -> error::Result<PublicInventoryItem> {
        validation::required_string("name", &input.name)?;
        validation::positive_int("quantity", input.quantity)?;
        validation::required_string("inventory_code", &input.inventory_code)?;
        validation::positive_number("price", input.price)?;
        validation::required_string("location", &input.location)?;

        let item = InventoryItem {
            id: 0,
            name: input.name,
            quantity: input.quantity,
            description: input.description,
            inventory_code: input.inventory_code,
            price_cents: to_cents(input.price),
            location: input.location,
            created_at: 0,
            updated_at: 0,
        };

        Ok(self.repo.insert(item).await?.into())
    }

    pub async fn list(&self) -> error::Result<Vec<PublicInventoryItem>> {
        Ok(self
            .repo
            .find_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn update(&self, change: InventoryChange) -> error::Result<PublicInventoryItem> {
        let mut patch = Document::new();

        if let Some(name) = change.name {
            validation::required_string("name", &name)?;
            patch.insert("name", name);
        }
        if let Some(quantity) = change.quantity {
            validation::positive_int("quantity", quantity)?;
            patch.insert("quantity", quantity);
        }
        if let Some(description) = change.description {
            patch.insert("description", description.map_or(Bson::Null, Bson::String));
        }
        if let Some(inventory_code) = change.inventory_code {
            validation::required_string("inventory_code", &inventory_code)?;
            patch.insert("inventory_code", inventory_code);
        }
        if let Some(price) = change.price {
            validation::positive_number("price", price)?;
            patch.insert("price_cents", to_cents(price));
        }
        if let Some(location) = change.location {
            validation::required_string("location", &location)?;
            patch.insert("location", location);
        }

        let Some(item) = self.repo.update_by_id(change.id, patch).await? else {
            return Err(anyhow::anyhow!("Inventory item {} not found", change.id).code(404));
        };

        Ok(item.into())
    }

    pub async fn delete(&self, id: i64) -> error::Result<bool> {
        self.repo.delete_by_id(id).await
    }
}
