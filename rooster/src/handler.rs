//! Validating front for a rooster
//!
//! A [`Handler`] takes raw JSON the way it arrives from a client, runs the
//! field rules and only then calls the store.

use std::sync::Arc;

use shared::ObjectId;
use tracing::{debug, warn};
use validation::{make, Expected, ValidationError, Value};

use crate::config::RoosterConfig;
use crate::dto::{self, rules::whole_number};
use crate::error::RoosterError;
use crate::module::ModuleKind;
use crate::rooster::{Page, Rooster};

pub struct Handler<K: ModuleKind> {
    rooster: Arc<dyn Rooster<K>>,
    config: RoosterConfig,
}

impl<K: ModuleKind> Clone for Handler<K> {
    fn clone(&self) -> Self {
        Self {
            rooster: Arc::clone(&self.rooster),
            config: self.config.clone(),
        }
    }
}

impl<K: ModuleKind> Handler<K> {
    pub fn new(rooster: Arc<dyn Rooster<K>>, config: RoosterConfig) -> Self {
        Self { rooster, config }
    }

    pub fn config(&self) -> &RoosterConfig {
        &self.config
    }

    pub async fn add(&self, raw: serde_json::Value) -> Result<ObjectId, RoosterError> {
        let data: K::AddData = self.checked(dto::parse(raw))?;
        let id = self.rooster.add(data).await?;
        debug!(module = %K::MODULE, id = %id, "Entry added");
        Ok(id)
    }

    pub async fn get(&self, raw_id: &serde_json::Value) -> Result<K::Entity, RoosterError> {
        let id = self.checked(parse_id(raw_id))?;
        debug!(module = %K::MODULE, id = %id, "Fetching entry");

        match self.rooster.get(&id).await? {
            Some(entity) => Ok(entity),
            None => Err(RoosterError::NotFound {
                module: K::MODULE,
                id,
            }),
        }
    }

    pub async fn get_all(&self, raw_page: &serde_json::Value) -> Result<Vec<K::Entity>, RoosterError> {
        let number = self.checked(parse_page(raw_page, self.config.max_page))?;
        let page = Page {
            number,
            size: self.config.page_size,
        };
        debug!(module = %K::MODULE, page = number, size = page.size, "Listing entries");

        self.rooster.get_all(page).await
    }

    pub async fn update(
        &self,
        raw_id: &serde_json::Value,
        raw: serde_json::Value,
    ) -> Result<(), RoosterError> {
        let id = self.checked(parse_id(raw_id))?;
        let data: K::UpdateData = self.checked(dto::parse(raw))?;
        self.rooster.update(&id, data).await?;
        debug!(module = %K::MODULE, id = %id, "Entry updated");
        Ok(())
    }

    /// Logs rejected input by field name only.
    fn checked<T>(&self, result: Result<T, RoosterError>) -> Result<T, RoosterError> {
        if let Err(err) = &result {
            match err {
                RoosterError::Validation(e) => {
                    warn!(module = %K::MODULE, field = e.field(), "Rejected input: {}", e)
                }
                other => warn!(module = %K::MODULE, "Rejected input: {}", other),
            }
        }
        result
    }
}

fn parse_id(raw: &serde_json::Value) -> Result<ObjectId, RoosterError> {
    let value = Value::from(raw);
    make(&value, "id").is_defined()?.is_string()?.is_object_id()?;

    ObjectId::parse(value.as_str().unwrap_or_default())
        .map_err(|_| RoosterError::from(ValidationError::wrong_type("id", Expected::ObjectId)))
}

fn parse_page(raw: &serde_json::Value, max_page: u32) -> Result<u32, RoosterError> {
    let value = Value::from(raw);
    make(&value, "page")
        .is_defined()?
        .is_number()?
        .is_between(f64::from(max_page), Some(1.0))?
        .check(whole_number)?;

    // Whole and within 1..=max_page, so the cast is exact
    Ok(value.as_f64().unwrap_or(1.0) as u32)
}
