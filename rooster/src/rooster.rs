use async_trait::async_trait;
use shared::ObjectId;

use crate::error::RoosterError;
use crate::module::ModuleKind;

/// One page of a `get_all` listing. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: usize,
}

impl Page {
    /// Entries to skip before this page starts
    pub fn offset(&self) -> usize {
        (self.number.saturating_sub(1) as usize).saturating_mul(self.size)
    }
}

/// Storage contract for one entity kind.
///
/// Implementations receive payloads that already passed validation.
#[async_trait]
pub trait Rooster<K: ModuleKind>: Send + Sync {
    /// Store a new entry and return its identifier
    async fn add(&self, data: K::AddData) -> Result<ObjectId, RoosterError>;

    async fn get(&self, id: &ObjectId) -> Result<Option<K::Entity>, RoosterError>;

    async fn get_all(&self, page: Page) -> Result<Vec<K::Entity>, RoosterError>;

    /// Apply a partial update. Fails with `NotFound` when `id` is unknown.
    async fn update(&self, id: &ObjectId, data: K::UpdateData) -> Result<(), RoosterError>;
}
