// tests/common/mod.rs
//
// In-memory rooster used by the integration tests. Identifiers are a
// zero-padded hex counter so they match the store's identifier shape.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rooster::module::{Actions, Fights, Logs, ModuleKind, Skills, States, Stats};
use rooster::{Page, Rooster, RoosterConfig, RoosterError, Roosters, Stores};
use shared::models as entity;
use shared::ObjectId;
use tokio::sync::RwLock;

/// How a test store builds and patches entities of one kind
pub trait Entry: ModuleKind {
    fn build(id: ObjectId, data: Self::AddData) -> Self::Entity;
    fn apply(entity: &mut Self::Entity, data: Self::UpdateData);
    fn id(entity: &Self::Entity) -> &ObjectId;
}

pub struct MemoryRooster<K: Entry> {
    entries: RwLock<Vec<K::Entity>>,
    next_id: AtomicU64,
    calls: AtomicU64,
}

impl<K: Entry> MemoryRooster<K> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            calls: AtomicU64::new(0),
        }
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<K: Entry> Rooster<K> for MemoryRooster<K> {
    async fn add(&self, data: K::AddData) -> Result<ObjectId, RoosterError> {
        self.touch();
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = ObjectId::parse(&format!("{:024x}", n))
            .map_err(|e| RoosterError::Storage(e.to_string()))?;
        self.entries.write().await.push(K::build(id.clone(), data));
        Ok(id)
    }

    async fn get(&self, id: &ObjectId) -> Result<Option<K::Entity>, RoosterError> {
        self.touch();
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| K::id(e) == id).cloned())
    }

    async fn get_all(&self, page: Page) -> Result<Vec<K::Entity>, RoosterError> {
        self.touch();
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .skip(page.offset())
            .take(page.size)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &ObjectId, data: K::UpdateData) -> Result<(), RoosterError> {
        self.touch();
        let mut entries = self.entries.write().await;
        let entity = entries
            .iter_mut()
            .find(|e| K::id(e) == id)
            .ok_or_else(|| RoosterError::NotFound {
                module: K::MODULE,
                id: id.clone(),
            })?;
        K::apply(entity, data);
        Ok(())
    }
}

impl Entry for Fights {
    fn build(id: ObjectId, data: Self::AddData) -> Self::Entity {
        entity::Fight {
            id,
            attacker: data.attacker,
            phase: data.phase,
            active: data.active,
            states: data.states,
            start: Utc::now(),
            finish: None,
        }
    }

    fn apply(entity: &mut Self::Entity, data: Self::UpdateData) {
        if let Some(attacker) = data.attacker {
            entity.attacker = attacker;
        }
        if let Some(phase) = data.phase {
            entity.phase = phase;
        }
        if let Some(active) = data.active {
            entity.active = active;
            if !active {
                entity.finish = Some(Utc::now());
            }
        }
        if let Some(states) = data.states {
            entity.states = states;
        }
    }

    fn id(entity: &Self::Entity) -> &ObjectId {
        &entity.id
    }
}

impl Entry for Logs {
    fn build(id: ObjectId, data: Self::AddData) -> Self::Entity {
        entity::Log {
            id,
            message: data.message,
            target: data.target,
        }
    }

    fn apply(entity: &mut Self::Entity, data: Self::UpdateData) {
        if let Some(message) = data.message {
            entity.message = message;
        }
        if let Some(target) = data.target {
            entity.target = target;
        }
    }

    fn id(entity: &Self::Entity) -> &ObjectId {
        &entity.id
    }
}

impl Entry for States {
    fn build(id: ObjectId, data: Self::AddData) -> Self::Entity {
        entity::State {
            id,
            character: data.character,
            hp: data.hp,
            mp: data.mp,
            initiative: data.initiative,
        }
    }

    fn apply(entity: &mut Self::Entity, data: Self::UpdateData) {
        if let Some(character) = data.character {
            entity.character = character;
        }
        if let Some(hp) = data.hp {
            entity.hp = hp;
        }
        if let Some(mp) = data.mp {
            entity.mp = mp;
        }
        if let Some(initiative) = data.initiative {
            entity.initiative = initiative;
        }
    }

    fn id(entity: &Self::Entity) -> &ObjectId {
        &entity.id
    }
}

impl Entry for Actions {
    fn build(id: ObjectId, data: Self::AddData) -> Self::Entity {
        entity::Action {
            id,
            name: data.name,
            description: data.description,
            target: data.target,
            effect: data.effect,
            power: data.power,
            mana_cost: data.mana_cost,
        }
    }

    fn apply(entity: &mut Self::Entity, data: Self::UpdateData) {
        if let Some(name) = data.name {
            entity.name = name;
        }
        if let Some(description) = data.description {
            entity.description = description;
        }
        if let Some(target) = data.target {
            entity.target = target;
        }
        if let Some(effect) = data.effect {
            entity.effect = effect;
        }
        if let Some(power) = data.power {
            entity.power = power;
        }
        if let Some(mana_cost) = data.mana_cost {
            entity.mana_cost = mana_cost;
        }
    }

    fn id(entity: &Self::Entity) -> &ObjectId {
        &entity.id
    }
}

impl Entry for Stats {
    fn build(id: ObjectId, data: Self::AddData) -> Self::Entity {
        entity::Stats {
            id,
            owner: data.owner,
            strength: data.strength,
            intelligence: data.intelligence,
            initiative: data.initiative,
            hp: data.hp,
            mp: data.mp,
        }
    }

    fn apply(entity: &mut Self::Entity, data: Self::UpdateData) {
        if let Some(owner) = data.owner {
            entity.owner = owner;
        }
        if let Some(strength) = data.strength {
            entity.strength = strength;
        }
        if let Some(intelligence) = data.intelligence {
            entity.intelligence = intelligence;
        }
        if let Some(initiative) = data.initiative {
            entity.initiative = initiative;
        }
        if let Some(hp) = data.hp {
            entity.hp = hp;
        }
        if let Some(mp) = data.mp {
            entity.mp = mp;
        }
    }

    fn id(entity: &Self::Entity) -> &ObjectId {
        &entity.id
    }
}

impl Entry for Skills {
    fn build(id: ObjectId, data: Self::AddData) -> Self::Entity {
        entity::Skills {
            id,
            name: data.name,
            actions: data.actions,
        }
    }

    fn apply(entity: &mut Self::Entity, data: Self::UpdateData) {
        if let Some(name) = data.name {
            entity.name = name;
        }
        if let Some(actions) = data.actions {
            entity.actions = actions;
        }
    }

    fn id(entity: &Self::Entity) -> &ObjectId {
        &entity.id
    }
}

/// Backing stores kept alongside the registry so tests can inspect them
pub struct TestStores {
    pub fights: Arc<MemoryRooster<Fights>>,
    pub logs: Arc<MemoryRooster<Logs>>,
    pub states: Arc<MemoryRooster<States>>,
    pub actions: Arc<MemoryRooster<Actions>>,
    pub stats: Arc<MemoryRooster<Stats>>,
    pub skills: Arc<MemoryRooster<Skills>>,
}

pub fn registry(config: RoosterConfig) -> (Roosters, TestStores) {
    let stores = TestStores {
        fights: Arc::new(MemoryRooster::new()),
        logs: Arc::new(MemoryRooster::new()),
        states: Arc::new(MemoryRooster::new()),
        actions: Arc::new(MemoryRooster::new()),
        stats: Arc::new(MemoryRooster::new()),
        skills: Arc::new(MemoryRooster::new()),
    };

    let roosters = Roosters::new(
        Stores {
            fights: stores.fights.clone(),
            logs: stores.logs.clone(),
            states: stores.states.clone(),
            actions: stores.actions.clone(),
            stats: stores.stats.clone(),
            skills: stores.skills.clone(),
        },
        config,
    );

    (roosters, stores)
}
