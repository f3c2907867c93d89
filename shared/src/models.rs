use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::object_id::ObjectId;

// ═══════════════════════════════════════════════════════════════════════════
// ENUMERATIONS
// ═══════════════════════════════════════════════════════════════════════════

/// Who an action can be aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionTarget {
    #[serde(rename = "self")]
    Myself,
    #[serde(rename = "enemy")]
    Enemy,
    #[serde(rename = "friendly")]
    Friendly,
}

impl ActionTarget {
    /// Wire values, in declaration order
    pub const ALL: [&'static str; 3] = ["self", "enemy", "friendly"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionTarget::Myself => "self",
            ActionTarget::Enemy => "enemy",
            ActionTarget::Friendly => "friendly",
        }
    }
}

impl std::fmt::Display for ActionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an action does to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEffect {
    #[serde(rename = "dmg")]
    Damage,
    #[serde(rename = "heal")]
    Heal,
}

impl ActionEffect {
    pub const ALL: [&'static str; 2] = ["dmg", "heal"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionEffect::Damage => "dmg",
            ActionEffect::Heal => "heal",
        }
    }
}

impl std::fmt::Display for ActionEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ENTITIES
// ═══════════════════════════════════════════════════════════════════════════

/// A fight between characters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fight {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub attacker: String,
    pub phase: u32,
    pub active: bool,
    pub states: Vec<ObjectId>,
    pub start: DateTime<Utc>,
    pub finish: Option<DateTime<Utc>>,
}

/// A single fight log line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Log {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub message: String,
    pub target: String,
}

/// Character state during a fight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub character: String,
    pub hp: u32,
    pub mp: u32,
    pub initiative: u32,
}

/// An action a skill can perform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub target: ActionTarget,
    pub effect: ActionEffect,
    pub power: u32,
    pub mana_cost: u32,
}

/// Base statistics of a character
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub owner: String,
    pub strength: u32,
    pub intelligence: u32,
    pub initiative: u32,
    pub hp: u32,
    pub mp: u32,
}

/// A named group of actions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub actions: Vec<ObjectId>,
}
