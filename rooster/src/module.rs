//! Entity kinds and the types bound to each of them

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};
use shared::models as entity;

use crate::dto::{self, Validate};

/// Closed set of entity kinds served by roosters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Fights,
    Logs,
    States,
    Actions,
    Stats,
    Skills,
}

impl Module {
    pub const ALL: [Module; 6] = [
        Module::Fights,
        Module::Logs,
        Module::States,
        Module::Actions,
        Module::Stats,
        Module::Skills,
    ];
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Module::Fights => write!(f, "fights"),
            Module::Logs => write!(f, "logs"),
            Module::States => write!(f, "states"),
            Module::Actions => write!(f, "actions"),
            Module::Stats => write!(f, "stats"),
            Module::Skills => write!(f, "skills"),
        }
    }
}

/// Binds one [`Module`] to its stored entity and its input payloads.
pub trait ModuleKind: Send + Sync + 'static {
    const MODULE: Module;

    type Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync;
    type AddData: Validate + DeserializeOwned + Debug + Send;
    type UpdateData: Validate + DeserializeOwned + Debug + Send;
}

macro_rules! module_kind {
    ($marker:ident, $module:ident, $entity:ty, $add:ty, $update:ty) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl ModuleKind for $marker {
            const MODULE: Module = Module::$module;

            type Entity = $entity;
            type AddData = $add;
            type UpdateData = $update;
        }
    };
}

module_kind!(Fights, Fights, entity::Fight, dto::CreateFightDto, dto::UpdateFightDto);
module_kind!(Logs, Logs, entity::Log, dto::CreateLogDto, dto::UpdateLogDto);
module_kind!(States, States, entity::State, dto::CreateStateDto, dto::UpdateStateDto);
module_kind!(Actions, Actions, entity::Action, dto::CreateActionDto, dto::UpdateActionDto);
module_kind!(Stats, Stats, entity::Stats, dto::CreateStatsDto, dto::UpdateStatsDto);
module_kind!(Skills, Skills, entity::Skills, dto::CreateSkillsDto, dto::UpdateSkillsDto);
