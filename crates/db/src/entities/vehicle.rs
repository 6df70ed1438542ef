//! Vehicle entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(nullable)]
    pub model: Option<String>,

    #[sea_orm(nullable)]
    pub manufacturer: Option<String>,

    #[sea_orm(nullable)]
    pub cost_in_credits: Option<i64>,

    /// Metres, kept as text to preserve the catalog's decimal notation
    #[sea_orm(nullable)]
    pub length: Option<String>,

    #[sea_orm(nullable)]
    pub max_atmosphering_speed: Option<i32>,

    #[sea_orm(nullable)]
    pub crew: Option<i32>,

    #[sea_orm(nullable)]
    pub passengers: Option<i32>,

    /// Kilograms
    #[sea_orm(nullable)]
    pub cargo_capacity: Option<i64>,

    #[sea_orm(nullable)]
    pub consumables: Option<String>,

    #[sea_orm(nullable)]
    pub vehicle_class: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
