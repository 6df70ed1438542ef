//! Planet entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// Hours per local day
    #[sea_orm(nullable)]
    pub rotation_period: Option<i32>,

    /// Local days per year
    #[sea_orm(nullable)]
    pub orbital_period: Option<i32>,

    /// Kilometres
    #[sea_orm(nullable)]
    pub diameter: Option<i32>,

    #[sea_orm(nullable)]
    pub climate: Option<String>,

    #[sea_orm(nullable)]
    pub gravity: Option<String>,

    #[sea_orm(nullable)]
    pub terrain: Option<String>,

    /// Percentage of the surface covered by water
    #[sea_orm(nullable)]
    pub surface_water: Option<i32>,

    #[sea_orm(nullable)]
    pub population: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
