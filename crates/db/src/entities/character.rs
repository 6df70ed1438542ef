//! Character entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// Centimetres
    #[sea_orm(nullable)]
    pub height: Option<i32>,

    /// Kilograms
    #[sea_orm(nullable)]
    pub mass: Option<i32>,

    #[sea_orm(nullable)]
    pub hair_color: Option<String>,

    #[sea_orm(nullable)]
    pub skin_color: Option<String>,

    #[sea_orm(nullable)]
    pub eye_color: Option<String>,

    /// Galactic calendar notation, e.g. "19BBY"
    #[sea_orm(nullable)]
    pub birth_year: Option<String>,

    #[sea_orm(nullable)]
    pub gender: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
