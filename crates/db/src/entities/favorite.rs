//! Favorite entity: a user's bookmark of a planet, character or vehicle.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of catalog entry a favorite points at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
}

impl FavoriteKind {
    /// Stored and routed name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Character => "character",
            Self::Vehicle => "vehicle",
        }
    }

    /// Capitalized name used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::Character => "Character",
            Self::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known favorite kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFavoriteKind(pub String);

impl fmt::Display for UnknownFavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown favorite kind '{}', expected planet, character or vehicle",
            self.0
        )
    }
}

impl std::error::Error for UnknownFavoriteKind {}

impl FromStr for FavoriteKind {
    type Err = UnknownFavoriteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "planet" => Ok(Self::Planet),
            "character" => Ok(Self::Character),
            "vehicle" => Ok(Self::Vehicle),
            _ => Err(UnknownFavoriteKind(s.to_string())),
        }
    }
}

/// Favorite entity.
///
/// The target is a tagged pair (`target_kind`, `target_id`) so every row
/// references exactly one catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning user.
    #[sea_orm(indexed)]
    pub user_id: i32,

    pub target_kind: FavoriteKind,

    pub target_id: i32,

    /// When the favorite was created.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
