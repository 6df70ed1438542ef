//! Create planet table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planet::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Planet::RotationPeriod).integer())
                    .col(ColumnDef::new(Planet::OrbitalPeriod).integer())
                    .col(ColumnDef::new(Planet::Diameter).integer())
                    .col(ColumnDef::new(Planet::Climate).string_len(120))
                    .col(ColumnDef::new(Planet::Gravity).string_len(120))
                    .col(ColumnDef::new(Planet::Terrain).string_len(120))
                    .col(ColumnDef::new(Planet::SurfaceWater).integer())
                    .col(ColumnDef::new(Planet::Population).big_integer())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Planet {
    Table,
    Id,
    Name,
    RotationPeriod,
    OrbitalPeriod,
    Diameter,
    Climate,
    Gravity,
    Terrain,
    SurfaceWater,
    Population,
}
