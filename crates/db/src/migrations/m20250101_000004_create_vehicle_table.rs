//! Create vehicle table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicle::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicle::Name).string_len(120).not_null())
                    .col(ColumnDef::new(Vehicle::Model).string_len(120))
                    .col(ColumnDef::new(Vehicle::Manufacturer).string_len(120))
                    .col(ColumnDef::new(Vehicle::CostInCredits).big_integer())
                    .col(ColumnDef::new(Vehicle::Length).string_len(120))
                    .col(ColumnDef::new(Vehicle::MaxAtmospheringSpeed).integer())
                    .col(ColumnDef::new(Vehicle::Crew).integer())
                    .col(ColumnDef::new(Vehicle::Passengers).integer())
                    .col(ColumnDef::new(Vehicle::CargoCapacity).big_integer())
                    .col(ColumnDef::new(Vehicle::Consumables).string_len(120))
                    .col(ColumnDef::new(Vehicle::VehicleClass).string_len(120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    VehicleClass,
}
