//! Database migrations for villa service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250131_000001_create_villas::Migration),
            Box::new(m20250131_000002_create_villa_numbers::Migration),
        ]
    }
}

mod m20250131_000001_create_villas {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250131_000001_create_villas"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Villas::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Villas::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Villas::Name).string().not_null())
                        .col(ColumnDef::new(Villas::NameKey).string().not_null())
                        .col(ColumnDef::new(Villas::Detail).text().not_null().default(""))
                        .col(ColumnDef::new(Villas::Occupancy).integer().not_null())
                        .col(ColumnDef::new(Villas::SquareMeters).integer().not_null())
                        .col(ColumnDef::new(Villas::Rate).double().not_null())
                        .col(ColumnDef::new(Villas::ImageUrl).text().not_null().default(""))
                        .col(ColumnDef::new(Villas::Amenity).text().not_null().default(""))
                        .col(
                            ColumnDef::new(Villas::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Villas::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // Case-folded name; backs the duplicate check against concurrent inserts
            manager
                .create_index(
                    Index::create()
                        .name("idx_villas_name_key")
                        .table(Villas::Table)
                        .col(Villas::NameKey)
                        .unique()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Villas::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Villas {
        Table,
        Id,
        Name,
        NameKey,
        Detail,
        Occupancy,
        SquareMeters,
        Rate,
        ImageUrl,
        Amenity,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250131_000002_create_villa_numbers {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250131_000002_create_villa_numbers"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(VillaNumbers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(VillaNumbers::VillaNo)
                                .integer()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(VillaNumbers::VillaId).integer().not_null())
                        .col(
                            ColumnDef::new(VillaNumbers::SpecialDetail)
                                .text()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(VillaNumbers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(VillaNumbers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_villa_numbers_villa")
                                .from(VillaNumbers::Table, VillaNumbers::VillaId)
                                .to(Villas::Table, Villas::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_villa_numbers_villa_id")
                        .table(VillaNumbers::Table)
                        .col(VillaNumbers::VillaId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(VillaNumbers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum VillaNumbers {
        Table,
        VillaNo,
        VillaId,
        SpecialDetail,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Villas {
        Table,
        Id,
    }
}
