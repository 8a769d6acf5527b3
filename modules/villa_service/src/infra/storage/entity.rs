//! SeaORM entities for database tables

/// Villas table entity
pub mod villa {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "villas")]
    pub struct Model {
        /// Store-generated identifier
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        /// Case-folded `name`, unique
        #[sea_orm(unique)]
        pub name_key: String,

        pub detail: String,

        pub occupancy: i32,

        pub square_meters: i32,

        pub rate: f64,

        pub image_url: String,

        pub amenity: String,

        /// Creation timestamp
        pub created_at: DateTimeUtc,

        /// Last update timestamp
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with villa numbers
        #[sea_orm(has_many = "super::villa_number::Entity")]
        VillaNumbers,
    }

    impl Related<super::villa_number::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::VillaNumbers.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Villa numbers table entity
pub mod villa_number {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "villa_numbers")]
    pub struct Model {
        /// Villa number (natural primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub villa_no: i32,

        /// Foreign key to villas
        pub villa_id: i32,

        pub special_detail: String,

        /// Creation timestamp
        pub created_at: DateTimeUtc,

        /// Last update timestamp
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::villa::Entity",
            from = "Column::VillaId",
            to = "super::villa::Column::Id",
            on_delete = "Cascade"
        )]
        Villa,
    }

    impl Related<super::villa::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Villa.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
