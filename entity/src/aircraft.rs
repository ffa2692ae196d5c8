use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub aircraft_id: i32,
    #[sea_orm(unique)]
    pub mode_s: String,
    pub registered_owner: String,
    pub registered_owner_operator_flag_code: String,
    pub country_id: i32,
    pub manufacturer: String,
    #[sea_orm(column_name = "type")]
    pub aircraft_type: String,
    pub icao_type: String,
    pub aircraft_photo_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::CountryId"
    )]
    Country,
    #[sea_orm(
        belongs_to = "super::aircraft_photo::Entity",
        from = "Column::AircraftPhotoId",
        to = "super::aircraft_photo::Column::AircraftPhotoId"
    )]
    AircraftPhoto,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::aircraft_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftPhoto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
