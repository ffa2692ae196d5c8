use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flightroute_callsign")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub flightroute_callsign_id: i32,
    #[sea_orm(unique)]
    pub callsign: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flightroute::Entity")]
    Flightroute,
}

impl Related<super::flightroute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flightroute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
