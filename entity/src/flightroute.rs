use sea_orm::entity::prelude::*;

/// A route between airports, the midpoint airport is only present for multi-leg flights
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flightroute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub flightroute_id: i32,
    #[sea_orm(unique)]
    pub flightroute_callsign_id: i32,
    pub airport_origin_id: i32,
    pub airport_midpoint_id: Option<i32>,
    pub airport_destination_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flightroute_callsign::Entity",
        from = "Column::FlightrouteCallsignId",
        to = "super::flightroute_callsign::Column::FlightrouteCallsignId"
    )]
    FlightrouteCallsign,
}

impl Related<super::flightroute_callsign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightrouteCallsign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
