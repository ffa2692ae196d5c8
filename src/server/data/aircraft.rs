use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    model::aircraft::{AircraftPhoto, AircraftRecord},
    server::{model::identifier::ModeS, util::timed},
};

/// An aircraft as read from the database, keeping the row id for later updates
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAircraft {
    pub aircraft_id: i32,
    pub record: AircraftRecord,
}

pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    /// Creates a new instance of [`AircraftRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an aircraft along with its registered country and photo
    ///
    /// # Returns
    /// - `Some(`[`StoredAircraft`]`)` with `url_photo` set to `None` when no photo has been
    ///   linked to the aircraft yet
    /// - `None` if no aircraft is known for the Mode-S code
    pub async fn get_by_mode_s(&self, mode_s: &ModeS) -> Result<Option<StoredAircraft>, DbErr> {
        timed("db::get_aircraft_by_mode_s", async {
            let row = entity::prelude::Aircraft::find()
                .filter(entity::aircraft::Column::ModeS.eq(mode_s.as_str()))
                .find_also_related(entity::prelude::Country)
                .one(self.db)
                .await?;

            let Some((aircraft, country)) = row else {
                return Ok(None);
            };

            let country = country.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "country {} of aircraft {}",
                    aircraft.country_id, aircraft.aircraft_id
                ))
            })?;

            let photo = match aircraft.aircraft_photo_id {
                Some(photo_id) => {
                    entity::prelude::AircraftPhoto::find_by_id(photo_id)
                        .one(self.db)
                        .await?
                }
                None => None,
            };

            let record = AircraftRecord {
                aircraft_type: aircraft.aircraft_type,
                icao_type: aircraft.icao_type,
                manufacturer: aircraft.manufacturer,
                mode_s: mode_s.to_string(),
                registered_owner_country_iso_name: country.country_iso_name,
                registered_owner_country_name: country.country_name,
                registered_owner_operator_flag_code: aircraft.registered_owner_operator_flag_code,
                registered_owner: aircraft.registered_owner,
                url_photo: photo.as_ref().map(|p| p.url_photo.clone()),
                url_photo_thumbnail: photo.map(|p| p.url_photo_thumbnail),
            };

            Ok(Some(StoredAircraft {
                aircraft_id: aircraft.aircraft_id,
                record,
            }))
        })
        .await
    }

    /// Insert a scraped photo, returning the new photo id
    pub async fn insert_photo(&self, photo: &AircraftPhoto) -> Result<i32, DbErr> {
        timed("db::insert_aircraft_photo", async {
            let photo = entity::aircraft_photo::ActiveModel {
                url_photo: ActiveValue::Set(photo.url_photo.clone()),
                url_photo_thumbnail: ActiveValue::Set(photo.url_photo_thumbnail.clone()),
                photographer: ActiveValue::Set(photo.photographer.clone()),
                ..Default::default()
            };

            let photo = photo.insert(self.db).await?;
            Ok(photo.aircraft_photo_id)
        })
        .await
    }

    /// Point an aircraft at a photo
    ///
    /// Returns [`DbErr::RecordNotFound`] if the aircraft does not exist.
    pub async fn link_photo(&self, photo_id: i32, aircraft_id: i32) -> Result<(), DbErr> {
        timed("db::link_aircraft_photo", async {
            let result = entity::prelude::Aircraft::update_many()
                .col_expr(
                    entity::aircraft::Column::AircraftPhotoId,
                    sea_orm::sea_query::Expr::value(photo_id),
                )
                .filter(entity::aircraft::Column::AircraftId.eq(aircraft_id))
                .exec(self.db)
                .await?;

            if result.rows_affected == 0 {
                return Err(DbErr::RecordNotFound(format!("aircraft {}", aircraft_id)));
            }

            Ok(())
        })
        .await
    }
}
