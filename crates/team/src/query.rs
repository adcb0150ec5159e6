use ccswing_db::table::Profile;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::{ProfileUpdate, TeamMember, TeamProfile};

const PROFILE_COLUMNS: [Profile; 14] = [
    Profile::Id,
    Profile::FirstName,
    Profile::LastName,
    Profile::Role,
    Profile::PhotoUrl,
    Profile::Bio,
    Profile::BioLong,
    Profile::Specialty,
    Profile::TeachingStyle,
    Profile::TeachingSince,
    Profile::FavoriteSong,
    Profile::PrivateLessons,
    Profile::InstagramUrl,
    Profile::PhoneNumber,
];

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Team cards by first name, the way the team page lists them.
    pub async fn list_team(&self) -> ccswing_shared::Result<Vec<TeamMember>> {
        let statement = sea_query::Query::select()
            .columns([
                Profile::Id,
                Profile::FirstName,
                Profile::LastName,
                Profile::Role,
                Profile::PhotoUrl,
            ])
            .from(Profile::Table)
            .order_by_expr(Expr::col(Profile::FirstName), Order::Asc)
            .order_by_expr(Expr::col(Profile::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, TeamMember, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: &str) -> ccswing_shared::Result<Option<TeamProfile>> {
        let statement = sea_query::Query::select()
            .columns(PROFILE_COLUMNS)
            .from(Profile::Table)
            .and_where(Expr::col(Profile::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, TeamProfile, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn insert(&self, profile: &TeamProfile) -> ccswing_shared::Result<()> {
        let statement = sea_query::Query::insert()
            .into_table(Profile::Table)
            .columns(PROFILE_COLUMNS)
            .values_panic([
                profile.id.to_owned().into(),
                profile.first_name.to_owned().into(),
                profile.last_name.to_owned().into(),
                profile.role.to_owned().into(),
                profile.photo_url.to_owned().into(),
                profile.bio.to_owned().into(),
                profile.bio_long.to_owned().into(),
                profile.specialty.to_owned().into(),
                profile.teaching_style.to_owned().into(),
                profile.teaching_since.to_owned().into(),
                profile.favorite_song.to_owned().into(),
                profile.private_lessons.to_owned().into(),
                profile.instagram_url.to_owned().into(),
                profile.phone_number.to_owned().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    /// Overwrites the instructor-editable fields of one profile.
    pub async fn update_profile(
        &self,
        id: &str,
        update: ProfileUpdate,
    ) -> ccswing_shared::Result<TeamProfile> {
        let update = update.normalized();
        update.validate()?;

        let statement = sea_query::Query::update()
            .table(Profile::Table)
            .values([
                (Profile::FirstName, update.first_name.into()),
                (Profile::LastName, update.last_name.into()),
                (Profile::PhotoUrl, update.photo_url.into()),
                (Profile::BioLong, update.bio_long.into()),
                (Profile::Specialty, update.specialty.into()),
                (Profile::TeachingStyle, update.teaching_style.into()),
                (Profile::TeachingSince, update.teaching_since.into()),
                (Profile::FavoriteSong, update.favorite_song.into()),
                (Profile::PrivateLessons, update.private_lessons.into()),
                (Profile::InstagramUrl, update.instagram_url.into()),
                (Profile::PhoneNumber, update.phone_number.into()),
            ])
            .and_where(Expr::col(Profile::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(ccswing_shared::Error::NotFound);
        }

        tracing::info!(profile_id = id, "Profile updated");

        self.find(id).await?.ok_or(ccswing_shared::Error::NotFound)
    }
}
