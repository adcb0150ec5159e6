use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Profile;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Profile::Table)
        .col(
            ColumnDef::new(Profile::Id)
                .string()
                .not_null()
                .string_len(36)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Profile::FirstName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Profile::LastName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(Profile::Role).string().string_len(100))
        .col(ColumnDef::new(Profile::PhotoUrl).string().string_len(500))
        .col(ColumnDef::new(Profile::Bio).string().string_len(1000))
        .col(ColumnDef::new(Profile::BioLong).string().string_len(4000))
        .col(ColumnDef::new(Profile::Specialty).string().string_len(200))
        .col(ColumnDef::new(Profile::TeachingStyle).string().string_len(1000))
        .col(ColumnDef::new(Profile::TeachingSince).string().string_len(10))
        .col(ColumnDef::new(Profile::FavoriteSong).string().string_len(200))
        .col(ColumnDef::new(Profile::PrivateLessons).string().string_len(1000))
        .col(ColumnDef::new(Profile::InstagramUrl).string().string_len(500))
        .col(ColumnDef::new(Profile::PhoneNumber).string().string_len(30))
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Profile::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
