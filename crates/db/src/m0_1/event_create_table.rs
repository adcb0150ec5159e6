use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Event;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Event::Table)
        .col(
            ColumnDef::new(Event::Id)
                .big_integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Event::Title).string().not_null().string_len(120))
        .col(ColumnDef::new(Event::Date).string().not_null().string_len(10))
        .col(ColumnDef::new(Event::Time).string().string_len(50))
        .col(ColumnDef::new(Event::Location).string().not_null().string_len(200))
        .col(
            ColumnDef::new(Event::Description)
                .string()
                .not_null()
                .string_len(2000)
                .default(""),
        )
        .col(ColumnDef::new(Event::Cost).double())
        .col(ColumnDef::new(Event::Category).string().string_len(25))
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Event::Table).to_owned()
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
