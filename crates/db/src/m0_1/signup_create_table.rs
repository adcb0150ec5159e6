use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Signup;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Signup::Table)
        .col(
            ColumnDef::new(Signup::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Signup::EventId).big_integer().not_null())
        .col(
            ColumnDef::new(Signup::EventTitle)
                .string()
                .not_null()
                .string_len(120),
        )
        .col(
            ColumnDef::new(Signup::EventDate)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Signup::EventLocation)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(ColumnDef::new(Signup::EventCost).double())
        .col(
            ColumnDef::new(Signup::FirstName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Signup::LastName)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Signup::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(
            ColumnDef::new(Signup::BeenBefore)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(ColumnDef::new(Signup::HeardAboutUs).string().string_len(25))
        .col(
            ColumnDef::new(Signup::PaymentMethod)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(ColumnDef::new(Signup::AcceptLiability).boolean().not_null())
        .col(ColumnDef::new(Signup::AcceptPayment).boolean().not_null())
        .col(ColumnDef::new(Signup::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Signup::Table).to_owned()
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
