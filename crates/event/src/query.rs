use ccswing_db::table::Event as EventTable;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Event, EventRow};

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

fn columns() -> [EventTable; 8] {
    [
        EventTable::Id,
        EventTable::Title,
        EventTable::Date,
        EventTable::Time,
        EventTable::Location,
        EventTable::Description,
        EventTable::Cost,
        EventTable::Category,
    ]
}

impl Query {
    /// All events, ascending by date.
    pub async fn list_events(&self) -> ccswing_shared::Result<Vec<Event>> {
        let statement = sea_query::Query::select()
            .columns(columns())
            .from(EventTable::Table)
            .order_by_expr(Expr::col(EventTable::Date), Order::Asc)
            .order_by_expr(Expr::col(EventTable::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.into_iter().map(Event::try_from).collect()
    }

    pub async fn find(&self, id: i64) -> ccswing_shared::Result<Option<Event>> {
        let statement = sea_query::Query::select()
            .columns(columns())
            .from(EventTable::Table)
            .and_where(Expr::col(EventTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        row.map(Event::try_from).transpose()
    }

    pub async fn insert(&self, event: &Event) -> ccswing_shared::Result<()> {
        let statement = sea_query::Query::insert()
            .into_table(EventTable::Table)
            .columns(columns())
            .values_panic([
                event.id.into(),
                event.title.to_owned().into(),
                event.date.to_string().into(),
                event.time.to_owned().into(),
                event.location.to_owned().into(),
                event.description.to_owned().into(),
                event.cost.into(),
                event.category.map(|c| c.to_string()).into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
