use ccswing_db::table::Signup;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{SignupRecord, SignupRow};

/// Durable storage for accepted signups.
#[async_trait::async_trait]
pub trait SignupStore: Send + Sync {
    async fn insert_signup(&self, record: &SignupRecord) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

fn columns() -> [Signup; 15] {
    [
        Signup::Id,
        Signup::EventId,
        Signup::EventTitle,
        Signup::EventDate,
        Signup::EventLocation,
        Signup::EventCost,
        Signup::FirstName,
        Signup::LastName,
        Signup::Email,
        Signup::BeenBefore,
        Signup::HeardAboutUs,
        Signup::PaymentMethod,
        Signup::AcceptLiability,
        Signup::AcceptPayment,
        Signup::CreatedAt,
    ]
}

impl Query {
    pub async fn insert(&self, record: &SignupRecord) -> ccswing_shared::Result<()> {
        let statement = sea_query::Query::insert()
            .into_table(Signup::Table)
            .columns(columns())
            .values_panic([
                record.id.to_owned().into(),
                record.event_id.into(),
                record.event_title.to_owned().into(),
                record.event_date.to_string().into(),
                record.event_location.to_owned().into(),
                record.event_cost.into(),
                record.first_name.to_owned().into(),
                record.last_name.to_owned().into(),
                record.email.to_owned().into(),
                record.prior_attendance.to_string().into(),
                record.referral_source.map(|r| r.to_string()).into(),
                record.payment_method.to_string().into(),
                record.accept_liability.into(),
                record.accept_payment.into(),
                record.created_at.unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    /// Signups for one event, oldest first.
    pub async fn list_for_event(&self, event_id: i64) -> ccswing_shared::Result<Vec<SignupRecord>> {
        let statement = sea_query::Query::select()
            .columns(columns())
            .from(Signup::Table)
            .and_where(Expr::col(Signup::EventId).eq(event_id))
            .order_by_expr(Expr::col(Signup::CreatedAt), Order::Asc)
            .order_by_expr(Expr::col(Signup::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, SignupRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.into_iter().map(SignupRecord::try_from).collect()
    }
}

#[async_trait::async_trait]
impl SignupStore for Query {
    async fn insert_signup(&self, record: &SignupRecord) -> anyhow::Result<()> {
        self.insert(record).await.map_err(anyhow::Error::from)
    }
}
