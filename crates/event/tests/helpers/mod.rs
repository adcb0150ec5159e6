use std::{path::PathBuf, str::FromStr};

use ccswing_db::{Migrate, Plan};
use ccswing_event::{Category, Event};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use time::Date;

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    ccswing_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub fn event(id: i64, title: &str, date: Date, category: Option<Category>) -> Event {
    Event {
        id,
        title: title.to_owned(),
        date,
        time: Some("7:00 PM".to_owned()),
        location: "Events at 1900".to_owned(),
        description: format!("{title} description"),
        cost: Some(10.0),
        category,
    }
}
