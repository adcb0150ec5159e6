use std::{path::PathBuf, str::FromStr};

use ccswing_db::{Migrate, Plan};
use ccswing_team::TeamProfile;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

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

pub fn profile(id: &str, first_name: &str, last_name: &str) -> TeamProfile {
    TeamProfile {
        id: id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        role: Some("Instructor".to_owned()),
        bio: Some(format!("{first_name} has been dancing for years.")),
        specialty: Some("West coast swing".to_owned()),
        ..Default::default()
    }
}
