use sqlx_migrator::{Info, Migrator};

mod m0_1;
pub mod table;

pub use sqlx_migrator::{Migrate, Plan};

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::M0_1)])?;

    Ok(migrator)
}
