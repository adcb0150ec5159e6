mod event_create_date_idx;
mod event_create_table;
mod profile_create_table;
mod signup_create_event_idx;
mod signup_create_table;

use sqlx_migrator::vec_box;

pub struct M0_1;

sqlx_migrator::sqlite_migration!(
    M0_1,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        event_create_table::Operation,
        event_create_date_idx::Operation,
        signup_create_table::Operation,
        signup_create_event_idx::Operation,
        profile_create_table::Operation
    ]
);
