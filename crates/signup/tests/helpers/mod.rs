#![allow(dead_code)]

use std::{
    path::PathBuf,
    str::FromStr,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use ccswing_db::{Migrate, Plan};
use ccswing_event::{Category, Event};
use ccswing_signup::{Confirmation, SignupForm, SignupNotifier, SignupRecord, SignupStore};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use time::macros::date;

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

pub fn fall_social() -> Event {
    Event {
        id: 1,
        title: "Fall Social".to_owned(),
        date: date!(2026 - 01 - 20),
        time: Some("7:00 PM - 10:00 PM".to_owned()),
        location: "Events at 1900".to_owned(),
        description: "Social dance night".to_owned(),
        cost: Some(10.0),
        category: Some(Category::Social),
    }
}

pub fn jane_doe() -> SignupForm {
    SignupForm {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        prior_attendance: Some("First time EVER!".to_owned()),
        referral_source: Some("Social Media".to_owned()),
        payment_method: Some("Cash".to_owned()),
        accept_liability: Some(true),
        accept_payment: Some(true),
    }
}

#[derive(Default)]
pub enum Behaviour {
    #[default]
    Succeed,
    Fail,
    Hang,
}

impl Behaviour {
    async fn run(&self, what: &str) -> anyhow::Result<()> {
        match self {
            Behaviour::Succeed => Ok(()),
            Behaviour::Fail => anyhow::bail!("{what} is down"),
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub behaviour: Behaviour,
    pub calls: AtomicUsize,
    pub records: Mutex<Vec<SignupRecord>>,
}

impl FakeStore {
    pub fn failing() -> Self {
        Self {
            behaviour: Behaviour::Fail,
            ..Default::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            behaviour: Behaviour::Hang,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<SignupRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SignupStore for FakeStore {
    async fn insert_signup(&self, record: &SignupRecord) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.behaviour.run("store").await?;
        self.records.lock().unwrap().push(record.clone());

        Ok(())
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    pub behaviour: Behaviour,
    pub calls: AtomicUsize,
    pub sent: Mutex<Vec<Confirmation>>,
}

impl FakeNotifier {
    pub fn failing() -> Self {
        Self {
            behaviour: Behaviour::Fail,
            ..Default::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            behaviour: Behaviour::Hang,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Confirmation> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SignupNotifier for FakeNotifier {
    async fn send_confirmation(&self, confirmation: &Confirmation) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.behaviour.run("smtp").await?;
        self.sent.lock().unwrap().push(confirmation.clone());

        Ok(())
    }
}
