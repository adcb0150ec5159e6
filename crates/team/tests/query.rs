mod helpers;

use ccswing_team::{ProfileUpdate, Query};
use temp_dir::TempDir;

#[tokio::test]
async fn test_list_team_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let query = Query(helpers::setup_test_pool(dir.child("db.sqlite3")).await?);

    query.insert(&helpers::profile("p1", "Zoe", "Adams")).await?;
    query.insert(&helpers::profile("p2", "Amy", "Carter")).await?;
    query.insert(&helpers::profile("p3", "Bob", "Baker")).await?;

    let ids = query
        .list_team()
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, ["p2", "p3", "p1"]);

    Ok(())
}

#[tokio::test]
async fn test_find_profile() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let query = Query(helpers::setup_test_pool(dir.child("db.sqlite3")).await?);

    query.insert(&helpers::profile("p1", "Zoe", "Adams")).await?;

    let profile = query.find("p1").await?.expect("profile exists");
    assert_eq!(profile.full_name(), "Zoe Adams");
    assert_eq!(profile.bio.as_deref(), Some("Zoe has been dancing for years."));
    assert_eq!(profile.specialty.as_deref(), Some("West coast swing"));
    assert_eq!(profile.instagram_url, None);

    assert!(query.find("missing").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_update_profile() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let query = Query(helpers::setup_test_pool(dir.child("db.sqlite3")).await?);

    query.insert(&helpers::profile("p1", "Zoe", "Adams")).await?;

    let profile = query
        .update_profile(
            "p1",
            ProfileUpdate {
                first_name: "Zoey".to_owned(),
                last_name: "Adams".to_owned(),
                bio_long: Some("Started dancing at the Palace.".to_owned()),
                teaching_since: Some("2015-08-01".to_owned()),
                favorite_song: Some("Chattahoochee".to_owned()),
                private_lessons: Some("Weeknights".to_owned()),
                instagram_url: Some("https://instagram.com/zoey".to_owned()),
                phone_number: Some("615-555-0100".to_owned()),
                specialty: Some(" ".to_owned()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(profile.first_name, "Zoey");
    assert_eq!(profile.teaching_since_year(), Some(2015));
    assert_eq!(profile.instagram_url.as_deref(), Some("https://instagram.com/zoey"));
    assert_eq!(profile.specialty, None);
    // Studio-managed fields are untouched.
    assert_eq!(profile.role.as_deref(), Some("Instructor"));
    assert_eq!(profile.bio.as_deref(), Some("Zoe has been dancing for years."));

    Ok(())
}

#[tokio::test]
async fn test_update_profile_rejections() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let query = Query(helpers::setup_test_pool(dir.child("db.sqlite3")).await?);

    query.insert(&helpers::profile("p1", "Zoe", "Adams")).await?;

    let update = ProfileUpdate {
        first_name: "Zoe".to_owned(),
        last_name: "Adams".to_owned(),
        ..Default::default()
    };

    let missing = query.update_profile("missing", update.clone()).await;
    assert!(matches!(missing, Err(ccswing_shared::Error::NotFound)));

    let invalid = query
        .update_profile(
            "p1",
            ProfileUpdate {
                instagram_url: Some("instagram".to_owned()),
                ..update
            },
        )
        .await;
    assert!(matches!(invalid, Err(ccswing_shared::Error::Validate(_))));

    let profile = query.find("p1").await?.expect("profile exists");
    assert_eq!(profile.instagram_url, None);

    Ok(())
}
