//! PgStore against a live database
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p palettes-server -- --ignored
//!
//! The test reseeds the tables, so point it at a scratch database.

use palettes_server::db::{create_pool_with_options, migrate, seed, PaletteStore, PgStore, Table};
use palettes_server::models::{CreatePaletteRequest, Name, ProjectFilter};

async fn store() -> PgStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool_with_options(&url, 2).await.expect("pool creation failed");
    migrate(&pool).await.expect("migrate failed");
    PgStore::new(pool)
}

fn name(s: &str) -> Name {
    Name::new(Some(s.to_owned())).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn store_round_trip() {
    let store = store().await;
    let summary = seed(&store).await.expect("seed failed");
    assert_eq!((summary.projects, summary.palettes), (2, 5));

    let filter = ProjectFilter {
        name: Some("project a".into()),
    };
    let project_a = store.list_projects(&filter).await.unwrap();
    assert_eq!(project_a.len(), 1);
    let project_id = project_a[0].id;

    let palette = CreatePaletteRequest {
        name: Some("palette q".into()),
        color1: Some("#000000".into()),
        color2: Some("#111111".into()),
        color3: Some("#222222".into()),
        color4: Some("#333333".into()),
        color5: Some("#444444".into()),
        project_id: Some(project_id),
    }
    .validate()
    .unwrap();

    let palette_id = store.insert_palette(&palette).await.unwrap();
    let listed = store.list_palettes(project_id).await.unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.contains(&palette.clone().with_id(palette_id)));

    store.rename_palette(palette_id, &name("palette r")).await.unwrap();
    store.rename_project(project_id, &name("project a2")).await.unwrap();
    // Absent ids are a silent no-op
    store.rename_project(0, &name("nobody")).await.unwrap();

    store.delete_project(project_id).await.unwrap();
    assert!(!store.exists(Table::Projects, project_id).await.unwrap());
    assert!(!store.exists(Table::Palettes, palette_id).await.unwrap());
    assert!(store.list_palettes(project_id).await.unwrap().is_empty());

    let remaining = store.list_projects(&ProjectFilter::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "project b");

    store.close().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn palette_for_missing_project_fails() {
    let store = store().await;

    let palette = CreatePaletteRequest {
        name: Some("orphan".into()),
        color1: Some("#000000".into()),
        color2: Some("#000000".into()),
        color3: Some("#000000".into()),
        color4: Some("#000000".into()),
        color5: Some("#000000".into()),
        project_id: Some(i64::MAX),
    }
    .validate()
    .unwrap();

    assert!(store.insert_palette(&palette).await.is_err());
    store.close().await;
}
