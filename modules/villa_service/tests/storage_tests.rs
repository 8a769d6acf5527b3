//! SeaORM repository tests over an in-memory SQLite database

use chrono::{Duration, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use villa_service::contract::{NewVilla, Villa, VillaError, VillaNumber};
use villa_service::domain::{
    Repository, RepositoryError, Service, Tracking, ValidationRules, VillaFilter,
    VillaNumberFilter, VillaNumberRepository, VillaRepository,
};
use villa_service::infra::storage::{seed, SeaOrmRepository};
use villa_service::VillaModule;

async fn connect() -> Arc<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    VillaModule::migrate(&db).await.unwrap();
    Arc::new(db)
}

fn villa(name: &str) -> Villa {
    let now = Utc::now();
    Villa {
        id: 0,
        name: name.to_string(),
        detail: "Detalle".to_string(),
        occupancy: 5,
        square_meters: 50,
        rate: 200.0,
        image_url: String::new(),
        amenity: String::new(),
        created_at: now,
        updated_at: now,
    }
}

fn number(villa_no: i32, villa_id: i32) -> VillaNumber {
    let now = Utc::now();
    VillaNumber {
        villa_no,
        villa_id,
        special_detail: String::new(),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn create_assigns_generated_id() {
    let db = connect().await;
    let repo = SeaOrmRepository::<Villa>::new(db);

    let mut first = villa("Villa Real");
    let mut second = villa("Villa Vista");
    repo.create(&mut first).await.unwrap();
    repo.create(&mut second).await.unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Villa Real");
}

#[tokio::test]
async fn name_filter_ignores_case() {
    let db = connect().await;
    let repo = SeaOrmRepository::<Villa>::new(db);
    let mut v = villa("Villa Real");
    repo.create(&mut v).await.unwrap();

    let found = repo
        .get(VillaFilter::NameIgnoreCase("villa REAL".into()), Tracking::Untracked)
        .await
        .unwrap();
    assert_eq!(found.map(|f| f.id), Some(v.id));

    let missing = repo
        .get(VillaFilter::Id(v.id + 100), Tracking::Tracked)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn name_filter_folds_non_ascii_letters() {
    let db = connect().await;
    let repo = SeaOrmRepository::<Villa>::new(db);
    let mut v = villa("Villa Ñandú");
    repo.create(&mut v).await.unwrap();

    let found = repo
        .get(VillaFilter::NameIgnoreCase("VILLA ÑANDÚ".into()), Tracking::Untracked)
        .await
        .unwrap();
    assert_eq!(found.map(|f| f.id), Some(v.id));
}

#[tokio::test]
async fn unique_name_key_rejects_case_variant_insert() {
    let db = connect().await;
    let repo = SeaOrmRepository::<Villa>::new(db);
    repo.create(&mut villa("Villa Ñandú")).await.unwrap();

    let err = repo.create(&mut villa("VILLA ÑANDÚ")).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Persistence(_)));
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn service_reports_non_ascii_duplicates() {
    let db = connect().await;
    let service = Service::new(
        VillaRepository::new(Arc::new(SeaOrmRepository::<Villa>::new(db.clone()))),
        VillaNumberRepository::new(Arc::new(SeaOrmRepository::<VillaNumber>::new(db))),
        ValidationRules::default(),
    );
    let new_villa = |name: &str| NewVilla {
        name: name.to_string(),
        detail: String::new(),
        occupancy: 5,
        square_meters: 50,
        rate: 200.0,
        image_url: String::new(),
        amenity: String::new(),
    };

    service.create_villa(new_villa("Villa Ñandú")).await.unwrap();

    for name in ["Villa Ñandú", "VILLA ÑANDÚ"] {
        let err = service.create_villa(new_villa(name)).await.unwrap_err();
        assert!(
            matches!(err, VillaError::Duplicate { ref field, .. } if field == "name"),
            "{}: {:?}",
            name,
            err
        );
    }
    assert_eq!(service.list_villas().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unique_name_index_rejects_second_insert() {
    let db = connect().await;
    let repo = SeaOrmRepository::<Villa>::new(db);
    repo.create(&mut villa("Villa Real")).await.unwrap();

    let err = repo.create(&mut villa("Villa Real")).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Persistence(_)));
}

#[tokio::test]
async fn resource_repository_update_stamps_updated_at() {
    let db = connect().await;
    let villas = VillaRepository::new(Arc::new(SeaOrmRepository::<Villa>::new(db)));

    let mut v = villa("Villa Real");
    v.created_at = Utc::now() - Duration::days(2);
    v.updated_at = v.created_at;
    villas.create(&mut v).await.unwrap();

    v.detail = "Renovated".into();
    villas.update(&mut v).await.unwrap();

    let stored = villas
        .get(VillaFilter::Id(v.id), Tracking::Untracked)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.detail, "Renovated");
    assert!(stored.updated_at > stored.created_at);
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let db = connect().await;
    let repo = SeaOrmRepository::<Villa>::new(db);
    let mut ghost = villa("Ghost");
    ghost.id = 77;

    let err = repo.update(&ghost).await.unwrap_err();
    assert_eq!(
        err,
        RepositoryError::NotFound {
            resource: "villa",
            key: 77
        }
    );
}

#[tokio::test]
async fn villa_number_requires_existing_villa() {
    let db = connect().await;
    let numbers = SeaOrmRepository::<VillaNumber>::new(db);

    let err = numbers.create(&mut number(101, 999)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Persistence(_)));
    assert!(numbers.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn removing_villa_cascades_to_its_numbers() {
    let db = connect().await;
    let villas = VillaRepository::new(Arc::new(SeaOrmRepository::<Villa>::new(db.clone())));
    let numbers = VillaNumberRepository::new(Arc::new(SeaOrmRepository::<VillaNumber>::new(db)));

    let mut v = villa("Villa Real");
    villas.create(&mut v).await.unwrap();
    numbers.create(&mut number(101, v.id)).await.unwrap();
    numbers.create(&mut number(102, v.id)).await.unwrap();

    let found = numbers
        .get(VillaNumberFilter::VillaNo(102), Tracking::Untracked)
        .await
        .unwrap();
    assert_eq!(found.map(|n| n.villa_id), Some(v.id));

    villas.remove(&v).await.unwrap();
    assert!(numbers.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn seeding_only_fills_an_empty_table() {
    let db = connect().await;
    let villas = VillaRepository::new(Arc::new(SeaOrmRepository::<Villa>::new(db)));

    assert_eq!(seed::seed_sample_villas(&villas).await.unwrap(), 2);
    assert_eq!(seed::seed_sample_villas(&villas).await.unwrap(), 0);

    let names: Vec<String> = villas
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["Villa Real", "Premium Vista a la Piscina"]);
}
