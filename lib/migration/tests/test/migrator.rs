use calendar_migration::runner::{
    applied_migrations, pending_migrations, revert_migrations, run_migrations,
};
use sea_orm::DbErr;
use similar_asserts::assert_eq;

use crate::fixtures::{
    CANONICAL, LEGACY, StartingSchema, TABLE, colors, get_table, insert_day, setup_db,
};

const MIGRATION_NAME: &str = "m20240612_000001_rename_liturgical_color";

#[tokio::test]
async fn test_run_migrations_applies_rename() {
    let db = setup_db(StartingSchema::Legacy).await;
    insert_day(&db, 1, "Palm Sunday", Some((LEGACY, "red"))).await;

    assert_eq!(
        pending_migrations(&db).await.unwrap(),
        vec![MIGRATION_NAME.to_owned()]
    );

    run_migrations(&db).await.unwrap();

    assert_eq!(
        applied_migrations(&db).await.unwrap(),
        vec![MIGRATION_NAME.to_owned()]
    );
    assert!(pending_migrations(&db).await.unwrap().is_empty());
    get_table(&db, TABLE)
        .await
        .columns(&["id", "name", CANONICAL]);
    assert_eq!(
        colors(&db, CANONICAL).await,
        vec![(1, Some("red".to_owned()))]
    );

    // nothing left to apply
    run_migrations(&db).await.unwrap();
}

#[tokio::test]
async fn test_revert_migrations_restores_legacy_column() {
    let db = setup_db(StartingSchema::Legacy).await;
    insert_day(&db, 1, "Good Friday", Some((LEGACY, "black"))).await;

    run_migrations(&db).await.unwrap();
    revert_migrations(&db, Some(1)).await.unwrap();

    assert!(applied_migrations(&db).await.unwrap().is_empty());
    assert_eq!(
        pending_migrations(&db).await.unwrap(),
        vec![MIGRATION_NAME.to_owned()]
    );
    get_table(&db, TABLE).await.columns(&["id", "name", LEGACY]);
    assert_eq!(
        colors(&db, LEGACY).await,
        vec![(1, Some("black".to_owned()))]
    );
}

#[tokio::test]
async fn test_run_migrations_on_fresh_schema_then_revert() {
    let db = setup_db(StartingSchema::Fresh).await;

    run_migrations(&db).await.unwrap();
    get_table(&db, TABLE)
        .await
        .columns(&["id", "name", CANONICAL]);

    revert_migrations(&db, None).await.unwrap();
    get_table(&db, TABLE).await.columns(&["id", "name", LEGACY]);
}

#[tokio::test]
async fn test_failed_migration_halts_run() {
    let db = setup_db(StartingSchema::Empty).await;

    let err = run_migrations(&db).await.unwrap_err();

    match err {
        DbErr::Migration(message) => assert!(
            message.contains("add column special_days.liturgicalColor"),
            "unexpected message {message}"
        ),
        other => panic!("expected DbErr::Migration, got {other:?}"),
    }
    assert!(applied_migrations(&db).await.unwrap().is_empty());
}
