use crate::database::sqlite::SqliteRepository;
use crate::database::{CatRepository, StoreError};
use crate::domain::CatFields;
use crate::tests::setup_test_pool;

fn create_mock_fields(name: &str) -> CatFields {
    CatFields {
        name: name.to_string(),
        tag: "tabby".to_string(),
        description: "Sleeps on the keyboard".to_string(),
        image: Some("https://example.com/cat.jpg".to_string()),
    }
}

// test the database's ability to save and retrieve cats
#[tokio::test]
async fn test_sqlite_insert_and_retrieve() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    let fields = create_mock_fields("Misty");
    let outcome = repo.insert_cat(&fields).await.expect("Should insert cat");
    assert_eq!(outcome.rows_affected, 1);

    let id = outcome.last_insert_id.expect("Insert should report an id");
    let retrieved = repo
        .get_cat_by_id(&id.to_string())
        .await
        .expect("Should query")
        .expect("Should find cat");

    assert_eq!(retrieved.id, id);
    assert_eq!(retrieved.name, "Misty");
    assert_eq!(retrieved.tag, "tabby");
    assert_eq!(retrieved.description, "Sleeps on the keyboard");
    assert_eq!(retrieved.image.as_deref(), Some("https://example.com/cat.jpg"));
}

// ids are server assigned and never reused for a second insert
#[tokio::test]
async fn test_sqlite_assigns_distinct_ids() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    let first = repo.insert_cat(&create_mock_fields("A")).await.unwrap();
    let second = repo.insert_cat(&create_mock_fields("A")).await.unwrap();

    assert_ne!(first.last_insert_id, second.last_insert_id);
    assert_eq!(repo.get_all_cats().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_sqlite_update_overwrites_every_field() {
    let repo = SqliteRepository::new(setup_test_pool().await);
    let id = repo
        .insert_cat(&create_mock_fields("Misty"))
        .await
        .unwrap()
        .last_insert_id
        .unwrap()
        .to_string();

    let replacement = CatFields {
        name: "Shadow".to_string(),
        tag: "black".to_string(),
        description: "Hides under the bed".to_string(),
        image: None,
    };
    let outcome = repo.update_cat(&id, &replacement).await.unwrap();
    assert_eq!(outcome.rows_affected, 1);

    let retrieved = repo.get_cat_by_id(&id).await.unwrap().unwrap();
    assert_eq!(retrieved.name, "Shadow");
    assert_eq!(retrieved.tag, "black");
    assert_eq!(retrieved.description, "Hides under the bed");
    assert_eq!(retrieved.image, None);
}

#[tokio::test]
async fn test_sqlite_update_missing_cat_touches_nothing() {
    let repo = SqliteRepository::new(setup_test_pool().await);

    let outcome = repo.update_cat("42", &create_mock_fields("Ghost")).await.unwrap();

    assert_eq!(outcome.rows_affected, 0);
    assert!(repo.get_all_cats().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_delete() {
    let repo = SqliteRepository::new(setup_test_pool().await);
    let id = repo
        .insert_cat(&create_mock_fields("Misty"))
        .await
        .unwrap()
        .last_insert_id
        .unwrap()
        .to_string();

    let outcome = repo.delete_cat(&id).await.unwrap();
    assert_eq!(outcome.rows_affected, 1);

    // try to get the deleted cat (hopefully we can't)
    assert!(repo.get_cat_by_id(&id).await.unwrap().is_none());
}

// path ids are bound as text, the column affinity decides what matches
#[tokio::test]
async fn test_sqlite_text_ids_match_by_value() {
    let repo = SqliteRepository::new(setup_test_pool().await);
    let id = repo
        .insert_cat(&create_mock_fields("Misty"))
        .await
        .unwrap()
        .last_insert_id
        .unwrap();

    let found = repo.get_cat_by_id(&id.to_string()).await.unwrap();
    assert_eq!(found.map(|cat| cat.id), Some(id));

    for unknown in ["abc", "99999999999999999999", "", "1 OR 1=1"] {
        assert!(repo.get_cat_by_id(unknown).await.unwrap().is_none());
    }

    let outcome = repo.delete_cat("abc").await.unwrap();
    assert_eq!(outcome.rows_affected, 0);
    assert_eq!(repo.get_all_cats().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_sqlite_list_is_ordered_by_id() {
    let repo = SqliteRepository::new(setup_test_pool().await);
    for name in ["One", "Two", "Three"] {
        repo.insert_cat(&create_mock_fields(name)).await.unwrap();
    }

    let names: Vec<String> = repo
        .get_all_cats()
        .await
        .unwrap()
        .into_iter()
        .map(|cat| cat.name)
        .collect();

    assert_eq!(names, vec!["One", "Two", "Three"]);
}

#[tokio::test]
async fn test_sqlite_closed_pool_is_a_connection_error() {
    let pool = setup_test_pool().await;
    let repo = SqliteRepository::new(pool.clone());
    pool.close().await;

    let result = repo.get_all_cats().await;

    assert!(matches!(result, Err(StoreError::Connection(_))));
}

#[tokio::test]
async fn test_sqlite_missing_table_is_a_query_error() {
    let pool = setup_test_pool().await;
    sqlx::query("DROP TABLE cats").execute(&pool).await.unwrap();
    let repo = SqliteRepository::new(pool);

    let result = repo.insert_cat(&create_mock_fields("Misty")).await;

    assert!(matches!(result, Err(StoreError::Query(_))));
}
