//! Integration tests for campaign theme CRUD operations.

use assert_matches::assert_matches;
use campaign_core::error::CoreError;
use campaign_db::error::DbError;
use campaign_db::models::theme::Theme;
use campaign_db::repositories::ThemeRepo;
use sqlx::SqlitePool;

async fn insert_theme(pool: &SqlitePool, campaign_id: i64, title: &str, active: bool) -> Theme {
    let mut theme = Theme::new(campaign_id, title, format!("{title} projects"));
    theme.active = active;
    theme.front_rgb = "#336699".to_string();
    theme.image_file = 12;
    ThemeRepo::insert(pool, &mut theme).await.unwrap();
    theme
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_theme_lifecycle(pool: SqlitePool) {
    let mut theme = insert_theme(&pool, 1, "Environnement", false).await;
    assert_ne!(theme.id, 0);

    let loaded = ThemeRepo::load(&pool, theme.id).await.unwrap().unwrap();
    assert_eq!(loaded, theme);

    theme.active = true;
    theme.front_rgb = "#4caf50".to_string();
    theme.image_file = 40;
    theme.campaign_id = 2;
    ThemeRepo::store(&pool, &theme).await.unwrap();

    let loaded = ThemeRepo::load(&pool, theme.id).await.unwrap().unwrap();
    assert_eq!(loaded, theme);

    assert!(ThemeRepo::delete(&pool, theme.id).await.unwrap());
    assert!(ThemeRepo::load(&pool, theme.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_is_not_an_error(pool: SqlitePool) {
    assert!(!ThemeRepo::delete(&pool, 31).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_missing_returns_not_found(pool: SqlitePool) {
    let mut theme = Theme::new(1, "Ghost", "desc");
    theme.id = 5;
    let err = ThemeRepo::store(&pool, &theme).await.unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::NotFound {
            entity: "theme",
            id: 5
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_rejects_empty_title(pool: SqlitePool) {
    let mut theme = Theme::new(1, "", "desc");
    let err = ThemeRepo::insert(&pool, &mut theme).await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(msg)) if msg.contains("title"));
    assert!(ThemeRepo::list_ids(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reference_list_uses_title(pool: SqlitePool) {
    let a = insert_theme(&pool, 1, "Culture", true).await;
    let b = insert_theme(&pool, 1, "Sport", false).await;

    let reference = ThemeRepo::list_reference(&pool).await.unwrap();
    let pairs: Vec<(i64, String)> = reference
        .iter()
        .map(|item| (item.id, item.label.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![(a.id, "Culture".to_string()), (b.id, "Sport".to_string())]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_campaign_filters(pool: SqlitePool) {
    let a = insert_theme(&pool, 1, "Culture", true).await;
    let b = insert_theme(&pool, 2, "Mobilité", true).await;
    let c = insert_theme(&pool, 1, "Sport", false).await;

    assert_eq!(
        ThemeRepo::list(&pool).await.unwrap(),
        vec![a.clone(), b.clone(), c.clone()]
    );
    assert_eq!(
        ThemeRepo::list_ids(&pool).await.unwrap(),
        vec![a.id, b.id, c.id]
    );
    assert_eq!(
        ThemeRepo::list_by_campaign(&pool, 1).await.unwrap(),
        vec![a.clone(), c]
    );
    assert_eq!(
        ThemeRepo::list_active_by_campaign(&pool, 1).await.unwrap(),
        vec![a]
    );
    assert!(ThemeRepo::list_by_campaign(&pool, 3).await.unwrap().is_empty());
}
