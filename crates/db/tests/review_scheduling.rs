//! Integration tests for spaced-review scheduling:
//! - Find-or-create-and-increment as one logical transaction
//! - Due dates following the spacing curve exactly
//! - Due-now querying and ordering

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;
use wird_core::error::CoreError;
use wird_core::passage::PassageRange;
use wird_db::error::DbError;
use wird_db::repositories::ReviewScheduleRepo;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_review_creates_the_entry(pool: PgPool) {
    let range = PassageRange::new(2, 1, 5);
    let entry = ReviewScheduleRepo::record_review(&pool, 1, range, d(2024, 3, 15))
        .await
        .unwrap();

    assert_eq!(entry.review_count, 1);
    assert_eq!(entry.next_review_date, d(2024, 3, 16));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_reviews_increment_and_space_out(pool: PgPool) {
    let range = PassageRange::new(2, 1, 5);

    // Curve: 1, 3, 7 days for the first three reviews.
    let entry = ReviewScheduleRepo::record_review(&pool, 1, range, d(2024, 3, 15))
        .await
        .unwrap();
    assert_eq!((entry.review_count, entry.next_review_date), (1, d(2024, 3, 16)));

    let entry = ReviewScheduleRepo::record_review(&pool, 1, range, d(2024, 3, 16))
        .await
        .unwrap();
    assert_eq!((entry.review_count, entry.next_review_date), (2, d(2024, 3, 19)));

    let entry = ReviewScheduleRepo::record_review(&pool, 1, range, d(2024, 3, 19))
        .await
        .unwrap();
    assert_eq!((entry.review_count, entry.next_review_date), (3, d(2024, 3, 26)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_range_stays_one_row(pool: PgPool) {
    let range = PassageRange::new(2, 1, 5);
    ReviewScheduleRepo::record_review(&pool, 1, range, d(2024, 3, 15)).await.unwrap();
    ReviewScheduleRepo::record_review(&pool, 1, range, d(2024, 3, 16)).await.unwrap();

    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM review_schedules WHERE user_id = 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn different_ranges_get_separate_entries(pool: PgPool) {
    ReviewScheduleRepo::record_review(&pool, 1, PassageRange::new(2, 1, 5), d(2024, 3, 15))
        .await
        .unwrap();
    ReviewScheduleRepo::record_review(&pool, 1, PassageRange::new(2, 6, 10), d(2024, 3, 15))
        .await
        .unwrap();

    let entries = ReviewScheduleRepo::list_for_user(&pool, 1).await.unwrap();
    assert_eq!(entries.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_range_rejected(pool: PgPool) {
    let err = ReviewScheduleRepo::record_review(&pool, 1, PassageRange::new(0, 1, 5), d(2024, 3, 15))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn due_for_review_filters_and_sorts(pool: PgPool) {
    // Reviewed on different days, so different due dates.
    ReviewScheduleRepo::record_review(&pool, 1, PassageRange::new(2, 1, 5), d(2024, 3, 10))
        .await
        .unwrap(); // due 2024-03-11
    ReviewScheduleRepo::record_review(&pool, 1, PassageRange::new(3, 1, 5), d(2024, 3, 14))
        .await
        .unwrap(); // due 2024-03-15
    ReviewScheduleRepo::record_review(&pool, 1, PassageRange::new(4, 1, 5), d(2024, 3, 20))
        .await
        .unwrap(); // due 2024-03-21, not yet due

    let due = ReviewScheduleRepo::due_for_review(&pool, 1, d(2024, 3, 15)).await.unwrap();
    assert_eq!(due.len(), 2);
    assert_eq!(due[0].surah, 2);
    assert_eq!(due[1].surah, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn schedule_scoped_to_user(pool: PgPool) {
    ReviewScheduleRepo::record_review(&pool, 1, PassageRange::new(2, 1, 5), d(2024, 3, 10))
        .await
        .unwrap();
    ReviewScheduleRepo::record_review(&pool, 2, PassageRange::new(2, 1, 5), d(2024, 3, 10))
        .await
        .unwrap();

    let entries = ReviewScheduleRepo::list_for_user(&pool, 1).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_first_reviews_create_one_entry(pool: PgPool) {
    let range = PassageRange::new(2, 1, 5);
    let mut handles = Vec::new();
    for _ in 0..4 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            ReviewScheduleRepo::record_review(&pool, 1, range, d(2024, 3, 15)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let entry = ReviewScheduleRepo::find_entry(&pool, 1, range).await.unwrap().unwrap();
    assert_eq!(entry.review_count, 4);
}
