use sqlx::PgPool;

/// Replace the stored mutual-friend set for a user (full overwrite)
pub async fn replace(
    pool: &PgPool,
    username: &str,
    friend_usernames: &[String],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    // Drop the existing adjacency
    sqlx::query("DELETE FROM user_friends WHERE username = $1")
        .bind(username)
        .execute(&mut *tx)
        .await?;

    for friend in friend_usernames {
        if friend != username {
            sqlx::query(
                r#"
                INSERT INTO user_friends (username, friend_username)
                VALUES ($1, $2)
                ON CONFLICT (username, friend_username) DO NOTHING
                "#,
            )
            .bind(username)
            .bind(friend)
            .execute(&mut *tx)
            .await?;
        }
    }

    // The relationship set lives on the subject record; count the overwrite
    // as a write to it
    sqlx::query("UPDATE users SET updated_at = NOW() WHERE username = $1 AND NOT is_deleted")
        .bind(username)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Get adjacency pairs for a set of users in one round trip
pub async fn list_many(
    executor: impl sqlx::PgExecutor<'_>,
    usernames: &[String],
) -> Result<Vec<(String, String)>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT username, friend_username FROM user_friends
        WHERE username = ANY($1)
        ORDER BY username ASC, friend_username ASC
        "#,
    )
    .bind(usernames)
    .fetch_all(executor)
    .await
}

/// Get the stored mutual-friend handles for a user
pub async fn list(
    executor: impl sqlx::PgExecutor<'_>,
    username: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT friend_username FROM user_friends
        WHERE username = $1
        ORDER BY friend_username ASC
        "#,
    )
    .bind(username)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(|(friend,)| friend).collect())
}
