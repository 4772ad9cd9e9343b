use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Workflow statuses
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO statuses (id, name)
            VALUES
                (1, 'Backlog'),
                (2, 'Todo'),
                (3, 'In Progress'),
                (4, 'Test'),
                (5, 'Done')
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Task categories
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO categories (id, name)
            VALUES
                (1, 'Career'),
                (2, 'Shopping'),
                (3, 'Personal Development'),
                (4, 'Health'),
                (5, 'Finance'),
                (6, 'Home'),
                (7, 'Hobbies'),
                (8, 'Education'),
                (9, 'Family'),
                (10, 'Other')
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Fallback assignee for tasks created without a real user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO users (id, user_name, email)
            VALUES (1, 'anonymous', 'a@a.com.tr')
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Seeds insert explicit ids; advance the sequences so
        // store-assigned ids continue after them
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            SELECT setval(pg_get_serial_sequence('statuses', 'id'), (SELECT MAX(id) FROM statuses));
            SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories));
            SELECT setval(pg_get_serial_sequence('users', 'id'), (SELECT MAX(id) FROM users));
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            DELETE FROM categories WHERE id BETWEEN 1 AND 10;
            DELETE FROM users WHERE id = 1;
            DELETE FROM statuses WHERE id BETWEEN 1 AND 5;
            "#,
            )
            .await?;

        Ok(())
    }
}
