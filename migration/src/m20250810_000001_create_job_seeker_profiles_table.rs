use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create job_seeker_profiles table
        // =====================================================
        //
        // The relational anchor for cross-store consistency: `portfolio_id`
        // is a nullable back-reference into the portfolios document table.
        // This service only ever writes that one column; the rest of the row
        // belongs to the profile service.
        manager
            .create_table(
                Table::create()
                    .table(JobSeekerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobSeekerProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(JobSeekerProfiles::UserId).uuid().not_null())
                    .col(ColumnDef::new(JobSeekerProfiles::PortfolioId).uuid())
                    .col(
                        ColumnDef::new(JobSeekerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One profile row per user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_job_seeker_profiles_user_id_unique
                ON job_seeker_profiles (user_id);
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
                DROP INDEX IF EXISTS idx_job_seeker_profiles_user_id_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobSeekerProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobSeekerProfiles {
    Table,
    Id,
    UserId,
    PortfolioId,
    CreatedAt,
    UpdatedAt,
}
