use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Intrakurikuler subjects (mata pelajaran)
        manager
            .create_table(
                Table::create()
                    .table(IntrakurikulerSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IntrakurikulerSubjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerSubjects::KodeMapel)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerSubjects::NamaMapel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerSubjects::Kelompok)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerSubjects::Deskripsi)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerSubjects::Aktif)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerSubjects::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-class subject schedule assignments
        manager
            .create_table(
                Table::create()
                    .table(IntrakurikulerAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::ClassName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::TeacherId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::TeacherName)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::Hari)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::JamMulai)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IntrakurikulerAssignments::JamSelesai)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                IntrakurikulerAssignments::Table,
                                IntrakurikulerAssignments::SubjectId,
                            )
                            .to(
                                IntrakurikulerSubjects::Table,
                                IntrakurikulerSubjects::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Ekstrakurikuler activities
        manager
            .create_table(
                Table::create()
                    .table(EkstrakurikulerActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EkstrakurikulerActivities::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerActivities::KodeEkskul)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerActivities::NamaEkskul)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerActivities::Deskripsi)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerActivities::Pembina)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerActivities::Aktif)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerActivities::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Activity membership
        manager
            .create_table(
                Table::create()
                    .table(EkstrakurikulerMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EkstrakurikulerMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerMembers::ActivityId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerMembers::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerMembers::StudentName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerMembers::StudentClass)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EkstrakurikulerMembers::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EkstrakurikulerMembers::Table,
                                EkstrakurikulerMembers::ActivityId,
                            )
                            .to(
                                EkstrakurikulerActivities::Table,
                                EkstrakurikulerActivities::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EkstrakurikulerMembers::Table,
                                EkstrakurikulerMembers::StudentId,
                            )
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership row per student per activity
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ekskul_members_activity_student")
                    .table(EkstrakurikulerMembers::Table)
                    .col(EkstrakurikulerMembers::ActivityId)
                    .col(EkstrakurikulerMembers::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_intrakurikuler_assignments_class")
                    .table(IntrakurikulerAssignments::Table)
                    .col(IntrakurikulerAssignments::ClassName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(EkstrakurikulerMembers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(EkstrakurikulerActivities::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(IntrakurikulerAssignments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(IntrakurikulerSubjects::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum IntrakurikulerSubjects {
    #[sea_orm(iden = "intrakurikuler_subjects")]
    Table,
    Id,
    KodeMapel,
    NamaMapel,
    Kelompok,
    Deskripsi,
    Aktif,
    CreatedAt,
}

#[derive(DeriveIden)]
enum IntrakurikulerAssignments {
    #[sea_orm(iden = "intrakurikuler_assignments")]
    Table,
    Id,
    SubjectId,
    ClassName,
    TeacherId,
    TeacherName,
    Hari,
    JamMulai,
    JamSelesai,
}

#[derive(DeriveIden)]
enum EkstrakurikulerActivities {
    #[sea_orm(iden = "ekstrakurikuler_activities")]
    Table,
    Id,
    KodeEkskul,
    NamaEkskul,
    Deskripsi,
    Pembina,
    Aktif,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EkstrakurikulerMembers {
    #[sea_orm(iden = "ekstrakurikuler_members")]
    Table,
    Id,
    ActivityId,
    StudentId,
    StudentName,
    StudentClass,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
}
