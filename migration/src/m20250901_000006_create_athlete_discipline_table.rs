use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000003_create_discipline_table::Discipline,
    m20250901_000005_create_athlete_table::Athlete,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AthleteDiscipline::Table)
                    .if_not_exists()
                    .col(pk_auto(AthleteDiscipline::Id))
                    .col(integer(AthleteDiscipline::AthleteId))
                    .col(integer(AthleteDiscipline::DisciplineId))
                    .col(integer_null(AthleteDiscipline::CurrentRank))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_athlete_discipline_athlete_id")
                            .from(AthleteDiscipline::Table, AthleteDiscipline::AthleteId)
                            .to(Athlete::Table, Athlete::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_athlete_discipline_discipline_id")
                            .from(AthleteDiscipline::Table, AthleteDiscipline::DisciplineId)
                            .to(Discipline::Table, Discipline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AthleteDiscipline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AthleteDiscipline {
    Table,
    Id,
    AthleteId,
    DisciplineId,
    CurrentRank,
}
