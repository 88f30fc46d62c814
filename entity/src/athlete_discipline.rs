use sea_orm::entity::prelude::*;

/// Join row linking an individual-sport athlete to a discipline.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "athlete_discipline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub athlete_id: i32,
    pub discipline_id: i32,
    pub current_rank: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::athlete::Entity",
        from = "Column::AthleteId",
        to = "super::athlete::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Athlete,
    #[sea_orm(
        belongs_to = "super::discipline::Entity",
        from = "Column::DisciplineId",
        to = "super::discipline::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Discipline,
}

impl Related<super::athlete::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Athlete.def()
    }
}

impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discipline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
