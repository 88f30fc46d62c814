use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discipline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
    /// Measurement unit driving ranking direction: `seconds`, `meters`, `cm`, `points`.
    pub unit: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sport::Entity",
        from = "Column::SportId",
        to = "super::sport::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Sport,
    #[sea_orm(has_many = "super::athlete_discipline::Entity")]
    AthleteDiscipline,
    #[sea_orm(has_many = "super::performance::Entity")]
    Performance,
}

impl Related<super::sport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sport.def()
    }
}

impl Related<super::athlete_discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AthleteDiscipline.def()
    }
}

impl Related<super::performance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
