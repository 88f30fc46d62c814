use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "athlete")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<i32>,
    pub position_id: Option<i32>,
    pub date_of_birth: Date,
    pub nationality: String,
    pub gender: String,
    /// Centimetres
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Position,
    #[sea_orm(has_many = "super::athlete_discipline::Entity")]
    AthleteDiscipline,
    #[sea_orm(has_many = "super::performance::Entity")]
    Performance,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
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
