use sea_orm::entity::prelude::*;

/// One result row per athlete per event (and per discipline for individual sports).
///
/// Sport-specific metrics are sparse: only the columns relevant to the event's
/// sport are populated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "performance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub athlete_id: i32,
    pub event_id: i32,
    pub discipline_id: Option<i32>,
    pub season_id: i32,
    pub date: DateTimeUtc,
    pub notes: Option<String>,

    pub position: Option<i32>,
    pub points: Option<f64>,
    /// Seconds
    pub time: Option<f64>,
    /// Metres
    pub distance: Option<f64>,
    /// Metres
    pub height: Option<f64>,
    pub minutes_played: Option<i32>,
    pub assists: Option<i32>,

    pub goals_scored: Option<i32>,
    pub goals_conceded: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
    pub saves: Option<i32>,

    pub two_points: Option<i32>,
    pub three_points: Option<i32>,
    pub free_throws: Option<i32>,
    pub field_goals: Option<i32>,
    pub rebounds: Option<i32>,
    pub steals: Option<i32>,
    pub blocks: Option<i32>,
    pub turnovers: Option<i32>,

    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub pins: Option<i32>,
    pub technical_falls: Option<i32>,
    pub decisions: Option<i32>,

    pub rounds: Option<i32>,
    pub knockouts: Option<i32>,
    pub knockdowns: Option<i32>,
    pub punches_landed: Option<i32>,
    pub punches_thrown: Option<i32>,

    pub is_personal_best: bool,
    pub is_season_best: bool,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::discipline::Entity",
        from = "Column::DisciplineId",
        to = "super::discipline::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Discipline,
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Season,
}

impl Related<super::athlete::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Athlete.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discipline.def()
    }
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
