pub use super::athlete::Entity as Athlete;
pub use super::athlete_discipline::Entity as AthleteDiscipline;
pub use super::discipline::Entity as Discipline;
pub use super::event::Entity as Event;
pub use super::gameday::Entity as Gameday;
pub use super::performance::Entity as Performance;
pub use super::position::Entity as Position;
pub use super::season::Entity as Season;
pub use super::sport::Entity as Sport;
pub use super::team::Entity as Team;
pub use super::university::Entity as University;
pub use super::venue::Entity as Venue;
