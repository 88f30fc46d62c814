//! Idempotent reference data loaded on startup when `SEED_DATABASE` is enabled.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::sport::SportType,
    server::{
        data::{
            discipline::DisciplineRepository, position::PositionRepository,
            sport::SportRepository, team::TeamRepository,
        },
        error::AppError,
        model::{
            discipline::CreateDisciplineParam, position::CreatePositionParam, sport::Sport,
            team::CreateTeamParam,
        },
    },
};

const BASKETBALL_POSITIONS: [(&str, &str); 5] = [
    ("Point Guard", "PG"),
    ("Shooting Guard", "SG"),
    ("Small Forward", "SF"),
    ("Power Forward", "PF"),
    ("Center", "C"),
];

const FOOTBALL_POSITIONS: [(&str, &str); 4] = [
    ("Goalkeeper", "GK"),
    ("Defender", "DEF"),
    ("Midfielder", "MID"),
    ("Forward", "FWD"),
];

const ATHLETICS_DISCIPLINES: [(&str, &str, &str); 10] = [
    ("100 Meters", "100M", "seconds"),
    ("200 Meters", "200M", "seconds"),
    ("400 Meters", "400M", "seconds"),
    ("800 Meters", "800M", "seconds"),
    ("1500 Meters", "1500M", "seconds"),
    ("110m Hurdles", "110H", "seconds"),
    ("Long Jump", "LJ", "meters"),
    ("High Jump", "HJ", "meters"),
    ("Shot Put", "SP", "meters"),
    ("Javelin", "JAV", "meters"),
];

const WRESTLING_DISCIPLINES: [(&str, &str); 5] = [
    ("57kg Freestyle", "57KG_FS"),
    ("61kg Freestyle", "61KG_FS"),
    ("65kg Freestyle", "65KG_FS"),
    ("70kg Freestyle", "70KG_FS"),
    ("74kg Freestyle", "74KG_FS"),
];

const BOXING_DISCIPLINES: [(&str, &str); 5] = [
    ("Flyweight", "FLY"),
    ("Bantamweight", "BAN"),
    ("Featherweight", "FEA"),
    ("Lightweight", "LIG"),
    ("Welterweight", "WEL"),
];

const TEAMS: [(&str, &str, SportType); 2] = [
    ("BBT001", "University Eagles Basketball", SportType::Basketball),
    ("FBT001", "University Eagles Football", SportType::Football),
];

/// Counts of rows inserted by one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub sports: usize,
    pub positions: usize,
    pub disciplines: usize,
    pub teams: usize,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the reference sports, positions, disciplines and default teams
    ///
    /// Rows that already exist are left untouched so the seed can run on every startup.
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - How many rows were newly inserted
    /// - `Err(AppError::DbErr)` - Database error, nothing is committed
    pub async fn seed(&self) -> Result<SeedReport, AppError> {
        let txn = self.db.begin().await?;
        let mut report = SeedReport::default();

        let sports = SportRepository::new(&txn);
        let positions = PositionRepository::new(&txn);
        let disciplines = DisciplineRepository::new(&txn);
        let teams = TeamRepository::new(&txn);

        let mut seeded: Vec<Sport> = Vec::with_capacity(SportType::ALL.len());
        for name in SportType::ALL {
            let sport = match sports.find_by_name(name).await? {
                Some(sport) => sport,
                None => {
                    report.sports += 1;
                    let is_team_sport = matches!(name, SportType::Basketball | SportType::Football);
                    sports.create(name, is_team_sport).await?
                }
            };
            seeded.push(sport);
        }
        let sport_id_of = |name: SportType| {
            seeded
                .iter()
                .find(|sport| sport.name == name)
                .map(|sport| sport.id)
                .ok_or_else(|| AppError::InternalError(format!("Sport {} was not seeded", name)))
        };

        for (sport, list) in [
            (SportType::Basketball, &BASKETBALL_POSITIONS[..]),
            (SportType::Football, &FOOTBALL_POSITIONS[..]),
        ] {
            let sport_id = sport_id_of(sport)?;
            for (name, code) in list {
                if positions.find_by_code(sport_id, code).await?.is_some() {
                    continue;
                }
                positions
                    .create(CreatePositionParam {
                        name: name.to_string(),
                        code: code.to_string(),
                        sport_id,
                        description: None,
                    })
                    .await?;
                report.positions += 1;
            }
        }

        let mut discipline_rows: Vec<(SportType, &str, &str, Option<&str>)> = ATHLETICS_DISCIPLINES
            .iter()
            .map(|(name, code, unit)| (SportType::Athletics, *name, *code, Some(*unit)))
            .collect();
        discipline_rows.extend(
            WRESTLING_DISCIPLINES
                .iter()
                .map(|(name, code)| (SportType::Wrestling, *name, *code, None)),
        );
        discipline_rows.extend(
            BOXING_DISCIPLINES
                .iter()
                .map(|(name, code)| (SportType::Boxing, *name, *code, None)),
        );

        for (sport, name, code, unit) in discipline_rows {
            let sport_id = sport_id_of(sport)?;
            if disciplines.find_by_code(sport_id, code).await?.is_some() {
                continue;
            }
            disciplines
                .create(CreateDisciplineParam {
                    name: name.to_string(),
                    code: code.to_string(),
                    sport_id,
                    description: None,
                    unit: unit.map(str::to_string),
                })
                .await?;
            report.disciplines += 1;
        }

        for (code, name, sport) in TEAMS {
            if teams.find_by_code(code).await?.is_some() {
                continue;
            }
            teams
                .create(CreateTeamParam {
                    code: code.to_string(),
                    name: name.to_string(),
                    sport_id: sport_id_of(sport)?,
                })
                .await?;
            report.teams += 1;
        }

        txn.commit().await?;

        Ok(report)
    }
}
