use std::fmt::Display;

use itertools::Itertools;
use serde_json::json;
use uuid::Uuid;

use crate::{
    clock::format_game_time,
    event::GameEvent,
    match_info::{Match, PeriodFouls, PeriodScores, TeamPair},
    player::Player,
    quarter::QUARTER_COUNT,
    tally::Tally,
    team::Team,
};

/// Rows per team in the roster block of the printed sheet.
pub const ROSTER_ROWS: usize = 12;
/// Numbered cells per team in the running score grid.
pub const RUNNING_SCORE_CELLS: u32 = 160;
const GRID_COLUMNS: u32 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterLine {
    pub player_id: Uuid,
    pub number: String,
    pub name: String,
    pub is_starter: bool,
    /// Quarter tag of each personal foul, in the order committed.
    pub fouls: Vec<u8>,
}

/// Official summary of a match, derived from the event log alone.
#[derive(Clone, Debug)]
pub struct ScoreSheet {
    pub game: Match,
    pub rosters: TeamPair<Vec<RosterLine>>,
    pub quarter_points: TeamPair<[u32; QUARTER_COUNT as usize]>,
    pub quarter_fouls: TeamPair<[u32; QUARTER_COUNT as usize]>,
    /// Team total after each scoring event, oldest first.
    pub running_scores: TeamPair<Vec<u32>>,
    pub elapsed_ms: u64,
}

fn in_regulation(event: &GameEvent) -> bool {
    (1..=QUARTER_COUNT).contains(&event.quarter)
}

impl ScoreSheet {
    /// `events` may be in any order; they are sorted by id before the
    /// running score is accumulated.
    pub fn build(game: &Match, players: &[Player], events: &[GameEvent], elapsed_ms: u64) -> Self {
        let chronological: Vec<&GameEvent> = events.iter().sorted_by_key(|e| e.id).collect();
        let tally = Tally::from_events(chronological.iter().copied());

        let mut quarter_points = TeamPair::<[u32; QUARTER_COUNT as usize]>::default();
        let mut quarter_fouls = TeamPair::<[u32; QUARTER_COUNT as usize]>::default();
        for team in Team::BOTH {
            for q in 1..=QUARTER_COUNT {
                let slot = usize::from(q - 1);
                quarter_points.get_mut(team)[slot] = tally.quarter_points(team, q).max(0) as u32;
                quarter_fouls.get_mut(team)[slot] = tally.quarter_fouls(team, q);
            }
        }

        let mut running_scores = TeamPair::<Vec<u32>>::default();
        let mut totals = TeamPair::<i64>::default();
        for event in chronological.iter().filter(|e| in_regulation(e)) {
            let points = event.kind.points();
            if points == 0 {
                continue;
            }
            let total = totals.get_mut(event.team);
            *total = (*total + i64::from(points)).max(0);
            running_scores.get_mut(event.team).push(*total as u32);
        }

        let mut rosters = TeamPair::<Vec<RosterLine>>::default();
        for team in Team::BOTH {
            *rosters.get_mut(team) = players
                .iter()
                .filter(|p| p.team == team)
                .take(ROSTER_ROWS)
                .map(|p| RosterLine {
                    player_id: p.id,
                    number: p.number.clone(),
                    name: p.name.clone(),
                    is_starter: p.is_starter,
                    fouls: chronological
                        .iter()
                        .filter(|e| e.kind.is_foul() && e.player_id == Some(p.id))
                        .map(|e| e.quarter)
                        .collect(),
                })
                .collect();
        }

        Self {
            game: game.clone(),
            rosters,
            quarter_points,
            quarter_fouls,
            running_scores,
            elapsed_ms,
        }
    }

    pub fn total(&self, team: Team) -> u32 {
        self.quarter_points.get(team).iter().sum()
    }

    pub fn roster_line(&self, player_id: Uuid) -> Option<&RosterLine> {
        Team::BOTH
            .iter()
            .flat_map(|&team| self.rosters.get(team))
            .find(|line| line.player_id == player_id)
    }

    pub fn period_scores(&self) -> PeriodScores {
        let mut scores = PeriodScores::default();
        for q in 1..=QUARTER_COUNT {
            if let Some(period) = scores.quarter_mut(q) {
                for team in Team::BOTH {
                    *period.get_mut(team) = self.quarter_points.get(team)[usize::from(q - 1)];
                }
            }
        }
        scores
    }

    /// Team fouls as the paper sheet tallies them: the ordinal of each foul
    /// within its period.
    pub fn period_fouls(&self) -> TeamPair<PeriodFouls> {
        let mut fouls = TeamPair::<PeriodFouls>::default();
        for team in Team::BOTH {
            for q in 1..=QUARTER_COUNT {
                let count = self.quarter_fouls.get(team)[usize::from(q - 1)];
                if let Some(period) = fouls.get_mut(team).quarter_mut(q) {
                    *period = (1..=count).collect();
                }
            }
        }
        fouls
    }

    /// Body for `PATCH /matches/:id` carrying the derived results.
    pub fn match_patch(&self) -> serde_json::Value {
        json!({
            "scores": self.period_scores(),
            "teamFouls": self.period_fouls(),
            "scoreRecords": self.running_scores,
        })
    }

    fn write_roster(&self, f: &mut std::fmt::Formatter<'_>, team: Team) -> std::fmt::Result {
        writeln!(f, "Team {team}: {}", self.game.team_name(team))?;
        writeln!(f, "  {:<3} {:<4} {:<20} {:<9} S", "#", "No.", "Name", "Fouls")?;
        let lines = self.rosters.get(team);
        for row in 0..ROSTER_ROWS {
            match lines.get(row) {
                Some(line) => {
                    let fouls = line.fouls.iter().map(|q| format!("Q{q}")).join(" ");
                    writeln!(
                        f,
                        "  {:<3} {:<4} {:<20} {:<9} {}",
                        row + 1,
                        line.number,
                        line.name,
                        fouls,
                        if line.is_starter { "x" } else { "" }
                    )?;
                }
                None => writeln!(f, "  {:<3} {:<4} {:<20} {:<9}", row + 1, "", "", "")?,
            }
        }
        Ok(())
    }

    fn write_running_grid(&self, f: &mut std::fmt::Formatter<'_>, team: Team) -> std::fmt::Result {
        let reached = self.running_scores.get(team);
        writeln!(f, "Running score, team {team}:")?;
        for row in 0..RUNNING_SCORE_CELLS / GRID_COLUMNS {
            let cells = (1..=GRID_COLUMNS)
                .map(|col| {
                    let cell = row * GRID_COLUMNS + col;
                    if reached.contains(&cell) {
                        format!("[{cell:>3}]")
                    } else {
                        format!(" {cell:>3} ")
                    }
                })
                .join("");
            writeln!(f, "  {cells}")?;
        }
        Ok(())
    }
}

fn or_blank(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl Display for ScoreSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let game = &self.game;
        writeln!(
            f,
            "BASKETBALL SCORE SHEET ({} min quarters)",
            game.quarter_length
        )?;
        writeln!(f, "Match: {}", game.name)?;
        writeln!(
            f,
            "Date: {} {}  Location: {}",
            game.date,
            or_blank(&game.time),
            or_blank(&game.location)
        )?;
        writeln!(
            f,
            "Referee: {}  Assistant referee: {}",
            or_blank(&game.main_referee),
            or_blank(&game.assistant_referee)
        )?;
        writeln!(f)?;

        for team in Team::BOTH {
            self.write_roster(f, team)?;
            writeln!(f)?;
        }

        writeln!(f, "{:<24} Q1   Q2   Q3   Q4   Total", "Score")?;
        for team in Team::BOTH {
            let quarters = self
                .quarter_points
                .get(team)
                .iter()
                .map(|p| format!("{p:<4}"))
                .join(" ");
            writeln!(
                f,
                "{:<24} {quarters} {}",
                self.game.team_name(team),
                self.total(team)
            )?;
        }
        writeln!(f, "{:<24} Q1   Q2   Q3   Q4", "Team fouls")?;
        for team in Team::BOTH {
            let fouls = self
                .quarter_fouls
                .get(team)
                .iter()
                .map(|n| format!("{n:<4}"))
                .join(" ");
            writeln!(f, "{:<24} {fouls}", self.game.team_name(team))?;
        }
        writeln!(f)?;

        for team in Team::BOTH {
            self.write_running_grid(f, team)?;
        }
        writeln!(f)?;

        writeln!(f, "Game time: {}", format_game_time(self.elapsed_ms))?;
        writeln!(
            f,
            "Coach A: {:<20} Assistant coach A: {}",
            or_blank(&game.coach_a),
            or_blank(&game.assistant_coach_a)
        )?;
        write!(
            f,
            "Coach B: {:<20} Assistant coach B: {}",
            or_blank(&game.coach_b),
            or_blank(&game.assistant_coach_b)
        )
    }
}
