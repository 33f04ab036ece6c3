use crate::{
    event::{EventKind, GameEvent},
    match_info::TeamPair,
    quarter::QUARTER_COUNT,
    team::{Team, TeamScore},
};

const SLOTS: usize = QUARTER_COUNT as usize + 1;

/// Score, foul, and timeout totals folded from an event log, bucketed by
/// quarter tag. Slot 0 holds events recorded while no quarter was active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    points: TeamPair<[i32; SLOTS]>,
    fouls: TeamPair<[u32; SLOTS]>,
    timeouts: TeamPair<u32>,
}

impl Tally {
    /// Order of events does not matter.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a GameEvent>) -> Self {
        let mut tally = Tally::default();
        for event in events {
            tally.apply(event);
        }
        tally
    }

    pub fn apply(&mut self, event: &GameEvent) {
        let slot = usize::from(event.quarter).min(SLOTS - 1);
        self.points.get_mut(event.team)[slot] += event.kind.points();
        match event.kind {
            EventKind::Foul { .. } => self.fouls.get_mut(event.team)[slot] += 1,
            EventKind::Timeout => *self.timeouts.get_mut(event.team) += 1,
            _ => {}
        }
    }

    pub fn team_score(&self, team: Team) -> TeamScore {
        TeamScore {
            points: self.total_points(team).max(0) as u32,
            fouls: self.fouls.get(team).iter().sum(),
            timeouts: *self.timeouts.get(team),
        }
    }

    pub fn total_points(&self, team: Team) -> i32 {
        self.points.get(team).iter().sum()
    }

    /// Points scored in `quarter` (`0..=4`).
    pub fn quarter_points(&self, team: Team, quarter: u8) -> i32 {
        self.points
            .get(team)
            .get(usize::from(quarter))
            .copied()
            .unwrap_or(0)
    }

    /// Points recorded in quarters 1 to 4, the figure printed on the sheet.
    pub fn regulation_points(&self, team: Team) -> i32 {
        (1..=QUARTER_COUNT)
            .map(|q| self.quarter_points(team, q))
            .sum()
    }

    pub fn quarter_fouls(&self, team: Team, quarter: u8) -> u32 {
        self.fouls
            .get(team)
            .get(usize::from(quarter))
            .copied()
            .unwrap_or(0)
    }
}
