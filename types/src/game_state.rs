use std::fmt::Display;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    clock::{format_elapsed, Clock},
    command::{ClockAction, Command, FreeThrowInput, Outcome},
    court::{CourtBounds, CourtPosition, EventMarker},
    error::RecordError,
    event::{EventKind, GameEvent, MiscKind},
    match_info::TeamPair,
    player::Player,
    quarter::QuarterBoard,
    roster::ActiveRoster,
    tally::Tally,
    team::{Team, TeamScore},
};

/// Everything a recording session needs to resume after an interruption,
/// saved as a single document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub match_id: Uuid,
    pub events: Vec<GameEvent>,
    pub next_event_id: u32,
    pub markers: Vec<EventMarker>,
    pub elapsed_ms: u64,
    pub time: String,
    pub quarters: QuarterBoard,
    pub active_players: ActiveRoster,
    /// Starters that have been substituted out during this session.
    #[serde(default)]
    pub benched_starters: Vec<Uuid>,
    pub saved_at: DateTime<Utc>,
}

/// Live state of one match being recorded.
#[derive(Debug)]
pub struct GameState {
    pub match_id: Uuid,
    players: Vec<Player>,
    /// Most recent first.
    events: Vec<GameEvent>,
    next_event_id: u32,
    markers: Vec<EventMarker>,
    clock: Clock,
    quarters: QuarterBoard,
    roster: ActiveRoster,
    benched_starters: Vec<Uuid>,
    pending_position: Option<CourtPosition>,
    selected: TeamPair<Option<Uuid>>,
}

impl GameState {
    pub fn new(match_id: Uuid, players: Vec<Player>, snapshot: Option<SessionSnapshot>) -> Self {
        let mut state = Self {
            match_id,
            roster: ActiveRoster::from_starters(&players),
            players,
            events: Vec::new(),
            next_event_id: 1,
            markers: Vec::new(),
            clock: Clock::default(),
            quarters: QuarterBoard::default(),
            benched_starters: Vec::new(),
            pending_position: None,
            selected: TeamPair::default(),
        };
        if let Some(snapshot) = snapshot {
            log::info!(
                "Resuming match {match_id} at {} with {} events",
                snapshot.time,
                snapshot.events.len()
            );
            state.events = snapshot.events;
            state.next_event_id = snapshot.next_event_id;
            state.markers = snapshot.markers;
            state.clock = Clock::resume_from(snapshot.elapsed_ms);
            state.quarters = snapshot.quarters;
            state.roster = ActiveRoster::initialize(Some(snapshot.active_players), &state.players);
            for id in &snapshot.benched_starters {
                if let Some(player) = state.players.iter_mut().find(|p| p.id == *id) {
                    player.is_starter = false;
                }
            }
            state.benched_starters = snapshot.benched_starters;
        }
        state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            match_id: self.match_id,
            events: self.events.clone(),
            next_event_id: self.next_event_id,
            markers: self.markers.clone(),
            elapsed_ms: self.clock.elapsed_ms(),
            time: self.clock.formatted(),
            quarters: self.quarters.clone(),
            active_players: self.roster.clone(),
            benched_starters: self.benched_starters.clone(),
            saved_at: Utc::now(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn markers(&self) -> &[EventMarker] {
        &self.markers
    }

    pub fn quarters(&self) -> &QuarterBoard {
        &self.quarters
    }

    pub fn roster(&self) -> &ActiveRoster {
        &self.roster
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn pending_position(&self) -> Option<CourtPosition> {
        self.pending_position
    }

    pub fn selected(&self, team: Team) -> Option<Uuid> {
        *self.selected.get(team)
    }

    pub fn get_player(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_by_number(&self, team: Team, number: &str) -> Result<&Player, RecordError> {
        self.players
            .iter()
            .find(|p| p.team == team && p.number == number)
            .ok_or_else(|| RecordError::UnknownNumber {
                team,
                number: number.to_string(),
            })
    }

    pub fn tally(&self) -> Tally {
        Tally::from_events(&self.events)
    }

    pub fn team_score(&self, team: Team) -> TeamScore {
        self.tally().team_score(team)
    }

    fn team_player(&self, team: Team, id: Uuid) -> Result<&Player, RecordError> {
        let player = self.get_player(id).ok_or(RecordError::UnknownPlayer(id))?;
        if player.team != team {
            return Err(RecordError::PlayerNotOnTeam { player: id, team });
        }
        Ok(player)
    }

    fn selected_player(&self, team: Team) -> Result<Uuid, RecordError> {
        let id = self
            .selected(team)
            .ok_or(RecordError::NoPlayerSelected(team))?;
        self.team_player(team, id).map(|p| p.id)
    }

    pub fn select_player(&mut self, team: Team, id: Uuid) -> Result<(), RecordError> {
        self.team_player(team, id)?;
        *self.selected.get_mut(team) = Some(id);
        Ok(())
    }

    pub fn click_court(&mut self, bounds: &CourtBounds, x: f64, y: f64) -> Result<(), RecordError> {
        let position = bounds.normalize(x, y)?;
        log::debug!("Court position set to ({:.1}, {:.1})", position.x, position.y);
        self.pending_position = Some(position);
        Ok(())
    }

    fn push_event(
        &mut self,
        team: Team,
        player_id: Option<Uuid>,
        kind: EventKind,
        position: Option<CourtPosition>,
    ) -> &GameEvent {
        let quarter = self.quarters.current();
        self.push_event_in(quarter, team, player_id, kind, position)
    }

    fn push_event_in(
        &mut self,
        quarter: u8,
        team: Team,
        player_id: Option<Uuid>,
        kind: EventKind,
        position: Option<CourtPosition>,
    ) -> &GameEvent {
        let id = self.next_event_id;
        let elapsed_ms = self.clock.elapsed_ms();
        let event = GameEvent {
            id,
            time: format_elapsed(elapsed_ms),
            elapsed_ms,
            quarter,
            team,
            player_id,
            kind,
            position,
            description: kind.description(),
        };
        if let Some(pos) = position {
            self.markers.push(EventMarker {
                x: pos.x,
                y: pos.y,
                team,
                kind,
                id,
            });
        }
        log::info!(
            "[{}] Q{} team {team}: {} ({})",
            event.time,
            event.quarter,
            kind,
            player_id
                .and_then(|p| self.get_player(p))
                .map_or_else(|| "-".to_string(), |p| p.label())
        );
        self.events.insert(0, event);
        self.next_event_id += 1;
        &self.events[0]
    }

    /// Field goal by the selected player at the pending court position.
    pub fn record_score(&mut self, team: Team, points: u8) -> Result<&GameEvent, RecordError> {
        let player_id = self.selected_player(team)?;
        let position = self.pending_position.ok_or(RecordError::NoCourtPosition)?;
        if !(1..=3).contains(&points) {
            return Err(RecordError::InvalidPoints(points));
        }
        self.pending_position = None;
        Ok(self.push_event(
            team,
            Some(player_id),
            EventKind::Score { points },
            Some(position),
        ))
    }

    pub fn record_free_throw(
        &mut self,
        team: Team,
        attempts: &str,
        made: &str,
    ) -> Result<&GameEvent, RecordError> {
        let player_id = self.selected_player(team)?;
        let FreeThrowInput { attempts, made } = FreeThrowInput::parse(attempts, made)?;
        Ok(self.push_event(
            team,
            Some(player_id),
            EventKind::FreeThrow { attempts, made },
            None,
        ))
    }

    /// Generic path for non-scoring events. Uses the pending court position
    /// when one has been clicked.
    pub fn record_misc(&mut self, team: Team, kind: MiscKind) -> Result<&GameEvent, RecordError> {
        let player_id = self.selected_player(team)?;
        let position = self.pending_position.take();
        Ok(self.push_event(team, Some(player_id), kind.into(), position))
    }

    /// Takes one point back from `team`. Logged as a correction event so the
    /// score stays derivable from the log; does nothing at 0.
    ///
    /// The correction is tagged with the quarter of the latest scoring event
    /// whose quarter still has points, so no quarter total goes below 0.
    pub fn decrement_score(&mut self, team: Team) -> Option<&GameEvent> {
        let tally = self.tally();
        let Some(quarter) = self
            .events
            .iter()
            .filter(|e| e.team == team && e.kind.points() > 0)
            .map(|e| e.quarter)
            .find(|&q| tally.quarter_points(team, q) > 0)
        else {
            log::debug!("Team {team} already at 0, nothing to decrement");
            return None;
        };
        Some(self.push_event_in(
            quarter,
            team,
            None,
            EventKind::ScoreCorrection { points: -1 },
            None,
        ))
    }

    pub fn substitute(
        &mut self,
        team: Team,
        incoming: Option<Uuid>,
        outgoing: Option<Uuid>,
    ) -> Result<&GameEvent, RecordError> {
        let (Some(incoming), Some(outgoing)) = (incoming, outgoing) else {
            return Err(RecordError::BlankSubstitution);
        };
        self.team_player(team, incoming)?;
        self.team_player(team, outgoing)?;

        self.roster.swap(team, incoming, outgoing);
        if let Some(player) = self.players.iter_mut().find(|p| p.id == outgoing) {
            if player.is_starter {
                player.is_starter = false;
                self.benched_starters.push(outgoing);
            }
        }
        Ok(self.push_event(
            team,
            Some(incoming),
            EventKind::Substitution { incoming, outgoing },
            None,
        ))
    }

    pub fn start_quarter(&mut self, id: u8) -> Result<(), RecordError> {
        self.quarters.start(id)
    }

    pub fn complete_quarter(&mut self, id: u8) -> Result<(), RecordError> {
        self.quarters.complete(id)
    }

    pub fn clock_action(&mut self, action: ClockAction) {
        match action {
            ClockAction::Start => self.clock.start(),
            ClockAction::Pause => self.clock.pause(),
            ClockAction::Reset => self.clock.reset(),
        }
    }

    /// Clears the recorded game and the player selection. Quarter progress
    /// and starter flags cleared by substitutions are kept.
    pub fn reset_all(&mut self) {
        log::warn!("Resetting all recorded data for match {}", self.match_id);
        self.events.clear();
        self.markers.clear();
        self.next_event_id = 1;
        self.roster = ActiveRoster::default();
        self.clock.reset();
        self.pending_position = None;
        self.selected = TeamPair::default();
    }

    pub fn apply(&mut self, command: &Command, bounds: &CourtBounds) -> Result<Outcome, RecordError> {
        let outcome = match command {
            Command::Select { team, number } => {
                let id = self.find_by_number(*team, number)?.id;
                self.select_player(*team, id)?;
                Outcome::Unchanged
            }
            Command::Click { x, y } => {
                self.click_court(bounds, *x, *y)?;
                Outcome::Unchanged
            }
            Command::Score { team, points } => Outcome::Recorded(self.record_score(*team, *points)?.id),
            Command::FreeThrow {
                team,
                attempts,
                made,
            } => Outcome::Recorded(self.record_free_throw(*team, attempts, made)?.id),
            Command::Misc { team, kind } => Outcome::Recorded(self.record_misc(*team, *kind)?.id),
            Command::Decrement { team } => match self.decrement_score(*team) {
                Some(event) => Outcome::Recorded(event.id),
                None => Outcome::Unchanged,
            },
            Command::Substitute {
                team,
                incoming,
                outgoing,
            } => {
                let incoming = self.find_by_number(*team, incoming)?.id;
                let outgoing = self.find_by_number(*team, outgoing)?.id;
                let event_id = self.substitute(*team, Some(incoming), Some(outgoing))?.id;
                Outcome::Substituted { event_id, outgoing }
            }
            Command::StartQuarter(id) => {
                self.start_quarter(*id)?;
                Outcome::Updated
            }
            Command::CompleteQuarter(id) => {
                self.complete_quarter(*id)?;
                Outcome::Updated
            }
            Command::Clock(action) => {
                self.clock_action(*action);
                Outcome::Clock(*action)
            }
            Command::ResetAll => {
                self.reset_all();
                Outcome::Updated
            }
            Command::ShowSheet => Outcome::ShowSheet,
            Command::ShowLog => Outcome::ShowLog,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    fn label(&self, id: Uuid) -> String {
        self.get_player(id)
            .map_or_else(|| format!("unknown player {id}"), |p| p.label())
    }

    /// Detail column of the event log, with player labels resolved now.
    pub fn event_detail(&self, event: &GameEvent) -> String {
        match event.kind {
            EventKind::Substitution { incoming, outgoing } => format!(
                "{} off, {} on",
                self.label(outgoing),
                self.label(incoming)
            ),
            _ => event.description.clone(),
        }
    }

    pub fn event_log_table(&self) -> String {
        let rows = self
            .events
            .iter()
            .map(|event| {
                let player = event
                    .player_id
                    .map_or_else(|| "-".to_string(), |id| self.label(id));
                format!(
                    "{:>4}  {}  Q{}  {}  {:<20}  {:<18}  {}",
                    event.id,
                    event.time,
                    event.quarter,
                    event.team,
                    player,
                    event.kind,
                    self.event_detail(event)
                )
            })
            .join("\n");
        format!(
            "{:>4}  {:<7}  {:<2}  {}  {:<20}  {:<18}  {}\n{rows}",
            "id", "time", "qt", "T", "player", "type", "detail"
        )
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tally = self.tally();
        let quarter = match self.quarters.current() {
            0 => "no quarter running".to_string(),
            q => format!("Q{q}"),
        };
        let teams = Team::BOTH
            .iter()
            .map(|&team| {
                let on_court = self
                    .roster
                    .on_court(team, &self.players)
                    .iter()
                    .map(|p| p.label())
                    .join(", ");
                format!("Team {team}: {} | on court: {on_court}", tally.team_score(team))
            })
            .join("\n");
        write!(
            f,
            "\nClock: {} ({})\n{}",
            self.clock.formatted(),
            quarter,
            teams
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::NewPlayer;
    use proptest::prelude::*;

    fn roster(match_id: Uuid) -> Vec<Player> {
        [
            ("23", "Jordan", Team::A, true),
            ("33", "Pippen", Team::A, true),
            ("7", "Kukoc", Team::A, false),
            ("32", "Magic", Team::B, true),
            ("42", "Worthy", Team::B, false),
        ]
        .into_iter()
        .map(|(number, name, team, is_starter)| {
            Player::new(
                match_id,
                NewPlayer {
                    name: name.to_string(),
                    number: number.to_string(),
                    team,
                    is_starter,
                    personal_fouls: vec![],
                    certificate_number: None,
                },
            )
        })
        .collect()
    }

    fn new_state() -> GameState {
        let match_id = Uuid::new_v4();
        GameState::new(match_id, roster(match_id), None)
    }

    fn id_of(state: &GameState, team: Team, number: &str) -> Uuid {
        state.find_by_number(team, number).unwrap().id
    }

    #[test]
    fn score_needs_player_then_position() {
        let mut state = new_state();
        assert_eq!(
            state.record_score(Team::A, 2).unwrap_err(),
            RecordError::NoPlayerSelected(Team::A)
        );
        let jordan = id_of(&state, Team::A, "23");
        state.select_player(Team::A, jordan).unwrap();
        assert_eq!(
            state.record_score(Team::A, 2).unwrap_err(),
            RecordError::NoCourtPosition
        );
        assert!(state.events().is_empty());
        assert_eq!(state.team_score(Team::A).points, 0);
    }

    #[test]
    fn two_pointer_in_second_quarter() {
        let mut state = new_state();
        let jordan = id_of(&state, Team::A, "23");
        state.start_quarter(2).unwrap();
        state.select_player(Team::A, jordan).unwrap();
        state
            .click_court(&CourtBounds::default(), 50.0, 50.0)
            .unwrap();

        let event = state.record_score(Team::A, 2).unwrap().clone();
        assert_eq!(event.kind, EventKind::Score { points: 2 });
        assert_eq!(event.kind.points(), 2);
        assert_eq!(event.quarter, 2);
        assert_eq!(event.player_id, Some(jordan));
        assert_eq!(state.team_score(Team::A).points, 2);
        assert_eq!(state.markers().len(), 1);
        assert_eq!(state.markers()[0].x, 50.0);
        assert_eq!(state.markers()[0].y, 50.0);
        assert_eq!(state.markers()[0].id, event.id);
        assert_eq!(state.pending_position(), None);
    }

    #[test]
    fn events_are_most_recent_first_with_increasing_ids() {
        let mut state = new_state();
        let magic = id_of(&state, Team::B, "32");
        state.select_player(Team::B, magic).unwrap();
        state.record_misc(Team::B, MiscKind::Steal).unwrap();
        state.record_misc(Team::B, MiscKind::Assist).unwrap();
        let ids: Vec<_> = state.events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(state.events().iter().all(|e| e.quarter == 0));
    }

    #[test]
    fn free_throw_scores_made_only() {
        let mut state = new_state();
        let magic = id_of(&state, Team::B, "32");
        state.select_player(Team::B, magic).unwrap();
        assert!(state.record_free_throw(Team::B, "2", "3").is_err());
        assert!(state.record_free_throw(Team::B, "x", "1").is_err());
        assert!(state.events().is_empty());

        state.record_free_throw(Team::B, "3", "2").unwrap();
        assert_eq!(state.team_score(Team::B).points, 2);
        assert!(state.markers().is_empty());
    }

    #[test]
    fn fouls_count_toward_team_total() {
        let mut state = new_state();
        let pippen = id_of(&state, Team::A, "33");
        state.select_player(Team::A, pippen).unwrap();
        state.record_misc(Team::A, MiscKind::DefensiveFoul).unwrap();
        state.record_misc(Team::A, MiscKind::TechnicalFoul).unwrap();
        state.record_misc(Team::A, MiscKind::Fouled).unwrap();
        state.record_misc(Team::A, MiscKind::Timeout).unwrap();
        let score = state.team_score(Team::A);
        assert_eq!(score.fouls, 2);
        assert_eq!(score.timeouts, 1);
    }

    #[test]
    fn misc_event_consumes_pending_position() {
        let mut state = new_state();
        let pippen = id_of(&state, Team::A, "33");
        state.select_player(Team::A, pippen).unwrap();
        state
            .click_court(&CourtBounds::default(), 10.0, 90.0)
            .unwrap();
        state.record_misc(Team::A, MiscKind::Block).unwrap();
        assert_eq!(state.markers().len(), 1);
        assert_eq!(state.pending_position(), None);

        state.record_misc(Team::A, MiscKind::Block).unwrap();
        assert_eq!(state.markers().len(), 1);
        assert_eq!(state.events()[0].position, None);
    }

    #[test]
    fn decrement_is_logged_and_floored() {
        let mut state = new_state();
        assert!(state.decrement_score(Team::A).is_none());
        assert!(state.events().is_empty());

        let jordan = id_of(&state, Team::A, "23");
        state.select_player(Team::A, jordan).unwrap();
        state.record_free_throw(Team::A, "1", "1").unwrap();
        let correction = state.decrement_score(Team::A).unwrap();
        assert_eq!(correction.kind, EventKind::ScoreCorrection { points: -1 });
        assert_eq!(state.team_score(Team::A).points, 0);
        assert!(state.decrement_score(Team::A).is_none());
        assert_eq!(state.events().len(), 2);
    }

    #[test]
    fn decrement_takes_from_the_quarter_that_scored() {
        let mut state = new_state();
        let bounds = CourtBounds::default();
        let jordan = id_of(&state, Team::A, "23");
        state.select_player(Team::A, jordan).unwrap();
        state.start_quarter(1).unwrap();
        state.click_court(&bounds, 50.0, 50.0).unwrap();
        state.record_score(Team::A, 2).unwrap();
        state.complete_quarter(1).unwrap();
        state.start_quarter(2).unwrap();

        let correction = state.decrement_score(Team::A).unwrap();
        assert_eq!(correction.quarter, 1);
        let tally = state.tally();
        assert_eq!(tally.quarter_points(Team::A, 1), 1);
        assert_eq!(tally.quarter_points(Team::A, 2), 0);
        assert_eq!(state.team_score(Team::A).points, 1);
    }

    #[test]
    fn substitution_updates_roster_and_starter_flag() {
        let mut state = new_state();
        let jordan = id_of(&state, Team::A, "23");
        let kukoc = id_of(&state, Team::A, "7");

        assert_eq!(
            state.substitute(Team::A, Some(kukoc), None).unwrap_err(),
            RecordError::BlankSubstitution
        );

        let event = state
            .substitute(Team::A, Some(kukoc), Some(jordan))
            .unwrap()
            .clone();
        assert_eq!(
            event.kind,
            EventKind::Substitution {
                incoming: kukoc,
                outgoing: jordan
            }
        );
        assert!(!state.roster().contains(Team::A, jordan));
        assert!(state.roster().contains(Team::A, kukoc));
        assert!(!state.get_player(jordan).unwrap().is_starter);
        assert_eq!(
            state.event_detail(&event),
            "#23 Jordan off, #7 Kukoc on"
        );

        let bench: Vec<_> = state
            .roster()
            .bench(Team::A, state.players())
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(bench, vec![jordan]);
    }

    #[test]
    fn substitution_rejects_players_from_the_other_team() {
        let mut state = new_state();
        let jordan = id_of(&state, Team::A, "23");
        let worthy = id_of(&state, Team::B, "42");
        assert_eq!(
            state
                .substitute(Team::A, Some(worthy), Some(jordan))
                .unwrap_err(),
            RecordError::PlayerNotOnTeam {
                player: worthy,
                team: Team::A
            }
        );
        assert!(state.roster().contains(Team::A, jordan));
    }

    #[test]
    fn snapshot_restores_session() {
        let mut state = new_state();
        let jordan = id_of(&state, Team::A, "23");
        let kukoc = id_of(&state, Team::A, "7");
        state.start_quarter(1).unwrap();
        state.select_player(Team::A, jordan).unwrap();
        state
            .click_court(&CourtBounds::default(), 20.0, 30.0)
            .unwrap();
        state.record_score(Team::A, 3).unwrap();
        state.substitute(Team::A, Some(kukoc), Some(jordan)).unwrap();

        let snapshot = state.snapshot();
        let restored = GameState::new(
            state.match_id,
            roster(state.match_id)
                .into_iter()
                .zip(state.players())
                .map(|(mut fresh, old)| {
                    fresh.id = old.id;
                    fresh
                })
                .collect(),
            Some(snapshot),
        );

        assert_eq!(restored.events(), state.events());
        assert_eq!(restored.markers(), state.markers());
        assert_eq!(restored.quarters().current(), 1);
        assert_eq!(restored.team_score(Team::A).points, 3);
        assert!(!restored.get_player(jordan).unwrap().is_starter);
        assert!(restored.roster().contains(Team::A, kukoc));
        assert_eq!(restored.snapshot().next_event_id, 3);
    }

    #[test]
    fn reset_all_keeps_quarters() {
        let mut state = new_state();
        let magic = id_of(&state, Team::B, "32");
        state.start_quarter(1).unwrap();
        state.select_player(Team::B, magic).unwrap();
        state.record_misc(Team::B, MiscKind::Turnover).unwrap();
        state.reset_all();
        assert!(state.events().is_empty());
        assert_eq!(state.selected(Team::B), None);
        assert!(matches!(
            state.record_misc(Team::B, MiscKind::Turnover),
            Err(RecordError::NoPlayerSelected(Team::B))
        ));
        assert!(state.roster().active(Team::A).is_empty());
        assert_eq!(state.quarters().current(), 1);
        assert_eq!(state.snapshot().next_event_id, 1);
    }

    #[test]
    fn apply_resolves_jersey_numbers() {
        let mut state = new_state();
        let bounds = CourtBounds::default();
        let commands = [
            Command::StartQuarter(1),
            Command::Select {
                team: Team::A,
                number: "23".to_string(),
            },
            Command::Click { x: 40.0, y: 60.0 },
            Command::Score {
                team: Team::A,
                points: 3,
            },
        ];
        let outcomes: Vec<_> = commands
            .iter()
            .map(|c| state.apply(c, &bounds).unwrap())
            .collect();
        assert_eq!(outcomes[3], Outcome::Recorded(1));
        assert_eq!(state.team_score(Team::A).points, 3);

        let missing = Command::Select {
            team: Team::B,
            number: "99".to_string(),
        };
        assert!(matches!(
            state.apply(&missing, &bounds),
            Err(RecordError::UnknownNumber { .. })
        ));
    }

    proptest! {
        #[test]
        fn decrement_never_goes_below_zero(
            steps in proptest::collection::vec((any::<bool>(), 0u8..=3), 0..40)
        ) {
            let mut state = new_state();
            let jordan = id_of(&state, Team::A, "23");
            state.select_player(Team::A, jordan).unwrap();
            for (decrement, made) in steps {
                if decrement {
                    state.decrement_score(Team::A);
                } else {
                    let attempts = made.max(1).to_string();
                    state.record_free_throw(Team::A, &attempts, &made.to_string()).unwrap();
                }
                prop_assert!(state.tally().total_points(Team::A) >= 0);
            }
        }

        #[test]
        fn substitution_moves_players_between_court_and_bench(
            swaps in proptest::collection::vec((0usize..3, 0usize..3), 1..20)
        ) {
            let mut state = new_state();
            let team_a: Vec<Uuid> = state
                .players()
                .iter()
                .filter(|p| p.team == Team::A)
                .map(|p| p.id)
                .collect();
            for (i, o) in swaps {
                let (incoming, outgoing) = (team_a[i], team_a[o]);
                state.substitute(Team::A, Some(incoming), Some(outgoing)).unwrap();
                if incoming != outgoing {
                    prop_assert!(!state.roster().contains(Team::A, outgoing));
                    prop_assert!(state.roster().contains(Team::A, incoming));
                }
                prop_assert!(!state.get_player(outgoing).unwrap().is_starter);
            }
        }
    }
}
