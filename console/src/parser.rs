use itertools::Itertools;
use regex::{Captures, Regex};
use types::{ClockAction, Command, MiscKind, Team};

pub const HELP: &str = "\
commands (team is a or b):
  select <team> <number>          choose the acting player
  click <x> <y>                   mark a court position
  score <team> <1-3>              field goal at the marked position
  ft <team> <attempts> <made>     free throws
  <event> <team>                  one of: block turnover steal assist dfoul ofoul tfoul fouled dreb oreb timeout
  dec <team>                      take one point back
  sub <team> <in> <out>           substitution by jersey numbers
  quarter start|complete <1-4>
  clock start|pause|reset
  reset all | sheet | log | quit";

type Build = for<'a, 'b> fn(&'a Captures<'b>) -> Result<Command, String>;

/// Line-oriented command grammar shared by the console and script operators.
pub struct CommandParser {
    rules: Vec<(Regex, Build)>,
}

impl std::fmt::Debug for CommandParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|(re, _)| re.as_str()))
            .finish()
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

fn rule(pattern: &str, build: Build) -> (Regex, Build) {
    (
        Regex::new(&format!(r"^\s*{pattern}\s*$")).expect("Valid command regex"),
        build,
    )
}

impl CommandParser {
    pub fn new() -> Self {
        let misc = MiscKind::ALL.iter().map(|k| k.keyword()).join("|");
        Self {
            rules: vec![
                rule(r"(?:select|sel) (?<team>[ab]) #?(?<number>\S+)", select_from_captures),
                rule(r"click (?<x>[-\d.]+)[,\s]\s*(?<y>[-\d.]+)", click_from_captures),
                rule(r"score (?<team>[ab]) \+?(?<points>\d+)", score_from_captures),
                rule(
                    r"(?:ft|free) (?<team>[ab]) (?<attempts>\S+) (?<made>\S+)",
                    free_throw_from_captures,
                ),
                rule(&format!(r"(?<kind>{misc}) (?<team>[ab])"), misc_from_captures),
                rule(r"(?:dec|decrement) (?<team>[ab])", decrement_from_captures),
                rule(
                    r"(?:sub|substitute) (?<team>[ab]) #?(?<incoming>\S+) (?:for )?#?(?<outgoing>\S+)",
                    substitute_from_captures,
                ),
                rule(
                    r"(?:quarter|q) (?<action>start|complete|end) (?<id>\d+)",
                    quarter_from_captures,
                ),
                rule(r"clock (?<action>start|pause|stop|reset)", clock_from_captures),
                rule(r"reset all", |_| Ok(Command::ResetAll)),
                rule(r"sheet", |_| Ok(Command::ShowSheet)),
                rule(r"log", |_| Ok(Command::ShowLog)),
                rule(r"quit|exit", |_| Ok(Command::Quit)),
            ],
        }
    }

    pub fn parse(&self, input: &str) -> Result<Command, String> {
        let input = input.to_lowercase();
        for (re, build) in &self.rules {
            if let Some(caps) = re.captures(&input) {
                log::debug!("Captured: {caps:?}");
                return build(&caps);
            }
        }
        Err(format!("Unable to parse a command from: {:?}", input.trim()))
    }
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> Result<&'a str, String> {
    caps.name(name)
        .map(|m| m.as_str())
        .ok_or_else(|| format!("missing {name}"))
}

fn team(caps: &Captures) -> Result<Team, String> {
    group(caps, "team")?.parse()
}

fn select_from_captures(caps: &Captures) -> Result<Command, String> {
    Ok(Command::Select {
        team: team(caps)?,
        number: group(caps, "number")?.to_string(),
    })
}

fn click_from_captures(caps: &Captures) -> Result<Command, String> {
    let coordinate = |name: &str| -> Result<f64, String> {
        let raw = group(caps, name)?;
        raw.parse()
            .map_err(|_| format!("{name} coordinate {raw:?} is not a number"))
    };
    Ok(Command::Click {
        x: coordinate("x")?,
        y: coordinate("y")?,
    })
}

fn score_from_captures(caps: &Captures) -> Result<Command, String> {
    let raw = group(caps, "points")?;
    let points = raw
        .parse()
        .map_err(|_| format!("points {raw:?} is not a number"))?;
    Ok(Command::Score {
        team: team(caps)?,
        points,
    })
}

fn free_throw_from_captures(caps: &Captures) -> Result<Command, String> {
    Ok(Command::FreeThrow {
        team: team(caps)?,
        attempts: group(caps, "attempts")?.to_string(),
        made: group(caps, "made")?.to_string(),
    })
}

fn misc_from_captures(caps: &Captures) -> Result<Command, String> {
    Ok(Command::Misc {
        team: team(caps)?,
        kind: group(caps, "kind")?.parse()?,
    })
}

fn decrement_from_captures(caps: &Captures) -> Result<Command, String> {
    Ok(Command::Decrement { team: team(caps)? })
}

fn substitute_from_captures(caps: &Captures) -> Result<Command, String> {
    Ok(Command::Substitute {
        team: team(caps)?,
        incoming: group(caps, "incoming")?.to_string(),
        outgoing: group(caps, "outgoing")?.to_string(),
    })
}

fn quarter_from_captures(caps: &Captures) -> Result<Command, String> {
    let raw = group(caps, "id")?;
    let id = raw
        .parse()
        .map_err(|_| format!("quarter {raw:?} is not a number"))?;
    match group(caps, "action")? {
        "start" => Ok(Command::StartQuarter(id)),
        _ => Ok(Command::CompleteQuarter(id)),
    }
}

fn clock_from_captures(caps: &Captures) -> Result<Command, String> {
    let action = match group(caps, "action")? {
        "start" => ClockAction::Start,
        "reset" => ClockAction::Reset,
        _ => ClockAction::Pause,
    };
    Ok(Command::Clock(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Command, String> {
        CommandParser::new().parse(input)
    }

    #[test]
    fn parses_recording_commands() {
        assert_eq!(
            parse("select A 23"),
            Ok(Command::Select {
                team: Team::A,
                number: "23".to_string()
            })
        );
        assert_eq!(parse("click 50, 42.5"), Ok(Command::Click { x: 50.0, y: 42.5 }));
        assert_eq!(
            parse("score b 3"),
            Ok(Command::Score {
                team: Team::B,
                points: 3
            })
        );
        assert_eq!(
            parse("ft a 2 1"),
            Ok(Command::FreeThrow {
                team: Team::A,
                attempts: "2".to_string(),
                made: "1".to_string()
            })
        );
        assert_eq!(
            parse("  DFOUL b "),
            Ok(Command::Misc {
                team: Team::B,
                kind: MiscKind::DefensiveFoul
            })
        );
        assert_eq!(
            parse("sub a 7 for 23"),
            Ok(Command::Substitute {
                team: Team::A,
                incoming: "7".to_string(),
                outgoing: "23".to_string()
            })
        );
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!(parse("quarter start 2"), Ok(Command::StartQuarter(2)));
        assert_eq!(parse("q end 4"), Ok(Command::CompleteQuarter(4)));
        assert_eq!(parse("clock stop"), Ok(Command::Clock(ClockAction::Pause)));
        assert_eq!(parse("dec b"), Ok(Command::Decrement { team: Team::B }));
        assert_eq!(parse("reset all"), Ok(Command::ResetAll));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn free_throw_counts_are_validated_later() {
        // Non-numeric counts parse; the recorder rejects them.
        assert!(matches!(
            parse("ft a two 1"),
            Ok(Command::FreeThrow { .. })
        ));
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse("dunk a").is_err());
        assert!(parse("score c 2").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn every_misc_keyword_round_trips() {
        for kind in MiscKind::ALL {
            let line = format!("{} a", kind.keyword());
            assert_eq!(
                parse(&line),
                Ok(Command::Misc {
                    team: Team::A,
                    kind
                })
            );
        }
    }
}
