//! Interactive session over stdin.

use anyhow::{Context, Result, bail};
use core_types::{Bound, ChoiceField, FlagField, RangeField};
use match_state::{MatchingGateway, Session};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::table;

const HELP: &str = "\
Commands:
  invest <amount>                      set the investment amount
  range <field> <min|max> <value>      set one bound of a range preference
  choose <field> [value]               set a dropdown preference
  flag <field> <true|false>            set a yes/no preference
  submit                               send preferences to the matching service
  reset                                clear preferences and restore fetched projects
  sort                                 toggle the yield sort order
  show                                 print the table
  prefs                                print the pending preferences
  help                                 show this help
  quit                                 leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Invest(String),
    Range(RangeField, Bound, String),
    Choose(ChoiceField, String),
    Flag(FlagField, bool),
    Submit,
    Reset,
    Sort,
    Show,
    Prefs,
    Help,
    Quit,
}

/// Parse a non-empty shell line.
pub fn parse_command(line: &str) -> Result<ShellCommand> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        bail!("empty command");
    };

    let command = match verb {
        "invest" => ShellCommand::Invest(words.collect::<Vec<_>>().join(" ")),
        "range" => {
            let field = words.next().context("missing range field")?.parse()?;
            let bound = words.next().context("missing bound (min or max)")?.parse()?;
            ShellCommand::Range(field, bound, words.collect::<Vec<_>>().join(" "))
        }
        "choose" => {
            let field = words.next().context("missing choice field")?.parse()?;
            ShellCommand::Choose(field, words.collect::<Vec<_>>().join(" "))
        }
        "flag" => {
            let field = words.next().context("missing flag field")?.parse()?;
            let value = words
                .next()
                .context("missing flag value")?
                .parse()
                .context("flag value must be true or false")?;
            ShellCommand::Flag(field, value)
        }
        "submit" => ShellCommand::Submit,
        "reset" => ShellCommand::Reset,
        "sort" => ShellCommand::Sort,
        "show" => ShellCommand::Show,
        "prefs" => ShellCommand::Prefs,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail!("unknown command: {other} (try `help`)"),
    };

    Ok(command)
}

/// Apply a command to the session. Returns false when the shell should
/// stop.
pub async fn apply<G: MatchingGateway>(session: &mut Session<G>, command: ShellCommand) -> bool {
    match command {
        ShellCommand::Invest(raw) => session.dashboard_mut().set_investment_input(&raw),
        ShellCommand::Range(field, bound, raw) => {
            session.preferences_mut().set_range_input(field, bound, &raw)
        }
        ShellCommand::Choose(field, value) => session.preferences_mut().set_choice(field, value),
        ShellCommand::Flag(field, value) => session.preferences_mut().set_flag(field, value),
        ShellCommand::Submit => {
            session.submit_preferences().await;
        }
        ShellCommand::Reset => session.reset_preferences(),
        ShellCommand::Sort => {
            session.dashboard_mut().toggle_sort();
        }
        ShellCommand::Show => print!("{}", table::render(session.dashboard())),
        ShellCommand::Prefs => println!("{:#?}", session.preferences().preferences()),
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => return false,
    }
    true
}

/// Run the shell until `quit` or end of input.
pub async fn run<G: MatchingGateway>(mut session: Session<G>) -> Result<()> {
    session
        .dashboard_mut()
        .subscribe(|dashboard| print!("{}", table::render(dashboard)));

    session.load_projects().await;
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if !apply(&mut session, command).await {
                    break;
                }
            }
            Err(e) => warn!("{e:#}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Preferences, Project, Range};

    struct StaticGateway;

    impl MatchingGateway for StaticGateway {
        type Error = String;

        async fn fetch_projects(&self) -> Result<Vec<Project>, String> {
            Ok(vec![
                Project::new("Reforestation", 5.0, 10.0),
                Project::new("Methane Capture", 8.0, 10.0),
            ])
        }

        async fn match_projects(&self, criteria: &Preferences) -> Result<Vec<Project>, String> {
            match criteria.risk_profile.as_deref() {
                Some("High") => Ok(vec![Project::new("Methane Capture", 8.0, 10.0)]),
                _ => Err("no match".to_string()),
            }
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("submit").unwrap(), ShellCommand::Submit);
        assert_eq!(parse_command("  sort ").unwrap(), ShellCommand::Sort);
        assert_eq!(parse_command("exit").unwrap(), ShellCommand::Quit);
        assert_eq!(
            parse_command("invest 100000").unwrap(),
            ShellCommand::Invest("100000".to_string())
        );
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_command("range projectLifespan max 30").unwrap(),
            ShellCommand::Range(RangeField::ProjectLifespan, Bound::Max, "30".to_string())
        );
        assert!(parse_command("range lifespan max 30").is_err());
        assert!(parse_command("range projectLifespan middle 30").is_err());
    }

    #[test]
    fn test_parse_choice_keeps_spaces() {
        assert_eq!(
            parse_command("choose projectType Direct Air Capture").unwrap(),
            ShellCommand::Choose(ChoiceField::ProjectType, "Direct Air Capture".to_string())
        );
        assert_eq!(
            parse_command("choose riskProfile").unwrap(),
            ShellCommand::Choose(ChoiceField::RiskProfile, String::new())
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(
            parse_command("flag scalability true").unwrap(),
            ShellCommand::Flag(FlagField::Scalability, true)
        );
        assert!(parse_command("flag scalability maybe").is_err());
        assert!(parse_command("flag").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_command("dance").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }

    #[tokio::test]
    async fn test_apply_drives_session() {
        let mut session = Session::new(StaticGateway);
        session.load_projects().await;

        assert!(apply(&mut session, ShellCommand::Invest("100000".to_string())).await);
        assert_eq!(session.dashboard().rows()[0].yield_value, Some(16289));

        apply(
            &mut session,
            ShellCommand::Range(RangeField::FinancialReturns, Bound::Min, "4".to_string()),
        )
        .await;
        apply(
            &mut session,
            ShellCommand::Choose(ChoiceField::RiskProfile, "High".to_string()),
        )
        .await;
        assert_eq!(
            session.preferences().preferences().financial_returns,
            Some(Range::only(Bound::Min, 4.0))
        );

        apply(&mut session, ShellCommand::Submit).await;
        assert_eq!(session.dashboard().rows().len(), 1);

        apply(&mut session, ShellCommand::Reset).await;
        assert_eq!(session.dashboard().rows().len(), 2);
        assert!(session.preferences().preferences().is_empty());

        assert!(!apply(&mut session, ShellCommand::Quit).await);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_rows() {
        let mut session = Session::new(StaticGateway);
        session.load_projects().await;

        apply(&mut session, ShellCommand::Submit).await;

        assert_eq!(session.dashboard().rows().len(), 2);
    }
}
