use crate::charts::{BarChart, Chart, Histogram, HorizontalBarChart};
use crate::cli::{Args, ChartKind};
use crate::config::Config;
use crate::database::{MatchRepository, NameDirectory, NameLookup, Named, names::parse_identifier};
use crate::display::{GoalLine, final_score, format_goal_lines, format_match_header};
use crate::error::AppError;
use crate::goal_events::{GoalRecord, extract_goals};
use crate::stats::{self, Tally};
use serde::Serialize;
use tracing::{debug, info};

/// Validates command line argument combinations.
///
/// Exactly one of `--match`, `--xml-file` and `--season` must be given.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    let queries = [
        args.match_id.is_some(),
        args.xml_file.is_some(),
        args.season.is_some(),
    ]
    .iter()
    .filter(|given| **given)
    .count();

    match queries {
        0 => Err(AppError::config_error(
            "Nothing to do: use --match, --xml-file or --season (see --help)",
        )),
        1 => Ok(()),
        _ => Err(AppError::config_error(
            "Use only one of --match (-m), --xml-file (-x) and --season (-s)",
        )),
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-database, --set-log-file, --clear-log-file).
///
/// Starts from the stored config, or defaults when there is none yet.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_or_default(&Config::get_config_path()).await?;

    if let Some(new_database_path) = &args.new_database_path {
        config.database_path = new_database_path.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles --match: goals of one match with player and team names.
pub async fn handle_match_command(args: &Args, config: &Config, match_id: i64) -> Result<(), AppError> {
    let repository = MatchRepository::connect(&database_path(args, config)).await?;
    let directory = NameDirectory::new(repository.pool().clone());

    let row = repository.fetch_match(match_id).await?;
    let goals = row.goals()?;
    info!("Match {match_id}: {} goals", goals.len());

    let lines = name_goal_lines(&directory, goals.clone()).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    let home_id = row.home_team_api_id.map(|id| id.to_string()).unwrap_or_default();
    let away_id = row.away_team_api_id.map(|id| id.to_string()).unwrap_or_default();
    let team_ids: Vec<i64> = [row.home_team_api_id, row.away_team_api_id]
        .into_iter()
        .flatten()
        .collect();
    let team_names = directory.names(NameLookup::Team, &team_ids).await?;
    let team_label = |id: Option<i64>, raw: &str| {
        id.and_then(|id| team_names.get(&id).cloned())
            .unwrap_or_else(|| if raw.is_empty() { "?".to_string() } else { raw.to_string() })
    };

    println!(
        "{}",
        format_match_header(
            &team_label(row.home_team_api_id, &home_id),
            &team_label(row.away_team_api_id, &away_id),
            final_score(&goals, &home_id, &away_id),
            &row.display_date(),
            args.plain,
        )
    );
    println!();
    println!("{}", format_goal_lines(&lines, args.plain));

    Ok(())
}

/// Handles --xml-file: offline extraction from a goal XML file.
pub async fn handle_xml_file_command(args: &Args, path: &str) -> Result<(), AppError> {
    let document = tokio::fs::read_to_string(path).await?;
    if args.home_team_id.is_none() || args.away_team_id.is_none() {
        info!("No --home/--away given for {path}, goals cannot be attributed");
    }

    let goals = extract_goals(
        Some(&document),
        args.home_team_id.as_deref(),
        args.away_team_id.as_deref(),
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&goals)?);
    } else {
        let lines: Vec<GoalLine> = goals.into_iter().map(GoalLine::unnamed).collect();
        println!("{}", format_goal_lines(&lines, args.plain));
    }

    Ok(())
}

/// Handles --season: aggregates every goal of a season into the requested chart.
pub async fn handle_season_command(args: &Args, config: &Config, season: &str) -> Result<(), AppError> {
    let repository = MatchRepository::connect(&database_path(args, config)).await?;
    let directory = NameDirectory::new(repository.pool().clone());

    let goals = repository.goals_for_season(season, args.league_id).await?;
    let output = season_report(&goals, args, config.chart_width, &directory, season).await?;
    println!("{output}");

    Ok(())
}

/// Renders the `--chart` aggregate of `goals`, or its tallies as JSON with `--json`.
pub async fn season_report(
    goals: &[GoalRecord],
    args: &Args,
    chart_width: usize,
    directory: &NameDirectory,
    season: &str,
) -> Result<String, AppError> {
    match args.chart {
        ChartKind::Types => {
            let tallies = stats::count_by_type(goals);
            if args.json {
                return to_json(&tallies);
            }
            let rows = tallies
                .iter()
                .map(|t| (t.key.to_string(), t.count as f64))
                .collect();
            Ok(BarChart::new(rows)
                .with_title(format!("Goals by type, {season}"))
                .ordered(args.order)
                .with_percent(!args.no_percent)
                .render(args.plain))
        }
        ChartKind::Scorers => {
            let tallies = stats::top_scorers(goals, args.limit);
            let named = directory.append_player_names(tallies).await?;
            if args.json {
                return to_json(&named);
            }
            Ok(HorizontalBarChart::new(named_rows(named))
                .with_title(format!("Top scorers, {season}"))
                .ordered(true)
                .with_width(chart_width)
                .render(args.plain))
        }
        ChartKind::Teams => {
            let mut tallies = stats::goals_per_team(goals);
            tallies.truncate(args.limit);
            let named = directory.append_team_names(tallies).await?;
            if args.json {
                return to_json(&named);
            }
            Ok(HorizontalBarChart::new(named_rows(named))
                .with_title(format!("Goals per team, {season}"))
                .ordered(true)
                .with_width(chart_width)
                .render(args.plain))
        }
        ChartKind::Minutes => {
            let minutes = stats::goal_minutes(goals);
            if args.json {
                return to_json(&minutes);
            }
            Ok(Histogram::from_values(&minutes)
                .with_title(format!("Goal minutes, {season}"))
                .render(args.plain))
        }
    }
}

/// Resolves scorer and team names for a goal list.
///
/// Ids that are missing or not integers are left unnamed instead of failing
/// the whole listing; own goals never get a player name.
pub async fn name_goal_lines(
    directory: &NameDirectory,
    goals: Vec<GoalRecord>,
) -> Result<Vec<GoalLine>, AppError> {
    let player_ids: Vec<i64> = goals
        .iter()
        .filter_map(|goal| parse_identifier(NameLookup::Player, goal.scorer_id()).ok())
        .collect();
    let team_ids: Vec<i64> = goals
        .iter()
        .filter_map(|goal| parse_identifier(NameLookup::Team, goal.team_id.as_deref()).ok())
        .collect();

    let players = directory.names(NameLookup::Player, &player_ids).await?;
    let teams = directory.names(NameLookup::Team, &team_ids).await?;
    debug!(
        "Named {} players and {} teams for {} goals",
        players.len(),
        teams.len(),
        goals.len()
    );

    Ok(goals
        .into_iter()
        .map(|goal| {
            let player_name = parse_identifier(NameLookup::Player, goal.scorer_id())
                .ok()
                .and_then(|id| players.get(&id).cloned());
            let team_name = parse_identifier(NameLookup::Team, goal.team_id.as_deref())
                .ok()
                .and_then(|id| teams.get(&id).cloned());
            GoalLine {
                goal,
                player_name,
                team_name,
            }
        })
        .collect())
}

fn database_path(args: &Args, config: &Config) -> String {
    args.database
        .clone()
        .unwrap_or_else(|| config.database_path.clone())
}

/// Chart rows labelled with the looked up name, or the raw id when unknown
fn named_rows(named: Vec<Named<Tally<String>>>) -> Vec<(String, f64)> {
    named
        .into_iter()
        .map(|n| (n.name.unwrap_or(n.row.key), n.row.count as f64))
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
