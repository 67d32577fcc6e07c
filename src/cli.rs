use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Aggregate drawn for a season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChartKind {
    /// Goals by type (shot, penalty, own goal)
    #[default]
    Types,
    /// Players with the most goals
    Scorers,
    /// Goals credited to each team
    Teams,
    /// Histogram of goal minutes
    Minutes,
}

/// Returns true when the arguments only touch the configuration file
pub fn is_config_operation(args: &Args) -> bool {
    args.new_database_path.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Goal events from the European Soccer Database
///
/// Reads the `goal` XML stored with each match, turns it into goal records
/// (shots, penalties and own goals credited to the right team), looks up
/// player and team names, and draws simple terminal charts.
///
/// Examples:
/// - goalscope --match 489042
/// - goalscope --season 2015/2016 --league 1729 --chart scorers
/// - goalscope --xml-file goal.xml --home 10260 --away 10261 --json
#[derive(Parser, Debug, Default)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// List the goals of one match, identified by its match_api_id.
    #[arg(long = "match", short = 'm', value_name = "MATCH_ID", help_heading = "Queries")]
    pub match_id: Option<i64>,

    /// Extract goals from a goal XML file instead of the database.
    /// Use with --home and --away; without both no goals are reported.
    #[arg(long = "xml-file", short = 'x', value_name = "PATH", help_heading = "Queries")]
    pub xml_file: Option<String>,

    /// Home team id for --xml-file.
    #[arg(long = "home", value_name = "TEAM_ID", requires = "xml_file", help_heading = "Queries")]
    pub home_team_id: Option<String>,

    /// Away team id for --xml-file.
    #[arg(long = "away", value_name = "TEAM_ID", requires = "xml_file", help_heading = "Queries")]
    pub away_team_id: Option<String>,

    /// Aggregate all goals of a season, e.g. 2015/2016.
    #[arg(long = "season", short = 's', help_heading = "Queries")]
    pub season: Option<String>,

    /// Limit --season to one league.
    #[arg(long = "league", value_name = "LEAGUE_ID", requires = "season", help_heading = "Queries")]
    pub league_id: Option<i64>,

    /// Chart drawn for --season.
    #[arg(long = "chart", short = 'c', value_enum, default_value_t = ChartKind::Types, help_heading = "Display Options")]
    pub chart: ChartKind,

    /// Number of rows in scorer and team charts.
    #[arg(long = "limit", short = 'n', default_value_t = crate::constants::chart::DEFAULT_LIMIT, help_heading = "Display Options")]
    pub limit: usize,

    /// Sort the goal type chart by count instead of the fixed type order.
    #[arg(long = "order", help_heading = "Display Options")]
    pub order: bool,

    /// Leave out percentage annotations.
    #[arg(long = "no-percent", help_heading = "Display Options")]
    pub no_percent: bool,

    /// Print records or tallies as JSON instead of a chart.
    #[arg(long = "json", short = 'j', help_heading = "Display Options")]
    pub json: bool,

    /// Disable colours in the output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Use this database file for this run only.
    #[arg(long = "database", short = 'd', value_name = "PATH", help_heading = "Configuration")]
    pub database: Option<String>,

    /// Store the database path in config.
    #[arg(long = "set-database", value_name = "PATH", help_heading = "Configuration")]
    pub new_database_path: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_season_query() {
        let args = Args::try_parse_from([
            "goalscope",
            "--season",
            "2015/2016",
            "--league",
            "1729",
            "--chart",
            "scorers",
            "-n",
            "5",
        ])
        .unwrap();

        assert_eq!(args.season.as_deref(), Some("2015/2016"));
        assert_eq!(args.league_id, Some(1729));
        assert_eq!(args.chart, ChartKind::Scorers);
        assert_eq!(args.limit, 5);
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["goalscope", "--match", "489042"]).unwrap();
        assert_eq!(args.match_id, Some(489042));
        assert_eq!(args.chart, ChartKind::Types);
        assert_eq!(args.limit, crate::constants::chart::DEFAULT_LIMIT);
        assert!(!args.json && !args.plain && !args.order && !args.no_percent);
    }

    #[test]
    fn test_team_ids_require_xml_file() {
        assert!(Args::try_parse_from(["goalscope", "--home", "1"]).is_err());
        assert!(Args::try_parse_from(["goalscope", "--league", "1"]).is_err());

        let args = Args::try_parse_from([
            "goalscope", "-x", "goal.xml", "--home", "10260", "--away", "10261",
        ])
        .unwrap();
        assert_eq!(args.home_team_id.as_deref(), Some("10260"));
        assert_eq!(args.away_team_id.as_deref(), Some("10261"));
    }

    #[test]
    fn test_config_operations() {
        let args = Args::try_parse_from(["goalscope", "--set-database", "soccer.sqlite"]).unwrap();
        assert!(is_config_operation(&args));

        let args = Args::try_parse_from(["goalscope", "-l"]).unwrap();
        assert!(is_config_operation(&args));
    }
}
