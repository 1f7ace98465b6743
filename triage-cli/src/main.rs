use anyhow::Context;
use chrono::{DateTime, Timelike, Utc};
use clap::{Args, Parser, Subcommand};
use incident_core::dashboard::DashboardSummary;
use incident_core::filters::{format_time_ago, IncidentFilter};
use incident_core::model::{Incident, IncidentStatus, Severity};
use incident_core::triage::{analyze, AnalysisInput, AnalysisResult, WeatherData};
use incident_core::mock;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Score emergency reports and inspect the bundled incident dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scoring heuristic over a report and print the result as JSON
    Analyze(AnalyzeArgs),
    /// List bundled incidents through the incident filter
    Incidents {
        #[arg(long)]
        severity: Option<Severity>,
        #[arg(long)]
        status: Option<IncidentStatus>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print dashboard aggregates for the bundled dataset
    Summary,
    /// Walk through analyze, incidents and summary on sample data
    Demo,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[arg(long)]
    description: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long)]
    reporter: Option<String>,
    /// Wind speed in mph
    #[arg(long, env = "TRIAGE_WIND_SPEED")]
    wind_speed: Option<f64>,
    /// Precipitation in inches
    #[arg(long, env = "TRIAGE_PRECIPITATION")]
    precipitation: Option<f64>,
    /// Temperature in °F
    #[arg(long, env = "TRIAGE_TEMPERATURE")]
    temperature: Option<f64>,
    #[arg(long, env = "TRIAGE_HUMIDITY")]
    humidity: Option<f64>,
    #[arg(long, env = "TRIAGE_CONDITIONS")]
    conditions: Option<String>,
    /// Local hour 0-23; no time-of-day adjustment when omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hour: Option<u32>,
    /// People per square mile; no density adjustment when omitted
    #[arg(long, env = "TRIAGE_POPULATION")]
    population: Option<f64>,
}

impl AnalyzeArgs {
    /// Weather is attached only when at least one weather flag is given;
    /// unset fields then take the clear-day values.
    fn weather(&self) -> Option<WeatherData> {
        let given = self.wind_speed.is_some()
            || self.precipitation.is_some()
            || self.temperature.is_some()
            || self.humidity.is_some()
            || self.conditions.is_some();
        if !given {
            return None;
        }
        let base = WeatherData::clear_day();
        Some(WeatherData {
            temperature: self.temperature.unwrap_or(base.temperature),
            humidity: self.humidity.unwrap_or(base.humidity),
            wind_speed: self.wind_speed.unwrap_or(base.wind_speed),
            precipitation: self.precipitation.unwrap_or(base.precipitation),
            conditions: self.conditions.clone().unwrap_or(base.conditions),
        })
    }

    fn into_input(self) -> AnalysisInput {
        let weather = self.weather();
        AnalysisInput {
            description: self.description,
            location: self.location,
            reporter_info: self.reporter,
            weather,
            hour_of_day: self.hour,
            population_density: self.population,
        }
    }
}

fn run_analyze(input: &AnalysisInput) -> anyhow::Result<AnalysisResult> {
    if input.description.trim().is_empty() {
        anyhow::bail!("--description must not be blank");
    }
    let result = analyze(input);
    log::info!(
        "scored {:?} at {} (priority {})",
        result.category,
        result.emergency_score,
        result.priority_level
    );
    Ok(result)
}

fn incident_line(incident: &Incident, now: DateTime<Utc>) -> String {
    format!(
        "{:<7} {:<9} {:<11} {:>3}  {} | {} ({})",
        incident.id,
        incident.severity.label(),
        incident.status.label(),
        incident.ai_analysis.emergency_score,
        incident.kind,
        incident.short_location(),
        format_time_ago(incident.timestamp, now),
    )
}

fn list_incidents(filter: &IncidentFilter, now: DateTime<Utc>) -> Vec<String> {
    let incidents = mock::incidents(now);
    let matched = filter.apply(&incidents);
    log::debug!("{} of {} incidents matched", matched.len(), incidents.len());
    matched.into_iter().map(|i| incident_line(i, now)).collect()
}

fn print_incidents(filter: &IncidentFilter, now: DateTime<Utc>) {
    let lines = list_incidents(filter, now);
    if lines.is_empty() {
        println!("No incidents found matching your criteria.");
        return;
    }
    for line in lines {
        println!("{line}");
    }
}

fn summary(now: DateTime<Utc>) -> DashboardSummary {
    DashboardSummary::from_dataset(&mock::incidents(now), &mock::response_teams(), now)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to encode output as JSON")?;
    println!("{out}");
    Ok(())
}

fn demo(now: DateTime<Utc>) -> anyhow::Result<()> {
    println!("== analyze ==");
    let sample = AnalysisInput {
        description: "Critical fire on the 3rd floor, people trapped, smoke spreading".into(),
        location: "Downtown Plaza, Main St".into(),
        reporter_info: None,
        weather: Some(WeatherData::clear_day()),
        hour_of_day: Some(now.hour()),
        population_density: Some(1500.0),
    };
    print_json(&run_analyze(&sample)?)?;

    println!("\n== incidents (critical) ==");
    print_incidents(&IncidentFilter::from_selections("critical", "all", ""), now);

    println!("\n== summary ==");
    print_json(&summary(now))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let now = Utc::now();

    match cli.command {
        Commands::Analyze(args) => {
            let result = run_analyze(&args.into_input())?;
            print_json(&result)?;
        }
        Commands::Incidents {
            severity,
            status,
            search,
        } => {
            let filter = IncidentFilter {
                severity,
                status,
                search,
            };
            print_incidents(&filter, now);
        }
        Commands::Summary => print_json(&summary(now))?,
        Commands::Demo => demo(now)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    fn parse_analyze(args: &[&str]) -> AnalysisInput {
        let argv = ["triage", "analyze"].iter().chain(args.iter()).copied();
        let cli = Cli::try_parse_from(argv).expect("parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        args.into_input()
    }

    #[test]
    fn analyze_flags_build_weather_and_hour() {
        let input = parse_analyze(&[
            "--description",
            "flood water rising",
            "--precipitation",
            "2.5",
            "--hour",
            "23",
        ]);
        assert_eq!(input.hour_of_day, Some(23));
        let weather = input.weather.expect("weather");
        assert_eq!(weather.precipitation, 2.5);
        assert_eq!(weather.wind_speed, 12.0);
        assert_eq!(weather.conditions, "Clear");
        assert_eq!(input.population_density, None);
    }

    #[test]
    fn bare_description_scores_without_context() {
        let input = parse_analyze(&["--description", "critical fire"]);
        assert_eq!(input.weather, None);
        assert_eq!(input.hour_of_day, None);
        assert_eq!(input.population_density, None);

        let result = run_analyze(&input).expect("analyze");
        assert_eq!(result.emergency_score, 90);
        assert_eq!(result.priority_level, 1);
        assert_eq!(run_analyze(&input).expect("analyze"), result);
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        let parsed = Cli::try_parse_from([
            "triage",
            "analyze",
            "--description",
            "x",
            "--hour",
            "24",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn blank_description_is_an_error() {
        let input = AnalysisInput {
            description: "   ".into(),
            ..Default::default()
        };
        let err = run_analyze(&input).expect_err("blank description");
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn severity_and_status_parse_from_flags() {
        let cli = Cli::try_parse_from([
            "triage",
            "incidents",
            "--severity",
            "critical",
            "--status",
            "active",
        ])
        .expect("parse");
        let Commands::Incidents { severity, status, .. } = cli.command else {
            panic!("expected incidents");
        };
        assert_eq!(severity, Some(Severity::Critical));
        assert_eq!(status, Some(IncidentStatus::Active));

        assert!(Cli::try_parse_from(["triage", "incidents", "--severity", "extreme"]).is_err());
    }

    #[test]
    fn incident_listing_applies_filter() {
        let now = Utc::now();
        let all = list_incidents(&IncidentFilter::default(), now);
        assert_eq!(all.len(), mock::incidents(now).len());

        let none = list_incidents(
            &IncidentFilter {
                search: "no such incident anywhere".into(),
                ..Default::default()
            },
            now,
        );
        assert!(none.is_empty());
    }

    #[test]
    fn summary_matches_dataset() {
        let s = summary(Utc::now());
        assert_eq!(s.response_teams, mock::response_teams().len());
        assert!(s.available_teams <= s.response_teams);
    }
}
