use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hvac-harvest")]
#[command(about = "Collects HVAC tender links from listing pages into a spreadsheet")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file (sources, keywords, export path)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep only records whose source URL contains this text (case-insensitive)
    #[arg(short, long)]
    pub state: Option<String>,

    /// Keep only records extracted within this many days
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Override the export file (.xlsx or .csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Also write the run history as an HTML page
    #[arg(long)]
    pub history_html: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::parse_from([
            "hvac-harvest",
            "--config",
            "harvest.json",
            "--state",
            "sp",
            "--days",
            "7",
            "--output",
            "out.csv",
            "--timeout",
            "10",
            "--history-html",
            "historico.html",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("harvest.json")));
        assert_eq!(args.state.as_deref(), Some("sp"));
        assert_eq!(args.days, Some(7));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert_eq!(args.timeout, Some(10));
        assert_eq!(args.history_html, Some(PathBuf::from("historico.html")));
    }

    #[test]
    fn test_defaults_are_unset() {
        let args = Args::parse_from(["hvac-harvest"]);
        assert!(args.config.is_none());
        assert!(args.state.is_none());
        assert!(args.days.is_none());
    }

    #[test]
    fn test_negative_days_rejected() {
        assert!(Args::try_parse_from(["hvac-harvest", "--days", "-3"]).is_err());
    }
}
