use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "perfect-cv")]
#[command(about = "Perfect CV Match: ATS resume scoring competition client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register (or log back in) as a participant
    Register {
        /// Full name (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Email (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Mobile number (prompted when omitted)
        #[arg(short, long)]
        mobile: Option<String>,
    },

    /// Submit a PDF resume against a job description
    Submit {
        /// Resume file (PDF, max 20MB)
        #[arg(required = true)]
        resume: PathBuf,

        #[command(flatten)]
        job_description: JobDescriptionArgs,

        /// Required education, e.g. "B.Tech in Computer Science"
        #[arg(long, default_value = "")]
        education: String,

        /// Print the score result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how many of the 5 uploads are used
    Count,

    /// Show my past scores
    Scores {
        #[arg(long)]
        json: bool,
    },

    /// Show the global leaderboard
    Leaderboard {
        #[arg(long)]
        json: bool,
    },

    /// Show competition statistics
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Check whether the backend is up
    Health,

    /// Show the active session
    Status,

    /// Clear the active session
    Logout,

    /// Show or edit settings
    Config {
        /// Backend base URL
        #[arg(long)]
        set_base_url: Option<String>,

        /// Backend API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobDescriptionArgs {
    /// Job description text (min 50 characters)
    #[arg(short, long)]
    pub job_description: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    pub job_description_file: Option<PathBuf>,
}

impl JobDescriptionArgs {
    pub fn resolve(&self) -> std::io::Result<String> {
        match (&self.job_description, &self.job_description_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path),
            (None, None) => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_with_text() {
        let cli = Cli::try_parse_from([
            "perfect-cv",
            "submit",
            "cv.pdf",
            "--job-description",
            "Rust engineer",
        ])
        .unwrap();
        match cli.command {
            Commands::Submit { resume, job_description, education, json } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(job_description.resolve().unwrap(), "Rust engineer");
                assert_eq!(education, "");
                assert!(!json);
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_parse_submit_requires_job_description() {
        assert!(Cli::try_parse_from(["perfect-cv", "submit", "cv.pdf"]).is_err());
    }

    #[test]
    fn test_parse_submit_rejects_both_sources() {
        assert!(Cli::try_parse_from([
            "perfect-cv",
            "submit",
            "cv.pdf",
            "-j",
            "text",
            "--job-description-file",
            "jd.txt",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_register_global_verbose() {
        let cli = Cli::try_parse_from(["perfect-cv", "register", "-n", "Ada", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Register { name: Some(_), email: None, .. }));
    }

    #[test]
    fn test_count_help_describes_upload_usage() {
        use clap::CommandFactory;

        let cli = Cli::try_parse_from(["perfect-cv", "count"]).unwrap();
        assert!(matches!(cli.command, Commands::Count));

        let about = Cli::command()
            .find_subcommand("count")
            .and_then(|c| c.get_about())
            .map(|a| a.to_string());
        assert_eq!(about.as_deref(), Some("Show how many of the 5 uploads are used"));
    }
}
