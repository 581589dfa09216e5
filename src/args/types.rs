use clap::Parser;

use crate::model::{CourseInfo, SessionCredentials};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Player names in entry order. Repeat the flag or separate with commas.
    #[arg(
        short = 'p',
        long = "player",
        value_name = "PLAYER",
        value_delimiter = ',',
        required = true
    )]
    pub players: Vec<String>,
    /// Course card for the chosen tee, as json:
    /// {"name": .., "tee_color": .., "par": [18 ints], "yardage": [18 ints]}
    #[arg(
        short = 'c',
        long,
        value_name = "COURSE_JSON",
        value_parser = crate::args::validation::check_readable_course_file
    )]
    pub course: CourseInfo,
    #[arg(short = 's', long, value_name = "SESSION_NAME")]
    pub session_name: String,
    #[arg(short = 'w', long, value_name = "SESSION_PASSWORD")]
    pub session_password: String,
    /// Create the session before joining it.
    #[arg(long)]
    pub create_session: bool,
    /// Base url of the shared session service.
    #[arg(
        short = 'r',
        long,
        value_name = "REMOTE_URL",
        default_value = "http://127.0.0.1:8080"
    )]
    pub remote_url: String,
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0:8081")]
    pub bind: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub players: Vec<String>,
    pub course: CourseInfo,
    pub credentials: SessionCredentials,
    pub create_session: bool,
    pub remote_url: String,
    pub bind: String,
}
