use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "weorcanjan")]
#[command(about = "Save and restore sessions of running applications")]
#[command(
    long_about = "Save and restore sessions of running applications.\n\n\
                  Only the executable of each application is recorded. Programs that \
                  spawn helpers with generated arguments (browsers, for example) are \
                  relaunched from their main executable only."
)]
pub struct Args {
    #[arg(
        help = "Action to perform: save (s), restore (r), open-data-dir (odd), \
                create-test-session (cts), restore-test-session (rts), \
                test-merge-user-ignore (tmui), guard-win-ver (gwv)"
    )]
    pub action: String,

    #[arg(short = 'n', long = "name", help = "Session name, required by save and restore")]
    pub session_name: Option<String>,

    #[arg(
        long = "myignore",
        value_name = "FILENAME",
        help = "User ignore list in the sessions directory (default: my_ignore.txt, -mi)"
    )]
    pub myignore: Option<String>,

    #[arg(long, help = "Print diagnostic information")]
    pub debug: bool,

    #[arg(
        long = "allow-win11",
        help = "Accept Windows 11 as a tested release (-aw11)"
    )]
    pub allow_win11: bool,
}

/// Single-dash spellings clap cannot express as short flags.
const LEGACY_FLAGS: &[(&str, &str)] = &[("-mi", "--myignore"), ("-aw11", "--allow-win11")];

/// Rewrites multi-letter single-dash flags to their long form.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| arg == *legacy)
                .map(|(_, long)| OsString::from(*long))
                .unwrap_or(arg)
        })
        .collect()
}

pub fn parse_args() -> Args {
    Args::parse_from(normalize_legacy_flags(std::env::args_os()))
}
