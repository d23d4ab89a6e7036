use crate::error::{Result, WatchError};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "watchfd", version, about = "Raise a desktop notification for every change to a file")]
pub struct Cli {
    /// File or directory to watch
    pub path: OsString,

    /// TOML file with notification and watch settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses `args` (program name first). `--help` and `--version`
    /// print and exit here; every other parse failure is a usage error.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => WatchError::Usage(e.render().to_string().trim_end().to_string()),
        })
    }
}
