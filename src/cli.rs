#[derive(clap::Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Text prepended to every matching name
    #[arg(value_name("PREFIX"), allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Entries whose name ends with this text are renamed
    #[arg(value_name("SUFFIX"), allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

