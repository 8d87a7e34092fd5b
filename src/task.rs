use crate::Cli;

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// `usage` is set when an argument is missing or empty
    Help { usage: bool },
    Rename { prefix: String, suffix: String },
}

impl From<&Cli> for Task {
    fn from(cli: &Cli) -> Self {
        let args = [cli.prefix.as_deref(), cli.suffix.as_deref()];
        let usage = args.iter().any(|x| matches!(x, None | Some("")));
        let help = args
            .iter()
            .flatten()
            .any(|x| HELP_FLAGS.contains(x));

        match (&cli.prefix, &cli.suffix) {
            (Some(prefix), Some(suffix)) if !usage && !help => Self::Rename {
                prefix: prefix.clone(),
                suffix: suffix.clone(),
            },
            _ => Self::Help { usage },
        }
    }
}
