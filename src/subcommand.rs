use super::*;

pub mod format;
pub mod powers;
pub mod settings_cmd;
pub mod suffixes;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
    #[command(about = "Scale magnitudes for display")]
    Format(format::Format),
    #[command(about = "Scale successive powers of a base")]
    Powers(powers::Powers),
    #[command(about = "Print resolved settings")]
    Settings(settings_cmd::SettingsCmd),
    #[command(about = "List metric and scientific suffixes")]
    Suffixes(suffixes::Suffixes),
}

impl Subcommand {
    pub(crate) fn run(self, settings: Settings) -> Result {
        match self {
            Self::Format(format) => format.run(settings),
            Self::Powers(powers) => powers.run(settings),
            Self::Settings(settings_cmd) => settings_cmd.run(settings),
            Self::Suffixes(suffixes) => suffixes.run(),
        }
    }
}
