use super::*;

#[derive(Debug, Parser)]
pub struct SettingsCmd;

impl SettingsCmd {
    pub fn run(self, settings: Settings) -> Result {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        Ok(())
    }
}
