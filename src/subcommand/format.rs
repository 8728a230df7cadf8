use super::*;

#[derive(Debug, Parser)]
pub struct Format {
    #[arg(
        allow_negative_numbers = true,
        help = "Scale <MAGNITUDE>. Read one magnitude per line from stdin if none are given."
    )]
    magnitudes: Vec<Magnitude>,
    #[arg(long, help = "Print scaled values as JSON.")]
    json: bool,
}

impl Format {
    pub fn run(self, settings: Settings) -> Result {
        let magnitudes = if self.magnitudes.is_empty() {
            read_magnitudes(io::stdin().lock())?
        } else {
            self.magnitudes
        };

        let scaled = magnitudes
            .iter()
            .map(Magnitude::scaled)
            .collect::<Vec<Scaled>>();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&scaled)?);
            return Ok(());
        }

        let render = settings.render();

        for scaled in &scaled {
            println!("{}", render.render(scaled));
        }

        Ok(())
    }
}

fn read_magnitudes(reader: impl BufRead) -> Result<Vec<Magnitude>> {
    let mut magnitudes = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.context("failed to read magnitudes from stdin")?;

        if line.trim().is_empty() {
            continue;
        }

        magnitudes.push(
            line.parse::<Magnitude>()
                .with_context(|| format!("invalid magnitude on line {}", i + 1))?,
        );
    }

    debug!("Read {} magnitudes from stdin", magnitudes.len());

    Ok(magnitudes)
}
