use super::*;

const MAX_POWER: u32 = 100_000;

#[derive(Debug, Parser)]
pub struct Powers {
    #[arg(long, default_value = "10", help = "Raise <BASE> to each power.")]
    base: Magnitude,
    #[arg(long, default_value_t = 0, help = "Start at power <FROM>.")]
    from: u32,
    #[arg(long, default_value_t = 30, help = "Stop after power <TO>.")]
    to: u32,
}

impl Powers {
    pub fn run(self, settings: Settings) -> Result {
        let render = settings.render();

        for line in self.lines(&render)? {
            println!("{line}");
        }

        Ok(())
    }

    fn lines(&self, render: &Render) -> Result<Vec<String>> {
        ensure!(
            self.from <= self.to,
            "--from {} is greater than --to {}",
            self.from,
            self.to
        );
        ensure!(
            self.to <= MAX_POWER,
            "--to {} exceeds maximum of {MAX_POWER}",
            self.to
        );

        Ok((self.from..=self.to)
            .map(|power| {
                let scaled = self.base.pow(power).scaled();
                format!("{}^{power}\t{}", self.base, render.render(&scaled))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    fn powers(args: &[&str]) -> Powers {
        Powers::try_parse_from(["powers"].iter().chain(args)).unwrap()
    }

    #[test]
    fn defaults() {
        let powers = powers(&[]);
        assert_eq!(powers.base, Magnitude::from(10u64));
        assert_eq!(powers.from, 0);
        assert_eq!(powers.to, 30);
    }

    #[test]
    fn roll_over_into_scientific() {
        let lines = powers(&["--from", "24", "--to", "29"])
            .lines(&Render::default())
            .unwrap();

        assert_eq!(
            lines,
            [
                "10^24\t1000.00 Z",
                "10^25\t10.00 Y",
                "10^26\t100.00 Y",
                "10^27\t1000.00 Y",
                "10^28\t10.00 E+27",
                "10^29\t10.00 E+28",
            ]
        );
    }

    #[test]
    fn custom_base() {
        let lines = powers(&["--base", "2", "--from", "10", "--to", "11"])
            .lines(&Render {
                trim: true,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(lines, ["2^10\t1.02 k", "2^11\t2.05 k"]);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = powers(&["--from", "5", "--to", "4"])
            .lines(&Render::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "--from 5 is greater than --to 4");
    }

    #[test]
    fn huge_power_is_rejected() {
        let err = powers(&["--to", "100001"])
            .lines(&Render::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "--to 100001 exceeds maximum of 100000");
    }
}
