use super::*;

/// Turns a [`Scaled`] into display text: the value with a fixed number of
/// decimal places, then the separator and suffix. The separator is dropped
/// when the suffix is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub precision: usize,
    pub trim: bool,
    pub separator: String,
}

impl Render {
    pub fn render(&self, scaled: &Scaled) -> String {
        let value = format!("{:.*}", self.precision, scaled.display_value());

        let value = if self.trim && value.contains('.') {
            value.trim_end_matches('0').trim_end_matches('.')
        } else {
            value.as_str()
        };

        if scaled.suffix().is_empty() {
            value.to_string()
        } else {
            format!("{value}{}{}", self.separator, scaled.suffix())
        }
    }
}

impl Default for Render {
    fn default() -> Self {
        Self {
            precision: settings::DEFAULT_PRECISION,
            trim: false,
            separator: settings::DEFAULT_SEPARATOR.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, magnitude::scale, pretty_assertions::assert_eq};

    #[track_caller]
    fn case(render: &Render, magnitude: &str, expected: &str) {
        let magnitude = magnitude.parse::<Magnitude>().unwrap();
        assert_eq!(render.render(&scale(magnitude.as_biguint())), expected);
    }

    #[test]
    fn default_rendering() {
        let render = Render::default();
        case(&render, "0", "0.00");
        case(&render, "500", "500.00");
        case(&render, "1500", "1.50 k");
        case(&render, "1530000", "1.53 M");
        case(&render, "4.2e27", "4.20 E+27");
        case(&render, "1000000", "1000.00 k");
    }

    #[test]
    fn trimmed_rendering() {
        let render = Render {
            trim: true,
            ..Default::default()
        };
        case(&render, "0", "0");
        case(&render, "500", "500");
        case(&render, "1500", "1.5 k");
        case(&render, "2500000", "2.5 M");
        case(&render, "4.2e27", "4.2 E+27");
        case(&render, "1e30", "10 E+29");
    }

    #[test]
    fn zero_precision_is_not_trimmed_into_nothing() {
        let render = Render {
            precision: 0,
            trim: true,
            separator: " ".into(),
        };
        case(&render, "100", "100");
        case(&render, "1000", "1000");
        case(&render, "20000", "20 k");
    }

    #[test]
    fn custom_separator() {
        let render = Render {
            precision: 1,
            trim: false,
            separator: String::new(),
        };
        case(&render, "1500", "1.5k");
        case(&render, "7", "7.0");
    }
}
