use {
    anyhow::{Context, Error, anyhow, ensure},
    arguments::Arguments,
    clap::Parser,
    magnitude::{ExponentCache, Magnitude, Scaled},
    render::Render,
    serde::{Deserialize, Serialize},
    settings::Settings,
    std::{
        collections::BTreeMap,
        env, fs,
        io::{self, BufRead},
        path::PathBuf,
        process,
    },
    tracing::debug,
    tracing_appender::non_blocking,
    tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt},
};

mod arguments;
mod logs;
mod options;
pub mod render;
pub mod settings;
pub mod subcommand;

pub const CONFIG_FILE_NAME: &str = "postfix.toml";
pub const ENV_PREFIX: &str = "POSTFIX_";

type Result<T = (), E = Error> = std::result::Result<T, E>;

pub fn main() {
    let guard = logs::init();

    let args = Arguments::parse();

    let code = match args.run() {
        Err(err) => {
            eprintln!("error: {err}");

            for (i, cause) in err.chain().skip(1).enumerate() {
                if i == 0 {
                    eprintln!();
                    eprintln!("because:");
                }
                eprintln!("- {cause}");
            }

            if env::var_os("RUST_BACKTRACE")
                .map(|val| val == "1")
                .unwrap_or_default()
            {
                eprintln!();
                eprintln!("{}", err.backtrace());
            }

            1
        }
        Ok(()) => 0,
    };

    drop(guard);

    process::exit(code);
}
