use std::env;

use anyhow::{bail, Context};
use log::info;

use happypred::{
    predict_with, train_with, HappinessFeatures, HappyErr, StoreConfig, DEFAULT_MODEL,
};

const USAGE: &str = "Usage:
  happypred train <features.csv> <labels.csv> [model]
  happypred predict <log_gdp> <social> <life_exp> <freedom> <generosity> <corruption> [model]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(mode) = args.first() else {
        bail!("{USAGE}");
    };

    let config = StoreConfig::from_env();
    let store = config.build();
    info!("using {config:?}");

    match mode.as_str() {
        "train" => {
            let [features, labels, rest @ ..] = &args[1..] else {
                bail!("{USAGE}");
            };
            let model = model_arg(rest)?;

            let location = train_with(&store, features, labels, model)?;
            println!("{location}");
        }
        "predict" => {
            let (features, model) = predict_args(&args[1..])?;

            let score = predict_with(&store, &features, model)?;
            println!("{score}");
        }
        other => bail!("unknown mode {other:?}\n{USAGE}"),
    }

    Ok(())
}

/// Parses the six feature values and the optional model following `predict`.
fn predict_args(args: &[String]) -> anyhow::Result<(HappinessFeatures, &str)> {
    if args.len() < 6 {
        bail!("{USAGE}");
    }

    let mut row = [0.0; 6];
    for (value, arg) in row.iter_mut().zip(&args[..6]) {
        *value = arg
            .parse()
            .map_err(|_| HappyErr::InvalidArgument(format!("{arg:?} is not a number")))
            .with_context(|| USAGE)?;
    }

    Ok((HappinessFeatures::from(row), model_arg(&args[6..])?))
}

/// The optional trailing model identifier.
fn model_arg(rest: &[String]) -> anyhow::Result<&str> {
    match rest {
        [] => Ok(DEFAULT_MODEL),
        [model] => Ok(model),
        _ => bail!("too many arguments\n{USAGE}"),
    }
}
