use anyhow::Result;

use crate::commands::load_session;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::BreaksArgs) -> Result<()> {
    let mut session = load_session(cli, &args.input)?;

    let names: Vec<String> = if args.attribute.is_empty() {
        session.catalog().iter().map(|name| name.to_string()).collect()
    } else {
        args.attribute.clone()
    };

    for name in &names {
        session.select_attribute(name)?;
        let values = session.values(session.expressed()).len();

        match session.classification() {
            Some(classification) => {
                let breaks: Vec<String> = classification.breaks().thresholds().iter()
                    .map(|threshold| threshold.to_string())
                    .collect();
                let adjusted = classification.adjusted_from()
                    .map(|requested| format!(" (reduced from {requested})"))
                    .unwrap_or_default();
                println!(
                    "{name}: {} classes{adjusted} over {values} values, breaks [{}]",
                    classification.class_count(),
                    breaks.join(", "),
                );
            }
            None => println!("{name}: no values"),
        }
    }
    Ok(())
}
