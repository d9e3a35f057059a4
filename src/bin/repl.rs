use clap::Parser;
use dice_engine::roll::{SimpleStringifier, Stringify};
use dice_engine::{DocumentIdentity, EngineConfig, Placeholder, RollSession};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Roll dice placeholders for one document, one per line.
///
/// Append ` crit=1,20` to a line to flag critical faces. A blank line starts the
/// document over. Without a document identity, lines are validated but not rolled.
#[derive(Parser, Debug)]
#[command(name = "repl")]
struct Args {
    /// Document id
    #[arg(requires = "created_at")]
    id: Option<String>,
    /// Document creation timestamp, e.g. 2021-05-04T12:00:00.000Z
    created_at: Option<String>,
    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn identity(&self) -> Option<DocumentIdentity> {
        match (&self.id, &self.created_at) {
            (Some(id), Some(created_at)) => Some(DocumentIdentity::new(id, created_at.as_str())),
            _ => None,
        }
    }
}

fn parse_line(line: &str) -> Placeholder<'_> {
    match line.split_once(" crit=") {
        Some((text, crit)) => Placeholder::new(text.trim()).with_crit(crit.trim()),
        None => Placeholder::new(line.trim()),
    }
}

fn new_session(identity: Option<&DocumentIdentity>, config: EngineConfig) -> RollSession {
    match identity {
        Some(identity) => RollSession::for_document(identity, config),
        None => RollSession::unseeded(config),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    let identity = args.identity();

    let mut session = new_session(identity.as_ref(), config);
    let mut stringifier = SimpleStringifier::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        if line.trim().is_empty() {
            // A blank line re-renders the document from the top.
            session = new_session(identity.as_ref(), config);
            println!("-- new session");
        } else {
            let record = session.process(&parse_line(&line));
            println!("{}", stringifier.stringify(&record));
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["repl", "42", "2021-05-04T12:00:00.000Z"]).unwrap();
        assert_eq!(
            args.identity(),
            Some(DocumentIdentity::new(42, "2021-05-04T12:00:00.000Z"))
        );
        assert_eq!(args.config, None);

        let args = Args::try_parse_from(["repl", "--config", "dice.toml"]).unwrap();
        assert_eq!(args.identity(), None);
        assert_eq!(args.config, Some(PathBuf::from("dice.toml")));
    }

    #[test]
    fn test_id_requires_timestamp() {
        assert!(Args::try_parse_from(["repl", "42"]).is_err());
        assert!(Args::try_parse_from(["repl", "42", "ts", "extra"]).is_err());
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(" 2d6 "), Placeholder::new("2d6"));
        assert_eq!(parse_line("d20+1 crit=1,20"), Placeholder::new("d20+1").with_crit("1,20"));
    }
}
