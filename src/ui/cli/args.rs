// Thu Oct 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "method-locator")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Locate methods in recompiled class dumps by structural signature", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Overrides -v and the config file level.
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every signature of a catalog against every class.
    Resolve(ResolveArgs),
    /// Find the first method of one class matching one signature.
    Lookup(LookupArgs),
    /// List the opcode mnemonics accepted in catalogs and patterns.
    Opcodes(OpcodesArgs),
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    #[arg(short, long)]
    pub classes: Option<PathBuf>,

    #[arg(short, long)]
    pub signatures: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub parallel: bool,

    #[arg(long)]
    pub threads: Option<usize>,

    /// Exit with an error when any signature stays unresolved.
    #[arg(long)]
    pub strict: bool,

    #[arg(long)]
    pub compact: bool,
}

#[derive(Parser, Debug)]
pub struct LookupArgs {
    #[arg(short, long)]
    pub classes: PathBuf,

    #[arg(long = "class")]
    pub class_name: String,

    /// Take the signature from a catalog instead of the inline flags.
    #[arg(short, long, requires = "signature")]
    pub signatures: Option<PathBuf>,

    #[arg(long)]
    pub signature: Option<String>,

    #[arg(long)]
    pub returns: Option<String>,

    /// Comma separated flag names, e.g. `public,static`.
    #[arg(long)]
    pub access: Option<String>,

    /// Comma separated parameter descriptors; an empty string means no parameters.
    #[arg(long)]
    pub params: Option<String>,

    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Parser, Debug)]
pub struct OpcodesArgs {
    #[arg(short, long)]
    pub filter: Option<String>,
}

impl LookupArgs {
    pub fn validate(&self) -> Result<(), String> {
        let inline = self.returns.is_some() || self.access.is_some() || self.params.is_some() || self.pattern.is_some();
        if self.signature.is_some() && self.signatures.is_none() {
            return Err("--signature requires --signatures".to_string());
        }
        if self.signatures.is_some() && inline {
            return Err("inline constraints cannot be combined with --signatures".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let args = Args::try_parse_from([
            "method-locator",
            "-vv",
            "resolve",
            "--classes",
            "c.json",
            "-s",
            "s.json",
            "--parallel",
            "--strict",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Resolve(resolve) => {
                assert_eq!(resolve.classes, Some(PathBuf::from("c.json")));
                assert!(resolve.parallel && resolve.strict);
                assert!(resolve.output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_lookup_validation() {
        let args = Args::try_parse_from([
            "method-locator",
            "lookup",
            "-c",
            "c.json",
            "--class",
            "a/b",
            "--returns",
            "I",
            "--pattern",
            "ICONST_0 IRETURN",
        ])
        .unwrap();
        match args.command {
            Command::Lookup(lookup) => assert!(lookup.validate().is_ok()),
            other => panic!("unexpected command {:?}", other),
        }

        let lookup = LookupArgs {
            classes: PathBuf::from("c.json"),
            class_name: "a/b".to_string(),
            signatures: Some(PathBuf::from("s.json")),
            signature: Some("zero".to_string()),
            returns: Some("I".to_string()),
            access: None,
            params: None,
            pattern: None,
        };
        assert!(lookup.validate().is_err());
    }
}
