// Thu Oct 15 2026 - Alex

use super::args::{Args, Command, LookupArgs, OpcodesArgs, ResolveArgs};
use crate::catalog;
use crate::classes::{opcodes, AccessFlags, TypeDescriptor};
use crate::config::Config;
use crate::output::{JsonSerializer, ResolutionReport, SummaryPrinter};
use crate::pattern::OpcodePattern;
use crate::resolver::MethodResolver;
use crate::signature::Signature;
use crate::ui::banner::Banner;
use crate::utils::logging::scoped_timer;
use crate::utils::{self, LoggingUtils};
use anyhow::{bail, Context};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub struct CommandHandler {
    quiet: bool,
    use_color: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            quiet: false,
            use_color: true,
        }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        self.use_color = !args.no_color;

        if args.no_color {
            colored::control::set_override(false);
        }

        let config = match &args.config {
            Some(path) => Config::load(path).with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::new(),
        };

        self.setup_logging(&args, &config);

        if !self.quiet && !matches!(args.command, Command::Opcodes(_)) {
            Banner::default().with_color(self.use_color).print();
        }

        match args.command {
            Command::Resolve(resolve_args) => self.handle_resolve(resolve_args, config),
            Command::Lookup(lookup_args) => self.handle_lookup(lookup_args),
            Command::Opcodes(opcodes_args) => self.handle_opcodes(opcodes_args),
        }
    }

    fn setup_logging(&self, args: &Args, config: &Config) {
        let level = match (&args.log_level, args.verbose) {
            (Some(level), _) => LoggingUtils::level_from_str(level),
            (None, 0) => LoggingUtils::level_from_str(&config.log_level),
            (None, verbosity) => LoggingUtils::level_from_verbosity(verbosity),
        };
        LoggingUtils::init_logger(level);
    }

    fn handle_resolve(&self, args: ResolveArgs, mut config: Config) -> anyhow::Result<()> {
        log::info!("Executing resolve command");

        if let Some(path) = args.classes {
            config = config.with_classes_file(path);
        }
        if let Some(path) = args.signatures {
            config = config.with_signatures_file(path);
        }
        if let Some(path) = args.output {
            config = config.with_output_file(path);
        }
        if let Some(threads) = args.threads {
            config = config.with_max_threads(threads);
        }
        let parallel = config.parallel || args.parallel;
        let strict = config.strict || args.strict;
        config = config.with_parallel(parallel).with_strict(strict);
        if args.compact {
            config.pretty_output = false;
        }
        config.validate()?;

        let (classes_path, signatures_path) = match (&config.classes_file, &config.signatures_file) {
            (Some(classes), Some(signatures)) => (classes.as_path(), signatures.as_path()),
            _ => bail!("classes and signatures catalogs are required"),
        };

        let spinner = self.spinner("Loading catalogs...")?;
        let timer = scoped_timer("catalog load");
        let classes = catalog::load_classes(classes_path)
            .with_context(|| format!("Failed to load classes from {}", classes_path.display()))?;
        let signatures = catalog::load_signatures(signatures_path)
            .with_context(|| format!("Failed to load signatures from {}", signatures_path.display()))?;
        drop(timer);

        if let Some(pb) = &spinner {
            pb.set_message(format!(
                "Resolving {} against {}...",
                utils::pluralize(signatures.len(), "signature", "signatures"),
                utils::pluralize(classes.len(), "class", "classes")
            ));
        }

        let resolver = MethodResolver::new()
            .with_parallel(config.parallel)
            .with_threads(config.max_threads);
        let (map, elapsed) = utils::measure_time(|| resolver.resolve(&classes, &signatures));

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let report = ResolutionReport::build(&map, &signatures);
        log::info!(
            "Resolved {}/{} signatures in {}",
            report.statistics.resolved,
            report.statistics.total_signatures,
            utils::format_duration(elapsed)
        );

        if !self.quiet {
            SummaryPrinter::new().with_color(self.use_color).print(&report);
        }

        if let Some(output) = &config.output_file {
            JsonSerializer::new()
                .with_pretty_print(config.pretty_output)
                .serialize_to_file(&report, output)
                .with_context(|| format!("Failed to write report to {}", output.display()))?;
            if !self.quiet {
                println!("{} Report saved to: {}", "[+]".green(), output.display());
            }
        }

        if config.strict && !report.is_complete() {
            bail!(
                "{} unresolved: {}",
                utils::pluralize(report.unresolved.len(), "signature", "signatures"),
                report.unresolved.join(", ")
            );
        }

        Ok(())
    }

    fn handle_lookup(&self, args: LookupArgs) -> anyhow::Result<()> {
        log::info!("Executing lookup command");
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let classes = catalog::load_classes(&args.classes)
            .with_context(|| format!("Failed to load classes from {}", args.classes.display()))?;
        let class = classes
            .iter()
            .find(|class| class.name == args.class_name)
            .with_context(|| format!("Class {} not found in {}", args.class_name, args.classes.display()))?;

        let signature = match (&args.signatures, &args.signature) {
            (Some(path), Some(name)) => Self::signature_from_catalog(path, name)?,
            _ => Self::inline_signature(&args)?,
        };

        match MethodResolver::new().resolve_in_class(class, &signature) {
            Some(data) => println!(
                "{} {} -> {}.{}{} ({})",
                "[+]".green(),
                signature.name(),
                data.class.name,
                data.method.name,
                data.method.descriptor(),
                data.method.access
            ),
            None => println!(
                "{} No method of {} matches {}",
                "[-]".yellow(),
                class.name,
                signature
            ),
        }

        Ok(())
    }

    fn handle_opcodes(&self, args: OpcodesArgs) -> anyhow::Result<()> {
        let filter = args.filter.map(|f| f.to_ascii_uppercase());
        for (code, name) in opcodes::all() {
            if filter.as_deref().map_or(true, |f| name.contains(f)) {
                println!("{:>3}  0x{:02x}  {}", code, code, name);
            }
        }
        Ok(())
    }

    fn signature_from_catalog(path: &Path, name: &str) -> anyhow::Result<Signature> {
        let signatures = catalog::load_signatures(path)
            .with_context(|| format!("Failed to load signatures from {}", path.display()))?;
        signatures
            .into_iter()
            .find(|signature| signature.name() == name)
            .with_context(|| format!("Signature {} not found in {}", name, path.display()))
    }

    fn inline_signature(args: &LookupArgs) -> anyhow::Result<Signature> {
        let mut signature = Signature::new("inline");

        if let Some(returns) = &args.returns {
            signature = signature.with_returns(TypeDescriptor::parse(returns)?);
        }
        if let Some(access) = &args.access {
            let names = access.split(',').map(str::trim).filter(|name| !name.is_empty());
            signature = signature.with_accessors(AccessFlags::parse_keywords(names)?);
        }
        if let Some(params) = &args.params {
            let params = params
                .split(',')
                .map(str::trim)
                .filter(|param| !param.is_empty())
                .map(TypeDescriptor::parse)
                .collect::<Result<Vec<_>, _>>()?;
            signature = signature.with_parameters(params);
        }
        if let Some(pattern) = &args.pattern {
            signature = signature.with_opcodes(OpcodePattern::parse(pattern)?);
        }

        Ok(signature)
    }

    fn spinner(&self, message: &str) -> anyhow::Result<Option<ProgressBar>> {
        if self.quiet {
            return Ok(None);
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Ok(Some(pb))
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
