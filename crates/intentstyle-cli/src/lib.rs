//! Command-line front end for `intentstyle`.
//!
//! The binary is a thin wrapper: [`Cli`] is parsed with clap, [`init_tracing`]
//! installs the log subscriber and [`run`] writes command output to any
//! writer, which keeps every command testable without a process boundary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use minijinja::{context, Environment};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use intentstyle::block::{
    migrate_collapse_state, normalize, redirect_to_first_pipeline, Block, JsonFileStore, Query,
    Route, Router,
};
use intentstyle::{
    ColorMode, IntentValue, ResolvedStyle, Resolver, StyleIntents, TerminalPreview, TextElement,
    Theme, ThemeChoice,
};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "INTENTSTYLE_LOG";

const CSS_RULE_TEMPLATE: &str = "\
.{{ class }} {
{%- for d in declarations %}
  {{ d.property }}: {{ d.value }}{% if d.important %} !important{% endif %};
{%- endfor %}
}
";

#[derive(Debug, Parser)]
#[command(name = "intentstyle", version, about = "Resolve text style intents against a theme")]
pub struct Cli {
    /// Theme file (.yaml, .yml or .json)
    #[arg(long, global = true, env = "INTENTSTYLE_THEME")]
    pub theme: Option<PathBuf>,

    /// Built-in theme variant used when no theme file is given
    #[arg(long, global = true, value_enum, default_value_t = ModeArg::Auto)]
    pub mode: ModeArg,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolveFormat {
    Css,
    Json,
    Html,
    Explain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve intents to style declarations
    Resolve {
        /// Intents as `name` or `name=value` (e.g. `bold`, `weightStyle=4`, `maxWidth=50%`)
        intents: Vec<String>,
        #[arg(long, value_enum, default_value_t = ResolveFormat::Css)]
        format: ResolveFormat,
        /// Class name used for CSS output
        #[arg(long, default_value = "text")]
        class: String,
        /// Element content used for HTML output
        #[arg(long, default_value = "")]
        text: String,
        /// Title attribute used for HTML output
        #[arg(long)]
        title: Option<String>,
    },
    /// Show text styled in the terminal
    Preview {
        intents: Vec<String>,
        #[arg(long)]
        text: String,
        /// Pixels per terminal column
        #[arg(long)]
        cell_px: Option<f64>,
        #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
        color: ColorArg,
    },
    /// Normalize block outputs from a JSON or YAML file
    Normalize {
        blocks: PathBuf,
        #[arg(long, value_enum, default_value_t = DataFormat::Json)]
        format: DataFormat,
    },
    /// Move collapse flags between pipeline namespaces
    Migrate {
        /// JSON file holding the flag store
        #[arg(long)]
        store: PathBuf,
        /// JSON or YAML file with the pipeline's blocks
        #[arg(long)]
        blocks: PathBuf,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Print the route of the first pipeline
    FirstPipeline {
        pipelines: Vec<String>,
        /// Current query parameters as `key=value`
        #[arg(long = "query")]
        query: Vec<String>,
    },
}

/// Installs the global log subscriber.
///
/// `-v` flags take precedence over the environment filter; without them the
/// filter comes from [`LOG_ENV`], defaulting to `warn`.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Resolve {
            intents,
            format,
            class,
            text,
            title,
        } => {
            let intents = parse_intents(intents)?;
            let resolver = load_resolver(cli)?;
            match format {
                ResolveFormat::Css => {
                    let css = css_rule(class, &resolver.resolve(&intents))?;
                    writeln!(out, "{css}")?;
                }
                ResolveFormat::Json => {
                    let declarations = declaration_rows(&resolver.resolve(&intents));
                    writeln!(out, "{}", serde_json::to_string_pretty(&declarations)?)?;
                }
                ResolveFormat::Html => {
                    let mut element = TextElement::new(intents).children(text.as_str());
                    if let Some(title) = title {
                        element = element.title(title.as_str());
                    }
                    writeln!(out, "{}", element.render(&resolver).to_html()?)?;
                }
                ResolveFormat::Explain => {
                    for contribution in resolver.explain(&intents) {
                        writeln!(out, "{contribution}")?;
                    }
                }
            }
        }
        Command::Preview {
            intents,
            text,
            cell_px,
            color,
        } => {
            let intents = parse_intents(intents)?;
            let style = load_resolver(cli)?.resolve(&intents);
            let mut preview = TerminalPreview::new().available_columns(terminal_columns());
            if let Some(px) = cell_px {
                preview = preview.cell_px(*px);
            }
            match color {
                ColorArg::Always => preview = preview.force_styling(true),
                ColorArg::Never => preview = preview.force_styling(false),
                ColorArg::Auto => {}
            }
            writeln!(out, "{}", preview.render(&style, text))?;
        }
        Command::Normalize { blocks, format } => {
            let blocks = read_blocks(blocks)?;
            let normalized = normalize(&blocks)?;
            match format {
                DataFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&normalized)?)?
                }
                DataFormat::Yaml => write!(out, "{}", serde_yaml::to_string(&normalized)?)?,
            }
        }
        Command::Migrate {
            store,
            blocks,
            from,
            to,
        } => {
            let blocks = read_blocks(blocks)?;
            let mut store = JsonFileStore::open(store)?;
            let report = migrate_collapse_state(&mut store, &blocks, from, to);
            for (block, flag, value) in &report.moved {
                writeln!(
                    out,
                    "{} {block}/{flag} = {value}",
                    console::style("moved").green()
                )?;
            }
            writeln!(
                out,
                "{} moved, {} absent, {} failed",
                report.moved.len(),
                report.absent,
                report.failures.len()
            )?;
            if let Some(first) = report.failures.first() {
                bail!(
                    "{} collapse flag(s) could not be migrated; first: {}/{}: {}",
                    report.failures.len(),
                    first.block,
                    first.flag,
                    first.error
                );
            }
        }
        Command::FirstPipeline { pipelines, query } => {
            let mut router = PrintRouter {
                query: parse_query(query)?,
                out,
            };
            if !redirect_to_first_pipeline(pipelines, &mut router) {
                tracing::info!("no pipelines; nothing to redirect to");
            }
        }
    }
    Ok(())
}

/// Parses `name` and `name=value` arguments into intents.
///
/// Values that parse as JSON keep their JSON type; anything else is text.
pub fn parse_intents(args: &[String]) -> anyhow::Result<StyleIntents> {
    let mut intents = StyleIntents::new();
    for arg in args {
        let (name, value) = match arg.split_once('=') {
            Some((name, raw)) => (
                name,
                serde_json::from_str::<IntentValue>(raw)
                    .unwrap_or_else(|_| IntentValue::Text(raw.to_string())),
            ),
            None => (arg.as_str(), IntentValue::Bool(true)),
        };
        if !intents.set(name, value) {
            bail!("unknown intent '{name}'");
        }
    }
    Ok(intents)
}

fn parse_query(args: &[String]) -> anyhow::Result<Query> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .with_context(|| format!("query parameter '{arg}' is not key=value"))
        })
        .collect()
}

/// Builds the resolver for the global `--theme` and `--mode` flags.
pub fn load_resolver(cli: &Cli) -> anyhow::Result<Resolver> {
    let file_theme = cli
        .theme
        .as_deref()
        .map(|path| {
            Theme::from_file(path)
                .with_context(|| format!("failed to load theme '{}'", path.display()))
        })
        .transpose()?;
    let choice = match (&file_theme, cli.mode) {
        (Some(theme), _) => ThemeChoice::Fixed(theme),
        (None, ModeArg::Light) => ThemeChoice::Mode(ColorMode::Light),
        (None, ModeArg::Dark) => ThemeChoice::Mode(ColorMode::Dark),
        (None, ModeArg::Auto) => ThemeChoice::System,
    };
    Ok(Resolver::from_choice(choice))
}

fn read_blocks(path: &Path) -> anyhow::Result<Vec<Block>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read blocks from '{}'", path.display()))?;
    let blocks = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&source)
            .with_context(|| format!("'{}' is not a YAML block list", path.display()))?,
        _ => serde_json::from_str(&source)
            .with_context(|| format!("'{}' is not a JSON block list", path.display()))?,
    };
    Ok(blocks)
}

fn terminal_columns() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}

#[derive(Debug, Serialize)]
struct DeclarationRow {
    property: &'static str,
    value: String,
    important: bool,
}

fn declaration_rows(style: &ResolvedStyle) -> Vec<DeclarationRow> {
    style
        .declarations()
        .into_iter()
        .map(|(property, value, important)| DeclarationRow {
            property,
            value,
            important,
        })
        .collect()
}

fn css_rule(class: &str, style: &ResolvedStyle) -> Result<String, minijinja::Error> {
    let env = Environment::new();
    env.render_str(
        CSS_RULE_TEMPLATE,
        context! {
            class => class,
            declarations => declaration_rows(style),
        },
    )
}

/// Writes the pushed route as `pathname?query`, percent-encoding the query.
struct PrintRouter<'a> {
    query: Query,
    out: &'a mut dyn Write,
}

impl Router for PrintRouter<'_> {
    fn query(&self) -> Query {
        self.query.clone()
    }

    fn push(&mut self, route: Route) {
        let line = if route.query.is_empty() {
            route.pathname
        } else {
            let pairs: Vec<String> = route
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            format!("{}?{}", route.pathname, pairs.join("&"))
        };
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %err, "failed to write route");
        }
    }
}
