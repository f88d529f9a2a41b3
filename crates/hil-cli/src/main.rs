mod render;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use hil_core::config::{pattern_size_limit_from_env_value, resolve_data_file};
use hil_core::prescriptions::prescription_summary;
use hil_core::{AnswerRenderer, Catalogue, Category, CoreConfig, LinkMap, ScenarioService};
use hil_records::{Format, RelatedLinks};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hil")]
#[command(about = "Health information lookup CLI")]
struct Cli {
    /// Catalogue document (overrides HIL_DATA_FILE)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one annotated answer
    Render {
        /// Answer text
        #[arg(long, conflicts_with = "answer_file", required_unless_present = "answer_file")]
        answer: Option<String>,
        /// File holding the answer text
        #[arg(long)]
        answer_file: Option<PathBuf>,
        /// Related links as JSON, e.g. '{"nutrients": ["鎂"]}'
        #[arg(long, conflicts_with = "links_file")]
        links: Option<String>,
        /// Related links file (JSON or YAML)
        #[arg(long)]
        links_file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List scenarios
    Scenarios,
    /// Render a scenario with its related tags
    Scenario {
        /// Scenario id
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Look up a record by category and name
    Lookup {
        /// Category, e.g. drug, nutrients, natural_prescription
        category: String,
        /// Record name; lists the category when omitted
        name: Option<String>,
    },
    /// Summarise natural prescriptions
    Prescriptions {
        /// Prescription names (space or comma separated)
        #[arg(value_delimiter = ',')]
        names: Vec<String>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Render { .. } => "render",
            Commands::Scenarios => "scenarios",
            Commands::Scenario { .. } => "scenario",
            Commands::Lookup { .. } => "lookup",
            Commands::Prescriptions { .. } => "prescriptions",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("hil=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let data_file = resolve_data_file(cli.data, std::env::var("HIL_DATA_FILE").ok());
    let pattern_size_limit =
        pattern_size_limit_from_env_value(std::env::var("HIL_PATTERN_SIZE_LIMIT").ok())?;
    let config = CoreConfig::new(data_file, pattern_size_limit)?;
    tracing::info!(
        "hil {} (catalogue {}, pattern limit {} bytes)",
        cli.command.name(),
        config.data_file().display(),
        config.pattern_size_limit()
    );

    match cli.command {
        Commands::Render {
            answer,
            answer_file,
            links,
            links_file,
            format,
        } => {
            let answer = match (answer, answer_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading answer from {}", path.display()))?,
                (None, None) => bail!("either --answer or --answer-file is required"),
            };
            let links = read_links(links, links_file)?;
            let link_map = links.as_ref().map(LinkMap::from_related_links);

            let segments = AnswerRenderer::from_config(&config).render(&answer, link_map.as_ref());
            match format {
                OutputFormat::Text => println!("{}", render::segments_to_text(&segments)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&segments)?),
                OutputFormat::Html => println!("{}", render::segments_to_html(&segments)),
            }
        }
        Commands::Scenarios => {
            let catalogue = Catalogue::load(&config)?;
            let mut found = false;
            for (id, scenario) in catalogue.scenarios() {
                found = true;
                println!("{}\t{}", id, scenario.title());
            }
            if !found {
                println!("No scenarios found.");
            }
        }
        Commands::Scenario { id, format } => {
            let catalogue = Catalogue::load(&config)?;
            let service = ScenarioService::new(AnswerRenderer::from_config(&config));
            let scenario = service.render_by_id(&catalogue, &id)?;
            tracing::debug!("rendered scenario {} with {} items", id, scenario.items.len());
            match format {
                OutputFormat::Text => print!("{}", render::scenario_to_text(&scenario)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scenario)?),
                OutputFormat::Html => print!("{}", render::scenario_to_html(&scenario)),
            }
        }
        Commands::Lookup { category, name } => {
            let category = Category::parse(&category)?;
            let catalogue = Catalogue::load(&config)?;
            match name {
                Some(name) => {
                    let record = catalogue.entity(category, &name)?;
                    println!("{}", serde_json::to_string_pretty(record)?);
                }
                None => {
                    let names = catalogue.entity_names(category);
                    if names.is_empty() {
                        println!("No {} records found.", category);
                    }
                    for name in names {
                        println!("{}", name);
                    }
                }
            }
        }
        Commands::Prescriptions { names } => {
            let names: Vec<&str> = names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .collect();
            let catalogue = Catalogue::load(&config)?;
            for line in prescription_summary(&names, &catalogue) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Reads related links from an inline JSON argument or a JSON/YAML file.
fn read_links(
    inline: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<Option<RelatedLinks>> {
    if let Some(json) = inline {
        let links = hil_records::parse_document::<RelatedLinks>(&json, Format::Json, "Links")?;
        return Ok(Some(links));
    }
    match file {
        Some(path) => {
            let links = hil_records::read_document::<RelatedLinks>(&path, "Links")
                .with_context(|| format!("reading links from {}", path.display()))?;
            Ok(Some(links))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_are_named_for_logging() {
        let cli = Cli::try_parse_from(["hil", "--data", "db.yaml", "scenario", "night-shift"])
            .unwrap();
        assert_eq!(cli.command.name(), "scenario");
        assert_eq!(cli.data, Some(PathBuf::from("db.yaml")));
        let cli = Cli::try_parse_from(["hil", "lookup", "nutrients"]).unwrap();
        assert_eq!(cli.command.name(), "lookup");
    }

    #[test]
    fn prescriptions_accept_comma_separated_names() {
        let cli = Cli::try_parse_from(["hil", "prescriptions", "規律散步,深呼吸", "冥想"]).unwrap();
        match cli.command {
            Commands::Prescriptions { names } => {
                assert_eq!(names, vec!["規律散步", "深呼吸", "冥想"]);
            }
            _ => panic!("expected prescriptions"),
        }
    }

    #[test]
    fn render_requires_an_answer() {
        assert!(Cli::try_parse_from(["hil", "render"]).is_err());
        let cli = Cli::try_parse_from(["hil", "render", "--answer", "x", "--format", "html"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Render {
                format: OutputFormat::Html,
                ..
            }
        ));
    }

    #[test]
    fn inline_links_keep_declaration_order() {
        let links = read_links(Some(r#"{"symptoms": ["頭痛"], "drugs": ["頭痛"]}"#.into()), None)
            .unwrap()
            .expect("links");
        let keys: Vec<&str> = links.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["symptoms", "drugs"]);
        assert!(read_links(None, None).unwrap().is_none());
    }
}
