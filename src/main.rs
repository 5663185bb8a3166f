use anyhow::Result;
use getsetmap::cli::{self, ClassifyConfig, Commands, ConfigAction, ConfigSetArgs};

fn main() -> Result<()> {
    let args = cli::parse_args();
    cli::init_logging(args.verbosity);

    match args.command {
        Commands::Classify {
            structure,
            project,
            settings,
            format,
        } => cli::handle_classify_command(ClassifyConfig {
            structure,
            project,
            settings,
            format,
        }),
        Commands::Config { action } => match action {
            ConfigAction::Show { project, settings } => cli::handle_config_show(project, settings),
            ConfigAction::Set {
                getters,
                setters,
                enabled,
                settings,
            } => cli::handle_config_set(ConfigSetArgs {
                getters,
                setters,
                enabled,
                settings,
            }),
        },
        Commands::Init { project, force } => cli::handle_init_command(project, force),
    }
}
