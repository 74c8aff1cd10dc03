use anyhow::Result;

use super::super::{args::GenerateArgs, exit_status::ExitStatus};
use super::helper::Project;
use super::{CommandResult, CommandSummary};
use crate::pipeline::{GenerateOptions, generate_all};

pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let project = Project::load()?;
    let config = &project.config;

    let options = GenerateOptions {
        yaml_dir: project.resolve(args.yaml_dir.as_deref(), &config.yaml_dir),
        xml_output_dir: project.resolve(args.xml_output_dir.as_deref(), &config.xml_output_dir),
        native_output_dir: project
            .resolve(args.native_output_dir.as_deref(), &config.native_output_dir),
        base_locale: args
            .base_locale
            .unwrap_or_else(|| config.base_locale.clone()),
    };

    let result = generate_all(&options)?;
    let status = if result.success {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    };

    Ok(CommandResult {
        summary: CommandSummary::Generate(result),
        status,
    })
}
