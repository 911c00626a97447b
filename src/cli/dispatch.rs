// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use serde_json::{json, Value};

use crate::config::VregConfig;
use crate::error::{ConfigError, FormatError, Result, ResultExt, VregError};
use crate::registry::Registry;

use super::args::{Cli, Commands, FormatsArgs, InitArgs, LocaleArgs, MatchArgs, MessageArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Commands that do not need a registry
    match &cli.command {
        Commands::Init(args) => return run_init(args),
        Commands::Version => return run_version(),
        _ => {}
    }

    let registry = load_registry(&cli)?;

    match &cli.command {
        Commands::Message(args) => run_message(&cli, &registry, args),
        Commands::Locale(args) => run_locale(&cli, &registry, args),
        Commands::Formats(args) => run_formats(&cli, &registry, args),
        Commands::Match(args) => run_match(&cli, &registry, args),
        Commands::Init(_) | Commands::Version => Ok(()),
    }
}

/// Load configuration and build the registry, applying `--lang`.
fn load_registry(cli: &Cli) -> Result<Registry> {
    let config = if let Some(config_path) = &cli.config {
        VregConfig::load_from(config_path)?
    } else {
        VregConfig::load()?
    };

    let mut registry = config.build_registry();
    if let Some(lang) = &cli.lang {
        registry.set_language(lang);
    }

    tracing::debug!("Loaded registry: {:?}", registry);
    Ok(registry)
}

/// Run the message command.
fn run_message(cli: &Cli, registry: &Registry, args: &MessageArgs) -> Result<()> {
    tracing::debug!("Running message command with args: {:?}", args);

    let context: Value = match &args.context {
        Some(raw) => serde_json::from_str::<Value>(raw).context("Invalid --context JSON")?,
        None => json!({}),
    };

    let template = registry.validation_message(&args.path);
    let response = template.map(|message| args.kind.response(message.to_string()));
    let rendered = response
        .as_ref()
        .map(|response| registry.render_message(response, &context));

    if cli.is_json() {
        print_json(&json!({
            "path": args.path,
            "language": registry.language(),
            "locale": registry.resolve_locale_code(""),
            "kind": response.as_ref().and_then(|r| r.kind()).map(|k| k.as_str()),
            "template": template,
            "message": rendered,
        }));
        return Ok(());
    }

    match rendered {
        Some(message) => println!("{}", message),
        None => println!(
            "{} No message registered for '{}'",
            style("✗").red().bold(),
            args.path
        ),
    }

    Ok(())
}

/// Run the locale command.
fn run_locale(cli: &Cli, registry: &Registry, args: &LocaleArgs) -> Result<()> {
    let requested = args.code.as_deref().unwrap_or("");
    let resolved = registry.resolve_locale_code(requested);

    if cli.is_json() {
        let available: Vec<&str> = registry.locales().languages().collect();
        print_json(&json!({
            "requested": args.code,
            "language": registry.language(),
            "resolved": resolved,
            "available": available,
        }));
    } else {
        println!("{}", resolved);
    }

    Ok(())
}

/// Run the formats command.
fn run_formats(cli: &Cli, registry: &Registry, args: &FormatsArgs) -> Result<()> {
    if let Some(name) = &args.name {
        let pattern = registry
            .format(name)
            .ok_or_else(|| FormatError::Unknown { name: name.clone() })?;

        if cli.is_json() {
            print_json(&json!({ "name": name, "pattern": pattern.as_str() }));
        } else {
            println!("{}", pattern.as_str());
        }
        return Ok(());
    }

    let mut names: Vec<&String> = registry.formats().keys().collect();
    names.sort();

    if cli.is_json() {
        let formats: serde_json::Map<String, Value> = names
            .iter()
            .map(|name| ((*name).clone(), json!(registry.formats()[*name].as_str())))
            .collect();
        print_json(&Value::Object(formats));
    } else {
        for name in names {
            println!(
                "{} {}",
                style(name).cyan().bold(),
                style(registry.formats()[name].as_str()).dim()
            );
        }
    }

    Ok(())
}

/// Run the match command.
fn run_match(cli: &Cli, registry: &Registry, args: &MatchArgs) -> Result<()> {
    let pattern = registry
        .format(&args.name)
        .ok_or_else(|| FormatError::Unknown {
            name: args.name.clone(),
        })?;
    let matched = pattern.is_match(&args.input);

    if cli.is_json() {
        print_json(&json!({
            "name": args.name,
            "input": args.input,
            "matched": matched,
        }));
    } else if matched {
        println!(
            "{} '{}' matches {}",
            style("✓").green().bold(),
            args.input,
            style(&args.name).cyan()
        );
    }

    if matched {
        Ok(())
    } else {
        Err(VregError::Format(FormatError::Mismatch {
            name: args.name.clone(),
            input: args.input.clone(),
        }))
    }
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(VregError::Config(ConfigError::AlreadyExists {
            path: args.path.clone(),
        }));
    }

    std::fs::write(&args.path, crate::config::example_config())
        .context(format!("Failed to write {}", args.path.display()))?;

    println!(
        "{} Created {}",
        style("✓").green().bold(),
        args.path.display()
    );

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("vreg {}", crate::version::version_string());
    if let Some(target) = crate::version::TARGET {
        println!("target: {}", target);
    }
    Ok(())
}

fn print_json(value: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
