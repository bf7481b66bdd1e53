//! NURBS-Path-Editor.
//!
//! Headless-Frontend: lädt ein Kurvendokument, wendet Parameter an,
//! gibt eine Sample-Übersicht aus und exportiert optional.

use anyhow::{bail, Context};
use nurbs_path_editor::{AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

const USAGE: &str = "Aufruf: nurbs-path-editor <dokument.json> [--degree N] [--steps N] \
[--save PFAD] [--export PFAD] [--plugin PROGRAMM [ARGS..]]";

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Kommandozeilen-Argumente
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    document: PathBuf,
    degree: Option<usize>,
    steps: Option<usize>,
    save: Option<PathBuf>,
    export: Option<PathBuf>,
    plugin: Option<(PathBuf, Vec<String>)>,
    /// `-h`/`--help`: nur Aufruf-Hilfe ausgeben
    show_help: bool,
}

impl CliArgs {
    /// Parst die Argumente ohne Programmnamen. `--plugin` schluckt alle folgenden Argumente.
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = CliArgs::default();
        let mut document = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--degree" => parsed.degree = Some(parse_number(args.next(), "--degree")?),
                "--steps" => parsed.steps = Some(parse_number(args.next(), "--steps")?),
                "--save" => parsed.save = Some(required_path(args.next(), "--save")?),
                "--export" => parsed.export = Some(required_path(args.next(), "--export")?),
                "--plugin" => {
                    let program = required_path(args.next(), "--plugin")?;
                    parsed.plugin = Some((program, args.by_ref().collect()));
                }
                "-h" | "--help" => {
                    return Ok(CliArgs {
                        show_help: true,
                        ..CliArgs::default()
                    });
                }
                other if other.starts_with("--") => bail!("Unbekannte Option {other}\n{USAGE}"),
                other => {
                    if document.is_some() {
                        bail!("Mehr als ein Dokument angegeben\n{USAGE}");
                    }
                    document = Some(PathBuf::from(other));
                }
            }
        }

        parsed.document = document.with_context(|| format!("Kein Dokument angegeben\n{USAGE}"))?;
        Ok(parsed)
    }
}

fn parse_number(value: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let value = value.with_context(|| format!("{flag} erwartet einen Wert"))?;
    value
        .parse()
        .with_context(|| format!("{flag}: '{value}' ist keine ganze Zahl"))
}

fn required_path(value: Option<String>, flag: &str) -> anyhow::Result<PathBuf> {
    value
        .map(PathBuf::from)
        .with_context(|| format!("{flag} erwartet einen Pfad"))
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("NURBS-Path-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let args = CliArgs::parse(std::env::args().skip(1))?;
        if args.show_help {
            println!("{USAGE}");
            return Ok(());
        }

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        let mut controller = AppController::new();

        for intent in Self::intents_for(args) {
            if let Err(e) = controller.handle_intent(&mut state, intent) {
                log::error!("Verarbeitung abgebrochen: {:#}", e);
                return Err(e);
            }
            if state.should_exit {
                break;
            }
        }

        if let Some(summary) = &state.ui.last_summary {
            println!("{summary}");
        }
        if let Some(result) = &state.ui.last_plugin_result {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        Ok(())
    }

    /// Übersetzt die Argumente in die Intent-Folge: Laden, Parameter, Ausgabe, Speichern, Export.
    fn intents_for(args: CliArgs) -> Vec<AppIntent> {
        let mut intents = vec![AppIntent::OpenFileRequested {
            path: args.document,
        }];
        if let Some(degree) = args.degree {
            intents.push(AppIntent::DegreeChanged { degree });
        }
        if let Some(steps) = args.steps {
            intents.push(AppIntent::StepsChanged { steps });
        }
        intents.push(AppIntent::SummaryRequested);
        if let Some(path) = args.save {
            intents.push(AppIntent::SaveAsRequested { path });
        }
        if let Some(path) = args.export {
            intents.push(AppIntent::ExportRequested { path });
        }
        if let Some((program, args)) = args.plugin {
            intents.push(AppIntent::PluginRunRequested { program, args });
        }
        intents.push(AppIntent::ExitRequested);
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_full_command_line() {
        let args = parse(&[
            "kurve.json",
            "--degree",
            "3",
            "--steps",
            "50",
            "--save",
            "neu.json",
            "--export",
            "kurve.js",
            "--plugin",
            "python3",
            "skript.py",
            "--degree",
        ])
        .expect("gültige Argumente");

        assert_eq!(args.document, PathBuf::from("kurve.json"));
        assert_eq!(args.degree, Some(3));
        assert_eq!(args.steps, Some(50));
        assert_eq!(args.save, Some(PathBuf::from("neu.json")));
        assert_eq!(args.export, Some(PathBuf::from("kurve.js")));
        assert_eq!(
            args.plugin,
            Some((
                PathBuf::from("python3"),
                vec!["skript.py".to_string(), "--degree".to_string()]
            ))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert!(parse(&["a.json", "--steps", "viele"]).is_err());
        assert!(parse(&["a.json", "--steps"]).is_err());
        assert!(parse(&["a.json", "--unbekannt"]).is_err());
    }

    #[test]
    fn test_help_is_not_an_error() {
        for flag in ["-h", "--help"] {
            let args = parse(&[flag]).expect("Hilfe ist kein Fehler");
            assert!(args.show_help);
        }
        let args = parse(&["a.json", "--help", "--unbekannt"]).unwrap();
        assert!(args.show_help);
        assert!(!parse(&["a.json"]).unwrap().show_help);
    }

    #[test]
    fn test_intents_follow_fixed_order() {
        let args = parse(&["a.json", "--export", "x.js", "--steps", "8"]).unwrap();
        let intents = AppRunner::intents_for(args);

        assert!(matches!(intents[0], AppIntent::OpenFileRequested { .. }));
        assert!(matches!(intents[1], AppIntent::StepsChanged { steps: 8 }));
        assert!(matches!(intents[2], AppIntent::SummaryRequested));
        assert!(matches!(intents[3], AppIntent::ExportRequested { .. }));
        assert!(matches!(intents.last(), Some(AppIntent::ExitRequested)));
    }
}
