//! Terminal front end for a material comparison session

use std::path::PathBuf;

use curve_session::prelude::*;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  show                      current parameters
  set <field> <value>       field: name, E, Sy, Et, emax, points, model
  calc                      request a curve and add it to the session
  list                      materials in the session
  toggle <id>               show/hide a material
  table                     points of the latest visible material
  export [dir]              write the comparison CSV (visible materials)
  export --single [dir]     write curva_plastica.csv (the table's curve)
  clear                     remove all materials
  help | quit";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curve_session=info,curve_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CurveConfig::from_env();
    tracing::info!("Using calculation service at {}", config.api_url);
    tracing::info!("Session capacity: {}", config.capacity);

    let mut workbench = Workbench::new(&config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Stress-strain curve comparison. Type 'help' for commands.");
    loop {
        prompt("> ").await;
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                break;
            }
        };

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else { continue };
        let args: Vec<&str> = words.collect();

        match command {
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            "show" => show_inputs(&workbench.inputs),
            "set" => set_field(&mut workbench.inputs, &args),
            "calc" => match workbench.calculate().await {
                Ok(Some(entry)) => println!(
                    "Added '{}' [{}] with {} points",
                    entry.name,
                    entry.id,
                    entry.data.len()
                ),
                Ok(None) => println!("Result discarded"),
                Err(e) if e.is_request_failure() => {
                    alert(&format!("{e}. Make sure the calculation service is running."))
                }
                Err(e) => alert(&e.to_string()),
            },
            "list" => list_entries(workbench.session()),
            "toggle" => match args.first().and_then(|raw| raw.parse::<i64>().ok()) {
                Some(id) => {
                    if !workbench.toggle_visibility(EntryId(id)) {
                        println!("No material with id {id}");
                    }
                }
                None => println!("Usage: toggle <id>"),
            },
            "table" => show_table(workbench.session()),
            "export" => {
                let single = args.first() == Some(&"--single");
                let dir_arg = if single { args.get(1) } else { args.first() };
                let dir = dir_arg.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
                let mut sink = FileSink::new(dir);
                let exported = if single {
                    workbench.export_table(&mut sink)
                } else {
                    workbench.export(&mut sink)
                };
                match exported {
                    Ok(()) => {
                        for path in sink.written() {
                            println!("Saved {}", path.display());
                        }
                    }
                    Err(e) => alert(&e.to_string()),
                }
            }
            "clear" => {
                prompt("Remove all materials from the comparison? [y/N] ").await;
                let answer = lines.next_line().await.ok().flatten().unwrap_or_default();
                let confirmed = is_yes(&answer);
                if workbench.clear(&mut |_: &str| confirmed) {
                    println!("Session cleared");
                }
            }
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }
}

async fn prompt(text: &str) {
    if let Err(e) = write_prompt(&mut tokio::io::stdout(), text).await {
        tracing::warn!("Failed to write prompt: {}", e);
    }
}

async fn write_prompt(out: &mut (impl AsyncWrite + Unpin), text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

fn alert(message: &str) {
    println!("!! {message}");
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn show_inputs(inputs: &InputParameters) {
    let name = if inputs.material_name.trim().is_empty() {
        "(auto)"
    } else {
        inputs.material_name.as_str()
    };
    println!("  name   = {name}");
    for field in NumericField::ALL {
        println!("  {:<6} = {}", field.label(), inputs.field(field));
    }
    println!("  model  = {}", inputs.model_type);
}

fn set_field(inputs: &mut InputParameters, args: &[&str]) {
    let Some((&field, rest)) = args.split_first() else {
        println!("Usage: set <field> <value>");
        return;
    };
    let value = rest.join(" ");

    if field.eq_ignore_ascii_case("name") {
        inputs.material_name = value;
    } else if field.eq_ignore_ascii_case("model") {
        match value.parse::<ModelType>() {
            Ok(model) => inputs.model_type = model,
            Err(e) => alert(&e.to_string()),
        }
    } else if let Some(numeric) = NumericField::from_label(field) {
        inputs.set_field(numeric, &value);
        println!("  {} = {}", numeric.label(), inputs.field(numeric));
    } else {
        println!("Unknown field '{field}'");
    }
}

fn list_entries(session: &Session) {
    println!("Materials {}/{}", session.len(), session.capacity());
    for entry in session.entries() {
        let mark = if entry.visible { "x" } else { " " };
        println!("  [{mark}] {}  {} ({} points)", entry.id, entry.name, entry.data.len());
    }
}

fn show_table(session: &Session) {
    let rows = table_rows(session);
    if rows.is_empty() {
        println!("No visible material");
        return;
    }
    println!("{:>12} {:>14}", "Strain", "Stress");
    for point in rows {
        println!("{:>12} {:>14}", point.strain, point.stress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_y_or_yes_confirms() {
        assert!(is_yes(" Y "));
        assert!(is_yes("yes"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[tokio::test]
    async fn prompt_is_written_and_flushed() {
        let mut out = Vec::new();
        write_prompt(&mut out, "> ").await.unwrap();
        assert_eq!(out, b"> ");
    }

    #[tokio::test]
    async fn prompt_reports_closed_output() {
        let (mut writer, reader) = tokio::io::duplex(8);
        drop(reader);
        assert!(write_prompt(&mut writer, "> ").await.is_err());
    }
}
