//! Interactive shell over the advisor operations.
//!
//! Launch with `rgf-insurance-mcp repl`. Commands start with `/`; Tab
//! completes them, and completes tool names after `/call`.

use std::path::PathBuf;
use std::sync::Arc;

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use serde_json::Value;

use rgf_insurance::{Operation, RgfService};

use crate::tools::ToolRegistry;
use crate::types::InitializeResult;

const HISTORY_FILE: &str = ".rgf_insurance_mcp_history";
const PROMPT: &str = "rgf> ";

const HELP: &[(&str, &str)] = &[
    ("/info", "server version, protocol and target page"),
    ("/tools", "list the tools"),
    ("/questionnaire", "print the questionnaire"),
    ("/call", "/call <tool> [json arguments]"),
    ("/clear", "clear the screen"),
    ("/help", "this list"),
    ("/exit", "leave"),
];

/// One line of input, parsed.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Help,
    Info,
    Tools,
    Questionnaire,
    Call { tool: &'a str, args: &'a str },
    Clear,
    Exit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// `None` for a blank line. The leading `/` is optional.
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let input = line.strip_prefix('/').unwrap_or(line);
        let (word, rest) = input.split_once(' ').unwrap_or((input, ""));

        Some(match word {
            "" | "help" | "h" | "?" => Command::Help,
            "info" => Command::Info,
            "tools" => Command::Tools,
            "questionnaire" => Command::Questionnaire,
            "call" => {
                let rest = rest.trim();
                let (tool, args) = rest.split_once(' ').unwrap_or((rest, ""));
                Command::Call {
                    tool,
                    args: args.trim(),
                }
            }
            "clear" | "cls" => Command::Clear,
            "exit" | "quit" => Command::Exit,
            other => Command::Unknown(other),
        })
    }
}

/// Completion candidates for the text before the cursor, with the offset
/// they replace from.
fn candidates(input: &str) -> (usize, Vec<&'static str>) {
    if let Some(partial) = input.strip_prefix("/call ") {
        if partial.contains(' ') {
            return (input.len(), Vec::new());
        }
        let tools = Operation::ALL
            .iter()
            .map(|op| op.name())
            .filter(|name| name.starts_with(partial))
            .collect();
        return (input.len() - partial.len(), tools);
    }
    if input.contains(' ') {
        return (input.len(), Vec::new());
    }
    let commands = HELP
        .iter()
        .map(|(cmd, _)| *cmd)
        .filter(|cmd| cmd.starts_with(input))
        .collect();
    (0, commands)
}

struct AdvisorHelper;

impl Completer for AdvisorHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: format!("{word} "),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for AdvisorHelper {
    type Hint = String;
}
impl Highlighter for AdvisorHelper {}
impl Validator for AdvisorHelper {}
impl Helper for AdvisorHelper {}

fn history_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(HISTORY_FILE)
}

/// Run the shell. Must be called from a multi-threaded Tokio runtime.
pub fn run(service: Arc<RgfService>) -> anyhow::Result<()> {
    eprintln!(
        "rgf-insurance-mcp v{} (target {}). /help lists commands.",
        env!("CARGO_PKG_VERSION"),
        service.target_url()
    );

    let config = Config::builder()
        .auto_add_history(true)
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();
    let mut editor: Editor<AdvisorHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    editor.set_helper(Some(AdvisorHelper));

    let history = history_path();
    if let Err(e) = editor.load_history(&history) {
        tracing::debug!("No REPL history loaded from {}: {e}", history.display());
    }

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                eprintln!("(use /exit to leave)");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let Some(command) = Command::parse(&line) else {
            continue;
        };
        match command {
            Command::Help => print_help(),
            Command::Info => print_info(&service),
            Command::Tools => print_tools(),
            Command::Questionnaire => call(&service, Operation::Questionnaire.name(), ""),
            Command::Call { tool: "", .. } => eprintln!("usage: /call <tool> [json arguments]"),
            Command::Call { tool, args } => call(&service, tool, args),
            Command::Clear => eprint!("\x1b[2J\x1b[H"),
            Command::Exit => break,
            Command::Unknown(word) => eprintln!("unknown command /{word}, try /help"),
        }
    }

    if let Err(e) = editor.save_history(&history) {
        tracing::warn!("Could not save REPL history to {}: {e}", history.display());
    }
    Ok(())
}

fn print_help() {
    for (cmd, what) in HELP {
        eprintln!("  {cmd:<16} {what}");
    }
    eprintln!("  e.g. /call get_insurance_recommendation {{\"age\": 30, \"vehicle_value\": 25000}}");
}

fn print_info(service: &RgfService) {
    let handshake = InitializeResult::advisor();
    eprintln!(
        "  server   {} v{}",
        handshake.server_info.name, handshake.server_info.version
    );
    eprintln!("  protocol {}", handshake.protocol_version);
    eprintln!("  target   {}", service.target_url());
}

/// Tools that fetch the page are starred.
fn print_tools() {
    for tool in ToolRegistry::list_tools() {
        let fetches = Operation::from_name(&tool.name).is_some_and(|op| op.needs_network());
        let mark = if fetches { '*' } else { ' ' };
        eprintln!("  {mark} {:<30} {}", tool.name, tool.description);
    }
}

fn call(service: &RgfService, tool: &str, raw_args: &str) {
    let arguments = match call_arguments(raw_args) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("arguments are not JSON: {e}");
            return;
        }
    };

    let outcome = tokio::task::block_in_place(|| {
        tokio::runtime::Handle::current().block_on(service.invoke(tool, arguments))
    });
    match (outcome.data, outcome.error) {
        (Some(data), _) => println!("{data}"),
        (None, Some(error)) => eprintln!("error: {error}"),
        (None, None) => {}
    }
}

fn call_arguments(raw: &str) -> serde_json::Result<Value> {
    if raw.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("/"), Some(Command::Help));
        assert_eq!(Command::parse("tools"), Some(Command::Tools));
        assert_eq!(Command::parse("/quit"), Some(Command::Exit));
        assert_eq!(Command::parse("/frobnicate x"), Some(Command::Unknown("frobnicate")));
        assert_eq!(
            Command::parse("/call get_insurance_recommendation  {\"age\": 30} "),
            Some(Command::Call {
                tool: "get_insurance_recommendation",
                args: "{\"age\": 30}",
            })
        );
        assert_eq!(
            Command::parse("/call"),
            Some(Command::Call { tool: "", args: "" })
        );
    }

    #[test]
    fn test_candidates() {
        assert_eq!(candidates("/q"), (0, vec!["/questionnaire"]));
        assert_eq!(
            candidates("/call get_insurance_"),
            (6, vec!["get_insurance_questionnaire", "get_insurance_recommendation"])
        );
        assert_eq!(candidates("/call get_rgf_metadata {"), (24, vec![]));
        assert_eq!(candidates("/info x"), (7, vec![]));
    }

    #[test]
    fn test_call_arguments() {
        assert_eq!(call_arguments("").unwrap(), serde_json::json!({}));
        assert_eq!(call_arguments(r#"{"age": 30}"#).unwrap()["age"], 30);
        assert!(call_arguments("{age: 30}").is_err());
    }
}
