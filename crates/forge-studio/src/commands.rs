use forge_session::Tab;

/// One parsed REPL input. A bare line edits the prompt; slash commands map
/// onto the studio's trigger surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioCommand {
    EditPrompt(String),
    Generate,
    Validate,
    SelectTab(Tab),
    /// 1-based position into the rendered history list.
    SelectHistory(usize),
    Show,
    Help,
    Quit,
}

/// Parses one REPL line. Empty input re-renders the current view.
pub fn parse_command(line: &str) -> Result<StudioCommand, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(StudioCommand::Show);
    }
    if !trimmed.starts_with('/') {
        return Ok(StudioCommand::EditPrompt(trimmed.to_string()));
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default();
    match command {
        "/generate" | "/gen" => Ok(StudioCommand::Generate),
        "/validate" | "/val" => Ok(StudioCommand::Validate),
        "/tab" => match parts.next() {
            Some("code") => Ok(StudioCommand::SelectTab(Tab::Code)),
            Some("docs") => Ok(StudioCommand::SelectTab(Tab::Docs)),
            Some(other) => Err(format!("unknown tab: {other} (expected code or docs)")),
            None => Err("missing tab name (expected code or docs)".to_string()),
        },
        "/history" => {
            let raw = parts.next().ok_or("missing history position")?;
            let position = raw
                .parse::<usize>()
                .map_err(|_| format!("invalid history position: {raw}"))?;
            if position == 0 {
                return Err("history positions start at 1".to_string());
            }
            Ok(StudioCommand::SelectHistory(position))
        }
        "/show" => Ok(StudioCommand::Show),
        "/help" => Ok(StudioCommand::Help),
        "/quit" | "/exit" => Ok(StudioCommand::Quit),
        other => Err(format!("unknown command: {other} (try /help)")),
    }
}
