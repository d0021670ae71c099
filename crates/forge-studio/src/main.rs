use std::io::{BufRead, IsTerminal};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use forge_ai::TemplateGenerator;
use forge_review::SimulatedReviewer;
use forge_session::{SessionController, SessionError};
use forge_studio::{parse_command, render_session, RenderOptions, StudioCommand};

const HELP: &str = "\
forge-studio interactive session

Type a prompt and press enter to set it, then:
  /generate (/gen)     run the generator against the prompt
  /validate (/val)     review the current snippet
  /tab code|docs       switch the display tab
  /history <n>         restore a numbered history entry
  /show                re-render the current view
  /help                show this message
  /quit (/exit)        leave the studio
";

const REPL_PROMPT: &str = "forge> ";

#[derive(Debug, Parser)]
#[command(
    name = "forge-studio",
    about = "Interactive studio around simulated code generation and review"
)]
struct StudioArgs {
    /// Simulated generation latency in milliseconds.
    #[arg(long, default_value_t = 1_500)]
    gen_delay_ms: u64,

    /// Simulated review latency in milliseconds.
    #[arg(long, default_value_t = 1_000)]
    review_delay_ms: u64,

    /// Render width in characters.
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

fn print_view(controller: &SessionController, options: &RenderOptions) {
    for line in render_session(controller.state(), options) {
        println!("{line}");
    }
}

fn print_notice(error: &SessionError) {
    // Guard refusals are the textual form of a disabled control.
    eprintln!("not available: {error}");
}

async fn run_command(
    controller: &mut SessionController,
    command: StudioCommand,
    options: &RenderOptions,
    args: &StudioArgs,
) -> LoopControl {
    match command {
        StudioCommand::EditPrompt(text) => {
            controller.edit_prompt(text);
            println!("prompt set; /generate when ready");
        }
        StudioCommand::Generate => {
            println!("generating ({} ms simulated)...", args.gen_delay_ms);
            match controller.submit_prompt().await {
                Ok(()) => print_view(controller, options),
                Err(error) => print_notice(&error),
            }
        }
        StudioCommand::Validate => {
            println!("validating ({} ms simulated)...", args.review_delay_ms);
            match controller.run_validation().await {
                Ok(()) => print_view(controller, options),
                Err(error) => print_notice(&error),
            }
        }
        StudioCommand::SelectTab(tab) => {
            controller.select_tab(tab);
            print_view(controller, options);
        }
        StudioCommand::SelectHistory(position) => match controller.select_history_position(position)
        {
            Ok(()) => print_view(controller, options),
            Err(error) => print_notice(&error),
        },
        StudioCommand::Show => print_view(controller, options),
        StudioCommand::Help => println!("{HELP}"),
        StudioCommand::Quit => return LoopControl::Exit,
    }
    LoopControl::Continue
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = StudioArgs::parse();
    init_tracing();

    let mut controller = SessionController::new(
        Arc::new(TemplateGenerator::with_latency(Duration::from_millis(
            args.gen_delay_ms,
        ))),
        Arc::new(SimulatedReviewer::with_latency(Duration::from_millis(
            args.review_delay_ms,
        ))),
    );
    let options = RenderOptions {
        width: args.width,
        color: !args.no_color,
    };

    println!("{HELP}");
    if std::io::stdin().is_terminal() {
        run_interactive(&mut controller, &options, &args).await
    } else {
        run_piped(&mut controller, &options, &args).await
    }
}

async fn handle_line(
    controller: &mut SessionController,
    line: &str,
    options: &RenderOptions,
    args: &StudioArgs,
) -> LoopControl {
    match parse_command(line) {
        Ok(command) => run_command(controller, command, options, args).await,
        Err(message) => {
            eprintln!("{message}");
            LoopControl::Continue
        }
    }
}

async fn run_interactive(
    controller: &mut SessionController,
    options: &RenderOptions,
    args: &StudioArgs,
) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(REPL_PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                if handle_line(controller, &line, options, args).await == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        }
    }
    Ok(())
}

async fn run_piped(
    controller: &mut SessionController,
    options: &RenderOptions,
    args: &StudioArgs,
) -> Result<()> {
    // Scripted input (tests, shell pipes) skips the line editor entirely.
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if handle_line(controller, &line, options, args).await == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}
