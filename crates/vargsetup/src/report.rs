use crate::envfile;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";

/// Severity of a single status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
    Step,
}

/// Format one status line: a colored severity tag followed by the message.
/// Step lines get a leading blank line and an arrow instead of a tag.
pub fn format_line(level: Level, msg: &str) -> String {
    match level {
        Level::Info => format!("{BLUE}info{RESET} {msg}"),
        Level::Success => format!("{GREEN}done{RESET} {msg}"),
        Level::Warn => format!("{YELLOW}warn{RESET} {msg}"),
        Level::Error => format!("{RED}error{RESET} {msg}"),
        Level::Step => format!("\n{BOLD}{CYAN}==>{RESET} {BOLD}{msg}{RESET}"),
    }
}

pub fn line(level: Level, msg: &str) {
    println!("{}", format_line(level, msg));
}

pub fn info(msg: &str) {
    line(Level::Info, msg);
}

pub fn success(msg: &str) {
    line(Level::Success, msg);
}

pub fn warn(msg: &str) {
    line(Level::Warn, msg);
}

pub fn error(msg: &str) {
    line(Level::Error, msg);
}

pub fn step(msg: &str) {
    line(Level::Step, msg);
}

pub fn print_banner() {
    println!();
    println!("{BOLD}{CYAN}vargsetup{RESET} {DIM}AI video project setup{RESET}");
}

/// Instruction block shown before prompting for the required key.
pub fn print_required_key_help() {
    println!();
    println!(
        "{YELLOW}{} is required for video generation.{RESET}",
        envfile::REQUIRED_KEY
    );
    println!();
    println!(
        "Get your free API key at: {CYAN}{}{RESET}",
        envfile::REQUIRED_KEY_URL
    );
    println!();
}

/// Print the completion banner and numbered next steps.
///
/// When the required key is still missing, an extra first step tells the
/// user to add it manually and the remaining steps shift down by one.
pub fn print_summary(required_key_present: bool) {
    println!();
    println!("{GREEN}{BOLD}Setup complete!{RESET}");
    println!();
    println!("{BOLD}Next steps:{RESET}");
    println!();

    let mut step = 1;
    if !required_key_present {
        println!(
            "  {YELLOW}{step}. Add {} to .env{RESET}",
            envfile::REQUIRED_KEY
        );
        println!("     Get it at: {}", envfile::REQUIRED_KEY_URL);
        println!();
        step += 1;
    }

    println!("  {step}. Install vargai package:");
    println!("     {CYAN}bun add vargai{RESET}");
    println!();
    step += 1;
    println!("  {step}. Run your first video:");
    println!("     {CYAN}bun run examples/my-first-video.tsx{RESET}");
    println!();
    println!("{DIM}Documentation: https://github.com/vargHQ/sdk{RESET}");
}
