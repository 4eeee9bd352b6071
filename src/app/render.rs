//! Console output: banner, menus, help, request summary and responses

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::app::menu::MainChoice;
use crate::codegen::CodeTarget;
use crate::constants::{APP_NAME, APP_VERSION, BODY_TERMINATOR};
use crate::models::Request;
use crate::network::{Exchange, Response};

/// Inner width of the menu boxes
const BOX_WIDTH: usize = 49;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    let title = format!("{APP_NAME} - Simple HTTP Client CLI v{APP_VERSION}");
    writeln!(out)?;
    writeln!(out, "{}", format!("╔{}╗", "═".repeat(BOX_WIDTH)).cyan())?;
    writeln!(
        out,
        "{}{}{}",
        "║".cyan(),
        format!("{title:^width$}", width = BOX_WIDTH).cyan().bold(),
        "║".cyan()
    )?;
    writeln!(out, "{}", format!("╚{}╝", "═".repeat(BOX_WIDTH)).cyan())?;
    writeln!(out)
}

fn menu_box(out: &mut impl Write, title: &str, entries: &[&str], color: Color) -> io::Result<()> {
    let fill = BOX_WIDTH.saturating_sub(title.chars().count() + 3);
    writeln!(out, "{}", format!("┌─ {title} {}┐", "─".repeat(fill)).with(color))?;
    for (i, label) in entries.iter().enumerate() {
        let entry = format!("  {}. {label}", i + 1);
        writeln!(
            out,
            "{}{entry:<width$}{}",
            "│".with(color),
            "│".with(color),
            width = BOX_WIDTH
        )?;
    }
    writeln!(out, "{}", format!("└{}┘", "─".repeat(BOX_WIDTH)).with(color))
}

pub fn main_menu(out: &mut impl Write) -> io::Result<()> {
    let labels: Vec<&str> = MainChoice::ALL.iter().map(|c| c.label()).collect();
    menu_box(out, "Main Menu", &labels, Color::Blue)?;
    writeln!(out)
}

pub fn code_menu(out: &mut impl Write) -> io::Result<()> {
    let mut labels: Vec<&str> = CodeTarget::ALL.iter().map(|t| t.menu_label()).collect();
    labels.push("All Languages");
    writeln!(out)?;
    menu_box(out, "Generate Code", &labels, Color::Magenta)
}

pub fn error_line(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("[!] {message}").red())
}

pub fn notice(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("[i] {message}").yellow())
}

pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}\n", format!("[✓] Thanks for using {APP_NAME}!").green())
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}\n", format!("=== {APP_NAME} Help ===").cyan())?;

    writeln!(out, "{}", "Features:".bold())?;
    for feature in [
        "Support for all HTTP methods (GET, POST, PUT, DELETE, PATCH, etc.)",
        "Custom headers support",
        "Multiline JSON/body input",
        "Follow redirects",
        "Request timeout",
        "Verbose mode showing request and response headers",
        "Code generation for cURL, JavaScript, Python, Rust and Java",
        "Colored and formatted output",
        "Response time measurement",
    ] {
        writeln!(out, "  • {feature}")?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "Usage:".bold())?;
    writeln!(out, "  1. Select 'New Request' from the menu")?;
    writeln!(out, "  2. Enter request details (URL, method, headers, body)")?;
    writeln!(
        out,
        "  3. For JSON body: Type or paste (multiline supported), end with {BODY_TERMINATOR} on new line"
    )?;
    writeln!(out, "  4. View the response")?;
    writeln!(out, "  5. Generate code snippets in various languages\n")?;

    writeln!(out, "{}", "Tips:".bold())?;
    writeln!(
        out,
        "  • For POST/PUT with JSON, add header: Content-Type: application/json"
    )?;
    writeln!(
        out,
        "  • Use {BODY_TERMINATOR} on a new line to finish multiline body input\n"
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn request_summary(out: &mut impl Write, request: &Request) -> io::Result<()> {
    writeln!(out, "\n{}", "=== Last Request ===".cyan())?;
    writeln!(out, "{} {}", "URL:".bold(), request.url)?;
    writeln!(out, "{} {}", "Method:".bold(), request.method)?;

    if !request.headers.is_empty() {
        writeln!(out, "{}", "Headers:".bold())?;
        for header in &request.headers {
            writeln!(out, "  {header}")?;
        }
    }

    if !request.body.is_empty() {
        writeln!(out, "{}\n{}", "Body:".bold(), request.body)?;
    }

    writeln!(
        out,
        "{} {}",
        "Follow Redirects:".bold(),
        yes_no(request.follow_redirects)
    )?;
    writeln!(out, "{} {} seconds", "Timeout:".bold(), request.timeout_secs)?;
    writeln!(out, "{} {}", "Verbose:".bold(), yes_no(request.verbose))?;
    writeln!(out)
}

pub fn sending(out: &mut impl Write, request: &Request) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("[→] Sending {} request to {}...", request.method, request.url).yellow()
    )?;
    out.flush()
}

fn verbose_exchange(out: &mut impl Write, response: &Response) -> io::Result<()> {
    writeln!(out, "{}", format!("> {}", response.request_line).dark_grey())?;
    for (name, value) in &response.request_headers {
        writeln!(out, "{}", format!("> {name}: {value}").dark_grey())?;
    }
    writeln!(out, "{}", ">".dark_grey())?;

    let status_line = match response.reason {
        Some(reason) => format!("< {} {} {reason}", response.version, response.status),
        None => format!("< {} {}", response.version, response.status),
    };
    writeln!(out, "{}", status_line.dark_grey())?;
    for (name, value) in &response.headers {
        writeln!(out, "{}", format!("< {name}: {value}").dark_grey())?;
    }
    writeln!(out, "{}", "<".dark_grey())
}

pub fn exchange(out: &mut impl Write, exchange: &Exchange, verbose: bool) -> io::Result<()> {
    let response = match exchange {
        Exchange::Failed { message, .. } => {
            return writeln!(out, "{}", format!("[✗] Request failed: {message}").red());
        }
        Exchange::Completed(response) => response,
    };

    writeln!(
        out,
        "{}",
        format!("[✓] Response received in {:.2}ms", response.time_ms).green()
    )?;
    let status = format!("[i] Status Code: {}", response.status);
    if response.is_success() {
        writeln!(out, "{}", status.green())?;
    } else {
        writeln!(out, "{}", status.red())?;
    }

    if verbose {
        writeln!(out)?;
        verbose_exchange(out, response)?;
    }

    writeln!(out, "\n{}", "--- Response Body ---".cyan())?;
    writeln!(out, "{}", response.body.render())?;
    writeln!(out, "{}\n", "---------------------".cyan())
}

pub fn code_section(out: &mut impl Write, target: CodeTarget, request: &Request) -> io::Result<()> {
    writeln!(out, "\n{}", target.heading().green())?;
    writeln!(out, "{}", target.render(request))
}
