//! The interactive menu loop

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::app::configure::configure_request;
use crate::app::console::Console;
use crate::app::menu::{CodeChoice, MainChoice};
use crate::app::render;
use crate::codegen::CodeTarget;
use crate::models::Request;
use crate::network::execute_request;

/// Menu-driven shell holding the last configured request
pub struct Shell<R, W> {
    console: Console<R, W>,
    last_request: Request,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell {
            console: Console::new(input, output),
            last_request: Request::default(),
        }
    }

    pub fn last_request(&self) -> &Request {
        &self.last_request
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs until the user exits or input ends
    pub async fn run(&mut self) -> Result<()> {
        render::banner(self.console.output())?;

        loop {
            render::main_menu(self.console.output())?;
            let Some(line) = self.console.prompt("Select option: ")? else {
                tracing::info!("Input closed, exiting");
                render::farewell(self.console.output())?;
                return Ok(());
            };

            let choice = MainChoice::parse(&line);
            tracing::debug!(input = %line, ?choice, "Menu selection");

            match choice {
                Some(MainChoice::NewRequest) => {
                    self.last_request = configure_request(&mut self.console)?;
                    self.send_last_request().await?;
                }
                Some(MainChoice::ViewLastRequest) => {
                    if self.last_request.is_unset() {
                        render::error_line(self.console.output(), "No request made yet")?;
                    } else {
                        render::request_summary(self.console.output(), &self.last_request)?;
                    }
                }
                Some(MainChoice::GenerateCode) => {
                    if self.last_request.is_unset() {
                        render::error_line(
                            self.console.output(),
                            "No request to generate code from",
                        )?;
                    } else {
                        self.generate_code()?;
                    }
                }
                Some(MainChoice::Help) => render::help(self.console.output())?,
                Some(MainChoice::Exit) => {
                    render::farewell(self.console.output())?;
                    return Ok(());
                }
                None => render::error_line(self.console.output(), "Invalid option")?,
            }

            self.console.pause()?;
        }
    }

    async fn send_last_request(&mut self) -> Result<()> {
        let request = &self.last_request;
        render::sending(self.console.output(), request)?;
        let exchange = execute_request(request).await;
        render::exchange(self.console.output(), &exchange, request.verbose)?;
        Ok(())
    }

    fn generate_code(&mut self) -> Result<()> {
        render::code_menu(self.console.output())?;
        let line = self
            .console
            .prompt("\nSelect language: ")?
            .unwrap_or_default();

        let out = self.console.output();
        match CodeChoice::parse(&line) {
            Some(CodeChoice::Single(target)) => {
                render::code_section(out, target, &self.last_request)?;
            }
            Some(CodeChoice::All) => {
                for target in CodeTarget::ALL {
                    render::code_section(out, target, &self.last_request)?;
                }
            }
            None => render::error_line(out, "Invalid choice")?,
        }
        Ok(())
    }
}
