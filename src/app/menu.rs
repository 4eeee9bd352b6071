//! Menu selections

use crate::codegen::CodeTarget;

/// Top-level menu entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainChoice {
    NewRequest,
    ViewLastRequest,
    GenerateCode,
    Help,
    Exit,
}

impl MainChoice {
    pub const ALL: [MainChoice; 5] = [
        MainChoice::NewRequest,
        MainChoice::ViewLastRequest,
        MainChoice::GenerateCode,
        MainChoice::Help,
        MainChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainChoice::NewRequest => "New Request",
            MainChoice::ViewLastRequest => "View Last Request",
            MainChoice::GenerateCode => "Generate Code",
            MainChoice::Help => "Help",
            MainChoice::Exit => "Exit",
        }
    }

    /// Parses a 1-based menu number
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }
}

/// Code generation sub-menu entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeChoice {
    Single(CodeTarget),
    All,
}

impl CodeChoice {
    /// Parses 1-5 as a single target and 6 as "all languages"
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        match index {
            n if n == CodeTarget::ALL.len() + 1 => Some(CodeChoice::All),
            n => CodeTarget::ALL
                .get(n.checked_sub(1)?)
                .copied()
                .map(CodeChoice::Single),
        }
    }
}
