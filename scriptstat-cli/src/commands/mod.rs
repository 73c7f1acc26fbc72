//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use scriptstat_api::{CharacterClass, Language};
use scriptstat_core::{Matcher, Verdict, RULES};

use crate::output::OutputFormat;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify the characters of files, inline text or stdin
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List language buckets
    Languages,

    /// List structural buckets
    Categories,

    /// List classification rules in priority order
    Rules,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Text printed by the subcommand
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Languages => {
                for lang in Language::ALL {
                    out.push_str(&format!("{:<12} {}\n", lang.tag(), lang.name()));
                }
            }
            ListCommands::Categories => {
                for class in CharacterClass::ALL {
                    out.push_str(&format!("{}\n", class.tag()));
                }
            }
            ListCommands::Rules => {
                for (i, rule) in RULES.iter().enumerate() {
                    out.push_str(&format!(
                        "{:>2}. {:<20} -> {:<22} {}\n",
                        i + 1,
                        rule.name,
                        describe_verdict(&rule.verdict),
                        describe_matcher(&rule.matcher)
                    ));
                }
                out.push_str(&format!("    {:<20} -> {}\n", "(no match)", "other"));
            }
            ListCommands::Formats => {
                for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
                    out.push_str(&format!("{:<10} {}\n", format.as_str(), format.description()));
                }
            }
        }
        out
    }
}

fn describe_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Always(category) => category.tag().to_string(),
        Verdict::Refine {
            matched, otherwise, ..
        } => format!("{} / {}", matched.tag(), otherwise.tag()),
    }
}

fn describe_matcher(matcher: &Matcher) -> String {
    match matcher {
        Matcher::Ranges(ranges) => ranges
            .iter()
            .map(|r| format!("U+{:04X}-U+{:04X}", r.start, r.end))
            .collect::<Vec<_>>()
            .join(", "),
        Matcher::Points(points) => points
            .iter()
            .map(|p| format!("U+{p:04X}"))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_languages() {
        let out = ListCommands::Languages.render();
        assert_eq!(out.lines().count(), 8);
        assert!(out.starts_with("english      English\n"));
        assert!(out.contains("ukrainian    Ukrainian"));
    }

    #[test]
    fn test_list_categories() {
        assert_eq!(
            ListCommands::Categories.render(),
            "digits\npunctuation\nsymbols\nwhitespace\nother\n"
        );
    }

    #[test]
    fn test_list_rules_in_priority_order() {
        let out = ListCommands::Rules.render();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), RULES.len() + 1);
        assert!(lines[0].starts_with(" 1. chinese"));
        assert!(lines[0].contains("U+4E00-U+9FFF"));
        assert!(lines[2].contains("ukrainian / russian"));
        assert!(lines[4].contains("U+0130"));
        assert!(lines.last().unwrap().contains("(no match)"));
    }

    #[test]
    fn test_list_formats() {
        let out = ListCommands::Formats.render();
        assert!(out.contains("text"));
        assert!(out.contains("json"));
        assert!(out.contains("markdown"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }
}
