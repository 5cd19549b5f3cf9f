//! Rules command - list the built-in rewrite rule table

use anyhow::Result;
use serde::Serialize;

use schemafix_core::rules::builtin_rules;

use crate::output;

#[derive(Serialize)]
struct RuleInfo<'a> {
    name: &'a str,
    pattern: &'a str,
    replacement: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    unless_following: Option<&'a str>,
}

pub fn run(json: bool) -> Result<()> {
    let rules = builtin_rules()?;

    if json {
        let infos: Vec<RuleInfo> = rules
            .iter()
            .map(|rule| RuleInfo {
                name: rule.name(),
                pattern: rule.pattern_str(),
                replacement: rule.replacement(),
                unless_following: rule.guard_str(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Rule", "Pattern", "Replacement", "Unless followed by"]);
    for rule in &rules {
        let replacement = if rule.replacement().is_empty() {
            "(line removed)"
        } else {
            rule.replacement()
        };
        table.add_row(vec![
            rule.name(),
            rule.pattern_str(),
            replacement,
            rule.guard_str().unwrap_or("-"),
        ]);
    }
    println!("{table}");

    Ok(())
}
