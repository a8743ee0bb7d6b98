//! Formatting of résumé sections into terminal text.
//!
//! Handlers never fail. Missing fields are replaced with a placeholder so a
//! partially filled document still renders every line.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;

use itertools::Itertools;

use crate::domain::models::Resume;

const NOT_AVAILABLE: &str = "N/A";
const NONE: &str = "None";

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(val) if !val.is_empty() => val,
        _ => placeholder,
    }
}

/// Reads the leading integer of `id`, ignoring leading whitespace and an
/// optional `+`. Anything after the digits is ignored.
fn leading_index(id: &str) -> Option<usize> {
    let id = id.trim_start();
    let unsigned = id.strip_prefix('+').unwrap_or(id);
    let digits = unsigned
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>();

    return digits.parse::<usize>().ok();
}

fn or_na(value: &Option<String>) -> &str {
    return or_placeholder(value, NOT_AVAILABLE);
}

/// Renders `items` as an indented bullet list, or `None` when there is
/// nothing to show.
fn bullets<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let lines = items
        .into_iter()
        .map(|item| format!("    - {item}"))
        .collect::<Vec<String>>();

    if lines.is_empty() {
        return format!("    {NONE}");
    }

    return lines.join("\n");
}

pub fn help_text() -> String {
    let text = r#"
Available Commands:
  who                 Show information from the "basics" section.
  work list           Show work history.
  work show <id>      Display details of a specific work entry.
  skills list         List all skills.
  references list     List all references.
  help                Show this help message.

Usage:
  <command> [options]

Use "help" for more information on a specific command.
"#;

    text.trim().to_string()
}

pub fn show_basics(resume: &Resume) -> String {
    let basics = match &resume.basics {
        Some(basics) => basics,
        None => return "No basics info found.".to_string(),
    };

    let location = basics.location.clone().unwrap_or_default();
    let profiles = bullets(basics.profiles.iter().flatten().map(|profile| {
        format!("{}: {}", or_na(&profile.network), or_na(&profile.url))
    }));

    return [
        "Basic Information:".to_string(),
        format!("  Name:        {}", or_na(&basics.name)),
        format!("  Label:       {}", or_na(&basics.label)),
        format!("  Email:       {}", or_na(&basics.email)),
        format!("  Phone:       {}", or_na(&basics.phone)),
        format!("  Website:     {}", or_na(&basics.url)),
        format!("  Summary:     {}", or_na(&basics.summary)),
        "  Location:".to_string(),
        format!("    City:      {}", or_na(&location.city)),
        format!("    Region:    {}", or_na(&location.region)),
        format!("    Country:   {}", or_na(&location.country)),
        "  Profiles:".to_string(),
        profiles,
    ]
    .join("\n");
}

pub fn list_work(resume: &Resume) -> String {
    let work = resume.work.as_deref().unwrap_or_default();
    if work.is_empty() {
        return "No work entries found.".to_string();
    }

    let entries = work
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "  {}. {} ({})",
                index + 1,
                or_na(&entry.name),
                or_na(&entry.company)
            )
        })
        .join("\n");

    return format!(
        "Available Work Entries:\n{entries}\n\nUse \"work show <id>\" to display details of a specific entry."
    );
}

/// `id` is the raw, 1-based argument string. It is echoed back verbatim when
/// no entry matches.
pub fn show_work(id: &str, resume: &Resume) -> String {
    let entry = leading_index(id).and_then(|index| resume.work_entry(index));

    let entry = match entry {
        Some(entry) => entry,
        None => return format!("Work entry with ID \"{id}\" not found."),
    };

    let highlights = bullets(entry.highlights.iter().flatten().cloned());

    return [
        "Work Entry Details:".to_string(),
        format!("  ID:            {id}"),
        format!("  Name:          {}", or_na(&entry.name)),
        format!("  Position:      {}", or_na(&entry.position)),
        format!("  Company:       {}", or_na(&entry.company)),
        format!("  Start Date:    {}", or_na(&entry.start_date)),
        format!("  End Date:      {}", or_placeholder(&entry.end_date, "Present")),
        format!("  Summary:       {}", or_na(&entry.summary)),
        "  Highlights:".to_string(),
        highlights,
    ]
    .join("\n");
}

pub fn list_skills(resume: &Resume) -> String {
    let skills = resume.skills.as_deref().unwrap_or_default();
    if skills.is_empty() {
        return "No skills found.".to_string();
    }

    let blocks = skills
        .iter()
        .map(|skill| {
            let keywords = bullets(skill.keywords.iter().flatten().cloned());
            format!(
                "  Name:        {}\n  Level:       {}\n  Keywords:\n{keywords}",
                or_na(&skill.name),
                or_na(&skill.level)
            )
        })
        .join("\n\n");

    return format!("Skills:\n\n{blocks}");
}

pub fn list_references(resume: &Resume) -> String {
    match &resume.references {
        Some(references) => references
            .iter()
            .map(|reference| or_na(&reference.name).to_string())
            .join("\n"),
        None => "No references found.".to_string(),
    }
}
