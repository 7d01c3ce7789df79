//! Colored terminal output helpers.
//!
//! Purely cosmetic: everything user-facing goes through here so the rest of
//! the crate stays free of presentation concerns.

use crate::generator::Stats;
use crate::templates::{Template, TemplateInfo};
use colored::Colorize;

pub fn info(message: &str) {
    println!("{} {}", "→".cyan(), message);
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message.bold());
}

pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints the post-generation summary block.
pub fn summary(stats: &Stats) {
    println!();
    success("Project created successfully!");
    println!(
        "  Directories: {}",
        stats.dirs_created.to_string().green().bold()
    );
    println!("  Files:       {}", stats.files_created.to_string().green().bold());
    println!(
        "  Size:        {}",
        format!("{} bytes", stats.total_bytes).green().bold()
    );
    println!(
        "  Time:        {}",
        format!("{}ms", stats.elapsed.as_millis()).yellow().bold()
    );
}

pub fn template_list(templates: &[&TemplateInfo]) {
    for info in templates {
        println!("  {:<30} - {}", info.name, info.description);
    }
}

pub fn category_header(category: &str) {
    println!("{}", category.magenta().bold());
}

pub fn template_details(template: &Template) {
    let info = &template.info;

    println!("{} {}", "Template:".dimmed(), info.name.cyan().bold());
    println!("{} {}", "Description:".dimmed(), info.description);
    println!("{} {}", "Category:".dimmed(), info.category.magenta());
    println!("{} {}", "Version:".dimmed(), info.version.yellow());

    if !info.tags.is_empty() {
        println!("{} {}", "Tags:".dimmed(), info.tags.join(", "));
    }
    if let Some(author) = &info.author {
        println!("{} {}", "Author:".dimmed(), author);
    }
    if let Some(repository) = &info.repository {
        println!("{} {}", "Repository:".dimmed(), repository);
    }
}
