//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use dsforge_core::export::{ExportPlan, ExportReport};
use dsforge_core::{
    ComponentCategory, ComponentType, DesignSystemComponent, Selection, Store, StyleOverrides,
    StyleProperty, StyleRecord,
};
use unicode_width::UnicodeWidthStr;

/// Print components as a table. The selected one is marked.
pub fn print_components_table(components: &[&DesignSystemComponent], selected: Option<&str>) {
    if components.is_empty() {
        println!(
            "{}",
            "No components found. Create one with 'dsforge component new <type> <name>'.".dimmed()
        );
        return;
    }

    let name_width = (term_width().saturating_sub(60)).clamp(12, 32);

    println!(
        "  {} {} {:<14} {:>8} {:>7}",
        pad_right("ID", 28),
        pad_right("Name", name_width),
        "Category",
        "Variants",
        "States"
    );
    println!("{}", "─".repeat(28 + name_width + 36));

    for component in components {
        let marker = if selected == Some(component.id.as_str()) {
            "▸".cyan().bold()
        } else {
            " ".normal()
        };
        let name = pad_right(&truncate_visual(&component.name, name_width), name_width);
        println!(
            "{} {} {} {:<14} {:>8} {:>7}",
            marker,
            pad_right(&component.id, 28).dimmed(),
            name,
            category_colored(component.category),
            component.variants.len(),
            component.state_count()
        );
    }

    println!();
    println!("{} component(s) total", components.len());
}

/// Print one component with its variants and states.
pub fn print_component(component: &DesignSystemComponent, selection: &Selection) {
    println!(
        "{} {}",
        component.name.cyan().bold(),
        format!("({})", component.id).dimmed()
    );
    if !component.description.is_empty() {
        println!("{}", component.description);
    }
    println!();
    println!("{}: {}", "Type".bold(), component.component_type.display_name());
    println!("{}: {}", "Category".bold(), category_colored(component.category));
    println!(
        "{}: {}",
        "Updated".bold(),
        component.updated_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    for variant in &component.variants {
        let selected_variant = selection.component_id.as_deref() == Some(component.id.as_str())
            && selection.variant_id.as_deref() == Some(variant.id.as_str());
        let marker = if selected_variant { "▸".cyan().bold() } else { "●".normal() };
        println!("  {} {} {}", marker, variant.name.bold(), format!("({})", variant.id).dimmed());

        for state in &variant.states {
            let selected_state =
                selected_variant && selection.state_id.as_deref() == Some(state.id.as_str());
            let name = if selected_state {
                state.name.as_str().cyan().bold()
            } else if state.is_default() {
                state.name.as_str().normal()
            } else {
                state.name.as_str().yellow()
            };
            let detail = if state.styles.is_empty() {
                "inherits base".to_string()
            } else {
                let props: Vec<&str> = state.styles.properties().map(|p| p.as_str()).collect();
                props.join(", ")
            };
            println!(
                "      {} {:<12} {}",
                if selected_state { "▸".cyan() } else { "·".dimmed() },
                name,
                detail.dimmed()
            );
        }
    }
}

/// Print the type catalog grouped by category.
pub fn print_types(filter: Option<ComponentCategory>) {
    let mut current: Option<ComponentCategory> = None;
    let mut line = String::new();
    let width = term_width().max(40);

    let flush = |line: &mut String| {
        if !line.is_empty() {
            println!("    {}", line);
            line.clear();
        }
    };

    for ty in ComponentType::ALL {
        let category = ty.category();
        if filter.is_some_and(|f| f != category) {
            continue;
        }
        if current != Some(category) {
            flush(&mut line);
            println!();
            println!("  {}", category_colored(category));
            current = Some(category);
        }
        if UnicodeWidthStr::width(line.as_str()) + ty.as_str().len() + 2 > width - 4 {
            flush(&mut line);
        }
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(ty.as_str());
    }
    flush(&mut line);
}

/// Print a style record. Properties present in `overrides` are highlighted
/// as state overrides.
pub fn print_style(style: &StyleRecord, overrides: Option<&StyleOverrides>) {
    for property in StyleProperty::ALL {
        let overridden = overrides.is_some_and(|o| o.contains(property));
        let name = pad_right(property.as_str(), 18);
        let value = style.get(property).to_string();
        if overridden {
            println!("  {} {} {}", name.yellow(), value.yellow().bold(), "(state)".dimmed());
        } else {
            println!("  {} {}", name, value);
        }
    }
}

/// Print the current selection as "Component / Variant / state".
pub fn print_selection(store: &Store, selection: &Selection) {
    match store.resolve(selection) {
        Some((component, variant, state)) => println!(
            "{} {} / {} / {}",
            "Selected:".bold(),
            component.name.cyan(),
            variant.name,
            state.name.yellow()
        ),
        None => println!("{}", "Nothing selected.".dimmed()),
    }
}

/// Print a summary of an export plan.
pub fn print_plan_summary(plan: &ExportPlan) {
    for page in &plan.pages {
        println!("  {} {}", "■".cyan(), page.name.bold());
        for section in &page.sections {
            println!(
                "      {} {} {}",
                "·".dimmed(),
                section.title,
                format!("{} frame(s)", section.frames.len()).dimmed()
            );
        }
    }
}

pub fn print_export_report(report: &ExportReport) {
    println!(
        "{} Exported {} component(s): {} page(s), {} frame(s)",
        "✓".green().bold(),
        report.components.to_string().bold(),
        report.pages,
        report.frames
    );
}

fn category_colored(category: ComponentCategory) -> ColoredString {
    let label = category.label();
    match category {
        ComponentCategory::Actions => label.blue(),
        ComponentCategory::Forms => label.magenta(),
        ComponentCategory::DataDisplay => label.cyan(),
        ComponentCategory::Feedback => label.yellow(),
        ComponentCategory::Navigation => label.green(),
        ComponentCategory::Overlay => label.red(),
        ComponentCategory::Layout => label.white().dimmed(),
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("Button", 10), "Button");
        assert_eq!(truncate_visual("Navigation Bar", 8), "Naviga..");
        assert_eq!(truncate_visual("abc", 2), "..");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }
}
