//! Pure layout of components into an export plan.

use std::collections::BTreeMap;

use super::model::{
    ExportFormat, ExportFrame, ExportOptions, ExportPage, ExportPlan, ExportSection, FrameTheme,
    OrganizationMethod,
};
use crate::component::model::DesignSystemComponent;
use crate::style::resolve_style;

pub const FRAME_WIDTH: f64 = 240.0;
pub const FRAME_HEIGHT: f64 = 120.0;
const FRAME_RADIUS: f64 = 8.0;
const SINGLE_PAGE_NAME: &str = "Design System";

/// Lay out `components` according to `options`.
///
/// Within a section, each component gets a block of rows (one per variant)
/// and columns (one per state). With dark mode, a mirrored block is placed
/// to the right of the light one.
pub fn build_export_plan(components: &[DesignSystemComponent], options: &ExportOptions) -> ExportPlan {
    let groups = group_components(components, options.organization_method);

    let sections: Vec<(String, ExportSection)> = groups
        .into_iter()
        .map(|(title, members)| {
            let section = build_section(&title, &members, options);
            (title, section)
        })
        .collect();

    let pages = match options.export_format {
        ExportFormat::Pages => sections
            .into_iter()
            .map(|(title, section)| ExportPage {
                name: title,
                sections: vec![section],
            })
            .collect(),
        ExportFormat::Components | ExportFormat::Frames => {
            if sections.is_empty() {
                Vec::new()
            } else {
                vec![ExportPage {
                    name: SINGLE_PAGE_NAME.to_string(),
                    sections: sections.into_iter().map(|(_, s)| s).collect(),
                }]
            }
        }
    };

    ExportPlan {
        format: options.export_format,
        pages,
    }
}

fn group_components(
    components: &[DesignSystemComponent],
    method: OrganizationMethod,
) -> Vec<(String, Vec<&DesignSystemComponent>)> {
    match method {
        OrganizationMethod::ByComponent => components
            .iter()
            .map(|c| (c.name.clone(), vec![c]))
            .collect(),
        OrganizationMethod::ByCategory => {
            let mut by_category: BTreeMap<_, Vec<&DesignSystemComponent>> = BTreeMap::new();
            for component in components {
                by_category.entry(component.category).or_default().push(component);
            }
            by_category
                .into_iter()
                .map(|(category, members)| (category.label().to_string(), members))
                .collect()
        }
        OrganizationMethod::Alphabetical => {
            let mut sorted: Vec<&DesignSystemComponent> = components.iter().collect();
            sorted.sort_by_key(|c| c.name.to_lowercase());

            let mut groups: Vec<(String, Vec<&DesignSystemComponent>)> = Vec::new();
            for component in sorted {
                let letter = component
                    .name
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| "#".to_string());
                let same_group = groups.last().is_some_and(|(current, _)| *current == letter);
                if same_group {
                    if let Some((_, members)) = groups.last_mut() {
                        members.push(component);
                    }
                } else {
                    groups.push((letter, vec![component]));
                }
            }
            groups
        }
    }
}

fn build_section(
    title: &str,
    members: &[&DesignSystemComponent],
    options: &ExportOptions,
) -> ExportSection {
    let spacing = options.frame_spacing.max(0.0);
    let mut frames = Vec::new();
    let mut documentation = Vec::new();
    let mut y = 0.0;

    for component in members {
        if options.include_documentation {
            documentation.push(format!(
                "{}: {} ({} variants, {} states)",
                component.name,
                component.description,
                component.variants.len(),
                component.state_count()
            ));
        }

        let variants = if options.include_variants {
            &component.variants[..]
        } else {
            &component.variants[..component.variants.len().min(1)]
        };

        let columns = variants
            .iter()
            .map(|v| if options.include_states { v.states.len() } else { 1 })
            .max()
            .unwrap_or(0);
        let block_width = columns as f64 * (FRAME_WIDTH + spacing);

        for (row, variant) in variants.iter().enumerate() {
            let states = if options.include_states {
                &variant.states[..]
            } else {
                &variant.states[..variant.states.len().min(1)]
            };
            let row_y = y + row as f64 * (FRAME_HEIGHT + spacing);

            for (col, state) in states.iter().enumerate() {
                let x = col as f64 * (FRAME_WIDTH + spacing);
                let style = resolve_style(variant, state);

                let mut themes = vec![(FrameTheme::Light, x)];
                if options.include_dark_mode {
                    themes.push((FrameTheme::Dark, x + block_width));
                }

                for (theme, frame_x) in themes {
                    frames.push(ExportFrame {
                        name: format!("{} / {} / {}", component.name, variant.name, state.name),
                        component_id: component.id.clone(),
                        variant_id: variant.id.clone(),
                        state_id: state.id.clone(),
                        theme,
                        x: frame_x,
                        y: row_y,
                        width: FRAME_WIDTH,
                        height: FRAME_HEIGHT,
                        corner_radius: if options.round_frame_corners { FRAME_RADIUS } else { 0.0 },
                        label: options
                            .show_labels
                            .then(|| format!("{} / {}", variant.name, state.name)),
                        icon: options
                            .include_icons
                            .then(|| component.component_type.as_str().to_string()),
                        style: style.clone(),
                    });
                }
            }
        }

        y += variants.len() as f64 * (FRAME_HEIGHT + spacing);
    }

    ExportSection {
        title: title.to_string(),
        documentation,
        frames,
    }
}
