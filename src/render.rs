//! Document renderers for the two recipe operations.
//!
//! Both renderers are pure functions of the recipe definition and the
//! caller-supplied inputs: identical inputs always produce byte-identical
//! documents. Optional recipe fields that are absent emit no section at
//! all, never an empty header.

use crate::guidance;
use crate::recipes::RecipeDefinition;

/// Render the descriptive framework document for a recipe.
///
/// `sequence` is the recipe's resolved workflow position (None for special
/// recipes); the workflow-context annotation is derived from it via fixed
/// phase bands.
pub fn render_framework(
    recipe: &RecipeDefinition,
    sequence: Option<u32>,
    context: &str,
    mode: &str,
    focus: Option<&str>,
) -> String {
    let sequence_info = match sequence {
        Some(seq) => format!("Recipe #{seq}"),
        None => "Special Recipe".to_string(),
    };

    let mut doc = format!("# 📋 {}: {}\n\n", sequence_info, recipe.title);

    doc.push_str(&format!("**Selected Recipe**: {}\n", recipe.persona.name));
    doc.push_str(&format!("**Sequence Position**: {sequence_info}\n"));
    doc.push_str(&format!(
        "**Best Used For**: {}\n",
        recipe
            .when_to_use
            .as_deref()
            .unwrap_or("See usage context below")
    ));
    doc.push_str(&format!("**Analysis Mode**: {mode}\n\n"));

    if let Some(seq) = sequence {
        doc.push_str(&format!(
            "**Workflow Context**: This is step {seq} in the systematic MindForge workflow. "
        ));
        // Fixed phase bands over the workflow positions
        match seq {
            1 => doc.push_str("Start here for new projects or unfamiliar codebases.\n"),
            2..=3 => doc.push_str("Discovery and ideation phase.\n"),
            4..=8 => doc.push_str("Planning and architecture phase.\n"),
            9..=12 => doc.push_str("Implementation and refinement phase.\n"),
            14 => doc.push_str("Final validation phase.\n"),
            _ => {}
        }
        doc.push('\n');
    }

    doc.push_str("## Recipe Overview\n");
    doc.push_str(&format!("**Mindset**: {}\n", recipe.persona.mindset));
    doc.push_str(&format!("**Philosophy**: {}\n", recipe.persona.philosophy));
    doc.push_str(&format!("**Approach**: {}\n\n", recipe.persona.approach));

    doc.push_str("## Step-by-Step Recipe\n\n");
    doc.push_str("### 1. Context Preparation\n");
    doc.push_str(&format!("- Input: {context}\n"));
    if let Some(focus) = focus {
        doc.push_str(&format!("- Focus Area: {focus}\n"));
    }
    doc.push_str(&format!("- Analysis Depth: {mode} mode\n\n"));

    if let Some(guidelines) = &recipe.behavioral_guidelines {
        doc.push_str("### 2. Analysis Steps\n");
        doc.push_str(&guidance::format_steps(guidelines));
        doc.push('\n');
    }

    if let Some(output_format) = &recipe.output_format {
        doc.push_str("### 3. Expected Output Format\n");
        doc.push_str(output_format);
        doc.push_str("\n\n");
    }

    doc.push_str("### 4. Recipe Usage Tips\n");
    if let Some(use_cases) = &recipe.primary_use_cases {
        doc.push_str(&format!(
            "- **Primary Use Cases**: {}\n",
            use_cases.join(", ")
        ));
    }
    if let Some(avoid_when) = &recipe.avoid_when {
        doc.push_str(&format!("- **Avoid When**: {avoid_when}\n"));
    }
    if let Some(inputs) = &recipe.typical_inputs {
        doc.push_str(&format!("- **Typical Inputs**: {}\n", inputs.join(", ")));
    }
    doc.push('\n');

    doc.push_str("---\n\n");
    doc.push_str(
        "**Next Step**: Use `mindforge_apply_recipe` with your actual code/content to get concrete analysis results.",
    );

    doc
}

/// Render the instructional analysis document binding a recipe to a
/// concrete target.
///
/// The renderer never computes analytical content; it compiles the
/// instructions under which the downstream agent performs the analysis.
/// `target` and `focus` are embedded verbatim.
pub fn render_analysis(
    recipe: &RecipeDefinition,
    target: &str,
    mode: &str,
    focus: Option<&str>,
) -> String {
    let mut doc = format!("# 🔍 Analysis Report: {}\n\n", recipe.title);

    doc.push_str(&format!("**Analyst**: {}\n", recipe.persona.name));
    doc.push_str(&format!("**Mindset**: {}\n", recipe.persona.mindset));
    doc.push_str(&format!("**Philosophy**: {}\n", recipe.persona.philosophy));
    doc.push_str(&format!("**Approach**: {}\n\n", recipe.persona.approach));

    doc.push_str(&format!("## Core Mission\n{}\n\n", recipe.core_mission));

    // Unmatched mode values simply produce no mode block
    if let Some(variant) = recipe
        .mode_variants
        .as_ref()
        .and_then(|variants| variants.get(mode))
    {
        doc.push_str(&format!("## {} Mode Selected\n", mode.to_uppercase()));
        doc.push_str(&format!("**Description**: {}\n", variant.description));
        if let Some(time_estimate) = &variant.time_estimate {
            doc.push_str(&format!("**Time Estimate**: {time_estimate}\n"));
        }
        if let Some(output) = &variant.output {
            doc.push_str(&format!("**Expected Output**: {output}\n"));
        }
        doc.push('\n');
    }

    if let Some(guidelines) = &recipe.behavioral_guidelines {
        doc.push_str("## Behavioral Guidelines\n");
        doc.push_str(&guidance::flatten(guidelines, 0));
        doc.push('\n');
    }

    doc.push_str("## Your Task\n");
    doc.push_str(&format!("**Target to Analyze**:\n```\n{target}\n```\n\n"));

    if let Some(focus) = focus {
        doc.push_str(&format!("**Specific Focus**: {focus}\n\n"));
    }

    if let Some(output_format) = &recipe.output_format {
        doc.push_str(&format!("## Expected Output Format\n{output_format}\n\n"));
    }

    doc.push_str("## Usage Context\n");
    if let Some(use_cases) = &recipe.primary_use_cases {
        doc.push_str(&format!(
            "**Primary Use Cases**: {}\n",
            use_cases.join(", ")
        ));
    }
    if let Some(when_to_use) = &recipe.when_to_use {
        doc.push_str(&format!("**When to Use**: {when_to_use}\n"));
    }
    if let Some(output_style) = &recipe.output_style {
        doc.push_str(&format!("**Output Style**: {output_style}\n"));
    }
    doc.push('\n');

    if let Some(wisdom_notes) = &recipe.wisdom_notes {
        doc.push_str(&format!("## Wisdom Notes\n{wisdom_notes}\n\n"));
    }

    doc.push_str("---\n\n");
    doc.push_str(&format!(
        "Now, embody {} and analyze the provided target using {} mode depth. Apply your specialized expertise and perspective to deliver insights that align with your persona's strengths and approach.",
        recipe.persona.name, mode
    ));

    doc
}
