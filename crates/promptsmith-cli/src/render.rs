//! Human-readable report for a refined prompt

use std::fmt;

use colored::{ColoredString, Colorize};
use promptsmith::{Priority, RefinedPrompt};

/// Colored summary report, rendered through `Display`
pub struct Summary<'a>(pub &'a RefinedPrompt);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prompt = self.0;
        let intent = &prompt.core_intent;
        let functional = &prompt.functional_requirements;
        let technical = &prompt.technical_constraints;
        let metadata = &prompt.metadata;

        writeln!(f, "{}", "Refined prompt".bold())?;
        writeln!(f, "  Purpose: {}", intent.purpose.cyan())?;
        if let Some(audience) = &intent.target_audience {
            writeln!(f, "  Audience: {}", audience)?;
        }

        section(f, "Features", functional.primary_features.len())?;
        for feature in &functional.primary_features {
            writeln!(f, "  {} {}", badge(feature.priority), feature.feature)?;
        }

        section(f, "Interactions", functional.user_interactions.len())?;
        for interaction in &functional.user_interactions {
            writeln!(f, "  - {}", interaction)?;
        }

        writeln!(f, "\n{}", "Technical".bold())?;
        let platform = technical
            .platform
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(f, "  Platform: {}", platform.cyan())?;
        if !technical.technologies.is_empty() {
            writeln!(f, "  Technologies: {}", technical.technologies.join(", "))?;
        }
        if let Some(performance) = &technical.performance {
            writeln!(f, "  Performance: {}", performance)?;
        }

        section(f, "Deliverables", prompt.deliverables.outputs.len())?;
        for output in &prompt.deliverables.outputs {
            writeln!(f, "  - {}", output.description)?;
        }
        for milestone in &prompt.deliverables.milestones {
            writeln!(f, "  {} {}", "milestone".dimmed(), milestone.name)?;
        }

        writeln!(f, "\n{}", "Scores".bold())?;
        writeln!(f, "  Confidence:   {}", score(metadata.confidence_score))?;
        writeln!(f, "  Completeness: {}", score(metadata.completeness_score))?;
        write!(f, "  Sources: {}", prompt.source_inputs.original_format.dimmed())?;

        if !metadata.missing_information.is_empty() {
            writeln!(f, "\n\n{}", "Missing information".yellow().bold())?;
            write!(f, "  - {}", metadata.missing_information.join("\n  - "))?;
        }

        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str, count: usize) -> fmt::Result {
    writeln!(f, "\n{} ({})", title.bold(), count)
}

fn badge(priority: Priority) -> ColoredString {
    let label = format!("[{}]", priority);
    match priority {
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.dimmed(),
    }
}

fn score(value: f64) -> ColoredString {
    let text = format!("{:.2}", value);
    if value >= 0.8 {
        text.green()
    } else if value >= 0.6 {
        text.yellow()
    } else {
        text.red()
    }
}
