use super::model::CanonicalCompanyProfile;
use crate::normalize::format_chip_label;

fn push_fact(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(v) = value {
        lines.push(format!("- {}: {}", label, v));
    }
}

/// Deterministic human-readable summary of a canonical profile.
pub fn render_profile_markdown(profile: &CanonicalCompanyProfile) -> String {
    let mut lines = vec![format!("# {}", profile.company_name), String::new()];

    push_fact(&mut lines, "Website", profile.website_url.as_deref());
    push_fact(&mut lines, "Location", profile.location.as_deref());
    push_fact(&mut lines, "Industry", profile.industry.as_deref());
    push_fact(
        &mut lines,
        "Founded",
        profile.founded_year.map(|y| y.to_string()).as_deref(),
    );
    push_fact(
        &mut lines,
        "Employees",
        profile.employee_count.map(|n| n.to_string()).as_deref(),
    );
    push_fact(&mut lines, "Funding stage", profile.funding_stage.as_deref());
    push_fact(
        &mut lines,
        "Total funding (USD)",
        profile.total_funding_usd.map(|n| n.to_string()).as_deref(),
    );

    if !profile.keywords.is_empty() {
        let chips: Vec<String> = profile
            .keywords
            .iter()
            .map(|k| format_chip_label(k))
            .collect();
        lines.push(format!("- Keywords: {}", chips.join(", ")));
    }

    for (title, text) in [
        ("Problem", &profile.problem),
        ("Solution", &profile.solution),
        ("Why now", &profile.why_now),
        ("Traction", &profile.traction),
        ("Overview", &profile.overview_deduped),
    ] {
        if !text.is_empty() {
            lines.push(String::new());
            lines.push(format!("## {}", title));
            lines.push(text.clone());
        }
    }

    let insights = &profile.ai_insights_structured;
    for (title, bullets) in [
        ("Key strengths", &insights.key_strengths),
        ("Top risks", &insights.top_risks),
        ("Suggested next actions", &insights.suggested_next_actions),
    ] {
        if !bullets.is_empty() {
            lines.push(String::new());
            lines.push(format!("## {}", title));
            for b in bullets {
                lines.push(format!("- {}", b));
            }
        }
    }

    lines.join("\n")
}
