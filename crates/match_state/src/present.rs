//! Table formatting shared by the browser and terminal front ends.

use core_types::{Project, Rating, RatingField};
use std::fmt::Display;

/// Colour used for a rating outside the field's vocabulary.
pub const NEUTRAL_COLOR: &str = "black";

const GREEN: &str = "#2ECC40";
const YELLOW: &str = "#FFDC00";
const RED: &str = "#FF4136";
const OLIVE: &str = "#3D9970";

/// Column headers of the project table, in display order.
pub const COLUMNS: [&str; 11] = [
    "Project Type",
    "Carbon Reduction Potential",
    "Cost Effectiveness",
    "Financial Returns",
    "Risk Profile",
    "Project Lifespan",
    "Environmental Impact",
    "Management Expertise",
    "MRV Mechanisms",
    "Score",
    "Yield",
];

/// Index of the clickable yield header.
pub const YIELD_COLUMN: usize = 10;

/// Background colour for a rating cell.
pub fn rating_color(field: RatingField, value: &str) -> &'static str {
    let Some(rating) = Rating::parse(value) else {
        return NEUTRAL_COLOR;
    };

    match (field, rating) {
        (RatingField::RiskProfile, Rating::Low) => GREEN,
        (RatingField::RiskProfile, Rating::Medium) => YELLOW,
        (RatingField::RiskProfile, Rating::High) => RED,
        (RatingField::ManagementTeamExpertise, Rating::Expert) => OLIVE,
        (_, Rating::Expert) => NEUTRAL_COLOR,
        (_, Rating::Low) => RED,
        (_, Rating::Medium) => YELLOW,
        (_, Rating::High) => GREEN,
    }
}

/// Insert thousands separators into the integer part of a number.
pub fn with_thousands(value: impl Display) -> String {
    let text = value.to_string();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let split = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(split);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}{tail}")
}

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// Only set on rating columns
    pub background: Option<&'static str>,
}

impl Cell {
    fn plain(text: String) -> Self {
        Self {
            text,
            background: None,
        }
    }

    fn rating(project: &Project, field: RatingField) -> Self {
        let value = project.rating(field);
        Self {
            text: value.to_string(),
            background: Some(rating_color(field, value)),
        }
    }
}

fn suffixed(value: Option<f64>, suffix: &str) -> String {
    value.map(|v| format!("{v}{suffix}")).unwrap_or_default()
}

/// Render a project as table cells, in `COLUMNS` order.
pub fn row_cells(project: &Project) -> Vec<Cell> {
    vec![
        Cell::plain(project.project_type.clone()),
        Cell::plain(format!(
            "{} tonnes",
            with_thousands(project.carbon_reduction_potential)
        )),
        Cell::plain(format!("£ {} /tonne", project.cost_effectiveness)),
        Cell::plain(suffixed(project.financial_returns, "%")),
        Cell::rating(project, RatingField::RiskProfile),
        Cell::plain(suffixed(project.project_lifespan, " years")),
        Cell::rating(project, RatingField::EnvironmentalImpact),
        Cell::rating(project, RatingField::ManagementTeamExpertise),
        Cell::rating(project, RatingField::MrvTransparency),
        Cell::plain(project.score.map(|s| s.to_string()).unwrap_or_default()),
        Cell::plain(
            project
                .yield_value
                .map(|y| format!("£{}", with_thousands(y)))
                .unwrap_or_default(),
        ),
    ]
}
