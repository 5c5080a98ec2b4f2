//! Core types for the carbon-match client.
//!
//! This crate defines the records exchanged with the matching service:
//! candidate projects, the qualitative rating vocabulary, and the sparse
//! preference query sent when the user asks for a match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable naming the matching service base URL.
pub const BASE_URL_ENV: &str = "CARBON_MATCH_BASE_URL";

/// Matching service base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Project types offered by the preference form. The leading empty entry
/// is the "no choice" option.
pub const PROJECT_TYPE_OPTIONS: &[&str] = &[
    "",
    "Direct Air Capture",
    "Reforestation",
    "Carbon Farming",
    "Renewable Energy",
    "EV Infrastructure",
    "Methane Capture",
];

/// Options for the three-level rating dropdowns.
pub const LOW_MEDIUM_HIGH_OPTIONS: &[&str] = &["", "Low", "Medium", "High"];

/// Options for the management expertise dropdown.
pub const MANAGEMENT_EXPERTISE_OPTIONS: &[&str] = &["", "Low", "Medium", "High", "Expert"];

/// A candidate project returned by the matching service.
///
/// Identity is the position within a fetch; there is no id field. Every
/// field is tolerant of absence so a malformed record still reaches the
/// table instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Category such as "Reforestation"
    #[serde(default, deserialize_with = "lenient::text")]
    pub project_type: String,
    /// Tonnes of carbon the project can remove
    #[serde(default, deserialize_with = "lenient::number")]
    pub carbon_reduction_potential: f64,
    /// Currency per tonne
    #[serde(default, deserialize_with = "lenient::number")]
    pub cost_effectiveness: f64,
    /// Annualised return rate, in percent
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub financial_returns: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub risk_profile: String,
    /// Lifespan in years
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub project_lifespan: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub environmental_impact: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub management_team_expertise: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mrv_transparency: String,
    /// Rank supplied by the matching service; opaque to the client
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
    /// Locally derived yield. Never read from or written to the wire.
    #[serde(skip)]
    pub yield_value: Option<i64>,
}

/// Field decoders for project records. A `null` or wrongly typed value
/// falls back to the field default instead of failing the whole list.
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match Loose::deserialize(deserializer)? {
            Loose::Number(n) => Some(n),
            Loose::Text(s) => s.trim().parse().ok(),
            Loose::Other(_) => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(optional_number(deserializer)?.unwrap_or_default())
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Loose::deserialize(deserializer)? {
            Loose::Text(s) => s,
            Loose::Number(n) => n.to_string(),
            Loose::Other(_) => String::new(),
        })
    }
}

impl Project {
    /// Create a project with the fields that drive the yield calculation.
    pub fn new(project_type: impl Into<String>, financial_returns: f64, project_lifespan: f64) -> Self {
        Self {
            project_type: project_type.into(),
            financial_returns: Some(financial_returns),
            project_lifespan: Some(project_lifespan),
            ..Default::default()
        }
    }

    /// Raw value of one of the qualitative rating columns.
    pub fn rating(&self, field: RatingField) -> &str {
        match field {
            RatingField::RiskProfile => &self.risk_profile,
            RatingField::EnvironmentalImpact => &self.environmental_impact,
            RatingField::ManagementTeamExpertise => &self.management_team_expertise,
            RatingField::MrvTransparency => &self.mrv_transparency,
        }
    }
}

/// Closed vocabulary of qualitative ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
    /// Only meaningful for management team expertise
    Expert,
}

impl Rating {
    /// Parse a rating label. Unknown labels are not an error; they simply
    /// have no rating.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            "Expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

/// The four project columns rendered with a rating colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingField {
    RiskProfile,
    EnvironmentalImpact,
    ManagementTeamExpertise,
    MrvTransparency,
}

impl RatingField {
    pub const ALL: [RatingField; 4] = [
        Self::RiskProfile,
        Self::EnvironmentalImpact,
        Self::ManagementTeamExpertise,
        Self::MrvTransparency,
    ];
}

/// Error returned when a field or bound name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {name}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownName {
    fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

/// Which end of a range is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl FromStr for Bound {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(UnknownName::new("bound", s)),
        }
    }
}

/// An inclusive numeric range; either end may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Range {
    /// A range with only one end set.
    pub fn only(bound: Bound, value: f64) -> Self {
        match bound {
            Bound::Min => Self {
                min: Some(value),
                max: None,
            },
            Bound::Max => Self {
                min: None,
                max: Some(value),
            },
        }
    }

    pub fn get(&self, bound: Bound) -> Option<f64> {
        match bound {
            Bound::Min => self.min,
            Bound::Max => self.max,
        }
    }
}

/// Numeric criteria expressed as ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeField {
    FinancialReturns,
    CostEffectiveness,
    CarbonReductionPotential,
    ProjectLifespan,
}

/// Qualitative criteria expressed as a single choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceField {
    ProjectType,
    RiskProfile,
    EnvironmentalImpact,
    ManagementTeamExpertise,
    MrvTransparency,
}

/// Yes/no criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    RegulatoryCompliance,
    Scalability,
}

impl RangeField {
    pub const ALL: [RangeField; 4] = [
        Self::FinancialReturns,
        Self::CostEffectiveness,
        Self::CarbonReductionPotential,
        Self::ProjectLifespan,
    ];

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::FinancialReturns => "financialReturns",
            Self::CostEffectiveness => "costEffectiveness",
            Self::CarbonReductionPotential => "carbonReductionPotential",
            Self::ProjectLifespan => "projectLifespan",
        }
    }
}

impl ChoiceField {
    pub const ALL: [ChoiceField; 5] = [
        Self::ProjectType,
        Self::RiskProfile,
        Self::EnvironmentalImpact,
        Self::ManagementTeamExpertise,
        Self::MrvTransparency,
    ];

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::ProjectType => "projectType",
            Self::RiskProfile => "riskProfile",
            Self::EnvironmentalImpact => "environmentalImpact",
            Self::ManagementTeamExpertise => "managementTeamExpertise",
            Self::MrvTransparency => "mrvTransparency",
        }
    }

    /// Values offered for this field, "no choice" first.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::ProjectType => PROJECT_TYPE_OPTIONS,
            Self::ManagementTeamExpertise => MANAGEMENT_EXPERTISE_OPTIONS,
            Self::RiskProfile | Self::EnvironmentalImpact | Self::MrvTransparency => {
                LOW_MEDIUM_HIGH_OPTIONS
            }
        }
    }
}

impl FlagField {
    pub const ALL: [FlagField; 2] = [Self::RegulatoryCompliance, Self::Scalability];

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::RegulatoryCompliance => "regulatoryCompliance",
            Self::Scalability => "scalability",
        }
    }
}

macro_rules! field_from_str {
    ($ty:ident, $kind:literal) => {
        impl FromStr for $ty {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|f| f.key() == s)
                    .ok_or_else(|| UnknownName::new($kind, s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

field_from_str!(RangeField, "range field");
field_from_str!(ChoiceField, "choice field");
field_from_str!(FlagField, "flag field");

/// Sparse filter criteria sent to the matching service.
///
/// An absent field means "no constraint" and is omitted from the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_returns: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_effectiveness: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_reduction_potential: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory_compliance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_lifespan: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_team_expertise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrv_transparency: Option<String>,
}

impl Preferences {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn range(&self, field: RangeField) -> Option<&Range> {
        self.range_slot(field).as_ref()
    }

    pub fn range_slot(&self, field: RangeField) -> &Option<Range> {
        match field {
            RangeField::FinancialReturns => &self.financial_returns,
            RangeField::CostEffectiveness => &self.cost_effectiveness,
            RangeField::CarbonReductionPotential => &self.carbon_reduction_potential,
            RangeField::ProjectLifespan => &self.project_lifespan,
        }
    }

    pub fn range_slot_mut(&mut self, field: RangeField) -> &mut Option<Range> {
        match field {
            RangeField::FinancialReturns => &mut self.financial_returns,
            RangeField::CostEffectiveness => &mut self.cost_effectiveness,
            RangeField::CarbonReductionPotential => &mut self.carbon_reduction_potential,
            RangeField::ProjectLifespan => &mut self.project_lifespan,
        }
    }

    pub fn choice(&self, field: ChoiceField) -> Option<&str> {
        match field {
            ChoiceField::ProjectType => self.project_type.as_deref(),
            ChoiceField::RiskProfile => self.risk_profile.as_deref(),
            ChoiceField::EnvironmentalImpact => self.environmental_impact.as_deref(),
            ChoiceField::ManagementTeamExpertise => self.management_team_expertise.as_deref(),
            ChoiceField::MrvTransparency => self.mrv_transparency.as_deref(),
        }
    }

    pub fn choice_slot_mut(&mut self, field: ChoiceField) -> &mut Option<String> {
        match field {
            ChoiceField::ProjectType => &mut self.project_type,
            ChoiceField::RiskProfile => &mut self.risk_profile,
            ChoiceField::EnvironmentalImpact => &mut self.environmental_impact,
            ChoiceField::ManagementTeamExpertise => &mut self.management_team_expertise,
            ChoiceField::MrvTransparency => &mut self.mrv_transparency,
        }
    }

    pub fn flag(&self, field: FlagField) -> Option<bool> {
        match field {
            FlagField::RegulatoryCompliance => self.regulatory_compliance,
            FlagField::Scalability => self.scalability,
        }
    }

    pub fn flag_slot_mut(&mut self, field: FlagField) -> &mut Option<bool> {
        match field {
            FlagField::RegulatoryCompliance => &mut self.regulatory_compliance,
            FlagField::Scalability => &mut self.scalability,
        }
    }
}
