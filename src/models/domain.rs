use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

/// Self-reported fitness level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// How hard a user likes to train
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum WorkoutStyle {
    #[serde(rename = "Pushing It")]
    #[strum(serialize = "Pushing It")]
    PushingIt,
    Recreational,
}

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Build a location, rejecting non-finite or out-of-range coordinates
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);

        valid.then_some(Self { lat, lon })
    }
}

/// Fitness profile of a user, as read from the profiles table
///
/// Every attribute except `id` is optional on the wire. Absent, null or
/// malformed values deserialize to "absent" so that a sparse profile still
/// takes part in ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_location")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub preferences: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub availability: Vec<String>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub workout_style: Option<WorkoutStyle>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub fitness_goals: Vec<String>,
}

impl Profile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_location<'de, D>(deserializer: D) -> Result<Option<Location>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(location_from_value))
}

fn location_from_value(value: &Value) -> Option<Location> {
    let fields = value.as_object()?;
    let lat = fields
        .get("lat")
        .or_else(|| fields.get("latitude"))?
        .as_f64()?;
    let lon = fields
        .get("lon")
        .or_else(|| fields.get("lng"))
        .or_else(|| fields.get("longitude"))?
        .as_f64()?;

    Location::new(lat, lon)
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse().ok()))
}

/// Accepts a list of strings, or a bare string as a single-element list
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => vec![s],
        _ => Vec::new(),
    })
}

/// Per-signal compatibility, each in [0, 1] before weighting
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub distance: f64,
    pub fitness_level: f64,
    pub preferences: f64,
    pub availability: f64,
    pub workout_style: f64,
    pub fitness_goals: f64,
}

/// Candidate paired with its score for one ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate: Profile,
    pub score: f64,
    pub sub_scores: SubScores,
    /// None when either side has no usable location
    pub distance_m: Option<f64>,
    pub shared_preferences: Vec<String>,
}

/// State of a connection request between two users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
}

/// Conversation row linking two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub user1_id: String,
    pub user2_id: String,
    #[serde(default)]
    pub initiator_id: Option<String>,
    #[serde(default)]
    pub match_status: Option<MatchStatus>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub distance: f64,
    pub fitness_level: f64,
    pub preferences: f64,
    pub availability: f64,
    pub workout_style: f64,
    pub fitness_goals: f64,
}

impl ScoringWeights {
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.distance,
            self.fitness_level,
            self.preferences,
            self.availability,
            self.workout_style,
            self.fitness_goals,
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.5,
            fitness_level: 0.1,
            preferences: 0.1,
            availability: 0.1,
            workout_style: 0.1,
            fitness_goals: 0.1,
        }
    }
}
