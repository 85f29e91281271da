use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::Modality;

/// One training session of the student's agenda, as served by the backend.
/// Immutable snapshot; re-fetched on explicit refresh only.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingSession {
    pub id: i64,
    pub plan_id: i64,
    pub student_id: i64,
    pub name: String,
    pub sequence: Option<i64>,
    pub main_type: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
}

impl TrainingSession {
    pub fn modality(&self) -> Modality {
        Modality::from_raw(self.main_type.as_deref().unwrap_or(""))
    }
}

/// A prescribed exercise within a session.
#[derive(Debug, Clone)]
pub struct SessionExercise {
    pub id: i64,
    pub order: i64,
    pub notes: Option<String>,
    pub exercise: ExerciseRef,
    pub params: ExerciseParams,
}

impl SessionExercise {
    pub fn is_endurance(&self) -> bool {
        self.exercise.modality.is_endurance()
    }

    pub fn strength(&self) -> Option<&StrengthParams> {
        match &self.params {
            ExerciseParams::Strength(p) => Some(p),
            ExerciseParams::Endurance(_) => None,
        }
    }

    pub fn endurance(&self) -> Option<&EnduranceParams> {
        match &self.params {
            ExerciseParams::Endurance(p) => Some(p),
            ExerciseParams::Strength(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRef {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub modality: Modality,
}

/// Modality-dependent prescription parameters.
///
/// On the wire this is a single loose JSON bag; the variant is picked from
/// the exercise's modality while deserializing the parent exercise.
#[derive(Debug, Clone)]
pub enum ExerciseParams {
    Strength(StrengthParams),
    Endurance(EnduranceParams),
}

impl ExerciseParams {
    pub fn notes(&self) -> Option<&str> {
        match self {
            Self::Strength(p) => p.notes.as_deref(),
            Self::Endurance(p) => p.notes.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrengthParams {
    #[serde(default, deserialize_with = "flex_u32")]
    pub sets: Option<u32>,
    #[serde(default, deserialize_with = "flex_string")]
    pub reps: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub load: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub rest: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub tempo: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub effort: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub block: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub biset_group: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub load_progression_type: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub load_progression_step: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub reps_progression_type: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub reps_progression_step: Option<String>,
    #[serde(default)]
    pub set_details: Option<Vec<SetLine>>,
    #[serde(default, deserialize_with = "flex_string")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnduranceParams {
    #[serde(default, deserialize_with = "flex_string")]
    pub duration_min: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub distance_km: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub pace_target: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub intensity_zone: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub terrain: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub notes: Option<String>,
}

/// One planned or performed (reps, load) pair of a strength exercise.
/// Values stay free-text until the backend interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLine {
    #[serde(default, deserialize_with = "flex_plain_string")]
    pub reps: String,
    #[serde(default, deserialize_with = "flex_plain_string")]
    pub load: String,
}

impl SetLine {
    pub fn new<R: Into<String>, L: Into<String>>(reps: R, load: L) -> Self {
        Self { reps: reps.into(), load: load.into() }
    }
}

impl<'de> Deserialize<'de> for SessionExercise {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            id: i64,
            #[serde(default)]
            order: Option<i64>,
            #[serde(default)]
            notes: Option<String>,
            exercise: ExerciseRef,
            #[serde(default)]
            params: Option<serde_json::Value>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let bag = wire.params.unwrap_or(serde_json::Value::Null);
        // Malformed params never abort the fetch; they degrade to an empty
        // prescription of the right variant.
        let params = if wire.exercise.modality.is_endurance() {
            ExerciseParams::Endurance(serde_json::from_value(bag).unwrap_or_default())
        } else {
            ExerciseParams::Strength(serde_json::from_value(bag).unwrap_or_default())
        };

        Ok(SessionExercise {
            id: wire.id,
            order: wire.order.unwrap_or(0),
            notes: wire.notes,
            exercise: wire.exercise,
            params,
        })
    }
}

/// Most recent recorded performance for one exercise.
#[derive(Debug, Clone, Deserialize)]
pub struct LastPerformance {
    pub exercise_id: i64,
    #[serde(default)]
    pub performed: Option<Performed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Performed {
    #[serde(default, deserialize_with = "flex_string")]
    pub reps: Option<String>,
    #[serde(default, deserialize_with = "flex_string")]
    pub load: Option<String>,
    #[serde(default)]
    pub set_details: Option<Vec<SetLine>>,
}

impl Performed {
    /// Whether there is anything worth offering as a prefill.
    pub fn has_data(&self) -> bool {
        self.set_details.as_ref().is_some_and(|d| !d.is_empty())
            || self.reps.as_deref().is_some_and(|v| !v.trim().is_empty())
            || self.load.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// Body of `POST /execucoes`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionCreate {
    pub student_id: i64,
    pub session_id: i64,
    pub status: &'static str,
    pub rpe: Option<i64>,
    pub comment: Option<String>,
    pub exercises: Vec<ExecutionExercise>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutionExercise {
    pub session_exercise_id: i64,
    pub performed: Option<PerformedSets>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformedSets {
    pub set_details: Vec<SetLine>,
}

/// One row of the student's execution history (read-only).
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionRecord {
    pub id: i64,
    pub session_id: i64,
    #[serde(default)]
    pub session_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub rpe: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
}

// The backend stores params as professor-typed free text, so numbers arrive
// either as JSON numbers or as strings. These accept both.
fn flex_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(json_to_string))
}

fn flex_plain_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(json_to_string).unwrap_or_default())
}

fn flex_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64().map(|n| n as u32),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn json_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
